mod ttl_extension_registry;

pub use ttl_extension_registry::TtlExtensionRegistry;
