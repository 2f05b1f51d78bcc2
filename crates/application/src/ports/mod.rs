mod access_control;
mod cacheable_response;
mod rule_repository;
mod rule_store;
mod ttl_extension;

pub use access_control::AccessControlPort;
pub use cacheable_response::{CacheableResponse, DIAGNOSTIC_HEADER};
pub use rule_repository::RuleRepository;
pub use rule_store::{PublishSummary, RuleStorePort};
pub use ttl_extension::{FnTtlExtension, TtlExtension};
