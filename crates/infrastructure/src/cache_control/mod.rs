pub mod response;
pub mod rule_store;
pub mod shield;

pub use response::HttpResponseCache;
pub use rule_store::RuleStore;
pub use shield::ShieldAccessControl;
