//! hostcache Domain Layer
pub mod bypass;
pub mod cache_rule;
pub mod config;
pub mod decision;
pub mod errors;
pub mod rule_snapshot;

pub use bypass::BypassSignal;
pub use cache_rule::{
    CacheRule, CacheSettings, CacheState, HttpCacheSettings, PageCacheSettings, HTTP_CACHE_KEYS,
    PAGE_CACHE_KEYS, PROTECTED_RULE_ID,
};
pub use config::{CliOverrides, Config, ConfigError};
pub use decision::{compute_ttls, ResolvedDecision, TtlPair};
pub use errors::DomainError;
pub use rule_snapshot::{CompiledRule, RuleSnapshot};
