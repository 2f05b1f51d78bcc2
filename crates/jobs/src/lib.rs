pub mod rule_reload;
pub mod runner;

pub use rule_reload::RuleReloadJob;
pub use runner::JobRunner;
