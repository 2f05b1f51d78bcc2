mod list_rules;
mod reload_rules;
mod set_rule_status;

pub use list_rules::{ListRulesUseCase, RuleSummary};
pub use reload_rules::ReloadRulesUseCase;
pub use set_rule_status::SetRuleStatusUseCase;
