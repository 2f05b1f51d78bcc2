pub mod response;
pub mod rules;

// Re-export use cases
pub use response::AnnotateResponseUseCase;
pub use rules::{ListRulesUseCase, ReloadRulesUseCase, RuleSummary, SetRuleStatusUseCase};
