use super::Repositories;
use hostcache_application::use_cases::{
    AnnotateResponseUseCase, ListRulesUseCase, ReloadRulesUseCase, SetRuleStatusUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub reload_rules: Arc<ReloadRulesUseCase>,
    pub set_rule_status: Arc<SetRuleStatusUseCase>,
    pub list_rules: Arc<ListRulesUseCase>,
    pub annotate: Arc<AnnotateResponseUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        let reload_rules = Arc::new(ReloadRulesUseCase::new(
            repos.rules.clone(),
            repos.store.clone(),
        ));

        Self {
            set_rule_status: Arc::new(SetRuleStatusUseCase::new(
                repos.rules.clone(),
                reload_rules.clone(),
            )),
            list_rules: Arc::new(ListRulesUseCase::new(repos.store.clone())),
            annotate: Arc::new(AnnotateResponseUseCase::new(
                repos.store.clone(),
                repos.access_control.clone(),
            )),
            reload_rules,
        }
    }
}
