use hostcache_application::use_cases::{AnnotateResponseUseCase, ListRulesUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub annotate: Arc<AnnotateResponseUseCase>,
    pub list_rules: Arc<ListRulesUseCase>,
}
