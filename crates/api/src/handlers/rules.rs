use crate::{dto::RuleResponse, middleware::request_host, state::AppState};
use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip_all, name = "api_list_rules")]
pub async fn list_rules(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Json<Vec<RuleResponse>> {
    let host = request_host(&headers, &uri);
    let rules: Vec<RuleResponse> = state
        .list_rules
        .execute(host.as_deref())
        .into_iter()
        .map(RuleResponse::from)
        .collect();

    debug!(count = rules.len(), host = ?host, "Rules listed");
    Json(rules)
}
