use hostcache_domain::ResolvedDecision;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{AccessControlPort, CacheableResponse, RuleStorePort, DIAGNOSTIC_HEADER};
use crate::services::TtlExtensionRegistry;

/// Applies the matched domain rule to an outgoing response.
///
/// Pipeline, per response:
///   1. skip unless the transport marked the response cacheable
///   2. resolve the host against the live snapshot
///   3. select TTLs for the status code, falling back to the current max-age
///   4. bypass gate from the access-control signal
///   5. registered TTL extensions, in order
///   6. write shared TTL, client TTL and the diagnostic header
///
/// When no rule matches the response is left untouched.
pub struct AnnotateResponseUseCase {
    store: Arc<dyn RuleStorePort>,
    access_control: Arc<dyn AccessControlPort>,
    extensions: TtlExtensionRegistry,
}

impl AnnotateResponseUseCase {
    pub fn new(store: Arc<dyn RuleStorePort>, access_control: Arc<dyn AccessControlPort>) -> Self {
        Self {
            store,
            access_control,
            extensions: TtlExtensionRegistry::new(),
        }
    }

    pub fn with_extensions(mut self, extensions: TtlExtensionRegistry) -> Self {
        self.extensions = extensions;
        self
    }

    /// Returns `true` when the response was annotated.
    #[instrument(skip(self, response), level = "debug")]
    pub fn execute<R>(&self, host: Option<&str>, response: &mut R) -> bool
    where
        R: CacheableResponse + ?Sized,
    {
        if !response.is_cacheable() {
            return false;
        }

        let snapshot = self.store.snapshot();
        let Some(rule) = snapshot.resolve(host) else {
            return false;
        };

        let fallback = response.max_age().unwrap_or(0);
        let signal = self.access_control.bypass_signal();
        let decision =
            ResolvedDecision::decide(Some(rule), response.status_code(), fallback, signal);

        if decision.bypassed {
            debug!(rule_id = %rule.id, "Access control active; shared max-age forced to 0");
        }

        let decision = self.extensions.apply(decision);
        let Some(matched) = decision.matched_rule else {
            return false;
        };

        response.set_shared_max_age(decision.shared_max_age);
        response.set_client_ttl(decision.client_max_age);
        response.set_header(DIAGNOSTIC_HEADER, matched.label());

        debug!(
            rule_id = %matched.id,
            status = decision.status_code,
            shared_max_age = decision.shared_max_age,
            client_max_age = decision.client_max_age,
            "Domain cache rule applied"
        );

        true
    }
}
