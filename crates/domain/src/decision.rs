use crate::{BypassSignal, CacheRule};

/// Shared and client TTLs selected for one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPair {
    pub shared_max_age: u32,
    pub client_max_age: u32,
}

/// Select the TTLs for a response with `status_code`.
///
/// Selection order for the shared TTL:
///   1. exact status: 404, 302, 301, anything else falls to the page cache age
///   2. any status >= 500 re-selects the 5xx age, overriding step 1
///
/// Missing keys fall back to `fallback_max_age`. The client TTL is the rule's
/// `http_max_age` (0 when unset) regardless of status. Without a rule both
/// values are `fallback_max_age`; callers treat that case as a no-op.
pub fn compute_ttls(rule: Option<&CacheRule>, status_code: u16, fallback_max_age: u32) -> TtlPair {
    let Some(rule) = rule else {
        return TtlPair {
            shared_max_age: fallback_max_age,
            client_max_age: fallback_max_age,
        };
    };

    let http = &rule.cache.http;

    let base = match status_code {
        404 => http.not_found_max_age,
        302 => http.found_max_age,
        301 => http.moved_permanently_max_age,
        _ => rule.cache.page.page_cache_maximum_age,
    };

    let selected = if status_code >= 500 {
        http.server_error_max_age
    } else {
        base
    };

    TtlPair {
        shared_max_age: selected.unwrap_or(fallback_max_age),
        client_max_age: http.http_max_age.unwrap_or(0),
    }
}

/// Per-response outcome of rule resolution and TTL selection.
///
/// Borrows the matched rule from the snapshot that was live when the
/// response was processed; it is discarded once the response is annotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDecision<'a> {
    pub matched_rule: Option<&'a CacheRule>,
    pub status_code: u16,
    pub shared_max_age: u32,
    pub client_max_age: u32,
    pub bypassed: bool,
}

impl<'a> ResolvedDecision<'a> {
    /// Run TTL selection followed by the bypass gate.
    pub fn decide(
        matched_rule: Option<&'a CacheRule>,
        status_code: u16,
        fallback_max_age: u32,
        signal: BypassSignal,
    ) -> Self {
        let ttls = compute_ttls(matched_rule, status_code, fallback_max_age);

        let (shared_max_age, bypassed) = match matched_rule {
            Some(_) => {
                let gated = signal.gate(ttls.shared_max_age);
                (gated, signal.forces_zero())
            }
            None => (ttls.shared_max_age, false),
        };

        Self {
            matched_rule,
            status_code,
            shared_max_age,
            client_max_age: ttls.client_max_age,
            bypassed,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched_rule.is_some()
    }
}
