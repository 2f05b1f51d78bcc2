use hostcache_domain::ResolvedDecision;
use std::sync::Arc;
use tracing::trace;

use crate::ports::TtlExtension;

/// Ordered list of TTL extensions.
///
/// Extensions run in registration order; each receives the decision returned
/// by the previous one.
#[derive(Clone, Default)]
pub struct TtlExtensionRegistry {
    extensions: Vec<Arc<dyn TtlExtension>>,
}

impl TtlExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, extension: Arc<dyn TtlExtension>) {
        self.extensions.push(extension);
    }

    pub fn with(mut self, extension: Arc<dyn TtlExtension>) -> Self {
        self.register(extension);
        self
    }

    pub fn apply<'a>(&self, decision: ResolvedDecision<'a>) -> ResolvedDecision<'a> {
        self.extensions.iter().fold(decision, |current, extension| {
            let before = current.shared_max_age;
            let altered = extension.alter(current);
            if altered.shared_max_age != before {
                trace!(
                    extension = extension.name(),
                    from = before,
                    to = altered.shared_max_age,
                    "TTL extension altered shared max-age"
                );
            }
            altered
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl std::fmt::Debug for TtlExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlExtensionRegistry")
            .field("extensions", &self.names())
            .finish()
    }
}
