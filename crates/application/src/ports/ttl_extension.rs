use hostcache_domain::ResolvedDecision;
use std::fmt;

/// Hook that may observe and rewrite a decision after the bypass gate.
///
/// Extensions only run for responses that matched a rule.
pub trait TtlExtension: Send + Sync {
    fn name(&self) -> &str;

    fn alter<'a>(&self, decision: ResolvedDecision<'a>) -> ResolvedDecision<'a>;
}

/// Adapter turning a closure into a named [`TtlExtension`].
pub struct FnTtlExtension<F> {
    name: String,
    f: F,
}

impl<F> FnTtlExtension<F>
where
    F: for<'a> Fn(ResolvedDecision<'a>) -> ResolvedDecision<'a> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> TtlExtension for FnTtlExtension<F>
where
    F: for<'a> Fn(ResolvedDecision<'a>) -> ResolvedDecision<'a> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn alter<'a>(&self, decision: ResolvedDecision<'a>) -> ResolvedDecision<'a> {
        (self.f)(decision)
    }
}

impl<F> fmt::Debug for FnTtlExtension<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTtlExtension")
            .field("name", &self.name)
            .finish()
    }
}
