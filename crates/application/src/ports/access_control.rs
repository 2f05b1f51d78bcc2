use hostcache_domain::BypassSignal;

/// Source of the `bypass_active` / `authenticated` pair.
///
/// Credential verification belongs to the implementor; by the time the
/// annotator asks, the answer must already be resolved.
pub trait AccessControlPort: Send + Sync {
    fn bypass_signal(&self) -> BypassSignal;
}
