/// Diagnostic header carrying the label of the matched rule.
pub const DIAGNOSTIC_HEADER: &str = "Domain-Http-Cache-Control";

/// The slice of an outgoing response the annotator reads and writes.
///
/// Cacheability and the initial max-age are decided by the transport layer
/// before the annotator runs.
pub trait CacheableResponse {
    fn is_cacheable(&self) -> bool;

    fn status_code(&self) -> u16;

    /// Current shared (or, failing that, client) max-age in seconds.
    fn max_age(&self) -> Option<u32>;

    fn set_shared_max_age(&mut self, seconds: u32);

    fn set_client_ttl(&mut self, seconds: u32);

    fn set_header(&mut self, name: &'static str, value: &str);
}
