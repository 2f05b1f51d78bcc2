use hostcache_application::ports::CacheableResponse;
use http::header::{
    HeaderName, HeaderValue, AGE, CACHE_CONTROL, DATE, ETAG, EXPIRES, LAST_MODIFIED,
};
use http::{HeaderMap, Response};
use std::time::SystemTime;
use tracing::warn;

/// Status codes a shared cache may store by default.
const CACHEABLE_STATUSES: [u16; 7] = [200, 203, 300, 301, 302, 404, 410];

/// Parsed `Cache-Control` directives, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CacheControl {
    directives: Vec<(String, Option<String>)>,
}

impl CacheControl {
    fn parse(headers: &HeaderMap) -> Self {
        let directives = headers
            .get_all(CACHE_CONTROL)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(split_directives)
            .filter_map(|part| {
                let part = part.trim();
                if part.is_empty() {
                    return None;
                }
                // Values keep their original quoting so they render back unchanged
                match part.split_once('=') {
                    Some((name, value)) => Some((
                        name.trim().to_ascii_lowercase(),
                        Some(value.trim().to_string()),
                    )),
                    None => Some((part.to_ascii_lowercase(), None)),
                }
            })
            .collect();

        Self { directives }
    }

    fn has(&self, name: &str) -> bool {
        self.directives.iter().any(|(n, _)| n == name)
    }

    fn seconds(&self, name: &str) -> Option<u32> {
        self.directives
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
            .and_then(|v| v.trim_matches('"').parse().ok())
    }

    fn set(&mut self, name: &str, value: Option<String>) {
        match self.directives.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.directives.push((name.to_string(), value)),
        }
    }

    fn remove(&mut self, name: &str) {
        self.directives.retain(|(n, _)| n != name);
    }

    fn render(&self) -> String {
        self.directives
            .iter()
            .map(|(name, value)| match value {
                Some(v) => format!("{}={}", name, v),
                None => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Split a `Cache-Control` value on commas outside quoted strings.
fn split_directives(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in value.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);

    parts
}

fn header_date(headers: &HeaderMap, name: HeaderName) -> Option<SystemTime> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| httpdate::parse_http_date(v.trim()).ok())
}

/// Whole seconds from `earlier` to `later`, 0 when `later` is not after it.
fn seconds_between(earlier: SystemTime, later: SystemTime) -> u32 {
    later
        .duration_since(earlier)
        .map(|d| u32::try_from(d.as_secs()).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// [`CacheableResponse`] over an `http::Response`.
///
/// Directives written by the annotator (`public`, `s-maxage`, `max-age`)
/// replace existing ones in place; every other directive is preserved.
pub struct HttpResponseCache<'a, B> {
    response: &'a mut Response<B>,
}

impl<'a, B> HttpResponseCache<'a, B> {
    pub fn new(response: &'a mut Response<B>) -> Self {
        Self { response }
    }

    fn cache_control(&self) -> CacheControl {
        CacheControl::parse(self.response.headers())
    }

    fn store_cache_control(&mut self, cache_control: &CacheControl) {
        let rendered = cache_control.render();
        match HeaderValue::from_str(&rendered) {
            Ok(value) => {
                self.response.headers_mut().insert(CACHE_CONTROL, value);
            }
            Err(e) => warn!(error = %e, value = %rendered, "Unable to write Cache-Control"),
        }
    }

    /// `Age` header, or the time elapsed since `Date` when absent.
    fn age(&self) -> u32 {
        let headers = self.response.headers();
        if let Some(age) = headers
            .get(AGE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
        {
            return age;
        }

        header_date(headers, DATE)
            .map(|date| seconds_between(date, SystemTime::now()))
            .unwrap_or(0)
    }

    /// Lifetime implied by `Expires`, measured from `Date` (or now).
    fn expires_max_age(&self) -> Option<u32> {
        let headers = self.response.headers();
        let expires = header_date(headers, EXPIRES)?;
        let date = header_date(headers, DATE).unwrap_or_else(SystemTime::now);
        Some(seconds_between(date, expires))
    }
}

impl<B> CacheableResponse for HttpResponseCache<'_, B> {
    fn is_cacheable(&self) -> bool {
        if !CACHEABLE_STATUSES.contains(&self.status_code()) {
            return false;
        }

        let cache_control = self.cache_control();
        if cache_control.has("no-store") || cache_control.has("private") {
            return false;
        }

        let headers = self.response.headers();
        let validateable = headers.contains_key(ETAG) || headers.contains_key(LAST_MODIFIED);
        let fresh = self.max_age().is_some_and(|max_age| max_age > self.age());

        validateable || fresh
    }

    fn status_code(&self) -> u16 {
        self.response.status().as_u16()
    }

    fn max_age(&self) -> Option<u32> {
        let cache_control = self.cache_control();
        cache_control
            .seconds("s-maxage")
            .or_else(|| cache_control.seconds("max-age"))
            .or_else(|| self.expires_max_age())
    }

    fn set_shared_max_age(&mut self, seconds: u32) {
        let mut cache_control = self.cache_control();
        cache_control.remove("private");
        cache_control.set("public", None);
        cache_control.set("s-maxage", Some(seconds.to_string()));
        self.store_cache_control(&cache_control);
    }

    /// The client TTL counts from now, so it is added to the current age.
    fn set_client_ttl(&mut self, seconds: u32) {
        let max_age = self.age().saturating_add(seconds);
        let mut cache_control = self.cache_control();
        cache_control.set("max-age", Some(max_age.to_string()));
        self.store_cache_control(&cache_control);
    }

    fn set_header(&mut self, name: &'static str, value: &str) {
        let header_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(n) => n,
            Err(e) => {
                warn!(header = name, error = %e, "Invalid header name");
                return;
            }
        };

        match HeaderValue::from_str(value) {
            Ok(v) => {
                self.response.headers_mut().insert(header_name, v);
            }
            Err(e) => warn!(header = name, error = %e, "Header value not representable"),
        }
    }
}
