//! URL and query-parameter composition.
//!
//! Pure functions of the settings snapshot plus call-time arguments. No
//! retry, no caching, no key validation: unknown parameters pass through
//! for the target API to judge.

use std::collections::HashMap;

use restbook_core::{Error, Result};
use url::Url;

use crate::RequestSettings;

/// Compose the absolute URL for one call.
///
/// Segment order: scheme+host from the base URL, `:port` when `api_port`
/// is set and not 80/443, then the version segment (if any), the resource
/// segment, and the endpoint suffix (if any). The endpoint is appended
/// after the resource, never a replacement for it.
///
/// # Errors
///
/// Returns an error when the base URL does not parse or cannot carry a
/// path or port.
pub fn compose_url(settings: &RequestSettings, endpoint: Option<&str>) -> Result<Url> {
    let mut url = Url::parse(settings.base_url.trim_end_matches('/'))?;

    if let Some(port) = settings.api_port
        && port != 80
        && port != 443
    {
        url.set_port(Some(port))
            .map_err(|()| Error::configuration(format!("cannot set port on {}", settings.base_url)))?;
    }

    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            Error::configuration(format!("base URL cannot carry a path: {}", settings.base_url))
        })?;
        segments.pop_if_empty();
        if let Some(version) = &settings.api_version {
            push_segments(&mut segments, version);
        }
        push_segments(&mut segments, &settings.resource_name);
        if let Some(endpoint) = endpoint {
            push_segments(&mut segments, endpoint);
        }
    }

    Ok(url)
}

/// Push a path fragment, splitting on `/` so multi-segment endpoints like
/// `42/posts` land as separate segments instead of one encoded blob.
fn push_segments(segments: &mut url::PathSegmentsMut<'_>, value: &str) {
    for segment in value.split('/').filter(|s| !s.is_empty()) {
        segments.push(segment);
    }
}

/// Merge query defaults under explicit per-call parameters.
///
/// Defaults form the base; explicit entries win on key collision. Keys and
/// values pass through unaltered, empty or not.
#[must_use]
pub fn merge_params(
    defaults: &HashMap<String, String>,
    explicit: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = defaults.clone();
    merged.extend(
        explicit
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestSettings;

    fn settings(base_url: &str) -> RequestSettings {
        RequestSettings::builder()
            .base_url(base_url)
            .resource_name("users")
            .build()
            .expect("valid settings")
    }

    #[test]
    fn url_with_all_segments() {
        let mut settings = settings("https://api.example.com");
        settings.api_port = Some(8443);
        settings.api_version = Some("v1".to_string());

        let url = compose_url(&settings, Some("123")).expect("url");
        assert_eq!(url.as_str(), "https://api.example.com:8443/v1/users/123");
    }

    #[test]
    fn url_without_version() {
        let url = compose_url(&settings("https://api.example.com"), None).expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/users");
    }

    #[test]
    fn url_version_resource_endpoint_order() {
        let mut settings = settings("https://api.example.com");
        settings.api_version = Some("v1".to_string());

        let url = compose_url(&settings, Some("123")).expect("url");
        assert_eq!(url.path(), "/v1/users/123");
    }

    #[test]
    fn url_default_port_omitted() {
        let mut settings = settings("https://api.example.com");
        settings.api_port = Some(443);

        let url = compose_url(&settings, None).expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/users");
    }

    #[test]
    fn url_trailing_slash_base() {
        let url = compose_url(&settings("https://api.example.com/"), None).expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/users");
    }

    #[test]
    fn url_multi_segment_endpoint() {
        let url =
            compose_url(&settings("https://api.example.com"), Some("42/posts")).expect("url");
        assert_eq!(url.path(), "/users/42/posts");
    }

    #[test]
    fn url_invalid_base() {
        let result = compose_url(&settings("not a url"), None);
        assert!(result.is_err());
    }

    #[test]
    fn merge_explicit_wins() {
        let defaults = HashMap::from([
            ("limit".to_string(), "100".to_string()),
            ("format".to_string(), "json".to_string()),
        ]);
        let explicit = HashMap::from([("limit".to_string(), "5".to_string())]);

        let merged = merge_params(&defaults, &explicit);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("limit").map(String::as_str), Some("5"));
        assert_eq!(merged.get("format").map(String::as_str), Some("json"));
    }

    #[test]
    fn merge_keeps_all_keys() {
        let defaults = HashMap::from([("a".to_string(), "1".to_string())]);
        let explicit = HashMap::from([("b".to_string(), "2".to_string())]);

        let merged = merge_params(&defaults, &explicit);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_empty_values_pass_through() {
        let defaults = HashMap::new();
        let explicit = HashMap::from([("filter".to_string(), String::new())]);

        let merged = merge_params(&defaults, &explicit);
        assert_eq!(merged.get("filter").map(String::as_str), Some(""));
    }
}
