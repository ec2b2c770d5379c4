//! Request settings for one target API.

use std::collections::HashMap;

use restbook_core::{Error, Result};

/// Static description of how to reach one API resource.
///
/// Built once per target API, then owned by a
/// [`ResourceClient`](crate::ResourceClient). The header map is live state:
/// the owning client rewrites the `Authorization` entry in place when its
/// auth helpers are called, and every request snapshots the map at call
/// time.
#[derive(Debug, Clone)]
pub struct RequestSettings {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    /// Port to dial when it is not a scheme default (80/443).
    pub api_port: Option<u16>,
    /// Version path segment, e.g. `v1`.
    pub api_version: Option<String>,
    /// Path segment naming the target collection.
    pub resource_name: String,
    /// Headers sent with every request. Last write wins per name.
    pub headers: HashMap<String, String>,
    /// Query defaults merged under explicit per-call parameters.
    pub default_params: HashMap<String, String>,
}

impl RequestSettings {
    /// Create a new settings builder.
    #[must_use]
    pub fn builder() -> RequestSettingsBuilder {
        RequestSettingsBuilder::default()
    }
}

/// Builder for [`RequestSettings`].
#[derive(Debug, Clone, Default)]
pub struct RequestSettingsBuilder {
    base_url: Option<String>,
    api_port: Option<u16>,
    api_version: Option<String>,
    resource_name: Option<String>,
    headers: HashMap<String, String>,
    default_params: HashMap<String, String>,
}

impl RequestSettingsBuilder {
    /// Set the base URL (scheme and host).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the API port.
    #[must_use]
    pub const fn api_port(mut self, port: u16) -> Self {
        self.api_port = Some(port);
        self
    }

    /// Set the version path segment.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set the resource path segment.
    #[must_use]
    pub fn resource_name(mut self, resource: impl Into<String>) -> Self {
        self.resource_name = Some(resource.into());
        self
    }

    /// Add a default header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add multiple default headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Add a default query parameter.
    #[must_use]
    pub fn default_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_params.insert(name.into(), value.into());
        self
    }

    /// Add multiple default query parameters.
    #[must_use]
    pub fn default_params(mut self, params: impl IntoIterator<Item = (String, String)>) -> Self {
        self.default_params.extend(params);
        self
    }

    /// Build the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when `base_url` or `resource_name`
    /// is missing or empty. This is the fail-fast point: no request can be
    /// composed from settings that never validated.
    pub fn build(self) -> Result<RequestSettings> {
        let base_url = self
            .base_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::configuration("base_url must not be empty"))?;
        let resource_name = self
            .resource_name
            .filter(|resource| !resource.is_empty())
            .ok_or_else(|| Error::configuration("resource_name must not be empty"))?;

        Ok(RequestSettings {
            base_url,
            api_port: self.api_port,
            api_version: self.api_version,
            resource_name,
            headers: self.headers,
            default_params: self.default_params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_build() {
        let settings = RequestSettings::builder()
            .base_url("https://api.example.com")
            .api_port(8443)
            .api_version("v2")
            .resource_name("users")
            .header("Accept", "application/json")
            .default_param("limit", "100")
            .build()
            .expect("valid settings");

        assert_eq!(settings.base_url, "https://api.example.com");
        assert_eq!(settings.api_port, Some(8443));
        assert_eq!(settings.api_version.as_deref(), Some("v2"));
        assert_eq!(settings.resource_name, "users");
        assert_eq!(
            settings.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            settings.default_params.get("limit").map(String::as_str),
            Some("100")
        );
    }

    #[test]
    fn settings_minimal() {
        let settings = RequestSettings::builder()
            .base_url("https://api.example.com")
            .resource_name("users")
            .build()
            .expect("valid settings");

        assert!(settings.api_port.is_none());
        assert!(settings.api_version.is_none());
        assert!(settings.headers.is_empty());
        assert!(settings.default_params.is_empty());
    }

    #[test]
    fn settings_missing_base_url() {
        let err = RequestSettings::builder()
            .resource_name("users")
            .build()
            .expect_err("should fail");

        assert!(err.is_configuration());
    }

    #[test]
    fn settings_empty_base_url() {
        let err = RequestSettings::builder()
            .base_url("")
            .resource_name("users")
            .build()
            .expect_err("should fail");

        assert!(err.is_configuration());
    }

    #[test]
    fn settings_missing_resource() {
        let err = RequestSettings::builder()
            .base_url("https://api.example.com")
            .build()
            .expect_err("should fail");

        assert!(err.is_configuration());
    }
}
