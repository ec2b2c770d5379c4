//! HTTP response handling.
//!
//! [`Response`] is a concrete snapshot of what the transport returned:
//! status code, headers, and the raw body bytes. Decoding is deferred to
//! the accessors, so a malformed body only fails when someone asks for it.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::Result;

/// HTTP response with status, headers, and raw body.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Raw body bytes.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Decode the body as JSON into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        crate::from_json(&self.body)
    }

    /// Decode the body as an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] if the body is not valid JSON.
    pub fn json_value(&self) -> Result<Value> {
        crate::from_json(&self.body)
    }

    /// Interpret the body as a list of JSON records.
    ///
    /// Returns `Ok(Some(records))` when the body is a JSON array whose
    /// elements are all objects, `Ok(None)` for any other valid JSON shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] if the body is not valid JSON.
    pub fn records(&self) -> Result<Option<Vec<Map<String, Value>>>> {
        let Value::Array(items) = self.json_value()? else {
            return Ok(None);
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(map) => records.push(map),
                _ => return Ok(None),
            }
        }
        Ok(Some(records))
    }

    /// The body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(&self) -> std::result::Result<String, std::str::Utf8Error> {
        std::str::from_utf8(&self.body).map(str::to_string)
    }
}
