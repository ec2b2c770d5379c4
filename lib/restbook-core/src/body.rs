//! Request body variants and JSON helpers.

use bytes::Bytes;

use crate::Result;
use crate::multipart::Form;

/// Body of an outgoing request.
///
/// The variants spell out the combinations a call can produce: no body at
/// all, a JSON document, or a multipart form carrying files plus any
/// accompanying fields.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON-encoded payload.
    Json(Bytes),
    /// Multipart form data.
    Multipart(Form),
}

impl RequestBody {
    /// Build a JSON body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self> {
        to_json(value).map(Self::Json)
    }

    /// `Content-Type` implied by the variant, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json".to_string()),
            Self::Multipart(form) => Some(form.content_type()),
        }
    }

    /// Returns `true` for [`RequestBody::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Encode into wire bytes. An empty body encodes as zero bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        match self {
            Self::Empty => Bytes::new(),
            Self::Json(bytes) => bytes,
            Self::Multipart(form) => form.encode(),
        }
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a failed decode reports the exact path to
/// the field that did not match (e.g., "user.address.city").
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_content_types() {
        assert_eq!(RequestBody::Empty.content_type(), None);

        let json = RequestBody::json(&serde_json::json!({"a": 1})).expect("serialize");
        assert_eq!(json.content_type().as_deref(), Some("application/json"));

        let form = Form::with_boundary("b").text("field", "value");
        let multipart = RequestBody::Multipart(form);
        assert_eq!(
            multipart.content_type().as_deref(),
            Some("multipart/form-data; boundary=b")
        );
    }

    #[test]
    fn body_is_empty() {
        assert!(RequestBody::Empty.is_empty());
        let json = RequestBody::json(&serde_json::json!({})).expect("serialize");
        assert!(!json.is_empty());
    }

    #[test]
    fn body_into_bytes() {
        assert!(RequestBody::Empty.into_bytes().is_empty());

        let json = RequestBody::json(&serde_json::json!({"a": 1})).expect("serialize");
        assert_eq!(json.into_bytes().as_ref(), br#"{"a":1}"#);
    }

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
            age: u32,
        }

        let user = User {
            name: "Alice".to_string(),
            age: 30,
        };

        let bytes = to_json(&user).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"name":"Alice","age":30}"#);
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            name: String,
        }

        let bytes = br#"{"name":"Alice"}"#;
        let user: User = from_json(bytes).expect("deserialize");
        assert_eq!(
            user,
            User {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn from_json_syntax_error() {
        let result: Result<serde_json::Value> = from_json(b"not json");
        let err = result.expect_err("should fail");
        assert!(err.is_decode());
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        let bytes = br#"{"address":{}}"#;
        let result: Result<User> = from_json(bytes);

        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(
            msg.contains("address"),
            "Expected path 'address' in error: {msg}"
        );
        assert!(
            msg.contains("city"),
            "Expected field 'city' mentioned in error: {msg}"
        );
    }
}
