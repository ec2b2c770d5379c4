//! Core types for the restbook interactive REST client.
//!
//! This crate provides the foundational types used by restbook:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`RequestBody`] - Tagged request body (empty, JSON, or multipart)
//! - [`Response`] - HTTP response with deferred decode accessors
//! - [`Error`] and [`Result`] - Error handling
//! - [`Transport`] - Capability trait for sending requests
//! - [`Form`] and [`Part`] - Multipart form data

mod body;
mod error;
mod method;
mod multipart;
mod request;
mod response;
mod transport;

pub use body::{RequestBody, from_json, to_json};
pub use error::{Error, Result};
pub use method::Method;
pub use multipart::{Form, Part};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::Transport;
