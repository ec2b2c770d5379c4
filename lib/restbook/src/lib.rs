//! Issue REST requests from interactive sessions and render the responses.
//!
//! A [`RequestSettings`] value describes one target API (base URL, port,
//! version segment, resource, default headers and query parameters). A
//! [`ResourceClient`] owns those settings and exposes one method per HTTP
//! verb; each returns a per-call builder. List-shaped JSON responses can be
//! converted into a [`DataTable`] for display.
//!
//! # Example
//!
//! ```ignore
//! use restbook::{RequestSettings, ResourceClient, display};
//!
//! let settings = RequestSettings::builder()
//!     .base_url("https://api.example.com")
//!     .api_version("v1")
//!     .resource_name("users")
//!     .build()?;
//!
//! let mut client = ResourceClient::new(settings);
//! client.set_bearer("my-token");
//!
//! let response = client.get().endpoint("42").send().await?;
//! println!("{}", display::render(&response));
//!
//! let listing = client.get().param("limit", "10").send_table().await?;
//! if let Some(table) = listing.table() {
//!     println!("{table}");
//! }
//! ```

mod client;
pub mod compose;
mod config;
pub mod display;
mod resource_client;
mod settings;
mod table;

pub use client::HyperTransport;
pub use config::{TransportConfig, TransportConfigBuilder};
pub use resource_client::{Call, ResourceClient, Tabulated};
pub use settings::{RequestSettings, RequestSettingsBuilder};
pub use table::DataTable;

// Re-export core types
pub use restbook_core::{
    Error, Form, Method, Part, Request, RequestBody, RequestBuilder, Response, Result, Transport,
    from_json, to_json,
};
