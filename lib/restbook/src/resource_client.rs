//! Resource client: verb methods, per-call builder, auth helpers.

use std::collections::HashMap;

use base64::Engine as _;
use bytes::Bytes;
use restbook_core::{
    Error, Form, Method, Part, Request, RequestBody, Response, Result, Transport,
};
use serde_json::Value;

use crate::client::HyperTransport;
use crate::compose;
use crate::config::TransportConfig;
use crate::settings::RequestSettings;
use crate::table::DataTable;

const AUTHORIZATION: &str = "Authorization";

/// Client for one API resource.
///
/// Owns its [`RequestSettings`] exclusively. The auth helpers rewrite the
/// `Authorization` header in the owned settings, so they apply to every
/// subsequent call; each verb call snapshots the headers at send time and
/// keeps no other state.
///
/// # Example
///
/// ```ignore
/// let mut client = ResourceClient::new(settings);
/// client.set_bearer("my-token");
/// let response = client.get().endpoint("42").send().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ResourceClient<T = HyperTransport> {
    settings: RequestSettings,
    transport: T,
}

impl ResourceClient<HyperTransport> {
    /// Create a client with the default hyper transport.
    #[must_use]
    pub fn new(settings: RequestSettings) -> Self {
        Self::with_transport(settings, HyperTransport::new())
    }

    /// Create a client with a custom transport configuration.
    #[must_use]
    pub fn with_transport_config(settings: RequestSettings, config: TransportConfig) -> Self {
        Self::with_transport(settings, HyperTransport::with_config(config))
    }
}

impl<T: Transport> ResourceClient<T> {
    /// Create a client over an explicit transport.
    pub fn with_transport(settings: RequestSettings, transport: T) -> Self {
        Self {
            settings,
            transport,
        }
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &RequestSettings {
        &self.settings
    }

    /// Set `Authorization: Bearer <token>` for all subsequent calls,
    /// replacing any prior authorization scheme.
    pub fn set_bearer(&mut self, token: impl AsRef<str>) {
        self.settings.headers.insert(
            AUTHORIZATION.to_string(),
            format!("Bearer {}", token.as_ref()),
        );
    }

    /// Set basic-auth credentials for all subsequent calls, replacing any
    /// prior authorization scheme.
    pub fn set_basic(&mut self, username: impl AsRef<str>, password: impl AsRef<str>) {
        let credentials = format!("{}:{}", username.as_ref(), password.as_ref());
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        self.settings
            .headers
            .insert(AUTHORIZATION.to_string(), format!("Basic {encoded}"));
    }

    /// Start a GET call.
    #[must_use]
    pub fn get(&self) -> Call<'_, T> {
        Call::new(self, Method::Get)
    }

    /// Start a POST call.
    #[must_use]
    pub fn post(&self) -> Call<'_, T> {
        Call::new(self, Method::Post)
    }

    /// Start a PUT call.
    #[must_use]
    pub fn put(&self) -> Call<'_, T> {
        Call::new(self, Method::Put)
    }

    /// Start a PATCH call.
    #[must_use]
    pub fn patch(&self) -> Call<'_, T> {
        Call::new(self, Method::Patch)
    }

    /// Start a DELETE call.
    #[must_use]
    pub fn delete(&self) -> Call<'_, T> {
        Call::new(self, Method::Delete)
    }
}

/// One pending request, built up before sending.
///
/// Created by the verb methods on [`ResourceClient`].
#[derive(Debug)]
pub struct Call<'a, T> {
    client: &'a ResourceClient<T>,
    method: Method,
    endpoint: Option<String>,
    params: HashMap<String, String>,
    payload: Option<Value>,
    files: Vec<Part>,
}

impl<'a, T: Transport> Call<'a, T> {
    fn new(client: &'a ResourceClient<T>, method: Method) -> Self {
        Self {
            client,
            method,
            endpoint: None,
            params: HashMap::new(),
            payload: None,
            files: Vec::new(),
        }
    }

    /// Append an endpoint suffix after the resource segment.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Add a query parameter. Overrides a same-named default parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Add multiple query parameters.
    #[must_use]
    pub fn params(mut self, params: impl IntoIterator<Item = (String, String)>) -> Self {
        self.params.extend(params);
        self
    }

    /// Attach a JSON payload.
    ///
    /// Sent as the JSON body, or as accompanying form fields when files
    /// are attached too. Rejected at send time on GET calls.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn payload<S: serde::Serialize>(mut self, value: &S) -> Result<Self> {
        self.payload = Some(serde_json::to_value(value)?);
        Ok(self)
    }

    /// Attach a file for multipart upload.
    #[must_use]
    pub fn file(
        mut self,
        field: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.files.push(Part::file(field, filename, data));
        self
    }

    /// Send the request and return the raw response.
    ///
    /// Non-2xx statuses are not errors; the response comes back as-is.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be composed or the
    /// transport fails.
    pub async fn send(self) -> Result<Response> {
        let client = self.client;
        let request = self.build_request()?;
        client.transport.send(request).await
    }

    /// Send the request, then convert a list-shaped JSON body into a table.
    ///
    /// A body that decodes to anything other than an array of objects is
    /// not an error: the response comes back untouched with no table.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, or with
    /// [`Error::Decode`] when the body is not valid JSON at all.
    pub async fn send_table(self) -> Result<Tabulated> {
        let client = self.client;
        let request = self.build_request()?;
        let response = client.transport.send(request).await?;

        let table = response
            .records()?
            .map(|records| DataTable::from_records(&records));

        Ok(Tabulated { response, table })
    }

    fn build_request(self) -> Result<Request> {
        let settings = &self.client.settings;

        if !self.method.allows_body() && (self.payload.is_some() || !self.files.is_empty()) {
            return Err(Error::invalid_request(format!(
                "{} requests cannot carry a body",
                self.method
            )));
        }

        let url = compose::compose_url(settings, self.endpoint.as_deref())?;
        let merged = compose::merge_params(&settings.default_params, &self.params);
        let body = Self::build_body(self.payload, self.files)?;

        Ok(Request::builder(self.method, url)
            .headers(settings.headers.clone())
            .query_pairs(merged)
            .body(body)
            .build())
    }

    /// Assemble the tagged body: multipart when files are present (payload
    /// entries ride along as form fields), JSON for a bare payload, empty
    /// otherwise.
    fn build_body(payload: Option<Value>, files: Vec<Part>) -> Result<RequestBody> {
        if files.is_empty() {
            return match payload {
                Some(value) => RequestBody::json(&value),
                None => Ok(RequestBody::Empty),
            };
        }

        let mut form = Form::new();
        match payload {
            Some(Value::Object(fields)) => {
                for (name, value) in fields {
                    let text = match value {
                        Value::String(text) => text,
                        other => other.to_string(),
                    };
                    form = form.text(name, text);
                }
            }
            Some(_) => {
                return Err(Error::invalid_request(
                    "multipart form fields must be a JSON object",
                ));
            }
            None => {}
        }
        for part in files {
            form = form.part(part);
        }

        Ok(RequestBody::Multipart(form))
    }
}

/// Result of a table-producing call: the raw response, plus the table when
/// the body was list-shaped.
#[derive(Debug, Clone)]
pub struct Tabulated {
    response: Response,
    table: Option<DataTable>,
}

impl Tabulated {
    /// The raw response, untouched.
    #[must_use]
    pub const fn response(&self) -> &Response {
        &self.response
    }

    /// The converted table, when the body was a list of records.
    #[must_use]
    pub const fn table(&self) -> Option<&DataTable> {
        self.table.as_ref()
    }

    /// Consume into (response, table).
    #[must_use]
    pub fn into_parts(self) -> (Response, Option<DataTable>) {
        (self.response, self.table)
    }
}
