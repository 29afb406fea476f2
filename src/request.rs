//! The outgoing request and inbound response types the pipeline threads
//! through every middleware stage. Deliberately minimal — just enough
//! surface for operations to marshal onto and for the signer to mutate.

use http::{HeaderMap, HeaderName, HeaderValue, Method};

use crate::error::Error;

/// A request under construction. The endpoint resolver sets `uri`; an
/// operation's `marshal_http` adds headers/query parameters/body; the
/// signer is the last stage to touch `headers` and may replace `body`
/// wholesale (the streamed signer does, to frame it).
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub uri: url::Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl OutgoingRequest {
    pub fn new(method: Method, uri: url::Url) -> Self {
        Self {
            method,
            uri,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Insert a header, replacing any existing values under that name.
    /// Most call sites want this; use [`OutgoingRequest::append_header`]
    /// when a header may legitimately repeat.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| Error::MarshalFailed(format!("invalid header name {name:?}: {err}")))?;
        let value = value.into();
        let header_value = HeaderValue::from_str(&value)
            .map_err(|err| Error::MarshalFailed(format!("invalid header value {value:?}: {err}")))?;
        self.headers.insert(name, header_value);
        Ok(())
    }

    /// Add a header value without removing prior values under the same
    /// name — SigV4 joins repeated header values with `,` at signing time.
    pub fn append_header(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| Error::MarshalFailed(format!("invalid header name {name:?}: {err}")))?;
        let value = value.into();
        let header_value = HeaderValue::from_str(&value)
            .map_err(|err| Error::MarshalFailed(format!("invalid header value {value:?}: {err}")))?;
        self.headers.append(name, header_value);
        Ok(())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn remove_header(&mut self, name: &str) -> Option<String> {
        self.headers
            .remove(name)
            .and_then(|v| v.to_str().map(str::to_string).ok())
    }

    /// Append a query parameter to the request URI.
    pub fn push_query(&mut self, name: &str, value: &str) {
        self.uri.query_pairs_mut().append_pair(name, value);
    }

    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }
}

/// The response the transport handed back, before an operation's
/// `unmarshal_http` interprets it.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Returned alongside every call's result, success or failure, so callers
/// can inspect what was actually sent (and, if available, received).
#[derive(Debug, Clone)]
pub struct Metadata {
    pub request: OutgoingRequest,
    pub response: Option<Response>,
}
