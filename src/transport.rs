//! The last link in the pipeline: turns an [`OutgoingRequest`] into bytes
//! on the wire and a [`Response`] back. `HttpTransport` exists so tests
//! and alternate executors can swap in a fake without touching the
//! pipeline.

use std::io::Read;

use crate::error::Error;
use crate::request::{OutgoingRequest, Response};

/// Implementations are shared across concurrent calls behind an `Arc`, so
/// `Send + Sync`; `send` itself borrows immutably, matching `ureq::Agent`,
/// which is cheap to clone and safe to call concurrently.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &OutgoingRequest) -> Result<Response, Error>;
}

/// A blocking transport backed by a single reusable [`ureq::Agent`].
pub struct DefaultTransport {
    agent: ureq::Agent,
}

impl DefaultTransport {
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for DefaultTransport {
    fn default() -> Self {
        Self::new(ureq::AgentBuilder::new().build())
    }
}

impl HttpTransport for DefaultTransport {
    fn send(&self, request: &OutgoingRequest) -> Result<Response, Error> {
        let mut call = self.agent.request(request.method.as_str(), request.uri.as_str());
        for name in request.headers.keys() {
            let joined = request
                .headers
                .get_all(name)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .collect::<Vec<_>>()
                .join(",");
            call = call.set(name.as_str(), &joined);
        }

        let result = if request.body.is_empty() {
            call.call()
        } else {
            call.send_bytes(&request.body)
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(Error::TransportFailed(transport.to_string()));
            }
        };

        read_response(response)
    }
}

fn read_response(response: ureq::Response) -> Result<Response, Error> {
    let status = response.status();
    let mut headers = http::HeaderMap::new();
    for name in response.headers_names() {
        if let Some(value) = response.header(&name) {
            if let (Ok(name), Ok(value)) = (
                http::HeaderName::from_bytes(name.as_bytes()),
                http::HeaderValue::from_str(value),
            ) {
                headers.append(name, value);
            }
        }
    }

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|err| Error::TransportFailed(err.to_string()))?;

    Ok(Response { status, headers, body })
}
