//! The seam between a typed S3 operation and the pipeline: every
//! operation's input knows how to marshal itself onto an
//! [`OutgoingRequest`], and its output knows how to unmarshal itself
//! from a [`Response`].

use crate::error::Error;
use crate::request::{OutgoingRequest, Response};

/// Implemented by every operation's input type.
pub trait HttpRequestMarshaler {
    fn marshal_http(&self, request: &mut OutgoingRequest) -> Result<(), Error>;
}

/// Implemented by every operation's output type.
pub trait HttpResponseUnmarshaler: Sized {
    fn unmarshal_http(response: &Response) -> Result<Self, Error>;
}

/// An input that names the bucket it targets — enough for the pipeline's
/// endpoint-resolution and required-input stages to do their job without
/// matching on every concrete operation type.
pub trait RequiredBucket {
    fn bucket(&self) -> &str;
}

/// An input that additionally names an object key within that bucket.
pub trait RequiredBucketKey: RequiredBucket {
    fn key(&self) -> &str;
}

/// What the pipeline's endpoint-resolution and required-input stages need
/// out of an operation's input, without matching on the concrete type.
/// Stands in for the Go pipeline's runtime type-switch over
/// `RequiredBucketInterface`/`RequiredBucketKeyInterface`.
pub enum Target<'a> {
    None,
    Bucket(&'a str),
    BucketKey(&'a str, &'a str),
}

pub trait OperationTarget {
    fn target(&self) -> Target<'_>;
}

pub(crate) fn extract_header(response: &Response, name: &str) -> Option<String> {
    response.header(name).map(str::to_string)
}

pub(crate) fn set_optional_header(
    request: &mut OutgoingRequest,
    name: &str,
    value: &Option<String>,
) -> Result<(), Error> {
    if let Some(value) = value {
        request.set_header(name, value)?;
    }
    Ok(())
}

pub(crate) fn set_optional_query(request: &mut OutgoingRequest, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        request.push_query(name, value);
    }
}

pub(crate) fn require_success(response: &Response, want: u16) -> Result<(), Error> {
    if response.status != want {
        return Err(crate::error::ServerSideError {
            http_status: response.status,
            x_amz_request_id: response.header("x-amz-request-id").unwrap_or_default().to_string(),
            x_amz_id_2: response.header("x-amz-id-2").unwrap_or_default().to_string(),
            api_error: parse_api_error(response),
        }
        .into());
    }
    Ok(())
}

fn parse_api_error(response: &Response) -> Option<crate::error::ApiError> {
    if response.body.is_empty() {
        return None;
    }
    match quick_xml::de::from_reader(response.body.as_slice()) {
        Ok(api_error) => Some(api_error),
        Err(err) => Some(crate::error::ApiError {
            message: format!("xml error response deserializing error: {err}"),
            ..Default::default()
        }),
    }
}
