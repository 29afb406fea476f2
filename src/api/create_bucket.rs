use crate::error::Error;
use crate::operation::{extract_header, require_success, set_optional_header, HttpRequestMarshaler, HttpResponseUnmarshaler, OperationTarget, RequiredBucket, Target};
use crate::request::{OutgoingRequest, Response};

/// `location_constraint` is serialized as the request's XML body (S3
/// requires it for any region other than `us-east-1`), not a header.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketInput {
    pub bucket: String,

    pub acl: Option<String>,
    pub grant_full_control: Option<String>,
    pub object_ownership: Option<String>,
    pub location_constraint: Option<String>,
}

impl RequiredBucket for CreateBucketInput {
    fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl OperationTarget for CreateBucketInput {
    fn target(&self) -> Target<'_> {
        Target::Bucket(&self.bucket)
    }
}

impl HttpRequestMarshaler for CreateBucketInput {
    fn marshal_http(&self, request: &mut OutgoingRequest) -> Result<(), Error> {
        request.method = http::Method::PUT;

        set_optional_header(request, "x-amz-acl", &self.acl)?;
        set_optional_header(request, "x-amz-grant-full-control", &self.grant_full_control)?;
        set_optional_header(request, "x-amz-object-ownership", &self.object_ownership)?;

        if let Some(location_constraint) = &self.location_constraint {
            let body = format!(
                "<CreateBucketConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"><LocationConstraint>{location_constraint}</LocationConstraint></CreateBucketConfiguration>"
            );
            request.set_body(body.into_bytes());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {
    pub location: Option<String>,
}

impl HttpResponseUnmarshaler for CreateBucketOutput {
    fn unmarshal_http(response: &Response) -> Result<Self, Error> {
        require_success(response, 200)?;

        Ok(Self {
            location: extract_header(response, "location"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marshal_without_location_constraint_leaves_body_empty() {
        let input = CreateBucketInput {
            bucket: "examplebucket".to_string(),
            ..Default::default()
        };
        let mut request = OutgoingRequest::new(http::Method::GET, url::Url::parse("https://host/bucket").unwrap());
        input.marshal_http(&mut request).unwrap();
        assert!(request.body.is_empty());
    }

    #[test]
    fn marshal_with_location_constraint_sets_xml_body() {
        let input = CreateBucketInput {
            bucket: "examplebucket".to_string(),
            location_constraint: Some("eu-west-3".to_string()),
            ..Default::default()
        };
        let mut request = OutgoingRequest::new(http::Method::GET, url::Url::parse("https://host/bucket").unwrap());
        input.marshal_http(&mut request).unwrap();
        let body = String::from_utf8(request.body).unwrap();
        assert!(body.contains("<LocationConstraint>eu-west-3</LocationConstraint>"));
    }
}
