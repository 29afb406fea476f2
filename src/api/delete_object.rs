use crate::error::Error;
use crate::operation::{extract_header, require_success, set_optional_header, set_optional_query, HttpRequestMarshaler, HttpResponseUnmarshaler, OperationTarget, RequiredBucket, RequiredBucketKey, Target};
use crate::request::{OutgoingRequest, Response};

#[derive(Debug, Clone, Default)]
pub struct DeleteObjectInput {
    pub bucket: String,
    pub key: String,

    pub version_id: Option<String>,
    pub mfa: Option<String>,
    pub bypass_governance_retention: Option<String>,
}

impl RequiredBucket for DeleteObjectInput {
    fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl RequiredBucketKey for DeleteObjectInput {
    fn key(&self) -> &str {
        &self.key
    }
}

impl OperationTarget for DeleteObjectInput {
    fn target(&self) -> Target<'_> {
        Target::BucketKey(&self.bucket, &self.key)
    }
}

impl HttpRequestMarshaler for DeleteObjectInput {
    fn marshal_http(&self, request: &mut OutgoingRequest) -> Result<(), Error> {
        request.method = http::Method::DELETE;

        set_optional_query(request, "versionId", &self.version_id);
        set_optional_header(request, "x-amz-mfa", &self.mfa)?;
        set_optional_header(
            request,
            "x-amz-bypass-governance-retention",
            &self.bypass_governance_retention,
        )?;

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteObjectOutput {
    pub delete_marker: Option<String>,
    pub version_id: Option<String>,
}

impl HttpResponseUnmarshaler for DeleteObjectOutput {
    fn unmarshal_http(response: &Response) -> Result<Self, Error> {
        require_success(response, 204)?;

        Ok(Self {
            delete_marker: extract_header(response, "x-amz-delete-marker"),
            version_id: extract_header(response, "x-amz-version-id"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marshal_uses_delete_method_and_version_query() {
        let input = DeleteObjectInput {
            bucket: "examplebucket".to_string(),
            key: "photos/photo1.jpg".to_string(),
            version_id: Some("v1".to_string()),
            ..Default::default()
        };
        let mut request = OutgoingRequest::new(http::Method::GET, url::Url::parse("https://host/key").unwrap());
        input.marshal_http(&mut request).unwrap();
        assert_eq!(request.method, http::Method::DELETE);
        assert!(request.uri.query().unwrap().contains("versionId=v1"));
    }

    #[test]
    fn unmarshal_requires_204() {
        let response = Response {
            status: 200,
            headers: http::HeaderMap::new(),
            body: Vec::new(),
        };
        assert!(DeleteObjectOutput::unmarshal_http(&response).is_err());
    }
}
