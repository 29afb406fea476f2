use crate::error::Error;
use crate::operation::{extract_header, require_success, set_optional_header, HttpRequestMarshaler, HttpResponseUnmarshaler, OperationTarget, RequiredBucket, RequiredBucketKey, Target};
use crate::request::{OutgoingRequest, Response};

/// Uploads an object. `body` is required; S3 rejects a `PUT` with no body
/// framing at all, so an absent body still marshals to an empty one.
#[derive(Debug, Clone, Default)]
pub struct PutObjectInput {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,

    pub cache_control: Option<String>,
    pub content_disposition: Option<String>,
    pub content_encoding: Option<String>,
    pub content_type: Option<String>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,

    pub acl: Option<String>,
    pub checksum_sha256: Option<String>,
    pub server_side_encryption: Option<String>,
    pub storage_class: Option<String>,
    pub tagging: Option<String>,
}

impl RequiredBucket for PutObjectInput {
    fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl RequiredBucketKey for PutObjectInput {
    fn key(&self) -> &str {
        &self.key
    }
}

impl OperationTarget for PutObjectInput {
    fn target(&self) -> Target<'_> {
        Target::BucketKey(&self.bucket, &self.key)
    }
}

impl HttpRequestMarshaler for PutObjectInput {
    fn marshal_http(&self, request: &mut OutgoingRequest) -> Result<(), Error> {
        request.method = http::Method::PUT;
        request.set_body(self.body.clone());

        set_optional_header(request, "cache-control", &self.cache_control)?;
        set_optional_header(request, "content-disposition", &self.content_disposition)?;
        set_optional_header(request, "content-encoding", &self.content_encoding)?;
        set_optional_header(request, "content-type", &self.content_type)?;
        set_optional_header(request, "if-match", &self.if_match)?;
        set_optional_header(request, "if-none-match", &self.if_none_match)?;

        set_optional_header(request, "x-amz-acl", &self.acl)?;
        set_optional_header(request, "x-amz-checksum-sha256", &self.checksum_sha256)?;
        set_optional_header(request, "x-amz-server-side-encryption", &self.server_side_encryption)?;
        set_optional_header(request, "x-amz-storage-class", &self.storage_class)?;
        set_optional_header(request, "x-amz-tagging", &self.tagging)?;

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    pub e_tag: Option<String>,
    pub checksum_sha256: Option<String>,
    pub server_side_encryption: Option<String>,
    pub version_id: Option<String>,
}

impl HttpResponseUnmarshaler for PutObjectOutput {
    fn unmarshal_http(response: &Response) -> Result<Self, Error> {
        require_success(response, 200)?;

        Ok(Self {
            e_tag: extract_header(response, "etag"),
            checksum_sha256: extract_header(response, "x-amz-checksum-sha256"),
            server_side_encryption: extract_header(response, "x-amz-server-side-encryption"),
            version_id: extract_header(response, "x-amz-version-id"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marshal_sets_method_and_body() {
        let input = PutObjectInput {
            bucket: "examplebucket".to_string(),
            key: "photos/photo1.jpg".to_string(),
            body: b"hello".to_vec(),
            ..Default::default()
        };
        let mut request = OutgoingRequest::new(http::Method::GET, url::Url::parse("https://host/key").unwrap());
        input.marshal_http(&mut request).unwrap();
        assert_eq!(request.method, http::Method::PUT);
        assert_eq!(request.body, b"hello".to_vec());
    }

    #[test]
    fn unmarshal_rejects_non_200() {
        let response = Response {
            status: 403,
            headers: http::HeaderMap::new(),
            body: Vec::new(),
        };
        assert!(PutObjectOutput::unmarshal_http(&response).is_err());
    }
}
