use crate::error::Error;
use crate::operation::{extract_header, require_success, set_optional_header, set_optional_query, HttpRequestMarshaler, HttpResponseUnmarshaler, OperationTarget, RequiredBucket, RequiredBucketKey, Target};
use crate::request::{OutgoingRequest, Response};

#[derive(Debug, Clone, Default)]
pub struct HeadObjectInput {
    pub bucket: String,
    pub key: String,

    pub version_id: Option<String>,
    pub range: Option<String>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
}

impl RequiredBucket for HeadObjectInput {
    fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl RequiredBucketKey for HeadObjectInput {
    fn key(&self) -> &str {
        &self.key
    }
}

impl OperationTarget for HeadObjectInput {
    fn target(&self) -> Target<'_> {
        Target::BucketKey(&self.bucket, &self.key)
    }
}

impl HttpRequestMarshaler for HeadObjectInput {
    fn marshal_http(&self, request: &mut OutgoingRequest) -> Result<(), Error> {
        request.method = http::Method::HEAD;

        set_optional_query(request, "versionId", &self.version_id);
        set_optional_header(request, "range", &self.range)?;
        set_optional_header(request, "if-match", &self.if_match)?;
        set_optional_header(request, "if-none-match", &self.if_none_match)?;

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadObjectOutput {
    pub content_type: Option<String>,
    pub content_length: Option<String>,
    pub e_tag: Option<String>,
    pub last_modified: Option<String>,
    pub storage_class: Option<String>,
    pub version_id: Option<String>,
}

impl HttpResponseUnmarshaler for HeadObjectOutput {
    fn unmarshal_http(response: &Response) -> Result<Self, Error> {
        require_success(response, 200)?;

        Ok(Self {
            content_type: extract_header(response, "content-type"),
            content_length: extract_header(response, "content-length"),
            e_tag: extract_header(response, "etag"),
            last_modified: extract_header(response, "last-modified"),
            storage_class: extract_header(response, "x-amz-storage-class"),
            version_id: extract_header(response, "x-amz-version-id"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marshal_uses_head_method() {
        let input = HeadObjectInput {
            bucket: "examplebucket".to_string(),
            key: "photos/photo1.jpg".to_string(),
            ..Default::default()
        };
        let mut request = OutgoingRequest::new(http::Method::GET, url::Url::parse("https://host/key").unwrap());
        input.marshal_http(&mut request).unwrap();
        assert_eq!(request.method, http::Method::HEAD);
    }

    #[test]
    fn head_output_never_reads_a_body() {
        let response = Response {
            status: 200,
            headers: http::HeaderMap::new(),
            body: b"ignored for HEAD".to_vec(),
        };
        let output = HeadObjectOutput::unmarshal_http(&response).unwrap();
        assert!(output.content_length.is_none());
    }
}
