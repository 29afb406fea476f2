use crate::error::Error;
use crate::operation::{extract_header, require_success, set_optional_header, set_optional_query, HttpRequestMarshaler, HttpResponseUnmarshaler, OperationTarget, RequiredBucket, RequiredBucketKey, Target};
use crate::request::{OutgoingRequest, Response};

#[derive(Debug, Clone, Default)]
pub struct GetObjectInput {
    pub bucket: String,
    pub key: String,

    pub version_id: Option<String>,
    pub range: Option<String>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub response_content_type: Option<String>,
    pub response_content_disposition: Option<String>,
}

impl RequiredBucket for GetObjectInput {
    fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl RequiredBucketKey for GetObjectInput {
    fn key(&self) -> &str {
        &self.key
    }
}

impl OperationTarget for GetObjectInput {
    fn target(&self) -> Target<'_> {
        Target::BucketKey(&self.bucket, &self.key)
    }
}

impl HttpRequestMarshaler for GetObjectInput {
    fn marshal_http(&self, request: &mut OutgoingRequest) -> Result<(), Error> {
        request.method = http::Method::GET;

        set_optional_query(request, "versionId", &self.version_id);
        set_optional_query(request, "response-content-type", &self.response_content_type);
        set_optional_query(
            request,
            "response-content-disposition",
            &self.response_content_disposition,
        );

        set_optional_header(request, "range", &self.range)?;
        set_optional_header(request, "if-match", &self.if_match)?;
        set_optional_header(request, "if-none-match", &self.if_none_match)?;
        set_optional_header(request, "if-modified-since", &self.if_modified_since)?;
        set_optional_header(request, "if-unmodified-since", &self.if_unmodified_since)?;

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetObjectOutput {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
    pub content_range: Option<String>,
    pub e_tag: Option<String>,
    pub last_modified: Option<String>,
    pub version_id: Option<String>,
}

impl HttpResponseUnmarshaler for GetObjectOutput {
    fn unmarshal_http(response: &Response) -> Result<Self, Error> {
        let want = if response.header("content-range").is_some() { 206 } else { 200 };
        require_success(response, want)?;

        Ok(Self {
            body: response.body.clone(),
            content_type: extract_header(response, "content-type"),
            content_length: extract_header(response, "content-length"),
            content_range: extract_header(response, "content-range"),
            e_tag: extract_header(response, "etag"),
            last_modified: extract_header(response, "last-modified"),
            version_id: extract_header(response, "x-amz-version-id"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marshal_pushes_range_header_and_version_query() {
        let input = GetObjectInput {
            bucket: "examplebucket".to_string(),
            key: "photos/photo1.jpg".to_string(),
            version_id: Some("v1".to_string()),
            range: Some("bytes=0-9".to_string()),
            ..Default::default()
        };
        let mut request = OutgoingRequest::new(http::Method::GET, url::Url::parse("https://host/key").unwrap());
        input.marshal_http(&mut request).unwrap();
        assert_eq!(request.header("range"), Some("bytes=0-9"));
        assert!(request.uri.query().unwrap().contains("versionId=v1"));
    }

    #[test]
    fn unmarshal_accepts_partial_content_when_range_present() {
        let mut headers = http::HeaderMap::new();
        headers.insert("content-range", "bytes 0-9/100".parse().unwrap());
        let response = Response {
            status: 206,
            headers,
            body: b"0123456789".to_vec(),
        };
        let output = GetObjectOutput::unmarshal_http(&response).unwrap();
        assert_eq!(output.body, b"0123456789".to_vec());
    }
}
