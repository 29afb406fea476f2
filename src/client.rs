//! The user-facing entry point: one [`Client`] wraps an [`Options`] and
//! exposes one method per supported operation. Every method is a direct
//! call into [`perform_call`] — the client itself holds no state beyond
//! its configuration.

use crate::api::{
    CreateBucketInput, CreateBucketOutput, DeleteObjectInput, DeleteObjectOutput, GetObjectInput, GetObjectOutput,
    HeadObjectInput, HeadObjectOutput, PutObjectInput, PutObjectOutput,
};
use crate::error::Error;
use crate::options::Options;
use crate::pipeline::perform_call;
use crate::request::Metadata;

#[derive(Clone)]
pub struct Client {
    options: Options,
}

impl Client {
    pub fn new(options: Options) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn put_object(&self, input: &PutObjectInput) -> Result<(PutObjectOutput, Metadata), Error> {
        perform_call(&self.options, input)
    }

    pub fn get_object(&self, input: &GetObjectInput) -> Result<(GetObjectOutput, Metadata), Error> {
        perform_call(&self.options, input)
    }

    pub fn head_object(&self, input: &HeadObjectInput) -> Result<(HeadObjectOutput, Metadata), Error> {
        perform_call(&self.options, input)
    }

    pub fn create_bucket(&self, input: &CreateBucketInput) -> Result<(CreateBucketOutput, Metadata), Error> {
        perform_call(&self.options, input)
    }

    pub fn delete_object(&self, input: &DeleteObjectInput) -> Result<(DeleteObjectOutput, Metadata), Error> {
        perform_call(&self.options, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::Credentials;

    #[test]
    fn new_rejects_invalid_options() {
        let options = Options::new(
            "",
            "us-east-1",
            Credentials {
                access_key_id: "a".to_string(),
                secret_access_key: "b".to_string(),
            },
        );
        assert!(Client::new(options).is_err());
    }
}
