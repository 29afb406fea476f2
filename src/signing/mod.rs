//! AWS Signature Version 4 for S3: canonical requests, signing keys, the
//! plain and chunked-streaming signers, and the dynamic selector that
//! picks between them.

mod canonical;
mod dynamic;
mod key;
mod plain;
mod stream;

pub use canonical::build_canonical_request;
pub use dynamic::{DynamicSigner, SignerConfig};
pub use key::{Scope, SigningKey, StringToSignBuilder};
pub use plain::PlainPayloadSigner;
pub use stream::{StreamPayloadSigner, StreamedPayloadSigner, TrailerBody};

use crate::error::Error;
use crate::request::OutgoingRequest;
use crate::time::SigningTime;

/// An access key / secret key pair. Immutable for the lifetime of a call;
/// this library never acquires credentials itself.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Everything a [`Signer`] needs to mutate a request into a signed one.
pub struct SigningArgs<'a> {
    pub request: &'a mut OutgoingRequest,
    pub credentials: &'a Credentials,
    pub region: &'a str,
    pub signing_time: SigningTime,
}

/// The diagnostic triple every signer hands back, mirroring the canonical
/// request / string-to-sign / signature pipeline described in §4 of the
/// design.
#[derive(Debug, Clone)]
pub struct SignOutcome {
    pub canonical_request: String,
    pub string_to_sign: String,
    pub signature: String,
}

/// A strategy for turning a prepared request into a signed one. Signers
/// mutate `args.request.headers` in place and may replace
/// `args.request.body` (the streamed signer does, to frame it as
/// `aws-chunked`).
pub trait Signer: Send + Sync {
    fn sign(&self, args: SigningArgs<'_>) -> Result<SignOutcome, Error>;
}

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";
