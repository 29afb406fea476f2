//! The operation set: typed input/output pairs for the five calls this
//! crate implements. Each pair is a thin marshal/unmarshal adapter over
//! [`crate::pipeline::perform_call`] — the interesting logic lives in the
//! pipeline and the signer, not here.

mod create_bucket;
mod delete_object;
mod get_object;
mod head_object;
mod put_object;

pub use create_bucket::{CreateBucketInput, CreateBucketOutput};
pub use delete_object::{DeleteObjectInput, DeleteObjectOutput};
pub use get_object::{GetObjectInput, GetObjectOutput};
pub use head_object::{HeadObjectInput, HeadObjectOutput};
pub use put_object::{PutObjectInput, PutObjectOutput};
