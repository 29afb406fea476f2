//! Retrieve object metadata with a HEAD request, printing it to stdout.
//! Credentials are read from the environment variables S3_ACCESS and S3_SECRET.
//! Usage:
//! ```shell
//! $ S3_ACCESS=<access> S3_SECRET=<secret> cargo run --example head \
//!    -- <host> <bucket> <key> [region]
//! ```
use s3reqsign::options::Options;
use s3reqsign::signing::Credentials;
use s3reqsign::Client;

fn main() -> Result<(), String> {
    let host = std::env::args().nth(1).expect("missing host");
    let bucket = std::env::args().nth(2).expect("missing bucket");
    let key = std::env::args().nth(3).expect("missing key");
    let region = std::env::args().nth(4).unwrap_or_else(|| "us-east-1".to_string());
    let access_key_id = std::env::var("S3_ACCESS").map_err(|err| err.to_string())?;
    let secret_access_key = std::env::var("S3_SECRET").map_err(|err| err.to_string())?;

    let options = Options::new(host, region, Credentials { access_key_id, secret_access_key });
    let client = Client::new(options).map_err(|err| err.to_string())?;

    let (output, _) = client
        .head_object(&s3reqsign::api::HeadObjectInput {
            bucket,
            key,
            ..Default::default()
        })
        .map_err(|err| err.to_string())?;

    println!("{:#?}", output);
    Ok(())
}
