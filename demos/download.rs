//! Download an object from S3-compatible object storage and save it to a file.
//! Credentials are read from the environment variables S3_ACCESS and S3_SECRET.
//! Usage:
//! ```shell
//! $ S3_ACCESS=<access> S3_SECRET=<secret> cargo run --example download \
//!    -- <file> <host> <bucket> <key> [region]
//! ```
use s3reqsign::options::Options;
use s3reqsign::signing::Credentials;
use s3reqsign::Client;
use std::time::Instant;

fn main() -> Result<(), String> {
    let file_name = std::env::args().nth(1).expect("missing file name");
    let host = std::env::args().nth(2).expect("missing host");
    let bucket = std::env::args().nth(3).expect("missing bucket");
    let key = std::env::args().nth(4).expect("missing key");
    let region = std::env::args().nth(5).unwrap_or_else(|| "us-east-1".to_string());
    let access_key_id = std::env::var("S3_ACCESS").map_err(|err| err.to_string())?;
    let secret_access_key = std::env::var("S3_SECRET").map_err(|err| err.to_string())?;

    let options = Options::new(host, region, Credentials { access_key_id, secret_access_key });
    let client = Client::new(options).map_err(|err| err.to_string())?;

    let start = Instant::now();
    let (output, _) = client
        .get_object(&s3reqsign::api::GetObjectInput {
            bucket,
            key,
            ..Default::default()
        })
        .map_err(|err| err.to_string())?;

    let len = output.body.len();
    std::fs::write(&file_name, &output.body).map_err(|err| err.to_string())?;

    let elapsed = start.elapsed().as_secs_f64();
    println!("{:.2} s {:.2} MiB/s", elapsed, (len as f64 / 0x100000 as f64) / elapsed);
    Ok(())
}
