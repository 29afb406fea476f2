//! SigV4 timestamp rendering.

use chrono::{DateTime, Utc};

const SHORT_DATE_FMT: &str = "%Y%m%d";
const LONG_DATETIME_FMT: &str = "%Y%m%dT%H%M%SZ";

/// A UTC instant rendered in the two forms SigV4 needs: the credential
/// scope's date (`short`) and the `x-amz-date` header (`long`).
///
/// Constructed once per call and read-only afterwards — the same instant
/// must be used for the canonical request, the signing key, and every
/// per-chunk signature, or the chain will not verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningTime(DateTime<Utc>);

impl SigningTime {
    /// Convert any instant to UTC and freeze it as a signing time.
    pub fn of<Tz: chrono::TimeZone>(instant: DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&Utc))
    }

    /// The current instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// `YYYYMMDD`, used in the credential scope and the signing key chain.
    pub fn short(&self) -> String {
        self.0.format(SHORT_DATE_FMT).to_string()
    }

    /// `YYYYMMDDTHHMMSSZ`, used as the `x-amz-date` header and the first
    /// line of every string-to-sign.
    pub fn long(&self) -> String {
        self.0.format(LONG_DATETIME_FMT).to_string()
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn short_is_the_utc_day() {
        let t = Utc.with_ymd_and_hms(1984, 8, 5, 13, 50, 0).unwrap();
        assert_eq!(SigningTime::of(t).short(), "19840805");
    }

    #[test]
    fn long_ends_with_z_and_is_sixteen_chars() {
        let t = Utc.with_ymd_and_hms(1984, 8, 5, 13, 50, 0).unwrap();
        let long = SigningTime::of(t).long();
        assert_eq!(long, "19840805T135000Z");
        assert_eq!(long.len(), 16);
        assert!(long.ends_with('Z'));
    }

    #[test]
    fn non_utc_instant_is_normalised() {
        let fixed = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let t = fixed.with_ymd_and_hms(1984, 8, 5, 15, 50, 0).unwrap();
        assert_eq!(SigningTime::of(t).long(), "19840805T135000Z");
    }
}
