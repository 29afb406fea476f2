//! SHA-256/HMAC primitives and the byte-level encodings SigV4 canonicalization
//! depends on. Kept free of any S3-specific knowledge so it can be unit
//! tested in isolation from the signer.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// HMAC-SHA-256 of `message` keyed by `key`. HMAC accepts a key of any
/// length, so this never fails.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Lowercase hex encoding, as required everywhere in SigV4 (hashes, the
/// final signature, chunk signatures).
pub fn hex(bytes: &[u8]) -> String {
    hex_crate::encode(bytes)
}

mod hex_crate {
    pub use hex::encode;
}

/// ASCII lowercase of a header name. Header names in S3 requests are
/// always ASCII, so a byte-wise lowercase is sufficient and avoids
/// Unicode case-folding surprises.
pub fn lowercase(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Strip leading/trailing spaces and tabs, per RFC 7230's definition of
/// `OWS` (optional whitespace). Interior whitespace runs are left intact —
/// SigV4 canonicalization trims but does not collapse.
pub fn trim(value: &str) -> String {
    value.trim_matches(|c| c == ' ' || c == '\t').to_string()
}

/// Percent-encode every byte of `s` except the unreserved set
/// `A-Za-z0-9-._~`. `/` is preserved when `encode_slash` is `false` and
/// encoded as `%2F` when `true`. Hex digits are uppercase, and every byte
/// (including UTF-8 continuation bytes) is encoded individually — this is
/// a byte-wise encoder, not a codepoint-wise one.
pub fn uri_encode(s: &str, encode_slash: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b'/' if !encode_slash => out.push('/'),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_matches_known_digest() {
        assert_eq!(
            hex(&sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_of_hello() {
        assert_eq!(
            hex(&sha256(b"hello")),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn uri_encode_preserves_unreserved() {
        assert_eq!(uri_encode("abcXYZ019-._~", false), "abcXYZ019-._~");
    }

    #[test]
    fn uri_encode_slash_toggle() {
        assert_eq!(uri_encode("a/b", false), "a/b");
        assert_eq!(uri_encode("a/b", true), "a%2Fb");
    }

    #[test]
    fn uri_encode_uses_uppercase_hex() {
        assert_eq!(uri_encode(" ", false), "%20");
        assert_eq!(uri_encode("日", false), "%E6%97%A5");
    }

    #[test]
    fn trim_strips_spaces_and_tabs_only() {
        assert_eq!(trim("  a  b  "), "a  b");
        assert_eq!(trim("\t\tx\t"), "x");
    }

    #[test]
    fn hmac_chain_is_deterministic() {
        let a = hmac_sha256(b"key", b"msg");
        let b = hmac_sha256(b"key", b"msg");
        assert_eq!(a, b);
    }
}
