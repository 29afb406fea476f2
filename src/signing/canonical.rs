//! Builds the six-field canonical request SigV4 hashes into the
//! string-to-sign. Every field here must match the server's own
//! canonicalization byte-for-byte; this module has no knowledge of
//! credentials or time, only of request shape.

use crate::crypto::{lowercase, trim, uri_encode};
use crate::request::OutgoingRequest;
use std::collections::BTreeMap;

/// `canonical_headers` (sorted `name:value\n` lines) and `signed_headers`
/// (the same names, `;`-joined) for `request`. Repeated header names are
/// joined with `,` in encounter order before trimming, per the SigV4
/// specification (see the design notes on the header-collection
/// ambiguity). `host` is synthesized from the request URI's authority
/// when the request does not already carry one.
pub fn canonical_headers(request: &OutgoingRequest) -> (String, String) {
    let mut normalized: BTreeMap<String, String> = BTreeMap::new();

    for name in request.headers.keys() {
        let joined = request
            .headers
            .get_all(name)
            .iter()
            .map(|v| trim(v.to_str().unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(",");
        normalized.insert(lowercase(name.as_str()), joined);
    }

    normalized.entry("host".to_string()).or_insert_with(|| {
        let host = request.uri.host_str().unwrap_or_default();
        match request.uri.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    });

    let mut canonical = String::new();
    let mut names = Vec::with_capacity(normalized.len());
    for (name, value) in &normalized {
        canonical.push_str(name);
        canonical.push(':');
        canonical.push_str(value);
        canonical.push('\n');
        names.push(name.as_str());
    }

    (canonical, names.join(";"))
}

/// Sorted, percent-encoded `name=value` pairs joined with `&`. Empty
/// values still emit `name=`.
pub fn canonical_query_string(request: &OutgoingRequest) -> String {
    let mut pairs: Vec<(String, String)> = request
        .uri
        .query_pairs()
        .map(|(k, v)| (uri_encode(&k, true), uri_encode(&v, true)))
        .collect();
    pairs.sort();

    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

fn canonical_path(request: &OutgoingRequest) -> String {
    let path = request.uri.path();
    if path.is_empty() {
        "/".to_string()
    } else {
        uri_encode(path, false)
    }
}

/// The newline-joined 6-tuple: method, URI-encoded path, canonical query,
/// canonical header block, signed-headers list, payload-hash token.
pub fn build_canonical_request(request: &OutgoingRequest, payload_hash: &str) -> String {
    let (headers, signed_headers) = canonical_headers(request);
    let query = canonical_query_string(request);

    [
        request.method.as_str(),
        &canonical_path(request),
        &query,
        &headers,
        &signed_headers,
        payload_hash,
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    fn req(uri: &str) -> OutgoingRequest {
        OutgoingRequest::new(Method::GET, url::Url::parse(uri).unwrap())
    }

    #[test]
    fn host_is_synthesized_when_absent() {
        let r = req("https://examplebucket.s3.amazonaws.com/photos/photo1.jpg");
        let (headers, signed) = canonical_headers(&r);
        assert_eq!(headers, "host:examplebucket.s3.amazonaws.com\n");
        assert_eq!(signed, "host");
    }

    #[test]
    fn header_order_does_not_affect_canonicalization() {
        let mut a = req("https://host/x");
        a.set_header("x-amz-date", "20130524T000000Z").unwrap();
        a.set_header("range", "bytes=0-9").unwrap();

        let mut b = req("https://host/x");
        b.set_header("range", "bytes=0-9").unwrap();
        b.set_header("x-amz-date", "20130524T000000Z").unwrap();

        assert_eq!(canonical_headers(&a), canonical_headers(&b));
    }

    #[test]
    fn repeated_header_values_are_comma_joined_in_encounter_order() {
        let mut r = req("https://host/x");
        r.append_header("x-amz-meta-tag", "a").unwrap();
        r.append_header("x-amz-meta-tag", "b").unwrap();
        let (headers, _) = canonical_headers(&r);
        assert!(headers.contains("x-amz-meta-tag:a,b\n"));
    }

    #[test]
    fn query_string_is_sorted_and_encoded() {
        let r = req("https://host/x?z=3&a=1&m=2");
        assert_eq!(canonical_query_string(&r), "a=1&m=2&z=3");
    }

    #[test]
    fn empty_query_value_keeps_trailing_equals() {
        let r = req("https://host/x?uploads=");
        assert_eq!(canonical_query_string(&r), "uploads=");
    }

    #[test]
    fn empty_path_substitutes_root() {
        let r = req("https://host");
        assert_eq!(canonical_path(&r), "/");
    }
}
