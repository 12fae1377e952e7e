//! AWS Signature Version 4
//!
//! Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_sigv-create-signed-request.html>

use std::fmt::Write;

use sha2::{Digest, Sha256};

use crate::providers::common::hmac_sha256;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{Route53Provider, SIGNING_REGION, SIGNING_SERVICE};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Inputs that scope a signature to a key, a day, a region and a service.
pub(crate) struct SigningScope<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

/// Derive the signing key: HMAC chain over date, region, service and `aws4_request`.
pub(crate) fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

/// Encode every path segment (RFC 3986 unreserved characters are kept).
pub(crate) fn canonical_uri(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the canonical query string: encoded pairs sorted by key, then value.
pub(crate) fn canonical_query(params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| {
            (
                urlencoding::encode(k).into_owned(),
                urlencoding::encode(v).into_owned(),
            )
        })
        .collect();
    encoded.sort();
    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Canonical request and the `SignedHeaders` list.
///
/// `query` must already be canonical (see [`canonical_query`]).
pub(crate) fn canonical_request(
    method: &str,
    path: &str,
    query: &str,
    headers: &[(String, String)],
    payload: &str,
) -> (String, String) {
    let mut sorted_headers: Vec<(String, &str)> = headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.trim()))
        .collect();
    sorted_headers.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical_headers = sorted_headers
        .iter()
        .fold(String::new(), |mut acc, (k, v)| {
            let _ = writeln!(acc, "{k}:{v}");
            acc
        });

    let signed_headers = sorted_headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let hashed_payload = hex::encode(Sha256::digest(payload.as_bytes()));

    let request = format!(
        "{method}\n{}\n{query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}",
        canonical_uri(path)
    );

    (request, signed_headers)
}

/// Produce the `Authorization` header value.
///
/// `amz_date` is the `X-Amz-Date` header value (`YYYYMMDDTHHMMSSZ`), which must also
/// be present in `headers`.
pub(crate) fn authorization(
    scope: &SigningScope<'_>,
    method: &str,
    path: &str,
    query: &str,
    headers: &[(String, String)],
    payload: &str,
    amz_date: &str,
) -> String {
    let date = amz_date.get(..8).unwrap_or(amz_date);

    // 1. Canonical request
    let (canonical_request, signed_headers) =
        canonical_request(method, path, query, headers, payload);
    log::debug!("CanonicalRequest:\n{}", truncate_for_log(&canonical_request));

    // 2. String to sign
    let credential_scope = format!("{date}/{}/{}/aws4_request", scope.region, scope.service);
    let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign =
        format!("{ALGORITHM}\n{amz_date}\n{credential_scope}\n{hashed_canonical_request}");
    log::debug!("StringToSign:\n{string_to_sign}");

    // 3. Signature
    let key = signing_key(scope.secret_access_key, date, scope.region, scope.service);
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()));

    // 4. Authorization header
    format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}",
        scope.access_key_id
    )
}

impl Route53Provider {
    /// Sign a Route 53 request with this provider's credentials.
    pub(crate) fn sign(
        &self,
        method: &str,
        path: &str,
        query: &str,
        headers: &[(String, String)],
        payload: &str,
        amz_date: &str,
    ) -> String {
        let scope = SigningScope {
            access_key_id: &self.credentials.access_key_id,
            secret_access_key: &self.credentials.secret_access_key,
            region: SIGNING_REGION,
            service: SIGNING_SERVICE,
        };
        authorization(&scope, method, path, query, headers, payload, amz_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;

    const EXAMPLE_SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

    fn iam_list_users_headers() -> Vec<(String, String)> {
        vec![
            (
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded; charset=utf-8".to_string(),
            ),
            ("Host".to_string(), "iam.amazonaws.com".to_string()),
            ("X-Amz-Date".to_string(), "20150830T123600Z".to_string()),
        ]
    }

    // ---- AWS documentation vectors ----

    #[test]
    fn signing_key_matches_documented_value() {
        let key = signing_key(EXAMPLE_SECRET, "20120215", "us-east-1", "iam");
        assert_eq!(
            hex::encode(key),
            "f4780e2d9f65fa895f9c67b32ce1baf0b0d8a43505a000a1a9e090d414db404d"
        );
    }

    #[test]
    fn canonical_request_matches_documented_hash() {
        let (request, signed_headers) = canonical_request(
            "GET",
            "/",
            "Action=ListUsers&Version=2010-05-08",
            &iam_list_users_headers(),
            "",
        );
        assert_eq!(signed_headers, "content-type;host;x-amz-date");
        assert_eq!(
            hex::encode(Sha256::digest(request.as_bytes())),
            "f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59"
        );
    }

    #[test]
    fn authorization_matches_documented_signature() {
        let scope = SigningScope {
            access_key_id: "AKIDEXAMPLE",
            secret_access_key: EXAMPLE_SECRET,
            region: "us-east-1",
            service: "iam",
        };
        let auth = authorization(
            &scope,
            "GET",
            "/",
            "Action=ListUsers&Version=2010-05-08",
            &iam_list_users_headers(),
            "",
            "20150830T123600Z",
        );
        assert_eq!(
            auth,
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
        );
    }

    // ---- canonicalisation ----

    #[test]
    fn canonical_query_sorts_and_encodes() {
        assert_eq!(
            canonical_query(&[("maxitems", "100"), ("marker", "Z1/ab c")]),
            "marker=Z1%2Fab%20c&maxitems=100"
        );
        assert_eq!(canonical_query(&[]), "");
    }

    #[test]
    fn canonical_uri_keeps_slashes() {
        assert_eq!(
            canonical_uri("/2013-04-01/hostedzone/Z123/rrset/"),
            "/2013-04-01/hostedzone/Z123/rrset/"
        );
        assert_eq!(canonical_uri(""), "/");
    }

    // ---- provider scope ----

    #[test]
    fn provider_signs_for_route53_in_us_east_1() {
        let provider = Route53Provider::new(Credentials::new("AKIDTEST", "secret")).unwrap();
        let headers = vec![
            ("Host".to_string(), "route53.amazonaws.com".to_string()),
            ("X-Amz-Date".to_string(), "20240115T080000Z".to_string()),
        ];
        let auth = provider.sign(
            "GET",
            "/2013-04-01/hostedzone",
            "maxitems=100",
            &headers,
            "",
            "20240115T080000Z",
        );
        assert!(
            auth.starts_with(
                "AWS4-HMAC-SHA256 Credential=AKIDTEST/20240115/us-east-1/route53/aws4_request, "
            ),
            "unexpected authorization: {auth}"
        );
        assert!(auth.contains("SignedHeaders=host;x-amz-date,"));
    }

    #[test]
    fn different_payload_changes_signature() {
        let provider = Route53Provider::new(Credentials::new("AKIDTEST", "secret")).unwrap();
        let headers = vec![
            ("Host".to_string(), "route53.amazonaws.com".to_string()),
            ("X-Amz-Date".to_string(), "20240115T080000Z".to_string()),
        ];
        let a = provider.sign("POST", "/p", "", &headers, "<a/>", "20240115T080000Z");
        let b = provider.sign("POST", "/p", "", &headers, "<b/>", "20240115T080000Z");

        let sig_a = a.rsplit("Signature=").next().unwrap();
        let sig_b = b.rsplit("Signature=").next().unwrap();
        assert_ne!(sig_a, sig_b);
    }
}
