//! Image upload signing
//!
//! The admin editor uploads images straight from the browser to the image
//! host; the server's only part is signing the upload parameters with the
//! account secret. Parameters are signed by sorting them by key, joining
//! `key=value` pairs with `&`, appending the secret, and hashing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::UploadConfig;
use crate::error::{Error, Result};

/// Parameters the upload widget asks the server to sign
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    /// Sorted into canonical order before signing
    pub params_to_sign: BTreeMap<String, String>,
}

/// A signature response for the upload widget
#[derive(Debug, Serialize)]
pub struct SignResponse {
    pub signature: String,
}

/// Compute the hex signature over a canonical parameter string
pub fn sign_params(params: &BTreeMap<String, String>, api_secret: &str) -> String {
    let joined = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sign upload parameters with the configured credentials
///
/// Without a full credential set no signature can be produced; the widget
/// then falls back to unsigned uploads.
pub fn sign_upload(config: &UploadConfig, request: &SignRequest) -> Result<SignResponse> {
    if !config.is_configured() {
        return Err(Error::NotConfigured(
            "Upload signing credentials are not configured on the server.".to_string(),
        ));
    }

    Ok(SignResponse {
        signature: sign_params(&request.params_to_sign, &config.api_secret),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_signature_is_deterministic_and_order_independent() {
        let a = params(&[("timestamp", "1700000000"), ("folder", "gallery")]);
        let b = params(&[("folder", "gallery"), ("timestamp", "1700000000")]);
        let sig_a = sign_params(&a, "secret");
        let sig_b = sign_params(&b, "secret");
        assert_eq!(sig_a, sig_b);
        assert_eq!(sig_a.len(), 64);
        assert!(sig_a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_depends_on_secret_and_params() {
        let p = params(&[("timestamp", "1700000000")]);
        assert_ne!(sign_params(&p, "secret"), sign_params(&p, "other"));
        let q = params(&[("timestamp", "1700000001")]);
        assert_ne!(sign_params(&p, "secret"), sign_params(&q, "secret"));
    }

    #[test]
    fn test_missing_credentials_fail_signing() {
        let config = UploadConfig::default();
        let request = SignRequest {
            params_to_sign: params(&[("timestamp", "1700000000")]),
        };
        assert!(sign_upload(&config, &request).is_err());
    }

    #[test]
    fn test_configured_credentials_sign() {
        let config = UploadConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
        };
        let request = SignRequest {
            params_to_sign: params(&[("timestamp", "1700000000")]),
        };
        let response = sign_upload(&config, &request).unwrap();
        assert_eq!(
            response.signature,
            sign_params(&request.params_to_sign, "secret")
        );
    }
}
