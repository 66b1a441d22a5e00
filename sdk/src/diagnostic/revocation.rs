// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of a revocation data object.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationKind {
    /// A certificate revocation list.
    Crl,

    /// An OCSP response.
    Ocsp,
}

/// Provenance of a revocation data object: where the extraction layer
/// found it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationOrigin {
    /// Found inside the signature itself.
    Signature,

    /// Found in the signature's revocation-values attribute.
    InternalRevocationValues,

    /// Found in a signed time-stamp's revocation-values.
    InternalTimestampRevocationValues,

    /// Found in a PDF validation-related-information dictionary.
    InternalVri,

    /// Found in a PDF document security store.
    InternalDss,

    /// Retrieved online by the upstream layer.
    External,
}

/// Where within a signature a revocation reference appeared.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationRefLocation {
    /// The complete-revocation-references attribute.
    CompleteRevocationRefs,

    /// The attribute-revocation-references attribute.
    AttributeRevocationRefs,
}

/// A digest algorithm name together with a hex-encoded digest value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DigestAlgoAndValue {
    /// Digest algorithm name (for example `SHA256`).
    pub algorithm: String,

    /// Hex-encoded digest value.
    pub value: String,
}

/// One logical revocation data object (a CRL or an OCSP response).
///
/// Records are content-addressed: `sha256` is the digest of the raw
/// content, computed upstream, and serves as the record's identity.
/// Byte-identical content found in several places deduplicates to one
/// record in the [`DiagnosticData`](crate::diagnostic::DiagnosticData)
/// registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RevocationRecord {
    /// Hex-encoded SHA-256 digest of the raw content; the record's
    /// identity and registry key.
    pub sha256: String,

    /// CRL or OCSP.
    pub kind: RevocationKind,

    /// Where the content was first found.
    pub origin: RevocationOrigin,

    /// Production time of the revocation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produced_at: Option<DateTime<Utc>>,

    /// End of the validity window claimed by the issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_update: Option<DateTime<Utc>>,

    /// OCSP responder identified by name, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id_name: Option<String>,

    /// OCSP responder identified by key hash (hex), when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id_key: Option<String>,

    /// Digests of the raw content under additional algorithms, used to
    /// resolve references that do not use SHA-256. Keys are lowercase
    /// algorithm names without separators (for example `sha1`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub digests: BTreeMap<String, String>,

    /// Digest identifying the certificate this status refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_digest: Option<DigestAlgoAndValue>,

    /// `true` if the referenced certificate is reported as revoked.
    #[serde(default)]
    pub revoked: bool,

    /// Revocation time, when revoked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_time: Option<DateTime<Utc>>,

    /// Revocation reason, when revoked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RevocationRecord {
    /// Returns the record's identity (its content digest).
    pub fn id(&self) -> &str {
        &self.sha256
    }

    /// Returns `true` if the given digest identifies this record's
    /// content.
    pub fn matches_digest(&self, digest: &DigestAlgoAndValue) -> bool {
        let algorithm = normalize_algorithm(&digest.algorithm);
        let value = match algorithm.as_str() {
            "sha256" => Some(self.sha256.as_str()),
            _ => self.digests.get(&algorithm).map(String::as_str),
        };
        value.is_some_and(|v| v.eq_ignore_ascii_case(&digest.value))
    }
}

/// A pointer from a signature to revocation content, identified by
/// digest.
///
/// A reference whose digest resolves to no record in the diagnostic
/// data's registry is an *orphan*: the referenced content was never
/// retrieved.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RevocationReference {
    /// Attribute the reference appeared in.
    pub location: RevocationRefLocation,

    /// Digest identifying the referenced content.
    pub digest: DigestAlgoAndValue,
}

/// Lowercases an algorithm name and strips separators, so `SHA-256`,
/// `SHA256` and `sha256` compare equal.
pub(crate) fn normalize_algorithm(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn record(sha256: &str) -> RevocationRecord {
        RevocationRecord {
            sha256: sha256.to_owned(),
            kind: RevocationKind::Ocsp,
            origin: RevocationOrigin::InternalRevocationValues,
            produced_at: None,
            next_update: None,
            responder_id_name: None,
            responder_id_key: None,
            digests: BTreeMap::new(),
            certificate_digest: None,
            revoked: false,
            revocation_time: None,
            reason: None,
        }
    }

    #[test]
    fn matches_digest_sha256() {
        let rec = record("aa11");

        assert!(rec.matches_digest(&DigestAlgoAndValue {
            algorithm: "SHA-256".to_owned(),
            value: "AA11".to_owned(),
        }));
        assert!(!rec.matches_digest(&DigestAlgoAndValue {
            algorithm: "SHA256".to_owned(),
            value: "bb22".to_owned(),
        }));
    }

    #[test]
    fn matches_digest_other_algorithm() {
        let mut rec = record("aa11");
        rec.digests.insert("sha1".to_owned(), "cc33".to_owned());

        assert!(rec.matches_digest(&DigestAlgoAndValue {
            algorithm: "SHA1".to_owned(),
            value: "cc33".to_owned(),
        }));
        assert!(!rec.matches_digest(&DigestAlgoAndValue {
            algorithm: "MD5".to_owned(),
            value: "cc33".to_owned(),
        }));
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_algorithm("SHA-256"), "sha256");
        assert_eq!(normalize_algorithm("sha256"), "sha256");
    }
}
