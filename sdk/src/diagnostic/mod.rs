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

//! The diagnostic data model: a read-only snapshot of the facts an
//! upstream extraction layer gathered from a signed document.
//!
//! Nothing in this module performs parsing, digesting, or retrieval;
//! every field is a precomputed fact. The snapshot is immutable after
//! construction and all lookups are pure functions over it.

mod certificate;
pub use certificate::{CertificateRecord, TrustedServiceRecord};

mod revocation;
pub use revocation::{
    DigestAlgoAndValue, RevocationKind, RevocationOrigin, RevocationRecord, RevocationRefLocation,
    RevocationReference,
};

mod signature;
pub use signature::SignatureRecord;

mod timestamp;
pub use timestamp::{TimestampKind, TimestampRecord};

use std::collections::BTreeSet;

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A complete, read-only diagnostic data snapshot for one validation
/// run.
///
/// Revocation records are held in a content-addressed registry:
/// byte-identical revocation content referenced from several signatures
/// or locations collapses to a single logical record at construction
/// time. Signatures keep lightweight id references into the registry,
/// never copies.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", from = "RawDiagnosticData")]
pub struct DiagnosticData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    signatures: Vec<SignatureRecord>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    used_certificates: Vec<CertificateRecord>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    revocations: Vec<RevocationRecord>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    timestamps: Vec<TimestampRecord>,
}

/// Wire shape of the diagnostic data document. Deduplication of the
/// revocation registry happens in the `From` conversion, so a snapshot
/// deserialized from an extractor that emitted duplicates still honors
/// the one-logical-record invariant.
#[derive(Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
struct RawDiagnosticData {
    #[serde(default)]
    signatures: Vec<SignatureRecord>,

    #[serde(default)]
    used_certificates: Vec<CertificateRecord>,

    #[serde(default)]
    revocations: Vec<RevocationRecord>,

    #[serde(default)]
    timestamps: Vec<TimestampRecord>,
}

impl From<RawDiagnosticData> for DiagnosticData {
    fn from(raw: RawDiagnosticData) -> Self {
        DiagnosticData::new(
            raw.signatures,
            raw.used_certificates,
            raw.revocations,
            raw.timestamps,
        )
    }
}

impl DiagnosticData {
    /// Builds a snapshot from already-extracted records, deduplicating
    /// the revocation registry by content digest (first occurrence
    /// wins).
    pub fn new(
        signatures: Vec<SignatureRecord>,
        used_certificates: Vec<CertificateRecord>,
        revocations: Vec<RevocationRecord>,
        timestamps: Vec<TimestampRecord>,
    ) -> Self {
        let mut seen = BTreeSet::new();
        let mut registry = Vec::with_capacity(revocations.len());
        for revocation in revocations {
            if seen.insert(revocation.sha256.clone()) {
                registry.push(revocation);
            }
        }

        DiagnosticData {
            signatures,
            used_certificates,
            revocations: registry,
            timestamps,
        }
    }

    /// Parses a diagnostic data document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a snapshot from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns all signatures, in document order.
    pub fn signatures(&self) -> &[SignatureRecord] {
        &self.signatures
    }

    /// Returns the first signature's id, if any.
    pub fn first_signature_id(&self) -> Option<&str> {
        self.signatures.first().map(|s| s.id.as_str())
    }

    /// Looks up a signature by id.
    pub fn signature_by_id(&self, id: &str) -> Option<&SignatureRecord> {
        self.signatures.iter().find(|s| s.id == id)
    }

    /// Returns every certificate used anywhere in the snapshot.
    pub fn used_certificates(&self) -> &[CertificateRecord] {
        &self.used_certificates
    }

    /// Looks up a certificate by id.
    pub fn certificate_by_id(&self, id: &str) -> Option<&CertificateRecord> {
        self.used_certificates.iter().find(|c| c.id == id)
    }

    /// Returns all time-stamps in the snapshot.
    pub fn timestamps(&self) -> &[TimestampRecord] {
        &self.timestamps
    }

    /// Looks up a time-stamp by id.
    pub fn timestamp_by_id(&self, id: &str) -> Option<&TimestampRecord> {
        self.timestamps.iter().find(|t| t.id == id)
    }

    /// Returns the time-stamps covering the given signature.
    pub fn timestamps_for_signature(&self, signature_id: &str) -> Vec<&TimestampRecord> {
        let Some(signature) = self.signature_by_id(signature_id) else {
            return vec![];
        };
        signature
            .timestamp_ids
            .iter()
            .filter_map(|id| self.timestamp_by_id(id))
            .collect()
    }

    /// Returns the deduplicated revocation registry.
    pub fn all_revocation_data(&self) -> &[RevocationRecord] {
        &self.revocations
    }

    /// Looks up a revocation record by its content digest id.
    pub fn revocation_by_id(&self, id: &str) -> Option<&RevocationRecord> {
        self.revocations.iter().find(|r| r.id() == id)
    }

    /// Resolves a digest reference against the registry.
    pub fn revocation_by_digest(&self, digest: &DigestAlgoAndValue) -> Option<&RevocationRecord> {
        self.revocations.iter().find(|r| r.matches_digest(digest))
    }

    /// Returns the revocation records found for the given signature.
    ///
    /// References to the shared registry are followed; a record found
    /// for several signatures is returned once per signature without
    /// being duplicated in the registry.
    pub fn revocations_for_signature(&self, signature_id: &str) -> Vec<&RevocationRecord> {
        let Some(signature) = self.signature_by_id(signature_id) else {
            return vec![];
        };
        signature
            .found_revocations
            .iter()
            .filter_map(|id| self.revocation_by_id(id))
            .collect()
    }

    /// Returns the revocation records found for the given signature,
    /// filtered by kind.
    pub fn revocations_for_signature_by_kind(
        &self,
        signature_id: &str,
        kind: RevocationKind,
    ) -> Vec<&RevocationRecord> {
        self.revocations_for_signature(signature_id)
            .into_iter()
            .filter(|r| r.kind == kind)
            .collect()
    }

    /// Returns the revocation records found for the given signature,
    /// filtered by kind and origin.
    pub fn revocations_for_signature_by_kind_and_origin(
        &self,
        signature_id: &str,
        kind: RevocationKind,
        origin: RevocationOrigin,
    ) -> Vec<&RevocationRecord> {
        self.revocations_for_signature(signature_id)
            .into_iter()
            .filter(|r| r.kind == kind && r.origin == origin)
            .collect()
    }

    /// Returns the signature's revocation references that resolve to
    /// retrieved content. Unresolvable (orphan) references are excluded
    /// rather than surfaced with empty payloads.
    pub fn found_revocation_refs(&self, signature_id: &str) -> Vec<&RevocationReference> {
        let Some(signature) = self.signature_by_id(signature_id) else {
            return vec![];
        };
        signature
            .revocation_refs
            .iter()
            .filter(|r| self.revocation_by_digest(&r.digest).is_some())
            .collect()
    }

    /// Returns the resolving revocation references that appeared in the
    /// given attribute.
    pub fn found_revocation_refs_by_location(
        &self,
        signature_id: &str,
        location: RevocationRefLocation,
    ) -> Vec<&RevocationReference> {
        self.found_revocation_refs(signature_id)
            .into_iter()
            .filter(|r| r.location == location)
            .collect()
    }

    /// Returns the signature's orphan revocation references: those
    /// whose target content was never retrieved.
    pub fn orphan_revocation_refs(&self, signature_id: &str) -> Vec<&RevocationReference> {
        let Some(signature) = self.signature_by_id(signature_id) else {
            return vec![];
        };
        signature
            .revocation_refs
            .iter()
            .filter(|r| self.revocation_by_digest(&r.digest).is_none())
            .collect()
    }
}
