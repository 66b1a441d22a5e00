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

use chrono::{DateTime, Utc};
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostic::RevocationReference;

/// One signature as seen by the extraction layer.
///
/// Cryptographic outcomes (`signature_intact`, `digest_matches`,
/// `structure_valid`) are precomputed facts; an absent field means the
/// corresponding operation did not succeed, never that it passed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
    /// Unique id assigned by the extraction layer.
    pub id: String,

    /// Signing time claimed inside the signature, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_signing_time: Option<DateTime<Utc>>,

    /// Certificate chain ids, signing certificate first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificate_chain: Vec<String>,

    /// Ids of revocation records whose content was found for this
    /// signature.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub found_revocations: Vec<String>,

    /// Revocation references carried by this signature's attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub revocation_refs: Vec<RevocationReference>,

    /// Ids of time-stamps covering this signature.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timestamp_ids: Vec<String>,

    /// Signature algorithm identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,

    /// `true` if the signature container is structurally well-formed.
    #[serde(default)]
    pub structure_valid: bool,

    /// `true` if the signature value verified.
    #[serde(default)]
    pub signature_intact: bool,

    /// `true` if the signed digest matched the signed content.
    #[serde(default)]
    pub digest_matches: bool,

    /// `true` if this is a counter-signature.
    #[serde(default)]
    pub counter_signature: bool,
}

impl SignatureRecord {
    /// Returns the signing certificate's id, when a chain is present.
    pub fn signing_certificate_id(&self) -> Option<&str> {
        self.certificate_chain.first().map(String::as_str)
    }
}
