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

/// Kind of a time-stamp token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampKind {
    /// Covers the signed content, produced before signing.
    ContentTimestamp,

    /// Covers the signature value.
    SignatureTimestamp,

    /// Covers the whole archival data set.
    ArchiveTimestamp,
}

/// One time-stamp token as seen by the extraction layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TimestampRecord {
    /// Unique id assigned by the extraction layer.
    pub id: String,

    /// Kind of this token.
    pub kind: TimestampKind,

    /// Time asserted by the time-stamp authority.
    pub production_time: DateTime<Utc>,

    /// `true` if the token is structurally well-formed.
    #[serde(default)]
    pub structure_valid: bool,

    /// `true` if the token's message imprint matches the covered data.
    #[serde(default)]
    pub message_imprint_intact: bool,

    /// `true` if the token's own signature verified.
    #[serde(default)]
    pub signature_intact: bool,

    /// Certificate chain ids of the time-stamp authority, signing
    /// certificate first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificate_chain: Vec<String>,

    /// Signature algorithm identifier of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
}

impl TimestampRecord {
    /// Returns the TSA signing certificate's id, when a chain is
    /// present.
    pub fn signing_certificate_id(&self) -> Option<&str> {
        self.certificate_chain.first().map(String::as_str)
    }

    /// Returns `true` if the token itself is intact: well-formed, with
    /// a matching message imprint and a verified signature.
    pub fn is_intact(&self) -> bool {
        self.structure_valid && self.message_imprint_intact && self.signature_intact
    }
}
