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

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Finding, FindingKind, Indication, SubIndication};

/// Sealed outcome of one check chain or building block.
///
/// A `Conclusion` is built once when a chain finishes and is never
/// mutated afterward. Parents aggregate child conclusions by owning
/// copies of their findings, never by holding references back into the
/// child.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Conclusion {
    /// Top-level verdict.
    pub indication: Indication,

    /// Refining reason code; present only on a non-passed indication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,

    /// Ordered findings recorded while the chain ran.
    #[serde(default)]
    pub findings: Vec<Finding>,
}

impl Conclusion {
    /// Returns a passed conclusion with no findings.
    pub fn passed() -> Self {
        Conclusion {
            indication: Indication::Passed,
            sub_indication: None,
            findings: Vec::new(),
        }
    }

    /// Returns `true` if the indication is a passed variant.
    pub fn is_passed(&self) -> bool {
        self.indication.is_passed()
    }

    /// Returns the failure findings, in recorded order.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings_of_kind(FindingKind::Failure)
    }

    /// Returns the warning findings, in recorded order.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings_of_kind(FindingKind::Warning)
    }

    /// Returns the informational findings, in recorded order.
    pub fn infos(&self) -> impl Iterator<Item = &Finding> {
        self.findings_of_kind(FindingKind::Informational)
    }

    fn findings_of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    /// Returns `true` if any finding carries the given message tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.findings.iter().any(|f| f.tag == tag)
    }
}
