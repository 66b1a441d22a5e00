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
use sigval_status_tracker::{Indication, SubIndication};

use crate::{diagnostic::DiagnosticData, i18n::MessageRenderer, report::DetailedReport};

/// One summarized entry per signature.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SimpleSignature {
    /// The signature's identifier.
    pub id: String,

    /// Final indication; a definitive per-signature outcome is lifted
    /// to its document-level form.
    pub indication: Indication,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,

    /// The claimed signing time, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_time: Option<DateTime<Utc>>,

    /// Subject name of the signing certificate, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,

    /// Rendered failure messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    /// Rendered warning messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// Rendered informational messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infos: Vec<String>,
}

/// One line per signature plus document-level counts. Derived purely
/// from the detailed report, the diagnostic data, and the validation
/// time; the policy is never consulted again.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SimpleReport {
    /// Time the run was evaluated at.
    pub validation_time: DateTime<Utc>,

    /// Document-level indication for a document carrying no signatures
    /// at all. Absent whenever at least one signature was analyzed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_indication: Option<Indication>,

    /// Total number of signatures in the document.
    pub signature_count: usize,

    /// Signatures that validated.
    pub valid_signature_count: usize,

    /// Signatures whose outcome is indeterminate.
    pub indeterminate_signature_count: usize,

    /// Signatures that failed validation.
    pub invalid_signature_count: usize,

    pub signatures: Vec<SimpleSignature>,
}

/// Lifts a per-signature indication to its document-level form.
fn lift(indication: Indication) -> Indication {
    match indication {
        Indication::Passed => Indication::TotalPassed,
        Indication::Failed => Indication::TotalFailed,
        other => other,
    }
}

impl SimpleReport {
    pub(crate) fn build(
        detailed: &DetailedReport,
        diagnostic: &DiagnosticData,
        renderer: &MessageRenderer,
    ) -> Self {
        let mut signatures = Vec::with_capacity(detailed.signatures.len());
        let mut valid = 0;
        let mut indeterminate = 0;
        let mut invalid = 0;

        for analysis in &detailed.signatures {
            let indication = lift(analysis.conclusion.indication);
            match indication {
                Indication::TotalPassed => valid += 1,
                Indication::TotalFailed => invalid += 1,
                _ => indeterminate += 1,
            }

            let record = diagnostic.signature_by_id(&analysis.id);
            let signed_by = record
                .and_then(|r| r.signing_certificate_id())
                .and_then(|id| diagnostic.certificate_by_id(id))
                .map(|cert| cert.subject_name.clone());

            signatures.push(SimpleSignature {
                id: analysis.id.clone(),
                indication,
                sub_indication: analysis.conclusion.sub_indication,
                signing_time: record.and_then(|r| r.claimed_signing_time),
                signed_by,
                errors: analysis
                    .conclusion
                    .errors()
                    .map(|f| renderer.render(&f.tag))
                    .collect(),
                warnings: analysis
                    .conclusion
                    .warnings()
                    .map(|f| renderer.render(&f.tag))
                    .collect(),
                infos: analysis
                    .conclusion
                    .infos()
                    .map(|f| renderer.render(&f.tag))
                    .collect(),
            });
        }

        let document_indication = signatures
            .is_empty()
            .then_some(Indication::NoSignatureFound);

        SimpleReport {
            validation_time: detailed.validation_time,
            document_indication,
            signature_count: signatures.len(),
            valid_signature_count: valid,
            indeterminate_signature_count: indeterminate,
            invalid_signature_count: invalid,
            signatures,
        }
    }
}
