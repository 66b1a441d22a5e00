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
use sigval_status_tracker::Conclusion;

use crate::{
    diagnostic::DiagnosticData,
    policy::ValidationPolicy,
    process::{
        bbb::{self, BbbResult},
        qualification::{self, QualificationResult},
        ValidationLevel,
    },
    Result,
};

/// The full conclusion tree for one signature: its basic building
/// blocks, the blocks of every covering time-stamp, and qualification
/// at the three validation times.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SignatureAnalysis {
    /// The signature this tree covers.
    pub id: String,

    /// Basic building blocks of the signature itself.
    pub basic_building_blocks: BbbResult,

    /// Basic building blocks of each covering time-stamp, present only
    /// when the validation level includes time-stamps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timestamps: Vec<BbbResult>,

    /// Qualification of the signing certificate at the three
    /// validation times; empty when no signing certificate is known.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualification: Vec<QualificationResult>,

    /// The signature's conclusion; driven by the basic building
    /// blocks.
    pub conclusion: Conclusion,
}

/// One node per signature with full conclusion trees.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DetailedReport {
    /// Time the run was evaluated at.
    pub validation_time: DateTime<Utc>,

    /// How much material the run validated.
    pub validation_level: ValidationLevel,

    /// One analysis per signature, in diagnostic order.
    pub signatures: Vec<SignatureAnalysis>,
}

impl DetailedReport {
    /// Runs the whole validation process and assembles its tree.
    pub(crate) fn build(
        diagnostic: &DiagnosticData,
        policy: &ValidationPolicy,
        validation_time: DateTime<Utc>,
        validation_level: ValidationLevel,
    ) -> Result<Self> {
        let mut signatures = Vec::with_capacity(diagnostic.signatures().len());

        for signature in diagnostic.signatures() {
            let basic_building_blocks = bbb::evaluate_signature(
                diagnostic,
                signature,
                policy,
                validation_time,
                validation_level,
            )?;

            let timestamps = if validation_level.includes_timestamps() {
                diagnostic
                    .timestamps_for_signature(&signature.id)
                    .into_iter()
                    .map(|ts| bbb::evaluate_timestamp(diagnostic, ts, policy))
                    .collect::<Result<Vec<_>>>()?
            } else {
                Vec::new()
            };

            let qualification = match signature
                .signing_certificate_id()
                .and_then(|id| diagnostic.certificate_by_id(id))
            {
                Some(certificate) => qualification::evaluate(
                    certificate,
                    policy.constraints(basic_building_blocks.context),
                    bbb::best_signature_time(diagnostic, signature, validation_time),
                    validation_time,
                ),
                None => Vec::new(),
            };

            let conclusion = basic_building_blocks.conclusion.clone();
            signatures.push(SignatureAnalysis {
                id: signature.id.clone(),
                basic_building_blocks,
                timestamps,
                qualification,
                conclusion,
            });
        }

        Ok(DetailedReport {
            validation_time,
            validation_level,
            signatures,
        })
    }

    pub fn signature_by_id(&self, id: &str) -> Option<&SignatureAnalysis> {
        self.signatures.iter().find(|s| s.id == id)
    }
}
