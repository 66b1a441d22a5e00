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

use crate::report::DetailedReport;

/// One standards-format validation report per signature.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SignatureValidationReport {
    /// Identifier of the signature the report covers.
    pub signature_identifier: String,

    /// The main validation status.
    pub status: Indication,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,

    /// Tags of the constraints that produced failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_constraints: Vec<String>,
}

/// The standards-format validation report; built only when explicitly
/// enabled on the executor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EtsiValidationReport {
    pub validation_time: DateTime<Utc>,

    pub signature_validation_reports: Vec<SignatureValidationReport>,
}

impl EtsiValidationReport {
    pub(crate) fn build(detailed: &DetailedReport) -> Self {
        let signature_validation_reports = detailed
            .signatures
            .iter()
            .map(|analysis| SignatureValidationReport {
                signature_identifier: analysis.id.clone(),
                status: analysis.conclusion.indication,
                sub_indication: analysis.conclusion.sub_indication,
                failed_constraints: analysis
                    .conclusion
                    .errors()
                    .map(|f| f.tag.to_string())
                    .collect(),
            })
            .collect();

        EtsiValidationReport {
            validation_time: detailed.validation_time,
            signature_validation_reports,
        }
    }
}
