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

//! Report assembly: detailed, simple, and standards-format reports.
//!
//! Reports are built strictly in order. The detailed report runs the
//! validation process; the simple report summarizes the detailed one;
//! the standards-format report is an optional rendering of the same
//! detailed tree. Downstream stages never consult the policy again.

mod detailed;
pub use detailed::{DetailedReport, SignatureAnalysis};

mod simple;
pub use simple::{SimpleReport, SimpleSignature};

mod etsi;
pub use etsi::{EtsiValidationReport, SignatureValidationReport};

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{diagnostic::DiagnosticData, Result};

/// Everything one validation run produces.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Reports {
    /// The diagnostic data the run was evaluated over.
    pub diagnostic_data: DiagnosticData,

    pub detailed_report: DetailedReport,

    pub simple_report: SimpleReport,

    /// Present only when the standards-format report was enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etsi_validation_report: Option<EtsiValidationReport>,
}

impl Reports {
    /// Serializes the full bundle as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
