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

//! Format check (FC): structural well-formedness of a token.

use sigval_status_tracker::{message_codes, Indication, SubIndication};

use crate::process::chain::ChainCheck;

/// Consumes the upstream extraction layer's well-formedness verdict.
pub(crate) struct StructureCheck {
    pub valid: bool,
}

impl ChainCheck for StructureCheck {
    fn process(&self) -> bool {
        self.valid
    }

    fn message_tag(&self) -> &'static str {
        message_codes::STRUCTURE_VALID
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::STRUCTURE_INVALID
    }

    fn failed_indication(&self) -> Indication {
        Indication::Failed
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::FormatFailure)
    }
}
