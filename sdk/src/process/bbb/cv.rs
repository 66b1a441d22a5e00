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

//! Cryptographic verification (CV): consumes the precomputed outcomes
//! of signature-value verification and digest comparison.

use sigval_status_tracker::{message_codes, Indication, SubIndication};

use crate::process::chain::ChainCheck;

pub(crate) struct SignatureIntactCheck {
    pub intact: bool,
}

impl ChainCheck for SignatureIntactCheck {
    fn process(&self) -> bool {
        self.intact
    }

    fn message_tag(&self) -> &'static str {
        message_codes::SIGNATURE_INTACT
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::SIGNATURE_NOT_INTACT
    }

    fn failed_indication(&self) -> Indication {
        Indication::Failed
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::SigCryptoFailure)
    }
}

pub(crate) struct DigestMatchCheck {
    pub matches: bool,
}

impl ChainCheck for DigestMatchCheck {
    fn process(&self) -> bool {
        self.matches
    }

    fn message_tag(&self) -> &'static str {
        message_codes::DIGEST_MATCH
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::DIGEST_MISMATCH
    }

    fn failed_indication(&self) -> Indication {
        Indication::Failed
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::HashFailure)
    }
}

/// Message-imprint comparison for a time-stamp token.
pub(crate) struct MessageImprintCheck {
    pub intact: bool,
}

impl ChainCheck for MessageImprintCheck {
    fn process(&self) -> bool {
        self.intact
    }

    fn message_tag(&self) -> &'static str {
        message_codes::TIMESTAMP_MESSAGE_IMPRINT_MATCH
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::TIMESTAMP_MESSAGE_IMPRINT_MISMATCH
    }

    fn failed_indication(&self) -> Indication {
        Indication::Failed
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::HashFailure)
    }
}
