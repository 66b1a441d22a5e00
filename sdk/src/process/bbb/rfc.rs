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

//! Revocation freshness checks (RFC): is revocation data present for
//! the signing certificate, and is it recent enough to rely on.

use chrono::{DateTime, Utc};
use sigval_status_tracker::{message_codes, Indication, SubIndication};

use crate::{
    diagnostic::{RevocationRecord, RevocationReference},
    process::chain::ChainCheck,
};

/// Checks that at least one revocation record covers the signing
/// certificate. Trust anchors do not need one.
pub(crate) struct RevocationDataExistsCheck {
    pub exists: bool,
}

impl ChainCheck for RevocationDataExistsCheck {
    fn process(&self) -> bool {
        self.exists
    }

    fn message_tag(&self) -> &'static str {
        message_codes::REVOCATION_DATA_FOUND
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::REVOCATION_DATA_MISSING
    }

    fn failed_indication(&self) -> Indication {
        Indication::Indeterminate
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::TryLater)
    }
}

/// Checks that a revocation record is fresh relative to the time the
/// certificate was used.
///
/// The record must have been produced at or after the usage time, and
/// its age at validation time must not exceed the policy's maximum. A
/// record without a production time is never fresh. An absent maximum
/// age only requires production at or after the usage time.
pub(crate) struct RevocationFreshnessCheck<'a> {
    pub record: Option<&'a RevocationRecord>,
    pub usage_time: DateTime<Utc>,
    pub validation_time: DateTime<Utc>,
    pub max_age_seconds: Option<i64>,
}

impl ChainCheck for RevocationFreshnessCheck<'_> {
    fn process(&self) -> bool {
        let produced_at = match self.record.and_then(|r| r.produced_at) {
            Some(t) => t,
            None => return false,
        };

        if produced_at < self.usage_time {
            return false;
        }

        match self.max_age_seconds {
            Some(max) => (self.validation_time - produced_at).num_seconds() <= max,
            None => true,
        }
    }

    fn message_tag(&self) -> &'static str {
        message_codes::REVOCATION_FRESH
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::REVOCATION_NOT_FRESH
    }

    fn failed_indication(&self) -> Indication {
        Indication::Indeterminate
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::TryLater)
    }

    fn additional_info(&self) -> Option<String> {
        let record = self.record?;
        match record.produced_at {
            Some(produced_at) => Some(format!(
                "revocation {} produced at {}, usage time {}",
                record.id(),
                produced_at.to_rfc3339(),
                self.usage_time.to_rfc3339()
            )),
            None => Some(format!("revocation {} has no production time", record.id())),
        }
    }
}

/// Flags a revocation reference whose digest resolves to no record in
/// the registry. Always run at inform level; an orphan reference never
/// fails a signature on its own.
pub(crate) struct OrphanRefCheck<'a> {
    pub reference: &'a RevocationReference,
}

impl ChainCheck for OrphanRefCheck<'_> {
    fn process(&self) -> bool {
        false
    }

    fn message_tag(&self) -> &'static str {
        message_codes::REVOCATION_REF_ORPHAN
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::REVOCATION_REF_ORPHAN
    }

    fn failed_indication(&self) -> Indication {
        Indication::Indeterminate
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::TryLater)
    }

    fn additional_info(&self) -> Option<String> {
        Some(format!(
            "{}:{}",
            self.reference.digest.algorithm, self.reference.digest.value
        ))
    }
}
