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

//! Signature acceptance validation (SAV): algorithm policy checks.

use sigval_status_tracker::{message_codes, Indication, SubIndication};

use crate::{policy::MultiValuesConstraint, process::chain::ChainCheck};

/// Checks the declared signature algorithm against the policy's accepted
/// set. A token that declares no algorithm fails the check.
pub(crate) struct AcceptedAlgorithmCheck<'a> {
    pub algorithm: Option<&'a str>,
    pub constraint: &'a MultiValuesConstraint,
}

impl ChainCheck for AcceptedAlgorithmCheck<'_> {
    fn process(&self) -> bool {
        match self.algorithm {
            Some(algo) => self.constraint.is_accepted(algo),
            None => false,
        }
    }

    fn message_tag(&self) -> &'static str {
        message_codes::ALGORITHM_ACCEPTED
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::ALGORITHM_REJECTED
    }

    fn failed_indication(&self) -> Indication {
        Indication::Indeterminate
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::CryptoConstraintsFailure)
    }

    fn additional_info(&self) -> Option<String> {
        self.algorithm.map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::{policy::ConstraintLevel, process::chain::Chain};

    fn constraint(accepted: &[&str]) -> MultiValuesConstraint {
        MultiValuesConstraint {
            level: ConstraintLevel::Fail,
            accepted: accepted.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[test]
    fn accepted_algorithm_passes() {
        let c = constraint(&["SHA256withRSA", "SHA256withECDSA"]);
        let check = AcceptedAlgorithmCheck {
            algorithm: Some("SHA256withECDSA"),
            constraint: &c,
        };

        let mut chain = Chain::new();
        chain.run(&check, ConstraintLevel::Fail);

        let conclusion = chain.conclude();
        assert!(conclusion.is_passed());
    }

    #[test]
    fn rejected_algorithm_is_indeterminate() {
        let c = constraint(&["SHA256withRSA"]);
        let check = AcceptedAlgorithmCheck {
            algorithm: Some("SHA1withRSA"),
            constraint: &c,
        };

        let mut chain = Chain::new();
        chain.run(&check, ConstraintLevel::Fail);

        let conclusion = chain.conclude();
        assert_eq!(conclusion.indication, Indication::Indeterminate);
        assert_eq!(
            conclusion.sub_indication,
            Some(SubIndication::CryptoConstraintsFailure)
        );

        // The rejected algorithm name is carried as additional info.
        let failure = conclusion.errors().next().unwrap();
        assert_eq!(failure.additional_info.as_deref(), Some("SHA1withRSA"));
    }

    #[test]
    fn missing_algorithm_fails() {
        let c = constraint(&["*"]);
        let check = AcceptedAlgorithmCheck {
            algorithm: None,
            constraint: &c,
        };

        let mut chain = Chain::new();
        chain.run(&check, ConstraintLevel::Fail);

        assert!(!chain.conclude().is_passed());
    }
}
