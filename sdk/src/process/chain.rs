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

use log::debug;
use sigval_status_tracker::{finding, Conclusion, Indication, StatusTracker, SubIndication};

use crate::policy::ConstraintLevel;

/// One atomic pass/fail check contributing to a chain's conclusion.
///
/// A check decides nothing about enforcement; the chain applies the
/// policy's constraint level to its result. Implementations must treat
/// absent-but-required data as a negative result rather than panic or
/// error.
pub(crate) trait ChainCheck {
    /// The pure predicate.
    fn process(&self) -> bool;

    /// Message tag recorded when the check passes.
    fn message_tag(&self) -> &'static str;

    /// Message tag recorded when the check does not pass.
    fn error_message_tag(&self) -> &'static str;

    /// Indication a failing chain concludes with because of this check.
    fn failed_indication(&self) -> Indication;

    /// Sub-indication a failing chain concludes with because of this
    /// check.
    fn failed_sub_indication(&self) -> Option<SubIndication>;

    /// Parameterized diagnostic text for a non-passing result.
    ///
    /// Only invoked on the non-success path; never computed for a
    /// passing check.
    fn additional_info(&self) -> Option<String> {
        None
    }
}

/// Executes [`ChainCheck`]s in declared order with the constraint
/// semantics of the policy.
///
/// The first enforced failure determines the chain's indication and
/// sub-indication and halts further items; warning and informational
/// findings are retained without stopping the chain; disabled items are
/// skipped entirely.
pub(crate) struct Chain {
    tracker: StatusTracker,
    outcome: Option<(Indication, Option<SubIndication>)>,
}

impl Chain {
    pub(crate) fn new() -> Self {
        Chain {
            tracker: StatusTracker::default(),
            outcome: None,
        }
    }

    /// Runs one check under the given constraint level.
    pub(crate) fn run(&mut self, check: &dyn ChainCheck, level: ConstraintLevel) -> &mut Self {
        if self.outcome.is_some() || level == ConstraintLevel::Ignore {
            return self;
        }

        if check.process() {
            self.tracker.add(finding!(check.message_tag(), "chain"));
            return self;
        }

        let mut finding = finding!(check.error_message_tag(), "chain");
        if let Some(info) = check.additional_info() {
            finding = finding.additional_info(info);
        }

        match level {
            ConstraintLevel::Inform => self.tracker.add(finding.informational()),
            ConstraintLevel::Warn => self.tracker.add(finding.warning()),
            ConstraintLevel::Fail => {
                debug!(
                    "chain halted: {} -> {:?}/{:?}",
                    check.error_message_tag(),
                    check.failed_indication(),
                    check.failed_sub_indication()
                );
                // the tracker continues; the chain itself short-circuits
                let _: Result<(), ()> = self.tracker.add_failure(finding.failure(), ());
                self.outcome =
                    Some((check.failed_indication(), check.failed_sub_indication()));
            }
            ConstraintLevel::Ignore => {}
        }

        self
    }

    /// Seals the chain into its conclusion.
    pub(crate) fn conclude(self) -> Conclusion {
        match self.outcome {
            Some((indication, sub_indication)) => self.tracker.seal(indication, sub_indication),
            None => self.tracker.seal(Indication::Passed, None),
        }
    }
}

/// Merges sub-conclusions into a parent conclusion.
///
/// Findings are appended in the given order; the first non-passed
/// sub-conclusion determines the parent's indication and
/// sub-indication. Parents own copies of the children's findings.
pub(crate) fn merge_conclusions<'a, I>(parts: I) -> Conclusion
where
    I: IntoIterator<Item = &'a Conclusion>,
{
    let mut indication = Indication::Passed;
    let mut sub_indication = None;
    let mut findings = Vec::new();

    for part in parts {
        findings.extend(part.findings.iter().cloned());
        if indication == Indication::Passed && !part.is_passed() {
            indication = part.indication;
            sub_indication = part.sub_indication;
        }
    }

    Conclusion {
        indication,
        sub_indication,
        findings,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use sigval_status_tracker::FindingKind;

    use super::*;

    struct FixedCheck {
        passes: bool,
    }

    impl ChainCheck for FixedCheck {
        fn process(&self) -> bool {
            self.passes
        }

        fn message_tag(&self) -> &'static str {
            "test.passed"
        }

        fn error_message_tag(&self) -> &'static str {
            "test.failed"
        }

        fn failed_indication(&self) -> Indication {
            Indication::Indeterminate
        }

        fn failed_sub_indication(&self) -> Option<SubIndication> {
            Some(SubIndication::TryLater)
        }

        fn additional_info(&self) -> Option<String> {
            Some("info".to_owned())
        }
    }

    #[test]
    fn passing_chain_concludes_passed() {
        let mut chain = Chain::new();
        chain
            .run(&FixedCheck { passes: true }, ConstraintLevel::Fail)
            .run(&FixedCheck { passes: true }, ConstraintLevel::Fail);
        let conclusion = chain.conclude();

        assert!(conclusion.is_passed());
        assert_eq!(conclusion.findings.len(), 2);
        assert!(conclusion.has_tag("test.passed"));
    }

    #[test]
    fn enforced_failure_halts_chain() {
        let mut chain = Chain::new();
        chain
            .run(&FixedCheck { passes: false }, ConstraintLevel::Fail)
            .run(&FixedCheck { passes: true }, ConstraintLevel::Fail);
        let conclusion = chain.conclude();

        assert_eq!(conclusion.indication, Indication::Indeterminate);
        assert_eq!(conclusion.sub_indication, Some(SubIndication::TryLater));
        // the second item never ran
        assert_eq!(conclusion.findings.len(), 1);
        assert_eq!(conclusion.findings[0].kind, FindingKind::Failure);
        assert_eq!(
            conclusion.findings[0].additional_info.as_deref(),
            Some("info")
        );
    }

    #[test]
    fn warning_does_not_halt_chain() {
        let mut chain = Chain::new();
        chain
            .run(&FixedCheck { passes: false }, ConstraintLevel::Warn)
            .run(&FixedCheck { passes: true }, ConstraintLevel::Fail);
        let conclusion = chain.conclude();

        assert!(conclusion.is_passed());
        assert_eq!(conclusion.findings.len(), 2);
        assert_eq!(conclusion.warnings().count(), 1);
    }

    #[test]
    fn informational_is_recorded() {
        let mut chain = Chain::new();
        chain.run(&FixedCheck { passes: false }, ConstraintLevel::Inform);
        let conclusion = chain.conclude();

        assert!(conclusion.is_passed());
        assert_eq!(conclusion.infos().count(), 1);
    }

    #[test]
    fn disabled_check_is_skipped() {
        let mut chain = Chain::new();
        chain.run(&FixedCheck { passes: false }, ConstraintLevel::Ignore);
        let conclusion = chain.conclude();

        assert!(conclusion.is_passed());
        assert!(conclusion.findings.is_empty());
    }

    #[test]
    fn merge_takes_first_failure() {
        let passed = Conclusion::passed();
        let mut chain = Chain::new();
        chain.run(&FixedCheck { passes: false }, ConstraintLevel::Fail);
        let failed = chain.conclude();

        let merged = merge_conclusions([&passed, &failed, &passed]);
        assert_eq!(merged.indication, Indication::Indeterminate);
        assert_eq!(merged.sub_indication, Some(SubIndication::TryLater));
    }
}
