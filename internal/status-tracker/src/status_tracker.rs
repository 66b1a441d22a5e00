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

use std::{fmt::Debug, iter::Iterator};

use crate::{Conclusion, Finding, Indication, SubIndication};

/// A `StatusTracker` aggregates the [`Finding`]s recorded while one
/// check chain runs and controls short-circuit behavior when a check
/// fails.
#[derive(Debug, Default)]
pub struct StatusTracker {
    error_behavior: ErrorBehavior,
    findings: Vec<Finding>,
}

impl StatusTracker {
    /// Returns a [`StatusTracker`] with the specified [`ErrorBehavior`].
    pub fn with_error_behavior(error_behavior: ErrorBehavior) -> Self {
        Self {
            error_behavior,
            findings: vec![],
        }
    }

    /// Returns the current list of findings.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Appends the findings of another [`StatusTracker`] to this one.
    pub fn append(&mut self, other: &StatusTracker) {
        for finding in other.findings() {
            self.add(finding.clone());
        }
    }

    /// Adds a non-failure [`Finding`] to this status tracker.
    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Adds a failure [`Finding`] to this status tracker.
    ///
    /// Will return `Err(err)` if configured to stop immediately on
    /// failures or `Ok(())` if configured to continue. _(See
    /// [`ErrorBehavior`].)_
    pub fn add_failure<E>(&mut self, finding: Finding, err: E) -> Result<(), E> {
        self.findings.push(finding);

        match self.error_behavior {
            ErrorBehavior::StopOnFirstFailure => Err(err),
            ErrorBehavior::ContinueWhenPossible => Ok(()),
        }
    }

    /// Returns the [`Finding`]s that report failures.
    pub fn filter_failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings().iter().filter(|f| f.is_failure())
    }

    /// Returns `true` if the tracker contains a finding with the given
    /// message tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.findings().iter().any(|f| f.tag == tag)
    }

    /// Returns `true` if the tracker contains any failure finding.
    pub fn has_any_failure(&self) -> bool {
        self.filter_failures().next().is_some()
    }

    /// Seals this tracker into a [`Conclusion`] with the given verdict.
    ///
    /// Consumes the tracker; the resulting conclusion owns the recorded
    /// findings and is immutable from here on.
    pub fn seal(
        self,
        indication: Indication,
        sub_indication: Option<SubIndication>,
    ) -> Conclusion {
        Conclusion {
            indication,
            sub_indication,
            findings: self.findings,
        }
    }
}

/// `ErrorBehavior` configures the behavior of [`StatusTracker`] when its
/// [`add_failure`] function is called.
///
/// [`add_failure`]: StatusTracker::add_failure
#[derive(Debug, Eq, PartialEq)]
pub enum ErrorBehavior {
    /// If a failure is encountered, stop the chain immediately.
    StopOnFirstFailure,

    /// If a failure is encountered, record it and continue as much as
    /// possible.
    ContinueWhenPossible,
}

impl Default for ErrorBehavior {
    fn default() -> Self {
        Self::ContinueWhenPossible
    }
}
