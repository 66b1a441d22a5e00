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

use crate::{finding, ErrorBehavior, Indication, StatusTracker, SubIndication};

#[test]
fn continue_when_possible() {
    let mut tracker = StatusTracker::default();

    tracker.add(finding!("check.one", "test"));
    let result: Result<(), &str> =
        tracker.add_failure(finding!("check.two.failed", "test").failure(), "stop");
    assert!(result.is_ok());

    tracker.add(finding!("check.three", "test"));
    assert_eq!(tracker.findings().len(), 3);
    assert!(tracker.has_any_failure());
}

#[test]
fn stop_on_first_failure() {
    let mut tracker = StatusTracker::with_error_behavior(ErrorBehavior::StopOnFirstFailure);

    tracker.add(finding!("check.one", "test"));
    let result: Result<(), &str> =
        tracker.add_failure(finding!("check.two.failed", "test").failure(), "stop");
    assert_eq!(result, Err("stop"));
    assert_eq!(tracker.findings().len(), 2);
}

#[test]
fn has_tag() {
    let mut tracker = StatusTracker::default();
    tracker.add(finding!("check.one", "test"));

    assert!(tracker.has_tag("check.one"));
    assert!(!tracker.has_tag("check.two"));
}

#[test]
fn append() {
    let mut tracker1 = StatusTracker::default();
    let mut tracker2 = StatusTracker::default();

    tracker1.add(finding!("check.one", "test"));
    tracker2.add(finding!("check.two", "test"));

    tracker1.append(&tracker2);
    assert_eq!(tracker1.findings().len(), 2);
    assert_eq!(tracker2.findings().len(), 1);
}

#[test]
fn filter_failures() {
    let mut tracker = StatusTracker::default();

    tracker.add(finding!("check.one", "test"));
    let _: Result<(), ()> =
        tracker.add_failure(finding!("check.two.failed", "test").failure(), ());

    assert_eq!(tracker.filter_failures().count(), 1);
}

#[test]
fn seal() {
    let mut tracker = StatusTracker::default();
    tracker.add(finding!("check.one", "test"));
    let _: Result<(), ()> =
        tracker.add_failure(finding!("check.two.failed", "test").failure(), ());

    let conclusion = tracker.seal(
        Indication::Indeterminate,
        Some(SubIndication::NoCertificateChainFound),
    );

    assert_eq!(conclusion.indication, Indication::Indeterminate);
    assert_eq!(
        conclusion.sub_indication,
        Some(SubIndication::NoCertificateChainFound)
    );
    assert_eq!(conclusion.findings.len(), 2);
    assert!(!conclusion.is_passed());
}
