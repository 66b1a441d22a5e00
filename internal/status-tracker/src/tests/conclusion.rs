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

use crate::{finding, Conclusion, Indication, StatusTracker, SubIndication};

#[test]
fn passed() {
    let conclusion = Conclusion::passed();

    assert_eq!(conclusion.indication, Indication::Passed);
    assert_eq!(conclusion.sub_indication, None);
    assert!(conclusion.is_passed());
    assert!(conclusion.findings.is_empty());
}

#[test]
fn findings_by_kind() {
    let mut tracker = StatusTracker::default();
    tracker.add(finding!("check.one", "test"));
    tracker.add(finding!("check.two", "test").warning());
    tracker.add(finding!("check.three", "test").informational());
    let _: Result<(), ()> = tracker.add_failure(finding!("check.four", "test").failure(), ());

    let conclusion = tracker.seal(Indication::Failed, Some(SubIndication::HashFailure));

    assert_eq!(conclusion.errors().count(), 1);
    assert_eq!(conclusion.warnings().count(), 1);
    assert_eq!(conclusion.infos().count(), 1);
    assert!(conclusion.has_tag("check.two"));
    assert!(!conclusion.has_tag("check.five"));
}

#[test]
fn serde_round_trip() {
    let mut tracker = StatusTracker::default();
    let _: Result<(), ()> = tracker.add_failure(
        finding!("check.failed", "test")
            .failure()
            .additional_info("value: 42"),
        (),
    );
    let conclusion = tracker.seal(Indication::Indeterminate, Some(SubIndication::TryLater));

    let json = serde_json::to_string(&conclusion).unwrap();
    assert!(json.contains("INDETERMINATE"));
    assert!(json.contains("TRY_LATER"));

    let back: Conclusion = serde_json::from_str(&json).unwrap();
    assert_eq!(back.indication, Indication::Indeterminate);
    assert_eq!(back.sub_indication, Some(SubIndication::TryLater));
    assert_eq!(back.findings.len(), 1);
}
