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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod conclusion;
pub use conclusion::Conclusion;

mod indication;
pub use indication::{Indication, SubIndication};

mod log;
pub use log::{Finding, FindingKind};

pub mod message_codes;

mod status_tracker;
pub use status_tracker::{ErrorBehavior, StatusTracker};

#[cfg(test)]
pub(crate) mod tests;
