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
#![doc = include_str!("../README.md")]

pub mod diagnostic;
pub use diagnostic::DiagnosticData;

mod error;
pub use error::{Error, Result};

mod executor;
pub use executor::ProcessExecutor;

pub mod i18n;
pub use i18n::{Locale, MessageRenderer};

pub mod policy;
pub use policy::ValidationPolicy;

pub mod process;
pub use process::{Context, ValidationLevel, ValidationTime};

pub mod report;
pub use report::Reports;

pub use sigval_status_tracker::{
    message_codes, Conclusion, Finding, FindingKind, Indication, SubIndication,
};

/// The internal name of this SDK.
pub const NAME: &str = "sigval";

/// The version of this SDK.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
