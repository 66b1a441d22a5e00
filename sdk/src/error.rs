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

use thiserror::Error;

/// `Error` enumerates the configuration and programming errors a
/// validation run can fail with.
///
/// Findings about the validated document itself never surface here; they
/// are reported through the conclusion tree of the produced reports. An
/// `Error` means the engine was invoked incorrectly, not that the
/// document is invalid.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The diagnostic data is missing.
    #[error("the diagnostic data is missing")]
    MissingDiagnosticData,

    /// The validation policy is missing.
    #[error("the validation policy is missing")]
    MissingValidationPolicy,

    /// The current time is missing.
    #[error("the current time is missing")]
    MissingCurrentTime,

    /// The validation level is missing.
    #[error("the validation level is missing")]
    MissingValidationLevel,

    /// A record referenced by id could not be found in the diagnostic
    /// data. Indicates an inconsistent snapshot from the extraction
    /// layer.
    #[error("dangling reference in diagnostic data: {kind} id = {id}")]
    DanglingReference {
        /// Kind of the referenced record.
        kind: &'static str,
        /// The unresolvable id.
        id: String,
    },

    /// Could not parse a diagnostic data or policy document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while a caller was loading input documents.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for sigval operations.
pub type Result<T> = std::result::Result<T, Error>;
