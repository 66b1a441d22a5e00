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

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level verdict of a validation process or of one of its building
/// blocks.
///
/// The `Total*` variants are only produced at the signature level when a
/// whole validation process has completed; building blocks report
/// [`Passed`], [`Failed`] or [`Indeterminate`].
///
/// [`Passed`]: Indication::Passed
/// [`Failed`]: Indication::Failed
/// [`Indeterminate`]: Indication::Indeterminate
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Indication {
    /// The complete signature validation process succeeded.
    TotalPassed,

    /// The complete signature validation process established that the
    /// signature is invalid.
    TotalFailed,

    /// The check or building block succeeded.
    Passed,

    /// The check or building block established a definitive failure.
    Failed,

    /// The available information was not sufficient to reach a pass or
    /// fail verdict.
    Indeterminate,

    /// The document contained no signature to validate.
    NoSignatureFound,
}

impl Indication {
    /// Returns `true` for [`Indication::Passed`] and
    /// [`Indication::TotalPassed`].
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed | Self::TotalPassed)
    }
}

/// Refining reason code attached to a non-passed [`Indication`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubIndication {
    /// The signature or its signed content is structurally malformed.
    FormatFailure,

    /// The signed data could not be located or reconstructed.
    SignedDataNotFound,

    /// The digest of the signed data does not match the signed digest.
    HashFailure,

    /// The signature value itself failed cryptographic verification.
    SigCryptoFailure,

    /// No certificate chain up to an accepted trust anchor or trusted
    /// service could be established.
    NoCertificateChainFound,

    /// The signing certificate was outside its validity period at the
    /// relevant time.
    Expired,

    /// The signing certificate is revoked.
    Revoked,

    /// Fresh-enough revocation information was not available; a later
    /// retry may succeed.
    TryLater,

    /// The best available usage time falls outside the certificate's
    /// validity period and no proof of existence compensates for it.
    OutOfBoundsNoPoe,

    /// No proof of existence is available for the required time.
    NoPoe,

    /// A cryptographic algorithm or key size violated the policy's
    /// cryptographic constraints.
    CryptoConstraintsFailure,

    /// A signature-level policy constraint was not met.
    SigConstraintsFailure,
}
