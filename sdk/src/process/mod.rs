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

//! The validation process: chains of atomic checks evaluated against
//! the diagnostic data under a policy.

pub mod bbb;
pub(crate) mod chain;
pub mod qualification;

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The validation context a check runs in.
///
/// Several checks resolve different message tags or constraint blocks
/// per context; those lookups are exhaustive matches over this closed
/// enum, so an unmapped context is a compile-time error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Context {
    /// A main signature.
    Signature,

    /// A counter-signature.
    CounterSignature,

    /// A time-stamp token.
    Timestamp,

    /// Revocation data being validated in its own right.
    Revocation,

    /// A standalone certificate.
    Certificate,
}

/// The named points in time at which qualification is determined.
///
/// Qualification status can legitimately differ across these points: a
/// certificate can be qualified at issuance while the device attestation
/// changes status later.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationTime {
    /// The issuance time of the signing certificate.
    CertificateIssuanceTime,

    /// The best signature time established from proof of existence.
    BestSignatureTime,

    /// The current validation time of the run.
    ValidationTime,
}

/// How much of the available material a run validates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationLevel {
    /// Signatures only.
    BasicSignatures,

    /// Signatures and their time-stamps.
    Timestamps,

    /// Signatures, time-stamps, and long-term revocation material.
    LongTermData,

    /// Everything, including archival time-stamps.
    ArchivalData,
}

impl ValidationLevel {
    /// Returns `true` if this level includes time-stamp processing.
    pub fn includes_timestamps(&self) -> bool {
        *self >= ValidationLevel::Timestamps
    }

    /// Returns `true` if this level includes long-term revocation
    /// material.
    pub fn includes_long_term_data(&self) -> bool {
        *self >= ValidationLevel::LongTermData
    }
}
