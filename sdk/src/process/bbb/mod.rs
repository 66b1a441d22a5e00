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

//! Basic building blocks (BBB): the per-token validation pipeline.
//!
//! Each token, signature or time-stamp, runs the same sequence of
//! blocks: format, cryptographic verification, signature acceptance,
//! certificate chain validation, and revocation freshness. Every block
//! seals its own conclusion; the token's conclusion is the merge, with
//! the first non-passed block deciding the indication.

pub(crate) mod cv;
pub(crate) mod fc;
pub(crate) mod rfc;
pub(crate) mod sav;
pub(crate) mod xcv;

use chrono::{DateTime, Utc};
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sigval_status_tracker::Conclusion;

use crate::{
    diagnostic::{
        DiagnosticData, RevocationRecord, SignatureRecord, TimestampKind, TimestampRecord,
    },
    policy::{ConstraintLevel, ValidationPolicy},
    process::{
        chain::{merge_conclusions, Chain},
        Context, ValidationLevel,
    },
    Result,
};

pub use xcv::{CertificateValidation, XcvResult};

/// The sealed outcome of one token's basic building blocks.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct BbbResult {
    /// The signature or time-stamp this block covers.
    pub token_id: String,

    /// The context the token was validated in.
    pub context: Context,

    /// Format checking.
    pub format: Conclusion,

    /// Cryptographic verification.
    pub cryptographic: Conclusion,

    /// Signature acceptance validation.
    pub signature_acceptance: Conclusion,

    /// X.509 certificate validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_chain: Option<XcvResult>,

    /// Revocation freshness checking, signing certificate only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_freshness: Option<Conclusion>,

    /// The merged conclusion of all blocks, in pipeline order.
    pub conclusion: Conclusion,
}

impl BbbResult {
    fn merge(&mut self) {
        let mut parts: Vec<&Conclusion> =
            vec![&self.format, &self.cryptographic, &self.signature_acceptance];
        if let Some(xcv) = &self.certificate_chain {
            parts.push(&xcv.conclusion);
        }
        if let Some(rfc) = &self.revocation_freshness {
            parts.push(rfc);
        }
        self.conclusion = merge_conclusions(parts);
    }
}

/// The best signature time: the earliest production time among intact
/// time-stamps that prove the signature existed, or the validation time
/// when no such time-stamp exists.
///
/// Content time-stamps predate signing and prove nothing about the
/// signature itself, so they never contribute.
pub(crate) fn best_signature_time(
    diagnostic: &DiagnosticData,
    signature: &SignatureRecord,
    validation_time: DateTime<Utc>,
) -> DateTime<Utc> {
    diagnostic
        .timestamps_for_signature(&signature.id)
        .into_iter()
        .filter(|ts| {
            matches!(
                ts.kind,
                TimestampKind::SignatureTimestamp | TimestampKind::ArchiveTimestamp
            )
        })
        .filter(|ts| ts.is_intact())
        .map(|ts| ts.production_time)
        .min()
        .unwrap_or(validation_time)
}

/// Runs the basic building blocks for one signature.
pub(crate) fn evaluate_signature(
    diagnostic: &DiagnosticData,
    signature: &SignatureRecord,
    policy: &ValidationPolicy,
    validation_time: DateTime<Utc>,
    level: ValidationLevel,
) -> Result<BbbResult> {
    let context = if signature.counter_signature {
        Context::CounterSignature
    } else {
        Context::Signature
    };
    let constraints = policy.constraints(context);

    let mut format = Chain::new();
    format.run(
        &fc::StructureCheck {
            valid: signature.structure_valid,
        },
        constraints.structure.level,
    );

    let mut cryptographic = Chain::new();
    cryptographic
        .run(
            &cv::SignatureIntactCheck {
                intact: signature.signature_intact,
            },
            constraints.signature_intact.level,
        )
        .run(
            &cv::DigestMatchCheck {
                matches: signature.digest_matches,
            },
            constraints.digest_match.level,
        );

    let mut acceptance = Chain::new();
    acceptance.run(
        &sav::AcceptedAlgorithmCheck {
            algorithm: signature.signature_algorithm.as_deref(),
            constraint: &constraints.accepted_algorithms,
        },
        constraints.accepted_algorithms.level,
    );

    let usage_time = best_signature_time(diagnostic, signature, validation_time);
    let certificate_chain = xcv::evaluate(
        diagnostic,
        &signature.certificate_chain,
        constraints,
        context,
        usage_time,
    )?;

    // Long-term revocation material is only consulted at the levels
    // that include it.
    let revocation_freshness = level.includes_long_term_data().then(|| {
        signing_certificate_freshness(diagnostic, signature, constraints, usage_time, validation_time)
    });

    let mut result = BbbResult {
        token_id: signature.id.clone(),
        context,
        format: format.conclude(),
        cryptographic: cryptographic.conclude(),
        signature_acceptance: acceptance.conclude(),
        certificate_chain: Some(certificate_chain),
        revocation_freshness,
        conclusion: Conclusion::passed(),
    };
    result.merge();
    Ok(result)
}

/// Revocation freshness for the signature's signing certificate, plus
/// informational findings for orphan revocation references.
fn signing_certificate_freshness(
    diagnostic: &DiagnosticData,
    signature: &SignatureRecord,
    constraints: &crate::policy::ContextConstraints,
    usage_time: DateTime<Utc>,
    validation_time: DateTime<Utc>,
) -> Conclusion {
    let mut chain = Chain::new();

    let signing_certificate = signature
        .signing_certificate_id()
        .and_then(|id| diagnostic.certificate_by_id(id));

    // Only revocation material covering the signing certificate itself
    // counts; a record for an intermediate CA does not vouch for the
    // signer. An unknown signing certificate is already a chain
    // failure, so no freshness verdict is recorded for it.
    if let Some(certificate) = signing_certificate.filter(|cert| !cert.trusted_store_anchor) {
        let records: Vec<&RevocationRecord> = certificate
            .revocation_ids
            .iter()
            .filter_map(|id| diagnostic.revocation_by_id(id))
            .collect();

        chain.run(
            &rfc::RevocationDataExistsCheck {
                exists: !records.is_empty(),
            },
            constraints.revocation_freshness.level,
        );

        let freshest = records
            .iter()
            .copied()
            .max_by_key(|record| record.produced_at);
        chain.run(
            &rfc::RevocationFreshnessCheck {
                record: freshest,
                usage_time,
                validation_time,
                max_age_seconds: constraints.revocation_freshness.max_age_seconds,
            },
            constraints.revocation_freshness.level,
        );
    }

    // Orphan references never gate the outcome.
    for reference in diagnostic.orphan_revocation_refs(&signature.id) {
        chain.run(&rfc::OrphanRefCheck { reference }, ConstraintLevel::Inform);
    }

    chain.conclude()
}

/// Runs the basic building blocks for one time-stamp token.
pub(crate) fn evaluate_timestamp(
    diagnostic: &DiagnosticData,
    timestamp: &TimestampRecord,
    policy: &ValidationPolicy,
) -> Result<BbbResult> {
    let context = Context::Timestamp;
    let constraints = policy.constraints(context);

    let mut format = Chain::new();
    format.run(
        &fc::StructureCheck {
            valid: timestamp.structure_valid,
        },
        constraints.structure.level,
    );

    let mut cryptographic = Chain::new();
    cryptographic
        .run(
            &cv::MessageImprintCheck {
                intact: timestamp.message_imprint_intact,
            },
            constraints.digest_match.level,
        )
        .run(
            &cv::SignatureIntactCheck {
                intact: timestamp.signature_intact,
            },
            constraints.signature_intact.level,
        );

    let mut acceptance = Chain::new();
    acceptance.run(
        &sav::AcceptedAlgorithmCheck {
            algorithm: timestamp.signature_algorithm.as_deref(),
            constraint: &constraints.accepted_algorithms,
        },
        constraints.accepted_algorithms.level,
    );

    // A time-stamp's certificates are judged at its own production
    // time.
    let certificate_chain = xcv::evaluate(
        diagnostic,
        &timestamp.certificate_chain,
        constraints,
        context,
        timestamp.production_time,
    )?;

    let mut result = BbbResult {
        token_id: timestamp.id.clone(),
        context,
        format: format.conclude(),
        cryptographic: cryptographic.conclude(),
        signature_acceptance: acceptance.conclude(),
        certificate_chain: Some(certificate_chain),
        revocation_freshness: None,
        conclusion: Conclusion::passed(),
    };
    result.merge();
    Ok(result)
}
