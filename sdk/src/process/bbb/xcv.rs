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

//! X.509 certificate validation (XCV): chain presence, per-certificate
//! validity and revocation status, key usage, and trusted-service-type
//! matching.

use chrono::{DateTime, Utc};
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sigval_status_tracker::{message_codes, Conclusion, Indication, SubIndication};

use crate::{
    diagnostic::{CertificateRecord, DiagnosticData, RevocationRecord},
    policy::{ConstraintLevel, ContextConstraints, MultiValuesConstraint},
    process::{
        chain::{merge_conclusions, Chain, ChainCheck},
        Context,
    },
    Error, Result,
};

pub(crate) struct ChainPresentCheck {
    pub present: bool,
}

impl ChainCheck for ChainPresentCheck {
    fn process(&self) -> bool {
        self.present
    }

    fn message_tag(&self) -> &'static str {
        message_codes::CERTIFICATE_CHAIN_PRESENT
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::CERTIFICATE_CHAIN_MISSING
    }

    fn failed_indication(&self) -> Indication {
        Indication::Indeterminate
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::NoCertificateChainFound)
    }
}

/// Checks that a certificate's validity window contains the usage time.
///
/// Both window bounds are inclusive. The sub-indication depends on the
/// context: for a signature the certificate may yet be rescued by a
/// proof of existence, so the result is out-of-bounds rather than a
/// terminal expiry.
pub(crate) struct CertificateValidityCheck<'a> {
    pub certificate: &'a CertificateRecord,
    pub time: DateTime<Utc>,
    pub context: Context,
}

impl ChainCheck for CertificateValidityCheck<'_> {
    fn process(&self) -> bool {
        self.certificate.is_valid_at(self.time)
    }

    fn message_tag(&self) -> &'static str {
        message_codes::CERTIFICATE_INSIDE_VALIDITY
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::CERTIFICATE_OUTSIDE_VALIDITY
    }

    fn failed_indication(&self) -> Indication {
        Indication::Indeterminate
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        match self.context {
            Context::Signature | Context::CounterSignature => {
                Some(SubIndication::OutOfBoundsNoPoe)
            }
            Context::Timestamp | Context::Revocation | Context::Certificate => {
                Some(SubIndication::Expired)
            }
        }
    }

    fn additional_info(&self) -> Option<String> {
        Some(format!(
            "certificate {} valid from {} to {}, checked at {}",
            self.certificate.id,
            self.certificate.not_before.to_rfc3339(),
            self.certificate.not_after.to_rfc3339(),
            self.time.to_rfc3339()
        ))
    }
}

/// Checks that the newest known revocation record for a certificate
/// does not report it revoked.
///
/// Trust anchors are exempt; a certificate with no revocation material
/// passes here because data presence is a separate freshness concern.
pub(crate) struct RevocationStatusCheck<'a> {
    pub certificate: &'a CertificateRecord,
    pub latest: Option<&'a RevocationRecord>,
}

impl<'a> RevocationStatusCheck<'a> {
    pub fn new(certificate: &'a CertificateRecord, diagnostic: &'a DiagnosticData) -> Self {
        RevocationStatusCheck {
            certificate,
            latest: latest_revocation(certificate, diagnostic),
        }
    }
}

/// The revocation record with the newest production time among those
/// referenced by the certificate. Records without a production time
/// rank last.
fn latest_revocation<'a>(
    certificate: &CertificateRecord,
    diagnostic: &'a DiagnosticData,
) -> Option<&'a RevocationRecord> {
    certificate
        .revocation_ids
        .iter()
        .filter_map(|id| diagnostic.revocation_by_id(id))
        .max_by_key(|record| record.produced_at)
}

impl ChainCheck for RevocationStatusCheck<'_> {
    fn process(&self) -> bool {
        if self.certificate.trusted_store_anchor {
            return true;
        }
        self.latest.map_or(true, |record| !record.revoked)
    }

    fn message_tag(&self) -> &'static str {
        message_codes::CERTIFICATE_NOT_REVOKED
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::CERTIFICATE_REVOKED
    }

    fn failed_indication(&self) -> Indication {
        Indication::Failed
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::Revoked)
    }

    fn additional_info(&self) -> Option<String> {
        let record = self.latest?;
        let mut info = format!("certificate {} revoked", self.certificate.id);
        if let Some(time) = record.revocation_time {
            info.push_str(&format!(" at {}", time.to_rfc3339()));
        }
        if let Some(reason) = &record.reason {
            info.push_str(&format!(" ({reason})"));
        }
        Some(info)
    }
}

/// Checks the signing certificate's key usages against the policy.
pub(crate) struct KeyUsageCheck<'a> {
    pub certificate: &'a CertificateRecord,
    pub constraint: &'a MultiValuesConstraint,
}

impl ChainCheck for KeyUsageCheck<'_> {
    fn process(&self) -> bool {
        self.constraint
            .any_accepted(self.certificate.key_usages.iter().map(String::as_str))
    }

    fn message_tag(&self) -> &'static str {
        message_codes::KEY_USAGE_ACCEPTED
    }

    fn error_message_tag(&self) -> &'static str {
        message_codes::KEY_USAGE_REJECTED
    }

    fn failed_indication(&self) -> Indication {
        Indication::Failed
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::SigConstraintsFailure)
    }

    fn additional_info(&self) -> Option<String> {
        Some(self.certificate.key_usages.join(", "))
    }
}

/// Matches the signing certificate's trusted services against the
/// accepted service types.
///
/// A chain that reaches a trusted-store anchor bypasses the match and
/// passes outright. Otherwise services are examined in stored order and
/// the first one whose trimmed type is accepted, and whose status window
/// contains the usage time, satisfies the check. Service type strings
/// are compared after trimming surrounding whitespace.
pub(crate) struct TrustedServiceTypeCheck<'a> {
    pub certificate: &'a CertificateRecord,
    pub anchored: bool,
    pub constraint: &'a MultiValuesConstraint,
    pub usage_time: DateTime<Utc>,
    pub context: Context,
}

impl TrustedServiceTypeCheck<'_> {
    fn matches(&self) -> bool {
        self.certificate.trusted_services.iter().any(|service| {
            self.constraint.is_accepted(service.service_type.trim())
                && service.is_applicable_at(self.usage_time)
        })
    }
}

impl ChainCheck for TrustedServiceTypeCheck<'_> {
    fn process(&self) -> bool {
        self.anchored || self.matches()
    }

    fn message_tag(&self) -> &'static str {
        message_codes::TRUSTED_SERVICE_TYPE_MATCH
    }

    fn error_message_tag(&self) -> &'static str {
        match self.context {
            Context::Signature | Context::CounterSignature => {
                message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_SIGNATURE
            }
            Context::Timestamp => message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_TIMESTAMP,
            Context::Revocation => message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_REVOCATION,
            Context::Certificate => message_codes::TRUSTED_SERVICE_TYPE_MISMATCH,
        }
    }

    fn failed_indication(&self) -> Indication {
        Indication::Indeterminate
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        Some(SubIndication::NoCertificateChainFound)
    }

    fn additional_info(&self) -> Option<String> {
        // Last examined service type; on the failure path every
        // service has been examined.
        self.certificate
            .trusted_services
            .last()
            .map(|service| service.service_type.trim().to_owned())
    }
}

/// The outcome of validating one certificate of the chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CertificateValidation {
    /// Identifier of the certificate this block covers.
    pub certificate_id: String,

    /// The sealed conclusion for this certificate.
    pub conclusion: Conclusion,
}

/// The outcome of the X.509 certificate validation building block.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct XcvResult {
    /// Per-certificate sub-blocks, signing certificate first.
    pub certificates: Vec<CertificateValidation>,

    /// The merged conclusion of the whole block.
    pub conclusion: Conclusion,
}

/// Validates a certificate chain.
///
/// The chain is given as certificate identifiers with the signing
/// certificate first; a reference to an unknown certificate is a
/// configuration error, not a finding.
pub(crate) fn evaluate(
    diagnostic: &DiagnosticData,
    chain_ids: &[String],
    constraints: &ContextConstraints,
    context: Context,
    usage_time: DateTime<Utc>,
) -> Result<XcvResult> {
    let mut presence = Chain::new();
    presence.run(
        &ChainPresentCheck {
            present: !chain_ids.is_empty(),
        },
        ConstraintLevel::Fail,
    );
    let presence = presence.conclude();

    if !presence.is_passed() {
        return Ok(XcvResult {
            certificates: Vec::new(),
            conclusion: presence,
        });
    }

    let mut certificates = Vec::with_capacity(chain_ids.len());
    let chain: Vec<&CertificateRecord> = chain_ids
        .iter()
        .map(|id| {
            diagnostic
                .certificate_by_id(id)
                .ok_or_else(|| Error::DanglingReference {
                    kind: "certificate",
                    id: id.clone(),
                })
        })
        .collect::<Result<_>>()?;

    let anchored = chain.iter().any(|cert| cert.trusted_store_anchor);

    for (position, certificate) in chain.iter().copied().enumerate() {
        let mut sub = Chain::new();

        sub.run(
            &CertificateValidityCheck {
                certificate,
                time: usage_time,
                context,
            },
            constraints.certificate_expiration.level,
        )
        .run(
            &RevocationStatusCheck::new(certificate, diagnostic),
            constraints.certificate_revocation.level,
        );

        // Signing-certificate-only checks.
        if position == 0 {
            sub.run(
                &KeyUsageCheck {
                    certificate,
                    constraint: &constraints.key_usage,
                },
                constraints.key_usage.level,
            )
            .run(
                &TrustedServiceTypeCheck {
                    certificate,
                    anchored,
                    constraint: &constraints.trusted_service_types,
                    usage_time,
                    context,
                },
                constraints.trusted_service_types.level,
            );
        }

        certificates.push(CertificateValidation {
            certificate_id: certificate.id.clone(),
            conclusion: sub.conclude(),
        });
    }

    let conclusion = merge_conclusions(
        std::iter::once(&presence).chain(certificates.iter().map(|c| &c.conclusion)),
    );

    Ok(XcvResult {
        certificates,
        conclusion,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;

    use super::*;
    use crate::{diagnostic::TrustedServiceRecord, policy::ConstraintLevel};

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn certificate(id: &str) -> CertificateRecord {
        CertificateRecord {
            id: id.to_owned(),
            subject_name: format!("CN={id}"),
            issuer_name: None,
            serial_number: None,
            not_before: utc(2020, 1, 1),
            not_after: utc(2030, 1, 1),
            trusted_store_anchor: false,
            trusted_services: Vec::new(),
            key_usages: vec!["nonRepudiation".to_owned()],
            revocation_ids: Vec::new(),
            qc_statement: false,
            qscd_attested: false,
        }
    }

    fn service(service_type: &str, start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> TrustedServiceRecord {
        TrustedServiceRecord {
            service_type: service_type.to_owned(),
            start_date: start,
            end_date: end,
            qualifiers: Vec::new(),
        }
    }

    fn type_constraint(accepted: &[&str]) -> MultiValuesConstraint {
        MultiValuesConstraint::new(
            ConstraintLevel::Fail,
            accepted.iter().map(|s| (*s).to_owned()),
        )
    }

    const CA_QC: &str = "http://uri.etsi.org/TrstSvc/Svctype/CA/QC";

    #[test]
    fn anchored_chain_bypasses_service_type_match() {
        let mut cert = certificate("cert-1");
        cert.trusted_services = vec![service("SomethingElse", utc(2019, 1, 1), None)];

        let check = TrustedServiceTypeCheck {
            certificate: &cert,
            anchored: true,
            constraint: &type_constraint(&[CA_QC]),
            usage_time: cert.not_before,
            context: Context::Signature,
        };

        assert!(check.process());
    }

    #[test]
    fn first_applicable_service_satisfies_the_match() {
        let mut cert = certificate("cert-1");
        cert.trusted_services = vec![
            service("SomethingElse", utc(2019, 1, 1), None),
            // Padded type still matches after trimming.
            service(&format!("  {CA_QC}  "), utc(2019, 1, 1), None),
        ];

        let check = TrustedServiceTypeCheck {
            certificate: &cert,
            anchored: false,
            constraint: &type_constraint(&[CA_QC]),
            usage_time: cert.not_before,
            context: Context::Signature,
        };

        assert!(check.process());
    }

    #[test]
    fn service_outside_status_window_does_not_match() {
        let mut cert = certificate("cert-1");
        // Status period ended before the certificate was issued.
        cert.trusted_services =
            vec![service(CA_QC, utc(2015, 1, 1), Some(utc(2018, 1, 1)))];

        let check = TrustedServiceTypeCheck {
            certificate: &cert,
            anchored: false,
            constraint: &type_constraint(&[CA_QC]),
            usage_time: cert.not_before,
            context: Context::Signature,
        };

        assert!(!check.process());
        assert_eq!(check.additional_info().as_deref(), Some(CA_QC));
        assert_eq!(
            check.error_message_tag(),
            message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_SIGNATURE
        );
    }

    #[test]
    fn mismatch_tag_is_resolved_per_context() {
        let cert = certificate("cert-1");
        let constraint = type_constraint(&[CA_QC]);

        let tag = |context| {
            TrustedServiceTypeCheck {
                certificate: &cert,
                anchored: false,
                constraint: &constraint,
                usage_time: cert.not_before,
                context,
            }
            .error_message_tag()
        };

        assert_eq!(
            tag(Context::Timestamp),
            message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_TIMESTAMP
        );
        assert_eq!(
            tag(Context::Revocation),
            message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_REVOCATION
        );
        assert_eq!(
            tag(Context::Certificate),
            message_codes::TRUSTED_SERVICE_TYPE_MISMATCH
        );
    }

    #[test]
    fn expired_signing_certificate_is_out_of_bounds_for_signatures() {
        let cert = certificate("cert-1");

        let check = CertificateValidityCheck {
            certificate: &cert,
            time: utc(2031, 1, 1),
            context: Context::Signature,
        };
        assert!(!check.process());
        assert_eq!(
            check.failed_sub_indication(),
            Some(SubIndication::OutOfBoundsNoPoe)
        );

        let check = CertificateValidityCheck {
            certificate: &cert,
            time: utc(2031, 1, 1),
            context: Context::Timestamp,
        };
        assert_eq!(check.failed_sub_indication(), Some(SubIndication::Expired));
    }

    #[test]
    fn validity_window_bounds_are_inclusive() {
        let cert = certificate("cert-1");

        for time in [cert.not_before, cert.not_after] {
            let check = CertificateValidityCheck {
                certificate: &cert,
                time,
                context: Context::Signature,
            };
            assert!(check.process());
        }
    }

    #[test]
    fn empty_chain_concludes_no_chain_found() {
        let diagnostic = DiagnosticData::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let constraints = ContextConstraints::default();

        let result = evaluate(
            &diagnostic,
            &[],
            &constraints,
            Context::Signature,
            utc(2025, 6, 1),
        )
        .unwrap();

        assert_eq!(result.conclusion.indication, Indication::Indeterminate);
        assert_eq!(
            result.conclusion.sub_indication,
            Some(SubIndication::NoCertificateChainFound)
        );
        assert!(result.certificates.is_empty());
    }

    #[test]
    fn service_window_is_judged_at_the_usage_time() {
        // Issued in 2020, but the covering service only gained its
        // status in 2022. Usage in 2025 falls inside the window, so the
        // chain passes even though issuance predates the window.
        let mut cert = certificate("cert-1");
        cert.trusted_services = vec![service(CA_QC, utc(2022, 1, 1), None)];

        let diagnostic =
            DiagnosticData::new(Vec::new(), vec![cert], Vec::new(), Vec::new());
        let constraints = ContextConstraints::default();

        let result = evaluate(
            &diagnostic,
            &["cert-1".to_owned()],
            &constraints,
            Context::Signature,
            utc(2025, 6, 1),
        )
        .unwrap();

        assert_eq!(result.conclusion.indication, Indication::Passed);
        assert_eq!(result.conclusion.sub_indication, None);
    }

    #[test]
    fn dangling_certificate_reference_is_a_configuration_error() {
        let diagnostic = DiagnosticData::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let constraints = ContextConstraints::default();

        let err = evaluate(
            &diagnostic,
            &["missing-cert".to_owned()],
            &constraints,
            Context::Signature,
            utc(2025, 6, 1),
        )
        .unwrap_err();

        assert!(matches!(err, Error::DanglingReference { kind: "certificate", .. }));
    }

    #[test]
    fn revoked_signing_certificate_fails_the_chain() {
        let mut cert = certificate("cert-1");
        cert.revocation_ids = vec!["rev-1".to_owned()];
        cert.trusted_services = vec![service(CA_QC, utc(2019, 1, 1), None)];

        let revocation = RevocationRecord {
            sha256: "rev-1".to_owned(),
            kind: crate::diagnostic::RevocationKind::Crl,
            origin: crate::diagnostic::RevocationOrigin::Signature,
            produced_at: Some(utc(2025, 1, 1)),
            next_update: None,
            responder_id_name: None,
            responder_id_key: None,
            digests: Default::default(),
            certificate_digest: None,
            revoked: true,
            revocation_time: Some(utc(2024, 6, 1)),
            reason: Some("keyCompromise".to_owned()),
        };

        let diagnostic =
            DiagnosticData::new(Vec::new(), vec![cert], vec![revocation], Vec::new());
        let constraints = ContextConstraints::default();

        let result = evaluate(
            &diagnostic,
            &["cert-1".to_owned()],
            &constraints,
            Context::Signature,
            utc(2025, 6, 1),
        )
        .unwrap();

        assert_eq!(result.conclusion.indication, Indication::Failed);
        assert_eq!(result.conclusion.sub_indication, Some(SubIndication::Revoked));

        let info = result
            .certificates
            .first()
            .unwrap()
            .conclusion
            .errors()
            .next()
            .unwrap()
            .additional_info
            .as_deref()
            .unwrap();
        assert!(info.contains("keyCompromise"));
    }
}
