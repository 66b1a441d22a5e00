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

//! Qualification determination: qualified-certificate and QSCD status,
//! each evaluated independently at the three named validation times.
//!
//! The message-tag pair for each time comes from an exhaustive match
//! over [`ValidationTime`], so an unmapped time is a compile-time
//! error rather than a run-time configuration fault.

use chrono::{DateTime, Utc};
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sigval_status_tracker::{message_codes, Conclusion, Indication, SubIndication};

use crate::{
    diagnostic::CertificateRecord,
    policy::ContextConstraints,
    process::{
        chain::{Chain, ChainCheck},
        ValidationTime,
    },
};

/// Service qualifier asserting the private key resides on a qualified
/// signature creation device.
const QUALIFIER_QC_WITH_QSCD: &str = "QCWithQSCD";

/// Service qualifier asserting qualified-certificate status.
const QUALIFIER_QC_STATEMENT: &str = "QCStatement";

/// QSCD status of a certificate at a point in time, precomputed from
/// the certificate and its trusted services.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QscdStatus {
    /// The key is attested to reside on a qualified device.
    Qscd,

    /// No qualified-device attestation holds.
    NotQscd,
}

/// The combined qualification verdict for a certificate at one time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateQualification {
    /// Qualified certificate on a qualified device.
    QualifiedQscd,

    /// Qualified certificate without a qualified device.
    QualifiedCert,

    /// Not a qualified certificate.
    NotQualified,
}

/// QSCD status of a certificate at a given time.
///
/// An applicable trusted service carrying the QSCD qualifier overrides
/// the certificate's own attestation; otherwise the attestation stands.
pub(crate) fn qscd_status_at(certificate: &CertificateRecord, time: DateTime<Utc>) -> QscdStatus {
    let from_service = certificate
        .trusted_services
        .iter()
        .any(|service| service.is_applicable_at(time) && service.has_qualifier(QUALIFIER_QC_WITH_QSCD));

    if from_service || certificate.qscd_attested {
        QscdStatus::Qscd
    } else {
        QscdStatus::NotQscd
    }
}

/// Qualified-certificate status of a certificate at a given time.
pub(crate) fn qualified_status_at(certificate: &CertificateRecord, time: DateTime<Utc>) -> bool {
    certificate
        .trusted_services
        .iter()
        .any(|service| service.is_applicable_at(time) && service.has_qualifier(QUALIFIER_QC_STATEMENT))
        || certificate.qc_statement
}

/// Checks that a certificate was a qualified certificate at one of the
/// three validation times.
pub(crate) struct QualifiedCheck {
    pub qualified: bool,
    pub validation_time: ValidationTime,
}

impl ChainCheck for QualifiedCheck {
    fn process(&self) -> bool {
        self.qualified
    }

    fn message_tag(&self) -> &'static str {
        match self.validation_time {
            ValidationTime::CertificateIssuanceTime => message_codes::QUALIFIED_AT_ISSUANCE_TIME,
            ValidationTime::BestSignatureTime => message_codes::QUALIFIED_AT_BEST_SIGNATURE_TIME,
            ValidationTime::ValidationTime => message_codes::QUALIFIED_AT_VALIDATION_TIME,
        }
    }

    fn error_message_tag(&self) -> &'static str {
        match self.validation_time {
            ValidationTime::CertificateIssuanceTime => {
                message_codes::QUALIFIED_AT_ISSUANCE_TIME_FAILURE
            }
            ValidationTime::BestSignatureTime => {
                message_codes::QUALIFIED_AT_BEST_SIGNATURE_TIME_FAILURE
            }
            ValidationTime::ValidationTime => message_codes::QUALIFIED_AT_VALIDATION_TIME_FAILURE,
        }
    }

    fn failed_indication(&self) -> Indication {
        Indication::Failed
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        None
    }
}

/// Checks that the signing key resided on a qualified device at one of
/// the three validation times.
pub(crate) struct QscdCheck {
    pub status: QscdStatus,
    pub validation_time: ValidationTime,
}

impl ChainCheck for QscdCheck {
    fn process(&self) -> bool {
        self.status == QscdStatus::Qscd
    }

    fn message_tag(&self) -> &'static str {
        match self.validation_time {
            ValidationTime::CertificateIssuanceTime => message_codes::QSCD_AT_ISSUANCE_TIME,
            ValidationTime::BestSignatureTime => message_codes::QSCD_AT_BEST_SIGNATURE_TIME,
            ValidationTime::ValidationTime => message_codes::QSCD_AT_VALIDATION_TIME,
        }
    }

    fn error_message_tag(&self) -> &'static str {
        match self.validation_time {
            ValidationTime::CertificateIssuanceTime => message_codes::QSCD_AT_ISSUANCE_TIME_FAILURE,
            ValidationTime::BestSignatureTime => {
                message_codes::QSCD_AT_BEST_SIGNATURE_TIME_FAILURE
            }
            ValidationTime::ValidationTime => message_codes::QSCD_AT_VALIDATION_TIME_FAILURE,
        }
    }

    fn failed_indication(&self) -> Indication {
        Indication::Failed
    }

    fn failed_sub_indication(&self) -> Option<SubIndication> {
        None
    }
}

/// One qualification block: the verdict for one certificate at one
/// validation time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct QualificationResult {
    /// Which of the three named times this block covers.
    pub validation_time: ValidationTime,

    /// The concrete instant that name resolved to.
    pub time: DateTime<Utc>,

    /// The combined verdict.
    pub qualification: CertificateQualification,

    /// Findings from the qualified and QSCD checks.
    pub conclusion: Conclusion,
}

/// Evaluates qualification of the signing certificate at the three
/// validation times.
///
/// Issuance time is the certificate's own not-before.
pub(crate) fn evaluate(
    certificate: &CertificateRecord,
    constraints: &ContextConstraints,
    best_signature_time: DateTime<Utc>,
    validation_time: DateTime<Utc>,
) -> Vec<QualificationResult> {
    let times = [
        (ValidationTime::CertificateIssuanceTime, certificate.not_before),
        (ValidationTime::BestSignatureTime, best_signature_time),
        (ValidationTime::ValidationTime, validation_time),
    ];

    times
        .into_iter()
        .map(|(name, time)| {
            let qualified = qualified_status_at(certificate, time);
            let qscd = qscd_status_at(certificate, time);

            let mut chain = Chain::new();
            chain
                .run(
                    &QualifiedCheck {
                        qualified,
                        validation_time: name,
                    },
                    constraints.qualified_certificate.level,
                )
                .run(
                    &QscdCheck {
                        status: qscd,
                        validation_time: name,
                    },
                    constraints.qscd.level,
                );

            let qualification = match (qualified, qscd) {
                (true, QscdStatus::Qscd) => CertificateQualification::QualifiedQscd,
                (true, QscdStatus::NotQscd) => CertificateQualification::QualifiedCert,
                (false, _) => CertificateQualification::NotQualified,
            };

            QualificationResult {
                validation_time: name,
                time,
                qualification,
                conclusion: chain.conclude(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;

    use super::*;
    use crate::diagnostic::TrustedServiceRecord;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn certificate() -> CertificateRecord {
        CertificateRecord {
            id: "cert-1".to_owned(),
            subject_name: "CN=signer".to_owned(),
            issuer_name: None,
            serial_number: None,
            not_before: utc(2020, 1, 1),
            not_after: utc(2030, 1, 1),
            trusted_store_anchor: false,
            trusted_services: Vec::new(),
            key_usages: Vec::new(),
            revocation_ids: Vec::new(),
            qc_statement: false,
            qscd_attested: false,
        }
    }

    #[test]
    fn each_validation_time_selects_its_own_tag_pair() {
        let pairs = [
            (
                ValidationTime::CertificateIssuanceTime,
                message_codes::QSCD_AT_ISSUANCE_TIME,
                message_codes::QSCD_AT_ISSUANCE_TIME_FAILURE,
            ),
            (
                ValidationTime::BestSignatureTime,
                message_codes::QSCD_AT_BEST_SIGNATURE_TIME,
                message_codes::QSCD_AT_BEST_SIGNATURE_TIME_FAILURE,
            ),
            (
                ValidationTime::ValidationTime,
                message_codes::QSCD_AT_VALIDATION_TIME,
                message_codes::QSCD_AT_VALIDATION_TIME_FAILURE,
            ),
        ];

        for (validation_time, ok_tag, failure_tag) in pairs {
            let check = QscdCheck {
                status: QscdStatus::Qscd,
                validation_time,
            };
            assert_eq!(check.message_tag(), ok_tag);
            assert_eq!(check.error_message_tag(), failure_tag);
        }
    }

    #[test]
    fn qscd_failure_has_no_sub_indication() {
        let check = QscdCheck {
            status: QscdStatus::NotQscd,
            validation_time: ValidationTime::BestSignatureTime,
        };
        assert!(!check.process());
        assert_eq!(check.failed_indication(), Indication::Failed);
        assert_eq!(check.failed_sub_indication(), None);
    }

    #[test]
    fn service_qualifier_grants_qscd_inside_its_window() {
        let mut cert = certificate();
        cert.trusted_services = vec![TrustedServiceRecord {
            service_type: "http://uri.etsi.org/TrstSvc/Svctype/CA/QC".to_owned(),
            start_date: utc(2022, 1, 1),
            end_date: Some(utc(2024, 1, 1)),
            qualifiers: vec![QUALIFIER_QC_WITH_QSCD.to_owned()],
        }];

        // Covered by the service window.
        assert_eq!(qscd_status_at(&cert, utc(2023, 1, 1)), QscdStatus::Qscd);
        // Before the window opens and after it closes.
        assert_eq!(qscd_status_at(&cert, utc(2021, 1, 1)), QscdStatus::NotQscd);
        assert_eq!(qscd_status_at(&cert, utc(2024, 1, 1)), QscdStatus::NotQscd);
    }

    #[test]
    fn certificate_attestation_stands_without_services() {
        let mut cert = certificate();
        cert.qscd_attested = true;
        assert_eq!(qscd_status_at(&cert, utc(2025, 1, 1)), QscdStatus::Qscd);
    }

    #[test]
    fn verdict_can_differ_across_the_three_times() {
        let mut cert = certificate();
        cert.qc_statement = true;
        // QSCD attestation only held between 2022 and 2024.
        cert.trusted_services = vec![TrustedServiceRecord {
            service_type: "http://uri.etsi.org/TrstSvc/Svctype/CA/QC".to_owned(),
            start_date: utc(2022, 1, 1),
            end_date: Some(utc(2024, 1, 1)),
            qualifiers: vec![QUALIFIER_QC_WITH_QSCD.to_owned()],
        }];

        let results = evaluate(
            &cert,
            &ContextConstraints::default(),
            utc(2023, 6, 1),
            utc(2025, 6, 1),
        );

        assert_eq!(results.len(), 3);
        // Issuance (2020): qualified but no device attestation yet.
        assert_eq!(
            results[0].qualification,
            CertificateQualification::QualifiedCert
        );
        // Best signature time (2023): inside the QSCD window.
        assert_eq!(
            results[1].qualification,
            CertificateQualification::QualifiedQscd
        );
        // Validation time (2025): the window has closed again.
        assert_eq!(
            results[2].qualification,
            CertificateQualification::QualifiedCert
        );
    }
}
