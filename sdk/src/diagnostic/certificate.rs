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

use chrono::{DateTime, Utc};
#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One certificate as seen by the extraction layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    /// Unique id assigned by the extraction layer.
    pub id: String,

    /// Subject distinguished name.
    pub subject_name: String,

    /// Issuer distinguished name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,

    /// Serial number, decimal or hex as emitted upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Start of the validity period.
    pub not_before: DateTime<Utc>,

    /// End of the validity period (inclusive).
    pub not_after: DateTime<Utc>,

    /// `true` when this certificate's chain is anchored in a trusted
    /// store. Such a chain needs no trusted-service match; trust is
    /// established by the anchor itself.
    #[serde(default)]
    pub trusted_store_anchor: bool,

    /// Trust-list service entries associated with this certificate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trusted_services: Vec<TrustedServiceRecord>,

    /// Key usages asserted by the certificate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_usages: Vec<String>,

    /// Ids of revocation records that refer to this certificate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub revocation_ids: Vec<String>,

    /// `true` when the certificate carries a qualified-certificate
    /// statement.
    #[serde(default)]
    pub qc_statement: bool,

    /// `true` when the certificate attests that its private key resides
    /// in a qualified signature creation device.
    #[serde(default)]
    pub qscd_attested: bool,
}

impl CertificateRecord {
    /// Returns `true` if the certificate's validity period contains the
    /// given time.
    pub fn is_valid_at(&self, time: DateTime<Utc>) -> bool {
        self.not_before <= time && time <= self.not_after
    }
}

/// One trust-list entry describing a supervised service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TrustedServiceRecord {
    /// Service type identifier; free-form, compared after trimming.
    #[serde(rename = "type")]
    pub service_type: String,

    /// Start of the service's status validity window (inclusive).
    pub start_date: DateTime<Utc>,

    /// End of the service's status validity window (exclusive). Absent
    /// for a still-current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    /// Qualifiers granted by the trust list for this service (for
    /// example `QCStatement` or `QCWithQSCD`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<String>,
}

impl TrustedServiceRecord {
    /// Returns `true` if this service's status window contains the
    /// given time.
    ///
    /// The window is start-inclusive and end-exclusive; an absent end
    /// date matches any time at or after the start.
    pub fn is_applicable_at(&self, time: DateTime<Utc>) -> bool {
        self.start_date <= time && self.end_date.map_or(true, |end| time < end)
    }

    /// Returns `true` if the trust list granted the given qualifier,
    /// compared after trimming.
    pub fn has_qualifier(&self, qualifier: &str) -> bool {
        self.qualifiers.iter().any(|q| q.trim() == qualifier.trim())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).single().unwrap()
    }

    fn service(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> TrustedServiceRecord {
        TrustedServiceRecord {
            service_type: "http://uri.etsi.org/TrstSvc/Svctype/CA/QC".to_owned(),
            start_date: start,
            end_date: end,
            qualifiers: vec![],
        }
    }

    #[test]
    fn window_start_inclusive_end_exclusive() {
        let start = utc(2015, 1, 1);
        let end = utc(2018, 1, 1);
        let svc = service(start, Some(end));

        assert!(svc.is_applicable_at(start));
        assert!(svc.is_applicable_at(utc(2016, 6, 15)));
        assert!(!svc.is_applicable_at(end));
        assert!(!svc.is_applicable_at(utc(2014, 12, 31)));
    }

    #[test]
    fn window_open_ended() {
        let svc = service(utc(2015, 1, 1), None);

        assert!(svc.is_applicable_at(utc(2015, 1, 1)));
        assert!(svc.is_applicable_at(utc(2099, 1, 1)));
        assert!(!svc.is_applicable_at(utc(2014, 1, 1)));
    }

    #[test]
    fn certificate_validity_bounds() {
        let cert = CertificateRecord {
            id: "c1".to_owned(),
            subject_name: "CN=Good User".to_owned(),
            issuer_name: None,
            serial_number: None,
            not_before: utc(2015, 1, 1),
            not_after: utc(2017, 1, 1),
            trusted_store_anchor: false,
            trusted_services: vec![],
            key_usages: vec![],
            revocation_ids: vec![],
            qc_statement: false,
            qscd_attested: false,
        };

        assert!(cert.is_valid_at(utc(2015, 1, 1)));
        assert!(cert.is_valid_at(utc(2017, 1, 1)));
        assert!(!cert.is_valid_at(utc(2017, 1, 2)));
    }
}
