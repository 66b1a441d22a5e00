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

//! Human-readable rendering of message tags.
//!
//! The renderer is plain configuration passed to the executor, not a
//! process-wide singleton; concurrent runs can render in different
//! locales. A tag without a translation renders as the tag itself, so
//! reports never lose information.

use sigval_status_tracker::message_codes;

/// Languages the built-in message catalog covers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Locale {
    /// English.
    #[default]
    En,

    /// French.
    Fr,
}

/// Renders message tags into human-readable text for one locale.
#[derive(Copy, Clone, Debug, Default)]
pub struct MessageRenderer {
    locale: Locale,
}

impl MessageRenderer {
    pub fn new(locale: Locale) -> Self {
        MessageRenderer { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Renders a tag, falling back to the English catalog and then to
    /// the raw tag itself.
    pub fn render(&self, tag: &str) -> String {
        match self.locale {
            Locale::En => english(tag),
            Locale::Fr => french(tag).or_else(|| english(tag)),
        }
        .unwrap_or(tag)
        .to_owned()
    }
}

fn english(tag: &str) -> Option<&'static str> {
    Some(match tag {
        message_codes::STRUCTURE_VALID => "The signature structure is valid.",
        message_codes::STRUCTURE_INVALID => "The signature structure is not valid.",
        message_codes::SIGNATURE_INTACT => "The signature value is intact.",
        message_codes::SIGNATURE_NOT_INTACT => "The signature value is not intact.",
        message_codes::DIGEST_MATCH => "The signed data digest matches.",
        message_codes::DIGEST_MISMATCH => "The signed data digest does not match.",
        message_codes::ALGORITHM_ACCEPTED => "The signature algorithm is accepted.",
        message_codes::ALGORITHM_REJECTED => "The signature algorithm is not accepted.",
        message_codes::CERTIFICATE_CHAIN_PRESENT => "A certificate chain is present.",
        message_codes::CERTIFICATE_CHAIN_MISSING => "No certificate chain was found.",
        message_codes::CERTIFICATE_INSIDE_VALIDITY => {
            "The certificate is inside its validity period."
        }
        message_codes::CERTIFICATE_OUTSIDE_VALIDITY => {
            "The certificate is outside its validity period."
        }
        message_codes::CERTIFICATE_NOT_REVOKED => "The certificate is not revoked.",
        message_codes::CERTIFICATE_REVOKED => "The certificate is revoked.",
        message_codes::KEY_USAGE_ACCEPTED => "The certificate key usage is accepted.",
        message_codes::KEY_USAGE_REJECTED => "The certificate key usage is not accepted.",
        message_codes::TRUSTED_SERVICE_TYPE_MATCH => {
            "A trusted service with an accepted type covers the certificate."
        }
        message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_SIGNATURE => {
            "No trusted service with an accepted type covers the signing certificate."
        }
        message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_TIMESTAMP => {
            "No trusted service with an accepted type covers the time-stamp certificate."
        }
        message_codes::TRUSTED_SERVICE_TYPE_MISMATCH_REVOCATION => {
            "No trusted service with an accepted type covers the revocation certificate."
        }
        message_codes::TRUSTED_SERVICE_TYPE_MISMATCH => {
            "No trusted service with an accepted type covers the certificate."
        }
        message_codes::REVOCATION_DATA_FOUND => "Revocation data is present.",
        message_codes::REVOCATION_DATA_MISSING => "No revocation data is present.",
        message_codes::REVOCATION_FRESH => "The revocation data is considered fresh.",
        message_codes::REVOCATION_NOT_FRESH => "The revocation data is not considered fresh.",
        message_codes::REVOCATION_REF_ORPHAN => {
            "A revocation reference does not resolve to any known revocation data."
        }
        message_codes::TIMESTAMP_MESSAGE_IMPRINT_MATCH => {
            "The time-stamp message imprint matches."
        }
        message_codes::TIMESTAMP_MESSAGE_IMPRINT_MISMATCH => {
            "The time-stamp message imprint does not match."
        }
        message_codes::QUALIFIED_AT_ISSUANCE_TIME => {
            "The certificate was qualified at issuance time."
        }
        message_codes::QUALIFIED_AT_ISSUANCE_TIME_FAILURE => {
            "The certificate was not qualified at issuance time."
        }
        message_codes::QUALIFIED_AT_BEST_SIGNATURE_TIME => {
            "The certificate was qualified at best signature time."
        }
        message_codes::QUALIFIED_AT_BEST_SIGNATURE_TIME_FAILURE => {
            "The certificate was not qualified at best signature time."
        }
        message_codes::QUALIFIED_AT_VALIDATION_TIME => {
            "The certificate is qualified at validation time."
        }
        message_codes::QUALIFIED_AT_VALIDATION_TIME_FAILURE => {
            "The certificate is not qualified at validation time."
        }
        message_codes::QSCD_AT_ISSUANCE_TIME => {
            "The private key resided on a qualified device at issuance time."
        }
        message_codes::QSCD_AT_ISSUANCE_TIME_FAILURE => {
            "The private key did not reside on a qualified device at issuance time."
        }
        message_codes::QSCD_AT_BEST_SIGNATURE_TIME => {
            "The private key resided on a qualified device at best signature time."
        }
        message_codes::QSCD_AT_BEST_SIGNATURE_TIME_FAILURE => {
            "The private key did not reside on a qualified device at best signature time."
        }
        message_codes::QSCD_AT_VALIDATION_TIME => {
            "The private key resides on a qualified device at validation time."
        }
        message_codes::QSCD_AT_VALIDATION_TIME_FAILURE => {
            "The private key does not reside on a qualified device at validation time."
        }
        _ => return None,
    })
}

/// French catalog. Deliberately partial: only the most common findings
/// are translated, and every other tag renders through the English
/// catalog instead.
fn french(tag: &str) -> Option<&'static str> {
    Some(match tag {
        message_codes::STRUCTURE_VALID => "La structure de la signature est valide.",
        message_codes::STRUCTURE_INVALID => "La structure de la signature n'est pas valide.",
        message_codes::SIGNATURE_INTACT => "La valeur de la signature est intacte.",
        message_codes::SIGNATURE_NOT_INTACT => "La valeur de la signature n'est pas intacte.",
        message_codes::CERTIFICATE_REVOKED => "Le certificat est révoqué.",
        message_codes::CERTIFICATE_NOT_REVOKED => "Le certificat n'est pas révoqué.",
        message_codes::REVOCATION_DATA_MISSING => "Aucune donnée de révocation n'est présente.",
        _ => return None,
    })
}
