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

//! Message tags recorded by validation checks.
//!
//! Each check logs one tag on success and a distinct tag when it does
//! not pass. Tags are stable identifiers; human-readable text is
//! resolved from them at report-rendering time.

// -- format --

/// The token's structure is well-formed.
pub const STRUCTURE_VALID: &str = "structure.valid";

/// The token's structure is malformed.
pub const STRUCTURE_INVALID: &str = "structure.invalid";

// -- cryptographic verification --

/// The signature value verifies against the signer's public key.
pub const SIGNATURE_INTACT: &str = "cryptographic.signatureIntact";

/// The signature value does not verify.
pub const SIGNATURE_NOT_INTACT: &str = "cryptographic.signatureNotIntact";

/// The digest of the signed content matches the signed digest.
pub const DIGEST_MATCH: &str = "cryptographic.digestMatch";

/// The digest of the signed content does not match the signed digest.
pub const DIGEST_MISMATCH: &str = "cryptographic.digestMismatch";

/// The signature algorithm is in the policy's accepted set.
pub const ALGORITHM_ACCEPTED: &str = "cryptographic.algorithm.accepted";

/// The signature algorithm is not in the policy's accepted set.
pub const ALGORITHM_REJECTED: &str = "cryptographic.algorithm.rejected";

// -- certificate chain (XCV) --

/// A certificate chain is present for the token.
pub const CERTIFICATE_CHAIN_PRESENT: &str = "certificate.chainPresent";

/// No certificate chain is present for the token.
pub const CERTIFICATE_CHAIN_MISSING: &str = "certificate.chainMissing";

/// The certificate was inside its validity period at the usage time.
pub const CERTIFICATE_INSIDE_VALIDITY: &str = "certificate.insideValidity";

/// The certificate was outside its validity period at the usage time.
pub const CERTIFICATE_OUTSIDE_VALIDITY: &str = "certificate.outsideValidity";

/// The certificate is not reported as revoked.
pub const CERTIFICATE_NOT_REVOKED: &str = "certificate.notRevoked";

/// The certificate is reported as revoked.
pub const CERTIFICATE_REVOKED: &str = "certificate.revoked";

/// The certificate carries an accepted key usage.
pub const KEY_USAGE_ACCEPTED: &str = "certificate.keyUsage.accepted";

/// The certificate does not carry an accepted key usage.
pub const KEY_USAGE_REJECTED: &str = "certificate.keyUsage.rejected";

/// A trusted service of an accepted type covered the usage time.
pub const TRUSTED_SERVICE_TYPE_MATCH: &str = "certificate.trustedService.typeMatch";

/// No trusted service of an accepted type covered the usage time
/// (signature context).
pub const TRUSTED_SERVICE_TYPE_MISMATCH_SIGNATURE: &str =
    "certificate.trustedService.typeMismatch.signature";

/// No trusted service of an accepted type covered the usage time
/// (time-stamp context).
pub const TRUSTED_SERVICE_TYPE_MISMATCH_TIMESTAMP: &str =
    "certificate.trustedService.typeMismatch.timeStamp";

/// No trusted service of an accepted type covered the usage time
/// (revocation context).
pub const TRUSTED_SERVICE_TYPE_MISMATCH_REVOCATION: &str =
    "certificate.trustedService.typeMismatch.revocation";

/// No trusted service of an accepted type covered the usage time
/// (certificate context).
pub const TRUSTED_SERVICE_TYPE_MISMATCH: &str = "certificate.trustedService.typeMismatch";

// -- revocation freshness (RFC) --

/// Usable revocation data exists for the signing certificate.
pub const REVOCATION_DATA_FOUND: &str = "revocation.dataFound";

/// No usable revocation data exists for the signing certificate.
pub const REVOCATION_DATA_MISSING: &str = "revocation.dataMissing";

/// The newest revocation data is fresh enough for the usage time.
pub const REVOCATION_FRESH: &str = "revocation.fresh";

/// The newest revocation data is too old for the usage time.
pub const REVOCATION_NOT_FRESH: &str = "revocation.notFresh";

/// A revocation reference could not be resolved to retrieved data.
pub const REVOCATION_REF_ORPHAN: &str = "revocation.reference.orphan";

// -- time-stamps --

/// The time-stamp's message imprint matches the signature.
pub const TIMESTAMP_MESSAGE_IMPRINT_MATCH: &str = "timeStamp.messageImprint.match";

/// The time-stamp's message imprint does not match the signature.
pub const TIMESTAMP_MESSAGE_IMPRINT_MISMATCH: &str = "timeStamp.messageImprint.mismatch";

// -- qualification --

/// The certificate had qualified status at its issuance time.
pub const QUALIFIED_AT_ISSUANCE_TIME: &str = "certificate.qualified.atIssuanceTime";

/// The certificate did not have qualified status at its issuance time.
pub const QUALIFIED_AT_ISSUANCE_TIME_FAILURE: &str =
    "certificate.qualified.atIssuanceTime.failed";

/// The certificate had qualified status at the best signature time.
pub const QUALIFIED_AT_BEST_SIGNATURE_TIME: &str = "certificate.qualified.atBestSignatureTime";

/// The certificate did not have qualified status at the best signature
/// time.
pub const QUALIFIED_AT_BEST_SIGNATURE_TIME_FAILURE: &str =
    "certificate.qualified.atBestSignatureTime.failed";

/// The certificate had qualified status at the validation time.
pub const QUALIFIED_AT_VALIDATION_TIME: &str = "certificate.qualified.atValidationTime";

/// The certificate did not have qualified status at the validation time.
pub const QUALIFIED_AT_VALIDATION_TIME_FAILURE: &str =
    "certificate.qualified.atValidationTime.failed";

/// The private key resided in a QSCD at the certificate's issuance time.
pub const QSCD_AT_ISSUANCE_TIME: &str = "certificate.qscd.atIssuanceTime";

/// The private key did not reside in a QSCD at the certificate's
/// issuance time.
pub const QSCD_AT_ISSUANCE_TIME_FAILURE: &str = "certificate.qscd.atIssuanceTime.failed";

/// The private key resided in a QSCD at the best signature time.
pub const QSCD_AT_BEST_SIGNATURE_TIME: &str = "certificate.qscd.atBestSignatureTime";

/// The private key did not reside in a QSCD at the best signature time.
pub const QSCD_AT_BEST_SIGNATURE_TIME_FAILURE: &str =
    "certificate.qscd.atBestSignatureTime.failed";

/// The private key resided in a QSCD at the validation time.
pub const QSCD_AT_VALIDATION_TIME: &str = "certificate.qscd.atValidationTime";

/// The private key did not reside in a QSCD at the validation time.
pub const QSCD_AT_VALIDATION_TIME_FAILURE: &str = "certificate.qscd.atValidationTime.failed";
