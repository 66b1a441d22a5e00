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

//! The validation policy model: read-only configuration mapping each
//! semantic check to an enforcement level and, where relevant, an
//! accepted value set.
//!
//! A policy is loaded once per run and never consulted by the report
//! summarization stages; only the building blocks read it.

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{process::Context, Result};

/// Enforcement level of one constraint.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum ConstraintLevel {
    /// The check is skipped entirely.
    Ignore,

    /// A negative result is recorded as informational; the chain
    /// continues.
    Inform,

    /// A negative result is recorded as a warning; the chain continues.
    Warn,

    /// A negative result fails the chain and determines its conclusion.
    #[default]
    Fail,
}

/// A constraint carrying only an enforcement level.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LevelConstraint {
    /// The enforcement level.
    pub level: ConstraintLevel,
}

impl LevelConstraint {
    /// Returns a constraint with the given level.
    pub fn new(level: ConstraintLevel) -> Self {
        LevelConstraint { level }
    }
}

/// A constraint carrying an enforcement level and an accepted value
/// set.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MultiValuesConstraint {
    /// The enforcement level.
    pub level: ConstraintLevel,

    /// Accepted values. The single entry `*` accepts any value.
    #[serde(default)]
    pub accepted: Vec<String>,
}

impl MultiValuesConstraint {
    /// Returns a constraint with the given level and accepted values.
    pub fn new<I, S>(level: ConstraintLevel, accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MultiValuesConstraint {
            level,
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the value is a member of the accepted set.
    ///
    /// Values are compared after trimming; `*` accepts anything.
    pub fn is_accepted(&self, value: &str) -> bool {
        let value = value.trim();
        self.accepted
            .iter()
            .any(|a| a == "*" || a.trim() == value)
    }

    /// Returns `true` if any of the values is accepted.
    pub fn any_accepted<'a, I: IntoIterator<Item = &'a str>>(&self, values: I) -> bool {
        values.into_iter().any(|v| self.is_accepted(v))
    }
}

/// Constraint on the freshness of revocation information.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FreshnessConstraint {
    /// The enforcement level.
    pub level: ConstraintLevel,

    /// Maximum accepted age of revocation data, in seconds, measured
    /// from its production time to the validation time. Absent means
    /// any age is accepted as long as data exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<i64>,
}

/// The constraints applicable to one validation context.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ContextConstraints {
    /// Structural well-formedness of the token.
    pub structure: LevelConstraint,

    /// Signature-value verification outcome.
    pub signature_intact: LevelConstraint,

    /// Signed-digest match outcome.
    pub digest_match: LevelConstraint,

    /// Accepted signature algorithms.
    pub accepted_algorithms: MultiValuesConstraint,

    /// Certificate validity period at the usage time.
    pub certificate_expiration: LevelConstraint,

    /// Certificate revocation status.
    pub certificate_revocation: LevelConstraint,

    /// Accepted key usages for the signing certificate.
    pub key_usage: MultiValuesConstraint,

    /// Accepted trusted-service type identifiers.
    pub trusted_service_types: MultiValuesConstraint,

    /// Freshness of revocation data for the signing certificate.
    pub revocation_freshness: FreshnessConstraint,

    /// QSCD requirement for qualification determination.
    pub qscd: LevelConstraint,

    /// Qualified-certificate requirement for qualification
    /// determination.
    pub qualified_certificate: LevelConstraint,
}

impl Default for ContextConstraints {
    fn default() -> Self {
        ContextConstraints {
            structure: LevelConstraint::new(ConstraintLevel::Fail),
            signature_intact: LevelConstraint::new(ConstraintLevel::Fail),
            digest_match: LevelConstraint::new(ConstraintLevel::Fail),
            accepted_algorithms: MultiValuesConstraint::new(ConstraintLevel::Fail, ["*"]),
            certificate_expiration: LevelConstraint::new(ConstraintLevel::Fail),
            certificate_revocation: LevelConstraint::new(ConstraintLevel::Fail),
            key_usage: MultiValuesConstraint::new(ConstraintLevel::Warn, ["*"]),
            trusted_service_types: MultiValuesConstraint::new(ConstraintLevel::Fail, ["*"]),
            revocation_freshness: FreshnessConstraint {
                level: ConstraintLevel::Warn,
                max_age_seconds: None,
            },
            qscd: LevelConstraint::new(ConstraintLevel::Warn),
            qualified_certificate: LevelConstraint::new(ConstraintLevel::Warn),
        }
    }
}

/// A complete validation policy: one [`ContextConstraints`] block per
/// validation context.
///
/// Loaded once per run and treated as immutable for the run's duration.
/// Safe to share across concurrent runs.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationPolicy {
    /// Human-readable policy name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Constraints for main signatures.
    pub signature: ContextConstraints,

    /// Constraints for counter-signatures. Falls back to the signature
    /// block when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_signature: Option<ContextConstraints>,

    /// Constraints for time-stamps.
    pub timestamp: ContextConstraints,

    /// Constraints for revocation data.
    pub revocation: ContextConstraints,

    /// Constraints for standalone certificate validation.
    pub certificate: ContextConstraints,
}

impl ValidationPolicy {
    /// Parses a policy document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the constraint block for the given context.
    pub fn constraints(&self, context: Context) -> &ContextConstraints {
        match context {
            Context::Signature => &self.signature,
            Context::CounterSignature => {
                self.counter_signature.as_ref().unwrap_or(&self.signature)
            }
            Context::Timestamp => &self.timestamp,
            Context::Revocation => &self.revocation,
            Context::Certificate => &self.certificate,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn accepted_values_are_trimmed() {
        let constraint = MultiValuesConstraint::new(
            ConstraintLevel::Fail,
            ["http://uri.etsi.org/TrstSvc/Svctype/CA/QC "],
        );

        assert!(constraint.is_accepted(" http://uri.etsi.org/TrstSvc/Svctype/CA/QC"));
        assert!(!constraint.is_accepted("http://uri.etsi.org/TrstSvc/Svctype/NationalRootCA-QC"));
    }

    #[test]
    fn wildcard_accepts_anything() {
        let constraint = MultiValuesConstraint::new(ConstraintLevel::Fail, ["*"]);

        assert!(constraint.is_accepted("anything"));
        assert!(constraint.any_accepted(["a", "b"]));
    }

    #[test]
    fn empty_set_accepts_nothing() {
        let constraint = MultiValuesConstraint::new(ConstraintLevel::Fail, Vec::<String>::new());

        assert!(!constraint.is_accepted("anything"));
        assert!(!constraint.any_accepted([]));
    }

    #[test]
    fn counter_signature_falls_back_to_signature_block() {
        let mut policy = ValidationPolicy::default();
        policy.signature.structure.level = ConstraintLevel::Warn;

        assert_eq!(
            policy.constraints(Context::CounterSignature).structure.level,
            ConstraintLevel::Warn
        );

        policy.counter_signature = Some(ContextConstraints::default());
        assert_eq!(
            policy.constraints(Context::CounterSignature).structure.level,
            ConstraintLevel::Fail
        );
    }

    #[test]
    fn parses_partial_policy_document() {
        let policy = ValidationPolicy::from_json(
            r#"{
                "name": "strict",
                "signature": {
                    "trustedServiceTypes": {
                        "level": "FAIL",
                        "accepted": ["http://uri.etsi.org/TrstSvc/Svctype/CA/QC"]
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(policy.name.as_deref(), Some("strict"));
        assert!(policy
            .signature
            .trusted_service_types
            .is_accepted("http://uri.etsi.org/TrstSvc/Svctype/CA/QC"));
        // untouched constraints keep their defaults
        assert_eq!(policy.signature.structure.level, ConstraintLevel::Fail);
    }
}
