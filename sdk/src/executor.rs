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

//! The process executor: configuration surface and entry point of a
//! validation run.

use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    diagnostic::DiagnosticData,
    i18n::MessageRenderer,
    policy::ValidationPolicy,
    process::ValidationLevel,
    report::{DetailedReport, EtsiValidationReport, Reports, SimpleReport},
    Error, Result,
};

/// Configures and runs one validation.
///
/// All four run parameters must be set explicitly before calling
/// [`execute`](Self::execute); a missing parameter is a configuration
/// error, never a validation finding. The executor owns no mutable
/// state across runs and each run produces an independent report
/// bundle.
///
/// ```no_run
/// # fn main() -> sigval::Result<()> {
/// use chrono::Utc;
/// use sigval::{DiagnosticData, ProcessExecutor, ValidationLevel, ValidationPolicy};
///
/// let diagnostic = DiagnosticData::from_json(r#"{"signatures": []}"#)?;
///
/// let mut executor = ProcessExecutor::new();
/// executor.set_diagnostic_data(diagnostic);
/// executor.set_validation_policy(ValidationPolicy::default());
/// executor.set_current_time(Utc::now());
/// executor.set_validation_level(ValidationLevel::LongTermData);
///
/// let reports = executor.execute()?;
/// println!("{}", reports.simple_report.valid_signature_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ProcessExecutor {
    diagnostic_data: Option<DiagnosticData>,
    policy: Option<ValidationPolicy>,
    current_time: Option<DateTime<Utc>>,
    validation_level: Option<ValidationLevel>,
    enable_etsi_report: bool,
    renderer: MessageRenderer,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_diagnostic_data(&mut self, diagnostic_data: DiagnosticData) -> &mut Self {
        self.diagnostic_data = Some(diagnostic_data);
        self
    }

    pub fn set_validation_policy(&mut self, policy: ValidationPolicy) -> &mut Self {
        self.policy = Some(policy);
        self
    }

    pub fn set_current_time(&mut self, current_time: DateTime<Utc>) -> &mut Self {
        self.current_time = Some(current_time);
        self
    }

    pub fn set_validation_level(&mut self, validation_level: ValidationLevel) -> &mut Self {
        self.validation_level = Some(validation_level);
        self
    }

    /// Also builds the standards-format report. Off by default.
    pub fn enable_etsi_report(&mut self, enable: bool) -> &mut Self {
        self.enable_etsi_report = enable;
        self
    }

    /// Message rendering configuration for the simple report.
    pub fn set_message_renderer(&mut self, renderer: MessageRenderer) -> &mut Self {
        self.renderer = renderer;
        self
    }

    fn assert_configuration_valid(
        &self,
    ) -> Result<(
        &DiagnosticData,
        &ValidationPolicy,
        DateTime<Utc>,
        ValidationLevel,
    )> {
        let diagnostic = self
            .diagnostic_data
            .as_ref()
            .ok_or(Error::MissingDiagnosticData)?;
        let policy = self.policy.as_ref().ok_or(Error::MissingValidationPolicy)?;
        let current_time = self.current_time.ok_or(Error::MissingCurrentTime)?;
        let level = self
            .validation_level
            .ok_or(Error::MissingValidationLevel)?;
        Ok((diagnostic, policy, current_time, level))
    }

    /// Runs the validation and assembles the report bundle.
    pub fn execute(&self) -> Result<Reports> {
        let (diagnostic, policy, current_time, level) = self.assert_configuration_valid()?;

        debug!(
            "executing validation of {} signature(s) at {current_time} ({level:?})",
            diagnostic.signatures().len()
        );

        let detailed = DetailedReport::build(diagnostic, policy, current_time, level)?;
        let simple = SimpleReport::build(&detailed, diagnostic, &self.renderer);
        let etsi = self
            .enable_etsi_report
            .then(|| EtsiValidationReport::build(&detailed));

        Ok(Reports {
            diagnostic_data: diagnostic.clone(),
            detailed_report: detailed,
            simple_report: simple,
            etsi_validation_report: etsi,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn each_missing_parameter_has_its_own_error() {
        let mut executor = ProcessExecutor::new();
        assert!(matches!(
            executor.execute().unwrap_err(),
            Error::MissingDiagnosticData
        ));

        executor.set_diagnostic_data(DiagnosticData::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        ));
        assert!(matches!(
            executor.execute().unwrap_err(),
            Error::MissingValidationPolicy
        ));

        executor.set_validation_policy(ValidationPolicy::default());
        assert!(matches!(
            executor.execute().unwrap_err(),
            Error::MissingCurrentTime
        ));

        executor.set_current_time(Utc::now());
        assert!(matches!(
            executor.execute().unwrap_err(),
            Error::MissingValidationLevel
        ));

        executor.set_validation_level(ValidationLevel::BasicSignatures);
        assert!(executor.execute().is_ok());
    }

    #[test]
    fn etsi_report_is_only_built_when_enabled() {
        let mut executor = ProcessExecutor::new();
        executor
            .set_diagnostic_data(DiagnosticData::new(
                Vec::new(),
                Vec::new(),
                Vec::new(),
                Vec::new(),
            ))
            .set_validation_policy(ValidationPolicy::default())
            .set_current_time(Utc::now())
            .set_validation_level(ValidationLevel::LongTermData);

        assert!(executor.execute().unwrap().etsi_validation_report.is_none());

        executor.enable_etsi_report(true);
        assert!(executor.execute().unwrap().etsi_validation_report.is_some());
    }
}
