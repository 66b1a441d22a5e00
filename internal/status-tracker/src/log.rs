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

use std::{borrow::Cow, fmt::Debug};

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One recorded outcome of a validation check.
///
/// Use the [`finding`](crate::finding) macro to create a `Finding`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
pub struct Finding {
    /// Message tag identifying the check that produced this finding.
    ///
    /// Tags are defined as constants in the
    /// [`message_codes`](crate::message_codes) mod.
    pub tag: Cow<'static, str>,

    /// Severity of the finding.
    pub kind: FindingKind,

    /// Parameterized diagnostic text, present only when a check did not
    /// pass and had a specific value to report (for example the
    /// trusted-service type that was actually found).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Cow<'static, str>>,

    /// Source file where the finding was recorded.
    #[serde(skip)]
    pub file: Cow<'static, str>,

    /// Function where the finding was recorded.
    #[serde(skip)]
    pub function: Cow<'static, str>,

    /// Source line number where the finding was recorded.
    #[serde(skip)]
    pub line: u32,
}

impl Finding {
    /// Creates a new `Finding` with [`FindingKind::Success`].
    ///
    /// Most call sites should prefer the [`finding`](crate::finding)
    /// macro, which captures the source location automatically.
    pub fn new<L, F, FL>(tag: L, function: F, file: FL, line: u32) -> Self
    where
        L: Into<Cow<'static, str>>,
        F: Into<Cow<'static, str>>,
        FL: Into<Cow<'static, str>>,
    {
        Finding {
            tag: tag.into(),
            kind: FindingKind::Success,
            additional_info: None,
            file: file.into(),
            function: function.into(),
            line,
        }
    }

    /// Marks this finding as informational.
    pub fn informational(self) -> Self {
        Finding {
            kind: FindingKind::Informational,
            ..self
        }
    }

    /// Marks this finding as a warning.
    pub fn warning(self) -> Self {
        Finding {
            kind: FindingKind::Warning,
            ..self
        }
    }

    /// Marks this finding as a failure.
    pub fn failure(self) -> Self {
        Finding {
            kind: FindingKind::Failure,
            ..self
        }
    }

    /// Attaches parameterized diagnostic text to this finding.
    pub fn additional_info<S: Into<Cow<'static, str>>>(self, info: S) -> Self {
        Finding {
            additional_info: Some(info.into()),
            ..self
        }
    }

    /// Returns `true` if this finding reports a failure.
    pub fn is_failure(&self) -> bool {
        self.kind == FindingKind::Failure
    }
}

/// Severity of a [`Finding`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum FindingKind {
    /// The check passed.
    Success,

    /// The check did not pass, and its constraint level was
    /// informational.
    Informational,

    /// The check did not pass, and its constraint level was warning.
    Warning,

    /// The check did not pass, and its constraint level was enforced.
    Failure,
}

/// Creates a [`Finding`] annotated with the source file and line number
/// where the condition was recorded.
///
/// Takes two parameters, each of which may be a `'static str` or `String`:
///
/// * `tag`: message tag identifying the check (see
///   [`message_codes`](crate::message_codes))
/// * `function`: name of the process recording the finding
///
/// ## Example
///
/// ```
/// # use std::borrow::Cow;
/// # use sigval_status_tracker::{finding, Finding, FindingKind};
/// let f = finding!("certificate.insideValidity", "xcv");
///
/// assert_eq!(
///     f,
///     Finding {
///         tag: Cow::Borrowed("certificate.insideValidity"),
///         kind: FindingKind::Success,
///         additional_info: None,
///         file: Cow::Borrowed(file!()),
///         function: Cow::Borrowed("xcv"),
///         line: f.line,
///     }
/// );
/// ```
#[macro_export]
macro_rules! finding {
    ($tag:expr, $function:expr) => {{
        $crate::Finding {
            tag: $tag.into(),
            kind: $crate::FindingKind::Success,
            additional_info: None,
            file: file!().into(),
            function: $function.into(),
            line: line!(),
        }
    }};
}
