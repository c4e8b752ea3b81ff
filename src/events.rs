// Copyright 2025 Chime Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Build result abstraction queried by notification handlers.

use serde::{Deserialize, Serialize};

/// Outcome of one build cycle as seen by the notification plugin.
///
/// Hosts hand an implementation of this to every fired hook. Two capability
/// queries are all the notification logic needs.
pub trait BuildStats {
    /// Did this build cycle record any errors?
    fn has_errors(&self) -> bool;

    /// Did this build cycle record any warnings?
    fn has_warnings(&self) -> bool;
}

/// A plain build result for hosts that have no stats type of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Error messages recorded during the build.
    #[serde(default)]
    pub errors: Vec<String>,

    /// Warning messages recorded during the build.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl BuildReport {
    /// A clean build: no errors, no warnings.
    pub fn success() -> Self {
        Self::default()
    }

    /// A build that ended with the given errors.
    pub fn with_errors(errors: Vec<String>) -> Self {
        Self {
            errors,
            warnings: Vec::new(),
        }
    }

    /// A build that finished with the given warnings only.
    pub fn with_warnings(warnings: Vec<String>) -> Self {
        Self {
            errors: Vec::new(),
            warnings,
        }
    }
}

impl BuildStats for BuildReport {
    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_report_is_clean() {
        let report = BuildReport::success();
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_error_report() {
        let report = BuildReport::with_errors(vec!["type mismatch".to_string()]);
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_warning_report() {
        let report = BuildReport::with_warnings(vec!["unused import".to_string()]);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_report_deserializes_with_missing_fields() {
        let report: BuildReport = serde_json::from_str(r#"{"errors": ["boom"]}"#).unwrap();
        assert!(report.has_errors());
        assert!(report.warnings.is_empty());
    }
}
