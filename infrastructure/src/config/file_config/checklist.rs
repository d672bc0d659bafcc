//! Checklist configuration from TOML (`[checklist]` section)

use serde::{Deserialize, Serialize};
use triage_domain::{AnswerPolicy, ConfigIssue, ConfigIssueCode, Severity};

/// Raw checklist configuration from TOML
///
/// ```toml
/// [checklist]
/// policy = "strict"    # "lenient" or "strict"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChecklistConfig {
    /// How unanswered questions are treated
    pub policy: String,
}

impl Default for FileChecklistConfig {
    fn default() -> Self {
        Self {
            policy: AnswerPolicy::default().as_str().to_string(),
        }
    }
}

impl FileChecklistConfig {
    pub fn parse_policy(&self) -> (AnswerPolicy, Vec<ConfigIssue>) {
        match self.policy.parse::<AnswerPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "checklist.policy".to_string(),
                        value: self.policy.clone(),
                        valid_values: vec!["lenient".to_string(), "strict".to_string()],
                    },
                    message: format!(
                        "checklist.policy: unknown value '{}', falling back to 'lenient'",
                        self.policy
                    ),
                };
                (AnswerPolicy::default(), vec![issue])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        let config = FileChecklistConfig {
            policy: "strict".to_string(),
        };
        assert_eq!(config.parse_policy().0, AnswerPolicy::Strict);
        assert_eq!(
            FileChecklistConfig::default().parse_policy().0,
            AnswerPolicy::Lenient
        );
    }

    #[test]
    fn test_unknown_policy_falls_back() {
        let config = FileChecklistConfig {
            policy: "pedantic".to_string(),
        };
        let (policy, issues) = config.parse_policy();
        assert_eq!(policy, AnswerPolicy::Lenient);
        assert_eq!(issues.len(), 1);
    }
}
