//! The [`InferenceGateway`]: remote call or deterministic fallback, never an
//! error to the caller.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use repasse_llm::{ClientError, InferenceClient, ResponseSchema};
use repasse_types::fixtures::{DEMO_SENTINEL_ID, demo_audit_issues};
use repasse_types::{AuditIssue, QuizQuestion, Severity, StudentRecord};

use crate::config::GatewayConfig;
use crate::{prompt, schemas};

/// Mediates between the inference endpoint and canned results.
///
/// Holds no mutable state: the credential is read once at construction and
/// each operation is a single awaited remote call (or none). Concurrent
/// invocations are safe but uncoordinated -- there are no retries, no
/// internal timeouts beyond the transport's, and no cancellation handling.
pub struct InferenceGateway {
    config: GatewayConfig,
    client: Arc<dyn InferenceClient>,
}

impl InferenceGateway {
    /// Create a gateway from its configuration and an injected client.
    pub fn new(config: GatewayConfig, client: Arc<dyn InferenceClient>) -> Self {
        Self { config, client }
    }

    /// Returns the gateway configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Audit a list of student records for census inconsistencies.
    ///
    /// Never fails. The result is one of:
    ///
    /// - the remote findings, when the call succeeds;
    /// - the canned demo issue set, when no credential is configured, or
    ///   when the input is the bundled demo fixture and the remote call
    ///   failed or came back empty (demo-data guard, see
    ///   [`GatewayConfig::allow_demo_fallback`]);
    /// - `[]`, when the remote honestly finds nothing in non-demo input;
    /// - a single synthetic LOW-severity `CONNECTION_ERROR` issue, when the
    ///   remote call faults on non-demo input.
    pub async fn audit(&self, records: &[StudentRecord]) -> Vec<AuditIssue> {
        let is_demo = self.config.allow_demo_fallback
            && records.first().is_some_and(|r| r.id == DEMO_SENTINEL_ID);

        if !self.config.is_configured() {
            warn!("no inference credential configured, returning canned audit result");
            tokio::time::sleep(Duration::from_millis(self.config.mock_latency_ms)).await;
            return demo_audit_issues();
        }

        let records_json = match serde_json::to_string(records) {
            Ok(json) => json,
            Err(err) => {
                error!(error = %err, "failed to serialize records for the audit prompt");
                return self.audit_fault_result(is_demo);
            }
        };

        let prompt = prompt::audit(&records_json);
        let schema = schemas::audit_issues();

        debug!(
            records = records.len(),
            demo = is_demo,
            "submitting census audit"
        );

        match self.client.submit(&prompt, &schema).await {
            Ok(text) if text.trim().is_empty() => {
                if is_demo {
                    warn!("empty audit response for the demo dataset, substituting canned result");
                    demo_audit_issues()
                } else {
                    Vec::new()
                }
            }
            Ok(text) => match parse_items::<AuditIssue>(&text, &schema) {
                Ok(issues) if issues.is_empty() && is_demo => {
                    warn!("remote found no issues in the demo dataset, substituting canned result");
                    demo_audit_issues()
                }
                Ok(issues) => {
                    debug!(issues = issues.len(), "census audit complete");
                    issues
                }
                Err(err) => {
                    error!(error = %err, "audit response failed schema validation");
                    self.audit_fault_result(is_demo)
                }
            },
            Err(err) => {
                error!(error = %err, endpoint = %self.client.name(), "audit inference request failed");
                self.audit_fault_result(is_demo)
            }
        }
    }

    /// Generate a three-question remedial quiz for a weak SAEB skill.
    ///
    /// Never fails, and -- asymmetric with [`audit`](Self::audit) -- never
    /// substitutes canned data: an unconfigured credential or any fault
    /// yields an empty list. Questions whose correct-answer index falls
    /// outside their options are dropped.
    pub async fn generate_intervention(
        &self,
        grade: &str,
        subject: &str,
        weakness: &str,
    ) -> Vec<QuizQuestion> {
        if !self.config.is_configured() {
            debug!("no inference credential configured, skipping quiz generation");
            return Vec::new();
        }

        let prompt = prompt::intervention(grade, subject, weakness);
        let schema = schemas::quiz_questions();

        debug!(grade, subject, weakness, "submitting quiz generation");

        let text = match self.client.submit(&prompt, &schema).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => return Vec::new(),
            Err(err) => {
                error!(error = %err, endpoint = %self.client.name(), "quiz inference request failed");
                return Vec::new();
            }
        };

        let questions = match parse_items::<QuizQuestion>(&text, &schema) {
            Ok(questions) => questions,
            Err(err) => {
                error!(error = %err, "quiz response failed schema validation");
                return Vec::new();
            }
        };

        questions
            .into_iter()
            .filter(|q| {
                let ok = q.correct_answer_in_bounds();
                if !ok {
                    warn!(
                        question = %q.id,
                        correct_answer = q.correct_answer,
                        options = q.options.len(),
                        "dropping question with out-of-bounds answer index"
                    );
                }
                ok
            })
            .collect()
    }

    /// The in-band result for a failed remote audit: the canned set for the
    /// demo fixture, a single synthetic connection-failure issue otherwise.
    fn audit_fault_result(&self, is_demo: bool) -> Vec<AuditIssue> {
        if is_demo {
            demo_audit_issues()
        } else {
            vec![connection_failure_issue()]
        }
    }
}

/// Parse the raw response text as JSON, validate it against the schema, then
/// deserialize into the domain items.
fn parse_items<T: DeserializeOwned>(
    text: &str,
    schema: &ResponseSchema,
) -> Result<Vec<T>, ClientError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    schema.validate(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// The synthetic issue reported when the remote call faults on non-demo
/// input. Severity is deliberately LOW: the data itself is not at fault.
fn connection_failure_issue() -> AuditIssue {
    AuditIssue {
        record_id: "ERROR".into(),
        student_name: "Sistema".into(),
        field: "API Connection".into(),
        issue_type: "CONNECTION_ERROR".into(),
        description: "Não foi possível conectar à IA. Verifique sua chave de API.".into(),
        severity: Severity::Low,
        suggested_action: "Tente novamente mais tarde.".into(),
    }
}

impl std::fmt::Debug for InferenceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceGateway")
            .field("endpoint", &self.client.name())
            .field("configured", &self.config.is_configured())
            .field("allow_demo_fallback", &self.config.allow_demo_fallback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failure_issue_shape() {
        let issue = connection_failure_issue();
        assert_eq!(issue.severity, Severity::Low);
        assert_eq!(issue.issue_type, "CONNECTION_ERROR");
        assert_eq!(issue.record_id, "ERROR");
    }

    #[test]
    fn parse_items_accepts_valid_issue_array() {
        let text = serde_json::to_string(&demo_audit_issues()).unwrap();
        let parsed: Vec<AuditIssue> = parse_items(&text, &schemas::audit_issues()).unwrap();
        assert_eq!(parsed, demo_audit_issues());
    }

    #[test]
    fn parse_items_rejects_malformed_json() {
        let err =
            parse_items::<AuditIssue>("not json at all", &schemas::audit_issues()).unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[test]
    fn parse_items_rejects_schema_mismatch() {
        let text = r#"[{"recordId": "1"}]"#;
        let err = parse_items::<AuditIssue>(text, &schemas::audit_issues()).unwrap_err();
        assert!(matches!(err, ClientError::SchemaViolation(_)));
    }

    #[test]
    fn parse_items_rejects_object_payload() {
        let text = r#"{"issues": []}"#;
        let err = parse_items::<AuditIssue>(text, &schemas::audit_issues()).unwrap_err();
        assert!(matches!(err, ClientError::SchemaViolation(_)));
    }
}
