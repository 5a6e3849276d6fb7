//! Audit findings: data-quality problems detected in student records.

use serde::{Deserialize, Serialize};

/// How badly an issue threatens the Fundeb transfer for the record.
///
/// The ordering is meaningful: `Low < Medium < High < Critical`. Serialized
/// as SCREAMING_CASE strings, which is the wire format the inference endpoint
/// is constrained to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Informational; does not block a transfer.
    Low,
    /// Should be fixed before the next census window.
    Medium,
    /// Likely to cause a glosa (clawback) if unresolved.
    High,
    /// Blocks the transfer for this record outright.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// A single data-quality problem detected in a [`StudentRecord`].
///
/// Issues have no identity beyond structural equality. `record_id` is
/// expected to reference an existing record id, but the gateway does not
/// enforce that -- it is a consumer-side assumption (the synthetic
/// connection-failure issue deliberately uses a non-record id).
///
/// [`StudentRecord`]: crate::student::StudentRecord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditIssue {
    /// Id of the record the issue was found in.
    pub record_id: String,

    /// Student name, repeated for display without a record lookup.
    pub student_name: String,

    /// The record field the issue concerns (e.g. "CPF", "Grade / Idade").
    pub field: String,

    /// Machine-readable tag (e.g. "INVALID_FORMAT", "DUPLICATE",
    /// "MISSING_DOC", "AGE_MISMATCH", "CONNECTION_ERROR").
    pub issue_type: String,

    /// Free-text description of what is wrong.
    pub description: String,

    /// Severity of the finding.
    pub severity: Severity,

    /// What the operator should do about it.
    pub suggested_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_serializes_screaming_case() {
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), r#""LOW""#);
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            r#""CRITICAL""#
        );
    }

    #[test]
    fn severity_deserializes_wire_format() {
        let sev: Severity = serde_json::from_str(r#""HIGH""#).unwrap();
        assert_eq!(sev, Severity::High);
    }

    #[test]
    fn severity_rejects_unknown_value() {
        assert!(serde_json::from_str::<Severity>(r#""SEVERE""#).is_err());
    }

    #[test]
    fn severity_display_matches_wire_format() {
        for sev in [
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ] {
            let wire = serde_json::to_string(&sev).unwrap();
            assert_eq!(wire, format!("\"{sev}\""));
        }
    }

    #[test]
    fn issue_serde_roundtrip() {
        let issue = AuditIssue {
            record_id: "102".into(),
            student_name: "Maria Oliveira".into(),
            field: "CPF".into(),
            issue_type: "INVALID_FORMAT".into(),
            description: "CPF com formato inválido.".into(),
            severity: Severity::Critical,
            suggested_action: "Corrigir no ERP.".into(),
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains(r#""recordId":"102""#));
        assert!(json.contains(r#""issueType":"INVALID_FORMAT""#));
        assert!(json.contains(r#""suggestedAction""#));
        let parsed: AuditIssue = serde_json::from_str(&json).unwrap();
        assert_eq!(issue, parsed);
    }
}
