//! Response schemas for the two gateway operations.
//!
//! Field names and the severity value set must stay in sync with the serde
//! representation of [`AuditIssue`] and [`QuizQuestion`] -- the schema is
//! what the endpoint is constrained to, and the same objects are then
//! deserialized into the domain types.
//!
//! [`AuditIssue`]: repasse_types::AuditIssue
//! [`QuizQuestion`]: repasse_types::QuizQuestion

use repasse_llm::{FieldSpec, ResponseSchema};

/// Schema of the audit result: an array of issue objects.
pub fn audit_issues() -> ResponseSchema {
    ResponseSchema::new(vec![
        FieldSpec::string("recordId"),
        FieldSpec::string("studentName"),
        FieldSpec::string("field"),
        FieldSpec::string("issueType"),
        FieldSpec::string("description"),
        FieldSpec::string("severity").one_of(["LOW", "MEDIUM", "HIGH", "CRITICAL"]),
        FieldSpec::string("suggestedAction"),
    ])
}

/// Schema of the intervention result: an array of quiz questions.
pub fn quiz_questions() -> ResponseSchema {
    ResponseSchema::new(vec![
        FieldSpec::string("id"),
        FieldSpec::string("descriptor").describe("Código do descritor SAEB/BNCC (ex: D12)"),
        FieldSpec::string("question"),
        FieldSpec::string_array("options"),
        FieldSpec::integer("correctAnswer").describe("Index da resposta correta (0-3)"),
        FieldSpec::string("explanation").describe("Breve explicação pedagógica para o professor"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use repasse_types::fixtures::demo_audit_issues;

    #[test]
    fn audit_schema_accepts_serialized_domain_issues() {
        let value = serde_json::to_value(demo_audit_issues()).unwrap();
        assert!(audit_issues().validate(&value).is_ok());
    }

    #[test]
    fn audit_schema_requires_all_fields() {
        let schema = audit_issues();
        assert_eq!(schema.fields.len(), 7);
        assert!(schema.fields.iter().all(|f| f.required));
    }

    #[test]
    fn audit_schema_rejects_unknown_severity() {
        let value = serde_json::json!([{
            "recordId": "1",
            "studentName": "x",
            "field": "CPF",
            "issueType": "INVALID_FORMAT",
            "description": "d",
            "severity": "FATAL",
            "suggestedAction": "a"
        }]);
        assert!(audit_issues().validate(&value).is_err());
    }

    #[test]
    fn quiz_schema_accepts_conforming_question() {
        let value = serde_json::json!([{
            "id": "q1",
            "descriptor": "D12",
            "question": "Qual fração equivale a 0,5?",
            "options": ["1/2", "1/3", "2/3", "3/4"],
            "correctAnswer": 0,
            "explanation": "0,5 corresponde à metade."
        }]);
        assert!(quiz_questions().validate(&value).is_ok());
    }

    #[test]
    fn quiz_schema_rejects_fractional_answer_index() {
        let value = serde_json::json!([{
            "id": "q1",
            "descriptor": "D12",
            "question": "x?",
            "options": ["a", "b"],
            "correctAnswer": 0.5,
            "explanation": "y"
        }]);
        assert!(quiz_questions().validate(&value).is_err());
    }
}
