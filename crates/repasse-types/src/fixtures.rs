//! Bundled demo dataset and the canned audit result.
//!
//! These are static fixtures used for the guided walkthrough and for the
//! credential-absent fallback path. The student list intentionally contains
//! one clean record plus four seeded inconsistencies (invalid CPF, disability
//! without an attached report, age/grade mismatch, duplicate CPF), and the
//! canned audit result is the expected set of findings for it.

use chrono::NaiveDate;

use crate::audit::{AuditIssue, Severity};
use crate::student::StudentRecord;

/// Id of the first record in the bundled demo dataset.
///
/// The gateway uses this to recognize that a caller is auditing the demo
/// fixture (and only then substitutes the canned result on empty or failed
/// remote responses, when that behavior is enabled).
pub const DEMO_SENTINEL_ID: &str = "101";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Fixture literals only; all values are valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// The bundled demo student list (five records, first id is the sentinel).
pub fn demo_students() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            id: "101".into(),
            name: "João Silva".into(),
            cpf: "123.456.789-00".into(),
            birth_date: date(2015, 5, 10),
            grade: "3º Ano".into(),
            has_disability: false,
            disability_doc_attached: false,
            transportation_type: "MUNICIPAL".into(),
        },
        StudentRecord {
            id: "102".into(),
            name: "Maria Oliveira".into(),
            // Seeded inconsistency: repeated-digit CPF, disability flag
            // without an attached report.
            cpf: "000.000.000-00".into(),
            birth_date: date(2016, 2, 20),
            grade: "2º Ano".into(),
            has_disability: true,
            disability_doc_attached: false,
            transportation_type: "NONE".into(),
        },
        StudentRecord {
            id: "103".into(),
            name: "Pedro Santos".into(),
            cpf: "987.654.321-11".into(),
            birth_date: date(2008, 8, 15),
            // Seeded inconsistency: a teenager enrolled in daycare.
            grade: "Creche".into(),
            has_disability: false,
            disability_doc_attached: false,
            transportation_type: "MUNICIPAL".into(),
        },
        StudentRecord {
            id: "104".into(),
            name: "Ana Costa".into(),
            // Seeded inconsistency: duplicate of João Silva's CPF.
            cpf: "123.456.789-00".into(),
            birth_date: date(2015, 5, 10),
            grade: "3º Ano".into(),
            has_disability: false,
            disability_doc_attached: false,
            transportation_type: "MUNICIPAL".into(),
        },
        StudentRecord {
            id: "105".into(),
            name: "Lucas Pereira".into(),
            cpf: "111.222.333-44".into(),
            birth_date: date(2012, 11, 1),
            grade: "5º Ano".into(),
            has_disability: true,
            disability_doc_attached: true,
            transportation_type: "RURAL_PROPRIO".into(),
        },
    ]
}

/// The canned audit result for the demo dataset (four findings).
///
/// Returned by the gateway when no credential is configured, and substituted
/// for empty or failed remote responses when the input is the demo fixture.
pub fn demo_audit_issues() -> Vec<AuditIssue> {
    vec![
        AuditIssue {
            record_id: "102".into(),
            student_name: "Maria Oliveira".into(),
            field: "CPF".into(),
            issue_type: "INVALID_FORMAT".into(),
            description: "CPF com todos os dígitos iguais ou formato inválido (000.000.000-00)."
                .into(),
            severity: Severity::Critical,
            suggested_action: "Solicitar documento original e corrigir no ERP.".into(),
        },
        AuditIssue {
            record_id: "102".into(),
            student_name: "Maria Oliveira".into(),
            field: "Deficiência / Laudo".into(),
            issue_type: "MISSING_DOC".into(),
            description: "Aluno marcado com deficiência mas sem laudo anexado.".into(),
            severity: Severity::High,
            suggested_action: "Anexar laudo médico ou desmarcar opção de deficiência.".into(),
        },
        AuditIssue {
            record_id: "103".into(),
            student_name: "Pedro Santos".into(),
            field: "Grade / Idade".into(),
            issue_type: "AGE_MISMATCH".into(),
            description: "Idade (16 anos) incompatível com a etapa de ensino (Creche).".into(),
            severity: Severity::Critical,
            suggested_action: "Verificar data de nascimento ou enturmação.".into(),
        },
        AuditIssue {
            record_id: "104".into(),
            student_name: "Ana Costa".into(),
            field: "CPF".into(),
            issue_type: "DUPLICATE".into(),
            description: "CPF duplicado com o aluno João Silva (ID 101).".into(),
            severity: Severity::High,
            suggested_action: "Verificar qual aluno possui o CPF correto.".into(),
        },
    ]
}
