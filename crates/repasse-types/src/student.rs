//! Student enrollment records, the input to a census audit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single student enrollment record from the municipal census export.
///
/// Records are ephemeral request payloads: they are serialized into the audit
/// prompt exactly as deserialized, never mutated, and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Enrollment identifier within the municipal ERP.
    pub id: String,

    /// Student full name.
    pub name: String,

    /// CPF (Brazilian national id), formatted "000.000.000-00".
    pub cpf: String,

    /// Date of birth; cross-checked against the enrolled grade.
    pub birth_date: NaiveDate,

    /// Grade label as it appears in the census (e.g. "3º Ano", "Creche").
    pub grade: String,

    /// Whether the record declares a disability.
    pub has_disability: bool,

    /// Whether a medical report backing the disability flag is attached.
    pub disability_doc_attached: bool,

    /// Transportation category (e.g. "MUNICIPAL", "ESTADUAL", "NONE").
    ///
    /// Kept as a free string: the census export is not normalized and the
    /// audit rules treat unexpected values as a completeness finding, not a
    /// deserialization failure.
    pub transportation_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StudentRecord {
        StudentRecord {
            id: "201".into(),
            name: "Carla Souza".into(),
            cpf: "321.654.987-00".into(),
            birth_date: NaiveDate::from_ymd_opt(2014, 3, 2).unwrap(),
            grade: "4º Ano".into(),
            has_disability: false,
            disability_doc_attached: false,
            transportation_type: "ESTADUAL".into(),
        }
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains(r#""birthDate":"2014-03-02""#));
        assert!(json.contains(r#""hasDisability":false"#));
        assert!(json.contains(r#""disabilityDocAttached":false"#));
        assert!(json.contains(r#""transportationType":"ESTADUAL""#));
        assert!(!json.contains("birth_date"));
    }

    #[test]
    fn serde_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: StudentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn deserializes_census_export_shape() {
        let json = r#"{
            "id": "101",
            "name": "João Silva",
            "cpf": "123.456.789-00",
            "birthDate": "2015-05-10",
            "grade": "3º Ano",
            "hasDisability": false,
            "disabilityDocAttached": false,
            "transportationType": "MUNICIPAL"
        }"#;
        let record: StudentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "101");
        assert_eq!(record.birth_date, NaiveDate::from_ymd_opt(2015, 5, 10).unwrap());
    }
}
