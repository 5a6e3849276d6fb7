//! Generated remedial quiz questions (SAEB intervention output).

use serde::{Deserialize, Serialize};

/// A multiple-choice question generated for a pedagogical intervention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question identifier assigned by the generator.
    pub id: String,

    /// BNCC/SAEB skill descriptor code this question drills (e.g. "D12").
    pub descriptor: String,

    /// The question statement.
    pub question: String,

    /// Answer options, in presentation order.
    pub options: Vec<String>,

    /// Index into `options` of the correct answer.
    ///
    /// Must be in bounds of `options`; the gateway drops questions that
    /// violate this before returning them (see
    /// [`correct_answer_in_bounds`](Self::correct_answer_in_bounds)).
    pub correct_answer: usize,

    /// Short pedagogical explanation for the teacher.
    pub explanation: String,
}

impl QuizQuestion {
    /// Whether `correct_answer` actually indexes into `options`.
    pub fn correct_answer_in_bounds(&self) -> bool {
        self.correct_answer < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(correct_answer: usize) -> QuizQuestion {
        QuizQuestion {
            id: "q1".into(),
            descriptor: "D12".into(),
            question: "Qual fração equivale a 0,5?".into(),
            options: vec!["1/2".into(), "1/3".into(), "2/3".into(), "3/4".into()],
            correct_answer,
            explanation: "0,5 corresponde à metade.".into(),
        }
    }

    #[test]
    fn in_bounds_answer_accepted() {
        assert!(sample(0).correct_answer_in_bounds());
        assert!(sample(3).correct_answer_in_bounds());
    }

    #[test]
    fn out_of_bounds_answer_detected() {
        assert!(!sample(4).correct_answer_in_bounds());
    }

    #[test]
    fn empty_options_never_in_bounds() {
        let mut q = sample(0);
        q.options.clear();
        assert!(!q.correct_answer_in_bounds());
    }

    #[test]
    fn serde_roundtrip_camel_case() {
        let q = sample(1);
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains(r#""correctAnswer":1"#));
        assert!(json.contains(r#""descriptor":"D12""#));
        let parsed: QuizQuestion = serde_json::from_str(&json).unwrap();
        assert_eq!(q, parsed);
    }

    #[test]
    fn rejects_negative_correct_answer() {
        let json = r#"{
            "id": "q1",
            "descriptor": "D12",
            "question": "x?",
            "options": ["a", "b"],
            "correctAnswer": -1,
            "explanation": "y"
        }"#;
        assert!(serde_json::from_str::<QuizQuestion>(json).is_err());
    }
}
