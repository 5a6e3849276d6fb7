//! Prompt construction for the two gateway operations.
//!
//! Prompts are written in Portuguese, matching the audited data and the
//! audience (municipal education departments). The audit rule set is fixed;
//! the record payload is spliced in already serialized so the gateway keeps
//! control over serialization failures.

/// Build the census-audit instruction around the serialized record list.
///
/// The five audit rules are the fixed contract of the operation: invalid
/// CPF, duplicate CPF, disability without an attached report, age/grade
/// mismatch, and transportation-field completeness.
pub fn audit(records_json: &str) -> String {
    format!(
        "Atue como um auditor especialista no Censo Escolar Brasileiro e Fundeb.\n\
         Analise a lista de estudantes abaixo (formato JSON) e identifique \
         inconsistências que possam bloquear repasses financeiros ou gerar glosas.\n\
         \n\
         Regras de Auditoria para aplicar:\n\
         1. CPF Inválido: CPFs com todos dígitos iguais ou formato incorreto.\n\
         2. Duplicidade: Alunos diferentes com mesmo CPF.\n\
         3. Deficiência sem Laudo: 'hasDisability' é true, mas 'disabilityDocAttached' é false.\n\
         4. Idade x Série: Verifique se a idade é compatível com a série (Ex: 15 anos na Creche é erro grave).\n\
         5. Transporte: Verificar se o transporte está preenchido corretamente.\n\
         \n\
         Dados dos Estudantes:\n\
         {records_json}"
    )
}

/// Build the remedial-quiz instruction for a (grade, subject, weakness)
/// pedagogical context. Always requests exactly three questions.
pub fn intervention(grade: &str, subject: &str, weakness: &str) -> String {
    format!(
        "Crie um mini-simulado de intervenção pedagógica para alunos do {grade}.\n\
         Foco na disciplina: {subject}.\n\
         Tópico de Dificuldade Específico: {weakness}.\n\
         \n\
         Estilo: Questões objetivas (múltipla escolha) similares à Prova Paraná e SAEB.\n\
         Quantidade: 3 questões.\n\
         \n\
         O objetivo é ajudar o professor a recuperar essa habilidade específica na turma."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_prompt_embeds_records_and_rules() {
        let prompt = audit(r#"[{"id":"101"}]"#);
        assert!(prompt.contains(r#"[{"id":"101"}]"#));
        assert!(prompt.contains("CPF Inválido"));
        assert!(prompt.contains("Duplicidade"));
        assert!(prompt.contains("Deficiência sem Laudo"));
        assert!(prompt.contains("Idade x Série"));
        assert!(prompt.contains("Transporte"));
    }

    #[test]
    fn audit_prompt_references_wire_field_names() {
        // The rules point the model at the exact serialized field names.
        let prompt = audit("[]");
        assert!(prompt.contains("'hasDisability'"));
        assert!(prompt.contains("'disabilityDocAttached'"));
    }

    #[test]
    fn intervention_prompt_embeds_context() {
        let prompt = intervention("5º Ano", "Matemática", "Geometria");
        assert!(prompt.contains("5º Ano"));
        assert!(prompt.contains("Matemática"));
        assert!(prompt.contains("Geometria"));
        assert!(prompt.contains("3 questões"));
    }
}
