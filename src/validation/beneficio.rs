use serde_json::Value;

use super::{is_date_pattern, is_not_empty, is_numeric, validate, Rule};
use crate::error::ErrorDetail;

pub const NOME_MIN_CHARS: usize = 5;
pub const NOME_MAX_CHARS: usize = 200;

fn nome_long_enough(text: &str) -> bool {
    text.trim().chars().count() >= NOME_MIN_CHARS
}

fn nome_short_enough(text: &str) -> bool {
    text.trim().chars().count() <= NOME_MAX_CHARS
}

static BENEFICIO_RULES: [Rule; 9] = [
    Rule::new("nome", is_not_empty, "O nome é obrigatório"),
    Rule::new("nome", nome_long_enough, "O nome deve ter no mínimo 5 caracteres"),
    Rule::new("nome", nome_short_enough, "O nome deve ter no máximo 200 caracteres"),
    Rule::new("endereco.logradouro", is_not_empty, "O logradouro é obrigatório"),
    Rule::new("endereco.bairro", is_not_empty, "O bairro é obrigatório"),
    Rule::new("endereco.cidade", is_not_empty, "A cidade é obrigatória"),
    Rule::new("pontos", is_numeric, "Os pontos devem ser um valor numérico"),
    Rule::new("data", is_date_pattern, "A data deve estar no formato yyyy-mm-dd"),
    Rule::new("quantidade", is_numeric, "A quantidade deve ser um valor numérico"),
];

/// Rules applied to create and update bodies, in reporting order
pub fn beneficio_rules() -> &'static [Rule] {
    &BENEFICIO_RULES
}

pub fn validate_beneficio(body: &Value) -> Vec<ErrorDetail> {
    validate(beneficio_rules(), body)
}

/// Trim `nome` in place so the stored value is the one that was validated.
pub fn sanitize_beneficio(body: &mut Value) {
    if let Some(Value::String(nome)) = body.get_mut("nome") {
        let trimmed = nome.trim();
        if trimmed.len() != nome.len() {
            *nome = trimmed.to_string();
        }
    }
}
