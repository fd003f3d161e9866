use super::rules::{non_empty_text, one_of, past_or_present_date};
use super::{FieldError, Fields, Mode, Today};
use crate::model::{AgentDraft, AgentPatch, AgentRole};
use serde_json::{Map, Value};

const FIELDS: &[&str] = &["nome", "dataDeIncorporacao", "cargo"];
const CARGO_MESSAGE: &str = "O campo 'cargo' deve ser 'investigador', 'delegada' ou 'escrivao'.";
const FUTURE_MESSAGE: &str = "A data de incorporação não pode ser futura.";

/// Full and partial validation of Agent payloads.
pub struct AgentSchema {
    today: Today,
}

impl AgentSchema {
    pub fn new(today: Today) -> Self {
        Self { today }
    }

    pub fn validate_full(&self, body: &Map<String, Value>) -> Result<AgentDraft, Vec<FieldError>> {
        match self.parse(body, Mode::Full)? {
            AgentPatch {
                nome: Some(nome),
                data_de_incorporacao: Some(data_de_incorporacao),
                cargo: Some(cargo),
            } => Ok(AgentDraft {
                nome,
                data_de_incorporacao,
                cargo,
            }),
            // full mode already reported every missing field
            _ => Err(vec![FieldError::new(&[], "Payload incompleto.")]),
        }
    }

    pub fn validate_partial(
        &self,
        body: &Map<String, Value>,
    ) -> Result<AgentPatch, Vec<FieldError>> {
        self.parse(body, Mode::Partial)
    }

    fn parse(&self, body: &Map<String, Value>, mode: Mode) -> Result<AgentPatch, Vec<FieldError>> {
        let today = (self.today)();
        let mut fields = Fields::new(body, mode, FIELDS);

        let patch = AgentPatch {
            nome: fields.take("nome", |v| non_empty_text("nome", v)),
            data_de_incorporacao: fields.take("dataDeIncorporacao", |v| {
                past_or_present_date("dataDeIncorporacao", v, today, FUTURE_MESSAGE)
            }),
            cargo: fields.take::<AgentRole>("cargo", |v| one_of(v, CARGO_MESSAGE)),
        };

        let errors = fields.into_errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::sync::Arc;

    fn schema() -> AgentSchema {
        AgentSchema::new(Arc::new(|| NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()))
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn full_accepts_valid_agent() {
        let draft = schema()
            .validate_full(&object(json!({
                "nome": "Ana",
                "dataDeIncorporacao": "2020-01-15",
                "cargo": "delegada"
            })))
            .unwrap();

        assert_eq!(draft.nome, "Ana");
        assert_eq!(
            draft.data_de_incorporacao,
            NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()
        );
        assert_eq!(draft.cargo, AgentRole::Delegada);
    }

    #[test]
    fn full_reports_every_missing_field_in_order() {
        let errors = schema().validate_full(&object(json!({"extra": 1}))).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, ["nome", "dataDeIncorporacao", "cargo", "extra"]);
        assert_eq!(errors[0].message, "O campo 'nome' é obrigatório.");
        assert_eq!(errors[3].message, "Campo não reconhecido: 'extra'.");
    }

    #[test]
    fn today_is_allowed_tomorrow_is_not() {
        let body = |date: &str| object(json!({"nome": "Ana", "dataDeIncorporacao": date, "cargo": "escrivao"}));

        assert!(schema().validate_full(&body("2024-06-10")).is_ok());

        let errors = schema().validate_full(&body("2024-06-11")).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::new(&["dataDeIncorporacao"], FUTURE_MESSAGE)]
        );
    }

    #[test]
    fn cargo_must_be_in_set() {
        let errors = schema()
            .validate_partial(&object(json!({"cargo": "xerife"})))
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::new(&["cargo"], CARGO_MESSAGE)]);
    }

    #[test]
    fn partial_accepts_subsets() {
        let patch = schema().validate_partial(&object(json!({"nome": "Bia"}))).unwrap();
        assert_eq!(
            patch,
            AgentPatch {
                nome: Some("Bia".into()),
                ..Default::default()
            }
        );

        let errors = schema()
            .validate_partial(&object(json!({"nome": "Bia", "foo": true})))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "foo");
    }
}
