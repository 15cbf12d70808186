// src/models/turma.rs
use crate::error::{AppError, AppResult};
use crate::models::prefere_camel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Turma serializa em camelCase (contrato herdado da API original).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Turma {
    pub id: i64,
    pub nome: String,
    pub ano_escolar: i64,
    pub quantidade_maxima: i64,
    pub turno: String,
    pub serie: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct NovaTurma {
    pub nome: String,
    pub ano_escolar: i64,
    pub quantidade_maxima: i64,
    pub turno: String,
    pub serie: String,
}

/// Payload de entrada. Aceita camelCase ou snake_case.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TurmaPayload {
    pub nome: Option<String>,
    #[serde(rename = "anoEscolar")]
    pub ano_escolar_camel: Option<i64>,
    pub ano_escolar: Option<i64>,
    #[serde(rename = "quantidadeMaxima")]
    pub quantidade_maxima_camel: Option<i64>,
    pub quantidade_maxima: Option<i64>,
    pub turno: Option<String>,
    pub serie: Option<String>,
}

impl TurmaPayload {
    pub fn normalizar(self) -> AppResult<NovaTurma> {
        Ok(NovaTurma {
            nome: self
                .nome
                .ok_or_else(|| AppError::ValidacaoFalhou("nome é obrigatório".into()))?,
            ano_escolar: prefere_camel(self.ano_escolar_camel, self.ano_escolar)
                .ok_or_else(|| AppError::ValidacaoFalhou("ano_escolar é obrigatório".into()))?,
            quantidade_maxima: prefere_camel(self.quantidade_maxima_camel, self.quantidade_maxima)
                .ok_or_else(|| {
                    AppError::ValidacaoFalhou("quantidade_maxima é obrigatória".into())
                })?,
            turno: self
                .turno
                .ok_or_else(|| AppError::ValidacaoFalhou("turno é obrigatório".into()))?,
            serie: self
                .serie
                .ok_or_else(|| AppError::ValidacaoFalhou("serie é obrigatória".into()))?,
        })
    }
}
