// src/models/materia.rs
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Materia {
    pub id: i64,
    pub nome: String,
}

#[derive(Debug, Clone)]
pub struct NovaMateria {
    pub nome: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MateriaPayload {
    pub nome: Option<String>,
}

impl MateriaPayload {
    pub fn normalizar(self) -> AppResult<NovaMateria> {
        Ok(NovaMateria {
            nome: self
                .nome
                .ok_or_else(|| AppError::ValidacaoFalhou("nome é obrigatório".into()))?,
        })
    }
}
