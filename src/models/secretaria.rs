// src/models/secretaria.rs
use crate::error::{AppError, AppResult};
use crate::models::usuario::{NovoUsuario, Usuario, UsuarioPayload};
use serde::{Deserialize, Serialize};

// Secretaria existente no banco
#[derive(Debug, Clone, Serialize)]
pub struct Secretaria {
    pub id: i64,
    pub usuario: Usuario,
}

/// Rascunho de secretaria: só o usuário aninhado.
#[derive(Debug, Clone)]
pub struct NovaSecretaria {
    pub usuario: NovoUsuario,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SecretariaPayload {
    pub usuario: Option<UsuarioPayload>,
}

impl SecretariaPayload {
    pub fn normalizar(self) -> AppResult<NovaSecretaria> {
        let usuario = self
            .usuario
            .ok_or_else(|| AppError::ValidacaoFalhou("usuario é obrigatório".into()))?
            .normalizar()?;
        Ok(NovaSecretaria { usuario })
    }
}
