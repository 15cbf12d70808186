// src/models/usuario.rs
use crate::error::{AppError, AppResult};
use crate::models::prefere_camel;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa um utilizador lido da tabela 'usuarios'
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub hash_senha: String,
    pub tipo_usuario: String,
}

/// Rascunho de utilizador: ainda sem id, com a senha em claro.
/// Nunca é persistido nesta forma: a senha passa pelo hash antes.
#[derive(Debug, Clone)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    // Obrigatória na criação; ausente numa atualização significa
    // "mantém o hash atual".
    pub senha: Option<String>,
    pub tipo_usuario: String,
}

/// Payload de entrada do utilizador aninhado. Aceita camelCase ou snake_case.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UsuarioPayload {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    #[serde(rename = "tipoUsuario")]
    pub tipo_usuario_camel: Option<String>,
    pub tipo_usuario: Option<String>,
}

impl UsuarioPayload {
    pub fn normalizar(self) -> AppResult<NovoUsuario> {
        Ok(NovoUsuario {
            nome: self
                .nome
                .ok_or_else(|| AppError::ValidacaoFalhou("nome do usuário é obrigatório".into()))?,
            email: self
                .email
                .ok_or_else(|| AppError::ValidacaoFalhou("email do usuário é obrigatório".into()))?,
            senha: self.senha,
            tipo_usuario: prefere_camel(self.tipo_usuario_camel, self.tipo_usuario).ok_or_else(
                || AppError::ValidacaoFalhou("tipo_usuario do usuário é obrigatório".into()),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_prefere_grafia_camel_case() {
        let payload = UsuarioPayload {
            nome: Some("Ana".into()),
            email: Some("ana@test.com".into()),
            senha: Some("senha".into()),
            tipo_usuario_camel: Some("professor".into()),
            tipo_usuario: Some("secretaria".into()),
        };
        let novo = payload.normalizar().unwrap();
        assert_eq!(novo.tipo_usuario, "professor");
    }

    #[test]
    fn payload_sem_email_falha_validacao() {
        let payload = UsuarioPayload {
            nome: Some("Ana".into()),
            ..Default::default()
        };
        assert!(payload.normalizar().is_err());
    }
}
