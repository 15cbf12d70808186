// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::Usuario,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Claims do token emitido no login.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub tipo_usuario: String,
    pub exp: i64,
}

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verificar_senha(senha: &str, hash_guardado: &str) -> AppResult<bool> {
    let senha = senha.to_string();
    let hash_guardado = hash_guardado.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&senha, &hash_guardado)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verificar_senha): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Gera um hash bcrypt para uma senha.
pub async fn hash_senha(senha: &str) -> AppResult<String> {
    let senha = senha.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt...");
        bcrypt::hash(&senha, bcrypt::DEFAULT_COST)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_senha): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Emite um token assinado para o utilizador autenticado (válido por 24h).
pub fn gerar_token(usuario: &Usuario, segredo: &str) -> AppResult<String> {
    let exp = (chrono::Utc::now() + chrono::Duration::hours(24)).timestamp();
    let claims = Claims {
        sub: usuario.id,
        tipo_usuario: usuario.tipo_usuario.clone(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(segredo.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Erro ao assinar token JWT: {:?}", e);
        AppError::TokenError
    })
}
