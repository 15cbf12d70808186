// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    services::{auth_service, usuario_service},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// POST /login: valida credenciais e emite um token assinado.
/// Qualquer falha (email desconhecido, senha errada, papel diferente)
/// responde com a mesma mensagem genérica.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<Json<Value>> {
    let usuario = usuario_service::buscar_usuario_por_email(&state.db_pool, &payload.email)
        .await?
        .ok_or(AppError::CredenciaisInvalidas)?;

    if !auth_service::verificar_senha(&payload.password, &usuario.hash_senha).await? {
        tracing::warn!("Login falhou para '{}': senha incorreta", payload.email);
        return Err(AppError::CredenciaisInvalidas);
    }

    if usuario.tipo_usuario != payload.role {
        tracing::warn!(
            "Login falhou para '{}': papel '{}' não corresponde",
            payload.email,
            payload.role
        );
        return Err(AppError::CredenciaisInvalidas);
    }

    let token = auth_service::gerar_token(&usuario, &state.jwt_secret)?;
    Ok(Json(json!({ "token": token })))
}
