// src/web/secretaria_handlers.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::secretaria::{Secretaria, SecretariaPayload},
    services::secretaria_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_listar_secretarias(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Secretaria>>> {
    let secretarias = secretaria_service::listar_secretarias(&state.db_pool).await?;
    Ok(Json(secretarias))
}

pub async fn handle_buscar_secretaria(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Secretaria>> {
    match secretaria_service::buscar_secretaria_por_id(&state.db_pool, id).await? {
        Some(secretaria) => Ok(Json(secretaria)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::Secretaria,
            id,
        }),
    }
}

pub async fn handle_buscar_secretaria_por_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i64>,
) -> AppResult<Json<Secretaria>> {
    match secretaria_service::buscar_secretaria_por_usuario_id(&state.db_pool, usuario_id).await? {
        Some(secretaria) => Ok(Json(secretaria)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::Secretaria,
            id: usuario_id,
        }),
    }
}

pub async fn handle_criar_secretaria(
    State(state): State<AppState>,
    Json(payload): Json<SecretariaPayload>,
) -> AppResult<impl IntoResponse> {
    let nova = payload.normalizar()?;
    let secretaria = secretaria_service::criar_secretaria(&state.db_pool, nova).await?;
    Ok((StatusCode::CREATED, Json(secretaria)))
}

pub async fn handle_atualizar_secretaria(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SecretariaPayload>,
) -> AppResult<Json<Secretaria>> {
    let nova = payload.normalizar()?;
    let secretaria = secretaria_service::atualizar_secretaria(&state.db_pool, id, nova).await?;
    Ok(Json(secretaria))
}

pub async fn handle_remover_secretaria(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    secretaria_service::remover_secretaria(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
