// src/web/turma_handlers.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::turma::{Turma, TurmaPayload},
    services::turma_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_listar_turmas(State(state): State<AppState>) -> AppResult<Json<Vec<Turma>>> {
    let turmas = turma_service::listar_turmas(&state.db_pool).await?;
    Ok(Json(turmas))
}

pub async fn handle_buscar_turma(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Turma>> {
    match turma_service::buscar_turma_por_id(&state.db_pool, id).await? {
        Some(turma) => Ok(Json(turma)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::Turma,
            id,
        }),
    }
}

pub async fn handle_criar_turma(
    State(state): State<AppState>,
    Json(payload): Json<TurmaPayload>,
) -> AppResult<impl IntoResponse> {
    let nova = payload.normalizar()?;
    let turma = turma_service::criar_turma(&state.db_pool, nova).await?;
    Ok((StatusCode::CREATED, Json(turma)))
}

pub async fn handle_atualizar_turma(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TurmaPayload>,
) -> AppResult<Json<Turma>> {
    let nova = payload.normalizar()?;
    let turma = turma_service::atualizar_turma(&state.db_pool, id, nova).await?;
    Ok(Json(turma))
}

pub async fn handle_remover_turma(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    turma_service::remover_turma(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
