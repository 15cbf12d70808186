// src/web/materia_handlers.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::materia::{Materia, MateriaPayload},
    services::materia_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_listar_materias(State(state): State<AppState>) -> AppResult<Json<Vec<Materia>>> {
    let materias = materia_service::listar_materias(&state.db_pool).await?;
    Ok(Json(materias))
}

pub async fn handle_buscar_materia(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Materia>> {
    match materia_service::buscar_materia_por_id(&state.db_pool, id).await? {
        Some(materia) => Ok(Json(materia)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::Materia,
            id,
        }),
    }
}

pub async fn handle_criar_materia(
    State(state): State<AppState>,
    Json(payload): Json<MateriaPayload>,
) -> AppResult<impl IntoResponse> {
    let nova = payload.normalizar()?;
    let materia = materia_service::criar_materia(&state.db_pool, nova).await?;
    Ok((StatusCode::CREATED, Json(materia)))
}

pub async fn handle_atualizar_materia(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MateriaPayload>,
) -> AppResult<Json<Materia>> {
    let nova = payload.normalizar()?;
    let materia = materia_service::atualizar_materia(&state.db_pool, id, nova).await?;
    Ok(Json(materia))
}

pub async fn handle_remover_materia(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    materia_service::remover_materia(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
