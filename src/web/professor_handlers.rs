// src/web/professor_handlers.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::professor::{Professor, ProfessorPayload},
    services::professor_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /professores
pub async fn handle_listar_professores(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Professor>>> {
    let professores = professor_service::listar_professores(&state.db_pool).await?;
    Ok(Json(professores))
}

/// GET /professores/{id}
pub async fn handle_buscar_professor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Professor>> {
    match professor_service::buscar_professor_por_id(&state.db_pool, id).await? {
        Some(professor) => Ok(Json(professor)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::Professor,
            id,
        }),
    }
}

/// GET /professores/usuario/{usuario_id}
pub async fn handle_buscar_professor_por_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i64>,
) -> AppResult<Json<Professor>> {
    match professor_service::buscar_professor_por_usuario_id(&state.db_pool, usuario_id).await? {
        Some(professor) => Ok(Json(professor)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::Professor,
            id: usuario_id,
        }),
    }
}

/// POST /professores
pub async fn handle_criar_professor(
    State(state): State<AppState>,
    Json(payload): Json<ProfessorPayload>,
) -> AppResult<impl IntoResponse> {
    let novo = payload.normalizar()?;
    let professor = professor_service::criar_professor(&state.db_pool, novo).await?;
    Ok((StatusCode::CREATED, Json(professor)))
}

/// PUT /professores/{id}
pub async fn handle_atualizar_professor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProfessorPayload>,
) -> AppResult<Json<Professor>> {
    let novo = payload.normalizar()?;
    let professor = professor_service::atualizar_professor(&state.db_pool, id, novo).await?;
    Ok(Json(professor))
}

/// DELETE /professores/{id}
pub async fn handle_remover_professor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    professor_service::remover_professor(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
