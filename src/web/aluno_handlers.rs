// src/web/aluno_handlers.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::aluno::{Aluno, AlunoPayload},
    services::aluno_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_listar_alunos(State(state): State<AppState>) -> AppResult<Json<Vec<Aluno>>> {
    let alunos = aluno_service::listar_alunos(&state.db_pool).await?;
    Ok(Json(alunos))
}

pub async fn handle_buscar_aluno(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Aluno>> {
    match aluno_service::buscar_aluno_por_id(&state.db_pool, id).await? {
        Some(aluno) => Ok(Json(aluno)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::Aluno,
            id,
        }),
    }
}

pub async fn handle_buscar_aluno_por_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i64>,
) -> AppResult<Json<Aluno>> {
    match aluno_service::buscar_aluno_por_usuario_id(&state.db_pool, usuario_id).await? {
        Some(aluno) => Ok(Json(aluno)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::Aluno,
            id: usuario_id,
        }),
    }
}

pub async fn handle_criar_aluno(
    State(state): State<AppState>,
    Json(payload): Json<AlunoPayload>,
) -> AppResult<impl IntoResponse> {
    let novo = payload.normalizar()?;
    let aluno = aluno_service::criar_aluno(&state.db_pool, novo).await?;
    Ok((StatusCode::CREATED, Json(aluno)))
}

pub async fn handle_atualizar_aluno(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AlunoPayload>,
) -> AppResult<Json<Aluno>> {
    let novo = payload.normalizar()?;
    let aluno = aluno_service::atualizar_aluno(&state.db_pool, id, novo).await?;
    Ok(Json(aluno))
}

pub async fn handle_remover_aluno(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    aluno_service::remover_aluno(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
