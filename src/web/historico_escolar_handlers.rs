// src/web/historico_escolar_handlers.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::historico_escolar::{HistoricoEscolar, HistoricoEscolarPayload},
    services::historico_escolar_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn handle_listar_historicos(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HistoricoEscolar>>> {
    let historicos = historico_escolar_service::listar_historicos(&state.db_pool).await?;
    Ok(Json(historicos))
}

pub async fn handle_buscar_historico(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<HistoricoEscolar>> {
    match historico_escolar_service::buscar_historico_por_id(&state.db_pool, id).await? {
        Some(historico) => Ok(Json(historico)),
        None => Err(AppError::NaoEncontrado {
            entidade: Entidade::HistoricoEscolar,
            id,
        }),
    }
}

/// GET /historicos-escolares/aluno/{id_aluno}
pub async fn handle_buscar_historicos_por_aluno(
    State(state): State<AppState>,
    Path(id_aluno): Path<i64>,
) -> AppResult<Json<Vec<HistoricoEscolar>>> {
    let historicos =
        historico_escolar_service::buscar_historicos_por_aluno_id(&state.db_pool, id_aluno).await?;
    Ok(Json(historicos))
}

/// GET /historicos-escolares/disciplina/{id_disciplina}
pub async fn handle_buscar_historicos_por_disciplina(
    State(state): State<AppState>,
    Path(id_disciplina): Path<i64>,
) -> AppResult<Json<Vec<HistoricoEscolar>>> {
    let historicos = historico_escolar_service::buscar_historicos_por_disciplina_id(
        &state.db_pool,
        id_disciplina,
    )
    .await?;
    Ok(Json(historicos))
}

pub async fn handle_criar_historico(
    State(state): State<AppState>,
    Json(payload): Json<HistoricoEscolarPayload>,
) -> AppResult<impl IntoResponse> {
    let novo = payload.normalizar()?;
    let historico = historico_escolar_service::criar_historico(&state.db_pool, novo).await?;
    Ok((StatusCode::CREATED, Json(historico)))
}

pub async fn handle_atualizar_historico(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<HistoricoEscolarPayload>,
) -> AppResult<Json<HistoricoEscolar>> {
    let novo = payload.normalizar()?;
    let historico = historico_escolar_service::atualizar_historico(&state.db_pool, id, novo).await?;
    Ok(Json(historico))
}

pub async fn handle_remover_historico(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    historico_escolar_service::remover_historico(&state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
