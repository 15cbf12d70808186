// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        aluno_handlers, auth_handlers, historico_escolar_handlers, materia_handlers,
        professor_handlers, secretaria_handlers, turma_handlers,
    },
};
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

pub fn create_router(app_state: AppState) -> Router {
    let professor_routes = Router::new()
        .route(
            "/",
            get(professor_handlers::handle_listar_professores)
                .post(professor_handlers::handle_criar_professor),
        )
        .route(
            "/{id}",
            get(professor_handlers::handle_buscar_professor)
                .put(professor_handlers::handle_atualizar_professor)
                .delete(professor_handlers::handle_remover_professor),
        )
        .route(
            "/usuario/{usuario_id}",
            get(professor_handlers::handle_buscar_professor_por_usuario),
        );

    let secretaria_routes = Router::new()
        .route(
            "/",
            get(secretaria_handlers::handle_listar_secretarias)
                .post(secretaria_handlers::handle_criar_secretaria),
        )
        .route(
            "/{id}",
            get(secretaria_handlers::handle_buscar_secretaria)
                .put(secretaria_handlers::handle_atualizar_secretaria)
                .delete(secretaria_handlers::handle_remover_secretaria),
        )
        .route(
            "/usuario/{usuario_id}",
            get(secretaria_handlers::handle_buscar_secretaria_por_usuario),
        );

    let aluno_routes = Router::new()
        .route(
            "/",
            get(aluno_handlers::handle_listar_alunos).post(aluno_handlers::handle_criar_aluno),
        )
        .route(
            "/{id}",
            get(aluno_handlers::handle_buscar_aluno)
                .put(aluno_handlers::handle_atualizar_aluno)
                .delete(aluno_handlers::handle_remover_aluno),
        )
        .route(
            "/usuario/{usuario_id}",
            get(aluno_handlers::handle_buscar_aluno_por_usuario),
        );

    let materia_routes = Router::new()
        .route(
            "/",
            get(materia_handlers::handle_listar_materias)
                .post(materia_handlers::handle_criar_materia),
        )
        .route(
            "/{id}",
            get(materia_handlers::handle_buscar_materia)
                .put(materia_handlers::handle_atualizar_materia)
                .delete(materia_handlers::handle_remover_materia),
        );

    let turma_routes = Router::new()
        .route(
            "/",
            get(turma_handlers::handle_listar_turmas).post(turma_handlers::handle_criar_turma),
        )
        .route(
            "/{id}",
            get(turma_handlers::handle_buscar_turma)
                .put(turma_handlers::handle_atualizar_turma)
                .delete(turma_handlers::handle_remover_turma),
        );

    let historico_routes = Router::new()
        .route(
            "/",
            get(historico_escolar_handlers::handle_listar_historicos)
                .post(historico_escolar_handlers::handle_criar_historico),
        )
        .route(
            "/{id}",
            get(historico_escolar_handlers::handle_buscar_historico)
                .put(historico_escolar_handlers::handle_atualizar_historico)
                .delete(historico_escolar_handlers::handle_remover_historico),
        )
        .route(
            "/aluno/{id_aluno}",
            get(historico_escolar_handlers::handle_buscar_historicos_por_aluno),
        )
        .route(
            "/disciplina/{id_disciplina}",
            get(historico_escolar_handlers::handle_buscar_historicos_por_disciplina),
        );

    Router::new()
        .route("/", get(|| async { Json(json!({ "message": "Funcionando" })) }))
        .route("/login", post(auth_handlers::handle_login))
        .nest("/professores", professor_routes)
        .nest("/secretarias", secretaria_routes)
        .nest("/alunos", aluno_routes)
        .nest("/materias", materia_routes)
        .nest("/turmas", turma_routes)
        .nest("/historicos-escolares", historico_routes)
        .with_state(app_state)
}
