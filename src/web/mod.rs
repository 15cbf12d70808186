// src/web/mod.rs
pub mod aluno_handlers;
pub mod auth_handlers;
pub mod historico_escolar_handlers;
pub mod materia_handlers;
pub mod professor_handlers;
pub mod routes;
pub mod secretaria_handlers;
pub mod turma_handlers;
