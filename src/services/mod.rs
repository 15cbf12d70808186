// src/services/mod.rs
pub mod aluno_service;
pub mod auth_service;
pub mod historico_escolar_service;
pub mod materia_service;
pub mod professor_service;
pub mod secretaria_service;
pub mod turma_service;
pub mod usuario_service;
