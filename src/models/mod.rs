// src/models/mod.rs
pub mod aluno;
pub mod historico_escolar;
pub mod materia;
pub mod professor;
pub mod secretaria;
pub mod turma;
pub mod usuario;

// Os payloads de entrada aceitam as duas grafias (camelCase e snake_case)
// para o mesmo campo lógico; quando ambas vêm no corpo, a camelCase vence.
pub(crate) fn prefere_camel<T>(camel: Option<T>, snake: Option<T>) -> Option<T> {
    camel.or(snake)
}
