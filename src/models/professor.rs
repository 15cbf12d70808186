// src/models/professor.rs
use crate::error::{AppError, AppResult};
use crate::models::prefere_camel;
use crate::models::usuario::{NovoUsuario, Usuario, UsuarioPayload};
use serde::{Deserialize, Serialize};

// Professor existente: identidade externa do par (professor, usuario).
#[derive(Debug, Clone, Serialize)]
pub struct Professor {
    pub id: i64,
    pub usuario: Usuario,
    pub disciplina_especialidade: String,
}

/// Rascunho de professor: usuário aninhado ainda sem id.
#[derive(Debug, Clone)]
pub struct NovoProfessor {
    pub usuario: NovoUsuario,
    pub disciplina_especialidade: String,
}

/// Payload de entrada. Aceita camelCase ou snake_case.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfessorPayload {
    pub usuario: Option<UsuarioPayload>,
    #[serde(rename = "disciplinaEspecialidade")]
    pub disciplina_especialidade_camel: Option<String>,
    pub disciplina_especialidade: Option<String>,
}

impl ProfessorPayload {
    pub fn normalizar(self) -> AppResult<NovoProfessor> {
        let usuario = self
            .usuario
            .ok_or_else(|| AppError::ValidacaoFalhou("usuario é obrigatório".into()))?
            .normalizar()?;

        Ok(NovoProfessor {
            usuario,
            disciplina_especialidade: prefere_camel(
                self.disciplina_especialidade_camel,
                self.disciplina_especialidade,
            )
            .ok_or_else(|| {
                AppError::ValidacaoFalhou("disciplina_especialidade é obrigatória".into())
            })?,
        })
    }
}
