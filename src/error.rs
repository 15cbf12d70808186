// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Entidades do domínio, usadas para montar mensagens de NotFound
/// com o género gramatical correto ("não encontrado" / "não encontrada").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entidade {
    Usuario,
    Professor,
    Secretaria,
    Aluno,
    Materia,
    Turma,
    HistoricoEscolar,
}

impl Entidade {
    pub fn nome(&self) -> &'static str {
        match self {
            Entidade::Usuario => "Usuário",
            Entidade::Professor => "Professor",
            Entidade::Secretaria => "Secretaria",
            Entidade::Aluno => "Aluno",
            Entidade::Materia => "Matéria",
            Entidade::Turma => "Turma",
            Entidade::HistoricoEscolar => "Histórico escolar",
        }
    }

    // Sufixo de concordância para "não encontrado(a)"
    fn sufixo(&self) -> &'static str {
        match self {
            Entidade::Secretaria | Entidade::Materia | Entidade::Turma => "a",
            _ => "o",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{} não encontrad{}", .entidade.nome(), .entidade.sufixo())]
    NaoEncontrado { entidade: Entidade, id: i64 },

    #[error("{0}")]
    ValidacaoFalhou(String),

    // Linha de papel sumiu entre a verificação de existência e o UPDATE.
    // Inalcançável em operação normal; se aparecer, é defeito interno.
    #[error("Estado inconsistente para {} id {}", .entidade.nome(), .id)]
    ViolacaoInvariante { entidade: Entidade, id: i64 },

    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("Erro ao processar password")]
    PasswordHashingError,

    #[error("Credenciais inválidas")]
    CredenciaisInvalidas,

    #[error("Erro ao emitir token")]
    TokenError,

    #[error("Erro interno inesperado")]
    InternalServerError,
}

// Tradução de AppError para resposta HTTP: o status sai do *tipo* do erro,
// nunca de comparação de strings da mensagem.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NaoEncontrado { .. } => StatusCode::NOT_FOUND,
            AppError::ValidacaoFalhou(_) | AppError::SqlxError(_) => StatusCode::BAD_REQUEST,
            AppError::CredenciaisInvalidas => StatusCode::UNAUTHORIZED,
            // Inclui ViolacaoInvariante: defeito interno, nunca um 4xx
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::debug!("Erro processado: {:?}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensagem_nao_encontrado_concorda_em_genero() {
        let err = AppError::NaoEncontrado {
            entidade: Entidade::Professor,
            id: 1,
        };
        assert_eq!(err.to_string(), "Professor não encontrado");

        let err = AppError::NaoEncontrado {
            entidade: Entidade::Materia,
            id: 7,
        };
        assert_eq!(err.to_string(), "Matéria não encontrada");

        let err = AppError::NaoEncontrado {
            entidade: Entidade::Turma,
            id: 2,
        };
        assert_eq!(err.to_string(), "Turma não encontrada");
    }
}
