// src/models/historico_escolar.rs
use crate::error::{AppError, AppResult};
use crate::models::prefere_camel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Registro de histórico escolar de um aluno. A disciplina é opcional:
// uma entrada pode não se referir a nenhuma disciplina específica.
// Serializa em camelCase (contrato herdado da API original).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoEscolar {
    pub id: i64,
    pub id_aluno: i64,
    pub id_disciplina: Option<i64>,
    pub nome_escola: String,
    pub serie_concluida: String,
    pub nota: f64,
    pub ano_conclusao: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct NovoHistoricoEscolar {
    pub id_aluno: i64,
    pub id_disciplina: Option<i64>,
    pub nome_escola: String,
    pub serie_concluida: String,
    pub nota: f64,
    pub ano_conclusao: i64,
}

/// Payload de entrada. Aceita camelCase ou snake_case.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HistoricoEscolarPayload {
    #[serde(rename = "idAluno")]
    pub id_aluno_camel: Option<i64>,
    pub id_aluno: Option<i64>,
    #[serde(rename = "idDisciplina")]
    pub id_disciplina_camel: Option<i64>,
    pub id_disciplina: Option<i64>,
    #[serde(rename = "nomeEscola")]
    pub nome_escola_camel: Option<String>,
    pub nome_escola: Option<String>,
    #[serde(rename = "serieConcluida")]
    pub serie_concluida_camel: Option<String>,
    pub serie_concluida: Option<String>,
    pub nota: Option<f64>,
    #[serde(rename = "anoConclusao")]
    pub ano_conclusao_camel: Option<i64>,
    pub ano_conclusao: Option<i64>,
}

impl HistoricoEscolarPayload {
    pub fn normalizar(self) -> AppResult<NovoHistoricoEscolar> {
        Ok(NovoHistoricoEscolar {
            id_aluno: prefere_camel(self.id_aluno_camel, self.id_aluno)
                .ok_or_else(|| AppError::ValidacaoFalhou("id_aluno é obrigatório".into()))?,
            id_disciplina: prefere_camel(self.id_disciplina_camel, self.id_disciplina),
            nome_escola: prefere_camel(self.nome_escola_camel, self.nome_escola)
                .ok_or_else(|| AppError::ValidacaoFalhou("nome_escola é obrigatório".into()))?,
            serie_concluida: prefere_camel(self.serie_concluida_camel, self.serie_concluida)
                .ok_or_else(|| AppError::ValidacaoFalhou("serie_concluida é obrigatória".into()))?,
            nota: self
                .nota
                .ok_or_else(|| AppError::ValidacaoFalhou("nota é obrigatória".into()))?,
            ano_conclusao: prefere_camel(self.ano_conclusao_camel, self.ano_conclusao)
                .ok_or_else(|| AppError::ValidacaoFalhou("ano_conclusao é obrigatório".into()))?,
        })
    }
}
