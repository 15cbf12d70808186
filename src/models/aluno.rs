// src/models/aluno.rs
use crate::error::{AppError, AppResult};
use crate::models::prefere_camel;
use crate::models::usuario::{NovoUsuario, Usuario, UsuarioPayload};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static DATA_NASCIMENTO_RE: OnceLock<Regex> = OnceLock::new();

/// Datas de nascimento só são aceitas no formato estrito `YYYY-MM-DD`.
/// Qualquer outra coisa vira `None` em vez de erro; entrada ruim nunca
/// impede o cadastro.
pub fn normalizar_data_nascimento(data: Option<String>) -> Option<String> {
    let re = DATA_NASCIMENTO_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
    data.filter(|d| re.is_match(d))
}

// Aluno existente: usuário aninhado + ficha demográfica opcional.
#[derive(Debug, Clone, Serialize)]
pub struct Aluno {
    pub id: i64,
    pub usuario: Usuario,
    pub data_nascimento: Option<String>,
    pub responsavel_nome: Option<String>,
    pub nome_pai: Option<String>,
    pub nome_mae: Option<String>,
    pub profissao_pai: Option<String>,
    pub profissao_mae: Option<String>,
    pub alergias: Option<String>,
    pub telefone_pai: Option<String>,
    pub telefone_mae: Option<String>,
    pub email_pai: Option<String>,
    pub email_mae: Option<String>,
    pub idade: Option<i64>,
    pub religiao: Option<String>,
}

/// Rascunho de aluno. A data de nascimento já entra normalizada.
#[derive(Debug, Clone)]
pub struct NovoAluno {
    pub usuario: NovoUsuario,
    pub data_nascimento: Option<String>,
    pub responsavel_nome: Option<String>,
    pub nome_pai: Option<String>,
    pub nome_mae: Option<String>,
    pub profissao_pai: Option<String>,
    pub profissao_mae: Option<String>,
    pub alergias: Option<String>,
    pub telefone_pai: Option<String>,
    pub telefone_mae: Option<String>,
    pub email_pai: Option<String>,
    pub email_mae: Option<String>,
    pub idade: Option<i64>,
    pub religiao: Option<String>,
}

/// Payload de entrada. Aceita camelCase ou snake_case.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlunoPayload {
    pub usuario: Option<UsuarioPayload>,
    #[serde(rename = "dataNascimento")]
    pub data_nascimento_camel: Option<String>,
    pub data_nascimento: Option<String>,
    #[serde(rename = "responsavelNome")]
    pub responsavel_nome_camel: Option<String>,
    pub responsavel_nome: Option<String>,
    #[serde(rename = "nomePai")]
    pub nome_pai_camel: Option<String>,
    pub nome_pai: Option<String>,
    #[serde(rename = "nomeMae")]
    pub nome_mae_camel: Option<String>,
    pub nome_mae: Option<String>,
    #[serde(rename = "profissaoPai")]
    pub profissao_pai_camel: Option<String>,
    pub profissao_pai: Option<String>,
    #[serde(rename = "profissaoMae")]
    pub profissao_mae_camel: Option<String>,
    pub profissao_mae: Option<String>,
    pub alergias: Option<String>,
    #[serde(rename = "telefonePai")]
    pub telefone_pai_camel: Option<String>,
    pub telefone_pai: Option<String>,
    #[serde(rename = "telefoneMae")]
    pub telefone_mae_camel: Option<String>,
    pub telefone_mae: Option<String>,
    #[serde(rename = "emailPai")]
    pub email_pai_camel: Option<String>,
    pub email_pai: Option<String>,
    #[serde(rename = "emailMae")]
    pub email_mae_camel: Option<String>,
    pub email_mae: Option<String>,
    pub idade: Option<i64>,
    pub religiao: Option<String>,
}

impl AlunoPayload {
    pub fn normalizar(self) -> AppResult<NovoAluno> {
        let usuario = self
            .usuario
            .ok_or_else(|| AppError::ValidacaoFalhou("usuario é obrigatório".into()))?
            .normalizar()?;

        Ok(NovoAluno {
            usuario,
            data_nascimento: normalizar_data_nascimento(prefere_camel(
                self.data_nascimento_camel,
                self.data_nascimento,
            )),
            responsavel_nome: prefere_camel(self.responsavel_nome_camel, self.responsavel_nome),
            nome_pai: prefere_camel(self.nome_pai_camel, self.nome_pai),
            nome_mae: prefere_camel(self.nome_mae_camel, self.nome_mae),
            profissao_pai: prefere_camel(self.profissao_pai_camel, self.profissao_pai),
            profissao_mae: prefere_camel(self.profissao_mae_camel, self.profissao_mae),
            alergias: self.alergias,
            telefone_pai: prefere_camel(self.telefone_pai_camel, self.telefone_pai),
            telefone_mae: prefere_camel(self.telefone_mae_camel, self.telefone_mae),
            email_pai: prefere_camel(self.email_pai_camel, self.email_pai),
            email_mae: prefere_camel(self.email_mae_camel, self.email_mae),
            idade: self.idade,
            religiao: self.religiao,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_malformada_vira_none_sem_erro() {
        assert_eq!(normalizar_data_nascimento(Some("10/05/2010".into())), None);
        assert_eq!(normalizar_data_nascimento(Some("2010-5-1".into())), None);
        assert_eq!(normalizar_data_nascimento(None), None);
        assert_eq!(
            normalizar_data_nascimento(Some("2010-05-10".into())),
            Some("2010-05-10".into())
        );
    }
}
