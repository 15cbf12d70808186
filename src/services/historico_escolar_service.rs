// src/services/historico_escolar_service.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::historico_escolar::{HistoricoEscolar, NovoHistoricoEscolar},
};
use sqlx::SqlitePool;

const COLUNAS: &str = "id, id_aluno, id_disciplina, nome_escola, serie_concluida, \
                       nota, ano_conclusao, created_at, updated_at";

pub async fn listar_historicos(pool: &SqlitePool) -> AppResult<Vec<HistoricoEscolar>> {
    let sql = format!("SELECT {COLUNAS} FROM historicos_escolares");
    let historicos = sqlx::query_as::<_, HistoricoEscolar>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(historicos)
}

pub async fn buscar_historico_por_id(
    pool: &SqlitePool,
    id: i64,
) -> AppResult<Option<HistoricoEscolar>> {
    let sql = format!("SELECT {COLUNAS} FROM historicos_escolares WHERE id = ?1");
    let historico = sqlx::query_as::<_, HistoricoEscolar>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(historico)
}

/// Todas as entradas de histórico de um aluno.
pub async fn buscar_historicos_por_aluno_id(
    pool: &SqlitePool,
    id_aluno: i64,
) -> AppResult<Vec<HistoricoEscolar>> {
    let sql = format!("SELECT {COLUNAS} FROM historicos_escolares WHERE id_aluno = ?1");
    let historicos = sqlx::query_as::<_, HistoricoEscolar>(&sql)
        .bind(id_aluno)
        .fetch_all(pool)
        .await?;
    Ok(historicos)
}

/// Todas as entradas de histórico ligadas a uma disciplina.
pub async fn buscar_historicos_por_disciplina_id(
    pool: &SqlitePool,
    id_disciplina: i64,
) -> AppResult<Vec<HistoricoEscolar>> {
    let sql = format!("SELECT {COLUNAS} FROM historicos_escolares WHERE id_disciplina = ?1");
    let historicos = sqlx::query_as::<_, HistoricoEscolar>(&sql)
        .bind(id_disciplina)
        .fetch_all(pool)
        .await?;
    Ok(historicos)
}

pub async fn criar_historico(
    pool: &SqlitePool,
    novo: NovoHistoricoEscolar,
) -> AppResult<HistoricoEscolar> {
    let sql = format!(
        "INSERT INTO historicos_escolares \
         (id_aluno, id_disciplina, nome_escola, serie_concluida, nota, ano_conclusao) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {COLUNAS}"
    );
    let historico = sqlx::query_as::<_, HistoricoEscolar>(&sql)
        .bind(novo.id_aluno)
        .bind(novo.id_disciplina)
        .bind(&novo.nome_escola)
        .bind(&novo.serie_concluida)
        .bind(novo.nota)
        .bind(novo.ano_conclusao)
        .fetch_one(pool)
        .await?;
    tracing::info!("✅ Histórico escolar {} criado", historico.id);
    Ok(historico)
}

pub async fn atualizar_historico(
    pool: &SqlitePool,
    id: i64,
    novo: NovoHistoricoEscolar,
) -> AppResult<HistoricoEscolar> {
    let sql = format!(
        "UPDATE historicos_escolares \
         SET id_aluno = ?1, id_disciplina = ?2, nome_escola = ?3, serie_concluida = ?4, \
             nota = ?5, ano_conclusao = ?6, updated_at = CURRENT_TIMESTAMP \
         WHERE id = ?7 RETURNING {COLUNAS}"
    );
    let historico = sqlx::query_as::<_, HistoricoEscolar>(&sql)
        .bind(novo.id_aluno)
        .bind(novo.id_disciplina)
        .bind(&novo.nome_escola)
        .bind(&novo.serie_concluida)
        .bind(novo.nota)
        .bind(novo.ano_conclusao)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    historico.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::HistoricoEscolar,
        id,
    })
}

pub async fn remover_historico(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let linhas = sqlx::query("DELETE FROM historicos_escolares WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if linhas == 0 {
        return Err(AppError::NaoEncontrado {
            entidade: Entidade::HistoricoEscolar,
            id,
        });
    }
    tracing::info!("✅ Histórico escolar {} removido", id);
    Ok(())
}
