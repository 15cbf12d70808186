// src/services/turma_service.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::turma::{NovaTurma, Turma},
};
use sqlx::SqlitePool;

const COLUNAS: &str =
    "id, nome, ano_escolar, quantidade_maxima, turno, serie, created_at, updated_at";

pub async fn listar_turmas(pool: &SqlitePool) -> AppResult<Vec<Turma>> {
    let sql = format!("SELECT {COLUNAS} FROM turmas");
    let turmas = sqlx::query_as::<_, Turma>(&sql).fetch_all(pool).await?;
    Ok(turmas)
}

pub async fn buscar_turma_por_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Turma>> {
    let sql = format!("SELECT {COLUNAS} FROM turmas WHERE id = ?1");
    let turma = sqlx::query_as::<_, Turma>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(turma)
}

pub async fn criar_turma(pool: &SqlitePool, nova: NovaTurma) -> AppResult<Turma> {
    let sql = format!(
        "INSERT INTO turmas (nome, ano_escolar, quantidade_maxima, turno, serie) \
         VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {COLUNAS}"
    );
    let turma = sqlx::query_as::<_, Turma>(&sql)
        .bind(&nova.nome)
        .bind(nova.ano_escolar)
        .bind(nova.quantidade_maxima)
        .bind(&nova.turno)
        .bind(&nova.serie)
        .fetch_one(pool)
        .await?;
    tracing::info!("✅ Turma {} criada", turma.id);
    Ok(turma)
}

pub async fn atualizar_turma(pool: &SqlitePool, id: i64, nova: NovaTurma) -> AppResult<Turma> {
    let sql = format!(
        "UPDATE turmas SET nome = ?1, ano_escolar = ?2, quantidade_maxima = ?3, \
         turno = ?4, serie = ?5, updated_at = CURRENT_TIMESTAMP \
         WHERE id = ?6 RETURNING {COLUNAS}"
    );
    let turma = sqlx::query_as::<_, Turma>(&sql)
        .bind(&nova.nome)
        .bind(nova.ano_escolar)
        .bind(nova.quantidade_maxima)
        .bind(&nova.turno)
        .bind(&nova.serie)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    turma.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Turma,
        id,
    })
}

pub async fn remover_turma(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let linhas = sqlx::query("DELETE FROM turmas WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if linhas == 0 {
        return Err(AppError::NaoEncontrado {
            entidade: Entidade::Turma,
            id,
        });
    }
    tracing::info!("✅ Turma {} removida", id);
    Ok(())
}
