// src/services/materia_service.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::materia::{Materia, NovaMateria},
};
use sqlx::SqlitePool;

pub async fn listar_materias(pool: &SqlitePool) -> AppResult<Vec<Materia>> {
    let materias = sqlx::query_as::<_, Materia>("SELECT id, nome FROM materias")
        .fetch_all(pool)
        .await?;
    Ok(materias)
}

pub async fn buscar_materia_por_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Materia>> {
    let materia = sqlx::query_as::<_, Materia>("SELECT id, nome FROM materias WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(materia)
}

pub async fn criar_materia(pool: &SqlitePool, nova: NovaMateria) -> AppResult<Materia> {
    let materia = sqlx::query_as::<_, Materia>(
        "INSERT INTO materias (nome) VALUES (?1) RETURNING id, nome",
    )
    .bind(&nova.nome)
    .fetch_one(pool)
    .await?;
    tracing::info!("✅ Matéria {} criada", materia.id);
    Ok(materia)
}

pub async fn atualizar_materia(pool: &SqlitePool, id: i64, nova: NovaMateria) -> AppResult<Materia> {
    let materia = sqlx::query_as::<_, Materia>(
        "UPDATE materias SET nome = ?1 WHERE id = ?2 RETURNING id, nome",
    )
    .bind(&nova.nome)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    materia.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Materia,
        id,
    })
}

pub async fn remover_materia(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let linhas = sqlx::query("DELETE FROM materias WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    if linhas == 0 {
        return Err(AppError::NaoEncontrado {
            entidade: Entidade::Materia,
            id,
        });
    }
    tracing::info!("✅ Matéria {} removida", id);
    Ok(())
}
