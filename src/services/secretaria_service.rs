// src/services/secretaria_service.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::secretaria::{NovaSecretaria, Secretaria},
    models::usuario::Usuario,
    services::usuario_service,
};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct SecretariaComUsuarioRow {
    id: i64,
    usuario_id: i64,
    usuario_nome: String,
    usuario_email: String,
    usuario_hash_senha: String,
    usuario_tipo_usuario: String,
}

impl SecretariaComUsuarioRow {
    fn into_secretaria(self) -> Secretaria {
        Secretaria {
            id: self.id,
            usuario: Usuario {
                id: self.usuario_id,
                nome: self.usuario_nome,
                email: self.usuario_email,
                hash_senha: self.usuario_hash_senha,
                tipo_usuario: self.usuario_tipo_usuario,
            },
        }
    }
}

pub async fn listar_secretarias(pool: &SqlitePool) -> AppResult<Vec<Secretaria>> {
    let rows = sqlx::query_as::<_, SecretariaComUsuarioRow>(
        r#"
        SELECT s.id, s.usuario_id,
               u.nome AS usuario_nome, u.email AS usuario_email,
               u.hash_senha AS usuario_hash_senha, u.tipo_usuario AS usuario_tipo_usuario
        FROM secretaria s
        JOIN usuarios u ON s.usuario_id = u.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into_secretaria()).collect())
}

pub async fn buscar_secretaria_por_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Secretaria>> {
    let row = sqlx::query_as::<_, SecretariaComUsuarioRow>(
        r#"
        SELECT s.id, s.usuario_id,
               u.nome AS usuario_nome, u.email AS usuario_email,
               u.hash_senha AS usuario_hash_senha, u.tipo_usuario AS usuario_tipo_usuario
        FROM secretaria s
        JOIN usuarios u ON s.usuario_id = u.id
        WHERE s.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into_secretaria()))
}

pub async fn buscar_secretaria_por_usuario_id(
    pool: &SqlitePool,
    usuario_id: i64,
) -> AppResult<Option<Secretaria>> {
    let row = sqlx::query_as::<_, SecretariaComUsuarioRow>(
        r#"
        SELECT s.id, s.usuario_id,
               u.nome AS usuario_nome, u.email AS usuario_email,
               u.hash_senha AS usuario_hash_senha, u.tipo_usuario AS usuario_tipo_usuario
        FROM secretaria s
        JOIN usuarios u ON s.usuario_id = u.id
        WHERE s.usuario_id = ?1
        "#,
    )
    .bind(usuario_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into_secretaria()))
}

/// Cria uma secretaria: usuário + linha de papel numa única transação.
pub async fn criar_secretaria(pool: &SqlitePool, nova: NovaSecretaria) -> AppResult<Secretaria> {
    tracing::info!("Criando secretaria para '{}'", nova.usuario.email);
    let mut tx = pool.begin().await?;

    let usuario = usuario_service::criar_usuario(&mut tx, &nova.usuario).await?;

    let id: i64 = sqlx::query_scalar("INSERT INTO secretaria (usuario_id) VALUES (?1) RETURNING id")
        .bind(usuario.id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("✅ Secretaria {} criada (usuário {})", id, usuario.id);

    Ok(Secretaria { id, usuario })
}

/// Atualiza a secretaria: só a metade do usuário tem campos mutáveis, mas a
/// linha de papel é reconferida depois do update para manter o invariante.
pub async fn atualizar_secretaria(
    pool: &SqlitePool,
    id: i64,
    nova: NovaSecretaria,
) -> AppResult<Secretaria> {
    let mut tx = pool.begin().await?;

    let usuario_id: Option<i64> =
        sqlx::query_scalar("SELECT usuario_id FROM secretaria WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let usuario_id = usuario_id.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Secretaria,
        id,
    })?;

    let usuario = usuario_service::atualizar_usuario(&mut tx, usuario_id, &nova.usuario).await?;

    let existe: Option<i64> = sqlx::query_scalar("SELECT id FROM secretaria WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if existe.is_none() {
        return Err(AppError::ViolacaoInvariante {
            entidade: Entidade::Secretaria,
            id,
        });
    }

    tx.commit().await?;
    tracing::info!("✅ Secretaria {} atualizada", id);

    Ok(Secretaria { id, usuario })
}

/// Remove secretaria e usuário, papel primeiro, numa única transação.
pub async fn remover_secretaria(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let usuario_id: Option<i64> =
        sqlx::query_scalar("SELECT usuario_id FROM secretaria WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let usuario_id = usuario_id.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Secretaria,
        id,
    })?;

    sqlx::query("DELETE FROM secretaria WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM usuarios WHERE id = ?1")
        .bind(usuario_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("✅ Secretaria {} removida (usuário {})", id, usuario_id);
    Ok(())
}
