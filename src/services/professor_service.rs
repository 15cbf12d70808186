// src/services/professor_service.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::professor::{NovoProfessor, Professor},
    models::usuario::Usuario,
    services::usuario_service,
};
use sqlx::{FromRow, SqlitePool};

// Linha do join professores × usuarios, achatada com aliases.
#[derive(Debug, FromRow)]
struct ProfessorComUsuarioRow {
    id: i64,
    usuario_id: i64,
    disciplina_especialidade: String,
    usuario_nome: String,
    usuario_email: String,
    usuario_hash_senha: String,
    usuario_tipo_usuario: String,
}

impl ProfessorComUsuarioRow {
    fn into_professor(self) -> Professor {
        Professor {
            id: self.id,
            usuario: Usuario {
                id: self.usuario_id,
                nome: self.usuario_nome,
                email: self.usuario_email,
                hash_senha: self.usuario_hash_senha,
                tipo_usuario: self.usuario_tipo_usuario,
            },
            disciplina_especialidade: self.disciplina_especialidade,
        }
    }
}

/// Lista todos os professores com o usuário aninhado.
pub async fn listar_professores(pool: &SqlitePool) -> AppResult<Vec<Professor>> {
    let rows = sqlx::query_as::<_, ProfessorComUsuarioRow>(
        r#"
        SELECT p.id, p.usuario_id, p.disciplina_especialidade,
               u.nome AS usuario_nome, u.email AS usuario_email,
               u.hash_senha AS usuario_hash_senha, u.tipo_usuario AS usuario_tipo_usuario
        FROM professores p
        JOIN usuarios u ON p.usuario_id = u.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into_professor()).collect())
}

/// Busca um professor pelo ID. `None` quando não existe.
pub async fn buscar_professor_por_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Professor>> {
    let row = sqlx::query_as::<_, ProfessorComUsuarioRow>(
        r#"
        SELECT p.id, p.usuario_id, p.disciplina_especialidade,
               u.nome AS usuario_nome, u.email AS usuario_email,
               u.hash_senha AS usuario_hash_senha, u.tipo_usuario AS usuario_tipo_usuario
        FROM professores p
        JOIN usuarios u ON p.usuario_id = u.id
        WHERE p.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into_professor()))
}

/// Busca o professor dono de uma conta de utilizador.
pub async fn buscar_professor_por_usuario_id(
    pool: &SqlitePool,
    usuario_id: i64,
) -> AppResult<Option<Professor>> {
    let row = sqlx::query_as::<_, ProfessorComUsuarioRow>(
        r#"
        SELECT p.id, p.usuario_id, p.disciplina_especialidade,
               u.nome AS usuario_nome, u.email AS usuario_email,
               u.hash_senha AS usuario_hash_senha, u.tipo_usuario AS usuario_tipo_usuario
        FROM professores p
        JOIN usuarios u ON p.usuario_id = u.id
        WHERE p.usuario_id = ?1
        "#,
    )
    .bind(usuario_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into_professor()))
}

/// Cria um professor: usuário + linha de papel numa única transação, para
/// que nenhuma das metades sobreviva sozinha se a outra falhar.
pub async fn criar_professor(pool: &SqlitePool, novo: NovoProfessor) -> AppResult<Professor> {
    tracing::info!("Criando professor para '{}'", novo.usuario.email);
    let mut tx = pool.begin().await?;

    let usuario = usuario_service::criar_usuario(&mut tx, &novo.usuario).await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO professores (usuario_id, disciplina_especialidade) VALUES (?1, ?2) RETURNING id",
    )
    .bind(usuario.id)
    .bind(&novo.disciplina_especialidade)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!("✅ Professor {} criado (usuário {})", id, usuario.id);

    Ok(Professor {
        id,
        usuario,
        disciplina_especialidade: novo.disciplina_especialidade,
    })
}

/// Atualiza professor e usuário aninhado: resolve a FK, delega a metade
/// do usuário e só então mexe nas colunas do papel.
pub async fn atualizar_professor(
    pool: &SqlitePool,
    id: i64,
    novo: NovoProfessor,
) -> AppResult<Professor> {
    let mut tx = pool.begin().await?;

    let usuario_id: Option<i64> =
        sqlx::query_scalar("SELECT usuario_id FROM professores WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let usuario_id = usuario_id.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Professor,
        id,
    })?;

    let usuario = usuario_service::atualizar_usuario(&mut tx, usuario_id, &novo.usuario).await?;

    let linhas = sqlx::query("UPDATE professores SET disciplina_especialidade = ?1 WHERE id = ?2")
        .bind(&novo.disciplina_especialidade)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    if linhas == 0 {
        // A linha existia na verificação acima; sumir aqui é defeito interno.
        return Err(AppError::ViolacaoInvariante {
            entidade: Entidade::Professor,
            id,
        });
    }

    tx.commit().await?;
    tracing::info!("✅ Professor {} atualizado", id);

    Ok(Professor {
        id,
        usuario,
        disciplina_especialidade: novo.disciplina_especialidade,
    })
}

/// Remove professor e usuário. A linha de papel sai primeiro por causa da
/// direção da FK; a transação garante que as duas saem juntas.
pub async fn remover_professor(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let usuario_id: Option<i64> =
        sqlx::query_scalar("SELECT usuario_id FROM professores WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let usuario_id = usuario_id.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Professor,
        id,
    })?;

    sqlx::query("DELETE FROM professores WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM usuarios WHERE id = ?1")
        .bind(usuario_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("✅ Professor {} removido (usuário {})", id, usuario_id);
    Ok(())
}
