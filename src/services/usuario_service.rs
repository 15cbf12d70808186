// src/services/usuario_service.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::usuario::{NovoUsuario, Usuario},
    services::auth_service,
};
use sqlx::{SqliteConnection, SqlitePool};

// As operações de escrita recebem uma conexão em vez do pool para poderem
// correr dentro da transação dos serviços compostos (professor/secretaria/
// aluno). Quem chama decide o escopo transacional.

/// Cria um utilizador: valida a presença da senha, gera o hash e insere.
pub async fn criar_usuario(conn: &mut SqliteConnection, novo: &NovoUsuario) -> AppResult<Usuario> {
    let senha = novo
        .senha
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::ValidacaoFalhou("senha é obrigatória".into()))?;

    let hash_senha = auth_service::hash_senha(senha).await?;

    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        INSERT INTO usuarios (nome, email, hash_senha, tipo_usuario)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, nome, email, hash_senha, tipo_usuario
        "#,
    )
    .bind(&novo.nome)
    .bind(&novo.email)
    .bind(&hash_senha)
    .bind(&novo.tipo_usuario)
    .fetch_one(conn)
    .await?;

    tracing::debug!("Utilizador criado: id {}", usuario.id);
    Ok(usuario)
}

/// Atualiza um utilizador existente. Se o rascunho trouxer uma nova senha
/// em claro, ela é re-hasheada; sem senha, o hash guardado é mantido.
pub async fn atualizar_usuario(
    conn: &mut SqliteConnection,
    usuario_id: i64,
    novo: &NovoUsuario,
) -> AppResult<Usuario> {
    let nova_senha = novo.senha.as_deref().filter(|s| !s.is_empty());

    let atualizado = match nova_senha {
        Some(senha) => {
            let hash_senha = auth_service::hash_senha(senha).await?;
            sqlx::query_as::<_, Usuario>(
                r#"
                UPDATE usuarios
                SET nome = ?1, email = ?2, hash_senha = ?3, tipo_usuario = ?4
                WHERE id = ?5
                RETURNING id, nome, email, hash_senha, tipo_usuario
                "#,
            )
            .bind(&novo.nome)
            .bind(&novo.email)
            .bind(&hash_senha)
            .bind(&novo.tipo_usuario)
            .bind(usuario_id)
            .fetch_optional(conn)
            .await?
        }
        None => {
            sqlx::query_as::<_, Usuario>(
                r#"
                UPDATE usuarios
                SET nome = ?1, email = ?2, tipo_usuario = ?3
                WHERE id = ?4
                RETURNING id, nome, email, hash_senha, tipo_usuario
                "#,
            )
            .bind(&novo.nome)
            .bind(&novo.email)
            .bind(&novo.tipo_usuario)
            .bind(usuario_id)
            .fetch_optional(conn)
            .await?
        }
    };

    atualizado.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Usuario,
        id: usuario_id,
    })
}

/// Busca um utilizador pelo seu ID.
pub async fn buscar_usuario_por_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Usuario>> {
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id, nome, email, hash_senha, tipo_usuario FROM usuarios WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(usuario)
}

/// Busca um utilizador pelo email (caminho do login).
pub async fn buscar_usuario_por_email(
    pool: &SqlitePool,
    email: &str,
) -> AppResult<Option<Usuario>> {
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id, nome, email, hash_senha, tipo_usuario FROM usuarios WHERE email = ?1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(usuario)
}
