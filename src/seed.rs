// src/seed.rs
use crate::{
    error::AppResult,
    models::{professor::NovoProfessor, secretaria::NovaSecretaria, usuario::NovoUsuario},
    services::{professor_service, secretaria_service},
};
use sqlx::SqlitePool;

/// Popula o banco com as contas administrativas iniciais.
/// Só corre quando SEED_DB=true; caso contrário é um no-op.
pub async fn executar_seed(pool: &SqlitePool) -> AppResult<()> {
    if std::env::var("SEED_DB").map(|v| v != "true").unwrap_or(true) {
        tracing::info!("Seeding desativado");
        return Ok(());
    }

    let professor = professor_service::criar_professor(
        pool,
        NovoProfessor {
            usuario: NovoUsuario {
                nome: "Admin Professor".into(),
                email: "admin.professor@example.com".into(),
                senha: Some("senha123".into()),
                tipo_usuario: "professor".into(),
            },
            disciplina_especialidade: "Matemática".into(),
        },
    )
    .await?;

    let secretaria = secretaria_service::criar_secretaria(
        pool,
        NovaSecretaria {
            usuario: NovoUsuario {
                nome: "Admin Secretaria".into(),
                email: "admin.secretaria@example.com".into(),
                senha: Some("senha123".into()),
                tipo_usuario: "secretaria".into(),
            },
        },
    )
    .await?;

    tracing::info!(
        "Seeding concluído: professor {} e secretaria {} criados",
        professor.id,
        secretaria.id
    );
    Ok(())
}
