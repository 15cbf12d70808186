// Testes do serviço composto de alunos, incluindo a normalização leniente
// da data de nascimento.

use gestao_escolar::error::AppError;
use gestao_escolar::models::aluno::NovoAluno;
use gestao_escolar::models::usuario::NovoUsuario;
use gestao_escolar::services::{aluno_service, usuario_service};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

async fn setup() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

fn novo_aluno(nome: &str, email: &str, data_nascimento: Option<&str>) -> NovoAluno {
    NovoAluno {
        usuario: NovoUsuario {
            nome: nome.into(),
            email: email.into(),
            senha: Some("senha".into()),
            tipo_usuario: "aluno".into(),
        },
        data_nascimento: data_nascimento.map(Into::into),
        responsavel_nome: Some("Maria Silva".into()),
        nome_pai: None,
        nome_mae: Some("Maria Silva".into()),
        profissao_pai: None,
        profissao_mae: Some("Professora".into()),
        alergias: Some("Amendoim".into()),
        telefone_pai: None,
        telefone_mae: Some("11888888888".into()),
        email_pai: None,
        email_mae: Some("maria@test.com".into()),
        idade: Some(12),
        religiao: None,
    }
}

#[tokio::test]
async fn cria_aluno_com_ficha_demografica() {
    let pool = setup().await;

    let aluno = aluno_service::criar_aluno(
        &pool,
        novo_aluno("João Silva", "joao@test.com", Some("2010-05-10")),
    )
    .await
    .unwrap();

    assert!(aluno.id > 0);
    assert_eq!(aluno.usuario.nome, "João Silva");
    assert_eq!(aluno.data_nascimento.as_deref(), Some("2010-05-10"));
    assert_eq!(aluno.responsavel_nome.as_deref(), Some("Maria Silva"));
    assert_eq!(aluno.idade, Some(12));
    assert_eq!(aluno.nome_pai, None);
}

#[tokio::test]
async fn criar_e_buscar_devolvem_o_mesmo_aluno() {
    let pool = setup().await;

    let criado = aluno_service::criar_aluno(
        &pool,
        novo_aluno("Ana Santos", "ana@test.com", Some("2011-03-15")),
    )
    .await
    .unwrap();

    let buscado = aluno_service::buscar_aluno_por_id(&pool, criado.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(buscado.id, criado.id);
    assert_eq!(buscado.usuario.id, criado.usuario.id);
    assert_eq!(buscado.usuario.email, criado.usuario.email);
    assert_eq!(buscado.data_nascimento, criado.data_nascimento);
    assert_eq!(buscado.alergias, criado.alergias);
    assert_eq!(buscado.idade, criado.idade);
}

#[tokio::test]
async fn data_de_nascimento_malformada_vira_none_sem_erro() {
    let pool = setup().await;

    // Formato fora do padrão YYYY-MM-DD: o aluno é criado na mesma,
    // com a data normalizada para null.
    let aluno = aluno_service::criar_aluno(
        &pool,
        novo_aluno("Pedro Costa", "pedro@test.com", Some("10/05/2010")),
    )
    .await
    .unwrap();

    assert_eq!(aluno.data_nascimento, None);

    let buscado = aluno_service::buscar_aluno_por_id(&pool, aluno.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(buscado.data_nascimento, None);
}

#[tokio::test]
async fn busca_de_aluno_inexistente_retorna_none() {
    let pool = setup().await;
    let aluno = aluno_service::buscar_aluno_por_id(&pool, 9999).await.unwrap();
    assert!(aluno.is_none());
}

#[tokio::test]
async fn busca_aluno_pelo_usuario_id() {
    let pool = setup().await;

    let criado = aluno_service::criar_aluno(
        &pool,
        novo_aluno("Maria Oliveira", "maria.aluna@test.com", None),
    )
    .await
    .unwrap();

    let aluno = aluno_service::buscar_aluno_por_usuario_id(&pool, criado.usuario.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(aluno.id, criado.id);
}

#[tokio::test]
async fn atualiza_aluno_e_usuario_aninhado() {
    let pool = setup().await;

    let criado = aluno_service::criar_aluno(
        &pool,
        novo_aluno("Aluno Update", "aluno.update@test.com", Some("2010-01-01")),
    )
    .await
    .unwrap();

    let mut novo = novo_aluno("Aluno Atualizado", "aluno.atualizado@test.com", Some("2010-01-01"));
    novo.usuario.senha = None;
    novo.alergias = None;
    novo.idade = Some(13);

    let atualizado = aluno_service::atualizar_aluno(&pool, criado.id, novo).await.unwrap();

    assert_eq!(atualizado.id, criado.id);
    assert_eq!(atualizado.usuario.nome, "Aluno Atualizado");
    assert_eq!(atualizado.alergias, None);
    assert_eq!(atualizado.idade, Some(13));
}

#[tokio::test]
async fn atualizar_aluno_inexistente_falha_com_nao_encontrado() {
    let pool = setup().await;

    let err = aluno_service::atualizar_aluno(&pool, 9999, novo_aluno("X", "x@test.com", None))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Aluno não encontrado");
    assert!(matches!(err, AppError::NaoEncontrado { .. }));
}

#[tokio::test]
async fn remove_aluno_e_usuario_juntos() {
    let pool = setup().await;

    let criado = aluno_service::criar_aluno(
        &pool,
        novo_aluno("Aluno Delete", "aluno.delete@test.com", None),
    )
    .await
    .unwrap();

    aluno_service::remover_aluno(&pool, criado.id).await.unwrap();

    let removido = aluno_service::buscar_aluno_por_id(&pool, criado.id)
        .await
        .unwrap();
    assert!(removido.is_none());

    let usuario = usuario_service::buscar_usuario_por_id(&pool, criado.usuario.id)
        .await
        .unwrap();
    assert!(usuario.is_none());
}

#[tokio::test]
async fn remover_aluno_inexistente_falha_com_nao_encontrado() {
    let pool = setup().await;
    let err = aluno_service::remover_aluno(&pool, 9999).await.unwrap_err();
    assert_eq!(err.to_string(), "Aluno não encontrado");
}
