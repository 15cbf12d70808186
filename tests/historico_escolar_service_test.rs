// Testes do serviço de históricos escolares. Cada teste prepara um aluno
// (entidade composta) e, quando preciso, uma matéria para a FK opcional.

use gestao_escolar::error::{AppError, Entidade};
use gestao_escolar::models::aluno::{Aluno, NovoAluno};
use gestao_escolar::models::historico_escolar::NovoHistoricoEscolar;
use gestao_escolar::models::materia::NovaMateria;
use gestao_escolar::models::usuario::NovoUsuario;
use gestao_escolar::services::{aluno_service, historico_escolar_service, materia_service};
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

async fn cria_aluno(pool: &SqlitePool, nome: &str, email: &str) -> Aluno {
    aluno_service::criar_aluno(
        pool,
        NovoAluno {
            usuario: NovoUsuario {
                nome: nome.into(),
                email: email.into(),
                senha: Some("senha".into()),
                tipo_usuario: "aluno".into(),
            },
            data_nascimento: Some("2010-05-10".into()),
            responsavel_nome: Some("Responsável".into()),
            nome_pai: None,
            nome_mae: None,
            profissao_pai: None,
            profissao_mae: None,
            alergias: None,
            telefone_pai: None,
            telefone_mae: None,
            email_pai: None,
            email_mae: None,
            idade: None,
            religiao: None,
        },
    )
    .await
    .unwrap()
}

fn novo_historico(id_aluno: i64, id_disciplina: Option<i64>, escola: &str) -> NovoHistoricoEscolar {
    NovoHistoricoEscolar {
        id_aluno,
        id_disciplina,
        nome_escola: escola.into(),
        serie_concluida: "5º Ano".into(),
        nota: 8.5,
        ano_conclusao: 2023,
    }
}

#[tokio::test]
async fn cria_historico_com_disciplina() {
    let pool = setup().await;
    let aluno = cria_aluno(&pool, "João Silva", "joao@test.com").await;
    let materia = materia_service::criar_materia(&pool, NovaMateria { nome: "Matemática".into() })
        .await
        .unwrap();

    let historico = historico_escolar_service::criar_historico(
        &pool,
        novo_historico(aluno.id, Some(materia.id), "Escola Municipal João da Silva"),
    )
    .await
    .unwrap();

    assert!(historico.id > 0);
    assert_eq!(historico.id_aluno, aluno.id);
    assert_eq!(historico.id_disciplina, Some(materia.id));
    assert_eq!(historico.nome_escola, "Escola Municipal João da Silva");
    assert_eq!(historico.serie_concluida, "5º Ano");
    assert_eq!(historico.nota, 8.5);
    assert_eq!(historico.ano_conclusao, 2023);
    assert!(historico.created_at.is_some());
    assert!(historico.updated_at.is_some());
}

#[tokio::test]
async fn cria_historico_sem_disciplina() {
    let pool = setup().await;
    let aluno = cria_aluno(&pool, "Ana Santos", "ana@test.com").await;

    let historico = historico_escolar_service::criar_historico(
        &pool,
        novo_historico(aluno.id, None, "Colégio Estadual Santos"),
    )
    .await
    .unwrap();

    assert_eq!(historico.id_disciplina, None);
    assert_eq!(historico.nome_escola, "Colégio Estadual Santos");
}

#[tokio::test]
async fn busca_historico_por_id() {
    let pool = setup().await;
    let aluno = cria_aluno(&pool, "Pedro Costa", "pedro@test.com").await;

    let criado = historico_escolar_service::criar_historico(
        &pool,
        novo_historico(aluno.id, None, "Escola Get Test"),
    )
    .await
    .unwrap();

    let historico = historico_escolar_service::buscar_historico_por_id(&pool, criado.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(historico.id, criado.id);
    assert_eq!(historico.nome_escola, "Escola Get Test");
}

#[tokio::test]
async fn busca_de_historico_inexistente_retorna_none() {
    let pool = setup().await;
    let historico = historico_escolar_service::buscar_historico_por_id(&pool, 9999)
        .await
        .unwrap();
    assert!(historico.is_none());
}

#[tokio::test]
async fn busca_historicos_por_aluno() {
    let pool = setup().await;
    let aluno = cria_aluno(&pool, "Maria Oliveira", "maria@test.com").await;

    historico_escolar_service::criar_historico(&pool, novo_historico(aluno.id, None, "Escola A"))
        .await
        .unwrap();
    historico_escolar_service::criar_historico(&pool, novo_historico(aluno.id, None, "Escola B"))
        .await
        .unwrap();

    let historicos = historico_escolar_service::buscar_historicos_por_aluno_id(&pool, aluno.id)
        .await
        .unwrap();

    assert_eq!(historicos.len(), 2);
    assert!(historicos.iter().all(|h| h.id_aluno == aluno.id));
    assert!(historicos.iter().any(|h| h.nome_escola == "Escola A"));
    assert!(historicos.iter().any(|h| h.nome_escola == "Escola B"));
}

#[tokio::test]
async fn busca_historicos_por_disciplina() {
    let pool = setup().await;
    let aluno1 = cria_aluno(&pool, "Aluno 1", "aluno1@test.com").await;
    let aluno2 = cria_aluno(&pool, "Aluno 2", "aluno2@test.com").await;
    let materia = materia_service::criar_materia(&pool, NovaMateria { nome: "História".into() })
        .await
        .unwrap();

    historico_escolar_service::criar_historico(
        &pool,
        novo_historico(aluno1.id, Some(materia.id), "Escola História 1"),
    )
    .await
    .unwrap();
    historico_escolar_service::criar_historico(
        &pool,
        novo_historico(aluno2.id, Some(materia.id), "Escola História 2"),
    )
    .await
    .unwrap();

    let historicos =
        historico_escolar_service::buscar_historicos_por_disciplina_id(&pool, materia.id)
            .await
            .unwrap();

    assert_eq!(historicos.len(), 2);
    assert!(historicos.iter().all(|h| h.id_disciplina == Some(materia.id)));
    assert!(historicos
        .iter()
        .any(|h| h.id_aluno == aluno1.id && h.nome_escola == "Escola História 1"));
    assert!(historicos
        .iter()
        .any(|h| h.id_aluno == aluno2.id && h.nome_escola == "Escola História 2"));
}

#[tokio::test]
async fn lista_todos_os_historicos() {
    let pool = setup().await;
    let aluno = cria_aluno(&pool, "Aluno List", "lista@test.com").await;

    historico_escolar_service::criar_historico(&pool, novo_historico(aluno.id, None, "Escola Lista 1"))
        .await
        .unwrap();
    historico_escolar_service::criar_historico(&pool, novo_historico(aluno.id, None, "Escola Lista 2"))
        .await
        .unwrap();

    let historicos = historico_escolar_service::listar_historicos(&pool).await.unwrap();
    assert_eq!(historicos.len(), 2);
}

#[tokio::test]
async fn atualiza_um_historico() {
    let pool = setup().await;
    let aluno = cria_aluno(&pool, "Aluno Update", "update@test.com").await;
    let materia = materia_service::criar_materia(&pool, NovaMateria { nome: "Geografia".into() })
        .await
        .unwrap();

    let criado = historico_escolar_service::criar_historico(
        &pool,
        novo_historico(aluno.id, Some(materia.id), "Escola Original"),
    )
    .await
    .unwrap();

    let atualizado = historico_escolar_service::atualizar_historico(
        &pool,
        criado.id,
        NovoHistoricoEscolar {
            id_aluno: aluno.id,
            id_disciplina: Some(materia.id),
            nome_escola: "Escola Atualizada".into(),
            serie_concluida: "6º Ano".into(),
            nota: 9.5,
            ano_conclusao: 2024,
        },
    )
    .await
    .unwrap();

    assert_eq!(atualizado.id, criado.id);
    assert_eq!(atualizado.nome_escola, "Escola Atualizada");
    assert_eq!(atualizado.serie_concluida, "6º Ano");
    assert_eq!(atualizado.nota, 9.5);
    assert_eq!(atualizado.ano_conclusao, 2024);
    // Timestamps com precisão de segundo: comparação não-estrita
    assert!(atualizado.updated_at >= criado.updated_at);
}

#[tokio::test]
async fn atualizar_historico_inexistente_falha_com_nao_encontrado() {
    let pool = setup().await;

    let err = historico_escolar_service::atualizar_historico(
        &pool,
        9999,
        novo_historico(1, None, "Test"),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::NaoEncontrado {
            entidade: Entidade::HistoricoEscolar,
            id: 9999
        }
    ));
    assert_eq!(err.to_string(), "Histórico escolar não encontrado");
}

#[tokio::test]
async fn remove_um_historico() {
    let pool = setup().await;
    let aluno = cria_aluno(&pool, "Aluno Delete", "delete@test.com").await;

    let criado = historico_escolar_service::criar_historico(
        &pool,
        novo_historico(aluno.id, None, "Escola Delete"),
    )
    .await
    .unwrap();

    historico_escolar_service::remover_historico(&pool, criado.id)
        .await
        .unwrap();

    let removido = historico_escolar_service::buscar_historico_por_id(&pool, criado.id)
        .await
        .unwrap();
    assert!(removido.is_none());
}

#[tokio::test]
async fn remover_historico_inexistente_falha_com_nao_encontrado() {
    let pool = setup().await;
    let err = historico_escolar_service::remover_historico(&pool, 9999)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Histórico escolar não encontrado");
}

#[tokio::test]
async fn remover_aluno_remove_historicos_em_cascata() {
    let pool = setup().await;
    let aluno = cria_aluno(&pool, "Aluno Cascata", "cascata@test.com").await;

    historico_escolar_service::criar_historico(&pool, novo_historico(aluno.id, None, "Escola X"))
        .await
        .unwrap();

    aluno_service::remover_aluno(&pool, aluno.id).await.unwrap();

    let historicos = historico_escolar_service::buscar_historicos_por_aluno_id(&pool, aluno.id)
        .await
        .unwrap();
    assert!(historicos.is_empty());
}
