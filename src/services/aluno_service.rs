// src/services/aluno_service.rs
use crate::{
    error::{AppError, AppResult, Entidade},
    models::aluno::{normalizar_data_nascimento, Aluno, NovoAluno},
    models::usuario::Usuario,
    services::usuario_service,
};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct AlunoComUsuarioRow {
    id: i64,
    usuario_id: i64,
    data_nascimento: Option<String>,
    responsavel_nome: Option<String>,
    nome_pai: Option<String>,
    nome_mae: Option<String>,
    profissao_pai: Option<String>,
    profissao_mae: Option<String>,
    alergias: Option<String>,
    telefone_pai: Option<String>,
    telefone_mae: Option<String>,
    email_pai: Option<String>,
    email_mae: Option<String>,
    idade: Option<i64>,
    religiao: Option<String>,
    usuario_nome: String,
    usuario_email: String,
    usuario_hash_senha: String,
    usuario_tipo_usuario: String,
}

impl AlunoComUsuarioRow {
    fn into_aluno(self) -> Aluno {
        Aluno {
            id: self.id,
            usuario: Usuario {
                id: self.usuario_id,
                nome: self.usuario_nome,
                email: self.usuario_email,
                hash_senha: self.usuario_hash_senha,
                tipo_usuario: self.usuario_tipo_usuario,
            },
            // A leniência vale também na leitura: um valor fora do padrão
            // gravado por outra via sai como None, nunca como erro.
            data_nascimento: normalizar_data_nascimento(self.data_nascimento),
            responsavel_nome: self.responsavel_nome,
            nome_pai: self.nome_pai,
            nome_mae: self.nome_mae,
            profissao_pai: self.profissao_pai,
            profissao_mae: self.profissao_mae,
            alergias: self.alergias,
            telefone_pai: self.telefone_pai,
            telefone_mae: self.telefone_mae,
            email_pai: self.email_pai,
            email_mae: self.email_mae,
            idade: self.idade,
            religiao: self.religiao,
        }
    }
}

const COLUNAS_JOIN: &str = r#"
    SELECT a.id, a.usuario_id, a.data_nascimento, a.responsavel_nome,
           a.nome_pai, a.nome_mae, a.profissao_pai, a.profissao_mae,
           a.alergias, a.telefone_pai, a.telefone_mae, a.email_pai,
           a.email_mae, a.idade, a.religiao,
           u.nome AS usuario_nome, u.email AS usuario_email,
           u.hash_senha AS usuario_hash_senha, u.tipo_usuario AS usuario_tipo_usuario
    FROM alunos a
    JOIN usuarios u ON a.usuario_id = u.id
"#;

pub async fn listar_alunos(pool: &SqlitePool) -> AppResult<Vec<Aluno>> {
    let rows = sqlx::query_as::<_, AlunoComUsuarioRow>(COLUNAS_JOIN)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|r| r.into_aluno()).collect())
}

pub async fn buscar_aluno_por_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Aluno>> {
    let sql = format!("{COLUNAS_JOIN} WHERE a.id = ?1");
    let row = sqlx::query_as::<_, AlunoComUsuarioRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.into_aluno()))
}

pub async fn buscar_aluno_por_usuario_id(
    pool: &SqlitePool,
    usuario_id: i64,
) -> AppResult<Option<Aluno>> {
    let sql = format!("{COLUNAS_JOIN} WHERE a.usuario_id = ?1");
    let row = sqlx::query_as::<_, AlunoComUsuarioRow>(&sql)
        .bind(usuario_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.into_aluno()))
}

/// Cria um aluno: usuário + ficha demográfica numa única transação.
pub async fn criar_aluno(pool: &SqlitePool, novo: NovoAluno) -> AppResult<Aluno> {
    // Data fora do padrão entra como null, nunca como erro
    let novo = NovoAluno {
        data_nascimento: normalizar_data_nascimento(novo.data_nascimento),
        ..novo
    };

    tracing::info!("Criando aluno para '{}'", novo.usuario.email);
    let mut tx = pool.begin().await?;

    let usuario = usuario_service::criar_usuario(&mut tx, &novo.usuario).await?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO alunos (usuario_id, data_nascimento, responsavel_nome,
                            nome_pai, nome_mae, profissao_pai, profissao_mae,
                            alergias, telefone_pai, telefone_mae, email_pai,
                            email_mae, idade, religiao)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
        RETURNING id
        "#,
    )
    .bind(usuario.id)
    .bind(&novo.data_nascimento)
    .bind(&novo.responsavel_nome)
    .bind(&novo.nome_pai)
    .bind(&novo.nome_mae)
    .bind(&novo.profissao_pai)
    .bind(&novo.profissao_mae)
    .bind(&novo.alergias)
    .bind(&novo.telefone_pai)
    .bind(&novo.telefone_mae)
    .bind(&novo.email_pai)
    .bind(&novo.email_mae)
    .bind(novo.idade)
    .bind(&novo.religiao)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!("✅ Aluno {} criado (usuário {})", id, usuario.id);

    Ok(Aluno {
        id,
        usuario,
        data_nascimento: novo.data_nascimento,
        responsavel_nome: novo.responsavel_nome,
        nome_pai: novo.nome_pai,
        nome_mae: novo.nome_mae,
        profissao_pai: novo.profissao_pai,
        profissao_mae: novo.profissao_mae,
        alergias: novo.alergias,
        telefone_pai: novo.telefone_pai,
        telefone_mae: novo.telefone_mae,
        email_pai: novo.email_pai,
        email_mae: novo.email_mae,
        idade: novo.idade,
        religiao: novo.religiao,
    })
}

/// Atualiza aluno e usuário aninhado, no mesmo desenho do professor.
pub async fn atualizar_aluno(pool: &SqlitePool, id: i64, novo: NovoAluno) -> AppResult<Aluno> {
    let novo = NovoAluno {
        data_nascimento: normalizar_data_nascimento(novo.data_nascimento),
        ..novo
    };

    let mut tx = pool.begin().await?;

    let usuario_id: Option<i64> = sqlx::query_scalar("SELECT usuario_id FROM alunos WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    let usuario_id = usuario_id.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Aluno,
        id,
    })?;

    let usuario = usuario_service::atualizar_usuario(&mut tx, usuario_id, &novo.usuario).await?;

    let linhas = sqlx::query(
        r#"
        UPDATE alunos
        SET data_nascimento = ?1, responsavel_nome = ?2, nome_pai = ?3,
            nome_mae = ?4, profissao_pai = ?5, profissao_mae = ?6,
            alergias = ?7, telefone_pai = ?8, telefone_mae = ?9,
            email_pai = ?10, email_mae = ?11, idade = ?12, religiao = ?13
        WHERE id = ?14
        "#,
    )
    .bind(&novo.data_nascimento)
    .bind(&novo.responsavel_nome)
    .bind(&novo.nome_pai)
    .bind(&novo.nome_mae)
    .bind(&novo.profissao_pai)
    .bind(&novo.profissao_mae)
    .bind(&novo.alergias)
    .bind(&novo.telefone_pai)
    .bind(&novo.telefone_mae)
    .bind(&novo.email_pai)
    .bind(&novo.email_mae)
    .bind(novo.idade)
    .bind(&novo.religiao)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();
    if linhas == 0 {
        return Err(AppError::ViolacaoInvariante {
            entidade: Entidade::Aluno,
            id,
        });
    }

    tx.commit().await?;
    tracing::info!("✅ Aluno {} atualizado", id);

    Ok(Aluno {
        id,
        usuario,
        data_nascimento: novo.data_nascimento,
        responsavel_nome: novo.responsavel_nome,
        nome_pai: novo.nome_pai,
        nome_mae: novo.nome_mae,
        profissao_pai: novo.profissao_pai,
        profissao_mae: novo.profissao_mae,
        alergias: novo.alergias,
        telefone_pai: novo.telefone_pai,
        telefone_mae: novo.telefone_mae,
        email_pai: novo.email_pai,
        email_mae: novo.email_mae,
        idade: novo.idade,
        religiao: novo.religiao,
    })
}

/// Remove aluno e usuário, papel primeiro, numa única transação.
/// Históricos escolares do aluno caem em cascata (FK com ON DELETE CASCADE).
pub async fn remover_aluno(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let usuario_id: Option<i64> = sqlx::query_scalar("SELECT usuario_id FROM alunos WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    let usuario_id = usuario_id.ok_or(AppError::NaoEncontrado {
        entidade: Entidade::Aluno,
        id,
    })?;

    sqlx::query("DELETE FROM alunos WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM usuarios WHERE id = ?1")
        .bind(usuario_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("✅ Aluno {} removido (usuário {})", id, usuario_id);
    Ok(())
}
