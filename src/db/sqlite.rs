use crate::db::models::{Category, NewQuestion, Question};
use crate::db::schema::SQLITE_INIT;
use crate::error::TriviaError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Open (creating if needed) the SQLite database and apply the schema.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<TriviaStorage, TriviaError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    let storage = TriviaStorage::new(pool);
    storage.init_schema().await?;
    info!(database_url = %database_url, "trivia store ready");
    Ok(storage)
}

/// Query handle over the `questions` and `categories` tables.
#[derive(Clone)]
pub struct TriviaStorage {
    pool: SqlitePool,
}

impl TriviaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TriviaError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, TriviaError> {
        let row = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Categories are never created over HTTP; this is for seeding.
    pub async fn insert_category(&self, kind: &str) -> Result<i64, TriviaError> {
        let res = sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(kind)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    /// All questions ordered by id ascending.
    pub async fn list_questions(&self) -> Result<Vec<Question>, TriviaError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, TriviaError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?");
        let row = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Persist a question and return its generated id.
    pub async fn insert_question(&self, new: NewQuestion) -> Result<i64, TriviaError> {
        let res = sqlx::query(
            r#"INSERT INTO questions (question, answer, category, difficulty)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_question(&self, id: i64) -> Result<u64, TriviaError> {
        let res = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    /// Case-insensitive substring match on the question text, ordered by id.
    /// Case folding is Unicode-aware, so it runs here rather than in `LIKE`.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        let needle = term.to_lowercase();
        let rows = self
            .list_questions()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();
        Ok(rows)
    }

    pub async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, TriviaError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Questions whose id is not in `exclude`, restricted to `category` when given.
    /// `exclude` is bound as one JSON array so its length is not capped by
    /// SQLite's host-parameter limit.
    pub async fn quiz_candidates(
        &self,
        exclude: &[i64],
        category: Option<i64>,
    ) -> Result<Vec<Question>, TriviaError> {
        let exclude_json = serde_json::to_string(exclude).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let sql = format!(
            r#"SELECT {QUESTION_COLUMNS} FROM questions
               WHERE id NOT IN (SELECT value FROM json_each(?))
                 AND (? IS NULL OR category = ?)
               ORDER BY id"#
        );
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(exclude_json)
            .bind(category)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
