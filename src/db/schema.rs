//! SQL DDL for initializing the trivia store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `categories(id, type)`, read-only through the HTTP surface
/// - `questions` with `category` referencing `categories(id)`
/// - index on `questions(category)` for per-category listing and quiz filtering
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category INTEGER NOT NULL REFERENCES categories(id),
    difficulty INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
"#;
