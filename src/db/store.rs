use crate::config::StorageConfig;
use crate::db::create::QuoteCreate;
use crate::db::models::DbQuote;
use crate::db::page::Page;
use crate::db::schema::SQLITE_INIT;
use crate::error::QuoteError;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

/// Storage accessor for quotes. Every read and write of the `quotes` table goes through here.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Insert one row and return it with the id SQLite assigned.
    async fn insert(&self, create: QuoteCreate) -> Result<DbQuote, QuoteError>;

    /// Rows in the window described by `page`, ordered by ascending id.
    async fn list(&self, page: Page) -> Result<Vec<DbQuote>, QuoteError>;
}

/// SQLite-backed [`QuoteStore`].
///
/// Each call checks out one pooled connection and returns it when the call ends, whether
/// it succeeded or not.
#[derive(Clone)]
pub struct SqliteQuoteStore {
    pool: SqlitePool,
}

impl SqliteQuoteStore {
    /// Open the pool described by `cfg` and make sure the schema exists.
    pub async fn connect(cfg: &StorageConfig) -> Result<Self, QuoteError> {
        let mut connect_opts = SqliteConnectOptions::from_str(cfg.database_url.as_str())?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
        if !cfg.log_statements {
            connect_opts = connect_opts.disable_statement_logging();
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect_with(connect_opts)
            .await?;

        apply_schema(&pool).await?;

        info!(
            database_url = %cfg.database_url,
            max_connections = cfg.max_connections,
            "quote store initialized"
        );
        Ok(Self { pool })
    }

    /// Close the pool; later calls fail with a storage error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn insert(&self, create: QuoteCreate) -> Result<DbQuote, QuoteError> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, DbQuote>(
            r#"
        INSERT INTO quotes (author, text)
        VALUES (?, ?)
        RETURNING id, author, text
        "#,
        )
        .bind(create.author)
        .bind(create.text)
        .fetch_one(&mut *conn)
        .await?;

        debug!(id = row.id, "quote inserted");
        Ok(row)
    }

    async fn list(&self, page: Page) -> Result<Vec<DbQuote>, QuoteError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, DbQuote>(
            r#"
        SELECT id, author, text
        FROM quotes
        ORDER BY id ASC
        LIMIT ? OFFSET ?
        "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), QuoteError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
