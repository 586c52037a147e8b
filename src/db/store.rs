use crate::config::DatabaseConfig;
use crate::db::models::DbItem;
use crate::db::payload::ItemPayload;
use crate::db::schema::SQLITE_INIT;
use crate::error::ItemstoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{SqliteConnection, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

const SELECT_ALL: &str = "SELECT id, name, description FROM items";
const SELECT_BY_ID: &str = "SELECT id, name, description FROM items WHERE id = ?";

/// Data-access layer for the `items` table.
///
/// Cloning is cheap: every clone shares the same connection pool, which is
/// opened by [`ItemStore::connect`] and released by [`ItemStore::close`].
///
/// Update and delete are two statements each. By default they run back to back
/// on one pooled connection with no transaction, so concurrent requests on the
/// same id may interleave between the two steps. With `transactional` set, each
/// pair runs inside a single `BEGIN ... COMMIT`.
#[derive(Debug, Clone)]
pub struct ItemStore {
    pool: SqlitePool,
    transactional: bool,
}

impl ItemStore {
    /// Open the pool and ensure the schema exists. Any failure here is fatal for
    /// the caller: the server must not accept traffic without a confirmed schema.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, ItemstoreError> {
        let connect_opts = SqliteConnectOptions::from_str(cfg.url.as_str())?
            .create_if_missing(true)
            .busy_timeout(cfg.busy_timeout())
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

        apply_schema(&pool).await?;

        info!(
            database_url = %cfg.url,
            transactional_mutations = cfg.transactional_mutations,
            "ItemStore initialized"
        );
        Ok(Self::from_pool(pool, cfg.transactional_mutations))
    }

    /// Wrap an existing pool. The schema is assumed to be in place already.
    pub fn from_pool(pool: SqlitePool, transactional: bool) -> Self {
        Self {
            pool,
            transactional,
        }
    }

    pub async fn create(&self, payload: ItemPayload) -> Result<DbItem, ItemstoreError> {
        let item = sqlx::query_as::<_, DbItem>(
            r"
        INSERT INTO items (name, description)
        VALUES (?, ?)
        RETURNING id, name, description
        ",
        )
        .bind(payload.name)
        .bind(payload.description)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = item.id, "item created");
        Ok(item)
    }

    pub async fn get(&self, id: i64) -> Result<DbItem, ItemstoreError> {
        sqlx::query_as::<_, DbItem>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ItemstoreError::NotFound(id))
    }

    /// All rows in storage order. No ordering is guaranteed.
    pub async fn list(&self) -> Result<Vec<DbItem>, ItemstoreError> {
        let rows = sqlx::query_as::<_, DbItem>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Write first, then re-read. A write that matches zero rows is not an error
    /// by itself; only the confirming read reports `NotFound`.
    pub async fn update(&self, id: i64, payload: ItemPayload) -> Result<DbItem, ItemstoreError> {
        let row = if self.transactional {
            let mut tx = self.pool.begin().await?;
            let row = update_in(&mut tx, id, payload).await?;
            tx.commit().await?;
            row
        } else {
            let mut conn = self.pool.acquire().await?;
            update_in(&mut conn, id, payload).await?
        };

        row.ok_or(ItemstoreError::NotFound(id))
    }

    /// Read first to capture the last-known value, then delete. When the read
    /// finds nothing the DELETE is never issued.
    pub async fn delete(&self, id: i64) -> Result<DbItem, ItemstoreError> {
        let row = if self.transactional {
            let mut tx = self.pool.begin().await?;
            let row = delete_in(&mut tx, id).await?;
            tx.commit().await?;
            row
        } else {
            let mut conn = self.pool.acquire().await?;
            delete_in(&mut conn, id).await?
        };

        row.ok_or(ItemstoreError::NotFound(id))
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("ItemStore closed");
    }
}

async fn fetch_in(conn: &mut SqliteConnection, id: i64) -> Result<Option<DbItem>, sqlx::Error> {
    sqlx::query_as::<_, DbItem>(SELECT_BY_ID)
        .bind(id)
        .fetch_optional(conn)
        .await
}

async fn update_in(
    conn: &mut SqliteConnection,
    id: i64,
    payload: ItemPayload,
) -> Result<Option<DbItem>, sqlx::Error> {
    let res = sqlx::query(
        r"
        UPDATE items
        SET name = ?, description = ?
        WHERE id = ?
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    debug!(id, affected = res.rows_affected(), "item update written");
    fetch_in(conn, id).await
}

async fn delete_in(conn: &mut SqliteConnection, id: i64) -> Result<Option<DbItem>, sqlx::Error> {
    let Some(item) = fetch_in(&mut *conn, id).await? else {
        return Ok(None);
    };

    let res = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    debug!(id, affected = res.rows_affected(), "item deleted");
    Ok(Some(item))
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), ItemstoreError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
