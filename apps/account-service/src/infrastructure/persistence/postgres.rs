//! `PostgreSQL` account store.
//!
//! Uses `sqlx` with a `PgPool`. Cancellation and deadlines are whatever the
//! caller's future carries; the store imposes none of its own.
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE accounts (
//!     id BIGSERIAL PRIMARY KEY,
//!     owner VARCHAR NOT NULL,
//!     balance BIGINT NOT NULL,
//!     currency VARCHAR NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! CREATE INDEX ON accounts (owner);
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::error::ErrorKind;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::application::ports::{
    AccountStorePort, CreateAccountParams, ListAccountsParams, StoreError,
};
use crate::config::DatabaseConfig;
use crate::domain::account::{Account, Currency};

const CREATE_ACCOUNT: &str = "INSERT INTO accounts (owner, balance, currency) \
     VALUES ($1, $2, $3) \
     RETURNING id, owner, balance, currency";

const GET_ACCOUNT: &str = "SELECT id, owner, balance, currency FROM accounts \
     WHERE id = $1 LIMIT 1";

const LIST_ACCOUNTS: &str = "SELECT id, owner, balance, currency FROM accounts \
     ORDER BY id LIMIT $1 OFFSET $2";

/// Row shape of the `accounts` table.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    owner: String,
    balance: i64,
    currency: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = StoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let currency = row
            .currency
            .parse::<Currency>()
            .map_err(|e| StoreError::Decode(format!("account {}: {e}", row.id)))?;

        Ok(Self {
            id: row.id,
            owner: row.owner,
            balance: row.balance,
            currency,
        })
    }
}

/// Map a `sqlx` error onto the port's error set.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::RowNotFound => StoreError::RowNotFound,
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(err.to_string()),
        sqlx::Error::Database(db)
            if matches!(
                db.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) =>
        {
            StoreError::ConstraintViolation(err.to_string())
        }
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. } => StoreError::Decode(err.to_string()),
        _ => StoreError::Backend(err.to_string()),
    }
}

/// `PostgreSQL` implementation of [`AccountStorePort`].
#[derive(Debug, Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the SSL mode is unknown or the database is unreachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let ssl_mode = config
            .sslmode
            .parse::<PgSslMode>()
            .map_err(map_sqlx_error)?;

        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
            .ssl_mode(ssl_mode);

        let pool = PgPoolOptions::new()
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "Connected to PostgreSQL"
        );

        Ok(Self::new(pool))
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AccountStorePort for PostgresAccountStore {
    async fn create_account(&self, params: CreateAccountParams) -> Result<Account, StoreError> {
        sqlx::query_as::<_, AccountRow>(CREATE_ACCOUNT)
            .bind(params.owner)
            .bind(params.balance)
            .bind(params.currency.code())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .try_into()
    }

    async fn get_account(&self, id: i64) -> Result<Account, StoreError> {
        sqlx::query_as::<_, AccountRow>(GET_ACCOUNT)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .try_into()
    }

    async fn list_accounts(&self, params: ListAccountsParams) -> Result<Vec<Account>, StoreError> {
        sqlx::query_as::<_, AccountRow>(LIST_ACCOUNTS)
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .into_iter()
            .map(Account::try_from)
            .collect()
    }
}
