use std::collections::HashSet;
use std::fmt;

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, Statement,
    TransactionTrait,
};

use crate::config::StoreConfig;
use crate::entity::{log_run, source};
use crate::platform::Platform;
use crate::stats::RunStats;

#[derive(Debug)]
pub enum StoreError {
    Db(DbErr),
    /// A source with this channel_id already exists.
    DuplicateChannel(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Db(e) => write!(f, "Database error: {e}"),
            StoreError::DuplicateChannel(c) => write!(f, "Source already exists: {c}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Db(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbErr> for StoreError {
    fn from(e: DbErr) -> Self {
        StoreError::Db(e)
    }
}

/// Rows per `INSERT` when appending runs; 4 bind parameters each keeps every
/// statement well under the SQLite and Postgres parameter limits.
const RUN_INSERT_CHUNK: usize = 1000;

/// A source row to be inserted by an operator.
#[derive(Debug, Clone)]
pub struct NewSource {
    pub channel_id: String,
    pub platform: Platform,
    pub channel_name: String,
}

impl NewSource {
    pub fn new(
        channel_id: impl Into<String>,
        platform: Platform,
        channel_name: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            platform,
            channel_name: channel_name.into(),
        }
    }
}

/// Access to the `sources` and `logs_runs` tables.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect and bring the schema (and seed rows) up to date.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let db = Database::connect(&config.database_url).await?;
        Migrator::up(&db, None).await?;
        tracing::info!(database = %config.redacted_url(), "feed store ready");
        Ok(Self::new(db))
    }

    /// Expose the underlying DB connection for direct SeaORM queries.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Version string reported by the database server.
    pub async fn server_version(&self) -> Result<String, StoreError> {
        let backend = self.db.get_database_backend();
        let sql = match backend {
            DbBackend::Sqlite => "SELECT sqlite_version()",
            _ => "SELECT version()",
        };
        let row = self
            .db
            .query_one(Statement::from_string(backend, sql))
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("server version".to_string()))?;
        Ok(row.try_get_by_index::<String>(0)?)
    }

    // ---------- sources ----------

    pub async fn list_sources(&self) -> Result<Vec<source::Model>, StoreError> {
        let sources = source::Entity::find()
            .order_by_asc(source::Column::Id)
            .all(&self.db)
            .await?;
        Ok(sources)
    }

    pub async fn sources_by_platform(
        &self,
        platform: Platform,
    ) -> Result<Vec<source::Model>, StoreError> {
        let sources = source::Entity::find()
            .filter(source::Column::Platform.eq(platform.as_str()))
            .order_by_asc(source::Column::Id)
            .all(&self.db)
            .await?;
        Ok(sources)
    }

    pub async fn find_source(&self, channel_id: &str) -> Result<Option<source::Model>, StoreError> {
        let source = source::Entity::find()
            .filter(source::Column::ChannelId.eq(channel_id))
            .one(&self.db)
            .await?;
        Ok(source)
    }

    /// Count sources, optionally restricted to one platform.
    pub async fn count_sources(&self, platform: Option<Platform>) -> Result<u64, StoreError> {
        let mut query = source::Entity::find();
        if let Some(p) = platform {
            query = query.filter(source::Column::Platform.eq(p.as_str()));
        }
        Ok(query.count(&self.db).await?)
    }

    pub async fn add_source(&self, new: NewSource) -> Result<source::Model, StoreError> {
        let model = source::ActiveModel {
            channel_id: Set(new.channel_id.clone()),
            platform: Set(new.platform.as_str().to_owned()),
            channel_name: Set(new.channel_name),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                StoreError::DuplicateChannel(new.channel_id.clone())
            }
            _ => StoreError::Db(e),
        })?;

        tracing::info!(
            id = model.id,
            channel_id = %model.channel_id,
            platform = %model.platform,
            "added source"
        );
        Ok(model)
    }

    // ---------- run log ----------

    /// Append one `logs_runs` row per entry, all in a single transaction.
    /// Large batches are split into several `INSERT`s. Returns the number of rows written.
    pub async fn record_runs(&self, runs: &[RunStats]) -> Result<u64, StoreError> {
        if runs.is_empty() {
            return Ok(0);
        }

        let known = self.known_channels().await?;
        for run in runs {
            if !run.is_consistent() {
                tracing::warn!(
                    channel_id = %run.channel_id,
                    pulled = run.pulled,
                    kept = run.kept,
                    "run kept more items than it pulled"
                );
            }
            if !known.contains(run.channel_id.as_str()) {
                tracing::warn!(
                    channel_id = %run.channel_id,
                    platform = %run.platform,
                    "run does not match any configured source"
                );
            }
            if let Some(ref error) = run.error {
                tracing::debug!(channel_id = %run.channel_id, error = %error, "recording failed run");
            }
        }

        let txn = self.db.begin().await?;
        for chunk in runs.chunks(RUN_INSERT_CHUNK) {
            let rows = chunk.iter().map(|run| log_run::ActiveModel {
                channel_id: Set(Some(run.channel_id.clone())),
                platform: Set(Some(run.platform.as_str().to_owned())),
                pulled: Set(run.pulled),
                kept: Set(run.kept),
                ..Default::default()
            });
            if let Err(e) = log_run::Entity::insert_many(rows).exec(&txn).await {
                tracing::error!(error = %e, "failed to insert run log entries");
                txn.rollback().await?;
                return Err(e.into());
            }
        }
        txn.commit().await?;

        let written = runs.len() as u64;
        tracing::info!(count = written, "saved run log entries");
        Ok(written)
    }

    pub async fn list_runs(&self) -> Result<Vec<log_run::Model>, StoreError> {
        let runs = log_run::Entity::find()
            .order_by_asc(log_run::Column::Id)
            .all(&self.db)
            .await?;
        Ok(runs)
    }

    pub async fn runs_for_channel(&self, channel_id: &str) -> Result<Vec<log_run::Model>, StoreError> {
        let runs = log_run::Entity::find()
            .filter(log_run::Column::ChannelId.eq(channel_id))
            .order_by_asc(log_run::Column::Id)
            .all(&self.db)
            .await?;
        Ok(runs)
    }

    /// Channel ids a run may be logged under: every source's channel_id, plus the
    /// endpoint name of elfa sources.
    async fn known_channels(&self) -> Result<HashSet<String>, StoreError> {
        let mut known = HashSet::new();
        for source in self.list_sources().await? {
            if let Some(name) = source.endpoint_name() {
                known.insert(name.to_owned());
            }
            known.insert(source.channel_id);
        }
        Ok(known)
    }
}
