//! PostgreSQL persistence for extracted records
//!
//! Records are written with one transactional batch insert: either every
//! row lands or the transaction rolls back. The target table is taken from
//! configuration and validated as a plain identifier before it is
//! interpolated into SQL.

use crate::app::models::FinancialRecord;
use crate::app::services::sheet_processor::RecordSink;
use crate::config::DatabaseConfig;
use crate::{Error, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info};

/// Record sink backed by a PostgreSQL table
#[derive(Debug, Clone)]
pub struct PostgresSink {
    pool: PgPool,
    table: String,
}

impl PostgresSink {
    /// Connect to the database described by the configuration and verify
    /// the connection with a round trip
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        config.validate()?;

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.connection_url())
            .await
            .map_err(|e| Error::database("Failed to connect to database", e))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| Error::database("Database health check failed", e))?;

        info!(
            "Database connection established to {}:{}/{}",
            config.host, config.port, config.database
        );

        Ok(Self {
            pool,
            table: config.table.clone(),
        })
    }

    /// Create a sink over an existing pool (used by tests and the server)
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} \
             (acc_type, application_id, att_id, att_name, att_value, customer_id, year, year_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            self.table
        )
    }

    async fn insert_record(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sql: &str,
        record: &FinancialRecord,
    ) -> Result<()> {
        sqlx::query(sql)
            .bind(record.account_type.as_db_value())
            .bind(record.application_id)
            .bind(record.attribute_id)
            .bind(&record.attribute_name)
            .bind(record.value)
            .bind(record.customer_id)
            .bind(record.calendar_year)
            .bind(record.year_ordinal)
            .execute(&mut **tx)
            .await
            .map_err(|e| Error::database("Failed to insert record", e))?;
        Ok(())
    }
}

impl RecordSink for PostgresSink {
    async fn persist(&self, records: &[FinancialRecord]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Error::database("Failed to start transaction", e))?;

        let sql = self.insert_sql();
        for record in records {
            self.insert_record(&mut tx, &sql, record).await?;
        }

        tx.commit()
            .await
            .map_err(|e| Error::database("Failed to commit batch insert", e))?;

        debug!("Inserted {} row(s) into {}", records.len(), self.table);
        Ok(records.len() as u64)
    }
}
