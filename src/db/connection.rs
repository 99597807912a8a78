//! Database connection pool and utility functions.

use crate::config::DatabaseConfig;
use crate::entities::{emp, prelude::*, skill};
use sea_orm::sea_query::Index;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema,
};
use std::time::Duration;
use tracing::log::LevelFilter;

/// Create a new database connection with configured pool settings.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(config.sqlx_logging)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Create the tables and unique indexes if they do not exist yet.
///
/// Table definitions are derived from the entities, so this works for both
/// PostgreSQL and SQLite.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut tables = [
        schema.create_table_from_entity(Emps),
        schema.create_table_from_entity(Skills),
        schema.create_table_from_entity(EmpNumCounters),
    ];
    for table in tables.iter_mut() {
        table.if_not_exists();
        db.execute(backend.build(&*table)).await?;
    }

    // One skill per type and employee; one id number per tenant.
    let indexes = [
        Index::create()
            .name("uk_skill_emp_type")
            .table(Skills)
            .col(skill::Column::EmpId)
            .col(skill::Column::SkillTypeId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("uk_emp_tenant_id_num")
            .table(Emps)
            .col(emp::Column::TenantId)
            .col(emp::Column::IdNum)
            .unique()
            .if_not_exists()
            .to_owned(),
    ];
    for index in &indexes {
        db.execute(backend.build(index)).await?;
    }

    Ok(())
}

/// Get record counts for all tables.
pub async fn get_table_counts(db: &DatabaseConnection) -> Result<TableCounts, DbErr> {
    let emps = Emps::find().count(db).await?;
    let skills = Skills::find().count(db).await?;

    Ok(TableCounts { emps, skills })
}

/// Table record counts.
#[derive(Debug, Clone)]
pub struct TableCounts {
    pub emps: u64,
    pub skills: u64,
}
