//! Initial schema migration.
//!
//! Creates the complete schema for Lifeboard:
//!
//! - `categories`: activity/income/expense categories (seeded + user defined)
//! - `activities`: time tracking entries, at most one open at a time
//! - `transactions`: income/expense ledger
//! - `diary_entries`: free text entries with an optional mood
//! - `settings`: singleton configuration row

use sea_orm::{ConnectionTrait, DbBackend, Statement};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Name,
    NameNorm,
    Kind,
    Icon,
    Color,
    IsSystem,
}

#[derive(Iden)]
enum Activities {
    Table,
    Id,
    Title,
    Description,
    CategoryId,
    StartTime,
    EndTime,
    Duration,
    Rating,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    AmountMinor,
    Kind,
    CategoryId,
    Description,
    Date,
}

#[derive(Iden)]
enum DiaryEntries {
    Table,
    Id,
    Content,
    Mood,
    CreatedAt,
}

#[derive(Iden)]
enum Settings {
    Table,
    Id,
    Username,
    Language,
    Theme,
    Currency,
    MonthlyBudgetMinor,
}

const SINGLE_OPEN_ACTIVITY_INDEX: &str = "idx-activities-single-open";

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Categories
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::NameNorm).string().not_null())
                    .col(ColumnDef::new(Categories::Kind).string().not_null())
                    .col(ColumnDef::new(Categories::Icon).string().not_null())
                    .col(ColumnDef::new(Categories::Color).string().not_null())
                    .col(
                        ColumnDef::new(Categories::IsSystem)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-categories-kind-name_norm-unique")
                    .table(Categories::Table)
                    .col(Categories::Kind)
                    .col(Categories::NameNorm)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Activities
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Activities::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Activities::Title).string().not_null())
                    .col(ColumnDef::new(Activities::Description).string())
                    .col(ColumnDef::new(Activities::CategoryId).blob().not_null())
                    .col(ColumnDef::new(Activities::StartTime).timestamp().not_null())
                    .col(ColumnDef::new(Activities::EndTime).timestamp())
                    .col(ColumnDef::new(Activities::Duration).big_integer())
                    .col(ColumnDef::new(Activities::Rating).small_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-activities-category_id")
                            .from(Activities::Table, Activities::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-activities-start_time")
                    .table(Activities::Table)
                    .col(Activities::StartTime)
                    .to_owned(),
            )
            .await?;

        // At most one activity may be open (end_time IS NULL). The indexed
        // expression is constant over the partial index, so a second open row
        // violates uniqueness.
        let db = manager.get_connection();
        let backend = db.get_database_backend();
        if matches!(backend, DbBackend::Sqlite | DbBackend::Postgres) {
            db.execute(Statement::from_string(
                backend,
                format!(
                    "CREATE UNIQUE INDEX IF NOT EXISTS \"{SINGLE_OPEN_ACTIVITY_INDEX}\" \
                     ON activities ((end_time IS NULL)) WHERE end_time IS NULL;"
                ),
            ))
            .await?;
        }

        // ───────────────────────────────────────────────────────────────────
        // 3. Transactions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Kind).string().not_null())
                    .col(ColumnDef::new(Transactions::CategoryId).blob().not_null())
                    .col(ColumnDef::new(Transactions::Description).string())
                    .col(ColumnDef::new(Transactions::Date).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-category_id")
                            .from(Transactions::Table, Transactions::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-date")
                    .table(Transactions::Table)
                    .col(Transactions::Date)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Diary entries
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(DiaryEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DiaryEntries::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DiaryEntries::Content).text().not_null())
                    .col(ColumnDef::new(DiaryEntries::Mood).string())
                    .col(
                        ColumnDef::new(DiaryEntries::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Settings
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Settings::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Settings::Username).string().not_null())
                    .col(ColumnDef::new(Settings::Language).string().not_null())
                    .col(ColumnDef::new(Settings::Theme).string().not_null())
                    .col(ColumnDef::new(Settings::Currency).string().not_null())
                    .col(
                        ColumnDef::new(Settings::MonthlyBudgetMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Settings::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DiaryEntries::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activities::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
