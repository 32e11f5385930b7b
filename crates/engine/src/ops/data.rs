use chrono::{DateTime, Utc};
use sea_orm::{QueryFilter, TransactionTrait, prelude::*};
use serde::Serialize;

use crate::{
    Activity, Category, DiaryEntry, ResultEngine, Settings, Transaction, View, activities,
    categories, diary, transactions,
};

use super::{Engine, with_tx};

/// Everything stored, as written by the export download.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportBundle {
    pub exported_at: DateTime<Utc>,
    pub settings: Settings,
    pub diary_entries: Vec<DiaryEntry>,
    pub activities: Vec<Activity>,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
}

/// Rows removed by [`Engine::clear_all_data`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClearedData {
    pub activities: u64,
    pub transactions: u64,
    pub diary_entries: u64,
    pub categories: u64,
}

impl Engine {
    /// Snapshot of every record kind.
    pub async fn export(&self) -> ResultEngine<ExportBundle> {
        let bundle = ExportBundle {
            exported_at: Utc::now(),
            settings: self.settings().await?,
            diary_entries: self.list_diary_entries().await?,
            activities: self.list_activities().await?,
            transactions: self.list_transactions().await?,
            categories: self.list_categories(None).await?,
        };
        tracing::info!(
            activities = bundle.activities.len(),
            transactions = bundle.transactions.len(),
            diary_entries = bundle.diary_entries.len(),
            "data exported"
        );
        Ok(bundle)
    }

    /// Delete activities, transactions, diary entries and user categories.
    ///
    /// Settings and system categories are kept.
    pub async fn clear_all_data(&self) -> ResultEngine<ClearedData> {
        let cleared = with_tx!(self, |db_tx| {
            let activities = activities::Entity::delete_many().exec(&db_tx).await?;
            let transactions = transactions::Entity::delete_many().exec(&db_tx).await?;
            let diary_entries = diary::Entity::delete_many().exec(&db_tx).await?;
            let categories = categories::Entity::delete_many()
                .filter(categories::Column::IsSystem.eq(false))
                .exec(&db_tx)
                .await?;
            Ok(ClearedData {
                activities: activities.rows_affected,
                transactions: transactions.rows_affected,
                diary_entries: diary_entries.rows_affected,
                categories: categories.rows_affected,
            })
        })?;

        self.views.invalidate(&View::ALL);
        tracing::warn!(
            activities = cleared.activities,
            transactions = cleared.transactions,
            diary_entries = cleared.diary_entries,
            categories = cleared.categories,
            "all data cleared"
        );
        Ok(cleared)
    }
}
