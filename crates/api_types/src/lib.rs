use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod category {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum CategoryKind {
        Activity,
        Income,
        Expense,
    }

    /// Query string of `GET /categories`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoryListQuery {
        pub kind: Option<CategoryKind>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryCreate {
        pub name: String,
        pub kind: CategoryKind,
        /// Icon name, defaults to `Tag`.
        pub icon: Option<String>,
        /// `#rgb` or `#rrggbb`.
        pub color: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: Uuid,
        pub name: String,
        pub kind: CategoryKind,
        pub icon: String,
        pub color: String,
        pub is_system: bool,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryListResponse {
        pub categories: Vec<CategoryView>,
    }
}

pub mod activity {
    use super::*;
    use crate::category::CategoryView;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ActivityStart {
        pub title: String,
        pub category_id: Uuid,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ActivityRate {
        /// 1 to 5.
        pub rating: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ActivityView {
        pub id: Uuid,
        pub title: String,
        pub description: Option<String>,
        pub category_id: Uuid,
        pub category: Option<CategoryView>,
        pub start_time: DateTime<Utc>,
        /// `None` while the activity is running.
        pub end_time: Option<DateTime<Utc>>,
        pub duration_minutes: Option<i64>,
        pub rating: Option<u8>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ActivityStarted {
        pub activity: ActivityView,
        /// The activity that was running and got stopped by this start.
        pub stopped: Option<ActivityView>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum StopStatus {
        Stopped,
        AlreadyStopped,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ActivityStopped {
        pub status: StopStatus,
        pub activity: ActivityView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ActivityListResponse {
        pub activities: Vec<ActivityView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CurrentActivityResponse {
        pub activity: Option<ActivityView>,
    }
}

pub mod transaction {
    use super::*;
    use crate::category::CategoryView;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        /// Decimal string, e.g. `"12.50"` or `"12,5"`. Must be positive.
        pub amount: String,
        pub kind: TransactionKind,
        pub category_id: Uuid,
        pub description: Option<String>,
        /// RFC3339 timestamp, including timezone offset. Defaults to now.
        pub date: Option<DateTime<FixedOffset>>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub amount_minor: i64,
        pub kind: TransactionKind,
        pub category_id: Uuid,
        pub category: Option<CategoryView>,
        pub description: Option<String>,
        pub date: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
    }
}

pub mod finance {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BalanceView {
        pub total_income_minor: i64,
        pub total_expense_minor: i64,
        pub balance_minor: i64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MonthlyStatsView {
        pub income_minor: i64,
        pub expense_minor: i64,
        pub balance_minor: i64,
    }
}

pub mod diary {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Mood {
        Happy,
        Neutral,
        Sad,
        Productive,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DiaryEntryNew {
        pub content: String,
        pub mood: Option<Mood>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DiaryEntryView {
        pub id: Uuid,
        pub content: String,
        pub mood: Option<Mood>,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DiaryListResponse {
        pub entries: Vec<DiaryEntryView>,
    }
}

pub mod settings {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Theme {
        Light,
        Dark,
        System,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SettingsView {
        pub username: String,
        pub language: String,
        pub theme: Theme,
        pub currency: String,
        pub monthly_budget_minor: i64,
    }

    /// Body of `PUT /settings`. Every field is overwritten.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettingsUpdate {
        pub username: String,
        pub language: String,
        pub theme: Theme,
        pub currency: String,
        /// Decimal string, `"0"` for no budget.
        pub monthly_budget: String,
    }
}

pub mod report {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{
        activity::ActivityView,
        diary::Mood,
        finance::{BalanceView, MonthlyStatsView},
    };

    /// One category of a breakdown. `value` is minor units for money and
    /// minutes for time.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BreakdownItemView {
        pub category_id: Uuid,
        pub name: String,
        pub color: String,
        pub value: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FinanceReportView {
        pub balance: BalanceView,
        pub monthly: MonthlyStatsView,
        pub transaction_count: usize,
        pub expense_breakdown: Vec<BreakdownItemView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ActivityStatsView {
        pub total_minutes: i64,
        pub total_hours: i64,
        pub activity_count: usize,
        /// Rounded to one decimal.
        pub average_rating: f64,
        pub today_minutes: i64,
        pub week_minutes: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ActivityReportView {
        pub stats: ActivityStatsView,
        pub time_breakdown: Vec<BreakdownItemView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DiaryReportView {
        pub entry_count: usize,
        pub monthly_entry_count: usize,
        pub mood_counts: BTreeMap<Mood, u32>,
        pub streak: u32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HomeView {
        pub username: String,
        pub currency: String,
        pub balance_minor: i64,
        pub monthly: MonthlyStatsView,
        pub monthly_budget_minor: i64,
        pub budget_remaining_minor: i64,
        pub today_minutes: i64,
        pub today_activity_count: usize,
        pub current_activity: Option<ActivityView>,
        pub week_diary_entries: usize,
    }
}

pub mod data {
    use super::*;
    use crate::{
        activity::ActivityView, category::CategoryView, diary::DiaryEntryView,
        settings::SettingsView, transaction::TransactionView,
    };

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExportView {
        pub exported_at: DateTime<Utc>,
        pub settings: SettingsView,
        pub diary_entries: Vec<DiaryEntryView>,
        pub activities: Vec<ActivityView>,
        pub transactions: Vec<TransactionView>,
        pub categories: Vec<CategoryView>,
    }

    /// Rows removed by `DELETE /data`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ClearedDataView {
        pub activities: u64,
        pub transactions: u64,
        pub diary_entries: u64,
        pub categories: u64,
    }
}
