//! Ledger rows.
//!
//! Amounts are always stored positive; the kind carries the direction.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, CategoryKind, EngineError, MoneyCents, ResultEngine, categories};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Kind of category a transaction of this kind must point at.
    pub fn category_kind(self) -> CategoryKind {
        match self {
            Self::Income => CategoryKind::Income,
            Self::Expense => CategoryKind::Expense,
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidAmount(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: MoneyCents,
    pub kind: TransactionKind,
    pub category_id: Uuid,
    /// Present when the transaction was loaded together with its category.
    pub category: Option<Category>,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn from_model(
        model: Model,
        category: Option<categories::Model>,
    ) -> ResultEngine<Self> {
        Ok(Self {
            id: model.id,
            amount: MoneyCents::new(model.amount_minor),
            kind: TransactionKind::try_from(model.kind.as_str())?,
            category_id: model.category_id,
            category: category.map(Category::try_from).transpose()?,
            description: model.description,
            date: model.date,
        })
    }
}

/// Input for [`Engine::create_transaction`](crate::Engine::create_transaction).
#[derive(Clone, Debug)]
pub struct NewTransaction {
    pub amount: MoneyCents,
    pub kind: TransactionKind,
    pub category_id: Uuid,
    pub description: Option<String>,
    /// Defaults to the creation instant.
    pub date: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub amount_minor: i64,
    pub kind: String,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Category,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
