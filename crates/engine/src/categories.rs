//! Categories group activities, incomes and expenses.
//!
//! System categories are seeded when the engine starts and survive a data
//! clear; user categories can be created and deleted freely as long as no
//! row references them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Label used by reports when a row points at a category that is gone.
pub const FALLBACK_CATEGORY_NAME: &str = "أخرى";
/// Color used by reports when a row points at a category that is gone.
pub const FALLBACK_CATEGORY_COLOR: &str = "#64748b";
pub(crate) const DEFAULT_CATEGORY_ICON: &str = "Tag";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Activity,
    Income,
    Expense,
}

impl CategoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for CategoryKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "activity" => Ok(Self::Activity),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidCategory(format!(
                "invalid category kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
    pub icon: String,
    pub color: String,
    pub is_system: bool,
}

/// Input for a user defined category.
#[derive(Clone, Debug)]
pub struct NewCategory {
    pub name: String,
    pub kind: CategoryKind,
    pub icon: Option<String>,
    pub color: Option<String>,
}

pub(crate) struct SystemCategory {
    pub(crate) name: &'static str,
    pub(crate) kind: CategoryKind,
    pub(crate) icon: &'static str,
    pub(crate) color: &'static str,
}

const fn system(
    name: &'static str,
    kind: CategoryKind,
    icon: &'static str,
    color: &'static str,
) -> SystemCategory {
    SystemCategory {
        name,
        kind,
        icon,
        color,
    }
}

pub(crate) const SYSTEM_CATEGORIES: &[SystemCategory] = &[
    system("عمل", CategoryKind::Activity, "Briefcase", "#6366f1"),
    system("دراسة", CategoryKind::Activity, "BookOpen", "#8b5cf6"),
    system("رياضة", CategoryKind::Activity, "Dumbbell", "#22c55e"),
    system("قراءة", CategoryKind::Activity, "Book", "#f59e0b"),
    system("استراحة", CategoryKind::Activity, "Coffee", "#ec4899"),
    system("أخرى", CategoryKind::Activity, "MoreHorizontal", "#64748b"),
    system("راتب", CategoryKind::Income, "Banknote", "#22c55e"),
    system("مكافأة", CategoryKind::Income, "Gift", "#10b981"),
    system("استثمار", CategoryKind::Income, "TrendingUp", "#14b8a6"),
    system("دخل آخر", CategoryKind::Income, "Wallet", "#06b6d4"),
    system("طعام", CategoryKind::Expense, "UtensilsCrossed", "#f59e0b"),
    system("مواصلات", CategoryKind::Expense, "Car", "#ef4444"),
    system("تسوق", CategoryKind::Expense, "ShoppingBag", "#ec4899"),
    system("فواتير", CategoryKind::Expense, "Receipt", "#8b5cf6"),
    system("ترفيه", CategoryKind::Expense, "Gamepad2", "#6366f1"),
    system("صحة", CategoryKind::Expense, "Heart", "#f43f5e"),
    system("تعليم", CategoryKind::Expense, "GraduationCap", "#0ea5e9"),
    system("أخرى", CategoryKind::Expense, "MoreHorizontal", "#64748b"),
];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub name_norm: String,
    pub kind: String,
    pub icon: String,
    pub color: String,
    pub is_system: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::activities::Entity")]
    Activities,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Category {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: model.id,
            kind: CategoryKind::try_from(model.kind.as_str())?,
            name: model.name,
            icon: model.icon,
            color: model.color,
            is_system: model.is_system,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_storage_string() {
        for kind in [
            CategoryKind::Activity,
            CategoryKind::Income,
            CategoryKind::Expense,
        ] {
            assert_eq!(CategoryKind::try_from(kind.as_str()).unwrap(), kind);
        }
        assert!(CategoryKind::try_from("transfer").is_err());
    }

    #[test]
    fn seeds_cover_every_kind() {
        for kind in [
            CategoryKind::Activity,
            CategoryKind::Income,
            CategoryKind::Expense,
        ] {
            assert!(SYSTEM_CATEGORIES.iter().any(|c| c.kind == kind));
        }
    }
}
