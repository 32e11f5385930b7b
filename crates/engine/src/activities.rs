//! Activities track time spent per category.
//!
//! An activity is *open* while `end_time` is unset. Stopping it stamps
//! `end_time` and persists the duration in whole minutes; the duration is
//! never recomputed afterwards.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, ResultEngine, categories};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A 1..=5 rating given to a finished activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(MIN_RATING) || value > i64::from(MAX_RATING) {
            return Err(EngineError::InvalidRating(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {value}"
            )));
        }
        Ok(Self(value as u8))
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    /// Present when the activity was loaded together with its category.
    pub category: Option<Category>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Minutes between start and end, set when the activity is stopped.
    pub duration: Option<i64>,
    pub rating: Option<Rating>,
}

impl Activity {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    pub(crate) fn from_model(
        model: Model,
        category: Option<categories::Model>,
    ) -> ResultEngine<Self> {
        Ok(Self {
            id: model.id,
            title: model.title,
            description: model.description,
            category_id: model.category_id,
            category: category.map(Category::try_from).transpose()?,
            start_time: model.start_time,
            end_time: model.end_time,
            duration: model.duration,
            rating: model.rating.map(|r| Rating::try_from(i64::from(r))).transpose()?,
        })
    }
}

/// Whole minutes between `start` and `end`, halves rounded up, never negative.
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    (millis + 30_000).div_euclid(60_000).max(0)
}

/// Result of starting an activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StartedActivity {
    pub activity: Activity,
    /// The previously open activity, closed to make room for the new one.
    pub stopped: Option<Activity>,
}

/// Result of stopping an activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "activity", rename_all = "snake_case")]
pub enum StopOutcome {
    Stopped(Activity),
    /// The activity had already been stopped; nothing was written.
    AlreadyStopped(Activity),
}

impl StopOutcome {
    pub fn activity(&self) -> &Activity {
        match self {
            Self::Stopped(activity) | Self::AlreadyStopped(activity) => activity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    pub start_time: DateTimeUtc,
    pub end_time: Option<DateTimeUtc>,
    pub duration: Option<i64>,
    pub rating: Option<i16>,
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
