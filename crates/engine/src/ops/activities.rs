use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    Activity, CategoryKind, EngineError, Rating, ResultEngine, StartedActivity, StopOutcome,
    activities, categories, duration_minutes,
    util::{is_unique_violation, normalize_optional_text, normalize_required_text},
    views::{ACTIVITY_VIEWS, RATING_VIEWS},
};

use super::{Engine, categories::require_category, with_tx};

/// Stamp `end_time` and the rounded duration on an open activity.
async fn close_activity<C: ConnectionTrait>(
    conn: &C,
    model: activities::Model,
    category: Option<categories::Model>,
    now: DateTime<Utc>,
) -> ResultEngine<Activity> {
    let duration = duration_minutes(model.start_time, now);
    let mut active: activities::ActiveModel = model.into();
    active.end_time = ActiveValue::Set(Some(now));
    active.duration = ActiveValue::Set(Some(duration));
    let model = active.update(conn).await?;
    Activity::from_model(model, category)
}

async fn find_with_category<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> ResultEngine<(activities::Model, Option<categories::Model>)> {
    activities::Entity::find_by_id(id)
        .find_also_related(categories::Entity)
        .one(conn)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("activity {id}")))
}

impl Engine {
    /// Start a new activity now.
    ///
    /// The activity that is still open, if any, is stopped in the same store
    /// transaction and returned alongside the new one. A concurrent start that
    /// slips past the check hits the single-open index and is reported as
    /// [`EngineError::ExistingKey`].
    pub async fn start_activity(
        &self,
        title: &str,
        category_id: Uuid,
        description: Option<&str>,
    ) -> ResultEngine<StartedActivity> {
        let title = normalize_required_text(title, "activity title")?;
        let description = normalize_optional_text(description);

        let started = with_tx!(self, |db_tx| {
            let category = require_category(&db_tx, category_id, CategoryKind::Activity).await?;
            let now = Utc::now();

            let open = activities::Entity::find()
                .filter(activities::Column::EndTime.is_null())
                .find_also_related(categories::Entity)
                .one(&db_tx)
                .await?;
            let stopped = match open {
                Some((model, open_category)) => {
                    Some(close_activity(&db_tx, model, open_category, now).await?)
                }
                None => None,
            };

            let model = activities::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                title: ActiveValue::Set(title),
                description: ActiveValue::Set(description),
                category_id: ActiveValue::Set(category_id),
                start_time: ActiveValue::Set(now),
                end_time: ActiveValue::Set(None),
                duration: ActiveValue::Set(None),
                rating: ActiveValue::Set(None),
            }
            .insert(&db_tx)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    EngineError::ExistingKey("open activity".to_string())
                } else {
                    EngineError::Database(err)
                }
            })?;

            Ok(StartedActivity {
                activity: Activity::from_model(model, Some(category))?,
                stopped,
            })
        })?;

        self.views.invalidate(ACTIVITY_VIEWS);
        if let Some(stopped) = &started.stopped {
            tracing::info!(id = %stopped.id, duration = ?stopped.duration, "open activity stopped");
        }
        tracing::info!(id = %started.activity.id, "activity started");
        Ok(started)
    }

    /// Stop an activity now. Stopping an already stopped activity changes
    /// nothing and is reported as [`StopOutcome::AlreadyStopped`].
    pub async fn stop_activity(&self, id: Uuid) -> ResultEngine<StopOutcome> {
        let outcome = with_tx!(self, |db_tx| {
            let (model, category) = find_with_category(&db_tx, id).await?;
            if model.end_time.is_some() {
                Ok(StopOutcome::AlreadyStopped(Activity::from_model(
                    model, category,
                )?))
            } else {
                let activity = close_activity(&db_tx, model, category, Utc::now()).await?;
                Ok(StopOutcome::Stopped(activity))
            }
        })?;

        if let StopOutcome::Stopped(activity) = &outcome {
            self.views.invalidate(ACTIVITY_VIEWS);
            tracing::info!(id = %activity.id, duration = ?activity.duration, "activity stopped");
        }
        Ok(outcome)
    }

    /// Set or overwrite the rating of an activity.
    pub async fn rate_activity(&self, id: Uuid, rating: i64) -> ResultEngine<Activity> {
        let rating = Rating::try_from(rating)?;
        let activity = with_tx!(self, |db_tx| {
            let (model, category) = find_with_category(&db_tx, id).await?;
            let mut active: activities::ActiveModel = model.into();
            active.rating = ActiveValue::Set(Some(i16::from(rating.get())));
            let model = active.update(&db_tx).await?;
            Activity::from_model(model, category)
        })?;

        self.views.invalidate(RATING_VIEWS);
        tracing::info!(%id, rating = rating.get(), "activity rated");
        Ok(activity)
    }

    pub async fn delete_activity(&self, id: Uuid) -> ResultEngine<()> {
        let result = activities::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("activity {id}")));
        }

        self.views.invalidate(ACTIVITY_VIEWS);
        tracing::info!(%id, "activity deleted");
        Ok(())
    }

    /// All activities with their category, most recent first.
    pub async fn list_activities(&self) -> ResultEngine<Vec<Activity>> {
        activities::Entity::find()
            .find_also_related(categories::Entity)
            .order_by_desc(activities::Column::StartTime)
            .all(&self.database)
            .await?
            .into_iter()
            .map(|(model, category)| Activity::from_model(model, category))
            .collect()
    }

    /// The open activity, if any.
    pub async fn current_activity(&self) -> ResultEngine<Option<Activity>> {
        activities::Entity::find()
            .filter(activities::Column::EndTime.is_null())
            .find_also_related(categories::Entity)
            .one(&self.database)
            .await?
            .map(|(model, category)| Activity::from_model(model, category))
            .transpose()
    }
}
