use chrono::Utc;
use sea_orm::{ActiveValue, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    DiaryEntry, EngineError, Mood, ResultEngine, diary, util::normalize_required_text,
    views::DIARY_VIEWS,
};

use super::Engine;

impl Engine {
    /// Write a diary entry stamped with the current instant.
    pub async fn create_diary_entry(
        &self,
        content: &str,
        mood: Option<Mood>,
    ) -> ResultEngine<DiaryEntry> {
        let content = normalize_required_text(content, "diary content")?;
        let model = diary::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            content: ActiveValue::Set(content),
            mood: ActiveValue::Set(mood.map(|m| m.as_str().to_string())),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&self.database)
        .await?;
        let entry = DiaryEntry::try_from(model)?;

        self.views.invalidate(DIARY_VIEWS);
        tracing::info!(id = %entry.id, mood = ?entry.mood, "diary entry created");
        Ok(entry)
    }

    pub async fn delete_diary_entry(&self, id: Uuid) -> ResultEngine<()> {
        let result = diary::Entity::delete_by_id(id).exec(&self.database).await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("diary entry {id}")));
        }

        self.views.invalidate(DIARY_VIEWS);
        tracing::info!(%id, "diary entry deleted");
        Ok(())
    }

    /// All entries, newest first.
    pub async fn list_diary_entries(&self) -> ResultEngine<Vec<DiaryEntry>> {
        diary::Entity::find()
            .order_by_desc(diary::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(DiaryEntry::try_from)
            .collect()
    }
}
