use sea_orm::{
    ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
};
use uuid::Uuid;

use crate::{
    Category, CategoryKind, EngineError, NewCategory, ResultEngine, activities, categories,
    categories::{DEFAULT_CATEGORY_ICON, FALLBACK_CATEGORY_COLOR, SYSTEM_CATEGORIES},
    transactions,
    util::{
        is_unique_violation, normalize_category_display, normalize_category_key,
        normalize_optional_text, validate_color,
    },
    views::CATEGORY_VIEWS,
};

use super::{Engine, with_tx};

/// Load a category and check it can hold rows of `kind`.
pub(super) async fn require_category<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    kind: CategoryKind,
) -> ResultEngine<categories::Model> {
    let model = categories::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| EngineError::InvalidCategory(format!("category {id} does not exist")))?;
    if model.kind != kind.as_str() {
        return Err(EngineError::InvalidCategory(format!(
            "category '{}' is a {} category, expected {}",
            model.name,
            model.kind,
            kind.as_str()
        )));
    }
    Ok(model)
}

async fn find_by_key<C: ConnectionTrait>(
    conn: &C,
    kind: CategoryKind,
    name_norm: &str,
) -> ResultEngine<Option<categories::Model>> {
    Ok(categories::Entity::find()
        .filter(categories::Column::Kind.eq(kind.as_str()))
        .filter(categories::Column::NameNorm.eq(name_norm))
        .one(conn)
        .await?)
}

impl Engine {
    /// Insert the built-in categories that are not in the store yet.
    pub(super) async fn seed_system_categories(&self) -> ResultEngine<()> {
        let created = with_tx!(self, |db_tx| {
            let mut created = 0usize;
            for seed in SYSTEM_CATEGORIES {
                let name_norm = normalize_category_key(seed.name)?;
                if find_by_key(&db_tx, seed.kind, &name_norm).await?.is_some() {
                    continue;
                }
                categories::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    name: ActiveValue::Set(seed.name.to_string()),
                    name_norm: ActiveValue::Set(name_norm),
                    kind: ActiveValue::Set(seed.kind.as_str().to_string()),
                    icon: ActiveValue::Set(seed.icon.to_string()),
                    color: ActiveValue::Set(seed.color.to_string()),
                    is_system: ActiveValue::Set(true),
                }
                .insert(&db_tx)
                .await?;
                created += 1;
            }
            Ok(created)
        })?;
        if created > 0 {
            tracing::info!(created, "seeded system categories");
        }
        Ok(())
    }

    /// Categories ordered by kind, system ones first, then by name.
    pub async fn list_categories(&self, kind: Option<CategoryKind>) -> ResultEngine<Vec<Category>> {
        let mut query = categories::Entity::find();
        if let Some(kind) = kind {
            query = query.filter(categories::Column::Kind.eq(kind.as_str()));
        }
        query
            .order_by_asc(categories::Column::Kind)
            .order_by_desc(categories::Column::IsSystem)
            .order_by_asc(categories::Column::Name)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }

    /// Create a user category. Names are unique per kind, ignoring case,
    /// accents and punctuation.
    pub async fn create_category(&self, input: NewCategory) -> ResultEngine<Category> {
        let name = normalize_category_display(&input.name)?;
        let name_norm = normalize_category_key(&name)?;
        let icon = normalize_optional_text(input.icon.as_deref())
            .unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string());
        let color = match input.color.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(color) => validate_color(color)?,
            None => FALLBACK_CATEGORY_COLOR.to_string(),
        };

        let category = with_tx!(self, |db_tx| {
            if let Some(existing) = find_by_key(&db_tx, input.kind, &name_norm).await? {
                return Err(EngineError::ExistingKey(existing.name));
            }

            let model = categories::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(name.clone()),
                name_norm: ActiveValue::Set(name_norm),
                kind: ActiveValue::Set(input.kind.as_str().to_string()),
                icon: ActiveValue::Set(icon),
                color: ActiveValue::Set(color),
                is_system: ActiveValue::Set(false),
            }
            .insert(&db_tx)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    EngineError::ExistingKey(name.clone())
                } else {
                    EngineError::Database(err)
                }
            })?;
            Category::try_from(model)
        })?;

        self.views.invalidate(CATEGORY_VIEWS);
        tracing::info!(id = %category.id, kind = category.kind.as_str(), "category created");
        Ok(category)
    }

    /// Delete a user category.
    ///
    /// System categories and categories still referenced by an activity or a
    /// transaction are refused with [`EngineError::Forbidden`].
    pub async fn delete_category(&self, id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = categories::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound(format!("category {id}")))?;
            if model.is_system {
                return Err(EngineError::Forbidden(format!(
                    "system category '{}' cannot be deleted",
                    model.name
                )));
            }

            let activities = activities::Entity::find()
                .filter(activities::Column::CategoryId.eq(id))
                .count(&db_tx)
                .await?;
            let transactions = transactions::Entity::find()
                .filter(transactions::Column::CategoryId.eq(id))
                .count(&db_tx)
                .await?;
            if activities + transactions > 0 {
                return Err(EngineError::Forbidden(format!(
                    "category '{}' is still in use",
                    model.name
                )));
            }

            categories::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok(())
        })?;

        self.views.invalidate(CATEGORY_VIEWS);
        tracing::info!(%id, "category deleted");
        Ok(())
    }
}
