use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, MoneyCents, NewTransaction, ResultEngine, Transaction, categories,
    reports::{self, Balance, MonthlyStats},
    transactions,
    util::normalize_optional_text,
    views::FINANCE_VIEWS,
};

use super::{Engine, categories::require_category, with_tx};

impl Engine {
    /// Record an income or an expense.
    ///
    /// The amount must be positive and at most [`MoneyCents::MAX_AMOUNT`]; the
    /// category must be of the same kind as the transaction. `date` defaults
    /// to now.
    pub async fn create_transaction(&self, input: NewTransaction) -> ResultEngine<Transaction> {
        if !input.amount.is_positive() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be positive, got {}",
                input.amount
            )));
        }
        if input.amount > MoneyCents::MAX_AMOUNT {
            return Err(EngineError::InvalidAmount(format!(
                "amount must not exceed {}, got {}",
                MoneyCents::MAX_AMOUNT,
                input.amount
            )));
        }
        let description = normalize_optional_text(input.description.as_deref());
        let date = input.date.unwrap_or_else(Utc::now);

        let transaction = with_tx!(self, |db_tx| {
            let category =
                require_category(&db_tx, input.category_id, input.kind.category_kind()).await?;

            let model = transactions::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                amount_minor: ActiveValue::Set(input.amount.cents()),
                kind: ActiveValue::Set(input.kind.as_str().to_string()),
                category_id: ActiveValue::Set(input.category_id),
                description: ActiveValue::Set(description),
                date: ActiveValue::Set(date),
            }
            .insert(&db_tx)
            .await?;
            Transaction::from_model(model, Some(category))
        })?;

        self.views.invalidate(FINANCE_VIEWS);
        tracing::info!(
            id = %transaction.id,
            kind = transaction.kind.as_str(),
            amount = %transaction.amount,
            "transaction created"
        );
        Ok(transaction)
    }

    pub async fn delete_transaction(&self, id: Uuid) -> ResultEngine<()> {
        let result = transactions::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("transaction {id}")));
        }

        self.views.invalidate(FINANCE_VIEWS);
        tracing::info!(%id, "transaction deleted");
        Ok(())
    }

    /// All transactions with their category, most recent first.
    pub async fn list_transactions(&self) -> ResultEngine<Vec<Transaction>> {
        transactions::Entity::find()
            .find_also_related(categories::Entity)
            .order_by_desc(transactions::Column::Date)
            .all(&self.database)
            .await?
            .into_iter()
            .map(|(model, category)| Transaction::from_model(model, category))
            .collect()
    }

    /// All-time totals.
    pub async fn balance(&self) -> ResultEngine<Balance> {
        Ok(reports::balance(&self.list_transactions().await?))
    }

    /// Date of the earliest transaction that still lies in the future.
    ///
    /// Monthly totals change when that instant passes even though nothing
    /// was written.
    pub async fn next_scheduled_transaction(&self) -> ResultEngine<Option<DateTime<Utc>>> {
        let next = transactions::Entity::find()
            .filter(transactions::Column::Date.gt(Utc::now()))
            .order_by_asc(transactions::Column::Date)
            .one(&self.database)
            .await?;
        Ok(next.map(|model| model.date))
    }

    /// Totals of the current local month.
    pub async fn monthly_stats(&self) -> ResultEngine<MonthlyStats> {
        let transactions = self.list_transactions().await?;
        Ok(reports::monthly_stats(&transactions, &self.local_now()))
    }
}
