use api_types::finance::{BalanceView, MonthlyStatsView};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_balance(balance: engine::reports::Balance) -> BalanceView {
    BalanceView {
        total_income_minor: balance.total_income.cents(),
        total_expense_minor: balance.total_expense.cents(),
        balance_minor: balance.balance.cents(),
    }
}

pub(crate) fn map_monthly(stats: engine::reports::MonthlyStats) -> MonthlyStatsView {
    MonthlyStatsView {
        income_minor: stats.income.cents(),
        expense_minor: stats.expense.cents(),
        balance_minor: stats.balance.cents(),
    }
}

pub async fn balance(State(state): State<ServerState>) -> Result<Json<BalanceView>, ServerError> {
    Ok(Json(map_balance(state.engine.balance().await?)))
}

pub async fn monthly(
    State(state): State<ServerState>,
) -> Result<Json<MonthlyStatsView>, ServerError> {
    Ok(Json(map_monthly(state.engine.monthly_stats().await?)))
}
