//! Aggregated views. All of them are cached by view version.

use api_types::report::{
    ActivityReportView, ActivityStatsView, BreakdownItemView, DiaryReportView, FinanceReportView,
    HomeView,
};
use axum::{extract::State, response::Response};
use axum_extra::{TypedHeader, headers::IfNoneMatch};
use engine::{MoneyCents, View, reports::BreakdownItem};

use crate::{
    ServerError,
    activities::map_activity,
    diary::map_mood,
    finance::{map_balance, map_monthly},
    server::ServerState,
    views::cached,
};

fn map_item<V: Into<i64>>(item: BreakdownItem<V>) -> BreakdownItemView {
    BreakdownItemView {
        category_id: item.category_id,
        name: item.name,
        color: item.color,
        value: item.value.into(),
    }
}

fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub async fn finance(
    State(state): State<ServerState>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
) -> Result<Response, ServerError> {
    cached(&state, View::Reports, if_none_match, async {
        let report = state.engine.finance_report().await?;
        Ok(FinanceReportView {
            balance: map_balance(report.balance),
            monthly: map_monthly(report.monthly),
            transaction_count: report.transaction_count,
            expense_breakdown: report
                .expense_breakdown
                .into_iter()
                .map(map_item::<MoneyCents>)
                .collect(),
        })
    })
    .await
}

pub async fn activities(
    State(state): State<ServerState>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
) -> Result<Response, ServerError> {
    cached(&state, View::Reports, if_none_match, async {
        let report = state.engine.activity_report().await?;
        let stats = report.stats;
        Ok(ActivityReportView {
            stats: ActivityStatsView {
                total_minutes: stats.total_minutes,
                total_hours: stats.total_hours,
                activity_count: stats.activity_count,
                average_rating: round_rating(stats.average_rating),
                today_minutes: stats.today_minutes,
                week_minutes: stats.week_minutes,
            },
            time_breakdown: report
                .time_breakdown
                .into_iter()
                .map(map_item::<i64>)
                .collect(),
        })
    })
    .await
}

pub async fn diary(
    State(state): State<ServerState>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
) -> Result<Response, ServerError> {
    cached(&state, View::Reports, if_none_match, async {
        let report = state.engine.diary_report().await?;
        Ok(DiaryReportView {
            entry_count: report.entry_count,
            monthly_entry_count: report.monthly_entry_count,
            mood_counts: report
                .mood_counts
                .into_iter()
                .map(|(mood, count)| (map_mood(mood), count))
                .collect(),
            streak: report.streak,
        })
    })
    .await
}

pub async fn home(
    State(state): State<ServerState>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
) -> Result<Response, ServerError> {
    cached(&state, View::Home, if_none_match, async {
        let summary = state.engine.home_summary().await?;
        Ok(HomeView {
            username: summary.username,
            currency: summary.currency,
            balance_minor: summary.balance.cents(),
            monthly: map_monthly(summary.monthly),
            monthly_budget_minor: summary.monthly_budget.cents(),
            budget_remaining_minor: summary.budget_remaining.cents(),
            today_minutes: summary.today_minutes,
            today_activity_count: summary.today_activity_count,
            current_activity: summary.current_activity.map(map_activity),
            week_diary_entries: summary.week_diary_entries,
        })
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_rounded_to_one_decimal() {
        assert_eq!(round_rating(4.0), 4.0);
        assert_eq!(round_rating(11.0 / 3.0), 3.7);
        assert_eq!(round_rating(4.25), 4.3);
        assert_eq!(round_rating(0.0), 0.0);
    }
}
