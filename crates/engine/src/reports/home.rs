use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::{Activity, DiaryEntry, MoneyCents, Settings, Transaction};

use super::{
    MonthlyStats, activity_stats, balance, monthly_stats, start_of_today, start_of_week,
};

/// Everything the landing page shows at a glance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomeSummary {
    pub username: String,
    pub currency: String,
    pub balance: MoneyCents,
    pub monthly: MonthlyStats,
    pub monthly_budget: MoneyCents,
    /// Budget minus this month's expenses. Negative once overspent.
    pub budget_remaining: MoneyCents,
    pub today_minutes: i64,
    /// Activities started today, the open one included.
    pub today_activity_count: usize,
    pub current_activity: Option<Activity>,
    pub week_diary_entries: usize,
}

pub fn home_summary<Tz: TimeZone>(
    settings: &Settings,
    transactions: &[Transaction],
    activities: &[Activity],
    entries: &[DiaryEntry],
    now: &DateTime<Tz>,
) -> HomeSummary {
    let today = start_of_today(now);
    let week = start_of_week(now);
    let monthly = monthly_stats(transactions, now);

    HomeSummary {
        username: settings.username.clone(),
        currency: settings.currency.clone(),
        balance: balance(transactions).balance,
        monthly,
        monthly_budget: settings.monthly_budget,
        budget_remaining: settings.monthly_budget - monthly.expense,
        today_minutes: activity_stats(activities, now).today_minutes,
        today_activity_count: activities.iter().filter(|a| a.start_time >= today).count(),
        current_activity: activities.iter().find(|a| a.is_open()).cloned(),
        week_diary_entries: entries.iter().filter(|e| e.created_at >= week).count(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use chrono_tz::Tz;
    use uuid::Uuid;

    use super::*;
    use crate::{TransactionKind, reports::fixtures::at};

    fn tx(kind: TransactionKind, cents: i64, date: DateTime<Utc>) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            amount: MoneyCents::new(cents),
            kind,
            category_id: Uuid::from_u128(1),
            category: None,
            description: None,
            date,
        }
    }

    fn activity(start: DateTime<Utc>, minutes: Option<i64>) -> Activity {
        Activity {
            id: Uuid::new_v4(),
            title: "read".to_string(),
            description: None,
            category_id: Uuid::from_u128(2),
            category: None,
            start_time: start,
            end_time: minutes.map(|m| start + TimeDelta::minutes(m)),
            duration: minutes,
            rating: None,
        }
    }

    #[test]
    fn summary_combines_all_sections() {
        let now = at(Tz::UTC, 2026, 10, 18, 15, 0);
        let utc = now.with_timezone(&Utc);
        let settings = Settings {
            monthly_budget: MoneyCents::new(50_000),
            ..Settings::default()
        };
        let transactions = vec![
            tx(TransactionKind::Income, 100_000, utc - TimeDelta::days(40)),
            tx(TransactionKind::Expense, 20_000, utc - TimeDelta::days(2)),
            tx(TransactionKind::Expense, 40_000, utc - TimeDelta::hours(1)),
        ];
        let activities = vec![
            activity(utc - TimeDelta::hours(3), Some(50)),
            activity(utc - TimeDelta::hours(1), None),
            activity(utc - TimeDelta::days(1), Some(30)),
        ];
        let entries = vec![DiaryEntry {
            id: Uuid::new_v4(),
            content: "ok".to_string(),
            mood: None,
            created_at: utc - TimeDelta::hours(2),
        }];

        let summary = home_summary(&settings, &transactions, &activities, &entries, &now);

        assert_eq!(summary.username, "المستخدم");
        assert_eq!(summary.balance, MoneyCents::new(40_000));
        assert_eq!(summary.monthly.expense, MoneyCents::new(60_000));
        assert_eq!(summary.budget_remaining, MoneyCents::new(-10_000));
        assert_eq!(summary.today_minutes, 50);
        assert_eq!(summary.today_activity_count, 2);
        assert!(summary.current_activity.as_ref().is_some_and(Activity::is_open));
        assert_eq!(summary.week_diary_entries, 1);
    }
}
