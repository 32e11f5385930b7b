use crate::{
    ResultEngine,
    reports::{self, ActivityReport, DiaryReport, FinanceReport, HomeSummary},
};

use super::Engine;

impl Engine {
    pub async fn finance_report(&self) -> ResultEngine<FinanceReport> {
        let transactions = self.list_transactions().await?;
        let categories = self.list_categories(None).await?;
        Ok(reports::finance_report(
            &transactions,
            &categories,
            &self.local_now(),
        ))
    }

    pub async fn activity_report(&self) -> ResultEngine<ActivityReport> {
        let activities = self.list_activities().await?;
        let categories = self.list_categories(None).await?;
        Ok(reports::activity_report(
            &activities,
            &categories,
            &self.local_now(),
        ))
    }

    pub async fn diary_report(&self) -> ResultEngine<DiaryReport> {
        let entries = self.list_diary_entries().await?;
        Ok(reports::diary_report(&entries, &self.local_now()))
    }

    pub async fn home_summary(&self) -> ResultEngine<HomeSummary> {
        let settings = self.settings().await?;
        let transactions = self.list_transactions().await?;
        let activities = self.list_activities().await?;
        let entries = self.list_diary_entries().await?;
        Ok(reports::home_summary(
            &settings,
            &transactions,
            &activities,
            &entries,
            &self.local_now(),
        ))
    }
}
