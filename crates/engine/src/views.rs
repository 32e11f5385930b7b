//! Presentation views and their versions.
//!
//! Every write bumps the version of the views that display the data it
//! touched. Front ends cache a rendered view together with its version and
//! re-fetch once the version moves.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    Activities,
    Diary,
    Finance,
    Reports,
    Settings,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Activities,
        View::Diary,
        View::Finance,
        View::Reports,
        View::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Activities => "activities",
            Self::Diary => "diary",
            Self::Finance => "finance",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Activities => 1,
            Self::Diary => 2,
            Self::Finance => 3,
            Self::Reports => 4,
            Self::Settings => 5,
        }
    }
}

pub(crate) const ACTIVITY_VIEWS: &[View] = &[View::Activities, View::Home, View::Reports];
pub(crate) const RATING_VIEWS: &[View] = &[View::Activities, View::Reports];
pub(crate) const FINANCE_VIEWS: &[View] = &[View::Finance, View::Home, View::Reports];
pub(crate) const DIARY_VIEWS: &[View] = &[View::Diary, View::Home, View::Reports];
pub(crate) const SETTINGS_VIEWS: &[View] = &[View::Settings, View::Home];
pub(crate) const CATEGORY_VIEWS: &[View] = &[View::Activities, View::Finance, View::Reports];

#[derive(Debug, Default)]
pub(crate) struct ViewVersions {
    versions: [AtomicU64; View::ALL.len()],
}

impl ViewVersions {
    pub(crate) fn version(&self, view: View) -> u64 {
        self.versions[view.index()].load(Ordering::Acquire)
    }

    pub(crate) fn invalidate(&self, views: &[View]) {
        for view in views {
            let version = self.versions[view.index()].fetch_add(1, Ordering::AcqRel) + 1;
            tracing::debug!(view = view.as_str(), version, "view invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_only_moves_listed_views() {
        let versions = ViewVersions::default();
        versions.invalidate(FINANCE_VIEWS);
        assert_eq!(versions.version(View::Finance), 1);
        assert_eq!(versions.version(View::Home), 1);
        assert_eq!(versions.version(View::Reports), 1);
        assert_eq!(versions.version(View::Diary), 0);
        assert_eq!(versions.version(View::Settings), 0);

        versions.invalidate(&View::ALL);
        assert_eq!(versions.version(View::Finance), 2);
        assert_eq!(versions.version(View::Diary), 1);
    }

    #[test]
    fn indexes_are_distinct() {
        let mut seen = [false; View::ALL.len()];
        for view in View::ALL {
            assert!(!seen[view.index()]);
            seen[view.index()] = true;
        }
    }
}
