mod common;

use common::engine_with_db;
use engine::{EngineError, MoneyCents, Mood, Settings, Theme, View};

#[tokio::test]
async fn diary_entries_are_trimmed_and_listed() {
    let (engine, _db) = engine_with_db().await;

    assert!(matches!(
        engine.create_diary_entry(" \n ", None).await,
        Err(EngineError::InvalidName(_))
    ));

    let happy = engine
        .create_diary_entry("  good day  ", Some(Mood::Happy))
        .await
        .unwrap();
    assert_eq!(happy.content, "good day");
    assert_eq!(happy.mood, Some(Mood::Happy));
    let plain = engine.create_diary_entry("meh", None).await.unwrap();

    let entries = engine.list_diary_entries().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.contains(&happy));
    assert!(entries.contains(&plain));

    let report = engine.diary_report().await.unwrap();
    assert_eq!(report.entry_count, 2);
    assert_eq!(report.monthly_entry_count, 2);
    assert_eq!(report.streak, 1);
    assert_eq!(report.mood_counts.get(&Mood::Happy), Some(&1));

    engine.delete_diary_entry(plain.id).await.unwrap();
    assert!(matches!(
        engine.delete_diary_entry(plain.id).await,
        Err(EngineError::KeyNotFound(_))
    ));
    assert_eq!(engine.list_diary_entries().await.unwrap(), vec![happy]);
}

#[tokio::test]
async fn settings_start_with_defaults() {
    let (engine, _db) = engine_with_db().await;

    let settings = engine.settings().await.unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.username, "المستخدم");
    assert_eq!(settings.currency, "DZD");
    assert_eq!(settings.theme, Theme::System);

    // A second read hits the stored row.
    assert_eq!(engine.settings().await.unwrap(), settings);
}

#[tokio::test]
async fn update_settings_overwrites_every_field() {
    let (engine, _db) = engine_with_db().await;
    let home = engine.view_version(View::Home);
    let finance = engine.view_version(View::Finance);

    let updated = engine
        .update_settings(Settings {
            username: " Amina ".to_string(),
            language: "fr".to_string(),
            theme: Theme::Dark,
            currency: "EUR".to_string(),
            monthly_budget: MoneyCents::new(150_000),
        })
        .await
        .unwrap();
    assert_eq!(updated.username, "Amina");
    assert_eq!(engine.settings().await.unwrap(), updated);
    assert!(engine.view_version(View::Home) > home);
    assert_eq!(engine.view_version(View::Finance), finance);

    let summary = engine.home_summary().await.unwrap();
    assert_eq!(summary.username, "Amina");
    assert_eq!(summary.budget_remaining, MoneyCents::new(150_000));
}

#[tokio::test]
async fn update_settings_rejects_invalid_values() {
    let (engine, _db) = engine_with_db().await;

    let negative = engine
        .update_settings(Settings {
            monthly_budget: MoneyCents::new(-1),
            ..Settings::default()
        })
        .await;
    assert!(matches!(negative, Err(EngineError::InvalidAmount(_))));

    let huge = engine
        .update_settings(Settings {
            monthly_budget: MoneyCents::new(i64::MAX),
            ..Settings::default()
        })
        .await;
    assert!(matches!(huge, Err(EngineError::InvalidAmount(_))));

    let blank = engine
        .update_settings(Settings {
            currency: "  ".to_string(),
            ..Settings::default()
        })
        .await;
    assert!(matches!(blank, Err(EngineError::InvalidName(_))));

    assert_eq!(engine.settings().await.unwrap(), Settings::default());
}
