mod common;

use common::{category_id, engine_with_db};
use engine::{
    CategoryKind, ClearedData, MoneyCents, Mood, NewCategory, NewTransaction, Settings,
    TransactionKind, View,
};

#[tokio::test]
async fn export_contains_every_record_kind() {
    let (engine, _db) = engine_with_db().await;
    let work = category_id(&engine, CategoryKind::Activity, "عمل").await;
    let salary = category_id(&engine, CategoryKind::Income, "راتب").await;

    engine.start_activity("focus", work, None).await.unwrap();
    engine
        .create_transaction(NewTransaction {
            amount: MoneyCents::new(9_900),
            kind: TransactionKind::Income,
            category_id: salary,
            description: None,
            date: None,
        })
        .await
        .unwrap();
    engine
        .create_diary_entry("exported", Some(Mood::Productive))
        .await
        .unwrap();

    let bundle = engine.export().await.unwrap();
    assert_eq!(bundle.settings, Settings::default());
    assert_eq!(bundle.activities.len(), 1);
    assert!(bundle.activities[0].category.is_some());
    assert_eq!(bundle.transactions.len(), 1);
    assert!(bundle.transactions[0].category.is_some());
    assert_eq!(bundle.diary_entries.len(), 1);
    assert_eq!(bundle.categories.len(), 18);

    let json = serde_json::to_value(&bundle).unwrap();
    for key in [
        "exported_at",
        "settings",
        "diary_entries",
        "activities",
        "transactions",
        "categories",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["transactions"][0]["amount"], 9_900);
    assert_eq!(json["diary_entries"][0]["mood"], "productive");
}

#[tokio::test]
async fn clear_keeps_settings_and_system_categories() {
    let (engine, _db) = engine_with_db().await;
    let work = category_id(&engine, CategoryKind::Activity, "عمل").await;

    let custom = engine
        .create_category(NewCategory {
            name: "Side project".to_string(),
            kind: CategoryKind::Activity,
            icon: None,
            color: None,
        })
        .await
        .unwrap();
    engine.start_activity("a", work, None).await.unwrap();
    engine.start_activity("b", custom.id, None).await.unwrap();
    engine.create_diary_entry("note", None).await.unwrap();
    let settings = engine
        .update_settings(Settings {
            username: "Sam".to_string(),
            ..Settings::default()
        })
        .await
        .unwrap();

    let versions: Vec<_> = View::ALL.iter().map(|v| engine.view_version(*v)).collect();
    let cleared = engine.clear_all_data().await.unwrap();
    assert_eq!(
        cleared,
        ClearedData {
            activities: 2,
            transactions: 0,
            diary_entries: 1,
            categories: 1,
        }
    );
    for (view, before) in View::ALL.iter().zip(versions) {
        assert!(engine.view_version(*view) > before, "{view:?} not invalidated");
    }

    assert!(engine.list_activities().await.unwrap().is_empty());
    assert!(engine.list_transactions().await.unwrap().is_empty());
    assert!(engine.list_diary_entries().await.unwrap().is_empty());
    let categories = engine.list_categories(None).await.unwrap();
    assert_eq!(categories.len(), 18);
    assert!(categories.iter().all(|c| c.is_system));
    assert_eq!(engine.settings().await.unwrap(), settings);

    assert_eq!(engine.clear_all_data().await.unwrap(), ClearedData::default());
}
