mod common;

use chrono::{TimeDelta, Utc};

use common::{category_id, engine_with_db};
use engine::{
    CategoryKind, EngineError, MoneyCents, NewCategory, NewTransaction, TransactionKind, View,
};
use uuid::Uuid;

fn new_tx(kind: TransactionKind, cents: i64, category_id: Uuid) -> NewTransaction {
    NewTransaction {
        amount: MoneyCents::new(cents),
        kind,
        category_id,
        description: None,
        date: None,
    }
}

#[tokio::test]
async fn balance_and_monthly_stats() {
    let (engine, _db) = engine_with_db().await;
    let salary = category_id(&engine, CategoryKind::Income, "راتب").await;
    let food = category_id(&engine, CategoryKind::Expense, "طعام").await;
    let bills = category_id(&engine, CategoryKind::Expense, "فواتير").await;

    engine
        .create_transaction(new_tx(TransactionKind::Income, 100_000, salary))
        .await
        .unwrap();
    engine
        .create_transaction(new_tx(TransactionKind::Expense, 30_000, food))
        .await
        .unwrap();
    engine
        .create_transaction(new_tx(TransactionKind::Expense, 20_000, bills))
        .await
        .unwrap();
    engine
        .create_transaction(NewTransaction {
            date: Some(Utc::now() - TimeDelta::days(70)),
            ..new_tx(TransactionKind::Expense, 5_000, food)
        })
        .await
        .unwrap();

    let balance = engine.balance().await.unwrap();
    assert_eq!(balance.total_income, MoneyCents::new(100_000));
    assert_eq!(balance.total_expense, MoneyCents::new(55_000));
    assert_eq!(balance.balance, MoneyCents::new(45_000));

    let monthly = engine.monthly_stats().await.unwrap();
    assert_eq!(monthly.income, MoneyCents::new(100_000));
    assert_eq!(monthly.expense, MoneyCents::new(50_000));
    assert_eq!(monthly.balance, MoneyCents::new(50_000));

    let report = engine.finance_report().await.unwrap();
    assert_eq!(report.transaction_count, 4);
    let breakdown: Vec<_> = report
        .expense_breakdown
        .iter()
        .map(|item| (item.name.as_str(), item.value))
        .collect();
    assert_eq!(
        breakdown,
        vec![
            ("طعام", MoneyCents::new(35_000)),
            ("فواتير", MoneyCents::new(20_000)),
        ]
    );
}

#[tokio::test]
async fn transactions_are_validated() {
    let (engine, _db) = engine_with_db().await;
    let salary = category_id(&engine, CategoryKind::Income, "راتب").await;
    let work = category_id(&engine, CategoryKind::Activity, "عمل").await;

    for cents in [0, -100] {
        assert!(matches!(
            engine
                .create_transaction(new_tx(TransactionKind::Income, cents, salary))
                .await,
            Err(EngineError::InvalidAmount(_))
        ));
    }
    assert!(matches!(
        engine
            .create_transaction(new_tx(TransactionKind::Expense, 100, salary))
            .await,
        Err(EngineError::InvalidCategory(_))
    ));
    assert!(matches!(
        engine
            .create_transaction(new_tx(TransactionKind::Income, 100, work))
            .await,
        Err(EngineError::InvalidCategory(_))
    ));
    assert!(engine.list_transactions().await.unwrap().is_empty());
}

#[tokio::test]
async fn huge_amounts_are_refused_and_totals_stay_finite() {
    let (engine, _db) = engine_with_db().await;
    let salary = category_id(&engine, CategoryKind::Income, "راتب").await;
    let food = category_id(&engine, CategoryKind::Expense, "طعام").await;

    let huge: MoneyCents = "90000000000000000".parse().unwrap();
    assert!(matches!(
        engine
            .create_transaction(NewTransaction {
                amount: huge,
                ..new_tx(TransactionKind::Income, 0, salary)
            })
            .await,
        Err(EngineError::InvalidAmount(_))
    ));

    let max = MoneyCents::MAX_AMOUNT.cents();
    for _ in 0..3 {
        engine
            .create_transaction(new_tx(TransactionKind::Income, max, salary))
            .await
            .unwrap();
    }
    engine
        .create_transaction(new_tx(TransactionKind::Expense, max, food))
        .await
        .unwrap();

    let balance = engine.balance().await.unwrap();
    assert_eq!(balance.total_income, MoneyCents::new(3 * max));
    assert_eq!(balance.balance, MoneyCents::new(2 * max));

    let month = engine.monthly_stats().await.unwrap();
    assert_eq!(month.expense, MoneyCents::new(max));

    let report = engine.finance_report().await.unwrap();
    assert_eq!(report.expense_breakdown[0].value, MoneyCents::new(max));
    engine.home_summary().await.unwrap();
}

#[tokio::test]
async fn next_scheduled_transaction_is_the_earliest_future_one() {
    let (engine, _db) = engine_with_db().await;
    let salary = category_id(&engine, CategoryKind::Income, "راتب").await;
    assert_eq!(engine.next_scheduled_transaction().await.unwrap(), None);

    let now = Utc::now();
    for date in [
        now - TimeDelta::days(1),
        now + TimeDelta::days(3),
        now + TimeDelta::hours(2),
    ] {
        engine
            .create_transaction(NewTransaction {
                date: Some(date),
                ..new_tx(TransactionKind::Income, 100, salary)
            })
            .await
            .unwrap();
    }

    let next = engine.next_scheduled_transaction().await.unwrap().unwrap();
    assert_eq!(next.timestamp(), (now + TimeDelta::hours(2)).timestamp());
}

#[tokio::test]
async fn list_and_delete_transactions() {
    let (engine, _db) = engine_with_db().await;
    let food = category_id(&engine, CategoryKind::Expense, "طعام").await;

    let older = engine
        .create_transaction(NewTransaction {
            description: Some("  groceries ".to_string()),
            date: Some(Utc::now() - TimeDelta::days(1)),
            ..new_tx(TransactionKind::Expense, 1_250, food)
        })
        .await
        .unwrap();
    assert_eq!(older.description.as_deref(), Some("groceries"));
    let newer = engine
        .create_transaction(new_tx(TransactionKind::Expense, 800, food))
        .await
        .unwrap();

    let listed = engine.list_transactions().await.unwrap();
    let ids: Vec<_> = listed.iter().map(|tx| tx.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(listed.iter().all(|tx| tx.category.is_some()));

    let finance = engine.view_version(View::Finance);
    engine.delete_transaction(older.id).await.unwrap();
    assert!(engine.view_version(View::Finance) > finance);
    assert!(matches!(
        engine.delete_transaction(older.id).await,
        Err(EngineError::KeyNotFound(_))
    ));
    assert_eq!(engine.list_transactions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let (engine, db) = engine_with_db().await;
    let before = engine.list_categories(None).await.unwrap();
    assert_eq!(before.len(), 18);
    assert!(before.iter().all(|c| c.is_system));

    let again = engine::Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    assert_eq!(again.list_categories(None).await.unwrap().len(), 18);
    assert_eq!(
        engine
            .list_categories(Some(CategoryKind::Activity))
            .await
            .unwrap()
            .len(),
        6
    );
}

#[tokio::test]
async fn user_categories_lifecycle() {
    let (engine, _db) = engine_with_db().await;

    let created = engine
        .create_category(NewCategory {
            name: "  Café   Bar ".to_string(),
            kind: CategoryKind::Expense,
            icon: None,
            color: Some("#ABCDEF".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Café Bar");
    assert_eq!(created.color, "#abcdef");
    assert!(!created.is_system);

    let duplicate = engine
        .create_category(NewCategory {
            name: "cafe-bar".to_string(),
            kind: CategoryKind::Expense,
            icon: None,
            color: None,
        })
        .await;
    assert_eq!(
        duplicate.unwrap_err(),
        EngineError::ExistingKey("Café Bar".to_string())
    );

    // Same name under another kind is a different category.
    engine
        .create_category(NewCategory {
            name: "Cafe Bar".to_string(),
            kind: CategoryKind::Income,
            icon: Some("Coffee".to_string()),
            color: None,
        })
        .await
        .unwrap();

    assert!(matches!(
        engine
            .create_category(NewCategory {
                name: "Paint".to_string(),
                kind: CategoryKind::Expense,
                icon: None,
                color: Some("red".to_string()),
            })
            .await,
        Err(EngineError::InvalidName(_))
    ));

    engine
        .create_transaction(new_tx(TransactionKind::Expense, 400, created.id))
        .await
        .unwrap();
    assert!(matches!(
        engine.delete_category(created.id).await,
        Err(EngineError::Forbidden(_))
    ));

    let food = category_id(&engine, CategoryKind::Expense, "طعام").await;
    assert!(matches!(
        engine.delete_category(food).await,
        Err(EngineError::Forbidden(_))
    ));

    let unused = engine
        .create_category(NewCategory {
            name: "Gym".to_string(),
            kind: CategoryKind::Expense,
            icon: None,
            color: None,
        })
        .await
        .unwrap();
    engine.delete_category(unused.id).await.unwrap();
    assert!(matches!(
        engine.delete_category(unused.id).await,
        Err(EngineError::KeyNotFound(_))
    ));
}
