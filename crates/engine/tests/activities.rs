mod common;

use sea_orm::{ConnectionTrait, Statement};

use common::{category_id, engine_with_db};
use engine::{CategoryKind, EngineError, StopOutcome, View};
use uuid::Uuid;

#[tokio::test]
async fn starting_stops_the_open_activity() {
    let (engine, _db) = engine_with_db().await;
    let work = category_id(&engine, CategoryKind::Activity, "عمل").await;
    let reading = category_id(&engine, CategoryKind::Activity, "قراءة").await;

    let first = engine
        .start_activity("write report", work, Some("  quarterly  "))
        .await
        .unwrap();
    assert!(first.stopped.is_none());
    assert!(first.activity.is_open());
    assert_eq!(first.activity.description.as_deref(), Some("quarterly"));
    assert_eq!(
        first.activity.category.as_ref().map(|c| c.id),
        Some(work)
    );

    let second = engine.start_activity("novel", reading, None).await.unwrap();
    let stopped = second.stopped.unwrap();
    assert_eq!(stopped.id, first.activity.id);
    assert!(stopped.end_time.is_some());
    assert_eq!(stopped.duration, Some(0));

    let current = engine.current_activity().await.unwrap().unwrap();
    assert_eq!(current.id, second.activity.id);

    let all = engine.list_activities().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.iter().filter(|a| a.is_open()).count(), 1);
}

#[tokio::test]
async fn stop_reports_missing_and_already_stopped() {
    let (engine, _db) = engine_with_db().await;
    let work = category_id(&engine, CategoryKind::Activity, "عمل").await;

    let missing = Uuid::new_v4();
    assert_eq!(
        engine.stop_activity(missing).await.unwrap_err(),
        EngineError::KeyNotFound(format!("activity {missing}"))
    );

    let started = engine.start_activity("deep work", work, None).await.unwrap();
    let id = started.activity.id;

    let outcome = engine.stop_activity(id).await.unwrap();
    assert!(matches!(outcome, StopOutcome::Stopped(_)));
    let end_time = outcome.activity().end_time;
    assert!(end_time.is_some());
    assert!(engine.current_activity().await.unwrap().is_none());

    let version = engine.view_version(View::Activities);
    let again = engine.stop_activity(id).await.unwrap();
    assert!(matches!(again, StopOutcome::AlreadyStopped(_)));
    assert_eq!(again.activity().end_time, end_time);
    assert_eq!(engine.view_version(View::Activities), version);
}

#[tokio::test]
async fn start_validates_title_and_category() {
    let (engine, _db) = engine_with_db().await;
    let work = category_id(&engine, CategoryKind::Activity, "عمل").await;
    let salary = category_id(&engine, CategoryKind::Income, "راتب").await;

    assert!(matches!(
        engine.start_activity("   ", work, None).await,
        Err(EngineError::InvalidName(_))
    ));
    assert!(matches!(
        engine.start_activity("paid work", salary, None).await,
        Err(EngineError::InvalidCategory(_))
    ));
    assert!(matches!(
        engine.start_activity("ghost", Uuid::new_v4(), None).await,
        Err(EngineError::InvalidCategory(_))
    ));
    assert!(engine.list_activities().await.unwrap().is_empty());
}

#[tokio::test]
async fn rating_must_be_between_one_and_five() {
    let (engine, _db) = engine_with_db().await;
    let sport = category_id(&engine, CategoryKind::Activity, "رياضة").await;
    let id = engine.start_activity("run", sport, None).await.unwrap().activity.id;
    engine.stop_activity(id).await.unwrap();

    for invalid in [0, 6, -1] {
        assert!(matches!(
            engine.rate_activity(id, invalid).await,
            Err(EngineError::InvalidRating(_))
        ));
    }

    let rated = engine.rate_activity(id, 5).await.unwrap();
    assert_eq!(rated.rating.map(|r| r.get()), Some(5));
    let rated = engine.rate_activity(id, 3).await.unwrap();
    assert_eq!(rated.rating.map(|r| r.get()), Some(3));

    assert!(matches!(
        engine.rate_activity(Uuid::new_v4(), 4).await,
        Err(EngineError::KeyNotFound(_))
    ));

    let report = engine.activity_report().await.unwrap();
    assert_eq!(report.stats.activity_count, 1);
    assert!((report.stats.average_rating - 3.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn store_rejects_a_second_open_activity() {
    let (engine, db) = engine_with_db().await;
    let work = category_id(&engine, CategoryKind::Activity, "عمل").await;
    engine.start_activity("open", work, None).await.unwrap();

    let result = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "INSERT INTO activities (id, title, category_id, start_time) \
             SELECT randomblob(16), 'sneaky', category_id, start_time FROM activities",
        ))
        .await;
    assert!(result.is_err());

    let open = engine
        .list_activities()
        .await
        .unwrap()
        .into_iter()
        .filter(|a| a.is_open())
        .count();
    assert_eq!(open, 1);
}

#[tokio::test]
async fn delete_activity_and_invalidate_views() {
    let (engine, _db) = engine_with_db().await;
    let work = category_id(&engine, CategoryKind::Activity, "عمل").await;

    let diary_version = engine.view_version(View::Diary);
    let home_version = engine.view_version(View::Home);
    let id = engine.start_activity("tmp", work, None).await.unwrap().activity.id;
    assert!(engine.view_version(View::Home) > home_version);

    engine.delete_activity(id).await.unwrap();
    assert!(engine.list_activities().await.unwrap().is_empty());
    assert!(matches!(
        engine.delete_activity(id).await,
        Err(EngineError::KeyNotFound(_))
    ));
    assert_eq!(engine.view_version(View::Diary), diary_version);
}
