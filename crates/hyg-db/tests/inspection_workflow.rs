//! End-to-end inspection rounds.
//!
//! Runs against the in-memory fake for failure injection and against an
//! on-disk libSQL database for persistence across service instances.

mod common;

use chrono::Duration;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use hyg_core::access::AccessPolicy;
use hyg_core::catalog::ISOLATION_PREFIX;
use hyg_core::entities::{Actor, Record};
use hyg_core::enums::{ChecklistType, Collection, Response, Role, SectorStatus};
use hyg_core::errors::ValidationError;
use hyg_core::inspection::{Answers, answers_from_sequence};
use hyg_db::error::{ServiceError, StorageError};
use hyg_db::service::{HygService, ZoneSubmission};
use hyg_db::session::SessionContext;

use common::{fake_service, inspector_session};

fn submission(zone: &str, isolation: bool, answers: Answers) -> ZoneSubmission {
    ZoneSubmission {
        zone: zone.to_string(),
        isolation,
        answers,
        checklist_type: ChecklistType::AfternoonRound,
        note: None,
    }
}

// ---------------------------------------------------------------------------
// Fake backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn isolation_room_with_two_failures() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();
    svc.select_sector(&mut ctx, "Réa Mère").unwrap();

    let items = svc.checklist_for(&ctx, "Salle A", true).unwrap();
    assert_eq!(items.len(), 22);
    let mut responses = vec![Response::Yes; items.len()];
    responses[3] = Response::No;
    responses[20] = Response::No;
    let answers = answers_from_sequence("Salle A", &items, &responses).unwrap();

    let outcome = svc
        .submit_zone(&mut ctx, submission("Salle A", true, answers))
        .await
        .unwrap();

    assert_eq!(outcome.entry.compliant_count, 20);
    assert_eq!(outcome.entry.non_compliant_items.len(), 2);
    assert!(outcome.entry.non_compliant_items[1].starts_with(ISOLATION_PREFIX));
    assert!(outcome.entry.isolation);
    assert_eq!(outcome.entry.checklist_type, ChecklistType::AfternoonRound);
}

#[tokio::test]
async fn failed_write_leaves_zone_pending() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();
    svc.select_sector(&mut ctx, "Réa Enfant").unwrap();

    svc.repo().fail_writes(true);
    let err = svc
        .submit_zone(&mut ctx, submission("Couloir", false, Answers::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Storage(StorageError::PermissionDenied(_))));

    let zone = ctx.inspection.active().unwrap().zone("Couloir").unwrap();
    assert!(!zone.is_completed());
    assert_eq!(ctx.cache.registry().current(Collection::Checklists), 0);

    svc.repo().fail_writes(false);
    svc.submit_zone(&mut ctx, submission("Couloir", false, Answers::new()))
        .await
        .unwrap();
    assert_eq!(svc.repo().stored(Collection::Checklists), 1);
}

#[tokio::test]
async fn stray_answers_are_rejected_before_writing() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();
    svc.select_sector(&mut ctx, "Bloc").unwrap();

    let mut stray = Answers::new();
    stray.insert("Plafond repeint".to_string(), Response::Yes);
    let err = svc
        .submit_zone(&mut ctx, submission("Lavabo chirurgical", false, stray))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::UnknownItem { .. })
    ));
    assert_eq!(svc.repo().stored(Collection::Checklists), 0);
    assert!(
        !ctx.inspection
            .active()
            .unwrap()
            .zone("Lavabo chirurgical")
            .unwrap()
            .is_completed()
    );
}

#[tokio::test]
async fn journal_copy_failure_is_a_warning() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();
    svc.select_sector(&mut ctx, "Bloc").unwrap();
    svc.repo().fail_journal_writes(true);

    let mut with_note = submission("Lavabo chirurgical", false, Answers::new());
    with_note.note = Some("Savon vide".to_string());
    let outcome = svc.submit_zone(&mut ctx, with_note).await.unwrap();

    assert!(outcome.journal_entry.is_none());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.entry.note.as_deref(), Some("Savon vide"));
    assert_eq!(svc.repo().stored(Collection::Checklists), 1);
    assert_eq!(svc.repo().stored(Collection::Journal), 0);
    assert_eq!(ctx.cache.registry().current(Collection::Journal), 0);
    assert_eq!(ctx.cache.registry().current(Collection::Checklists), 1);
}

#[tokio::test]
async fn switching_sector_drops_progress() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();
    svc.select_sector(&mut ctx, "Réa Mère").unwrap();
    svc.submit_zone(&mut ctx, submission("Couloir", false, Answers::new()))
        .await
        .unwrap();

    let same = svc.select_sector(&mut ctx, "Réa Mère").unwrap();
    assert!(same.zone("Couloir").unwrap().is_completed());

    let other = svc.select_sector(&mut ctx, "Bloc").unwrap();
    assert_eq!(other.status(), SectorStatus::InProgress);
    let back = svc.select_sector(&mut ctx, "Réa Mère").unwrap();
    assert!(back.pending_zones().any(|z| z.name == "Couloir"));

    assert!(svc.reset_sector(&mut ctx).is_some());
    assert!(ctx.inspection.active().is_none());
    assert!(matches!(
        svc.checklist_for(&ctx, "Couloir", false),
        Err(ServiceError::Validation(ValidationError::NoActiveSector))
    ));
}

#[tokio::test]
async fn deletion_window_uses_service_clock() {
    let (svc, clock) = fake_service();
    let mut ctx = inspector_session();
    let entry = svc.add_journal_entry(&mut ctx, "Relève").await.unwrap();

    clock.set(entry.created_at + Duration::hours(23) + Duration::minutes(59));
    let record = Record::Journal(entry.clone());
    assert!(svc.can_manage(&ctx, &record));

    clock.set(entry.created_at + Duration::hours(24) + Duration::minutes(1));
    assert!(!svc.can_manage(&ctx, &record));
    let err = svc
        .delete_entry(&mut ctx, Collection::Journal, &entry.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden { .. }));
    assert_eq!(svc.repo().stored(Collection::Journal), 1);
}

// ---------------------------------------------------------------------------
// libSQL backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn entries_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hygiene.db");
    let path = path.to_str().unwrap();

    {
        let svc = HygService::open_local(path, AccessPolicy::default())
            .await
            .unwrap();
        let mut ctx = SessionContext::new(
            Actor::new("as_hygiene_soir", Role::Inspector),
            std::time::Duration::from_secs(30),
        );
        svc.select_sector(&mut ctx, "Salle de réveil").unwrap();
        svc.submit_zone(&mut ctx, submission("Lavabo", false, Answers::new()))
            .await
            .unwrap();
        svc.add_journal_entry(&mut ctx, "Fin de poste").await.unwrap();
    }

    let svc = HygService::open_local(path, AccessPolicy::default())
        .await
        .unwrap();
    let mut ctx = SessionContext::new(
        Actor::new("vice_major", Role::Admin),
        std::time::Duration::from_secs(30),
    );

    let checklists = svc.list_recent(&mut ctx, Collection::Checklists, None).await;
    assert_eq!(checklists.records.len(), 1);
    let Record::Checklists(entry) = &checklists.records[0] else {
        panic!("expected a checklist");
    };
    assert_eq!(entry.zone, "Lavabo");
    assert_eq!(entry.total_item_count, 4);
    assert_eq!(entry.compliant_count, 0);

    let start = entry.created_at - Duration::minutes(1);
    let end = svc.now() + Duration::minutes(1);
    let journal = svc
        .list_range(Collection::Journal, start, end)
        .await
        .unwrap();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].actor(), "as_hygiene_soir");
}
