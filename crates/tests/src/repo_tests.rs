use chrono::Duration;
use engine::{CaseRepository, InMemoryCaseRepo};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, WorkshopCase};
use uuid::Uuid;

use crate::common::*;

fn case_created(case_number: &str, days_ago: i64) -> WorkshopCase {
    WorkshopCase {
        case_number: case_number.to_string(),
        created_at: fixed_now() - Duration::days(days_ago),
        ..blank_case()
    }
}

#[test]
fn list_is_newest_first() {
    let repo = InMemoryCaseRepo::with_cases(vec![
        case_created("BS2024001", 10),
        case_created("BS2024003", 1),
        case_created("BS2024002", 5),
    ]);
    let numbers: Vec<String> = repo.list().into_iter().map(|c| c.case_number).collect();
    assert_eq!(numbers, vec!["BS2024003", "BS2024002", "BS2024001"]);
}

#[test]
fn insert_then_find() {
    let mut repo = InMemoryCaseRepo::new();
    assert!(repo.is_empty());
    let case = repo.insert(blank_case()).unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.find_by_id(case.id), Some(case));
}

#[test]
fn insert_duplicate_conflicts() {
    let case = blank_case();
    let mut repo = InMemoryCaseRepo::with_cases(vec![case.clone()]);
    let err = repo.insert(case).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[test]
fn save_and_delete_unknown_case_are_not_found() {
    let mut repo = InMemoryCaseRepo::new();
    assert!(repo.save(blank_case()).unwrap_err().is_not_found());
    assert!(repo.delete(Uuid::new_v4()).unwrap_err().is_not_found());
}

#[test]
fn save_replaces_stored_case() {
    let mut case = blank_case();
    let mut repo = InMemoryCaseRepo::with_cases(vec![case.clone()]);
    case.insurance_company = "If Skadeforsikring".to_string();
    repo.save(case.clone()).unwrap();
    assert_eq!(
        repo.find_by_id(case.id).unwrap().insurance_company,
        "If Skadeforsikring"
    );
}

#[test]
fn plate_lookup() {
    let mut case = blank_case();
    case.vehicle.license_plate = "EL12345".to_string();
    let repo = InMemoryCaseRepo::with_cases(vec![case.clone()]);
    assert_eq!(
        repo.find_by_license_plate("el12345").map(|c| c.id),
        Some(case.id)
    );
    assert!(repo.find_by_license_plate("AB99999").is_none());
}
