use chrono::{Datelike, Utc};
use pretty_assertions::assert_eq;
use shared_types::{
    ActionType, ActorType, AppErrorKind, CaseStage, CaseStatus, CaseUpdate, CreateCaseRequest,
    PartsAndLabor, Vehicle,
};

use crate::common::*;

#[test]
fn create_case_opens_draft() {
    let mut wf = workflow();
    let case = wf.create_case(create_request("el 12345")).unwrap();

    assert_eq!(case.stage, CaseStage::Draft);
    assert_eq!(case.status, CaseStatus::New);
    assert_eq!(case.vehicle.license_plate, "EL12345");
    assert_eq!(case.customer.name, "Ola Nordmann");
    assert_eq!(case.insurance_company, "Tryg");
    assert!(case.is_chat_log_enabled);
    assert!(case.invoice.is_none());
    assert!(case.assessment.is_none());

    assert_eq!(case.action_log.len(), 1);
    assert_eq!(case.action_log[0].action_type, ActionType::CaseCreated);
    assert_eq!(case.action_log[0].actor_type, ActorType::System);
}

#[test]
fn case_numbers_follow_year_sequence() {
    let mut wf = workflow();
    let year = Utc::now().year();
    let first = wf.create_case(create_request("AB11111")).unwrap();
    let second = wf.create_case(create_request("AB22222")).unwrap();
    assert_eq!(first.case_number, format!("BS{year}001"));
    assert_eq!(second.case_number, format!("BS{year}002"));
}

#[test]
fn numbering_continues_after_deleted_case() {
    let mut wf = workflow();
    let year = Utc::now().year();
    let first = wf.create_case(create_request("AB11111")).unwrap();
    wf.create_case(create_request("AB22222")).unwrap();
    wf.delete_case(first.id, Some("duplicate")).unwrap();

    let third = wf.create_case(create_request("AB33333")).unwrap();
    assert_eq!(third.case_number, format!("BS{year}003"));
}

#[test]
fn missing_required_fields_are_rejected() {
    let mut wf = workflow();
    let err = wf
        .create_case(CreateCaseRequest {
            license_plate: String::new(),
            customer_name: String::new(),
            ..create_request("")
        })
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("license_plate").map(String::as_str),
        Some("License plate is required")
    );
    assert_eq!(
        err.field_errors.get("customer_name").map(String::as_str),
        Some("Customer name is required")
    );
    assert!(wf.list_cases().is_empty());
}

#[test]
fn whitespace_only_fields_are_rejected() {
    let mut wf = workflow();
    let err = wf
        .create_case(CreateCaseRequest {
            insurance_company: "  ".to_string(),
            customer_name: "\t ".to_string(),
            ..create_request("   ")
        })
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    for field in ["license_plate", "insurance_company", "customer_name"] {
        assert!(err.field_errors.contains_key(field), "{field} accepted");
    }
    assert!(wf.list_cases().is_empty());
}

#[test]
fn get_unknown_case_is_not_found() {
    let wf = workflow();
    let err = wf.get_case(uuid::Uuid::new_v4()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_removes_case() {
    let mut wf = workflow();
    let case = wf.create_case(create_request("AB11111")).unwrap();
    wf.delete_case(case.id, None).unwrap();
    assert!(wf.get_case(case.id).unwrap_err().is_not_found());
    assert!(wf.delete_case(case.id, None).unwrap_err().is_not_found());
}

#[test]
fn update_logs_status_change_once() {
    let mut wf = workflow();
    let case = wf.create_case(create_request("AB11111")).unwrap();

    let updated = wf
        .update_case(
            case.id,
            CaseUpdate {
                status: Some(CaseStatus::WaitingParts),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.status, CaseStatus::WaitingParts);
    let status_changes = updated
        .action_log
        .iter()
        .filter(|e| e.action_type == ActionType::StatusChanged)
        .count();
    assert_eq!(status_changes, 1);

    let again = wf
        .update_case(
            case.id,
            CaseUpdate {
                status: Some(CaseStatus::WaitingParts),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(again.action_log.len(), updated.action_log.len());
}

#[test]
fn update_logs_added_parts_with_count() {
    let mut wf = workflow();
    let case = wf.create_case(create_request("AB11111")).unwrap();

    let updated = wf
        .update_case(
            case.id,
            CaseUpdate {
                parts_and_labor: Some(PartsAndLabor::from_items(vec![
                    part(3000.0),
                    labor(900.0),
                ])),
                ..Default::default()
            },
        )
        .unwrap();
    let entry = updated
        .action_log
        .iter()
        .find(|e| e.action_type == ActionType::PartsAdded)
        .unwrap();
    assert_eq!(entry.metadata.as_ref().unwrap()["count"], 2);
    assert_eq!(updated.parts_and_labor.grand_total, 3900.0);
}

#[test]
fn update_normalizes_plate_and_leaves_rest() {
    let mut wf = workflow();
    let case = wf.create_case(create_request("AB11111")).unwrap();

    let updated = wf
        .update_case(
            case.id,
            CaseUpdate {
                vehicle: Some(Vehicle {
                    license_plate: "cd 54321".to_string(),
                    ..case.vehicle.clone()
                }),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.vehicle.license_plate, "CD54321");
    assert_eq!(updated.customer, case.customer);
    assert_eq!(updated.stage, CaseStage::Draft);
    assert!(updated.updated_at >= case.updated_at);
}

#[test]
fn update_unknown_case_is_not_found() {
    let mut wf = workflow();
    let err = wf
        .update_case(uuid::Uuid::new_v4(), CaseUpdate::default())
        .unwrap_err();
    assert!(err.is_not_found());
}
