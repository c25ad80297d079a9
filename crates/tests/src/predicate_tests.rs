use engine::status::{
    get_insurance_coverage_status, has_all_documents, has_calibration_complete,
    has_ddf_complete, has_ddf_file, has_images_available, has_insurance_coverage_complete,
    has_new_log_messages, has_parts_and_labor_complete, is_invoice_reviewed_and_ok,
};
use shared_types::{
    ActionLogEntry, ActionType, ActorType, Calibration, CoverageDecision, DdfStatus,
    InsuranceCoverageStatus, InvoiceReviewStatus, PartsAndLabor, WorkshopCase,
};

use crate::common::*;

#[test]
fn absent_case_fails_every_predicate() {
    let none: Option<&WorkshopCase> = None;
    assert!(!has_ddf_file(none));
    assert!(!has_ddf_complete(none));
    assert!(!has_images_available(none));
    assert!(!has_parts_and_labor_complete(none));
    assert!(!has_calibration_complete(none));
    assert!(!has_insurance_coverage_complete(none));
    assert!(!is_invoice_reviewed_and_ok(none));
    assert!(!has_all_documents(none));
    assert_eq!(
        get_insurance_coverage_status(none),
        InsuranceCoverageStatus::NotFetched
    );
}

#[test]
fn ddf_complete_status_without_file_is_incomplete() {
    let case = WorkshopCase {
        assessment: Some(assessment(DdfStatus::Complete)),
        ..blank_case()
    };
    assert!(!has_ddf_file(&case));
    assert!(!has_ddf_complete(&case));
}

#[test]
fn ddf_file_with_partial_status_is_incomplete() {
    let case = WorkshopCase {
        attachments: vec![ddf_attachment()],
        assessment: Some(assessment(DdfStatus::PartiallyDone)),
        ..blank_case()
    };
    assert!(has_ddf_file(&case));
    assert!(!has_ddf_complete(&case));
}

#[test]
fn legacy_named_ddf_document_counts() {
    let case = WorkshopCase {
        attachments: vec![legacy_attachment("Scan_DDF_2024.pdf")],
        assessment: Some(assessment(DdfStatus::Complete)),
        ..blank_case()
    };
    assert!(has_ddf_complete(&case));
}

#[test]
fn unrelated_document_is_not_a_ddf() {
    let case = WorkshopCase {
        attachments: vec![legacy_attachment("invoice.pdf")],
        ..blank_case()
    };
    assert!(!has_ddf_file(&case));
}

#[test]
fn two_of_three_required_images_is_not_enough() {
    let mut images = all_required_images();
    images.damage_detail = None;
    let case = WorkshopCase {
        required_images: Some(images),
        ..blank_case()
    };
    assert!(!has_images_available(&case));
}

#[test]
fn waived_images_need_a_reason() {
    let mut case = WorkshopCase {
        images_not_needed: true,
        ..blank_case()
    };
    assert!(!has_images_available(&case));

    case.images_not_needed_comment = Some("  ".to_string());
    assert!(!has_images_available(&case));

    case.images_not_needed_comment = Some("Customer sent photos by mail".to_string());
    assert!(has_images_available(&case));
}

#[test]
fn parts_only_is_not_complete() {
    let case = WorkshopCase {
        parts_and_labor: PartsAndLabor::from_items(vec![part(100.0), part(50.0)]),
        ..blank_case()
    };
    assert!(!has_parts_and_labor_complete(&case));

    let case = WorkshopCase {
        parts_and_labor: parts_and_labor(),
        ..blank_case()
    };
    assert!(has_parts_and_labor_complete(&case));
}

#[test]
fn calibration_rules() {
    let with = |calibration: Calibration| WorkshopCase {
        calibration: Some(calibration),
        ..blank_case()
    };

    assert!(!has_calibration_complete(&blank_case()));
    assert!(has_calibration_complete(&with(calibration_not_needed())));
    assert!(!has_calibration_complete(&with(Calibration::default())));
    assert!(!has_calibration_complete(&with(Calibration {
        required: true,
        signature: Some("K. Hansen".to_string()),
        ..Default::default()
    })));
    assert!(has_calibration_complete(&with(Calibration {
        required: true,
        signature: Some("K. Hansen".to_string()),
        files: vec![legacy_attachment("adas_report.pdf")],
        ..Default::default()
    })));
}

#[test]
fn coverage_requires_fetch_existence_and_approval() {
    let mut cov = coverage(Some(CoverageDecision::Approved));
    let case = WorkshopCase {
        insurance_coverage: Some(cov.clone()),
        ..blank_case()
    };
    assert!(has_insurance_coverage_complete(&case));

    cov.exists = false;
    let case = WorkshopCase {
        insurance_coverage: Some(cov.clone()),
        ..blank_case()
    };
    assert!(!has_insurance_coverage_complete(&case));

    cov.exists = true;
    cov.data_fetched = false;
    let case = WorkshopCase {
        insurance_coverage: Some(cov),
        ..blank_case()
    };
    assert!(!has_insurance_coverage_complete(&case));
    assert_eq!(
        get_insurance_coverage_status(&case),
        InsuranceCoverageStatus::NotFetched
    );
}

#[test]
fn coverage_status_maps_decision() {
    let status = |decision| {
        get_insurance_coverage_status(&WorkshopCase {
            insurance_coverage: Some(coverage(decision)),
            ..blank_case()
        })
    };
    assert_eq!(
        status(Some(CoverageDecision::Approved)),
        InsuranceCoverageStatus::Approved
    );
    assert_eq!(
        status(Some(CoverageDecision::NotApproved)),
        InsuranceCoverageStatus::NotApproved
    );
    assert_eq!(
        status(Some(CoverageDecision::Undefined)),
        InsuranceCoverageStatus::Undefined
    );
    assert_eq!(status(None), InsuranceCoverageStatus::Undefined);
}

#[test]
fn invoice_review_must_be_ok() {
    for (review, expected) in [
        (None, false),
        (Some(InvoiceReviewStatus::PendingReview), false),
        (Some(InvoiceReviewStatus::NeedsCorrection), false),
        (Some(InvoiceReviewStatus::Ok), true),
    ] {
        let case = WorkshopCase {
            invoice: Some(invoice(review)),
            ..blank_case()
        };
        assert_eq!(is_invoice_reviewed_and_ok(&case), expected, "{review:?}");
    }
}

#[test]
fn all_documents_needs_ddf_images_and_invoice() {
    let mut case = ready_for_in_progress_case();
    assert!(!has_all_documents(&case));
    case.invoice = Some(invoice(None));
    assert!(has_all_documents(&case));
}

fn entry(actor_type: ActorType, minutes_after: i64) -> ActionLogEntry {
    ActionLogEntry {
        id: format!("action-{minutes_after}"),
        action_type: ActionType::Other,
        actor: "someone".to_string(),
        actor_type,
        description: "entry".to_string(),
        timestamp: fixed_now() + chrono::Duration::minutes(minutes_after),
        metadata: None,
    }
}

#[test]
fn new_log_messages_ignore_workshop_entries() {
    let mut case = WorkshopCase {
        action_log: vec![entry(ActorType::Workshop, 5)],
        ..blank_case()
    };
    assert!(!has_new_log_messages(&case));

    case.action_log.push(entry(ActorType::Agent, 10));
    assert!(has_new_log_messages(&case));

    case.last_log_viewed_at = Some(fixed_now() + chrono::Duration::minutes(10));
    assert!(!has_new_log_messages(&case));

    case.action_log.push(entry(ActorType::System, 11));
    assert!(has_new_log_messages(&case));
}
