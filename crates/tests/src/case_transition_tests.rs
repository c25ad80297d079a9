use engine::status::{
    MSG_DDF, MSG_IMAGES, MSG_INSURANCE_NOT_APPROVED, MSG_INSURANCE_NOT_FETCHED,
    MSG_INVOICE_UNREVIEWED, MSG_PARTS_LABOR, MSG_REPAIR_DATE,
};
use pretty_assertions::assert_eq;
use shared_types::{
    ActionType, AppErrorKind, ApprovalSection, CaseStage, CaseStatus, CoverageDecision,
    InvoiceReviewStatus, SectionApprovalStatus, WorkflowConfig,
};

use crate::common::*;

#[test]
fn blocked_start_lists_missing_requirements() {
    let mut wf = workflow();
    let case = wf.create_case(create_request("AB11111")).unwrap();

    let err = wf.mark_in_progress(case.id, fixed_now()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::StageTransitionBlocked);
    assert_eq!(
        err.missing_requirements,
        vec![
            MSG_DDF.to_string(),
            MSG_IMAGES.to_string(),
            MSG_PARTS_LABOR.to_string(),
            MSG_INSURANCE_NOT_FETCHED.to_string(),
        ]
    );
    assert_eq!(wf.get_case(case.id).unwrap().stage, CaseStage::Draft);
}

#[test]
fn rejected_coverage_blocks_start() {
    let mut case = ready_for_in_progress_case();
    case.insurance_coverage = Some(coverage(Some(CoverageDecision::NotApproved)));
    let mut wf = workflow_with(vec![case.clone()], WorkflowConfig::default());

    let err = wf.mark_in_progress(case.id, fixed_now()).unwrap_err();
    assert_eq!(
        err.missing_requirements,
        vec![MSG_INSURANCE_NOT_APPROVED.to_string()]
    );
}

#[test]
fn ready_case_moves_to_in_progress() {
    let case = ready_for_in_progress_case();
    let mut wf = workflow_with(vec![case.clone()], WorkflowConfig::default());

    let started = wf.mark_in_progress(case.id, fixed_now()).unwrap();
    assert_eq!(started.stage, CaseStage::InProgress);
    assert_eq!(started.status, CaseStatus::InProgress);
    assert_eq!(started.updated_at, fixed_now());
    assert!(started.action_log.iter().all(|e| e.timestamp == fixed_now()));
    let logged: Vec<ActionType> = started.action_log.iter().map(|e| e.action_type).collect();
    assert_eq!(
        logged,
        vec![ActionType::StatusChanged, ActionType::StageChanged]
    );
}

#[test]
fn finishing_without_date_is_blocked() {
    let case = ready_for_completion_case();
    let mut wf = workflow_with(vec![case.clone()], WorkflowConfig::default());

    let err = wf.mark_finished(case.id, None, fixed_now()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::StageTransitionBlocked);
    assert_eq!(err.missing_requirements, vec![MSG_REPAIR_DATE.to_string()]);
}

#[test]
fn finishing_sets_completion_date() {
    let mut case = ready_for_completion_case();
    case.service.repair_finished_date = None;
    let mut wf = workflow_with(vec![case.clone()], WorkflowConfig::default());

    let finished = wf
        .mark_finished(case.id, Some(repair_date()), fixed_now())
        .unwrap();
    assert_eq!(finished.stage, CaseStage::Finished);
    assert_eq!(finished.status, CaseStatus::Completed);
    assert_eq!(finished.service.repair_finished_date, Some(repair_date()));
    assert_eq!(finished.service.completion_date, Some(fixed_now()));
}

#[test]
fn blocked_finish_leaves_case_untouched() {
    let mut case = ready_for_completion_case();
    case.invoice = None;
    case.service.repair_finished_date = None;
    let mut wf = workflow_with(vec![case.clone()], WorkflowConfig::default());

    let err = wf
        .mark_finished(case.id, Some(repair_date()), fixed_now())
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::StageTransitionBlocked);
    assert_eq!(wf.get_case(case.id).unwrap(), case);
}

#[test]
fn unreviewed_invoice_finishes_by_default() {
    let mut case = ready_for_completion_case();
    case.invoice = Some(invoice(Some(InvoiceReviewStatus::PendingReview)));
    let mut wf = workflow_with(vec![case.clone()], WorkflowConfig::default());

    let finished = wf
        .mark_finished(case.id, Some(repair_date()), fixed_now())
        .unwrap();
    assert_eq!(finished.stage, CaseStage::Finished);
}

#[test]
fn strict_review_blocks_unreviewed_invoice() {
    let mut case = ready_for_completion_case();
    case.invoice = Some(invoice(Some(InvoiceReviewStatus::PendingReview)));
    let config = WorkflowConfig {
        require_invoice_review: true,
    };
    let mut wf = workflow_with(vec![case.clone()], config);

    let err = wf
        .mark_finished(case.id, Some(repair_date()), fixed_now())
        .unwrap_err();
    assert_eq!(
        err.missing_requirements,
        vec![MSG_INVOICE_UNREVIEWED.to_string()]
    );

    wf.set_invoice_review_status(case.id, InvoiceReviewStatus::Ok)
        .unwrap();
    let finished = wf
        .mark_finished(case.id, Some(repair_date()), fixed_now())
        .unwrap();
    assert_eq!(finished.stage, CaseStage::Finished);
}

#[test]
fn approve_ready_section() {
    let case = ready_for_in_progress_case();
    let mut wf = workflow_with(vec![case.clone()], WorkflowConfig::default());

    let approved = wf
        .approve_section(case.id, ApprovalSection::Images, "Agent Smith")
        .unwrap();
    assert_eq!(
        approved.images_approval_status,
        Some(SectionApprovalStatus::Approved)
    );
    assert_eq!(approved.action_log.last().unwrap().action_type, ActionType::Other);

    let err = wf
        .approve_section(case.id, ApprovalSection::Images, "Agent Smith")
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}

#[test]
fn incomplete_section_cannot_be_approved() {
    let mut wf = workflow();
    let case = wf.create_case(create_request("AB11111")).unwrap();
    let err = wf
        .approve_section(case.id, ApprovalSection::Calibration, "Agent Smith")
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(wf.get_case(case.id).unwrap().calibration_approval_status, None);
}

#[test]
fn approving_insurance_records_decision() {
    let mut case = ready_for_in_progress_case();
    case.insurance_coverage = Some(coverage(None));
    let mut wf = workflow_with(vec![case.clone()], WorkflowConfig::default());

    let approved = wf
        .approve_section(case.id, ApprovalSection::Insurance, "Agent Smith")
        .unwrap();
    assert_eq!(
        approved.insurance_coverage.as_ref().unwrap().status,
        Some(CoverageDecision::Approved)
    );
    assert_eq!(
        approved.action_log.last().unwrap().action_type,
        ActionType::InsuranceUpdated
    );

    let started = wf.mark_in_progress(case.id, fixed_now()).unwrap();
    assert_eq!(started.stage, CaseStage::InProgress);
}
