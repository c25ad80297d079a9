use engine::status::{calculate_case_progress, section_progress};
use pretty_assertions::assert_eq;
use shared_types::{
    ActionLogEntry, ActionType, ActorType, CaseProgress, InvoiceReviewStatus, ProgressSectionId,
    WorkshopCase,
};

use crate::common::*;

#[test]
fn absent_case_has_zero_of_six() {
    assert_eq!(
        calculate_case_progress(None::<&WorkshopCase>),
        CaseProgress {
            completed: 0,
            total: 6
        }
    );
}

#[test]
fn intake_complete_case_has_four_of_six() {
    assert_eq!(
        calculate_case_progress(&ready_for_in_progress_case()),
        CaseProgress {
            completed: 4,
            total: 6
        }
    );
}

#[test]
fn unreviewed_invoice_does_not_count() {
    let mut case = ready_for_completion_case();
    assert_eq!(calculate_case_progress(&case).completed, 6);

    case.invoice = Some(invoice(Some(InvoiceReviewStatus::PendingReview)));
    assert_eq!(calculate_case_progress(&case).completed, 5);
}

#[test]
fn tracker_rows_are_in_display_order() {
    let progress = section_progress(&blank_case()).unwrap();
    let ids: Vec<ProgressSectionId> = progress.sections.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        vec![
            ProgressSectionId::CaseInfo,
            ProgressSectionId::Insurance,
            ProgressSectionId::Ddf,
            ProgressSectionId::Images,
            ProgressSectionId::PartsLabor,
            ProgressSectionId::Calibration,
            ProgressSectionId::Invoice,
            ProgressSectionId::Log,
        ]
    );
    assert_eq!(progress.total_required, 7);
    assert_eq!(progress.completed_required, 1);
    assert_eq!(progress.percentage, 14);
}

#[test]
fn tracker_counts_any_invoice_with_kid_and_amount() {
    let mut case = ready_for_in_progress_case();
    case.invoice = Some(invoice(None));
    let progress = section_progress(&case).unwrap();
    assert_eq!(progress.completed_required, 6);
    assert_eq!(progress.percentage, 86);
}

#[test]
fn complete_case_reaches_full_percentage() {
    let progress = section_progress(&ready_for_completion_case()).unwrap();
    assert_eq!(progress.completed_required, 7);
    assert_eq!(progress.percentage, 100);
}

#[test]
fn log_row_flags_unseen_agent_message() {
    let case = WorkshopCase {
        action_log: vec![ActionLogEntry {
            id: "action-1".to_string(),
            action_type: ActionType::InvoiceReviewed,
            actor: "Agent Smith".to_string(),
            actor_type: ActorType::Agent,
            description: "Invoice reviewed".to_string(),
            timestamp: fixed_now(),
            metadata: None,
        }],
        ..blank_case()
    };
    let progress = section_progress(&case).unwrap();
    let log = progress.sections.last().unwrap();
    assert_eq!(log.id, ProgressSectionId::Log);
    assert!(log.has_new_messages);
    assert!(!log.is_required);
    assert!(!log.is_complete);
}
