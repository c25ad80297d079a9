//! Stage-transition gates and their human-readable explanations.
//!
//! The gates read raw data predicates only; approval overrides do not
//! bypass them. The explanation lists are ordered and user-facing.
//!
//! The completion gate accepts any invoice, while its explanation also asks
//! for a reviewed invoice. The two can disagree for an unreviewed invoice.
//! Callers that need the stricter rule combine the gate with
//! [`is_invoice_reviewed_and_ok`].

use shared_types::{InsuranceCoverageStatus, WorkshopCase};

use super::predicates::{
    get_insurance_coverage_status, has_calibration_complete, has_ddf_complete,
    has_images_available, has_insurance_coverage_complete, has_invoice_present,
    has_parts_and_labor_complete, is_invoice_reviewed_and_ok,
};
use super::resolve;

pub const MSG_CASE_UNAVAILABLE: &str = "Case data not available";
pub const MSG_DDF: &str = "Digital Damage Form (DDF) must be completed";
pub const MSG_IMAGES: &str =
    "Images must be uploaded (minimum 4) or marked as not needed with reason";
pub const MSG_PARTS_LABOR: &str = "Parts and Labor details must be completed";
pub const MSG_INSURANCE_NOT_FETCHED: &str = "Insurance coverage must be verified and fetched";
pub const MSG_INSURANCE_NOT_APPROVED: &str =
    "Insurance coverage must be approved (currently: Not Approved)";
pub const MSG_INSURANCE_UNDEFINED: &str =
    "Insurance coverage status must be set to approved (currently: Undefined)";
pub const MSG_INVOICE_MISSING: &str = "Invoice must be generated";
pub const MSG_INVOICE_UNREVIEWED: &str = "Invoice must be reviewed and approved";
pub const MSG_CALIBRATION: &str = "Calibration must be completed or marked as not needed";
pub const MSG_REPAIR_DATE: &str = "Repair finished date must be set";

fn has_repair_finished_date(case: &WorkshopCase) -> bool {
    case.service.repair_finished_date.is_some()
}

pub fn is_case_ready_for_in_progress<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    let Some(c) = resolve(case) else {
        return false;
    };
    has_ddf_complete(c)
        && has_images_available(c)
        && has_parts_and_labor_complete(c)
        && has_insurance_coverage_complete(c)
}

/// Requires an invoice to be present, not reviewed.
pub fn is_case_ready_for_completion<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    let Some(c) = resolve(case) else {
        return false;
    };
    has_ddf_complete(c)
        && has_images_available(c)
        && has_parts_and_labor_complete(c)
        && has_invoice_present(c)
        && has_calibration_complete(c)
        && has_repair_finished_date(c)
}

pub fn get_missing_requirements_for_in_progress<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> Vec<String> {
    let Some(c) = resolve(case) else {
        return vec![MSG_CASE_UNAVAILABLE.to_string()];
    };

    let mut missing = Vec::new();
    if !has_ddf_complete(c) {
        missing.push(MSG_DDF);
    }
    if !has_images_available(c) {
        missing.push(MSG_IMAGES);
    }
    if !has_parts_and_labor_complete(c) {
        missing.push(MSG_PARTS_LABOR);
    }
    if !has_insurance_coverage_complete(c) {
        // An approved decision on a policy that does not exist adds no message.
        match get_insurance_coverage_status(c) {
            InsuranceCoverageStatus::NotFetched => missing.push(MSG_INSURANCE_NOT_FETCHED),
            InsuranceCoverageStatus::NotApproved => missing.push(MSG_INSURANCE_NOT_APPROVED),
            InsuranceCoverageStatus::Undefined => missing.push(MSG_INSURANCE_UNDEFINED),
            InsuranceCoverageStatus::Approved => {}
        }
    }
    missing.into_iter().map(str::to_string).collect()
}

pub fn get_missing_requirements_for_completion<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> Vec<String> {
    let Some(c) = resolve(case) else {
        return vec![MSG_CASE_UNAVAILABLE.to_string()];
    };

    let checks = [
        (has_ddf_complete(c), MSG_DDF),
        (has_images_available(c), MSG_IMAGES),
        (has_parts_and_labor_complete(c), MSG_PARTS_LABOR),
        (has_invoice_present(c), MSG_INVOICE_MISSING),
        (is_invoice_reviewed_and_ok(c), MSG_INVOICE_UNREVIEWED),
        (has_calibration_complete(c), MSG_CALIBRATION),
        (has_repair_finished_date(c), MSG_REPAIR_DATE),
    ];
    checks
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, msg)| msg.to_string())
        .collect()
}
