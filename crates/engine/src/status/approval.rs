//! Per-section approval status.
//!
//! Readiness only ever unlocks `ReadyForApproval`. `Approved` is reported
//! solely when the section's override field says so; an override holding any
//! other value is ignored.

use shared_types::{ApprovalSection, SectionApprovalStatus, WorkshopCase};

use super::predicates::{
    has_calibration_complete, has_ddf_file, has_images_available, has_invoice_present,
    has_parts_and_labor_complete,
};
use super::resolve;

fn derive(
    override_status: Option<SectionApprovalStatus>,
    ready: bool,
) -> SectionApprovalStatus {
    if override_status == Some(SectionApprovalStatus::Approved) {
        SectionApprovalStatus::Approved
    } else if ready {
        SectionApprovalStatus::ReadyForApproval
    } else {
        SectionApprovalStatus::Incomplete
    }
}

/// Ready as soon as a damage-form file is attached, regardless of `ddfStatus`.
pub fn get_ddf_approval_status<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> SectionApprovalStatus {
    resolve(case).map_or(SectionApprovalStatus::Incomplete, |c| {
        derive(c.ddf_approval_status, has_ddf_file(c))
    })
}

pub fn get_images_approval_status<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> SectionApprovalStatus {
    resolve(case).map_or(SectionApprovalStatus::Incomplete, |c| {
        derive(c.images_approval_status, has_images_available(c))
    })
}

pub fn get_parts_labor_approval_status<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> SectionApprovalStatus {
    resolve(case).map_or(SectionApprovalStatus::Incomplete, |c| {
        derive(c.parts_labor_approval_status, has_parts_and_labor_complete(c))
    })
}

pub fn get_calibration_approval_status<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> SectionApprovalStatus {
    resolve(case).map_or(SectionApprovalStatus::Incomplete, |c| {
        derive(c.calibration_approval_status, has_calibration_complete(c))
    })
}

pub fn get_invoice_approval_status<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> SectionApprovalStatus {
    resolve(case).map_or(SectionApprovalStatus::Incomplete, |c| {
        derive(c.invoice_approval_status, has_invoice_present(c))
    })
}

/// Ready once coverage data was fetched and exists. The insurer's decision
/// is not consulted here.
pub fn get_insurance_approval_status<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> SectionApprovalStatus {
    resolve(case).map_or(SectionApprovalStatus::Incomplete, |c| {
        let has_data = c
            .insurance_coverage
            .as_ref()
            .map_or(false, |cov| cov.data_fetched && cov.exists);
        derive(c.insurance_approval_status, has_data)
    })
}

pub fn approval_status<'a>(
    section: ApprovalSection,
    case: impl Into<Option<&'a WorkshopCase>>,
) -> SectionApprovalStatus {
    let case = resolve(case);
    match section {
        ApprovalSection::Ddf => get_ddf_approval_status(case),
        ApprovalSection::Images => get_images_approval_status(case),
        ApprovalSection::PartsLabor => get_parts_labor_approval_status(case),
        ApprovalSection::Calibration => get_calibration_approval_status(case),
        ApprovalSection::Invoice => get_invoice_approval_status(case),
        ApprovalSection::Insurance => get_insurance_approval_status(case),
    }
}

/// Mutable access to the override field backing `section`.
pub fn approval_override_mut(
    case: &mut WorkshopCase,
    section: ApprovalSection,
) -> &mut Option<SectionApprovalStatus> {
    match section {
        ApprovalSection::Ddf => &mut case.ddf_approval_status,
        ApprovalSection::Images => &mut case.images_approval_status,
        ApprovalSection::PartsLabor => &mut case.parts_labor_approval_status,
        ApprovalSection::Calibration => &mut case.calibration_approval_status,
        ApprovalSection::Invoice => &mut case.invoice_approval_status,
        ApprovalSection::Insurance => &mut case.insurance_approval_status,
    }
}
