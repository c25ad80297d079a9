//! The four status lights shown for a case: coverage, damage form, images, invoice.
//!
//! Each light is its own first-match-wins chain. An approval override of
//! `approved` or `ready_for_approval` is checked before any data.

use shared_types::{
    CaseStatusIcons, CoverageDecision, InvoiceIconStatus, InvoiceReviewStatus,
    SectionApprovalStatus, SectionIconStatus, WorkshopCase,
};

use super::predicates::{has_ddf_complete, has_images_available};
use super::resolve;

fn from_override(status: Option<SectionApprovalStatus>) -> Option<SectionIconStatus> {
    match status {
        Some(SectionApprovalStatus::Approved) => Some(SectionIconStatus::Complete),
        Some(SectionApprovalStatus::ReadyForApproval) => Some(SectionIconStatus::ReadyForApproval),
        _ => None,
    }
}

fn from_data(complete: bool) -> SectionIconStatus {
    if complete {
        SectionIconStatus::Complete
    } else {
        SectionIconStatus::Incomplete
    }
}

pub fn coverage_icon<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> SectionIconStatus {
    let Some(c) = resolve(case) else {
        return SectionIconStatus::Incomplete;
    };
    if let Some(status) = from_override(c.insurance_approval_status) {
        return status;
    }
    match c.insurance_coverage.as_ref().filter(|cov| cov.data_fetched) {
        Some(cov) if cov.exists && cov.status == Some(CoverageDecision::Approved) => {
            SectionIconStatus::Complete
        }
        Some(cov) if cov.status == Some(CoverageDecision::NotApproved) => {
            SectionIconStatus::NeedsCorrection
        }
        _ => SectionIconStatus::Incomplete,
    }
}

/// Never reports `NeedsCorrection`; the damage form is either complete or not.
pub fn damage_icon<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> SectionIconStatus {
    let Some(c) = resolve(case) else {
        return SectionIconStatus::Incomplete;
    };
    from_override(c.ddf_approval_status).unwrap_or_else(|| from_data(has_ddf_complete(c)))
}

pub fn images_icon<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> SectionIconStatus {
    let Some(c) = resolve(case) else {
        return SectionIconStatus::Incomplete;
    };
    from_override(c.images_approval_status).unwrap_or_else(|| from_data(has_images_available(c)))
}

/// The review outcome is only consulted once every required invoice field is filled.
pub fn invoice_icon<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> InvoiceIconStatus {
    let Some(c) = resolve(case) else {
        return InvoiceIconStatus::Incomplete;
    };
    match c.invoice_approval_status {
        Some(SectionApprovalStatus::Approved) => return InvoiceIconStatus::Approved,
        Some(SectionApprovalStatus::ReadyForApproval) => {
            return InvoiceIconStatus::ReadyForApproval
        }
        _ => {}
    }
    match c.invoice.as_ref().filter(|inv| inv.has_all_required_fields()) {
        Some(inv) => match inv.review_status {
            Some(InvoiceReviewStatus::Ok) => InvoiceIconStatus::Approved,
            Some(InvoiceReviewStatus::NeedsCorrection) => InvoiceIconStatus::NeedsCorrection,
            _ => InvoiceIconStatus::Incomplete,
        },
        None => InvoiceIconStatus::Incomplete,
    }
}

pub fn get_case_status_icons<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> CaseStatusIcons {
    let case = resolve(case);
    CaseStatusIcons {
        coverage: coverage_icon(case),
        damage: damage_icon(case),
        images: images_icon(case),
        invoice: invoice_icon(case),
    }
}

/// Hover text for each light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTooltips {
    pub coverage: &'static str,
    pub damage: &'static str,
    pub images: &'static str,
    pub invoice: &'static str,
}

fn section_tooltip(
    status: SectionIconStatus,
    complete: &'static str,
    ready: &'static str,
    correction: &'static str,
    incomplete: &'static str,
) -> &'static str {
    match status {
        SectionIconStatus::Complete => complete,
        SectionIconStatus::ReadyForApproval => ready,
        SectionIconStatus::NeedsCorrection => correction,
        SectionIconStatus::Incomplete => incomplete,
    }
}

pub fn status_tooltips<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> StatusTooltips {
    let case = resolve(case);
    let icons = get_case_status_icons(case);
    let fetched = case
        .and_then(|c| c.insurance_coverage.as_ref())
        .map_or(false, |cov| cov.data_fetched);

    StatusTooltips {
        coverage: section_tooltip(
            icons.coverage,
            "Coverage: Approved",
            "Coverage: Ready for Approval",
            "Coverage: Not Approved",
            if fetched {
                "Coverage: Incomplete"
            } else {
                "Coverage: Not Verified"
            },
        ),
        damage: section_tooltip(
            icons.damage,
            "DDF: Complete",
            "DDF: Ready for Approval",
            "DDF: Needs Correction",
            "DDF: Incomplete",
        ),
        images: section_tooltip(
            icons.images,
            "Images: Complete",
            "Images: Ready for Approval",
            "Images: Needs Correction",
            "Images: Incomplete",
        ),
        invoice: match icons.invoice {
            InvoiceIconStatus::Approved => "Invoice: Approved",
            InvoiceIconStatus::ReadyForApproval => "Invoice: Ready for Approval",
            InvoiceIconStatus::NeedsCorrection => "Invoice: Needs Correction",
            InvoiceIconStatus::Incomplete => "Invoice: Incomplete",
        },
    }
}
