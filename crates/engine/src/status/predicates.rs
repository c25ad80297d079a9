//! Section completeness predicates.

use shared_types::{
    ActorType, CoverageDecision, DdfStatus, InsuranceCoverageStatus, InvoiceReviewStatus,
    PartsLaborItem, WorkshopCase,
};

use super::resolve;

/// A damage-form file is attached.
pub fn has_ddf_file<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    resolve(case).map_or(false, |c| c.attachments.iter().any(|a| a.is_ddf_document()))
}

/// The damage form is marked complete *and* backed by an attached file.
pub fn has_ddf_complete<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    let Some(c) = resolve(case) else {
        return false;
    };
    let status_complete = c
        .assessment
        .as_ref()
        .map_or(false, |a| a.ddf_status == Some(DdfStatus::Complete));
    status_complete && has_ddf_file(c)
}

/// All three required photos are present, or images were waived with a reason.
pub fn has_images_available<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    let Some(c) = resolve(case) else {
        return false;
    };
    let required_present = c
        .required_images
        .as_ref()
        .map_or(false, |images| images.all_present());
    let waived = c.images_not_needed
        && c
            .images_not_needed_comment
            .as_deref()
            .map_or(false, |comment| !comment.trim().is_empty());
    required_present || waived
}

/// At least one part line and at least one labor line.
pub fn has_parts_and_labor_complete<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    let Some(c) = resolve(case) else {
        return false;
    };
    let items = &c.parts_and_labor.items;
    items.iter().any(PartsLaborItem::is_part) && items.iter().any(PartsLaborItem::is_labor)
}

/// Calibration waived, or required with a signature and at least one file.
pub fn has_calibration_complete<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    let Some(cal) = resolve(case).and_then(|c| c.calibration.as_ref()) else {
        return false;
    };
    if cal.not_needed {
        return true;
    }
    if cal.required {
        let signed = cal
            .signature
            .as_deref()
            .map_or(false, |s| !s.trim().is_empty());
        return signed && !cal.files.is_empty();
    }
    false
}

/// Coverage looked up, exists, and the insurer approved it.
pub fn has_insurance_coverage_complete<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    resolve(case)
        .and_then(|c| c.insurance_coverage.as_ref())
        .map_or(false, |cov| {
            cov.data_fetched && cov.exists && cov.status == Some(CoverageDecision::Approved)
        })
}

pub fn has_invoice_present<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    resolve(case).map_or(false, |c| c.invoice.is_some())
}

pub fn is_invoice_reviewed_and_ok<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    resolve(case)
        .and_then(|c| c.invoice.as_ref())
        .map_or(false, |inv| inv.review_status == Some(InvoiceReviewStatus::Ok))
}

/// DDF complete, images available and an invoice present.
pub fn has_all_documents<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    let Some(c) = resolve(case) else {
        return false;
    };
    has_ddf_complete(c) && has_images_available(c) && has_invoice_present(c)
}

/// Coverage status as displayed: `NotFetched` until the lookup succeeded,
/// then the insurer's decision (`Undefined` when none was recorded).
pub fn get_insurance_coverage_status<'a>(
    case: impl Into<Option<&'a WorkshopCase>>,
) -> InsuranceCoverageStatus {
    let Some(cov) = resolve(case)
        .and_then(|c| c.insurance_coverage.as_ref())
        .filter(|cov| cov.data_fetched)
    else {
        return InsuranceCoverageStatus::NotFetched;
    };
    match cov.status {
        Some(CoverageDecision::Approved) => InsuranceCoverageStatus::Approved,
        Some(CoverageDecision::NotApproved) => InsuranceCoverageStatus::NotApproved,
        Some(CoverageDecision::Undefined) | None => InsuranceCoverageStatus::Undefined,
    }
}

pub fn has_chat_activity<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    resolve(case).map_or(false, |c| !c.chat_log.is_empty())
}

pub fn has_action_log_activity<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    resolve(case).map_or(false, |c| !c.action_log.is_empty())
}

/// Any non-workshop log entry newer than the last time the log was viewed.
///
/// Entries written by the workshop itself never count. A log that was never
/// viewed is new as soon as it holds one such entry.
pub fn has_new_log_messages<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> bool {
    let Some(c) = resolve(case) else {
        return false;
    };
    c.action_log
        .iter()
        .filter(|entry| entry.actor_type != ActorType::Workshop)
        .any(|entry| c.last_log_viewed_at.map_or(true, |viewed| entry.timestamp > viewed))
}
