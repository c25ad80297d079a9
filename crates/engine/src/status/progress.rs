use shared_types::{CaseProgress, ProgressSection, ProgressSectionId, SectionProgress, WorkshopCase};

use super::predicates::{
    has_calibration_complete, has_ddf_complete, has_images_available,
    has_insurance_coverage_complete, has_invoice_present, has_new_log_messages,
    has_parts_and_labor_complete, is_invoice_reviewed_and_ok,
};
use super::resolve;

const PROGRESS_REQUIREMENTS: usize = 6;

/// Completed count over the six case requirements. The invoice only counts
/// once it was reviewed as OK.
pub fn calculate_case_progress<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> CaseProgress {
    let Some(c) = resolve(case) else {
        return CaseProgress {
            completed: 0,
            total: PROGRESS_REQUIREMENTS,
        };
    };
    let requirements = [
        has_ddf_complete(c),
        has_images_available(c),
        has_parts_and_labor_complete(c),
        has_insurance_coverage_complete(c),
        has_calibration_complete(c),
        is_invoice_reviewed_and_ok(c),
    ];
    CaseProgress {
        completed: requirements.iter().filter(|done| **done).count(),
        total: requirements.len(),
    }
}

fn section(id: ProgressSectionId, label: &str, is_complete: bool) -> ProgressSection {
    ProgressSection {
        id,
        label: label.to_string(),
        is_complete,
        is_required: true,
        has_new_messages: false,
    }
}

/// Rows of the case-detail progress tracker. `None` when there is no case.
///
/// The invoice row is complete once an invoice exists with a KID and a
/// non-zero total. The trailing log row is optional and never complete; it
/// only flags unseen messages.
pub fn section_progress<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> Option<SectionProgress> {
    let c = resolve(case)?;
    let invoice_complete = has_invoice_present(c)
        && c
            .invoice
            .as_ref()
            .map_or(false, |inv| !inv.kid.is_empty() && inv.total_amount != 0.0);

    let mut sections = vec![
        section(ProgressSectionId::CaseInfo, "Case Info", true),
        section(
            ProgressSectionId::Insurance,
            "Insurance",
            has_insurance_coverage_complete(c),
        ),
        section(ProgressSectionId::Ddf, "DDF Form", has_ddf_complete(c)),
        section(ProgressSectionId::Images, "Images", has_images_available(c)),
        section(
            ProgressSectionId::PartsLabor,
            "Parts & Labor",
            has_parts_and_labor_complete(c),
        ),
        section(
            ProgressSectionId::Calibration,
            "Calibration",
            has_calibration_complete(c),
        ),
        section(ProgressSectionId::Invoice, "Invoice", invoice_complete),
    ];
    sections.push(ProgressSection {
        id: ProgressSectionId::Log,
        label: "Log".to_string(),
        is_complete: false,
        is_required: false,
        has_new_messages: has_new_log_messages(c),
    });

    let total_required = sections.iter().filter(|s| s.is_required).count();
    let completed_required = sections
        .iter()
        .filter(|s| s.is_required && s.is_complete)
        .count();
    let percentage = if total_required == 0 {
        0
    } else {
        ((completed_required as f64 / total_required as f64) * 100.0).round() as u32
    };

    Some(SectionProgress {
        sections,
        completed_required,
        total_required,
        percentage,
    })
}
