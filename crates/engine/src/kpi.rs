//! Dashboard buckets and the figures shown above each column.
//!
//! Every function takes the case list and `now` explicitly. Day differences
//! round up to whole days; averages round to one decimal.

use chrono::{DateTime, Duration, Utc};
use shared_types::{
    AwaitingInvoiceKpis, CaseStage, CaseStatus, DraftKpis, FinishedKpis, InProgressKpis,
    InvoiceReviewStatus, OnHoldKpis, OverviewKpis, WorkshopCase,
};

use crate::status::{
    has_ddf_complete, has_images_available, has_parts_and_labor_complete,
    is_case_ready_for_completion, is_case_ready_for_in_progress,
};

const RECENT_WINDOW_DAYS: i64 = 30;

/// Whole days from `from` to `to`, rounded up.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let ms = (to - from).num_milliseconds();
    (ms as f64 / Duration::days(1).num_milliseconds() as f64).ceil() as i64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn average(sum: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        round1(sum as f64 / count as f64)
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u32
    }
}

// ── Buckets ───────────────────────────────────────────────────────

fn by_stage(cases: &[WorkshopCase], stage: CaseStage) -> Vec<&WorkshopCase> {
    cases.iter().filter(|c| c.stage == stage).collect()
}

pub fn draft_cases(cases: &[WorkshopCase]) -> Vec<&WorkshopCase> {
    by_stage(cases, CaseStage::Draft)
}

pub fn in_progress_cases(cases: &[WorkshopCase]) -> Vec<&WorkshopCase> {
    by_stage(cases, CaseStage::InProgress)
}

pub fn finished_cases(cases: &[WorkshopCase]) -> Vec<&WorkshopCase> {
    by_stage(cases, CaseStage::Finished)
}

/// In-progress cases whose invoice is pending review or needs correction.
pub fn awaiting_invoice_cases(cases: &[WorkshopCase]) -> Vec<&WorkshopCase> {
    cases
        .iter()
        .filter(|c| c.stage == CaseStage::InProgress)
        .filter(|c| {
            matches!(
                c.invoice.as_ref().and_then(|inv| inv.review_status),
                Some(InvoiceReviewStatus::PendingReview | InvoiceReviewStatus::NeedsCorrection)
            )
        })
        .collect()
}

pub fn on_hold_cases(cases: &[WorkshopCase]) -> Vec<&WorkshopCase> {
    cases
        .iter()
        .filter(|c| c.status == CaseStatus::WaitingParts)
        .collect()
}

// ── Stage KPIs ────────────────────────────────────────────────────

pub fn draft_kpis(cases: &[WorkshopCase], now: DateTime<Utc>) -> DraftKpis {
    let drafts = draft_cases(cases);
    let total = drafts.len();
    let age_sum: i64 = drafts.iter().map(|c| days_between(c.created_at, now)).sum();
    let ready = drafts
        .iter()
        .filter(|c| is_case_ready_for_in_progress(**c))
        .count();

    DraftKpis {
        total_draft: total,
        missing_ddf: drafts.iter().filter(|c| !has_ddf_complete(**c)).count(),
        missing_images: drafts.iter().filter(|c| !has_images_available(**c)).count(),
        missing_parts_labor: drafts
            .iter()
            .filter(|c| !has_parts_and_labor_complete(**c))
            .count(),
        average_age: average(age_sum, total),
        ready_for_approval: ready,
        completion_rate: percent(ready, total),
    }
}

/// A case without a repair date is judged as if the repair finished today.
pub fn in_progress_kpis(cases: &[WorkshopCase], now: DateTime<Utc>) -> InProgressKpis {
    let active = in_progress_cases(cases);
    let total = active.len();
    let with_repair_date = active
        .iter()
        .filter(|c| c.service.repair_finished_date.is_some())
        .count();
    let stage_sum: i64 = active.iter().map(|c| days_between(c.updated_at, now)).sum();
    let ready = active
        .iter()
        .filter(|c| {
            let mut candidate = (**c).clone();
            candidate
                .service
                .repair_finished_date
                .get_or_insert(now.date_naive());
            is_case_ready_for_completion(&candidate)
        })
        .count();

    InProgressKpis {
        total_in_progress: total,
        with_repair_date,
        average_time_in_stage: average(stage_sum, total),
        ready_for_completion: ready,
        active_work: active
            .iter()
            .filter(|c| c.status == CaseStatus::InProgress)
            .count(),
        repair_completion_rate: percent(with_repair_date, total),
    }
}

/// Cases without an issue date add nothing to the wait but still count in the average.
pub fn awaiting_invoice_kpis(cases: &[WorkshopCase], now: DateTime<Utc>) -> AwaitingInvoiceKpis {
    let awaiting = awaiting_invoice_cases(cases);
    let total = awaiting.len();
    let review = |status: InvoiceReviewStatus| {
        awaiting
            .iter()
            .filter(|c| c.invoice.as_ref().and_then(|i| i.review_status) == Some(status))
            .count()
    };
    let wait_sum: i64 = awaiting
        .iter()
        .filter_map(|c| c.invoice.as_ref()?.issue_date)
        .map(|issued| days_between(issued, now))
        .sum();

    AwaitingInvoiceKpis {
        total_awaiting: total,
        pending_review: review(InvoiceReviewStatus::PendingReview),
        needs_correction: review(InvoiceReviewStatus::NeedsCorrection),
        average_wait_time: average(wait_sum, total),
    }
}

pub fn on_hold_kpis(cases: &[WorkshopCase], now: DateTime<Utc>) -> OnHoldKpis {
    let on_hold = on_hold_cases(cases);
    let holds: Vec<i64> = on_hold
        .iter()
        .map(|c| days_between(c.updated_at, now))
        .collect();

    OnHoldKpis {
        total_on_hold: on_hold.len(),
        waiting_for_parts: on_hold.len(),
        average_hold_time: average(holds.iter().sum(), holds.len()),
        longest_on_hold: holds.iter().copied().max().unwrap_or(0),
    }
}

pub fn finished_kpis(cases: &[WorkshopCase], now: DateTime<Utc>) -> FinishedKpis {
    let finished = finished_cases(cases);
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
    let durations: Vec<i64> = finished
        .iter()
        .filter_map(|c| Some(days_between(c.service.start_date?, c.service.completion_date?)))
        .collect();

    FinishedKpis {
        total_finished: finished.len(),
        finished_last_30_days: finished
            .iter()
            .filter(|c| c.service.completion_date.map_or(false, |d| d >= window_start))
            .count(),
        average_completion_time: average(durations.iter().sum(), durations.len()),
        total_revenue: finished
            .iter()
            .map(|c| c.parts_and_labor.total_parts + c.parts_and_labor.total_labor)
            .sum(),
    }
}

pub fn overview_kpis(cases: &[WorkshopCase], now: DateTime<Utc>) -> OverviewKpis {
    let closed_durations: Vec<i64> = cases
        .iter()
        .filter(|c| matches!(c.status, CaseStatus::Completed | CaseStatus::Cancelled))
        .filter_map(|c| Some(days_between(c.service.start_date?, c.service.completion_date?)))
        .collect();
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
    let cancelled = cases
        .iter()
        .filter(|c| c.status == CaseStatus::Cancelled)
        .count();
    let images: usize = cases.iter().map(|c| c.damage_images.len()).sum();

    OverviewKpis {
        active_jobs: cases
            .iter()
            .filter(|c| !matches!(c.status, CaseStatus::Completed | CaseStatus::Cancelled))
            .count(),
        average_claims_process_time: average(closed_durations.iter().sum(), closed_durations.len()),
        approved_claims_last_30_days: cases
            .iter()
            .filter(|c| c.status == CaseStatus::Completed && c.updated_at >= window_start)
            .count(),
        claim_rejection_rate: if cases.is_empty() {
            0.0
        } else {
            round1(cancelled as f64 / cases.len() as f64 * 100.0)
        },
        average_images_per_case: if cases.is_empty() {
            0.0
        } else {
            round1(images as f64 / cases.len() as f64)
        },
    }
}
