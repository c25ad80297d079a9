use serde::{Deserialize, Serialize};

// ── Stage KPIs ───────────────────────────────────────────────────────

/// Figures for the draft column. Ages are in whole days averaged to 1 dp.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftKpis {
    pub total_draft: usize,
    pub missing_ddf: usize,
    pub missing_images: usize,
    pub missing_parts_labor: usize,
    pub average_age: f64,
    pub ready_for_approval: usize,
    /// Percentage of drafts ready to start work, rounded.
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InProgressKpis {
    pub total_in_progress: usize,
    pub with_repair_date: usize,
    pub average_time_in_stage: f64,
    pub ready_for_completion: usize,
    pub active_work: usize,
    pub repair_completion_rate: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwaitingInvoiceKpis {
    pub total_awaiting: usize,
    pub pending_review: usize,
    pub needs_correction: usize,
    pub average_wait_time: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnHoldKpis {
    pub total_on_hold: usize,
    pub waiting_for_parts: usize,
    pub average_hold_time: f64,
    pub longest_on_hold: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinishedKpis {
    pub total_finished: usize,
    pub finished_last_30_days: usize,
    pub average_completion_time: f64,
    pub total_revenue: f64,
}

/// Headline figures across every case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewKpis {
    pub active_jobs: usize,
    pub average_claims_process_time: f64,
    pub approved_claims_last_30_days: usize,
    /// Cancelled share of all cases, percent to 1 dp.
    pub claim_rejection_rate: f64,
    pub average_images_per_case: f64,
}

// ── Progress ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseProgress {
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProgressSectionId {
    CaseInfo,
    Insurance,
    Ddf,
    Images,
    PartsLabor,
    Calibration,
    Invoice,
    Log,
}

/// One row of the progress tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSection {
    pub id: ProgressSectionId,
    pub label: String,
    pub is_complete: bool,
    pub is_required: bool,
    #[serde(default)]
    pub has_new_messages: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgress {
    pub sections: Vec<ProgressSection>,
    pub completed_required: usize,
    pub total_required: usize,
    pub percentage: u32,
}
