//! Closed status vocabularies shared by the status engine and its consumers.
//!
//! Every enum serializes to the exact literal a UI branches on, so the
//! badge and button logic can match on values without string typos.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Lifecycle ─────────────────────────────────────────────────

/// Coarse lifecycle position of a case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CaseStage {
    #[default]
    Draft,
    InProgress,
    Finished,
}

impl CaseStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for CaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display/business status, loosely correlated with [`CaseStage`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CaseStatus {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Waiting Parts")]
    WaitingParts,
    Ready,
    Completed,
    Cancelled,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::WaitingParts => "Waiting Parts",
            Self::Ready => "Ready",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CasePriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

// ─── Section vocabularies ──────────────────────────────────────

/// Self-reported status of the digital damage form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DdfStatus {
    #[default]
    NonExistent,
    PartiallyDone,
    Complete,
}

/// Insurer decision recorded on the coverage record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CoverageDecision {
    Approved,
    NotApproved,
    Undefined,
}

/// Review outcome of an uploaded invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceReviewStatus {
    PendingReview,
    NeedsCorrection,
    Ok,
}

impl InvoiceReviewStatus {
    /// Human-readable label used in action-log descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PendingReview => "Pending Review",
            Self::NeedsCorrection => "Needs Correction",
            Self::Ok => "Approved",
        }
    }
}

// ─── Derived statuses ──────────────────────────────────────────

/// Approval state of one gated workflow section.
///
/// Data completeness only ever unlocks `ReadyForApproval`; `Approved` comes
/// exclusively from the section's override field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionApprovalStatus {
    Incomplete,
    ReadyForApproval,
    Approved,
}

impl SectionApprovalStatus {
    pub fn badge_text(&self) -> &'static str {
        match self {
            Self::Incomplete => "Incomplete",
            Self::ReadyForApproval => "Ready for Approval",
            Self::Approved => "Approved",
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            Self::Approved => StatusColor::Green,
            Self::Incomplete | Self::ReadyForApproval => StatusColor::Yellow,
        }
    }
}

/// The six sections that carry an approval override.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalSection {
    Ddf,
    Images,
    PartsLabor,
    Calibration,
    Invoice,
    Insurance,
}

impl ApprovalSection {
    pub const ALL: [ApprovalSection; 6] = [
        Self::Ddf,
        Self::Images,
        Self::PartsLabor,
        Self::Calibration,
        Self::Invoice,
        Self::Insurance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ddf => "ddf",
            Self::Images => "images",
            Self::PartsLabor => "parts_labor",
            Self::Calibration => "calibration",
            Self::Invoice => "invoice",
            Self::Insurance => "insurance",
        }
    }
}

impl fmt::Display for ApprovalSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coverage status as shown on the insurance section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceCoverageStatus {
    Approved,
    NotApproved,
    Undefined,
    NotFetched,
}

/// Value of the coverage, damage and images lights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionIconStatus {
    Complete,
    Incomplete,
    NeedsCorrection,
    ReadyForApproval,
}

impl SectionIconStatus {
    pub fn color(&self) -> StatusColor {
        match self {
            Self::Complete => StatusColor::Green,
            Self::NeedsCorrection => StatusColor::Red,
            Self::Incomplete | Self::ReadyForApproval => StatusColor::Yellow,
        }
    }
}

/// Value of the invoice light. Uses `Approved` where the other lights say `Complete`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceIconStatus {
    Approved,
    Incomplete,
    NeedsCorrection,
    ReadyForApproval,
}

impl InvoiceIconStatus {
    pub fn color(&self) -> StatusColor {
        match self {
            Self::Approved => StatusColor::Green,
            Self::NeedsCorrection => StatusColor::Red,
            Self::Incomplete | Self::ReadyForApproval => StatusColor::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Green,
    Red,
    Yellow,
}

/// The four status lights rendered for a case row or card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseStatusIcons {
    pub coverage: SectionIconStatus,
    pub damage: SectionIconStatus,
    pub images: SectionIconStatus,
    pub invoice: InvoiceIconStatus,
}
