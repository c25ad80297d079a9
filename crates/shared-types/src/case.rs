use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activity::{ActionLogEntry, ChatMessage};
use crate::status::{
    CasePriority, CaseStage, CaseStatus, CoverageDecision, DdfStatus, InvoiceReviewStatus,
    SectionApprovalStatus,
};

// ── Case record ─────────────────────────────────────────────────────

/// A workshop insurance claim, from intake through repair and invoicing.
///
/// Field names serialize in camelCase so a record round-trips with the
/// JSON a browser client produces. Every section is optional or empty on a
/// freshly created case; the status engine reads absence as "incomplete".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopCase {
    pub id: Uuid,
    pub case_number: String,
    pub stage: CaseStage,
    pub status: CaseStatus,
    pub priority: CasePriority,
    pub insurance_company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workshop_name: Option<String>,
    pub customer: Customer,
    pub vehicle: Vehicle,
    pub service: Service,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub parts_and_labor: PartsAndLabor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_images: Option<RequiredImages>,
    #[serde(default)]
    pub damage_images: Vec<CaseImage>,
    #[serde(default)]
    pub repair_images: Vec<CaseImage>,
    #[serde(default)]
    pub after_repair_images: Vec<CaseImage>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    #[serde(default)]
    pub chat_log: Vec<ChatMessage>,
    #[serde(default)]
    pub action_log: Vec<ActionLogEntry>,
    #[serde(default)]
    pub is_chat_log_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_log_viewed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<Calibration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_coverage: Option<InsuranceCoverage>,
    #[serde(default)]
    pub images_not_needed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_not_needed_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddf_approval_status: Option<SectionApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_approval_status: Option<SectionApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts_labor_approval_status: Option<SectionApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration_approval_status: Option<SectionApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_approval_status: Option<SectionApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_approval_status: Option<SectionApprovalStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub license_plate: String,
    pub color: String,
}

/// Repair job details. `repair_finished_date` gates completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "type")]
    pub service_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_finished_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub technician: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerType {
    #[default]
    Private,
    Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(rename = "type")]
    pub owner_type: OwnerType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_date: Option<NaiveDate>,
    pub address: String,
    pub postal_code: String,
    pub city: String,
}

// ── Parts & labor ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartStatus {
    Ordered,
    #[serde(rename = "In Stock")]
    InStock,
    Pending,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

/// Insurance agent's remark on a priced line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentComment {
    Approved,
    #[serde(rename = "Changed to price agreement")]
    ChangedToPriceAgreement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartItem {
    pub id: String,
    pub category: String,
    pub article_nr: String,
    pub quantity: u32,
    pub price: f64,
    pub discount: f64,
    pub total: f64,
    pub status: PartStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_comment: Option<AgentComment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborItem {
    pub id: String,
    pub description: String,
    pub hours: f64,
    pub rate_per_hour: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_comment: Option<AgentComment>,
}

/// A parts-and-labor line, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PartsLaborItem {
    Part(PartItem),
    Labor(LaborItem),
}

impl PartsLaborItem {
    pub fn is_part(&self) -> bool {
        matches!(self, Self::Part(_))
    }

    pub fn is_labor(&self) -> bool {
        matches!(self, Self::Labor(_))
    }

    pub fn total(&self) -> f64 {
        match self {
            Self::Part(p) => p.total,
            Self::Labor(l) => l.total,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsAndLabor {
    pub items: Vec<PartsLaborItem>,
    pub total_parts: f64,
    pub total_labor: f64,
    pub grand_total: f64,
}

impl PartsAndLabor {
    /// Build the section from its lines, summing the per-type totals.
    pub fn from_items(items: Vec<PartsLaborItem>) -> Self {
        let total_parts: f64 = items.iter().filter(|i| i.is_part()).map(|i| i.total()).sum();
        let total_labor: f64 = items.iter().filter(|i| i.is_labor()).map(|i| i.total()).sum();
        Self {
            items,
            total_parts,
            total_labor,
            grand_total: total_parts + total_labor,
        }
    }
}

// ── Images & files ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseImage {
    pub id: String,
    pub url: String,
    pub caption: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// The three photo slots a claim needs unless images are waived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_overview: Option<CaseImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass_close_up: Option<CaseImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_detail: Option<CaseImage>,
}

impl RequiredImages {
    pub fn all_present(&self) -> bool {
        self.vehicle_overview.is_some() && self.glass_close_up.is_some() && self.damage_detail.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Image,
    #[default]
    Document,
    Video,
    Other,
}

/// Explicit category of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Ddf,
    Invoice,
    Calibration,
    Other,
}

/// Marker looked for in legacy attachment names that carry no [`DocumentKind`].
pub const DDF_NAME_MARKER: &str = "ddf";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub attachment_type: AttachmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub url: String,
}

impl Attachment {
    /// Whether this attachment is a damage-form file.
    ///
    /// An explicit `kind` decides. Records without one fall back to the
    /// legacy rule: a document whose name contains "ddf" in any case.
    pub fn is_ddf_document(&self) -> bool {
        match self.kind {
            Some(kind) => kind == DocumentKind::Ddf,
            None => {
                self.attachment_type == AttachmentType::Document
                    && self.name.to_lowercase().contains(DDF_NAME_MARKER)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub text: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

// ── Assessment (DDF) ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub damage_description: String,
    pub recommended_action: String,
    pub estimated_cost: f64,
    pub assessed_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddf_status: Option<DdfStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wear_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause_of_damage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wear_and_tear: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
}

impl Assessment {
    /// Drop everything that was read out of a damage form.
    pub fn clear_ddf_metadata(&mut self) {
        self.damage_date = None;
        self.glass_type = None;
        self.location = None;
        self.wear_level = None;
        self.damage_type = None;
        self.cause_of_damage = None;
        self.wear_and_tear = None;
        self.place = None;
        self.claim_id = None;
    }
}

// ── Calibration ─────────────────────────────────────────────────────

/// ADAS camera calibration. Complete when waived, or when required and
/// both signed and documented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub not_needed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub files: Vec<Attachment>,
}

// ── Insurance coverage ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    #[default]
    Private,
    Business,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceCoverage {
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<f64>,
    pub policy_type: PolicyType,
    pub vat_liable: bool,
    pub deductible: f64,
    /// Set once the insurer lookup returned data.
    pub data_fetched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CoverageDecision>,
}

// ── Invoice ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_number: String,
    /// Norwegian payment reference.
    pub kid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub total_amount: f64,
    pub file_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_status: Option<InvoiceReviewStatus>,
}

impl Invoice {
    /// KID, amount, number and due date are all filled in (a zero amount counts as missing).
    pub fn has_all_required_fields(&self) -> bool {
        !self.kid.is_empty()
            && self.total_amount != 0.0
            && !self.invoice_number.is_empty()
            && self.due_date.is_some()
    }
}
