use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::case::{
    Assessment, Calibration, CaseImage, Customer, InsuranceCoverage, Note, Owner, PartsAndLabor,
    RequiredImages, Service, Vehicle,
};
use crate::status::{CasePriority, CaseStage, CaseStatus};

/// Request DTO for opening a new case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateCaseRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "License plate is required"))
    )]
    pub license_plate: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Insurance company is required"))
    )]
    pub insurance_company: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Customer name is required"))
    )]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub workshop_name: Option<String>,
    #[serde(default)]
    pub vehicle_make: String,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default)]
    pub vehicle_year: i32,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub priority: CasePriority,
}

impl CreateCaseRequest {
    /// Copy with surrounding whitespace stripped from the required fields,
    /// so blank input fails the required checks.
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.license_plate,
            &mut self.insurance_company,
            &mut self.customer_name,
        ] {
            *field = field.trim().to_string();
        }
        self
    }
}

/// Partial update applied to an existing case. `None` leaves a field untouched.
///
/// Approval overrides are deliberately absent; they are set through the
/// section approval action only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseUpdate {
    #[serde(default)]
    pub stage: Option<CaseStage>,
    #[serde(default)]
    pub status: Option<CaseStatus>,
    #[serde(default)]
    pub priority: Option<CasePriority>,
    #[serde(default)]
    pub insurance_company: Option<String>,
    /// A blank name clears the field.
    #[serde(default)]
    pub workshop_name: Option<String>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub parts_and_labor: Option<PartsAndLabor>,
    #[serde(default)]
    pub required_images: Option<RequiredImages>,
    #[serde(default)]
    pub damage_images: Option<Vec<CaseImage>>,
    #[serde(default)]
    pub repair_images: Option<Vec<CaseImage>>,
    #[serde(default)]
    pub after_repair_images: Option<Vec<CaseImage>>,
    #[serde(default)]
    pub notes: Option<Vec<Note>>,
    #[serde(default)]
    pub assessment: Option<Assessment>,
    #[serde(default)]
    pub calibration: Option<Calibration>,
    #[serde(default)]
    pub insurance_coverage: Option<InsuranceCoverage>,
    #[serde(default)]
    pub images_not_needed: Option<bool>,
    /// A blank comment clears the field.
    #[serde(default)]
    pub images_not_needed_comment: Option<String>,
    #[serde(default)]
    pub is_chat_log_enabled: Option<bool>,
}

/// Edits to an existing invoice. `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Size recorded for an upload whose size was not reported.
pub const DEFAULT_UPLOAD_SIZE: u64 = 1_024_000;

/// A file handed to one of the upload actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub url: String,
    #[serde(default = "default_upload_size")]
    pub size: u64,
}

fn default_upload_size() -> u64 {
    DEFAULT_UPLOAD_SIZE
}

impl FileUpload {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            size: DEFAULT_UPLOAD_SIZE,
        }
    }
}
