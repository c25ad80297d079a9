//! Workflow actions that mutate cases through a [`CaseRepository`].
//!
//! Every mutation stamps `updated_at`, appends to the case's action log
//! where the workshop expects a trace, and emits a tracing event. Stage
//! transitions go through the status engine gates.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rand::Rng;
use serde_json::json;
use shared_types::{
    ActionLogEntry, ActionType, ActorType, AppError, ApprovalSection, Assessment, Attachment,
    AttachmentType, Calibration, CaseStage, CaseStatus, CaseUpdate, ChatMessage,
    CoverageDecision, CreateCaseRequest, Customer, DdfStatus, DocumentKind, FileUpload, Invoice,
    InvoiceDetails, InvoiceReviewStatus, Note, SectionApprovalStatus, Service, Vehicle, WorkflowConfig,
    WorkshopCase,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error_convert::ValidateRequest;
use crate::repo::CaseRepository;
use crate::status::{
    approval_override_mut, approval_status, get_missing_requirements_for_completion,
    get_missing_requirements_for_in_progress, is_case_ready_for_completion,
    is_case_ready_for_in_progress, is_invoice_reviewed_and_ok, MSG_INVOICE_UNREVIEWED,
    MSG_REPAIR_DATE,
};

pub const WORKSHOP_ACTOR: &str = "Workshop User";
pub const SYSTEM_ACTOR: &str = "System";

/// Prefix of every generated case number, followed by the year and a sequence.
pub const CASE_NUMBER_PREFIX: &str = "BS";
/// Days between invoice issue and due date.
pub const INVOICE_DUE_DAYS: i64 = 30;

pub struct CaseWorkflow<R: CaseRepository> {
    repo: R,
    config: WorkflowConfig,
}

impl<R: CaseRepository> CaseWorkflow<R> {
    pub fn new(repo: R, config: WorkflowConfig) -> Self {
        Self { repo, config }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    pub fn get_case(&self, id: Uuid) -> Result<WorkshopCase, AppError> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Case with id {} not found", id)))
    }

    pub fn list_cases(&self) -> Vec<WorkshopCase> {
        self.repo.list()
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Open a draft case with blank sections and a fresh case number.
    #[tracing::instrument(skip(self))]
    pub fn create_case(&mut self, req: CreateCaseRequest) -> Result<WorkshopCase, AppError> {
        let req = req.trimmed();
        req.validate_request()?;

        let now = Utc::now();
        let case_number = self.next_case_number(now.year());
        let mut case = WorkshopCase {
            id: Uuid::new_v4(),
            case_number,
            stage: CaseStage::Draft,
            status: CaseStatus::New,
            priority: req.priority,
            insurance_company: req.insurance_company,
            workshop_name: req.workshop_name.filter(|w| !w.trim().is_empty()),
            customer: Customer {
                name: req.customer_name,
                email: req.customer_email,
                phone: req.customer_phone,
            },
            vehicle: Vehicle {
                make: req.vehicle_make,
                model: req.vehicle_model,
                year: req.vehicle_year,
                license_plate: normalize_plate(&req.license_plate),
                ..Default::default()
            },
            service: Service {
                service_type: req.service_type,
                ..Default::default()
            },
            is_chat_log_enabled: true,
            created_at: now,
            updated_at: now,
            ..Default::default()
        };
        let description = format!("Case {} created", case.case_number);
        let plate = case.vehicle.license_plate.clone();
        log_action(
            &mut case,
            ActionType::CaseCreated,
            SYSTEM_ACTOR,
            ActorType::System,
            description,
            Some(json!({ "licensePlate": plate })),
            now,
        );

        let case = self.repo.insert(case)?;
        info!(case_id = %case.id, case_number = %case.case_number, "case created");
        Ok(case)
    }

    /// Apply a partial update, logging the changes the workshop cares about.
    ///
    /// Stage and status are taken as given here; the gated transitions are
    /// [`mark_in_progress`](Self::mark_in_progress) and
    /// [`mark_finished`](Self::mark_finished).
    #[tracing::instrument(skip(self, update))]
    pub fn update_case(&mut self, id: Uuid, update: CaseUpdate) -> Result<WorkshopCase, AppError> {
        let old = self.get_case(id)?;
        let case = apply_update(old, update, Utc::now());
        self.repo.save(case)
    }

    #[tracing::instrument(skip(self))]
    pub fn delete_case(&mut self, id: Uuid, reason: Option<&str>) -> Result<(), AppError> {
        self.repo.delete(id)?;
        info!(case_id = %id, reason = reason.unwrap_or(""), "case deleted");
        Ok(())
    }

    /// Record the manual approval of a section that is ready for it.
    ///
    /// Approving insurance also records the insurer decision as approved.
    #[tracing::instrument(skip(self))]
    pub fn approve_section(
        &mut self,
        id: Uuid,
        section: ApprovalSection,
        actor: &str,
    ) -> Result<WorkshopCase, AppError> {
        let mut case = self.get_case(id)?;
        match approval_status(section, &case) {
            SectionApprovalStatus::ReadyForApproval => {}
            SectionApprovalStatus::Approved => {
                return Err(AppError::bad_request(format!(
                    "Section {} is already approved",
                    section
                )))
            }
            SectionApprovalStatus::Incomplete => {
                warn!(case_id = %id, %section, "approval rejected, section incomplete");
                return Err(AppError::bad_request(format!(
                    "Section {} is not ready for approval",
                    section
                )));
            }
        }

        let now = Utc::now();
        *approval_override_mut(&mut case, section) = Some(SectionApprovalStatus::Approved);
        let action_type = if section == ApprovalSection::Insurance {
            if let Some(coverage) = case.insurance_coverage.as_mut() {
                coverage.status = Some(CoverageDecision::Approved);
            }
            ActionType::InsuranceUpdated
        } else {
            ActionType::Other
        };
        log_action(
            &mut case,
            action_type,
            actor,
            ActorType::Agent,
            format!("Section {} approved", section),
            Some(json!({ "section": section })),
            now,
        );
        case.updated_at = now;

        info!(case_id = %id, %section, "section approved");
        self.repo.save(case)
    }

    /// Move a draft to in-progress when every start requirement holds.
    #[tracing::instrument(skip(self))]
    pub fn mark_in_progress(
        &mut self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<WorkshopCase, AppError> {
        let case = self.get_case(id)?;
        if !is_case_ready_for_in_progress(&case) {
            let missing = get_missing_requirements_for_in_progress(&case);
            warn!(case_id = %id, ?missing, "case not ready for in progress");
            return Err(AppError::stage_transition_blocked(
                "Case is not ready to start work",
                missing,
            ));
        }

        let update = CaseUpdate {
            stage: Some(CaseStage::InProgress),
            status: Some(CaseStatus::InProgress),
            ..Default::default()
        };
        let case = apply_update(case, update, now);
        info!(case_id = %id, "case marked in progress");
        self.repo.save(case)
    }

    /// Finish a case on `repair_finished_date`.
    ///
    /// The date is applied to a candidate copy before the completion gate
    /// runs, so a blocked attempt leaves the stored case untouched. With
    /// `require_invoice_review` set, an invoice reviewed as OK is also needed.
    #[tracing::instrument(skip(self))]
    pub fn mark_finished(
        &mut self,
        id: Uuid,
        repair_finished_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<WorkshopCase, AppError> {
        let case = self.get_case(id)?;
        let Some(date) = repair_finished_date else {
            warn!(case_id = %id, "repair finished date missing");
            return Err(AppError::stage_transition_blocked(
                "Case cannot be finished",
                vec![MSG_REPAIR_DATE.to_string()],
            ));
        };

        let mut candidate = case.clone();
        candidate.service.repair_finished_date = Some(date);

        let gate_open = is_case_ready_for_completion(&candidate)
            && (!self.config.require_invoice_review || is_invoice_reviewed_and_ok(&candidate));
        if !gate_open {
            let mut missing = get_missing_requirements_for_completion(&candidate);
            if self.config.require_invoice_review
                && !missing.iter().any(|m| m == MSG_INVOICE_UNREVIEWED)
            {
                missing.push(MSG_INVOICE_UNREVIEWED.to_string());
            }
            warn!(case_id = %id, ?missing, "case not ready for completion");
            return Err(AppError::stage_transition_blocked(
                "Case cannot be finished",
                missing,
            ));
        }

        let mut service = case.service.clone();
        service.repair_finished_date = Some(date);
        service.completion_date = Some(now);
        let update = CaseUpdate {
            stage: Some(CaseStage::Finished),
            status: Some(CaseStatus::Completed),
            service: Some(service),
            ..Default::default()
        };
        let case = apply_update(case, update, now);
        info!(case_id = %id, %date, "case finished");
        self.repo.save(case)
    }

    // ── Damage form ─────────────────────────────────────────────────

    /// Attach a damage-form file and mark the form complete.
    #[tracing::instrument(skip(self))]
    pub fn add_ddf_attachment(
        &mut self,
        id: Uuid,
        file: FileUpload,
    ) -> Result<Attachment, AppError> {
        let mut case = self.get_case(id)?;
        let now = Utc::now();
        let attachment = Attachment {
            id: format!("ddf-{}", Uuid::new_v4().simple()),
            name: file.name.clone(),
            attachment_type: AttachmentType::Document,
            kind: Some(DocumentKind::Ddf),
            size: file.size,
            uploaded_at: now,
            url: file.url.clone(),
        };
        case.attachments.push(attachment.clone());

        let case_number = case.case_number.clone();
        let assessment = case.assessment.get_or_insert_with(|| Assessment {
            damage_description: format!("Assessment for case {}", case_number),
            recommended_action: "Full Replacement".to_string(),
            assessment_date: Some(now),
            ..Default::default()
        });
        assessment.ddf_status = Some(DdfStatus::Complete);

        log_action(
            &mut case,
            ActionType::FileUploaded,
            WORKSHOP_ACTOR,
            ActorType::Workshop,
            format!("DDF file uploaded: {}", file.name),
            Some(json!({ "fileName": file.name, "fileSize": file.size })),
            now,
        );
        case.updated_at = now;
        self.repo.save(case)?;
        Ok(attachment)
    }

    /// Remove an attachment; once no damage-form file remains the form is
    /// reset to non-existent and its extracted metadata cleared.
    #[tracing::instrument(skip(self))]
    pub fn delete_ddf_attachment(
        &mut self,
        id: Uuid,
        attachment_id: &str,
    ) -> Result<WorkshopCase, AppError> {
        let mut case = self.get_case(id)?;
        let before = case.attachments.len();
        case.attachments.retain(|a| a.id != attachment_id);
        if case.attachments.len() == before {
            return Err(AppError::not_found(format!(
                "Attachment {} not found on case {}",
                attachment_id, case.case_number
            )));
        }

        if !case.attachments.iter().any(Attachment::is_ddf_document) {
            if let Some(assessment) = case.assessment.as_mut() {
                assessment.ddf_status = Some(DdfStatus::NonExistent);
                assessment.clear_ddf_metadata();
            }
            debug!(case_id = %id, "last DDF file removed, form reset");
        }
        case.updated_at = Utc::now();
        self.repo.save(case)
    }

    /// Record that a DDF link was texted to the customer.
    #[tracing::instrument(skip(self))]
    pub fn log_ddf_sms(&mut self, id: Uuid, phone_number: &str) -> Result<ActionLogEntry, AppError> {
        let mut case = self.get_case(id)?;
        let entry = log_action(
            &mut case,
            ActionType::SmsSent,
            WORKSHOP_ACTOR,
            ActorType::Workshop,
            format!("DDF link sent via SMS to {}", phone_number),
            Some(json!({ "phoneNumber": phone_number })),
            Utc::now(),
        );
        self.repo.save(case)?;
        Ok(entry)
    }

    // ── Invoice ─────────────────────────────────────────────────────

    /// Attach an invoice file. The first upload creates the invoice record,
    /// later uploads only replace its file.
    #[tracing::instrument(skip(self))]
    pub fn add_invoice_attachment(
        &mut self,
        id: Uuid,
        file: FileUpload,
        now: DateTime<Utc>,
    ) -> Result<Invoice, AppError> {
        let mut case = self.get_case(id)?;
        match case.invoice.as_mut() {
            Some(invoice) => invoice.file_url = file.url.clone(),
            None => {
                case.invoice = Some(Invoice {
                    invoice_number: format!("INV-{}", case.case_number),
                    kid: generate_kid(),
                    due_date: Some(now + Duration::days(INVOICE_DUE_DAYS)),
                    total_amount: case.parts_and_labor.grand_total,
                    file_url: file.url.clone(),
                    issue_date: Some(now),
                    review_status: None,
                });
            }
        }

        log_action(
            &mut case,
            ActionType::FileUploaded,
            WORKSHOP_ACTOR,
            ActorType::Workshop,
            format!("Invoice file uploaded: {}", file.name),
            Some(json!({ "fileName": file.name, "fileSize": file.size })),
            now,
        );
        case.updated_at = now;
        let case = self.repo.save(case)?;
        case.invoice
            .ok_or_else(|| AppError::internal("Invoice missing after upload"))
    }

    /// Edit the invoice fields the workshop fills in by hand.
    #[tracing::instrument(skip(self))]
    pub fn update_invoice_details(
        &mut self,
        id: Uuid,
        details: InvoiceDetails,
        now: DateTime<Utc>,
    ) -> Result<Invoice, AppError> {
        let mut case = self.get_case(id)?;
        let Some(invoice) = case.invoice.as_mut() else {
            return Err(AppError::bad_request(format!(
                "Case {} has no invoice to update",
                case.case_number
            )));
        };
        let InvoiceDetails {
            invoice_number,
            kid,
            total_amount,
            due_date,
        } = details;
        if let Some(invoice_number) = invoice_number {
            invoice.invoice_number = invoice_number.trim().to_string();
        }
        if let Some(kid) = kid {
            invoice.kid = kid.trim().to_string();
        }
        if let Some(total_amount) = total_amount {
            if !total_amount.is_finite() || total_amount < 0.0 {
                return Err(AppError::bad_request(format!(
                    "Invalid invoice amount {}",
                    total_amount
                )));
            }
            invoice.total_amount = total_amount;
        }
        if due_date.is_some() {
            invoice.due_date = due_date;
        }
        let invoice = invoice.clone();

        log_action(
            &mut case,
            ActionType::Other,
            WORKSHOP_ACTOR,
            ActorType::Workshop,
            "Invoice details updated",
            Some(json!({
                "invoiceNumber": invoice.invoice_number,
                "totalAmount": invoice.total_amount,
            })),
            now,
        );
        case.updated_at = now;
        self.repo.save(case)?;
        Ok(invoice)
    }

    #[tracing::instrument(skip(self))]
    pub fn delete_invoice(&mut self, id: Uuid) -> Result<WorkshopCase, AppError> {
        let mut case = self.get_case(id)?;
        case.invoice = None;
        case.updated_at = Utc::now();
        self.repo.save(case)
    }

    #[tracing::instrument(skip(self))]
    pub fn set_invoice_review_status(
        &mut self,
        id: Uuid,
        status: InvoiceReviewStatus,
    ) -> Result<WorkshopCase, AppError> {
        let mut case = self.get_case(id)?;
        let Some(invoice) = case.invoice.as_mut() else {
            return Err(AppError::bad_request(format!(
                "Case {} has no invoice to review",
                case.case_number
            )));
        };
        invoice.review_status = Some(status);

        let now = Utc::now();
        log_action(
            &mut case,
            ActionType::InvoiceReviewed,
            WORKSHOP_ACTOR,
            ActorType::Workshop,
            format!("Invoice review status set to: {}", status.label()),
            Some(json!({ "status": status })),
            now,
        );
        case.updated_at = now;
        self.repo.save(case)
    }

    // ── Calibration ─────────────────────────────────────────────────

    /// Attach a calibration report. A case without calibration data gets a
    /// required calibration holding this file.
    #[tracing::instrument(skip(self))]
    pub fn add_calibration_file(
        &mut self,
        id: Uuid,
        file: FileUpload,
    ) -> Result<Attachment, AppError> {
        let mut case = self.get_case(id)?;
        let now = Utc::now();
        let attachment = Attachment {
            id: format!("calibration-{}", Uuid::new_v4().simple()),
            name: file.name.clone(),
            attachment_type: AttachmentType::Document,
            kind: Some(DocumentKind::Calibration),
            size: file.size,
            uploaded_at: now,
            url: file.url.clone(),
        };
        case.calibration
            .get_or_insert_with(|| Calibration {
                required: true,
                ..Default::default()
            })
            .files
            .push(attachment.clone());

        log_action(
            &mut case,
            ActionType::CalibrationUpdated,
            WORKSHOP_ACTOR,
            ActorType::Workshop,
            format!("Calibration file uploaded: {}", file.name),
            Some(json!({ "fileName": file.name, "fileSize": file.size })),
            now,
        );
        case.updated_at = now;
        self.repo.save(case)?;
        Ok(attachment)
    }

    #[tracing::instrument(skip(self))]
    pub fn delete_calibration_file(
        &mut self,
        id: Uuid,
        file_id: &str,
    ) -> Result<WorkshopCase, AppError> {
        let mut case = self.get_case(id)?;
        if let Some(calibration) = case.calibration.as_mut() {
            calibration.files.retain(|f| f.id != file_id);
        }

        let now = Utc::now();
        log_action(
            &mut case,
            ActionType::CalibrationUpdated,
            WORKSHOP_ACTOR,
            ActorType::Workshop,
            "Calibration file deleted",
            Some(json!({ "fileId": file_id })),
            now,
        );
        case.updated_at = now;
        self.repo.save(case)
    }

    // ── Communication ───────────────────────────────────────────────

    #[tracing::instrument(skip(self, message))]
    pub fn add_chat_message(
        &mut self,
        id: Uuid,
        message: &str,
        sender: &str,
        sender_type: ActorType,
    ) -> Result<ChatMessage, AppError> {
        let mut case = self.get_case(id)?;
        let now = Utc::now();
        let chat = ChatMessage {
            id: format!("msg-{}", Uuid::new_v4().simple()),
            sender: sender.to_string(),
            sender_type,
            message: message.to_string(),
            timestamp: now,
            attachments: Vec::new(),
        };
        case.chat_log.push(chat.clone());
        case.updated_at = now;
        self.repo.save(case)?;
        debug!(case_id = %id, "chat message added");
        Ok(chat)
    }

    #[tracing::instrument(skip(self, text))]
    pub fn add_note(&mut self, id: Uuid, text: &str, author: &str) -> Result<Note, AppError> {
        let mut case = self.get_case(id)?;
        let now = Utc::now();
        let note = Note {
            id: format!("note-{}", Uuid::new_v4().simple()),
            text: text.to_string(),
            author: author.to_string(),
            timestamp: now,
        };
        case.notes.push(note.clone());
        log_action(
            &mut case,
            ActionType::NoteAdded,
            author,
            ActorType::Workshop,
            "Note added",
            None,
            now,
        );
        case.updated_at = now;
        self.repo.save(case)?;
        Ok(note)
    }

    /// Stamp the time the action log was last read.
    #[tracing::instrument(skip(self))]
    pub fn mark_log_viewed(&mut self, id: Uuid, now: DateTime<Utc>) -> Result<WorkshopCase, AppError> {
        let mut case = self.get_case(id)?;
        case.last_log_viewed_at = Some(now);
        self.repo.save(case)
    }

    fn next_case_number(&self, year: i32) -> String {
        let prefix = format!("{}{}", CASE_NUMBER_PREFIX, year);
        let last = self
            .repo
            .list()
            .iter()
            .filter_map(|c| c.case_number.strip_prefix(&prefix)?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{:03}", prefix, last + 1)
    }
}

/// Uppercase with whitespace removed, the way registrations are stored.
pub fn normalize_plate(plate: &str) -> String {
    plate
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Nine-digit payment reference.
fn generate_kid() -> String {
    rand::thread_rng().gen_range(100_000_000u32..1_000_000_000).to_string()
}

fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

fn log_action(
    case: &mut WorkshopCase,
    action_type: ActionType,
    actor: &str,
    actor_type: ActorType,
    description: impl Into<String>,
    metadata: Option<serde_json::Value>,
    now: DateTime<Utc>,
) -> ActionLogEntry {
    let entry = ActionLogEntry {
        id: format!("action-{}", Uuid::new_v4().simple()),
        action_type,
        actor: actor.to_string(),
        actor_type,
        description: description.into(),
        timestamp: now,
        metadata,
    };
    debug!(case_id = %case.id, action = ?action_type, "{}", entry.description);
    case.action_log.push(entry.clone());
    entry
}

fn apply_update(old: WorkshopCase, update: CaseUpdate, now: DateTime<Utc>) -> WorkshopCase {
    let mut case = old.clone();
    let CaseUpdate {
        stage,
        status,
        priority,
        insurance_company,
        workshop_name,
        customer,
        vehicle,
        service,
        owner,
        parts_and_labor,
        required_images,
        damage_images,
        repair_images,
        after_repair_images,
        notes,
        assessment,
        calibration,
        insurance_coverage,
        images_not_needed,
        images_not_needed_comment,
        is_chat_log_enabled,
    } = update;

    if let Some(status) = status {
        case.status = status;
        if status != old.status {
            log_action(
                &mut case,
                ActionType::StatusChanged,
                SYSTEM_ACTOR,
                ActorType::System,
                format!("Status changed from {} to {}", old.status, status),
                Some(json!({ "from": old.status, "to": status })),
                now,
            );
        }
    }
    if let Some(stage) = stage {
        case.stage = stage;
        if stage != old.stage {
            log_action(
                &mut case,
                ActionType::StageChanged,
                SYSTEM_ACTOR,
                ActorType::System,
                format!("Stage changed from {} to {}", old.stage, stage),
                Some(json!({ "from": old.stage, "to": stage })),
                now,
            );
        }
    }
    if let Some(parts_and_labor) = parts_and_labor {
        let added = parts_and_labor
            .items
            .len()
            .saturating_sub(old.parts_and_labor.items.len());
        case.parts_and_labor = parts_and_labor;
        if added > 0 {
            log_action(
                &mut case,
                ActionType::PartsAdded,
                WORKSHOP_ACTOR,
                ActorType::Workshop,
                "Parts or labor items added",
                Some(json!({ "count": added })),
                now,
            );
        }
    }
    if let Some(calibration) = calibration {
        let changed = old.calibration.as_ref() != Some(&calibration);
        case.calibration = Some(calibration);
        if changed {
            log_action(
                &mut case,
                ActionType::CalibrationUpdated,
                WORKSHOP_ACTOR,
                ActorType::Workshop,
                "Calibration information updated",
                None,
                now,
            );
        }
    }
    if let Some(coverage) = insurance_coverage {
        let changed = old.insurance_coverage.as_ref() != Some(&coverage);
        case.insurance_coverage = Some(coverage);
        if changed {
            log_action(
                &mut case,
                ActionType::InsuranceUpdated,
                WORKSHOP_ACTOR,
                ActorType::Workshop,
                "Insurance coverage information updated",
                None,
                now,
            );
        }
    }
    if let Some(images) = damage_images {
        let added = images.len().saturating_sub(old.damage_images.len());
        case.damage_images = images;
        if added > 0 {
            log_action(
                &mut case,
                ActionType::ImageUploaded,
                WORKSHOP_ACTOR,
                ActorType::Workshop,
                "Images uploaded",
                Some(json!({ "count": added })),
                now,
            );
        }
    }

    if let Some(priority) = priority {
        case.priority = priority;
    }
    if let Some(insurance_company) = insurance_company {
        case.insurance_company = insurance_company;
    }
    if let Some(workshop_name) = workshop_name {
        case.workshop_name = non_blank(workshop_name);
    }
    if let Some(customer) = customer {
        case.customer = customer;
    }
    if let Some(mut vehicle) = vehicle {
        vehicle.license_plate = normalize_plate(&vehicle.license_plate);
        case.vehicle = vehicle;
    }
    if let Some(service) = service {
        case.service = service;
    }
    if let Some(owner) = owner {
        case.owner = Some(owner);
    }
    if let Some(required_images) = required_images {
        case.required_images = Some(required_images);
    }
    if let Some(images) = repair_images {
        case.repair_images = images;
    }
    if let Some(images) = after_repair_images {
        case.after_repair_images = images;
    }
    if let Some(notes) = notes {
        case.notes = notes;
    }
    if let Some(assessment) = assessment {
        case.assessment = Some(assessment);
    }
    if let Some(not_needed) = images_not_needed {
        case.images_not_needed = not_needed;
    }
    if let Some(comment) = images_not_needed_comment {
        case.images_not_needed_comment = non_blank(comment);
    }
    if let Some(enabled) = is_chat_log_enabled {
        case.is_chat_log_enabled = enabled;
    }

    case.updated_at = now;
    case
}
