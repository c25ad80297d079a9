use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use engine::{CaseWorkflow, InMemoryCaseRepo};
use shared_types::{
    Assessment, Attachment, AttachmentType, Calibration, CaseImage, CoverageDecision,
    CreateCaseRequest, DdfStatus, DocumentKind, InsuranceCoverage, Invoice, InvoiceReviewStatus,
    LaborItem, PartItem, PartStatus, PartsAndLabor, PartsLaborItem, RequiredImages,
    WorkflowConfig, WorkshopCase,
};
use uuid::Uuid;

/// Fixed clock for tests that compare dates.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn repair_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
}

/// A case with nothing filled in beyond its identity.
pub fn blank_case() -> WorkshopCase {
    let now = fixed_now();
    WorkshopCase {
        id: Uuid::new_v4(),
        case_number: "BS2024001".to_string(),
        insurance_company: "Gjensidige".to_string(),
        created_at: now,
        updated_at: now,
        ..Default::default()
    }
}

pub fn ddf_attachment() -> Attachment {
    Attachment {
        id: "att-ddf".to_string(),
        name: "damage_form.pdf".to_string(),
        attachment_type: AttachmentType::Document,
        kind: Some(DocumentKind::Ddf),
        size: 2048,
        uploaded_at: fixed_now(),
        url: "/files/damage_form.pdf".to_string(),
    }
}

pub fn legacy_attachment(name: &str) -> Attachment {
    Attachment {
        id: format!("att-{name}"),
        name: name.to_string(),
        attachment_type: AttachmentType::Document,
        kind: None,
        size: 1024,
        uploaded_at: fixed_now(),
        url: format!("/files/{name}"),
    }
}

pub fn assessment(status: DdfStatus) -> Assessment {
    Assessment {
        damage_description: "Stone chip in driver view".to_string(),
        ddf_status: Some(status),
        ..Default::default()
    }
}

fn image(id: &str) -> CaseImage {
    CaseImage {
        id: id.to_string(),
        url: format!("/images/{id}.jpg"),
        caption: id.to_string(),
        uploaded_at: fixed_now(),
        ..Default::default()
    }
}

pub fn all_required_images() -> RequiredImages {
    RequiredImages {
        vehicle_overview: Some(image("overview")),
        glass_close_up: Some(image("closeup")),
        damage_detail: Some(image("detail")),
    }
}

pub fn part(total: f64) -> PartsLaborItem {
    PartsLaborItem::Part(PartItem {
        id: "part-1".to_string(),
        category: "Glass".to_string(),
        article_nr: "WS-1001".to_string(),
        quantity: 1,
        price: total,
        discount: 0.0,
        total,
        status: PartStatus::InStock,
        estimated_arrival: None,
        agent_comment: None,
    })
}

pub fn labor(total: f64) -> PartsLaborItem {
    PartsLaborItem::Labor(LaborItem {
        id: "labor-1".to_string(),
        description: "Windshield replacement".to_string(),
        hours: 2.0,
        rate_per_hour: total / 2.0,
        total,
        agent_comment: None,
    })
}

pub fn parts_and_labor() -> PartsAndLabor {
    PartsAndLabor::from_items(vec![part(4500.0), labor(1500.0)])
}

pub fn coverage(decision: Option<CoverageDecision>) -> InsuranceCoverage {
    InsuranceCoverage {
        exists: true,
        coverage_amount: Some(50_000.0),
        deductible: 2000.0,
        data_fetched: true,
        fetched_at: Some(fixed_now()),
        policy_number: Some("POL-123456".to_string()),
        status: decision,
        ..Default::default()
    }
}

pub fn invoice(review: Option<InvoiceReviewStatus>) -> Invoice {
    Invoice {
        invoice_number: "INV-BS2024001".to_string(),
        kid: "123456789".to_string(),
        due_date: Some(fixed_now()),
        total_amount: 6000.0,
        file_url: "/files/invoice.pdf".to_string(),
        issue_date: Some(fixed_now()),
        review_status: review,
    }
}

pub fn calibration_not_needed() -> Calibration {
    Calibration {
        not_needed: true,
        ..Default::default()
    }
}

/// DDF, images, parts and labor, and approved coverage in place.
pub fn ready_for_in_progress_case() -> WorkshopCase {
    WorkshopCase {
        attachments: vec![ddf_attachment()],
        assessment: Some(assessment(DdfStatus::Complete)),
        required_images: Some(all_required_images()),
        parts_and_labor: parts_and_labor(),
        insurance_coverage: Some(coverage(Some(CoverageDecision::Approved))),
        ..blank_case()
    }
}

/// Everything the completion gate needs, with the invoice reviewed as OK.
pub fn ready_for_completion_case() -> WorkshopCase {
    let mut case = ready_for_in_progress_case();
    case.invoice = Some(invoice(Some(InvoiceReviewStatus::Ok)));
    case.calibration = Some(calibration_not_needed());
    case.service.repair_finished_date = Some(repair_date());
    case
}

pub fn workflow() -> CaseWorkflow<InMemoryCaseRepo> {
    CaseWorkflow::new(InMemoryCaseRepo::new(), WorkflowConfig::default())
}

/// Workflow whose repository already holds `cases`.
pub fn workflow_with(
    cases: Vec<WorkshopCase>,
    config: WorkflowConfig,
) -> CaseWorkflow<InMemoryCaseRepo> {
    CaseWorkflow::new(InMemoryCaseRepo::with_cases(cases), config)
}

pub fn create_request(plate: &str) -> CreateCaseRequest {
    CreateCaseRequest {
        license_plate: plate.to_string(),
        insurance_company: "Tryg".to_string(),
        customer_name: "Ola Nordmann".to_string(),
        customer_email: "ola@example.no".to_string(),
        customer_phone: "+47 912 34 567".to_string(),
        vehicle_make: "Volvo".to_string(),
        vehicle_model: "XC60".to_string(),
        vehicle_year: 2021,
        service_type: "Windshield Replacement".to_string(),
        ..Default::default()
    }
}
