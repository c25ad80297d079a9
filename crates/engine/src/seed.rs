//! Demo cases covering every dashboard column, loaded when `features.demo_data` is on.

use chrono::{DateTime, Datelike, Duration, Utc};
use shared_types::{
    ActionLogEntry, ActionType, ActorType, AgentComment, Assessment, Attachment, AttachmentType,
    Calibration, CaseImage, CasePriority, CaseStage, CaseStatus, CoverageDecision, Customer,
    DdfStatus, DocumentKind, InsuranceCoverage, Invoice, InvoiceReviewStatus, LaborItem,
    PartItem, PartStatus, PartsAndLabor, PartsLaborItem, PolicyType, RequiredImages,
    SectionApprovalStatus, Service, Vehicle, WorkshopCase,
};
use uuid::Uuid;

use crate::repo::CaseRepository;

pub const INSURANCE_COMPANIES: [&str; 6] = [
    "Nordlys Forsikring",
    "FjordTrygg",
    "Viking Trygghet",
    "Norsk Sjø og Land Forsikring",
    "By & Bygd Forsikring",
    "SkadePartner AS",
];

pub const TECHNICIANS: [&str; 4] = ["John Smith", "Sarah Johnson", "Mike Brown", "Lisa Davis"];

pub const WORKSHOP_NAMES: [&str; 4] = [
    "Knekt & Knust Bilglass Oslo",
    "Bilplett Bergen",
    "Knus & Klart Stavanger",
    "TrønderRute Trondheim",
];

pub const PART_CATEGORIES: [&str; 6] = ["Glass", "Adhesive", "Tools", "Sensor", "Molding", "Other"];

fn image(slot: &str, at: DateTime<Utc>) -> CaseImage {
    CaseImage {
        id: format!("img-{}", slot),
        url: format!("/images/{}.jpg", slot),
        caption: slot.replace('-', " "),
        uploaded_at: at,
        ..Default::default()
    }
}

fn ddf_file(case_number: &str, at: DateTime<Utc>) -> Attachment {
    Attachment {
        id: format!("ddf-{}", case_number),
        name: format!("DDF_{}.pdf", case_number),
        attachment_type: AttachmentType::Document,
        kind: Some(DocumentKind::Ddf),
        size: 1_024_000,
        uploaded_at: at,
        url: format!("/files/DDF_{}.pdf", case_number),
    }
}

fn windshield_job() -> PartsAndLabor {
    PartsAndLabor::from_items(vec![
        PartsLaborItem::Part(PartItem {
            id: "part-1".into(),
            category: PART_CATEGORIES[0].into(),
            article_nr: "WS-4410".into(),
            quantity: 1,
            price: 4200.0,
            discount: 0.0,
            total: 4200.0,
            status: PartStatus::InStock,
            estimated_arrival: None,
            agent_comment: Some(AgentComment::Approved),
        }),
        PartsLaborItem::Part(PartItem {
            id: "part-2".into(),
            category: PART_CATEGORIES[1].into(),
            article_nr: "ADH-220".into(),
            quantity: 1,
            price: 350.0,
            discount: 0.0,
            total: 350.0,
            status: PartStatus::InStock,
            estimated_arrival: None,
            agent_comment: None,
        }),
        PartsLaborItem::Labor(LaborItem {
            id: "labor-1".into(),
            description: "Windshield replacement".into(),
            hours: 2.5,
            rate_per_hour: 950.0,
            total: 2375.0,
            agent_comment: None,
        }),
    ])
}

fn approved_coverage(at: DateTime<Utc>) -> InsuranceCoverage {
    InsuranceCoverage {
        exists: true,
        coverage_amount: Some(25_000.0),
        policy_type: PolicyType::Private,
        vat_liable: false,
        deductible: 2000.0,
        data_fetched: true,
        fetched_at: Some(at),
        policy_number: Some("POL-884213".into()),
        expiry_date: None,
        status: Some(CoverageDecision::Approved),
    }
}

fn complete_assessment(case_number: &str, at: DateTime<Utc>) -> Assessment {
    Assessment {
        damage_description: "Stone chip spread into a crack across the driver's view".into(),
        recommended_action: "Full Replacement".into(),
        estimated_cost: 6925.0,
        assessed_by: TECHNICIANS[0].into(),
        assessment_date: Some(at),
        ddf_status: Some(DdfStatus::Complete),
        damage_date: Some(at.date_naive() - Duration::days(3)),
        glass_type: Some("windshield".into()),
        location: Some("Oslo".into()),
        damage_type: Some("stone".into()),
        cause_of_damage: Some("Stonechip".into()),
        wear_and_tear: Some("Normal".into()),
        place: Some("Highway".into()),
        claim_id: Some(format!("CLM-{}", case_number)),
        ..Default::default()
    }
}

fn created_entry(case_number: &str, at: DateTime<Utc>) -> ActionLogEntry {
    ActionLogEntry {
        id: format!("action-{}-created", case_number),
        action_type: ActionType::CaseCreated,
        actor: "System".into(),
        actor_type: ActorType::System,
        description: format!("Case {} created", case_number),
        timestamp: at,
        metadata: None,
    }
}

fn base_case(
    seq: u32,
    plate: &str,
    make: &str,
    model: &str,
    customer: &str,
    created: DateTime<Utc>,
) -> WorkshopCase {
    let case_number = format!("BS{}{:03}", created.year(), seq);
    WorkshopCase {
        id: Uuid::new_v4(),
        action_log: vec![created_entry(&case_number, created)],
        case_number,
        stage: CaseStage::Draft,
        status: CaseStatus::New,
        priority: CasePriority::Medium,
        insurance_company: INSURANCE_COMPANIES[seq as usize % INSURANCE_COMPANIES.len()].into(),
        workshop_name: Some(WORKSHOP_NAMES[seq as usize % WORKSHOP_NAMES.len()].into()),
        customer: Customer {
            name: customer.into(),
            email: format!("{}@example.no", customer.to_lowercase().replace(' ', ".")),
            phone: "+47 900 00 000".into(),
        },
        vehicle: Vehicle {
            make: make.into(),
            model: model.into(),
            year: 2020,
            vin: format!("YV1{}", plate),
            license_plate: plate.into(),
            color: "Black".into(),
        },
        service: Service {
            service_type: "Windshield Replacement".into(),
            description: "Replace cracked windshield".into(),
            estimated_hours: 2.5,
            technician: TECHNICIANS[seq as usize % TECHNICIANS.len()].into(),
            ..Default::default()
        },
        is_chat_log_enabled: true,
        created_at: created,
        updated_at: created,
        ..Default::default()
    }
}

/// Fill in every section a case needs before work may start.
fn with_intake_done(mut case: WorkshopCase, at: DateTime<Utc>) -> WorkshopCase {
    case.attachments.push(ddf_file(&case.case_number, at));
    case.assessment = Some(complete_assessment(&case.case_number, at));
    case.required_images = Some(RequiredImages {
        vehicle_overview: Some(image("vehicle-overview", at)),
        glass_close_up: Some(image("glass-close-up", at)),
        damage_detail: Some(image("damage-detail", at)),
    });
    case.damage_images = vec![image("damage-1", at), image("damage-2", at)];
    case.parts_and_labor = windshield_job();
    case.insurance_coverage = Some(approved_coverage(at));
    case.calibration = Some(Calibration {
        not_needed: true,
        ..Default::default()
    });
    case
}

fn invoice_for(case: &WorkshopCase, issued: DateTime<Utc>, review: InvoiceReviewStatus) -> Invoice {
    Invoice {
        invoice_number: format!("INV-{}", case.case_number),
        kid: "482193657".into(),
        due_date: Some(issued + Duration::days(30)),
        total_amount: case.parts_and_labor.grand_total,
        file_url: format!("/files/INV-{}.pdf", case.case_number),
        issue_date: Some(issued),
        review_status: Some(review),
    }
}

/// Six cases spread across the dashboard columns, dated relative to `now`.
pub fn demo_cases(now: DateTime<Utc>) -> Vec<WorkshopCase> {
    let days_ago = |d: i64| now - Duration::days(d);

    let fresh = base_case(1, "EL12345", "Tesla", "Model 3", "Kari Nordmann", days_ago(1));

    let mut ready = with_intake_done(
        base_case(2, "AB98765", "Volvo", "XC60", "Ola Hansen", days_ago(4)),
        days_ago(2),
    );
    ready.priority = CasePriority::High;

    let mut working = with_intake_done(
        base_case(3, "DK55501", "Volkswagen", "Golf", "Ingrid Berg", days_ago(9)),
        days_ago(7),
    );
    working.stage = CaseStage::InProgress;
    working.status = CaseStatus::InProgress;
    working.service.start_date = Some(days_ago(6));
    working.invoice = Some(invoice_for(&working, days_ago(1), InvoiceReviewStatus::PendingReview));
    working.updated_at = days_ago(1);

    let mut on_hold = with_intake_done(
        base_case(4, "SV20431", "Toyota", "RAV4", "Lars Johansen", days_ago(12)),
        days_ago(10),
    );
    on_hold.stage = CaseStage::InProgress;
    on_hold.status = CaseStatus::WaitingParts;
    on_hold.service.start_date = Some(days_ago(8));
    if let Some(PartsLaborItem::Part(glass)) = on_hold.parts_and_labor.items.first_mut() {
        glass.status = PartStatus::Ordered;
        glass.estimated_arrival = Some((now + Duration::days(3)).date_naive());
    }
    on_hold.invoice = Some(invoice_for(&on_hold, days_ago(4), InvoiceReviewStatus::NeedsCorrection));
    on_hold.updated_at = days_ago(5);

    let mut finished = with_intake_done(
        base_case(5, "BT77120", "Audi", "A4", "Sofie Lie", days_ago(20)),
        days_ago(18),
    );
    finished.stage = CaseStage::Finished;
    finished.status = CaseStatus::Completed;
    finished.service.start_date = Some(days_ago(16));
    finished.service.completion_date = Some(days_ago(12));
    finished.service.repair_finished_date = Some(days_ago(12).date_naive());
    finished.invoice = Some(invoice_for(&finished, days_ago(12), InvoiceReviewStatus::Ok));
    finished.ddf_approval_status = Some(SectionApprovalStatus::Approved);
    finished.images_approval_status = Some(SectionApprovalStatus::Approved);
    finished.parts_labor_approval_status = Some(SectionApprovalStatus::Approved);
    finished.calibration_approval_status = Some(SectionApprovalStatus::Approved);
    finished.invoice_approval_status = Some(SectionApprovalStatus::Approved);
    finished.insurance_approval_status = Some(SectionApprovalStatus::Approved);
    finished.updated_at = days_ago(12);

    let mut rejected = base_case(6, "EV40012", "Nissan", "Leaf", "Per Olsen", days_ago(15));
    rejected.status = CaseStatus::Cancelled;
    rejected.insurance_coverage = Some(InsuranceCoverage {
        status: Some(CoverageDecision::NotApproved),
        ..approved_coverage(days_ago(14))
    });
    rejected.updated_at = days_ago(14);

    vec![fresh, ready, working, on_hold, finished, rejected]
}

/// Insert the demo cases into `repo`, returning how many were added.
pub fn seed_demo_data<R: CaseRepository>(repo: &mut R, now: DateTime<Utc>) -> usize {
    let mut added = 0;
    for case in demo_cases(now) {
        match repo.insert(case) {
            Ok(_) => added += 1,
            Err(e) => tracing::warn!(error = %e, "skipping demo case"),
        }
    }
    tracing::info!(count = added, "demo cases seeded");
    added
}
