//! Case-list filtering, column sorting and registration-number lookup.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::WorkshopCase;
use uuid::Uuid;

/// Longest registration number accepted by the lookup box.
pub const MAX_VRN_LEN: usize = 7;
/// Shortest input that triggers a lookup.
pub const MIN_VRN_QUERY_LEN: usize = 2;
pub const MAX_VRN_RESULTS: usize = 5;
pub const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    LicensePlate,
    InsuranceCompany,
    WorkshopName,
    ServiceType,
    Status,
    #[default]
    UpdatedAt,
    CompletionDate,
    DamageDate,
    CarBrand,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Next sort state after a column header click: the same column flips
/// direction, a new column starts ascending.
pub fn next_sort(current: (SortField, SortOrder), clicked: SortField) -> (SortField, SortOrder) {
    if current.0 == clicked {
        (clicked, current.1.toggled())
    } else {
        (clicked, SortOrder::Asc)
    }
}

/// Keep cases where any searchable column contains `term`, ignoring case.
/// An empty term keeps everything.
pub fn filter_cases<'a>(cases: &'a [WorkshopCase], term: &str) -> Vec<&'a WorkshopCase> {
    if term.is_empty() {
        return cases.iter().collect();
    }
    let needle = term.to_uppercase();
    let hit = |value: &str| value.to_uppercase().contains(&needle);

    cases
        .iter()
        .filter(|c| {
            hit(&c.vehicle.license_plate)
                || hit(&c.insurance_company)
                || c.workshop_name.as_deref().map_or(false, hit)
                || hit(&c.service.service_type)
                || damage_date(c).map_or(false, |d| d.to_string().contains(&needle))
                || hit(&c.vehicle.make)
        })
        .collect()
}

fn damage_date(case: &WorkshopCase) -> Option<NaiveDate> {
    case.assessment.as_ref().and_then(|a| a.damage_date)
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Absent dates sort as the epoch.
fn compare_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    a.unwrap_or_default().cmp(&b.unwrap_or_default())
}

fn date_at_midnight(date: Option<NaiveDate>) -> Option<DateTime<Utc>> {
    date.map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

pub fn sort_cases(cases: &mut [&WorkshopCase], field: SortField, order: SortOrder) {
    cases.sort_by(|a, b| {
        let ordering = match field {
            SortField::LicensePlate => {
                compare_text(&a.vehicle.license_plate, &b.vehicle.license_plate)
            }
            SortField::InsuranceCompany => compare_text(&a.insurance_company, &b.insurance_company),
            SortField::WorkshopName => compare_text(
                a.workshop_name.as_deref().unwrap_or(""),
                b.workshop_name.as_deref().unwrap_or(""),
            ),
            SortField::ServiceType => {
                compare_text(&a.service.service_type, &b.service.service_type)
            }
            SortField::Status => compare_text(a.status.as_str(), b.status.as_str()),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::CompletionDate => {
                compare_dates(a.service.completion_date, b.service.completion_date)
            }
            SortField::DamageDate => compare_dates(
                date_at_midnight(damage_date(a)),
                date_at_midnight(damage_date(b)),
            ),
            SortField::CarBrand => compare_text(&a.vehicle.make, &b.vehicle.make),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Filter then sort, the way the case list renders.
pub fn search_cases<'a>(
    cases: &'a [WorkshopCase],
    term: &str,
    field: SortField,
    order: SortOrder,
) -> Vec<&'a WorkshopCase> {
    let mut found = filter_cases(cases, term);
    sort_cases(&mut found, field, order);
    found
}

/// Uppercase, strip anything but letters and digits, cap at seven characters.
pub fn format_vrn(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .take(MAX_VRN_LEN)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VrnMatch {
    pub vrn: String,
    pub id: Uuid,
}

/// Registration lookup: exact match first, then by where the match starts.
pub fn search_license_plates(cases: &[WorkshopCase], term: &str) -> Vec<VrnMatch> {
    let query = format_vrn(term);
    if query.len() < MIN_VRN_QUERY_LEN {
        return Vec::new();
    }

    let mut matches: Vec<(usize, VrnMatch)> = cases
        .iter()
        .filter_map(|c| {
            let vrn = &c.vehicle.license_plate;
            vrn.find(&query).map(|pos| {
                (
                    pos,
                    VrnMatch {
                        vrn: vrn.clone(),
                        id: c.id,
                    },
                )
            })
        })
        .collect();
    matches.sort_by(|(pos_a, a), (pos_b, b)| {
        let exact_a = a.vrn == query;
        let exact_b = b.vrn == query;
        exact_b.cmp(&exact_a).then(pos_a.cmp(pos_b))
    });
    matches
        .into_iter()
        .take(MAX_VRN_RESULTS)
        .map(|(_, m)| m)
        .collect()
}

/// Most recent lookups, newest first, without duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn push(&mut self, vrn: &str) {
        let formatted = format_vrn(vrn);
        if formatted.is_empty() {
            return;
        }
        self.entries.retain(|e| *e != formatted);
        self.entries.insert(0, formatted);
        self.entries.truncate(MAX_RECENT_SEARCHES);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
