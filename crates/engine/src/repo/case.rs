use std::collections::HashMap;

use shared_types::{AppError, WorkshopCase};
use uuid::Uuid;

use super::CaseRepository;

/// Keyed in-memory store owned by a single workflow.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCaseRepo {
    cases: HashMap<Uuid, WorkshopCase>,
}

impl InMemoryCaseRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository holding `cases`. A later case replaces an earlier one with the same id.
    pub fn with_cases(cases: impl IntoIterator<Item = WorkshopCase>) -> Self {
        Self {
            cases: cases.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

impl CaseRepository for InMemoryCaseRepo {
    fn list(&self) -> Vec<WorkshopCase> {
        let mut cases: Vec<WorkshopCase> = self.cases.values().cloned().collect();
        cases.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.case_number.cmp(&b.case_number))
        });
        cases
    }

    fn find_by_id(&self, id: Uuid) -> Option<WorkshopCase> {
        self.cases.get(&id).cloned()
    }

    fn find_by_license_plate(&self, plate: &str) -> Option<WorkshopCase> {
        let wanted = plate.to_uppercase();
        self.cases
            .values()
            .find(|c| c.vehicle.license_plate.to_uppercase() == wanted)
            .cloned()
    }

    fn insert(&mut self, case: WorkshopCase) -> Result<WorkshopCase, AppError> {
        if self.cases.contains_key(&case.id) {
            return Err(AppError::conflict(format!(
                "Case with id {} already exists",
                case.id
            )));
        }
        self.cases.insert(case.id, case.clone());
        Ok(case)
    }

    fn save(&mut self, case: WorkshopCase) -> Result<WorkshopCase, AppError> {
        match self.cases.get_mut(&case.id) {
            Some(slot) => {
                *slot = case.clone();
                Ok(case)
            }
            None => Err(AppError::not_found(format!(
                "Case with id {} not found",
                case.id
            ))),
        }
    }

    fn delete(&mut self, id: Uuid) -> Result<(), AppError> {
        self.cases
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Case with id {} not found", id)))
    }

    fn len(&self) -> usize {
        self.cases.len()
    }
}
