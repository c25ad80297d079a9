pub mod case;

pub use case::InMemoryCaseRepo;

use shared_types::{AppError, WorkshopCase};
use uuid::Uuid;

/// Storage seam for cases. Workflow actions only touch cases through it.
pub trait CaseRepository {
    /// All cases, newest `created_at` first, ties broken by case number.
    fn list(&self) -> Vec<WorkshopCase>;

    fn find_by_id(&self, id: Uuid) -> Option<WorkshopCase>;

    /// Case-insensitive match on the vehicle's registration.
    fn find_by_license_plate(&self, plate: &str) -> Option<WorkshopCase>;

    /// Store a new case. Fails with `Conflict` when the id is taken.
    fn insert(&mut self, case: WorkshopCase) -> Result<WorkshopCase, AppError>;

    /// Replace an existing case. Fails with `NotFound` when it is absent.
    fn save(&mut self, case: WorkshopCase) -> Result<WorkshopCase, AppError>;

    /// Hard delete.
    fn delete(&mut self, id: Uuid) -> Result<(), AppError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
