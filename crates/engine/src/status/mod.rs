//! Case status engine.
//!
//! Pure functions deriving section completeness, approval state, status
//! lights and stage-transition readiness from a [`WorkshopCase`]. Every
//! entry point takes `impl Into<Option<&WorkshopCase>>`, so callers can pass
//! a case reference directly or the result of a lookup, and an absent case
//! always yields the "nothing done yet" answer.

pub mod approval;
pub mod gates;
pub mod icons;
pub mod predicates;
pub mod progress;

pub use approval::*;
pub use gates::*;
pub use icons::*;
pub use predicates::*;
pub use progress::*;

use shared_types::WorkshopCase;

/// Single point where an absent case is turned into `None`.
pub(crate) fn resolve<'a>(case: impl Into<Option<&'a WorkshopCase>>) -> Option<&'a WorkshopCase> {
    case.into()
}
