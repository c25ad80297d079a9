pub mod error;
pub mod feature_flags;
pub mod requests;

// Workshop domain modules
pub mod activity;
pub mod case;
pub mod dashboard;
pub mod status;

pub use error::*;
pub use feature_flags::*;
pub use requests::*;

pub use activity::*;
pub use case::*;
pub use dashboard::*;
pub use status::*;
