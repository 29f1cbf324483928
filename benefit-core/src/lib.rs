pub mod calculations;
pub mod escalation;
pub mod models;
pub mod validation;

pub use escalation::{NotifyError, Notifier, Priority, escalate};
pub use models::*;
pub use validation::ClientValidator;
