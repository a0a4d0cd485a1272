pub mod auth_viewmodel;
pub mod route_guard;
pub mod navigation_viewmodel;
pub mod patient_selector_viewmodel;
pub mod database_status_viewmodel;

pub use auth_viewmodel::{auth_error_message, validate_credentials, AuthViewModel, SignUpOutcome};
pub use route_guard::{decide, Guard, GuardDecision};
pub use navigation_viewmodel::{NavigationViewModel, Tab};
pub use patient_selector_viewmodel::{PatientSelection, PatientSelectorViewModel};
pub use database_status_viewmodel::{DatabaseStatus, DatabaseStatusViewModel};
