mod catalog;
mod category;
mod diagnostic;
mod home;
mod progress;
mod quiz;
mod reset;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use catalog::CatalogView;
pub use category::CategoryView;
pub use diagnostic::{DataGate, DiagnosticPanel, RedirectHome};
pub use home::HomeView;
pub use progress::ProgressView;
pub use quiz::QuizView;
pub use reset::ResetDialog;
pub use state::{ViewError, ViewState, view_state_from_resource};
