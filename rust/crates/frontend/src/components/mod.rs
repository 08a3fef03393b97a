//! Reusable UI components.

mod edit_user_modal;
mod empty_state;
mod error_alert;
mod loading;
mod screen;

pub use edit_user_modal::EditUserModal;
pub use empty_state::{EmptyCard, EmptyRow};
pub use error_alert::ErrorAlert;
pub use loading::Loading;
pub use screen::{PageHeader, render_fetch_state};
