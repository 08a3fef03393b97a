//! Screen state for the OctoFit dashboard.
//!
//! The dashboard screens are thin Yew components; the state they move
//! through lives here so it can be exercised without a browser:
//! - [`FetchState`]: the one-shot loader every screen uses
//! - [`UserDirectory`]: loaded users plus the teams used to label them
//! - [`EditSession`]: the user edit form (Closed → Open → Saving)
//! - [`UsersScreen`]: the Users page reducer tying the three together

mod directory;
mod edit;
mod fetch;
mod users;

pub use directory::UserDirectory;
pub use edit::{EditField, EditSession, SaveRequest, save_error_message};
pub use fetch::FetchState;
pub use users::{UsersAction, UsersScreen};
