//! Users page reducer.

use core_types::{RecordId, Team, User};
use web_types::FetchError;

use crate::{EditField, EditSession, FetchState, UserDirectory, save_error_message};

/// Everything the Users page tracks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersScreen {
    pub data: FetchState<UserDirectory>,
    pub edit: EditSession,
}

/// Events the Users page reacts to.
#[derive(Debug, Clone)]
pub enum UsersAction {
    /// Both the users and the teams requests finished.
    Loaded(Result<(Vec<User>, Vec<Team>), FetchError>),
    /// Edit button on a row.
    Edit(RecordId),
    Input(EditField, String),
    Submit,
    Saved(User),
    SaveFailed(FetchError),
    Close,
}

impl UsersScreen {
    pub fn apply(&mut self, action: UsersAction) {
        match action {
            UsersAction::Loaded(result) => {
                let data = std::mem::take(&mut self.data);
                self.data = data.settle(result.map(|(users, teams)| UserDirectory::new(users, teams)));
            }
            UsersAction::Edit(id) => {
                match self.data.data().and_then(|d| d.find(&id)) {
                    Some(user) => self.edit.open(user),
                    None => tracing::warn!(%id, "edit requested for unknown user"),
                }
            }
            UsersAction::Input(field, value) => self.edit.set_field(field, value),
            UsersAction::Submit => {
                self.edit.begin_save();
            }
            UsersAction::Saved(user) => {
                if !self.edit.is_saving() {
                    return;
                }
                if let Some(directory) = self.data.data_mut() {
                    directory.replace(user);
                }
                self.edit.save_succeeded();
            }
            UsersAction::SaveFailed(err) => self.edit.save_failed(save_error_message(&err)),
            UsersAction::Close => {
                self.edit.close();
            }
        }
    }
}
