//! User edit form state machine.

use core_types::{RecordId, User};
use web_types::{Endpoint, FetchError, UserUpdate};

/// Editable user fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    TeamId,
}

impl EditField {
    /// Field for a form control's `name` attribute.
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(EditField::Name),
            "email" => Some(EditField::Email),
            "team_id" => Some(EditField::TeamId),
            _ => None,
        }
    }

    pub fn input_name(&self) -> &'static str {
        match self {
            EditField::Name => "name",
            EditField::Email => "email",
            EditField::TeamId => "team_id",
        }
    }
}

/// A PATCH the form wants issued.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub endpoint: Endpoint,
    pub body: UserUpdate,
}

/// The edit form. At most one user is edited at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        user_id: RecordId,
        form: UserUpdate,
        error: Option<String>,
    },
    Saving {
        user_id: RecordId,
        form: UserUpdate,
    },
}

impl EditSession {
    /// Open the form for a user, pre-filled from the record.
    ///
    /// Ignored while a save is in flight.
    pub fn open(&mut self, user: &User) {
        if self.is_saving() {
            return;
        }
        *self = EditSession::Open {
            user_id: user.id.clone(),
            form: UserUpdate::from_user(user),
            error: None,
        };
    }

    /// Update one field while the form is open.
    pub fn set_field(&mut self, field: EditField, value: String) {
        if let EditSession::Open { form, .. } = self {
            match field {
                EditField::Name => form.name = value,
                EditField::Email => form.email = value,
                EditField::TeamId => form.team_id = value,
            }
        }
    }

    /// The request a submit would issue, without changing state.
    pub fn save_request(&self) -> Option<SaveRequest> {
        match self {
            EditSession::Open { user_id, form, .. } => Some(SaveRequest {
                endpoint: Endpoint::User(user_id.clone()),
                body: form.clone(),
            }),
            _ => None,
        }
    }

    /// Submit: Open → Saving. Returns the request to issue.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        let request = self.save_request()?;
        if let EditSession::Open { user_id, form, .. } = std::mem::take(self) {
            *self = EditSession::Saving { user_id, form };
        }
        Some(request)
    }

    /// Save finished: Saving → Closed.
    pub fn save_succeeded(&mut self) {
        if self.is_saving() {
            *self = EditSession::Closed;
        }
    }

    /// Save failed: Saving → Open with the message, form untouched.
    pub fn save_failed(&mut self, message: String) {
        if let EditSession::Saving { user_id, form } = std::mem::take(self) {
            *self = EditSession::Open {
                user_id,
                form,
                error: Some(message),
            };
        }
    }

    /// Close or cancel. Returns `false` when refused during a save.
    pub fn close(&mut self) -> bool {
        if self.is_saving() {
            return false;
        }
        *self = EditSession::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, EditSession::Saving { .. })
    }

    pub fn user_id(&self) -> Option<&RecordId> {
        match self {
            EditSession::Closed => None,
            EditSession::Open { user_id, .. } | EditSession::Saving { user_id, .. } => {
                Some(user_id)
            }
        }
    }

    pub fn form(&self) -> Option<&UserUpdate> {
        match self {
            EditSession::Closed => None,
            EditSession::Open { form, .. } | EditSession::Saving { form, .. } => Some(form),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EditSession::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

/// Message shown in the form when a save fails.
pub fn save_error_message(err: &FetchError) -> String {
    match err {
        FetchError::Status { status } => format!("Failed to update user: {status}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: RecordId::from("u1"),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            team_id: Some("t1".to_string()),
            ..Default::default()
        }
    }

    fn form(name: &str) -> UserUpdate {
        UserUpdate {
            name: name.to_string(),
            email: "a@x.com".to_string(),
            team_id: "t1".to_string(),
        }
    }

    #[test]
    fn test_open_prefills_form() {
        let mut session = EditSession::default();
        session.open(&sample_user());

        assert!(session.is_open());
        assert_eq!(session.form(), Some(&form("A")));
        assert_eq!(session.user_id(), Some(&RecordId::from("u1")));
        assert!(session.error().is_none());
    }

    #[test]
    fn test_open_defaults_missing_team_to_empty() {
        let mut user = sample_user();
        user.team_id = None;

        let mut session = EditSession::default();
        session.open(&user);

        assert_eq!(session.form().unwrap().team_id, "");
    }

    #[test]
    fn test_open_clears_previous_error() {
        let mut session = EditSession::default();
        session.open(&sample_user());
        session.begin_save();
        session.save_failed("Failed to update user: 400".to_string());
        assert!(session.error().is_some());

        session.close();
        session.open(&sample_user());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_submit_builds_patch() {
        let mut session = EditSession::default();
        session.open(&sample_user());
        session.set_field(EditField::Name, "B".to_string());

        let request = session.begin_save().unwrap();

        assert_eq!(request.endpoint, Endpoint::User(RecordId::from("u1")));
        assert_eq!(request.endpoint.path(), "/users/u1/");
        assert_eq!(request.body, form("B"));
        assert!(session.is_saving());
    }

    #[test]
    fn test_saving_refuses_close_and_edits() {
        let mut session = EditSession::default();
        session.open(&sample_user());
        session.begin_save();

        assert!(!session.close());
        session.set_field(EditField::Email, "changed@x.com".to_string());
        session.open(&User::default());
        assert!(session.begin_save().is_none());

        assert!(session.is_saving());
        assert_eq!(session.form(), Some(&form("A")));
    }

    #[test]
    fn test_save_success_closes() {
        let mut session = EditSession::default();
        session.open(&sample_user());
        session.begin_save();
        session.save_succeeded();

        assert_eq!(session, EditSession::Closed);
    }

    #[test]
    fn test_save_failure_reopens_with_form_intact() {
        let mut session = EditSession::default();
        session.open(&sample_user());
        session.set_field(EditField::Name, "B".to_string());
        session.begin_save();
        session.save_failed(save_error_message(&FetchError::Status { status: 400 }));

        assert!(session.is_open());
        assert!(!session.is_saving());
        assert_eq!(session.error(), Some("Failed to update user: 400"));
        assert_eq!(session.form(), Some(&form("B")));

        // resubmit without re-entering data
        let retry = session.begin_save().unwrap();
        assert_eq!(retry.body, form("B"));
    }

    #[test]
    fn test_outcomes_ignored_when_not_saving() {
        let mut session = EditSession::default();
        session.save_succeeded();
        session.save_failed("late".to_string());
        assert_eq!(session, EditSession::Closed);

        session.open(&sample_user());
        session.save_succeeded();
        assert!(session.is_open());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(EditField::from_input_name("team_id"), Some(EditField::TeamId));
        assert_eq!(EditField::from_input_name("password"), None);
        assert_eq!(EditField::Email.input_name(), "email");
    }

    #[test]
    fn test_transport_save_error_message() {
        let message = save_error_message(&FetchError::Transport("Failed to fetch".to_string()));
        assert_eq!(message, "Failed to fetch");
    }
}
