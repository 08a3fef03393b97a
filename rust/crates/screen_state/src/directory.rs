//! Users together with the teams used to label them.

use core_types::{RecordId, Team, User};

/// Loaded users and teams for the Users screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
    teams: Vec<Team>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>, teams: Vec<Team>) -> Self {
        Self { users, teams }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn find(&self, id: &RecordId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Name of the team with the given id, if it is loaded.
    pub fn team_name(&self, team_id: Option<&str>) -> Option<&str> {
        let team_id = team_id.filter(|id| !id.is_empty())?;
        self.teams
            .iter()
            .find(|t| t.id.as_str() == team_id)
            .map(|t| t.name.as_str())
    }

    /// Label for a user's team: the inlined name, else the lookup.
    pub fn team_label<'a>(&'a self, user: &'a User) -> Option<&'a str> {
        user.inline_team_name()
            .or_else(|| self.team_name(user.team_ref()))
    }

    /// Replace the user with the same id. Returns whether one matched.
    pub fn replace(&mut self, updated: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => {
                tracing::warn!(id = %updated.id, "updated user not present in loaded list");
                false
            }
        }
    }
}
