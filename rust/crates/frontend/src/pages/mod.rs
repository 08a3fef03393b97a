//! Page components.

mod activities;
mod home;
mod leaderboard;
mod teams;
mod users;
mod workouts;

pub use activities::ActivitiesPage;
pub use home::HomePage;
pub use leaderboard::LeaderboardPage;
pub use teams::TeamsPage;
pub use users::UsersPage;
pub use workouts::WorkoutsPage;
