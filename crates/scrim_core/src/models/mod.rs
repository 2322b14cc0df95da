//! State model: matches, teams, players and their identity handles.

pub mod game_match;
pub mod ids;
pub mod player;
pub mod team;

pub use game_match::Match;
pub use ids::{SessionId, TeamId, WorldId};
pub use player::Player;
pub use team::{Team, TeamFlags};
