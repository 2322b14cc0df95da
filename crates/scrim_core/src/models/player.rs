use serde::{Deserialize, Serialize};

use crate::models::ids::{SessionId, TeamId, WorldId};

/// A player admitted to exactly one team of one match.
///
/// Links by id rather than by reference: the team itself lives inside its
/// owning [`Match`](crate::models::Match).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    session: SessionId,
    world: WorldId,
    team: TeamId,
}

impl Player {
    pub fn new(session: SessionId, world: WorldId, team: TeamId) -> Self {
        Self { session, world, team }
    }

    /// The host-platform session this player record wraps.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// The world hosting the player's match.
    pub fn world(&self) -> &WorldId {
        &self.world
    }

    /// The player's team within that match.
    pub fn team(&self) -> TeamId {
        self.team
    }
}
