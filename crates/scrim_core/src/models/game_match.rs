use uuid::Uuid;

use crate::error::{MatchError, Result};
use crate::messaging::Messenger;
use crate::models::ids::{SessionId, TeamId, WorldId};
use crate::models::team::Team;

/// One pending or in-progress contest, bound to exactly one world.
///
/// Cycles between not-running and running indefinitely; there is no
/// terminal state, so a match can restart after ending whenever its teams
/// satisfy the start condition again.
#[derive(Debug, Clone)]
pub struct Match {
    world: WorldId,
    id: Uuid,
    running: bool,
    teams: Vec<Team>,
}

impl Match {
    /// Creates a new, not-running match for `world`.
    pub fn new(world: WorldId) -> Self {
        Self { world, id: Uuid::new_v4(), running: false, teams: Vec::new() }
    }

    pub fn world(&self) -> &WorldId {
        &self.world
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds `team` and returns its id within this match.
    ///
    /// Teams can only be added while the match is not running. The caller
    /// has already verified that no existing team shares the name
    /// case-insensitively.
    pub fn add_team(&mut self, team: Team) -> Result<TeamId> {
        if self.running {
            return Err(MatchError::InvalidState(
                "team can not be created when match in current world is running".into(),
            ));
        }
        self.teams.push(team);
        Ok(TeamId(self.teams.len() - 1))
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.get_mut(id.0)
    }

    /// All teams, in creation order.
    pub fn teams(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams.iter().enumerate().map(|(index, team)| (TeamId(index), team))
    }

    /// Teams counted toward the start requirement.
    pub fn participating_teams(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams().filter(|(_, team)| team.is_participating())
    }

    /// Teams observing the match.
    pub fn spectating_teams(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams().filter(|(_, team)| team.is_spectating())
    }

    /// Every current member, recomputed from team membership on each call.
    pub fn players(&self) -> impl Iterator<Item = &SessionId> {
        self.teams.iter().flat_map(|team| team.members().iter())
    }

    /// Members of participating teams, recomputed on each call.
    pub fn participating_players(&self) -> impl Iterator<Item = &SessionId> {
        self.participating_teams().flat_map(|(_, team)| team.members().iter())
    }

    /// Members of spectating teams, recomputed on each call.
    pub fn spectating_players(&self) -> impl Iterator<Item = &SessionId> {
        self.spectating_teams().flat_map(|(_, team)| team.members().iter())
    }

    /// Starts the match and notifies every member.
    ///
    /// Returns `Ok(false)`, without starting, when fewer than two teams are
    /// participating or any participating team is still empty; that is an
    /// expected outcome, not misuse. Fails when already running.
    pub fn start(&mut self, messenger: &dyn Messenger) -> Result<bool> {
        if self.running {
            return Err(MatchError::InvalidState(
                "match can not be started when already running".into(),
            ));
        }

        let total_participating = self.participating_teams().count();
        let ready_participating = self
            .participating_teams()
            .filter(|(_, team)| !team.members().is_empty())
            .count();
        if total_participating < 2 || ready_participating != total_participating {
            return Ok(false);
        }

        self.running = true;
        log::info!("match {} started in world {}", self.id, self.world);
        self.broadcast(messenger, "Match started.");
        Ok(true)
    }

    /// Ends the match, announcing `winner` when one is given.
    ///
    /// Fails when not currently running. Teams and members stay in place,
    /// so a later `start` may run the same match again.
    pub fn end(&mut self, winner: Option<TeamId>, messenger: &dyn Messenger) -> Result<bool> {
        if !self.running {
            return Err(MatchError::InvalidState(
                "match can not be ended when not running".into(),
            ));
        }

        self.running = false;
        let message = match winner.and_then(|id| self.team(id)) {
            Some(team) => format!("Match ended; {} won.", team.colored_name()),
            None => "Match ended without a winner.".to_string(),
        };
        log::info!("match {} ended in world {}", self.id, self.world);
        self.broadcast(messenger, &message);
        Ok(true)
    }

    /// Delivers `message` to every current member. Never fails.
    pub fn broadcast(&self, messenger: &dyn Messenger, message: &str) {
        for session in self.players() {
            messenger.send(session, message);
        }
    }
}
