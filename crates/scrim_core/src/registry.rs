//! Process-wide directory resolving worlds to matches and sessions to
//! players.
//!
//! The registry is an explicit context object: construct one at startup and
//! thread it through every command handler. It carries no locking; the
//! embedding host drives all mutation from its single command-dispatch
//! thread.

use std::collections::HashMap;

use crate::error::{MatchError, Result};
use crate::models::{Match, Player, SessionId, WorldId};

#[derive(Debug, Default)]
pub struct Registry {
    matches: HashMap<WorldId, Match>,
    players: HashMap<SessionId, Player>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and stores the match for `world`; at most one per world.
    pub fn create_match(&mut self, world: WorldId) -> Result<&mut Match> {
        if self.matches.contains_key(&world) {
            return Err(MatchError::InvalidState(
                "match can not be created in world where match is already present".into(),
            ));
        }
        log::info!("match created in world {}", world);
        let created = Match::new(world.clone());
        Ok(self.matches.entry(world).or_insert(created))
    }

    pub fn get_match(&self, world: &WorldId) -> Option<&Match> {
        self.matches.get(world)
    }

    pub fn get_match_mut(&mut self, world: &WorldId) -> Option<&mut Match> {
        self.matches.get_mut(world)
    }

    /// All registered matches, in no particular order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.values()
    }

    /// Removes and returns the match for `world`.
    ///
    /// Fails when no match exists for the world, or while the match is
    /// running. Player records belonging to the torn-down match are removed
    /// from the directory along with it.
    pub fn remove_match(&mut self, world: &WorldId) -> Result<Match> {
        let existing = self
            .matches
            .get(world)
            .ok_or_else(|| MatchError::NotFound(format!("no match for world {}", world)))?;
        if existing.is_running() {
            return Err(MatchError::InvalidState("match can not be removed when running".into()));
        }

        self.players.retain(|_, player| player.world() != world);
        log::info!("match removed from world {}", world);
        self.matches
            .remove(world)
            .ok_or_else(|| MatchError::NotFound(format!("no match for world {}", world)))
    }

    /// Maps `session` to `player` in the directory.
    ///
    /// Last write wins: an existing mapping for the session is silently
    /// replaced. Callers that want "already on a team" semantics must check
    /// [`get_player`](Self::get_player) first, as the join-team command does.
    pub fn map_player(&mut self, session: SessionId, player: Player) {
        log::debug!("session {} mapped to team in world {}", session, player.world());
        self.players.insert(session, player);
    }

    /// Drops the directory entry for `session`, returning it if present.
    pub fn remove_player(&mut self, session: &SessionId) -> Option<Player> {
        self.players.remove(session)
    }

    pub fn get_player(&self, session: &SessionId) -> Option<&Player> {
        self.players.get(session)
    }
}
