//! Command surface over the registry.
//!
//! Each handler is the in-process contract behind one user command: it
//! validates input, resolves free-text team references, mutates the match
//! through the registry and returns the feedback line for the command
//! sender. Errors are surfaced verbatim as user-facing refusals.

use crate::color::ChatColor;
use crate::error::{MatchError, Result};
use crate::fuzzy::{self, DEFAULT_THRESHOLD};
use crate::messaging::Messenger;
use crate::models::{Player, SessionId, Team, TeamFlags, TeamId, WorldId};
use crate::registry::Registry;

/// Creates the match for `world`.
pub fn create_match(registry: &mut Registry, world: &WorldId) -> Result<String> {
    registry.create_match(world.clone())?;
    Ok("Match created.".to_string())
}

/// Starts the match in `world`.
///
/// The core's "not enough ready teams" outcome becomes a user-facing
/// refusal here; the state model itself does not treat it as an error.
pub fn start_match(
    registry: &mut Registry,
    messenger: &dyn Messenger,
    world: &WorldId,
) -> Result<String> {
    let game = registry.get_match_mut(world).ok_or_else(|| {
        MatchError::InvalidState("match can not be started in world where no match is present".into())
    })?;
    if game.start(messenger)? {
        Ok("Match started.".to_string())
    } else {
        Err(MatchError::InvalidState(
            "match can not be started when not enough teams are ready".into(),
        ))
    }
}

/// Ends the match in `world`, optionally in favor of the participating team
/// best matching the free-text `winner_query`.
pub fn end_match(
    registry: &mut Registry,
    messenger: &dyn Messenger,
    world: &WorldId,
    winner_query: Option<&str>,
) -> Result<String> {
    let game = registry
        .get_match_mut(world)
        .ok_or_else(|| MatchError::NotFound(format!("no match for world {}", world)))?;
    let winner = match winner_query {
        Some(query) => Some(resolve_team(game.participating_teams(), query)?),
        None => None,
    };
    game.end(winner, messenger)?;
    Ok("Match ended.".to_string())
}

/// Creates a team in `world`'s match.
///
/// Validates, in order: the color code resolves to a known color, the flag
/// combination is coherent, a match exists, and no existing team carries
/// the same name case-insensitively.
pub fn create_team(
    registry: &mut Registry,
    world: &WorldId,
    name: &str,
    color_code: char,
    flags: TeamFlags,
) -> Result<String> {
    let color = ChatColor::by_char(color_code)
        .ok_or_else(|| MatchError::Validation(format!("invalid color code '{}'", color_code)))?;
    if flags.is_participating && !flags.can_participate {
        return Err(MatchError::Validation(
            "team can not be participating when not able to participate".into(),
        ));
    }
    if flags.is_participating && flags.is_spectating {
        return Err(MatchError::Validation(
            "team can not be participating when spectating".into(),
        ));
    }

    let game = registry.get_match_mut(world).ok_or_else(|| {
        MatchError::InvalidState("team can not be created when no match exists in current world".into())
    })?;
    let wanted = name.to_lowercase();
    if game.teams().any(|(_, team)| team.name().to_lowercase() == wanted) {
        return Err(MatchError::InvalidState("team with specified name already exists".into()));
    }

    game.add_team(Team::new(name, color, flags)?)?;
    log::info!("team {} created in world {}", name, world);
    Ok("Team created.".to_string())
}

/// Admits `target` to the team in `world` best matching `team_query`.
pub fn join_team(
    registry: &mut Registry,
    world: &WorldId,
    team_query: &str,
    target: SessionId,
) -> Result<String> {
    if registry.get_player(&target).is_some() {
        return Err(MatchError::InvalidState(format!(
            "player {} is already on a team",
            target
        )));
    }

    let (team_id, team_display) = {
        let game = registry
            .get_match_mut(world)
            .ok_or_else(|| MatchError::NotFound(format!("no match found in world {}", world)))?;
        let team_id = resolve_team(game.teams(), team_query)?;
        let team = game
            .team_mut(team_id)
            .ok_or_else(|| MatchError::NoSuchTeam { query: team_query.to_string() })?;
        team.add_member(target.clone());
        (team_id, team.colored_name())
    };

    registry.map_player(target.clone(), Player::new(target.clone(), world.clone(), team_id));
    Ok(format!("Player {} added to team {}.", target, team_display))
}

/// Resolves a free-text team reference over the given candidates.
fn resolve_team<'a>(
    candidates: impl Iterator<Item = (TeamId, &'a Team)>,
    query: &str,
) -> Result<TeamId> {
    fuzzy::match_best(
        candidates.map(|(id, team)| (team.name(), id)),
        query,
        DEFAULT_THRESHOLD,
    )
    .ok_or_else(|| MatchError::NoSuchTeam { query: query.to_string() })
}
