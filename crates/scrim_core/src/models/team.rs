use serde::{Deserialize, Serialize};

use crate::color::ChatColor;
use crate::error::{MatchError, Result};
use crate::messaging::Messenger;
use crate::models::ids::SessionId;

/// Eligibility and role flags, fixed for the team's whole lifetime.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TeamFlags {
    /// Map-level eligibility; a prerequisite for `is_participating`.
    #[serde(default)]
    pub can_participate: bool,
    /// Actively competing and counted toward match-start requirements.
    #[serde(default)]
    pub is_participating: bool,
    /// Observing only; never counted toward match-start requirements.
    #[serde(default)]
    pub is_spectating: bool,
}

/// A named, colored group of players within one match.
///
/// Name and color can be edited after creation; the map-authored initial
/// values and the eligibility flags cannot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Name as authored by the map; never edited.
    initial_name: String,
    /// Color as authored by the map; never edited.
    initial_color: ChatColor,
    name: String,
    color: ChatColor,
    flags: TeamFlags,
    members: Vec<SessionId>,
}

impl Team {
    /// Creates a new team.
    ///
    /// Fails when the flags mark the team participating without being able
    /// to participate. Participating-while-spectating is rejected at the
    /// command boundary before construction.
    pub fn new(name: impl Into<String>, color: ChatColor, flags: TeamFlags) -> Result<Self> {
        if flags.is_participating && !flags.can_participate {
            return Err(MatchError::Validation(
                "team can not be participating when not able to participate".into(),
            ));
        }
        let name = name.into();
        Ok(Self {
            initial_name: name.clone(),
            initial_color: color,
            name,
            color,
            flags,
            members: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn color(&self) -> ChatColor {
        self.color
    }

    pub fn set_color(&mut self, color: ChatColor) {
        self.color = color;
    }

    /// The map-authored name, unaffected by later edits.
    pub fn initial_name(&self) -> &str {
        &self.initial_name
    }

    /// The map-authored color, unaffected by later edits.
    pub fn initial_color(&self) -> ChatColor {
        self.initial_color
    }

    pub fn can_participate(&self) -> bool {
        self.flags.can_participate
    }

    pub fn is_participating(&self) -> bool {
        self.flags.is_participating
    }

    pub fn is_spectating(&self) -> bool {
        self.flags.is_spectating
    }

    pub fn members(&self) -> &[SessionId] {
        &self.members
    }

    /// Display form used in announcements: color prefix, current name, reset.
    pub fn colored_name(&self) -> String {
        format!("{}{}{}", self.color, self.name, ChatColor::RESET)
    }

    /// Appends `session` to the member list.
    ///
    /// Unconditional: the command boundary keeps a player off two teams by
    /// checking the registry before calling this.
    pub fn add_member(&mut self, session: SessionId) {
        self.members.push(session);
    }

    /// Delivers `message` to every current member. Never fails.
    pub fn broadcast(&self, messenger: &dyn Messenger, message: &str) {
        for session in &self.members {
            messenger.send(session, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::recording::RecordingMessenger;

    fn flags(can: bool, participating: bool, spectating: bool) -> TeamFlags {
        TeamFlags { can_participate: can, is_participating: participating, is_spectating: spectating }
    }

    #[test]
    fn test_participating_requires_eligibility() {
        let result = Team::new("Red", ChatColor::Red, flags(false, true, false));
        assert!(matches!(result, Err(MatchError::Validation(_))));
    }

    #[test]
    fn test_initial_name_and_color_survive_edits() {
        let mut team = Team::new("Red", ChatColor::Red, flags(true, true, false)).unwrap();
        team.set_name("Crimson");
        team.set_color(ChatColor::DarkRed);
        assert_eq!(team.name(), "Crimson");
        assert_eq!(team.color(), ChatColor::DarkRed);
        assert_eq!(team.initial_name(), "Red");
        assert_eq!(team.initial_color(), ChatColor::Red);
    }

    #[test]
    fn test_colored_name_uses_current_values() {
        let team = Team::new("Blue", ChatColor::Blue, flags(true, false, false)).unwrap();
        assert_eq!(team.colored_name(), "§9Blue§r");
    }

    #[test]
    fn test_broadcast_reaches_every_member() {
        let mut team = Team::new("Red", ChatColor::Red, flags(true, true, false)).unwrap();
        let alice = SessionId::new("alice");
        let bob = SessionId::new("bob");
        team.add_member(alice.clone());
        team.add_member(bob.clone());

        let messenger = RecordingMessenger::new();
        team.broadcast(&messenger, "hello team");
        assert_eq!(messenger.messages_for(&alice), vec!["hello team"]);
        assert_eq!(messenger.messages_for(&bob), vec!["hello team"]);
    }

    #[test]
    fn test_flags_deserialize_with_defaults() {
        let parsed: TeamFlags = serde_json::from_str(r#"{"can_participate": true}"#).unwrap();
        assert!(parsed.can_participate);
        assert!(!parsed.is_participating);
        assert!(!parsed.is_spectating);
    }
}
