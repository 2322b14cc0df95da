//! # scrim_core - Match, Team and Player Lifecycle Core
//!
//! In-memory management of multiplayer game matches inside isolated
//! game-world instances: creating a match, forming teams with eligibility
//! rules, admitting players, cycling a match between not-running and
//! running, and resolving partially-typed team names to the team the user
//! meant.
//!
//! ## Features
//! - match/team/player state model with start/end rules
//! - fuzzy scoring for free-text team references with an acceptance
//!   threshold
//! - explicit [`Registry`] context object (no globals, no locking)
//! - host platform abstracted behind opaque ids and a [`Messenger`] seam
//!
//! The core is synchronous and single-threaded by contract: the embedding
//! host invokes every mutation from its one command-dispatch thread. Hosts
//! needing concurrent access must add their own synchronization around the
//! registry.

pub mod color;
pub mod commands;
pub mod error;
pub mod fuzzy;
pub mod messaging;
pub mod models;
pub mod registry;

// Re-export the core surface
pub use color::ChatColor;
pub use error::{MatchError, Result};
pub use fuzzy::{match_best, score, DEFAULT_THRESHOLD};
pub use messaging::{LogMessenger, Messenger};
pub use models::{Match, Player, SessionId, Team, TeamFlags, TeamId, WorldId};
pub use registry::Registry;
