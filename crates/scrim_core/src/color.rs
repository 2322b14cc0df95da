//! Chat color table used for team display names.
//!
//! The host platform renders legacy `§x` color codes; this module only
//! resolves the one-character codes map authors use and formats the prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A known chat color, addressable by its one-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl ChatColor {
    /// Sequence that ends a colored span.
    pub const RESET: &'static str = "§r";

    /// Resolves a one-character color code, case-insensitively.
    pub fn by_char(code: char) -> Option<ChatColor> {
        match code.to_ascii_lowercase() {
            '0' => Some(ChatColor::Black),
            '1' => Some(ChatColor::DarkBlue),
            '2' => Some(ChatColor::DarkGreen),
            '3' => Some(ChatColor::DarkAqua),
            '4' => Some(ChatColor::DarkRed),
            '5' => Some(ChatColor::DarkPurple),
            '6' => Some(ChatColor::Gold),
            '7' => Some(ChatColor::Gray),
            '8' => Some(ChatColor::DarkGray),
            '9' => Some(ChatColor::Blue),
            'a' => Some(ChatColor::Green),
            'b' => Some(ChatColor::Aqua),
            'c' => Some(ChatColor::Red),
            'd' => Some(ChatColor::LightPurple),
            'e' => Some(ChatColor::Yellow),
            'f' => Some(ChatColor::White),
            _ => None,
        }
    }

    /// The one-character code for this color.
    pub fn code(&self) -> char {
        match self {
            ChatColor::Black => '0',
            ChatColor::DarkBlue => '1',
            ChatColor::DarkGreen => '2',
            ChatColor::DarkAqua => '3',
            ChatColor::DarkRed => '4',
            ChatColor::DarkPurple => '5',
            ChatColor::Gold => '6',
            ChatColor::Gray => '7',
            ChatColor::DarkGray => '8',
            ChatColor::Blue => '9',
            ChatColor::Green => 'a',
            ChatColor::Aqua => 'b',
            ChatColor::Red => 'c',
            ChatColor::LightPurple => 'd',
            ChatColor::Yellow => 'e',
            ChatColor::White => 'f',
        }
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "§{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_char_known_codes() {
        assert_eq!(ChatColor::by_char('c'), Some(ChatColor::Red));
        assert_eq!(ChatColor::by_char('9'), Some(ChatColor::Blue));
        assert_eq!(ChatColor::by_char('f'), Some(ChatColor::White));
    }

    #[test]
    fn test_by_char_is_case_insensitive() {
        assert_eq!(ChatColor::by_char('C'), Some(ChatColor::Red));
        assert_eq!(ChatColor::by_char('A'), Some(ChatColor::Green));
    }

    #[test]
    fn test_by_char_unknown_code() {
        assert_eq!(ChatColor::by_char('z'), None);
        assert_eq!(ChatColor::by_char('§'), None);
    }

    #[test]
    fn test_display_emits_legacy_prefix() {
        assert_eq!(ChatColor::Red.to_string(), "§c");
        assert_eq!(ChatColor::by_char(ChatColor::Gold.code()), Some(ChatColor::Gold));
    }
}
