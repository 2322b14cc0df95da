//! Fuzzy scoring for free-text references to named candidates.
//!
//! Scores a user-typed abbreviation against a candidate name in `[0.0, 1.0]`.
//! An exact full match scores 1.0; prefix, word-boundary and camel-case
//! abbreviations score high; an abbreviation whose characters cannot all be
//! found in order scores 0.0. Selection over a candidate set accepts only
//! scores at or above a threshold, so an absent or ambiguous reference is a
//! reportable "no such candidate", never a wrong pick.

/// Score when the abbreviation cannot be matched at all.
pub const SCORE_NO_MATCH: f64 = 0.0;
/// Per-position score for an exactly matched character.
pub const SCORE_MATCH: f64 = 1.0;
/// Score for trailing, not-yet-typed positions.
pub const SCORE_TRAILING: f64 = 0.8;
/// Trailing score when the abbreviation matched the candidate's first character.
pub const SCORE_TRAILING_BUT_STARTED: f64 = 0.9;
/// Filler score for characters skipped across a word or case boundary.
pub const SCORE_BUFFER: f64 = 0.85;
/// Minimum score required to accept a fuzzy match as unambiguous.
pub const DEFAULT_THRESHOLD: f64 = SCORE_TRAILING_BUT_STARTED;

/// Scores `abbreviation` against `candidate`.
///
/// An empty abbreviation is a deliberate not-yet-started partial match and
/// scores [`SCORE_TRAILING`]; an abbreviation longer than the candidate can
/// never match and scores [`SCORE_NO_MATCH`].
pub fn score(candidate: &str, abbreviation: &str) -> f64 {
    if abbreviation.is_empty() {
        return SCORE_TRAILING;
    }

    let chars: Vec<char> = candidate.chars().collect();
    let abbrev: Vec<char> = abbreviation.chars().collect();
    if abbrev.len() > chars.len() {
        return SCORE_NO_MATCH;
    }

    match build_score_array(&chars, &abbrev) {
        Some(scores) => scores.iter().sum::<f64>() / scores.len() as f64,
        None => SCORE_NO_MATCH,
    }
}

/// Per-position scores for `candidate`, or `None` on a complete miss.
fn build_score_array(chars: &[char], abbrev: &[char]) -> Option<Vec<f64>> {
    let mut scores = vec![SCORE_NO_MATCH; chars.len()];
    let lower: Vec<char> = chars.iter().map(|&c| fold(c)).collect();

    let mut last_index: Option<usize> = None;
    let mut started = false;
    for &a in abbrev {
        let wanted = fold(a);
        let from = last_index.map_or(0, |i| i + 1);
        let index = (from..lower.len()).find(|&i| lower[i] == wanted)?;
        if index == 0 {
            started = true;
        }

        if is_new_word(chars, index) {
            // Reward the word boundary itself and buffer the skipped gap.
            scores[index - 1] = SCORE_MATCH;
            let gap_end = (index - 1).max(from);
            scores[from..gap_end].fill(SCORE_BUFFER);
        } else if chars[index].is_uppercase() {
            scores[from..index].fill(SCORE_BUFFER);
        } else {
            scores[from..index].fill(SCORE_NO_MATCH);
        }

        scores[index] = SCORE_MATCH;
        last_index = Some(index);
    }

    let trailing = if started { SCORE_TRAILING_BUT_STARTED } else { SCORE_TRAILING };
    let from = last_index.map_or(0, |i| i + 1);
    scores[from..].fill(trailing);
    Some(scores)
}

/// Whether the character at `index` starts a new space- or tab-separated word.
fn is_new_word(chars: &[char], index: usize) -> bool {
    index != 0 && matches!(chars[index - 1], ' ' | '\t')
}

/// Case folding for the greedy walk. Taking the first lowercase character
/// keeps positions aligned with the candidate's original characters.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Picks the candidate whose name best matches `abbreviation`.
///
/// Only a strictly higher score displaces the current best, so among equal
/// scores the first candidate encountered wins. Returns `None` when no
/// candidate reaches `threshold`.
pub fn match_best<'a, T, I>(candidates: I, abbreviation: &str, threshold: f64) -> Option<T>
where
    I: IntoIterator<Item = (&'a str, T)>,
{
    let mut best_score = SCORE_NO_MATCH;
    let mut best = None;
    for (name, value) in candidates {
        let candidate_score = score(name, abbreviation);
        if candidate_score > best_score && candidate_score >= threshold {
            best_score = candidate_score;
            best = Some(value);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_abbreviation_is_trailing_score() {
        assert_eq!(score("Red", ""), SCORE_TRAILING);
        assert_eq!(score("a", ""), SCORE_TRAILING);
    }

    #[test]
    fn test_abbreviation_longer_than_candidate_never_matches() {
        assert_eq!(score("Red", "Redder"), SCORE_NO_MATCH);
        assert_eq!(score("", "x"), SCORE_NO_MATCH);
    }

    #[test]
    fn test_exact_match_scores_one() {
        assert_eq!(score("Red", "Red"), 1.0);
        assert_eq!(score("Blue Team", "Blue Team"), 1.0);
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert_eq!(score("Red", "red"), 1.0);
        assert_eq!(score("red", "RED"), 1.0);
    }

    #[test]
    fn test_absent_character_scores_zero() {
        assert_eq!(score("abc", "z"), SCORE_NO_MATCH);
        assert_eq!(score("abc", "ac!"), SCORE_NO_MATCH);
    }

    #[test]
    fn test_out_of_order_characters_score_zero() {
        // Both present, but not findable going forward.
        assert_eq!(score("abc", "ca"), SCORE_NO_MATCH);
    }

    #[test]
    fn test_word_boundary_abbreviation_scores_high() {
        assert!(score("Hello World", "hw") > 0.9);
    }

    #[test]
    fn test_camel_case_abbreviation_beats_plain_skip() {
        assert!(score("RedTeam", "rt") > score("redteam", "rt"));
    }

    #[test]
    fn test_prefix_beats_interior_match() {
        assert!(score("Red", "re") > score("Spectators", "e"));
    }

    #[test]
    fn test_adjacent_match_after_separator() {
        // Separator character matched explicitly, then the word start.
        let s = score("a b", "a b");
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_match_best_picks_highest_scorer() {
        let teams = [("Red", 0usize), ("Blue", 1usize)];
        assert_eq!(match_best(teams, "re", DEFAULT_THRESHOLD), Some(0));
        assert_eq!(match_best(teams, "blu", DEFAULT_THRESHOLD), Some(1));
    }

    #[test]
    fn test_match_best_below_threshold_is_none() {
        let teams = [("Red", 0usize), ("Blue", 1usize)];
        assert_eq!(match_best(teams, "green", DEFAULT_THRESHOLD), None);
    }

    #[test]
    fn test_match_best_tie_keeps_first_candidate() {
        // Identical names score identically; the earlier entry must win.
        let teams = [("Red", 'a'), ("Red", 'b')];
        assert_eq!(match_best(teams, "red", DEFAULT_THRESHOLD), Some('a'));
    }

    proptest! {
        #[test]
        fn prop_score_stays_in_unit_interval(candidate in ".{0,24}", abbrev in ".{0,24}") {
            let s = score(&candidate, &abbrev);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn prop_self_match_is_perfect(candidate in ".{1,24}") {
            let s = score(&candidate, &candidate);
            prop_assert!((s - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_empty_abbreviation_is_constant(candidate in ".{1,24}") {
            prop_assert_eq!(score(&candidate, ""), SCORE_TRAILING);
        }
    }
}
