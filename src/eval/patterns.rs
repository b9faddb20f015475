//! Line patterns and their scores
//!
//! A candidate cell is scored per axis from a 9-cell window centred on
//! it. Patterns are matched as contiguous sub-slices of the window; only
//! `Own` and `Empty` appear in patterns, so opponent stones and walls
//! never match anything and simply block.

/// Window reach on each side of the candidate cell
pub const WINDOW_REACH: i32 = 4;
/// Window length: the candidate plus four cells either way
pub const WINDOW_LEN: usize = 2 * WINDOW_REACH as usize + 1;

/// Cell contents as seen by the side being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Stone of the side being evaluated (or the hypothetical centre stone)
    Own,
    /// Opponent stone
    Opp,
    Empty,
    /// Off the board
    Wall,
}

pub type LineWindow = [Symbol; WINDOW_LEN];

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row: immediate win. Acts as positive infinity.
    pub const FIVE: i32 = i32::MAX;
    /// Open four: `_PPPP_`
    pub const OPEN_FOUR: i32 = 100_000;
    /// Four with a single completing cell: `_PPPP`, `PPPP_`, `P_PPP`, `PPP_P`
    pub const FOUR: i32 = 10_000;
    /// Open three, or a split three that can become an open four
    pub const OPEN_THREE: i32 = 5_000;
    pub const OPEN_TWO: i32 = 500;
    /// Single stone with room on both sides: `_P_`
    pub const OPEN_ONE: i32 = 50;
}

use Symbol::{Empty as E, Own as P};

const FIVE: &[&[Symbol]] = &[&[P, P, P, P, P]];

const OPEN_FOUR: &[&[Symbol]] = &[&[E, P, P, P, P, E]];

const FOUR: &[&[Symbol]] = &[
    &[E, P, P, P, P],
    &[P, P, P, P, E],
    &[P, E, P, P, P],
    &[P, P, P, E, P],
];

const OPEN_THREE: &[&[Symbol]] = &[&[E, P, P, P, E], &[E, P, E, P, P, E], &[E, P, P, E, P, E]];

const STRAIGHT_OPEN_THREE: &[Symbol] = &[E, P, P, P, E];
const OPEN_TWO: &[Symbol] = &[E, P, P, E];
const OPEN_ONE: &[Symbol] = &[E, P, E];

/// Check if `pattern` occurs anywhere in `window`
#[inline]
fn contains(window: &LineWindow, pattern: &[Symbol]) -> bool {
    window.windows(pattern.len()).any(|w| w == pattern)
}

#[inline]
fn contains_any(window: &LineWindow, patterns: &[&[Symbol]]) -> bool {
    patterns.iter().any(|p| contains(window, p))
}

/// Score one axis window. Tiers are tried strongest first and the first
/// match wins; only when none match are the small bonuses summed.
pub fn score_window(window: &LineWindow) -> i32 {
    if contains_any(window, FIVE) {
        return PatternScore::FIVE;
    }
    if contains_any(window, OPEN_FOUR) {
        return PatternScore::OPEN_FOUR;
    }
    if contains_any(window, FOUR) {
        return PatternScore::FOUR;
    }
    if contains_any(window, OPEN_THREE) {
        return PatternScore::OPEN_THREE;
    }

    let mut score = 0;
    // Kept for parity with the tier table above even though a straight
    // open three has already returned by this point.
    if contains(window, STRAIGHT_OPEN_THREE) {
        score += PatternScore::OPEN_THREE;
    }
    if contains(window, OPEN_TWO) {
        score += PatternScore::OPEN_TWO;
    }
    if contains(window, OPEN_ONE) {
        score += PatternScore::OPEN_ONE;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::{Opp as O, Wall as W};

    fn window(s: &str) -> LineWindow {
        let mut w = [E; WINDOW_LEN];
        for (i, c) in s.chars().enumerate() {
            w[i] = match c {
                'P' => P,
                'O' => O,
                'W' => W,
                _ => E,
            };
        }
        w
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_five() {
        assert_eq!(score_window(&window("WWWWPPPPP")), PatternScore::FIVE);
        assert_eq!(score_window(&window("O_PPPPPP_")), PatternScore::FIVE);
    }

    #[test]
    fn test_open_four() {
        assert_eq!(score_window(&window("O__PPPP__")), PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_fours_with_one_completion() {
        assert_eq!(score_window(&window("WWWWPPPP_")), PatternScore::FOUR);
        assert_eq!(score_window(&window("___OPPPP_")), PatternScore::FOUR);
        assert_eq!(score_window(&window("O__P_PPPO")), PatternScore::FOUR);
        assert_eq!(score_window(&window("OPPP_PO__")), PatternScore::FOUR);
    }

    #[test]
    fn test_split_four_with_middle_gap_not_recognised() {
        // `PP_PP` is not in the four table; it falls through to the bonuses
        assert_eq!(score_window(&window("OPP_PPO__")), 0);
    }

    #[test]
    fn test_threes() {
        assert_eq!(score_window(&window("___PPP___")), PatternScore::OPEN_THREE);
        assert_eq!(score_window(&window("__P_PP___")), PatternScore::OPEN_THREE);
        assert_eq!(score_window(&window("___PP_P__")), PatternScore::OPEN_THREE);
    }

    #[test]
    fn test_closed_three_scores_nothing() {
        // Blocked on one side, no room to reach five on the other
        assert_eq!(score_window(&window("WWWOPPP__")), 0);
    }

    #[test]
    fn test_bonuses_are_additive() {
        // `_PP_` and `_P_` both present
        assert_eq!(
            score_window(&window("_P__PP___")),
            PatternScore::OPEN_TWO + PatternScore::OPEN_ONE
        );
        assert_eq!(score_window(&window("___OPP___")), 0);
        assert_eq!(score_window(&window("____P____")), PatternScore::OPEN_ONE);
        assert_eq!(score_window(&window("___PP____")), PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_walls_block_like_opponent() {
        assert_eq!(score_window(&window("WWWWP____")), 0);
        assert_eq!(score_window(&window("OOOOP____")), 0);
    }
}
