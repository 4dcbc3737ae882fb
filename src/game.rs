//! Game Core
//!
//! Pure pair, round, and checking logic with no DOM coupling. The right
//! column is an explicit ordered arrangement that the drag controller
//! mutates and the checker reads, so correctness never depends on what is
//! currently rendered.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{GameItem, Pair, Side};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Playing,
    Won,
}

/// Why a new pair was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairError {
    EmptyItem,
    IdenticalItems,
}

impl PairError {
    pub fn message(&self) -> &'static str {
        match self {
            PairError::EmptyItem => "Please enter both items for the pair",
            PairError::IdenticalItems => "Items in a pair must be different",
        }
    }
}

/// Validate raw form input and build a pair from it. Both sides are trimmed;
/// either being empty, or the two being equal, is a validation error.
pub fn validate_pair(item1: &str, item2: &str) -> Result<Pair, PairError> {
    let item1 = item1.trim();
    let item2 = item2.trim();
    if item1.is_empty() || item2.is_empty() {
        return Err(PairError::EmptyItem);
    }
    if item1 == item2 {
        return Err(PairError::IdenticalItems);
    }
    Ok(Pair::new(item1, item2))
}

/// Delete the pair at `index`, shifting later pairs down. Out-of-range
/// indices are a silent no-op.
pub fn remove_pair(pairs: &mut Vec<Pair>, index: usize) {
    if index < pairs.len() {
        pairs.remove(index);
    }
}

/// Outcome of one check action
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Per-position match flag, in left-column order
    pub marks: Vec<bool>,
    pub matched: usize,
    pub all_correct: bool,
}

/// Phase transition driven by a check outcome: fully correct wins, anything
/// else keeps the round in play.
pub fn phase_after_check(report: &CheckReport) -> Phase {
    if report.all_correct {
        Phase::Won
    } else {
        Phase::Playing
    }
}

/// One active round: the fixed left column plus the player-reorderable
/// right arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub left: Vec<GameItem>,
    pub right: Vec<GameItem>,
}

impl Round {
    /// Build a round from the pair list: left items in pair order, right
    /// items shuffled with one uniform Fisher-Yates pass. Returns `None`
    /// for an empty list.
    pub fn start(pairs: &[Pair]) -> Option<Round> {
        Self::start_with(pairs, &mut rand::thread_rng())
    }

    pub fn start_with(pairs: &[Pair], rng: &mut impl Rng) -> Option<Round> {
        if pairs.is_empty() {
            return None;
        }

        let left = pairs
            .iter()
            .enumerate()
            .map(|(pair_index, pair)| GameItem {
                text: pair.item1.clone(),
                pair_index,
                side: Side::Left,
            })
            .collect();

        let mut right: Vec<GameItem> = pairs
            .iter()
            .enumerate()
            .map(|(pair_index, pair)| GameItem {
                text: pair.item2.clone(),
                pair_index,
                side: Side::Right,
            })
            .collect();
        right.shuffle(rng);

        Some(Round { left, right })
    }

    fn right_position(&self, pair_index: usize) -> Option<usize> {
        self.right.iter().position(|item| item.pair_index == pair_index)
    }

    /// Reinsert the dragged item directly before or after `target` in the
    /// right arrangement. Unknown tags and self-drops are no-ops.
    pub fn reorder(&mut self, dragged: usize, target: usize, before: bool) {
        if dragged == target {
            return;
        }
        let Some(from) = self.right_position(dragged) else {
            return;
        };
        let Some(to) = self.right_position(target) else {
            return;
        };
        // already in the requested spot
        if (before && from + 1 == to) || (!before && to + 1 == from) {
            return;
        }

        let item = self.right.remove(from);
        // re-resolve after the removal shifted indices
        let to = self
            .right_position(target)
            .map(|to| if before { to } else { to + 1 })
            .unwrap_or(self.right.len());
        self.right.insert(to, item);
    }

    /// Move the dragged item to the end of the right column (pointer below
    /// every item).
    pub fn move_to_end(&mut self, dragged: usize) {
        if let Some(from) = self.right_position(dragged) {
            let item = self.right.remove(from);
            self.right.push(item);
        }
    }

    /// Compare the columns position by position, by pair-index tag.
    pub fn check(&self) -> CheckReport {
        let marks: Vec<bool> = self
            .left
            .iter()
            .zip(&self.right)
            .map(|(left, right)| left.pair_index == right.pair_index)
            .collect();
        let matched = marks.iter().filter(|m| **m).count();
        CheckReport {
            all_correct: matched == marks.len(),
            matched,
            marks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_pairs() -> Vec<Pair> {
        vec![Pair::new("Cat", "Meow"), Pair::new("Dog", "Bark")]
    }

    #[test]
    fn validate_pair_accepts_and_trims() {
        let pair = validate_pair("  Cat ", "Meow").unwrap();
        assert_eq!(pair, Pair::new("Cat", "Meow"));
    }

    #[test]
    fn validate_pair_rejects_bad_input() {
        assert_eq!(validate_pair("", "x"), Err(PairError::EmptyItem));
        assert_eq!(validate_pair("x", ""), Err(PairError::EmptyItem));
        assert_eq!(validate_pair("  ", "x"), Err(PairError::EmptyItem));
        assert_eq!(validate_pair("x", "x"), Err(PairError::IdenticalItems));
        assert_eq!(validate_pair(" x ", "x"), Err(PairError::IdenticalItems));
    }

    #[test]
    fn add_then_remove_shifts_indices() {
        let mut pairs = sample_pairs();
        pairs.push(validate_pair("Sun", "Hot").unwrap());
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], Pair::new("Sun", "Hot"));

        remove_pair(&mut pairs, 0);
        assert_eq!(pairs, vec![Pair::new("Dog", "Bark"), Pair::new("Sun", "Hot")]);
    }

    #[test]
    fn remove_pair_out_of_range_is_noop() {
        let mut pairs = sample_pairs();
        remove_pair(&mut pairs, 5);
        assert_eq!(pairs, sample_pairs());
    }

    #[test]
    fn start_requires_pairs() {
        assert!(Round::start(&[]).is_none());
    }

    #[test]
    fn start_keeps_left_ordered_and_right_permuted() {
        let pairs: Vec<Pair> = (0..8)
            .map(|i| Pair::new(format!("left{i}"), format!("right{i}")))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);
        let round = Round::start_with(&pairs, &mut rng).unwrap();

        let left_tags: Vec<usize> = round.left.iter().map(|i| i.pair_index).collect();
        assert_eq!(left_tags, (0..8).collect::<Vec<_>>());
        assert!(round.left.iter().all(|i| i.side == Side::Left));

        let mut right_tags: Vec<usize> = round.right.iter().map(|i| i.pair_index).collect();
        assert!(round.right.iter().all(|i| i.side == Side::Right));
        right_tags.sort_unstable();
        assert_eq!(right_tags, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn aligned_round_checks_fully_correct() {
        let pairs = sample_pairs();
        let mut rng = StdRng::seed_from_u64(1);
        let mut round = Round::start_with(&pairs, &mut rng).unwrap();
        // force the aligned arrangement
        round.right.sort_by_key(|item| item.pair_index);

        let report = round.check();
        assert!(report.all_correct);
        assert_eq!(report.matched, 2);
        assert_eq!(report.marks, vec![true, true]);
        assert_eq!(phase_after_check(&report), Phase::Won);
    }

    #[test]
    fn swapped_round_checks_zero_matched() {
        let pairs = sample_pairs();
        let mut rng = StdRng::seed_from_u64(1);
        let mut round = Round::start_with(&pairs, &mut rng).unwrap();
        round.right.sort_by_key(|item| item.pair_index);
        round.right.swap(0, 1); // [Bark, Meow]

        let report = round.check();
        assert!(!report.all_correct);
        assert_eq!(report.matched, 0);
        assert_eq!(report.marks, vec![false, false]);
        assert_eq!(phase_after_check(&report), Phase::Playing);
    }

    fn fixed_round(n: usize) -> Round {
        let pairs: Vec<Pair> = (0..n)
            .map(|i| Pair::new(format!("l{i}"), format!("r{i}")))
            .collect();
        let mut round = Round::start_with(&pairs, &mut StdRng::seed_from_u64(0)).unwrap();
        round.right.sort_by_key(|item| item.pair_index);
        round
    }

    fn right_tags(round: &Round) -> Vec<usize> {
        round.right.iter().map(|i| i.pair_index).collect()
    }

    #[test]
    fn reorder_before_and_after_target() {
        let mut round = fixed_round(4); // [0, 1, 2, 3]
        round.reorder(3, 1, true);
        assert_eq!(right_tags(&round), vec![0, 3, 1, 2]);

        round.reorder(0, 2, false);
        assert_eq!(right_tags(&round), vec![3, 1, 2, 0]);
    }

    #[test]
    fn reorder_self_or_unknown_is_noop() {
        let mut round = fixed_round(3);
        round.reorder(1, 1, true);
        round.reorder(9, 0, true);
        assert_eq!(right_tags(&round), vec![0, 1, 2]);
    }

    #[test]
    fn move_to_end_appends_dragged() {
        let mut round = fixed_round(4);
        round.move_to_end(1);
        assert_eq!(right_tags(&round), vec![0, 2, 3, 1]);
    }

    #[test]
    fn reorder_never_touches_left_column_or_pairs() {
        let mut round = fixed_round(4);
        let left_before = round.left.clone();
        round.reorder(2, 0, true);
        round.move_to_end(0);
        assert_eq!(round.left, left_before);
    }
}
