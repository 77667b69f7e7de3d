use thiserror::Error;

use crate::model::Category;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("cannot score a quiz with no recorded answers")]
    EmptyInput,
}

//
// ─── TALLY ────────────────────────────────────────────────────────────────────
//

/// Occurrence count per category.
///
/// Only categories seen at least once have an entry. Entries keep the order in
/// which each category was first recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTally<C> {
    entries: Vec<(C, u32)>,
}

impl<C: Category> Default for ScoreTally<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C: Category> ScoreTally<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_answers(answers: &[C]) -> Self {
        let mut tally = Self::new();
        for &category in answers {
            tally.record(category);
        }
        tally
    }

    /// Count one more occurrence and return the updated count for `category`.
    pub fn record(&mut self, category: C) -> u32 {
        if let Some((_, count)) = self.entries.iter_mut().find(|(c, _)| *c == category) {
            *count = count.saturating_add(1);
            return *count;
        }
        self.entries.push((category, 1));
        1
    }

    #[must_use]
    pub fn count(&self, category: C) -> u32 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, count)| *count)
    }

    /// Entries in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (C, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct categories recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded answers.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |acc, (_, count)| acc.saturating_add(*count))
    }
}

//
// ─── SCORER ───────────────────────────────────────────────────────────────────
//

/// Pick the most frequent category in `answers`.
///
/// Answers are scanned in the order they were recorded. The leader only changes
/// when a category's running count becomes strictly greater than the leader's,
/// so on a tie the category that reached the shared count first wins. This rule
/// is kept as-is even though it falls out of the reduction rather than being a
/// chosen policy.
///
/// # Errors
///
/// Returns `ScoreError::EmptyInput` if `answers` is empty.
pub fn score<C: Category>(answers: &[C]) -> Result<C, ScoreError> {
    let mut tally = ScoreTally::new();
    let mut leader: Option<(C, u32)> = None;

    for &category in answers {
        let count = tally.record(category);
        match leader {
            Some((_, best)) if count <= best => {}
            _ => leader = Some((category, count)),
        }
    }

    leader.map(|(category, _)| category).ok_or(ScoreError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Animal::{self, Cat, Dog, Fox, Hamster, Horse};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Coin {
        Heads,
        Tails,
    }

    impl Category for Coin {
        const ALL: &'static [Self] = &[Coin::Heads, Coin::Tails];

        fn slug(self) -> &'static str {
            match self {
                Coin::Heads => "heads",
                Coin::Tails => "tails",
            }
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(score::<Animal>(&[]), Err(ScoreError::EmptyInput));
    }

    #[test]
    fn strict_majority_wins() {
        assert_eq!(score(&[Dog, Cat, Dog, Fox, Dog]), Ok(Dog));
        assert_eq!(score(&[Horse]), Ok(Horse));
    }

    #[test]
    fn tie_goes_to_first_category_to_reach_the_count() {
        assert_eq!(score(&[Cat, Dog, Cat, Dog]), Ok(Cat));
        // Dog appears first, but Cat reaches two before Dog does.
        assert_eq!(score(&[Dog, Cat, Cat, Dog]), Ok(Cat));
        assert_eq!(score(&[Fox, Hamster, Horse]), Ok(Fox));
    }

    #[test]
    fn end_to_end_answers_score_cat() {
        let answers = [Cat, Cat, Dog, Cat, Fox];
        let tally = ScoreTally::from_answers(&answers);
        assert_eq!(tally.iter().collect::<Vec<_>>(), vec![(Cat, 3), (Dog, 1), (Fox, 1)]);
        assert_eq!(tally.count(Hamster), 0);
        assert_eq!(tally.total(), 5);
        assert_eq!(score(&answers), Ok(Cat));
    }

    #[test]
    fn result_is_always_a_recorded_category() {
        let samples: [&[Animal]; 4] = [
            &[Horse, Hamster],
            &[Fox, Fox, Cat, Cat, Dog],
            &[Hamster, Horse, Horse, Hamster, Dog, Dog],
            &[Dog, Cat, Fox, Hamster, Horse],
        ];
        for answers in samples {
            let winner = score(answers).unwrap();
            assert!(answers.contains(&winner), "{winner:?} not in {answers:?}");
        }
    }

    #[test]
    fn works_for_a_two_category_set() {
        assert_eq!(score(&[Coin::Tails, Coin::Heads, Coin::Heads]), Ok(Coin::Heads));
        assert_eq!(score(&[Coin::Tails, Coin::Heads]), Ok(Coin::Tails));
        assert_eq!(Coin::from_slug("tails"), Ok(Coin::Tails));
    }
}
