//! Scoring and score tiers.

use crate::models::QuestionStore;

/// Number of questions whose recorded answer equals the correct key.
///
/// Safe to call mid-quiz: unanswered questions simply don't count.
pub fn score(store: &QuestionStore) -> usize {
    store.iter().filter(|q| q.is_answered_correctly()).count()
}

/// Score band that decides the result message and animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    Good,
    NeedsImprovement,
}

impl Tier {
    /// `Good` starts at 70%. An empty quiz counts as perfect since every
    /// question (all zero of them) was answered correctly.
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Tier::Perfect
        } else if score * 10 >= total * 7 {
            Tier::Good
        } else {
            Tier::NeedsImprovement
        }
    }

    pub fn message(self, score: usize) -> String {
        match self {
            Tier::Perfect => "Perfect! Every answer correct. Congratulations!".to_string(),
            Tier::Good => format!("Great work! You scored {}. Keep it up!", score),
            Tier::NeedsImprovement => {
                format!("Keep practising! You scored {}. Next time will be better!", score)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choice, Question};

    fn store_with(correct: &[&str], answers: &[Option<char>]) -> QuestionStore {
        let mut store: QuestionStore = correct
            .iter()
            .map(|key| {
                Question::new(
                    "q",
                    vec![
                        Choice::new('A', "a"),
                        Choice::new('B', "b"),
                        Choice::new('C', "c"),
                    ],
                    *key,
                )
            })
            .collect::<Vec<_>>()
            .into();
        for (i, answer) in answers.iter().enumerate() {
            if let Some(key) = answer {
                store.record_answer(i, *key);
            }
        }
        store
    }

    #[test]
    fn invalid_answer_scores_two_of_three() {
        let store = store_with(&["A", "B", "C"], &[Some('A'), Some('B'), Some('X')]);
        assert_eq!(score(&store), 2);
    }

    #[test]
    fn partial_quiz_gives_partial_count() {
        let store = store_with(&["A", "B", "C"], &[Some('A'), None, None]);
        assert_eq!(score(&store), 1);
        assert_eq!(score(&store), 1);
    }

    #[test]
    fn empty_store_scores_zero() {
        assert_eq!(score(&QuestionStore::default()), 0);
    }

    #[test]
    fn tiers_follow_seventy_percent_boundary() {
        assert_eq!(Tier::for_score(3, 3), Tier::Perfect);
        assert_eq!(Tier::for_score(2, 3), Tier::NeedsImprovement);
        assert_eq!(Tier::for_score(7, 10), Tier::Good);
        assert_eq!(Tier::for_score(9, 10), Tier::Good);
        assert_eq!(Tier::for_score(6, 10), Tier::NeedsImprovement);
        assert_eq!(Tier::for_score(0, 3), Tier::NeedsImprovement);
    }

    #[test]
    fn empty_quiz_is_perfect() {
        assert_eq!(Tier::for_score(0, 0), Tier::Perfect);
    }

    #[test]
    fn messages_include_score() {
        assert!(Tier::Good.message(8).contains('8'));
        assert!(Tier::NeedsImprovement.message(1).contains('1'));
    }
}
