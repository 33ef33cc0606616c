use rand::Rng;
use rand::seq::SliceRandom;

use crate::db::Question;

/// `quiz_category.id` value meaning "any category".
pub const ANY_CATEGORY: i64 = 0;

/// Map the client's category selector to a store filter.
pub fn category_filter(category_id: i64) -> Option<i64> {
    (category_id != ANY_CATEGORY).then_some(category_id)
}

/// Draw one question uniformly from the candidate set, or `None` when it is empty.
pub fn pick_question<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn zero_means_any_category() {
        assert_eq!(category_filter(0), None);
        assert_eq!(category_filter(5), Some(5));
    }

    #[test]
    fn empty_candidate_set_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_question(&[], &mut rng), None);
    }

    #[test]
    fn single_candidate_is_always_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = vec![question(42)];
        for _ in 0..20 {
            assert_eq!(pick_question(&candidates, &mut rng).map(|q| q.id), Some(42));
        }
    }

    #[test]
    fn draws_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(0x7121_a);
        let candidates: Vec<Question> = (1..=3).map(question).collect();
        let mut counts = [0usize; 3];
        let trials = 3000;
        for _ in 0..trials {
            let picked = pick_question(&candidates, &mut rng).map(|q| q.id);
            match picked {
                Some(id @ 1..=3) => counts[(id - 1) as usize] += 1,
                other => panic!("unexpected pick {other:?}"),
            }
        }
        for count in counts {
            // expected 1000 each, sd ~26
            assert!((850..=1150).contains(&count), "skewed counts: {counts:?}");
        }
    }
}
