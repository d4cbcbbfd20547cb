use rand::{seq::IndexedRandom, Rng};

/// Single-syllable targets the player is asked to spell
pub const WORDS: &[char] = &[
    '산', '물', '불', '달', '별', '손', '눈', '밤', '밥', '집',
    '길', '꽃', '꿈', '강', '빛', '차', '안', '열', '힘', '점',
];

/// Messages shown after a completed word
pub const PRAISE: &[&str] = &["잘했어요!", "정답입니다!", "완벽해요!", "멋져요!", "좋아요!"];

pub fn random_word(rng: &mut impl Rng) -> char {
    *WORDS.choose(rng).unwrap_or(&WORDS[0])
}

pub fn random_praise(rng: &mut impl Rng) -> &'static str {
    PRAISE.choose(rng).copied().unwrap_or(PRAISE[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::jamo::{decompose, is_syllable};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_every_word_is_a_syllable() {
        for &word in WORDS {
            assert!(is_syllable(word), "{word}");
            assert!(matches!(decompose(word).len(), 2 | 3));
        }
    }

    #[test]
    fn test_random_word_comes_from_list() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(WORDS.contains(&random_word(&mut rng)));
            assert!(PRAISE.contains(&random_praise(&mut rng)));
        }
    }
}
