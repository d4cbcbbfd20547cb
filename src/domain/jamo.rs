//! Hangul jamo catalogs and syllable decomposition.
//!
//! Composed syllables occupy U+AC00..=U+D7A3 and are laid out as
//! `((lead * 21) + vowel) * 28 + trail` from the block start, so the three
//! positional indices fall out of a fixed-radix split.

/// First composed syllable (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last composed syllable (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

const VOWEL_COUNT: u32 = 21;
const TRAIL_COUNT: u32 = 28;
/// Syllables sharing one leading consonant (21 * 28)
const LEAD_STRIDE: u32 = VOWEL_COUNT * TRAIL_COUNT;

/// Leading consonants (초성), in code point order
pub const LEADING: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Vowels (중성), in code point order
pub const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ',
    'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants (종성). Slot 0 is the empty coda.
pub const TRAILING: [Option<char>; 28] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'),
    Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'),
    Some('ㄾ'), Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'),
    Some('ㅅ'), Some('ㅆ'), Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'),
    Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// Letters a board may be drawn from: leading consonants, then vowels.
pub const POOL: [char; 40] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ',
    'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Check whether a character is a composed Hangul syllable
pub const fn is_syllable(c: char) -> bool {
    let code = c as u32;
    code >= SYLLABLE_BASE && code <= SYLLABLE_LAST
}

/// Split a syllable into its ordered jamo.
///
/// Yields `[lead, vowel]` or `[lead, vowel, trail]` for composed syllables.
/// Anything else, including bare jamo, passes through as a single element.
pub fn decompose(syllable: char) -> Vec<char> {
    if !is_syllable(syllable) {
        return vec![syllable];
    }

    let offset = syllable as u32 - SYLLABLE_BASE;
    let lead = (offset / LEAD_STRIDE) as usize;
    let vowel = ((offset % LEAD_STRIDE) / TRAIL_COUNT) as usize;
    let trail = (offset % TRAIL_COUNT) as usize;

    let mut parts = vec![LEADING[lead], VOWELS[vowel]];
    parts.extend(TRAILING[trail]);
    parts
}

/// Assemble a syllable from its jamo. Returns `None` when any letter is
/// missing from its catalog.
pub fn compose(lead: char, vowel: char, trail: Option<char>) -> Option<char> {
    let lead = LEADING.iter().position(|&c| c == lead)? as u32;
    let vowel = VOWELS.iter().position(|&c| c == vowel)? as u32;
    let trail = TRAILING.iter().position(|&c| c == trail)? as u32;

    char::from_u32(SYLLABLE_BASE + (lead * VOWEL_COUNT + vowel) * TRAIL_COUNT + trail)
}
