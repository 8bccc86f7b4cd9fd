//! Pure kana chain rules: effective last character and small-kana
//! normalization. Total functions, no browser dependencies.

/// Long-vowel mark. A name ending in it chains on the kana preceding it so
/// the phonetic link stays meaningful ("フリーザー" chains on ザ).
pub const ELONGATION_MARK: char = 'ー';

/// The nasal kana no name begins with. A chain ending on it ends the game.
pub const TERMINAL_KANA: char = 'ン';

// Small-form kana and their full-size base forms, used for lead matching.
const SMALL_TO_BASE: &[(char, char)] = &[
    ('ァ', 'ア'),
    ('ィ', 'イ'),
    ('ゥ', 'ウ'),
    ('ェ', 'エ'),
    ('ォ', 'オ'),
    ('ッ', 'ツ'),
    ('ャ', 'ヤ'),
    ('ュ', 'ユ'),
    ('ョ', 'ヨ'),
    ('ヮ', 'ワ'),
];

/// The kana a name chains on: its last character, or the one before a
/// trailing elongation mark. `None` only when the trimmed name holds no
/// usable kana (empty, or a lone elongation mark).
pub fn effective_last_char(name: &str) -> Option<char> {
    let mut rev = name.trim().chars().rev();
    let last = rev.next()?;
    if last == ELONGATION_MARK {
        rev.next()
    } else {
        Some(last)
    }
}

/// Map a small-form kana to its full-size base; anything else passes through
/// unchanged. Idempotent (no base form is itself a small form).
pub fn normalize(c: char) -> char {
    SMALL_TO_BASE
        .iter()
        .find(|&&(small, _)| small == c)
        .map(|&(_, base)| base)
        .unwrap_or(c)
}
