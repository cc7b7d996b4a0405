/// Accent folding used for letter matching.
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case `c` and strip its diacritics, so `Á`, `á` and `a` all fold to `a`.
///
/// Characters without a decomposition come back lower-cased and otherwise untouched.
pub fn fold(c: char) -> char {
    c.to_lowercase()
        .nfd()
        .find(|ch| !is_combining_mark(*ch))
        .unwrap_or(c)
}

/// Lower-case a secret word and compose its accents onto their letters.
///
/// Marks left over with no precomposed form (the dot of `İ` lower-cases to
/// `i` + U+0307) are dropped, so every character of the result is a letter
/// the player can guess.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .nfc()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}
