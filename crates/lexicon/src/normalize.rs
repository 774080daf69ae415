//! Word normalization.
//!
//! Words are title-cased before they become storage keys: the first cased
//! letter of every word is title-cased and later ones lowercased. Word
//! boundaries follow the Unicode word-break classes. Punctuation that may sit
//! inside a word (apostrophes, `.`, `:`) keeps it whole unless two such
//! characters follow each other, so `l'été` and `a.b` stay single words.
//! Digits never change case and never start or end a word.

/// Title-case `word` for use as a dictionary key.
///
/// # Examples
///
/// ```
/// use lexicon::normalize_word;
///
/// assert_eq!(normalize_word("banane"), "Banane");
/// assert_eq!(normalize_word("arc-en-ciel"), "Arc-En-Ciel");
/// assert_eq!(normalize_word("l'été"), "L'été");
/// assert_eq!(normalize_word("1er"), "1Er");
/// ```
pub fn normalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut mid_word = false;
    let mut prev_mid = false;

    for c in word.chars() {
        let mid = is_mid_word(c);
        if prev_mid && mid {
            mid_word = false;
        }

        if is_cased(c) {
            if mid_word {
                out.extend(c.to_lowercase());
            } else {
                push_titlecase(&mut out, c);
                mid_word = true;
            }
        } else {
            out.push(c);
            if !c.is_alphanumeric() && !mid && !is_combining_mark(c) {
                mid_word = false;
            }
        }

        prev_mid = mid;
    }

    out
}

/// Push the title-case form of `c`: its first uppercase char, the rest lowercased.
fn push_titlecase(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
        out.extend(upper.flat_map(char::to_lowercase));
    }
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

/// Characters of the MidLetter, MidNumLet and Single_Quote word-break classes.
const fn is_mid_word(c: char) -> bool {
    matches!(
        c,
        '\'' | '.' | ':' | '\u{b7}' | '\u{387}' | '\u{55f}' | '\u{5f4}'
            | '\u{2018}' | '\u{2019}' | '\u{2024}' | '\u{2027}'
            | '\u{fe13}' | '\u{fe52}' | '\u{fe55}' | '\u{ff07}' | '\u{ff0e}' | '\u{ff1a}'
    )
}

/// Combining diacritics extend the character before them.
const fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{300}'..='\u{36f}'
            | '\u{1ab0}'..='\u{1aff}'
            | '\u{1dc0}'..='\u{1dff}'
            | '\u{20d0}'..='\u{20ff}'
            | '\u{fe20}'..='\u{fe2f}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(normalize_word("banane"), "Banane");
        assert_eq!(normalize_word("BANANE"), "Banane");
        assert_eq!(normalize_word("bAnAnE"), "Banane");
    }

    #[test]
    fn test_accented_letters() {
        assert_eq!(normalize_word("éclair"), "Éclair");
        assert_eq!(normalize_word("ÉCOLE"), "École");
        assert_eq!(normalize_word("œuf"), "Œuf");
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(normalize_word("pomme de terre"), "Pomme De Terre");
        assert_eq!(normalize_word("arc-en-ciel"), "Arc-En-Ciel");
        assert_eq!(normalize_word("  deux  espaces "), "  Deux  Espaces ");
    }

    #[test]
    fn test_apostrophes() {
        assert_eq!(normalize_word("l'été"), "L'été");
        assert_eq!(normalize_word("aujourd'hui"), "Aujourd'hui");
        assert_eq!(normalize_word("l\u{2019}ami"), "L\u{2019}ami");
        assert_eq!(normalize_word("rock'n'roll"), "Rock'n'roll");
        assert_eq!(normalize_word("'quote' test"), "'Quote' Test");
    }

    #[test]
    fn test_word_internal_punctuation() {
        assert_eq!(normalize_word("a.b"), "A.b");
        assert_eq!(normalize_word("n.b. note"), "N.b. Note");
        assert_eq!(normalize_word("ratio:un"), "Ratio:un");
        assert_eq!(normalize_word("l\u{b7}l"), "L\u{b7}l");
    }

    #[test]
    fn test_doubled_punctuation_splits() {
        assert_eq!(normalize_word("a''b"), "A''B");
        assert_eq!(normalize_word("fin..début"), "Fin..Début");
        assert_eq!(normalize_word("a.'b"), "A.'B");
    }

    #[test]
    fn test_digits_keep_word_state() {
        assert_eq!(normalize_word("1er"), "1Er");
        assert_eq!(normalize_word("covid-19"), "Covid-19");
        assert_eq!(normalize_word("mp3player"), "Mp3player");
        assert_eq!(normalize_word("12:30 h"), "12:30 H");
    }

    #[test]
    fn test_combining_marks_stay_in_word() {
        assert_eq!(normalize_word("e\u{301}TE\u{301}"), "E\u{301}te\u{301}");
    }

    #[test]
    fn test_multi_char_titlecase() {
        assert_eq!(normalize_word("ßa"), "Ssa");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_word(""), "");
    }
}
