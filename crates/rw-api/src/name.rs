//! Identifier normalization for result names and uncertainty labels.

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const WORD_BREAKS: [char; 3] = [' ', '_', '-'];

/// Spelled-out English word for a single decimal digit.
pub fn digit_word(digit: u32) -> Option<&'static str> {
    DIGIT_WORDS.get(digit as usize).copied()
}

/// Replace German umlauts and sharp s with their ASCII digraphs.
pub fn fold_accents(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            'ß' => out.push_str("ss"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn free text into a camel-cased identifier.
///
/// Accents are folded first. Spaces, underscores and hyphens capitalize the
/// next letter. Each digit is spelled out in place, capitalized unless it
/// starts the identifier, and also capitalizes the letter after it. Any
/// other character is dropped.
///
/// `"müller 2x"` becomes `"muellerTwoX"`.
pub fn normalize_name(raw: &str) -> String {
    let folded = fold_accents(raw);
    let mut out = String::with_capacity(folded.len());
    let mut upper_next = false;

    for c in folded.chars() {
        if c.is_alphabetic() {
            if upper_next {
                out.extend(c.to_uppercase());
                upper_next = false;
            } else {
                out.push(c);
            }
        } else if let Some(word) = c.to_digit(10).and_then(digit_word) {
            if out.is_empty() {
                out.push_str(word);
            } else {
                push_capitalized(&mut out, word);
            }
            upper_next = true;
        } else if WORD_BREAKS.contains(&c) {
            upper_next = true;
        }
    }
    out
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_then_camel_cases() {
        assert_eq!(normalize_name("müller 2x"), "muellerTwoX");
    }

    #[test]
    fn word_breaks() {
        assert_eq!(normalize_name("a_b-c d"), "aBCD");
        assert_eq!(normalize_name("speed of light"), "speedOfLight");
        assert_eq!(normalize_name("  leading"), "Leading");
    }

    #[test]
    fn digits_are_spelled_out() {
        assert_eq!(normalize_name("1a"), "oneA");
        assert_eq!(normalize_name("x12"), "xOneTwo");
        assert_eq!(normalize_name("v0"), "vZero");
    }

    #[test]
    fn uppercase_umlauts_and_sharp_s() {
        assert_eq!(normalize_name("Äpfel Größe"), "AepfelGroesse");
        assert_eq!(fold_accents("Übermaß"), "Uebermass");
    }

    #[test]
    fn other_characters_dropped() {
        assert_eq!(normalize_name("a.b/c!"), "abc");
        assert_eq!(normalize_name("!!!"), "");
    }

    #[test]
    fn letters_keep_their_case() {
        assert_eq!(normalize_name("NaCl conc"), "NaClConc");
    }
}
