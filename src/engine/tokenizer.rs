use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Split `text` into words on whitespace and punctuation.
///
/// Empty tokens are dropped, so an empty or separator-only input yields
/// an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

/// Unicode general category P* (Pc, Pd, Ps, Pe, Pi, Pf, Po).
///
/// Symbols (category S) such as `+`, `$` or `|` are not punctuation.
pub fn is_punctuation(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_and_punctuation() {
        let words = tokenize("Hello, world!\nIt's\ta test.");
        assert_eq!(words, vec!["Hello", "world", "It", "s", "a", "test"]);
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,.;\n\t!?").is_empty());
    }

    #[test]
    fn test_symbols_are_not_separators() {
        assert_eq!(tokenize("a+b c$d"), vec!["a+b", "c$d"]);
    }

    #[test]
    fn test_unicode_punctuation() {
        assert_eq!(tokenize("«привет»—мир…"), vec!["привет", "мир"]);
        assert_eq!(tokenize("你好。世界"), vec!["你好", "世界"]);
    }

    #[test]
    fn test_punctuation_outside_common_blocks() {
        // Ethiopic wordspace
        assert_eq!(tokenize("ሰላም፡ዓለም"), vec!["ሰላም", "ዓለም"]);
        // Mongolian comma
        assert_eq!(tokenize("ᠮᠣᠩ᠂ᠭᠣᠯ"), vec!["ᠮᠣᠩ", "ᠭᠣᠯ"]);
        // Myanmar section mark
        assert_eq!(tokenize("မြန်မာ။စာ"), vec!["မြန်မာ", "စာ"]);
        // Tibetan intersyllabic tsheg
        assert_eq!(tokenize("བོད་ཡིག"), vec!["བོད", "ཡིག"]);
        // Aegean word separator line, outside the BMP
        assert_eq!(tokenize("ab\u{10100}cd"), vec!["ab", "cd"]);

        for c in ['\u{1361}', '\u{104B}', '\u{0F0B}', '\u{0700}', '\u{1802}', '\u{A4FF}', '\u{10100}'] {
            assert!(is_punctuation(c), "U+{:04X} should be punctuation", c as u32);
        }
    }

    #[test]
    fn test_symbols_and_letters_are_not_punctuation() {
        for c in ['+', '$', '|', '~', '^', '<', '€', 'a', 'ж', '7', '\u{1F600}'] {
            assert!(!is_punctuation(c), "U+{:04X} should not be punctuation", c as u32);
        }
    }

    #[test]
    fn test_underscore_and_dash_split() {
        assert_eq!(tokenize("snake_case-word"), vec!["snake", "case", "word"]);
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(tokenize("route 66"), vec!["route", "66"]);
    }
}
