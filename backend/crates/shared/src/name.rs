//! Name formatting
//!
//! Smart capitalization used for customer and account full names.

/// Characters that start a new capitalization segment
const SEGMENT_SEPARATORS: &[char] = &['\'', '-'];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEGMENT_SEPARATORS.contains(&c)
}

/// Capitalize every segment separated by whitespace, apostrophe or hyphen.
///
/// The first character of a segment is upper-cased when it is a letter and
/// the rest of the segment is lower-cased. Separators are kept verbatim, so
/// repeated spaces survive. Segments that do not start with a letter
/// (digits, punctuation) are left untouched.
///
/// ```
/// use kernel::name::capitalize_smart;
///
/// assert_eq!(capitalize_smart("mary-jane o'brien"), "Mary-Jane O'Brien");
/// assert_eq!(capitalize_smart("JOHN DOE"), "John Doe");
/// ```
pub fn capitalize_smart(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut segment = String::new();

    for c in input.chars() {
        if is_separator(c) {
            push_segment(&mut out, &segment);
            segment.clear();
            out.push(c);
        } else {
            segment.push(c);
        }
    }
    push_segment(&mut out, &segment);

    out
}

fn push_segment(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
        _ => out.push_str(segment),
    }
}

/// Full name of a person as stored on records: the smart-capitalized join of
/// first and last name.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    capitalize_smart(&format!("{first_name} {last_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_and_apostrophe() {
        assert_eq!(full_name("mary-jane", "o'brien"), "Mary-Jane O'Brien");
    }

    #[test]
    fn test_lowercases_remainder() {
        assert_eq!(capitalize_smart("mcDONALD"), "Mcdonald");
        assert_eq!(capitalize_smart("jOHN"), "John");
    }

    #[test]
    fn test_keeps_separators_verbatim() {
        assert_eq!(capitalize_smart("anne  marie"), "Anne  Marie");
        assert_eq!(capitalize_smart("jean--luc"), "Jean--Luc");
        assert_eq!(capitalize_smart(" leading"), " Leading");
    }

    #[test]
    fn test_non_letter_segments_untouched() {
        assert_eq!(capitalize_smart("3rd street"), "3rd Street");
        assert_eq!(capitalize_smart("(dr) who"), "(dr) Who");
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(capitalize_smart("élise ÅSTRÖM"), "Élise Åström");
    }

    #[test]
    fn test_empty() {
        assert_eq!(capitalize_smart(""), "");
        assert_eq!(capitalize_smart("'-"), "'-");
    }

    #[test]
    fn test_idempotent() {
        let once = capitalize_smart("d'angelo van-der BERG");
        assert_eq!(once, "D'Angelo Van-Der Berg");
        assert_eq!(capitalize_smart(&once), once);
    }
}
