//! Free-text classification for UID submissions

/// What a non-command text message turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    /// A well-formed numeric UID
    Uid(String),
    /// Looked like a UID submission but the identifier is not numeric
    InvalidUid,
    /// Anything else
    Other,
}

/// Classifies a text message.
///
/// After trimming: a case-insensitive `uid` prefix makes the trimmed
/// remainder the candidate, digit-only text is the candidate itself, and
/// anything else is [`TextInput::Other`]. A candidate is accepted only when it
/// is non-empty and consists of ASCII digits.
pub fn classify_text(text: &str) -> TextInput {
    let text = text.trim();

    let candidate = match text.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("uid") => text[3..].trim(),
        _ if is_digits(text) => text,
        _ => return TextInput::Other,
    };

    if is_digits(candidate) {
        TextInput::Uid(candidate.to_string())
    } else {
        TextInput::InvalidUid
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(s: &str) -> TextInput {
        TextInput::Uid(s.to_string())
    }

    #[test]
    fn test_uid_prefix() {
        assert_eq!(classify_text("UID 999888"), uid("999888"));
        assert_eq!(classify_text("uid 123"), uid("123"));
        assert_eq!(classify_text("Uid123"), uid("123"));
        assert_eq!(classify_text("  UID   42  "), uid("42"));
    }

    #[test]
    fn test_bare_digits() {
        assert_eq!(classify_text("1234567"), uid("1234567"));
        assert_eq!(classify_text(" 0042 "), uid("0042"));
    }

    #[test]
    fn test_invalid_after_prefix() {
        assert_eq!(classify_text("UID"), TextInput::InvalidUid);
        assert_eq!(classify_text("UID: 123"), TextInput::InvalidUid);
        assert_eq!(classify_text("uid abc"), TextInput::InvalidUid);
        assert_eq!(classify_text("UIDs please"), TextInput::InvalidUid);
        assert_eq!(classify_text("UID 12 34"), TextInput::InvalidUid);
    }

    #[test]
    fn test_other_text() {
        assert_eq!(classify_text("hello"), TextInput::Other);
        assert_eq!(classify_text("12a"), TextInput::Other);
        assert_eq!(classify_text("-5"), TextInput::Other);
        assert_eq!(classify_text(""), TextInput::Other);
        assert_eq!(classify_text("   "), TextInput::Other);
    }

    #[test]
    fn test_non_ascii_digits_are_not_uids() {
        assert_eq!(classify_text("١٢٣"), TextInput::Other);
        assert_eq!(classify_text("UID ١٢٣"), TextInput::InvalidUid);
    }

    #[test]
    fn test_multibyte_prefix_does_not_panic() {
        assert_eq!(classify_text("привет"), TextInput::Other);
        assert_eq!(classify_text("ü1"), TextInput::Other);
    }
}
