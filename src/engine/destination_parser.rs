/// Extracts the destination from a suggestion such as
/// "Crete. Enjoy the Mediterranean sun...".
///
/// The destination is the text before the first '.', trimmed. Without a
/// '.' the whole response is used. Empty segments before the name (as in
/// ". Crete") are skipped; text made only of dots is returned whole, so
/// non-empty text never yields "".
pub fn parse_destination(text: &str) -> String {
    let whole = text.trim();

    whole
        .split('.')
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .unwrap_or(whole)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_text_before_first_dot() {
        assert_eq!(parse_destination("Crete. Enjoy the sun."), "Crete");
    }

    #[test]
    fn no_dot_uses_whole_response() {
        assert_eq!(parse_destination("Somewhere great"), "Somewhere great");
    }

    #[test]
    fn trims_leading_newlines_from_completion() {
        assert_eq!(
            parse_destination("\n\n  Kyoto, Japan. Temples and gardens."),
            "Kyoto, Japan"
        );
    }

    #[test]
    fn only_first_dot_splits() {
        assert_eq!(parse_destination("St Ives. Cornwall. UK."), "St Ives");
    }

    #[test]
    fn leading_dot_is_skipped() {
        assert_eq!(parse_destination(". Crete. Sunny."), "Crete");
        assert_eq!(parse_destination("..Crete"), "Crete");
    }

    #[test]
    fn only_dots_falls_back_to_whole_text() {
        assert_eq!(parse_destination(" ... "), "...");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(parse_destination(""), "");
        assert_eq!(parse_destination("   "), "");
    }
}
