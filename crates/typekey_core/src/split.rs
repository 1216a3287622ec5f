//! Split a subject string around a delimiter.
//!
//! Unlike `str::split_once`, a subject without the delimiter is not a failure: it comes back whole as the left
//! half with an empty right half. Only an empty subject fails. Binding code relies on this to split optional
//! qualifiers (`"Module.Function"` vs. `"Function"`) with one call.
//!
//! ## Examples
//! ```rust
//! use typekey_core::split;
//!
//! assert_eq!(split("Module.Func", "."), Some(("Module", "Func")));
//! assert_eq!(split("no-delimiter-here", ","), Some(("no-delimiter-here", "")));
//! assert_eq!(split("", ","), None);
//! ```

/// Case sensitivity of the delimiter search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchCase {
    CaseSensitive,
    /// ASCII letters match regardless of case.
    #[default]
    IgnoreCase,
}

/// Direction of the delimiter search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDir {
    #[default]
    FromStart,
    FromEnd,
}

/// Split at the first case-insensitive occurrence of `delimiter`.
///
/// ## Parameters
/// - `subject`: string to split.
/// - `delimiter`: separator to search for.
///
/// ## Returns
/// - `None` if `subject` is empty.
/// - `Some((left, right))` around the match, or `Some((subject, ""))` if there is no match.
pub fn split<'a>(subject: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    split_with(subject, delimiter, SearchCase::IgnoreCase, SearchDir::FromStart)
}

/// Split with explicit search case and direction.
///
/// ## Notes
/// - An empty `delimiter` never matches.
pub fn split_with<'a>(
    subject: &'a str,
    delimiter: &str,
    case: SearchCase,
    dir: SearchDir,
) -> Option<(&'a str, &'a str)> {
    if subject.is_empty() {
        return None;
    }
    match find(subject, delimiter, case, dir) {
        Some(pos) => Some((&subject[..pos], &subject[pos + delimiter.len()..])),
        None => Some((subject, "")),
    }
}

/// Byte offset of `needle` in `haystack`.
///
/// Matching compares bytes, folding ASCII case when asked. Non-ASCII bytes must match exactly, so a match always
/// starts and ends on a `char` boundary.
fn find(haystack: &str, needle: &str, case: SearchCase, dir: SearchDir) -> Option<usize> {
    let (hay, pat) = (haystack.as_bytes(), needle.as_bytes());
    if pat.is_empty() || pat.len() > hay.len() {
        return None;
    }
    let matches_at = |start: usize| {
        let window = &hay[start..start + pat.len()];
        match case {
            SearchCase::CaseSensitive => window == pat,
            SearchCase::IgnoreCase => window.eq_ignore_ascii_case(pat),
        }
    };
    let last = hay.len() - pat.len();
    match dir {
        SearchDir::FromStart => (0..=last).find(|&i| matches_at(i)),
        SearchDir::FromEnd => (0..=last).rev().find(|&i| matches_at(i)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_match() {
        assert_eq!(split("a,b,c", ","), Some(("a", "b,c")));
        assert_eq!(split(",lead", ","), Some(("", "lead")));
        assert_eq!(split("trail,", ","), Some(("trail", "")));
    }

    #[test]
    fn missing_delimiter_returns_whole_subject() {
        assert_eq!(split("no-delimiter-here", ","), Some(("no-delimiter-here", "")));
        assert_eq!(split("ab", "abc"), Some(("ab", "")));
    }

    #[test]
    fn empty_subject_fails() {
        assert_eq!(split("", ","), None);
        assert_eq!(split_with("", "", SearchCase::CaseSensitive, SearchDir::FromEnd), None);
    }

    #[test]
    fn empty_delimiter_never_matches() {
        assert_eq!(split("abc", ""), Some(("abc", "")));
    }

    #[test]
    fn default_search_ignores_case() {
        assert_eq!(split("GetActorLocation", "actor"), Some(("Get", "Location")));
        assert_eq!(
            split_with("GetActorLocation", "actor", SearchCase::CaseSensitive, SearchDir::FromStart),
            Some(("GetActorLocation", ""))
        );
    }

    #[test]
    fn search_from_end_uses_last_match() {
        assert_eq!(
            split_with("a.b.c", ".", SearchCase::IgnoreCase, SearchDir::FromEnd),
            Some(("a.b", "c"))
        );
    }

    #[test]
    fn multibyte_subjects_split_on_char_boundaries() {
        assert_eq!(split("héllo::wörld", "::"), Some(("héllo", "wörld")));
        assert_eq!(split("ÉTÉ", "é"), Some(("ÉTÉ", "")));
    }
}
