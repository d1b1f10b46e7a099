use crate::types::ModeQuery;
use tracing::{debug, warn};

/// Turn the raw mode argument into a query.
///
/// With an alias list, an in-range index selects the alias. The index is
/// read like C `stoi`: leading whitespace, an optional sign, then the digit
/// prefix, so `" 1"` and `"1x"` both select alias 1. Anything else
/// (no leading digits, overflow, negative, past the end) is kept as a
/// literal mode; that is a fallback, never an error.
pub fn resolve(mode: &str, aliases: &[String]) -> ModeQuery {
    if aliases.is_empty() || mode.is_empty() {
        return ModeQuery::from_literal(mode);
    }

    match parse_index_prefix(mode) {
        Some(idx) => match usize::try_from(idx).ok().and_then(|i| aliases.get(i)) {
            Some(alias) => {
                debug!("Mode index {} resolved to {:?}", idx, alias);
                ModeQuery::Target(alias.clone())
            }
            None => {
                warn!(
                    "Mode index {} is outside the alias list (len {}), using it literally",
                    idx,
                    aliases.len()
                );
                ModeQuery::from_literal(mode)
            }
        },
        None => {
            debug!("Mode {:?} is not an index, using it literally", mode);
            ModeQuery::from_literal(mode)
        }
    }
}

/// Leading integer of `text` within `i32` range, ignoring trailing junk.
fn parse_index_prefix(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    let sign_len = text.len() - unsigned.len();
    text[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases() -> Vec<String> {
        vec!["chinese".to_string(), "english".to_string()]
    }

    #[test]
    fn test_index_selects_alias() {
        assert_eq!(resolve("0", &aliases()), ModeQuery::Target("chinese".into()));
        assert_eq!(resolve("1", &aliases()), ModeQuery::Target("english".into()));
    }

    #[test]
    fn test_out_of_range_falls_back_to_literal() {
        assert_eq!(resolve("5", &aliases()), ModeQuery::Target("5".into()));
        assert_eq!(resolve("-1", &aliases()), ModeQuery::Target("-1".into()));
    }

    #[test]
    fn test_non_numeric_is_literal() {
        assert_eq!(resolve("english", &aliases()), ModeQuery::Target("english".into()));
        assert_eq!(resolve("x1", &aliases()), ModeQuery::Target("x1".into()));
        assert_eq!(resolve("+", &aliases()), ModeQuery::Target("+".into()));
    }

    #[test]
    fn test_index_prefix_like_stoi() {
        assert_eq!(resolve("1x", &aliases()), ModeQuery::Target("english".into()));
        assert_eq!(resolve(" 1", &aliases()), ModeQuery::Target("english".into()));
        assert_eq!(resolve("+0", &aliases()), ModeQuery::Target("chinese".into()));
        assert_eq!(resolve("-0", &aliases()), ModeQuery::Target("chinese".into()));
    }

    #[test]
    fn test_overflowing_index_is_literal() {
        assert_eq!(
            resolve("99999999999", &aliases()),
            ModeQuery::Target("99999999999".into())
        );
    }

    #[test]
    fn test_empty_mode_is_unset() {
        assert_eq!(resolve("", &[]), ModeQuery::Unset);
        assert_eq!(resolve("", &aliases()), ModeQuery::Unset);
    }

    #[test]
    fn test_without_aliases_digits_are_literal() {
        assert_eq!(resolve("1", &[]), ModeQuery::Target("1".into()));
    }
}
