//! Unique-prefix matching of user tokens against a fixed vocabulary.
//!
//! The same rule resolves relative date keywords (`t` is ambiguous, `tod` is
//! `today`) and calendar navigation (`l` is `last`). Command names follow the
//! identical rule through clap's subcommand inference.

use crate::errors::MatchError;

/// Outcome of matching a token against a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixMatch<'a> {
    /// Exactly one candidate starts with the token.
    Unique(&'a str),
    /// No candidate starts with the token.
    NoMatch,
    /// Several candidates start with the token, in candidate order.
    Ambiguous(Vec<&'a str>),
}

impl<'a> PrefixMatch<'a> {
    /// Converts the outcome into a `Result`, keeping the input and the
    /// candidates in the error for display.
    pub fn into_result(self, input: &str, candidates: &[&str]) -> Result<&'a str, MatchError> {
        match self {
            PrefixMatch::Unique(found) => Ok(found),
            PrefixMatch::NoMatch => Err(MatchError::NoMatch {
                input: input.to_string(),
                options: candidates.iter().map(|c| c.to_string()).collect(),
            }),
            PrefixMatch::Ambiguous(matches) => Err(MatchError::Ambiguous {
                input: input.to_string(),
                matches: matches.into_iter().map(str::to_string).collect(),
            }),
        }
    }
}

/// Finds every candidate that `token` is a prefix of.
///
/// A candidate equal to the token still counts as a prefix match, so a token
/// that is a full word and also a prefix of a longer candidate is ambiguous.
///
/// # Examples
///
/// ```
/// use daybook::matching::{match_prefix, PrefixMatch};
///
/// assert_eq!(match_prefix("y", &["today", "yesterday"]), PrefixMatch::Unique("yesterday"));
/// assert_eq!(match_prefix("x", &["today", "yesterday"]), PrefixMatch::NoMatch);
/// ```
pub fn match_prefix<'a>(token: &str, candidates: &[&'a str]) -> PrefixMatch<'a> {
    let mut matches: Vec<&'a str> = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.starts_with(token))
        .collect();

    match matches.len() {
        0 => PrefixMatch::NoMatch,
        1 => PrefixMatch::Unique(matches.remove(0)),
        _ => PrefixMatch::Ambiguous(matches),
    }
}
