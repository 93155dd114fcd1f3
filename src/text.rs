//! Whitespace-separated decimal state format.
//!
//! Engines, distributions, and composite generators all serialize as a flat
//! run of decimal tokens so that a composite can stream its parts in
//! sequence and parse them back without delimiters.

use std::str::{FromStr, SplitWhitespace};

use crate::errors::RngError;

/// A type that can write itself as decimal tokens and read itself back from
/// a token stream.
///
/// `Display`/`FromStr` impls on the concrete types delegate here; composite
/// generators chain the `read_text` of their parts over one token stream.
pub trait TextState: Sized {
    /// Writes the state as space-separated decimal tokens.
    fn write_text(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result;

    /// Reads the state back from a token stream, consuming exactly the
    /// tokens `write_text` produced.
    fn read_text(tokens: &mut SplitWhitespace<'_>) -> Result<Self, RngError>;
}

/// Pulls and parses the next token, mapping absence or parse failure to
/// [`RngError::MalformedText`].
pub(crate) fn next_token<T: FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    what: &str,
) -> Result<T, RngError> {
    tokens
        .next()
        .ok_or_else(|| RngError::malformed(format!("missing {}", what)))?
        .parse()
        .map_err(|_| RngError::malformed(format!("unparsable {}", what)))
}

/// Runs `read_text` over a complete string, rejecting trailing tokens.
pub(crate) fn parse_all<T: TextState>(s: &str) -> Result<T, RngError> {
    let mut tokens = s.split_whitespace();
    let value = T::read_text(&mut tokens)?;
    if tokens.next().is_some() {
        return Err(RngError::malformed("trailing tokens"));
    }
    Ok(value)
}
