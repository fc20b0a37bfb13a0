pub extern crate pest;
pub extern crate pest_derive;

use std::str::FromStr;

use pest_derive::Parser;
use tracing::trace;

use crate::chordname::error::Error;
use crate::chordname::note::Note;
use crate::chordname::noteparser::pest::Parser;

#[derive(Parser)]
#[grammar = "chordname/note.pest"]
pub struct NoteParser;

/// Splits `text` on whitespace and parses every token, in input order.
///
/// Stops at the first malformed token. An empty or blank `text` gives an
/// empty sequence, which the resolver rejects.
pub fn parse_notes(text: &str) -> Result<Vec<Note>, Error> {
    let pairs = NoteParser::parse(Rule::FULL_NOTES, text)
        .map_err(|e| Error::Tokenize(e.to_string()))?;
    pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::TOKEN)
        .map(|pair| {
            trace!(token = pair.as_str(), "parsing note token");
            Note::from_str(pair.as_str())
        })
        .collect()
}
