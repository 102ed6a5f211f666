//! The typed REPL grammar.
//!
//! One line becomes one [`Command`]: a verb plus validated arguments, or a
//! [`CommandError`]. Verbs must match exactly after the line has been
//! lowercased by the loop; arguments keep whatever spacing follows the
//! first separator.

use silicon_chant_engine::ChantSpec;

use crate::error::CommandError;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `sigil` - print the current sigil.
    ShowSigil,
    /// `sigil <phrase>` - fold the phrase and set the current sigil.
    MakeSigil(String),
    /// `chant <kind> [args]` - run a sink driver against the current sigil.
    Chant(ChantSpec),
    /// `geomantic` - render the current sigil as geomantic signs.
    Geomantic,
    /// `help [topic]` - print help text.
    Help(Option<String>),
    /// `end` - leave the session.
    End,
}

impl Command {
    /// Parse one input line (line terminator already stripped).
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (line, None),
        };

        match (verb, rest) {
            ("sigil", None) => Ok(Command::ShowSigil),
            ("sigil", Some(phrase)) => Ok(Command::MakeSigil(phrase.to_string())),
            ("chant", rest) => Ok(Command::Chant(ChantSpec::parse(rest.unwrap_or(""))?)),
            ("geomantic", None) => Ok(Command::Geomantic),
            ("help", None) => Ok(Command::Help(None)),
            ("help", Some(topic)) => Ok(Command::Help(Some(topic.trim().to_string()))),
            ("end", None) => Ok(Command::End),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}
