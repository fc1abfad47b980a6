//! Dot/dash signals and the codes built from them

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One element of a Morse code
///
/// A dot selects the left child of a trie node, a dash the right one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Dot,
    Dash,
}

impl Signal {
    pub const DOT_CHAR: char = '.';
    pub const DASH_CHAR: char = '-';

    /// Parse a single ASCII signal character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::DOT_CHAR => Some(Signal::Dot),
            Self::DASH_CHAR => Some(Signal::Dash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Signal::Dot => Self::DOT_CHAR,
            Signal::Dash => Self::DASH_CHAR,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered sequence of signals encoding one character
///
/// Displays and parses as the usual ASCII form, e.g. `.-` for `A`.
/// The empty code is permitted and addresses the trie root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(Vec<Signal>);

impl Code {
    /// Parse an ASCII dot/dash string
    pub fn parse(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| {
                Signal::from_char(c).ok_or_else(|| Error::InvalidSignal {
                    symbol: c,
                    code: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Code)
    }

    pub fn signals(&self) -> &[Signal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, signal: Signal) {
        self.0.push(signal);
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for signal in &self.0 {
            write!(f, "{}", signal)?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Code::parse(s)
    }
}

impl TryFrom<String> for Code {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Code::parse(&s)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl From<Vec<Signal>> for Code {
    fn from(signals: Vec<Signal>) -> Self {
        Code(signals)
    }
}

impl FromIterator<Signal> for Code {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        Code(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Code {
    type Item = &'a Signal;
    type IntoIter = std::slice::Iter<'a, Signal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
