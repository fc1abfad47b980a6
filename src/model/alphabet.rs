//! The letter → code table a trie is seeded from

use super::{Code, Signal};
use crate::Result;
use serde::{Deserialize, Serialize};

/// International Morse code for the 26 Latin letters and 10 digits
const STANDARD: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
];

/// An immutable, ordered table of characters and their codes
///
/// Entries are inserted into a trie in table order, so a later entry
/// for the same character or the same code wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    entries: Vec<(char, Code)>,
}

impl Alphabet {
    /// The standard 36-symbol letter and digit table
    pub fn standard() -> Self {
        let entries = STANDARD
            .iter()
            .map(|&(c, code)| (c, code.chars().filter_map(Signal::from_char).collect()))
            .collect();
        Alphabet { entries }
    }

    /// Build an alphabet from ASCII dot/dash strings
    pub fn from_pairs(pairs: &[(char, &str)]) -> Result<Self> {
        let entries = pairs
            .iter()
            .map(|&(c, code)| Ok((c, Code::parse(code)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Alphabet { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.entries.iter().map(|(c, code)| (*c, code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest code in the table
    pub fn max_code_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<(char, Code)> for Alphabet {
    fn from_iter<I: IntoIterator<Item = (char, Code)>>(iter: I) -> Self {
        Alphabet {
            entries: iter.into_iter().collect(),
        }
    }
}
