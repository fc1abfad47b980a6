//! Binary Morse trie with a reverse-lookup index

use super::Node;
use crate::model::{Alphabet, Code, Signal};
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Output for a token that follows no inserted path
pub const UNKNOWN_MARKER: char = '?';

/// Output for a token that ends on a node without a symbol
pub const BLANK_MARKER: char = ' ';

/// Outcome of decoding a single token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The token is the code of this character
    Found(char),
    /// The token leaves the trie, or contains a non-signal character
    UnknownPath,
    /// The token is a prefix of other codes but not a code itself
    Incomplete,
}

impl Lookup {
    /// Render with the default sentinels
    pub fn to_char(self) -> char {
        self.to_char_with(UNKNOWN_MARKER, BLANK_MARKER)
    }

    /// Render with caller-chosen sentinels
    pub fn to_char_with(self, unknown: char, blank: char) -> char {
        match self {
            Lookup::Found(c) => c,
            Lookup::UnknownPath => unknown,
            Lookup::Incomplete => blank,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// A binary trie keyed by dot/dash signals
///
/// Dots descend left and dashes descend right. Every insertion also
/// records `character → code` so encoding never walks the tree.
///
/// Seed the trie completely before sharing it with readers; it has no
/// internal locking. See [`SharedTrie`](super::SharedTrie) for concurrent
/// insertion.
#[derive(Clone, Debug, Default)]
pub struct MorseTrie {
    root: Node,
    codes: HashMap<char, Code>,
}

impl MorseTrie {
    /// Create a trie holding only the blank root
    pub fn new() -> Self {
        MorseTrie {
            root: Node::sentinel(),
            codes: HashMap::new(),
        }
    }

    /// Create a trie seeded with every entry of `alphabet`, in order
    pub fn with_alphabet(alphabet: &Alphabet) -> Self {
        let mut trie = MorseTrie::new();
        for (symbol, code) in alphabet.iter() {
            trie.insert(symbol, code);
        }
        debug!(
            entries = alphabet.len(),
            height = trie.height(),
            "seeded morse trie"
        );
        trie
    }

    /// Create a trie seeded with the standard letters and digits
    pub fn standard() -> Self {
        MorseTrie::with_alphabet(&Alphabet::standard())
    }

    /// Associate `symbol` with `code`
    ///
    /// Missing nodes along the path are created blank. The symbol is
    /// stored uppercased and replaces whatever the node held before; the
    /// previous symbol is returned. An empty code sets the root's symbol.
    pub fn insert(&mut self, symbol: char, code: &Code) -> Option<char> {
        let symbol = normalize(symbol);

        let mut current = &mut self.root;
        for &signal in code {
            current = current.child_or_insert(signal);
        }
        let previous = current.set_symbol(symbol);

        self.codes.insert(symbol, code.clone());
        trace!(%symbol, %code, ?previous, "inserted code");
        previous
    }

    /// Parse an ASCII dot/dash string and insert it
    pub fn insert_str(&mut self, symbol: char, code: &str) -> Result<Option<char>> {
        let code = Code::parse(code)?;
        Ok(self.insert(symbol, &code))
    }

    /// Decode one dot/dash token
    pub fn decode_token(&self, token: &str) -> Lookup {
        let mut current = &self.root;
        for c in token.chars() {
            let next = Signal::from_char(c).and_then(|signal| current.child(signal));
            match next {
                Some(node) => current = node,
                None => return Lookup::UnknownPath,
            }
        }

        let lookup = match current.symbol() {
            Some(symbol) => Lookup::Found(symbol),
            None => Lookup::Incomplete,
        };
        trace!(token, ?lookup, "decoded token");
        lookup
    }

    /// Decode a whitespace-separated message
    ///
    /// Never fails: unknown tokens become `?` and tokens ending on a
    /// blank node become a space. Blank input decodes to an empty string.
    pub fn decode(&self, message: &str) -> String {
        self.decode_with(message, UNKNOWN_MARKER, BLANK_MARKER)
    }

    /// Decode with caller-chosen sentinel characters
    pub fn decode_with(&self, message: &str, unknown: char, blank: char) -> String {
        message
            .split_whitespace()
            .map(|token| self.decode_token(token).to_char_with(unknown, blank))
            .collect()
    }

    /// Decode a message, failing on the first token that is not a code
    pub fn decode_strict(&self, message: &str) -> Result<String> {
        message
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| match self.decode_token(token) {
                Lookup::Found(symbol) => Ok(symbol),
                Lookup::UnknownPath => Err(Error::UnknownPath {
                    token: token.to_string(),
                    position,
                }),
                Lookup::Incomplete => Err(Error::IncompleteCode {
                    token: token.to_string(),
                    position,
                }),
            })
            .collect()
    }

    /// Get the code recorded for a character (case-insensitive)
    pub fn lookup_code(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&normalize(symbol))
    }

    /// Get the stored character and its code
    ///
    /// The returned character is the key the trie actually holds, which is
    /// the uppercase form of `symbol` when that is a single character.
    pub fn lookup_entry(&self, symbol: char) -> Option<(char, &Code)> {
        self.codes
            .get_key_value(&normalize(symbol))
            .map(|(c, code)| (*c, code))
    }

    /// Get the code for a character as text, or `?` if it was never inserted
    pub fn code_for(&self, symbol: char) -> String {
        self.lookup_code(symbol)
            .map(Code::to_string)
            .unwrap_or_else(|| UNKNOWN_MARKER.to_string())
    }

    /// Encode text as space-separated codes, skipping whitespace
    pub fn encode(&self, text: &str) -> String {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| self.code_for(c))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Encode text, failing on the first character with no code
    pub fn encode_strict(&self, text: &str) -> Result<String> {
        let codes = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                self.lookup_code(c)
                    .map(Code::to_string)
                    .ok_or(Error::UnknownCharacter(c))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(codes.join(" "))
    }

    /// Pair every character of `text` with its code, `?` when unknown
    pub fn paths(&self, text: &str) -> Vec<(char, String)> {
        text.chars().map(|c| (c, self.code_for(c))).collect()
    }

    /// Number of edges on the longest root-to-node path
    ///
    /// Equals the length of the longest inserted code; a bare root is 0.
    pub fn height(&self) -> usize {
        self.levels() - 1
    }

    /// Number of node levels, root included (`height() + 1`)
    pub fn levels(&self) -> usize {
        self.root.height()
    }

    /// Read-only handle to the root for traversal
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Follow `code` from the root
    pub fn node_at(&self, code: &Code) -> Option<&Node> {
        code.into_iter()
            .try_fold(&self.root, |node, &signal| node.child(signal))
    }

    /// Number of characters with a recorded code
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All recorded (character, code) pairs in character order
    pub fn entries(&self) -> Vec<(char, &Code)> {
        let mut entries: Vec<_> = self.codes.iter().map(|(c, code)| (*c, code)).collect();
        entries.sort_by_key(|(c, _)| *c);
        entries
    }
}

/// Uppercase a character when it has a single-character uppercase form
fn normalize(symbol: char) -> char {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => symbol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hello() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.decode(".... . .-.. .-.. ---"), "HELLO");
    }

    #[test]
    fn test_decode_single_letters() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.decode(&trie.code_for('A')), "A");
        assert_eq!(trie.decode(&trie.code_for('E')), "E");
    }

    #[test]
    fn test_round_trip_standard_alphabet() {
        let trie = MorseTrie::standard();
        for (c, _) in Alphabet::standard().iter() {
            let decoded = trie.decode(&trie.code_for(c));
            let mut chars = decoded.chars();
            let back = chars.next().unwrap();
            assert!(chars.next().is_none());
            assert_eq!(back, c);
            assert_eq!(trie.code_for(back), trie.code_for(c));
        }
    }

    #[test]
    fn test_unknown_path_yields_marker() {
        let trie = MorseTrie::standard();
        let decoded = trie.decode("..--..");
        assert_eq!(decoded, "?");
        assert_eq!(trie.decode_token("..--.."), Lookup::UnknownPath);
    }

    #[test]
    fn test_non_signal_character_is_unknown_path() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.decode_token(".x"), Lookup::UnknownPath);
        assert_eq!(trie.decode(".- _ -"), "A?T");
    }

    #[test]
    fn test_incomplete_code_yields_blank() {
        let trie = MorseTrie::standard();
        // ..-- is a branching point on the way to 2 (..---)
        assert_eq!(trie.decode_token("..--"), Lookup::Incomplete);
        assert_eq!(trie.decode(". ..-- ."), "E E");
    }

    #[test]
    fn test_blank_input_decodes_empty() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.decode(""), "");
        assert_eq!(trie.decode("   "), "");
        assert_eq!(trie.decode_strict(" \t ").unwrap(), "");
    }

    #[test]
    fn test_repeated_separators_collapse() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.decode("  ....   ..  "), "HI");
    }

    #[test]
    fn test_decode_strict_reports_position() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.decode_strict("-- --- .-. ... .").unwrap(), "MORSE");

        match trie.decode_strict(".- ..--.. -") {
            Err(Error::UnknownPath { token, position }) => {
                assert_eq!(token, "..--..");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        match trie.decode_strict(". . ..--") {
            Err(Error::IncompleteCode { token, position }) => {
                assert_eq!(token, "..--");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_with_custom_markers() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.decode_with(".- ..--.. ..--", '#', '_'), "A#_");
    }

    #[test]
    fn test_height_of_standard_alphabet() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.height(), 5);
        assert_eq!(trie.levels(), 6);
        assert_eq!(MorseTrie::new().height(), 0);
        assert_eq!(MorseTrie::new().levels(), 1);
    }

    #[test]
    fn test_code_for_is_case_insensitive() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.code_for('a'), trie.code_for('A'));
        assert_eq!(trie.code_for('a'), ".-");
        assert_eq!(trie.code_for('!'), "?");
        assert!(trie.lookup_code('!').is_none());
    }

    #[test]
    fn test_reinserting_character_replaces_code() {
        let mut trie = MorseTrie::new();
        trie.insert_str('A', ".-").unwrap();
        trie.insert_str('A', "...").unwrap();

        assert_eq!(trie.code_for('A'), "...");
        assert_eq!(trie.decode("..."), "A");
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_reinserting_path_overwrites_symbol() {
        let mut trie = MorseTrie::standard();
        let previous = trie.insert_str('X', ".-").unwrap();

        assert_eq!(previous, Some('A'));
        assert_eq!(trie.decode(".-"), "X");
        assert_eq!(trie.code_for('X'), ".-");
        // The reverse index is not invalidated by an overwrite.
        assert_eq!(trie.code_for('A'), ".-");
    }

    #[test]
    fn test_lowercase_insert_is_normalized() {
        let mut trie = MorseTrie::new();
        trie.insert_str('e', ".").unwrap();
        assert_eq!(trie.decode("."), "E");
        assert_eq!(trie.code_for('E'), ".");
    }

    #[test]
    fn test_empty_code_sets_root_symbol() {
        let mut trie = MorseTrie::new();
        assert_eq!(trie.insert('R', &Code::default()), None);
        assert_eq!(trie.root().symbol(), Some('R'));
        assert_eq!(trie.code_for('R'), "");
        assert_eq!(trie.height(), 0);
    }

    #[test]
    fn test_lookup_entry_returns_stored_key() {
        let mut trie = MorseTrie::standard();
        assert_eq!(
            trie.lookup_entry('q').map(|(c, code)| (c, code.to_string())),
            Some(('Q', "--.-".to_string()))
        );

        // No single-character uppercase form, so it is stored as given.
        trie.insert_str('ß', "...--..").unwrap();
        assert_eq!(trie.lookup_entry('ß').map(|(c, _)| c), Some('ß'));
        assert_eq!(trie.decode("...--.."), "ß");
        assert!(trie.lookup_entry('!').is_none());
    }

    #[test]
    fn test_very_long_code() {
        let mut trie = MorseTrie::standard();
        let code = ".".repeat(1_000_000);
        trie.insert_str('A', &code).unwrap();

        assert_eq!(trie.height(), 1_000_000);
        assert_eq!(trie.decode_token(&code), Lookup::Found('A'));
        assert_eq!(trie.code_for('A'), code);

        let copy = trie.clone();
        assert_eq!(copy.root(), trie.root());
        drop(copy);
        drop(trie);
    }

    #[test]
    fn test_insert_str_rejects_invalid_code() {
        let mut trie = MorseTrie::new();
        assert!(trie.insert_str('A', ".+").is_err());
        assert!(trie.is_empty());
        assert!(trie.root().is_leaf());
    }

    #[test]
    fn test_substitute_small_alphabet() {
        let alphabet = Alphabet::from_pairs(&[('E', "."), ('T', "-"), ('M', "--")]).unwrap();
        let trie = MorseTrie::with_alphabet(&alphabet);

        assert_eq!(trie.len(), 3);
        assert_eq!(trie.height(), 2);
        assert_eq!(trie.decode(". - -- .-"), "ETM?");
    }

    #[test]
    fn test_encode() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.encode("sos"), "... --- ...");
        assert_eq!(trie.encode("Hi 5"), ".... .. .....");
        assert_eq!(trie.encode("a!"), ".- ?");
        assert!(matches!(
            trie.encode_strict("a!"),
            Err(Error::UnknownCharacter('!'))
        ));
        assert_eq!(trie.decode(&trie.encode("hello world")), "HELLOWORLD");
    }

    #[test]
    fn test_paths() {
        let trie = MorseTrie::standard();
        let paths = trie.paths("E?");
        assert_eq!(
            paths,
            vec![('E', ".".to_string()), ('?', "?".to_string())]
        );
    }

    #[test]
    fn test_node_at_and_entries() {
        let trie = MorseTrie::standard();
        let code = Code::parse("-.-").unwrap();
        assert_eq!(trie.node_at(&code).and_then(Node::symbol), Some('K'));
        assert!(trie.node_at(&Code::parse("------").unwrap()).is_none());

        let entries = trie.entries();
        assert_eq!(entries.len(), 36);
        assert_eq!(entries.first().map(|(c, _)| *c), Some('0'));
        assert_eq!(entries.last().map(|(c, _)| *c), Some('Z'));
    }

    #[test]
    fn test_first_three_levels_are_letters() {
        let trie = MorseTrie::standard();
        assert_eq!(trie.decode(". - .. .- -. --"), "ETIANM");
        assert_eq!(trie.decode("... ..- .-. .-- -.. -.- --. ---"), "SURWDKGO");
    }
}
