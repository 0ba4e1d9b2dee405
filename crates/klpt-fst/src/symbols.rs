// Symbol table: string-to-id interning and id-to-string lookup.

use hashbrown::HashMap;

use crate::SymbolId;

/// Textual form of the epsilon symbol in AT&T files.
pub const EPSILON_SYMBOL: &str = "@0@";

/// Id of the epsilon symbol. Always the first entry of a [`SymbolTable`].
pub const EPSILON: SymbolId = 0;

/// Interned symbols of one automaton.
///
/// Symbols are opaque strings: single characters (`a`, `ê`), multi-character
/// tags (`<n>`, `<vblex>`) or any other token the file uses. Interning makes
/// value comparison an integer comparison. Index 0 is always epsilon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    /// Maps symbol id to its string form.
    symbol_strings: Vec<String>,
    /// Maps string form to symbol id.
    string_to_symbol: HashMap<String, SymbolId>,
}

impl SymbolTable {
    /// Create a table holding only the epsilon symbol.
    pub fn new() -> Self {
        let mut string_to_symbol = HashMap::new();
        string_to_symbol.insert(EPSILON_SYMBOL.to_string(), EPSILON);
        Self {
            symbol_strings: vec![EPSILON_SYMBOL.to_string()],
            string_to_symbol,
        }
    }

    /// Return the id of `symbol`, adding it to the table if it is new.
    pub fn intern(&mut self, symbol: &str) -> SymbolId {
        if let Some(&id) = self.string_to_symbol.get(symbol) {
            return id;
        }
        let id = self.symbol_strings.len() as SymbolId;
        self.symbol_strings.push(symbol.to_string());
        self.string_to_symbol.insert(symbol.to_string(), id);
        id
    }

    /// Look up the id of a known symbol.
    pub fn lookup(&self, symbol: &str) -> Option<SymbolId> {
        self.string_to_symbol.get(symbol).copied()
    }

    /// String form of a symbol id. Unknown ids resolve to the empty string.
    pub fn as_str(&self, id: SymbolId) -> &str {
        self.symbol_strings
            .get(id as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether `id` is the epsilon symbol.
    #[inline]
    pub fn is_epsilon(id: SymbolId) -> bool {
        id == EPSILON
    }

    /// Number of interned symbols, epsilon included.
    pub fn len(&self) -> usize {
        self.symbol_strings.len()
    }

    /// Always false: epsilon is present from construction.
    pub fn is_empty(&self) -> bool {
        self.symbol_strings.is_empty()
    }

    /// Iterate over `(id, string)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.symbol_strings
            .iter()
            .enumerate()
            .map(|(i, s)| (i as SymbolId, s.as_str()))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
