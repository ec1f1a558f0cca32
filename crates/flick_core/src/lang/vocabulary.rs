use super::keywords::{self, KeywordId, KeywordInfo};
use super::symbols::{self, SymbolId, SymbolInfo};

/// The two reserved-word lookup tables the lexer consults.
///
/// Both tables are immutable `'static` registries; a `Vocabulary` is just a pair of borrowed slices, so it is
/// `Copy` and can be handed to any number of lexers.
///
/// ## Examples
/// ```rust
/// use flick_core::lang::Vocabulary;
/// use flick_core::lang::symbols::SymbolId;
///
/// let vocab = Vocabulary::STANDARD;
/// assert_eq!(vocab.symbol("|>"), Some(SymbolId::Cascade));
/// assert_eq!(vocab.symbol_pair('|', '>'), Some(SymbolId::Cascade));
/// assert!(vocab.symbol_char('|').is_some());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub symbols: &'static [SymbolInfo],
    pub keywords: &'static [KeywordInfo],
}

impl Vocabulary {
    /// The Flick vocabulary.
    pub const STANDARD: Vocabulary = Vocabulary {
        symbols: symbols::SYMBOLS,
        keywords: keywords::KEYWORDS,
    };

    /// Look up an exact spelling in the symbol table.
    pub fn symbol(&self, spelling: &str) -> Option<SymbolId> {
        self.symbols.iter().find(|s| s.spelling == spelling).map(|s| s.id)
    }

    /// Look up a single character in the symbol table.
    pub fn symbol_char(&self, c: char) -> Option<SymbolId> {
        let mut buf = [0u8; 4];
        self.symbol(c.encode_utf8(&mut buf))
    }

    /// Look up a two-character pair in the symbol table.
    pub fn symbol_pair(&self, first: char, second: char) -> Option<SymbolId> {
        self.symbols
            .iter()
            .find(|s| {
                let mut chars = s.spelling.chars();
                chars.next() == Some(first) && chars.next() == Some(second) && chars.next().is_none()
            })
            .map(|s| s.id)
    }

    /// Look up a word in the keyword table.
    pub fn keyword(&self, word: &str) -> Option<KeywordId> {
        self.keywords.iter().find(|k| k.spelling == word).map(|k| k.id)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::STANDARD
    }
}
