// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type, the indentation stack it owns, and the program-level loop.
// It is `include!`'d into `crate::parser` to keep all parser methods in a single module.

/// One frame of the indentation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// A single-line function body: counts toward nesting depth, has no width.
    Inline,
    /// A multi-line block whose lines start with exactly this many `Tab` tokens.
    Indented(usize),
}

/// The currently open blocks, innermost last.
///
/// Depth always equals the number of function / if / else bodies the cursor is inside of; frames are pushed on block
/// entry and popped on block exit, never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndentStack {
    frames: Vec<Block>,
}

impl IndentStack {
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The innermost open block.
    pub fn top(&self) -> Option<Block> {
        self.frames.last().copied()
    }

    fn push(&mut self, block: Block) {
        self.frames.push(block);
    }

    fn pop(&mut self) -> Option<Block> {
        self.frames.pop()
    }
}

/// Maximum number of constructs (brackets, blocks, statements, operators) open inside each other.
///
/// Deeper input fails with [`ParseError::NestingTooDeep`] instead of exhausting the call stack.
pub const MAX_NESTING: usize = 128;

/// Parser state: a read-only token slice, one forward cursor, and the indentation stack.
///
/// ## Notes
/// - The parser fails on the first error. There is no recovery and no partial tree.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    indents: IndentStack,
    /// Constructs currently open, counted across every recursive dispatch.
    nesting: usize,
    /// Closing token of the innermost open bracketed form.
    closer: Option<TokenKind>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `flick_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            indents: IndentStack::default(),
            nesting: 0,
            closer: None,
        }
    }

    /// The indentation stack as it currently stands. Empty before and after a successful parse.
    pub fn indent_stack(&self) -> &IndentStack {
        &self.indents
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while self.pos < self.tokens.len() {
            body.extend(self.walk()?);
        }
        tracing::debug!(statements = body.len(), "parsed program");
        Ok(Program { body })
    }
}
