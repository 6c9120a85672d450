/// Source position information, computed by the lexer as it scans input.
///
/// This is a pure data struct with no mutation methods.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col`: UTF-8 character count within the current line (0-based). This
///   increments by 1 per character regardless of byte representation, which
///   matches what most text editors display as "column".
/// - `byte_offset`: byte offset within the whole document (0-based)
///
/// Diagnostics presented to users are 1-based; the conversion happens at the
/// error-construction boundary, not here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// UTF-8 character count within current line (0-based)
    col: usize,

    /// Byte offset from start of document (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based UTF-8 character count within the current line.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
