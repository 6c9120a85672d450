use crate::SourcePosition;

/// Where a parse error occurred, in 1-based user-facing terms.
///
/// Most errors point at a token and carry both a line and a column. A few
/// paths (e.g. running out of input) only know the line; formatting treats
/// the missing column as 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum ErrorPosition {
    /// 1-based line and 1-based column.
    LineColumn(usize, usize),
    /// 1-based line, column unknown.
    LineOnly(usize),
}

impl ErrorPosition {
    /// Builds a position from a lexer-produced (0-based) [`SourcePosition`].
    pub fn from_source_position(position: SourcePosition) -> Self {
        ErrorPosition::LineColumn(position.line() + 1, position.col() + 1)
    }

    /// Returns the 1-based line.
    pub fn line(&self) -> usize {
        match self {
            ErrorPosition::LineColumn(line, _) | ErrorPosition::LineOnly(line) => *line,
        }
    }

    /// Returns the 1-based column, or 0 when the column is unknown.
    pub fn column(&self) -> usize {
        match self {
            ErrorPosition::LineColumn(_, column) => *column,
            ErrorPosition::LineOnly(_) => 0,
        }
    }
}

/// A grammar violation, with a position and a human-readable message.
///
/// The message is assembled by concatenating the parser's diagnostic
/// fragments without added separators, so fragments carry their own spacing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message} (line {}, column {})", position.line(), position.column())]
pub struct ParseError {
    message: String,
    position: ErrorPosition,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: ErrorPosition) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Builds the message by concatenating `fragments` in order, with no
    /// separators added between them.
    pub fn from_fragments<I, S>(fragments: I, position: ErrorPosition) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut message = String::new();
        for fragment in fragments {
            message.push_str(fragment.as_ref());
        }
        Self { message, position }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> ErrorPosition {
        self.position
    }
}
