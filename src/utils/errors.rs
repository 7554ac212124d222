use std::io;
use thiserror::Error;

/// Broad category of a [`SpiError`], one per pipeline failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Lexical,
    Syntax,
    UndefinedName,
    Semantic,
    Arithmetic,
}

#[derive(Debug, Error)]
pub enum SpiError {
    // File and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("File read error: {0}")]
    FileReadError(String),

    // Lexical analysis errors
    #[error("Lexical error at line {line}: unknown character '{character}'")]
    UnknownCharacter { character: char, line: usize },
    #[error("Lexical error at line {line}: unterminated comment")]
    UnterminatedComment { line: usize },
    #[error("Lexical error at line {line}: invalid number '{number}'")]
    InvalidNumber { number: String, line: usize },

    // Parsing errors
    #[error("Syntax error at line {line}: expected '{expected}', found '{found}'")]
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },
    #[error("Syntax error at line {line}: unexpected token '{token}'")]
    UnexpectedToken { token: String, line: usize },
    #[error("Syntax error at line {line}: nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize, line: usize },

    // Semantic analysis errors
    #[error("Undefined name '{name}'")]
    UndefinedSymbol { name: String },
    #[error("Unknown type '{name}'")]
    UnknownType { name: String },
    #[error("Duplicate identifier '{name}'")]
    DuplicateIdentifier { name: String },

    // Evaluation errors
    #[error("Variable '{name}' is read before it is assigned")]
    UnassignedVariable { name: String },
    #[error("Arithmetic error: division by zero")]
    DivisionByZero,
    #[error("Arithmetic error: integer overflow in {operation}")]
    IntegerOverflow { operation: String },
}

impl SpiError {
    /// Create a syntax error for a token mismatch
    pub fn syntax_error(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        SpiError::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    pub fn overflow(operation: impl Into<String>) -> Self {
        SpiError::IntegerOverflow {
            operation: operation.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SpiError::Io(_) | SpiError::FileReadError(_) => ErrorKind::Io,
            SpiError::UnknownCharacter { .. }
            | SpiError::UnterminatedComment { .. }
            | SpiError::InvalidNumber { .. } => ErrorKind::Lexical,
            SpiError::SyntaxError { .. }
            | SpiError::UnexpectedToken { .. }
            | SpiError::NestingTooDeep { .. } => ErrorKind::Syntax,
            SpiError::UndefinedSymbol { .. } | SpiError::UnassignedVariable { .. } => {
                ErrorKind::UndefinedName
            }
            SpiError::UnknownType { .. } | SpiError::DuplicateIdentifier { .. } => {
                ErrorKind::Semantic
            }
            SpiError::DivisionByZero | SpiError::IntegerOverflow { .. } => ErrorKind::Arithmetic,
        }
    }
}

// Type alias for Result with SpiError
pub type SpiResult<T> = Result<T, SpiError>;
