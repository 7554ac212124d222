// Lexer constants
pub mod lexer {
    use crate::frontend::token::Token;
    use lazy_static::lazy_static;
    use std::collections::HashMap;

    pub const COMMENT_OPEN: char = '{';
    pub const COMMENT_CLOSE: char = '}';

    lazy_static! {
        // Keys are upper case; the lexer folds a word before looking it up.
        pub static ref RESERVED_KEYWORDS: HashMap<&'static str, Token> = [
            ("PROGRAM", Token::Program),
            ("VAR", Token::Var),
            ("DIV", Token::IntegerDiv),
            ("INTEGER", Token::Integer),
            ("REAL", Token::Real),
            ("BEGIN", Token::Begin),
            ("END", Token::End),
            ("PROCEDURE", Token::Procedure),
        ]
        .into_iter()
        .collect();
    }
}

// Parser constants
pub mod parser {
    /// Deepest chain of nested parentheses, unary signs, BEGIN blocks,
    /// procedures and folded operators the parser accepts. Every tree pass
    /// recurses over the result, so this bounds their stack use too.
    pub const MAX_NESTING_DEPTH: usize = 200;
}

// Symbol table constants
pub mod symbols {
    pub const INTEGER_TYPE: &str = "INTEGER";
    pub const REAL_TYPE: &str = "REAL";
    pub const BUILTIN_TYPES: &[&str] = &[INTEGER_TYPE, REAL_TYPE];
}

// Command line driver constants
pub mod cli {
    pub const SOURCE_EXTENSION: &str = "pas";
    pub const REPL_PROMPT: &str = "spi> ";
}
