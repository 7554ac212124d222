use std::fmt;

/// Lexical category of a token, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Real,
    IntegerConst,
    RealConst,
    Plus,
    Minus,
    Mul,
    IntegerDiv,
    FloatDiv,
    LParen,
    RParen,
    Id,
    Assign,
    Begin,
    End,
    Semi,
    Dot,
    Program,
    Var,
    Colon,
    Comma,
    Procedure,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::IntegerConst => "INTEGER_CONST",
            TokenKind::RealConst => "REAL_CONST",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::IntegerDiv => "INTEGER_DIV",
            TokenKind::FloatDiv => "FLOAT_DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Id => "ID",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Semi => "SEMI",
            TokenKind::Dot => "DOT",
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A token with its lexical value. Literals and identifiers carry their
/// payload, every other token is fully described by its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Integer,
    Real,
    IntegerConst(i64),
    RealConst(f64),
    Plus,
    Minus,
    Mul,
    IntegerDiv,
    FloatDiv,
    LParen,
    RParen,
    Id(String),
    Assign,
    Begin,
    End,
    Semi,
    Dot,
    Program,
    Var,
    Colon,
    Comma,
    Procedure,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Integer => TokenKind::Integer,
            Token::Real => TokenKind::Real,
            Token::IntegerConst(_) => TokenKind::IntegerConst,
            Token::RealConst(_) => TokenKind::RealConst,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Mul => TokenKind::Mul,
            Token::IntegerDiv => TokenKind::IntegerDiv,
            Token::FloatDiv => TokenKind::FloatDiv,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Id(_) => TokenKind::Id,
            Token::Assign => TokenKind::Assign,
            Token::Begin => TokenKind::Begin,
            Token::End => TokenKind::End,
            Token::Semi => TokenKind::Semi,
            Token::Dot => TokenKind::Dot,
            Token::Program => TokenKind::Program,
            Token::Var => TokenKind::Var,
            Token::Colon => TokenKind::Colon,
            Token::Comma => TokenKind::Comma,
            Token::Procedure => TokenKind::Procedure,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// The lexeme this token stands for; `None` for EOF.
    pub fn lexeme(&self) -> Option<String> {
        let text = match self {
            Token::Integer => "INTEGER",
            Token::Real => "REAL",
            Token::IntegerConst(n) => return Some(n.to_string()),
            Token::RealConst(r) => return Some(format!("{:?}", r)),
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Mul => "*",
            Token::IntegerDiv => "DIV",
            Token::FloatDiv => "/",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Id(name) => return Some(name.clone()),
            Token::Assign => ":=",
            Token::Begin => "BEGIN",
            Token::End => "END",
            Token::Semi => ";",
            Token::Dot => ".",
            Token::Program => "PROGRAM",
            Token::Var => "VAR",
            Token::Colon => ":",
            Token::Comma => ",",
            Token::Procedure => "PROCEDURE",
            Token::Eof => return None,
        };
        Some(text.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(lexeme) => write!(f, "Token({}, {:?})", self.kind(), lexeme),
            None => write!(f, "Token({}, None)", self.kind()),
        }
    }
}
