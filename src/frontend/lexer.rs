use crate::frontend::token::Token;
use crate::utils::config::lexer::{COMMENT_CLOSE, COMMENT_OPEN, RESERVED_KEYWORDS};
use crate::utils::errors::{SpiError, SpiResult};
use std::{iter::Peekable, str::Chars};

/// On-demand scanner: every call to [`Lexer::next_token`] reads just enough
/// characters to produce one token.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    /// Line of the next unread character, starting at 1.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token, or `Token::Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> SpiResult<Token> {
        self.skip_whitespace_and_comments()?;
        match self.chars.peek() {
            None => Ok(Token::Eof),
            Some(&ch) if ch.is_alphabetic() => Ok(self.scan_identifier()),
            Some(&ch) if ch.is_ascii_digit() => self.scan_number(),
            Some(&':') => Ok(self.scan_colon_or_assign()),
            Some(&ch) => self.scan_single_char_token(ch),
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> SpiResult<()> {
        loop {
            match self.chars.peek() {
                Some(&COMMENT_OPEN) => self.scan_comment()?,
                Some(&ch) if ch.is_whitespace() => self.scan_whitespace(),
                _ => break,
            }
        }
        Ok(())
    }

    fn scan_comment(&mut self) -> SpiResult<()> {
        self.chars.next(); // Consume '{'
        let start_line = self.line;
        while let Some(ch) = self.chars.next() {
            if ch == '\n' {
                self.line += 1;
            } else if ch == COMMENT_CLOSE {
                return Ok(());
            }
        }
        Err(SpiError::UnterminatedComment { line: start_line })
    }

    fn scan_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.chars.next();
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let mut identifier = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_alphanumeric() {
                break;
            }
            identifier.push(ch);
            self.chars.next();
        }
        self.keyword_or_identifier(identifier)
    }

    fn keyword_or_identifier(&self, identifier: String) -> Token {
        match RESERVED_KEYWORDS.get(identifier.to_uppercase().as_str()) {
            Some(keyword) => keyword.clone(),
            None => Token::Id(identifier),
        }
    }

    fn scan_digits(&mut self, into: &mut String) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            into.push(ch);
            self.chars.next();
        }
    }

    fn scan_number(&mut self) -> SpiResult<Token> {
        let mut number = String::new();
        self.scan_digits(&mut number);

        if self.chars.peek() != Some(&'.') {
            return number
                .parse::<i64>()
                .map(Token::IntegerConst)
                .map_err(|_| SpiError::InvalidNumber { number, line: self.line });
        }

        self.chars.next(); // Consume '.'
        number.push('.');
        let integral_len = number.len();
        self.scan_digits(&mut number);
        if number.len() == integral_len {
            number.push('0');
        }
        number
            .parse::<f64>()
            .map(Token::RealConst)
            .map_err(|_| SpiError::InvalidNumber { number, line: self.line })
    }

    fn scan_colon_or_assign(&mut self) -> Token {
        self.chars.next(); // Consume ':'
        if self.chars.peek() == Some(&'=') {
            self.chars.next(); // Consume '='
            Token::Assign
        } else {
            Token::Colon
        }
    }

    fn scan_single_char_token(&mut self, ch: char) -> SpiResult<Token> {
        let token = match ch {
            ';' => Token::Semi,
            '.' => Token::Dot,
            ',' => Token::Comma,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Mul,
            '/' => Token::FloatDiv,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Err(SpiError::UnknownCharacter { character: ch, line: self.line }),
        };
        self.chars.next();
        Ok(token)
    }
}

/// Scans the whole source eagerly. The returned vector always ends with
/// `Token::Eof`.
pub fn tokenize(source: &str) -> SpiResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
