use crate::ast::{
    Assign, BinOp, BinaryOperator, Block, Compound, Declaration, Expr, Num, ProcedureDecl,
    Program, Statement, TypeSpec, UnaryOp, UnaryOperator, Var, VarDecl,
};
use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Token, TokenKind};
use crate::runtime::value::Number;
use crate::utils::config::parser::MAX_NESTING_DEPTH;
use crate::utils::config::symbols::{INTEGER_TYPE, REAL_TYPE};
use crate::utils::errors::{SpiError, SpiResult};

/// Recursive-descent parser with one token of lookahead. The first token
/// that does not fit the grammar aborts the parse.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    line_number: usize,
    // Recursion depth of the rule being parsed.
    depth: usize,
    // Height of the expression tree most recently built.
    height: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> SpiResult<Self> {
        let current_token = lexer.next_token()?;
        let line_number = lexer.line();
        Ok(Self {
            lexer,
            current_token,
            line_number,
            depth: 0,
            height: 0,
        })
    }

    /// Parses a whole program and requires the input to end right after the
    /// final `.`.
    pub fn parse(&mut self) -> SpiResult<Program> {
        let program = self.program()?;
        if self.current_token != Token::Eof {
            return Err(SpiError::UnexpectedToken {
                token: self.current_token.to_string(),
                line: self.line_number,
            });
        }
        Ok(program)
    }

    fn advance(&mut self) -> SpiResult<Token> {
        let next = self.lexer.next_token()?;
        self.line_number = self.lexer.line();
        Ok(std::mem::replace(&mut self.current_token, next))
    }

    /// Consumes the current token if it has the expected kind and hands it
    /// back, so callers can take its payload.
    fn expect(&mut self, expected: TokenKind) -> SpiResult<Token> {
        if self.current_token.kind() != expected {
            return Err(SpiError::syntax_error(
                expected.to_string(),
                self.current_token.to_string(),
                self.line_number,
            ));
        }
        self.advance()
    }

    /// Runs one nested rule one level deeper, failing once the nesting limit
    /// is passed instead of recursing further.
    fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> SpiResult<T>) -> SpiResult<T> {
        self.depth += 1;
        self.within_limit(self.depth)?;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn within_limit(&self, depth: usize) -> SpiResult<()> {
        if depth > MAX_NESTING_DEPTH {
            return Err(SpiError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                line: self.line_number,
            });
        }
        Ok(())
    }

    fn expect_ident(&mut self) -> SpiResult<String> {
        match self.expect(TokenKind::Id)? {
            Token::Id(name) => Ok(name),
            other => Err(SpiError::syntax_error("ID", other.to_string(), self.line_number)),
        }
    }

    // program : PROGRAM variable SEMI block DOT
    fn program(&mut self) -> SpiResult<Program> {
        self.expect(TokenKind::Program)?;
        let name = self.variable()?;
        self.expect(TokenKind::Semi)?;
        let block = self.block()?;
        self.expect(TokenKind::Dot)?;
        Ok(Program::new(name, block))
    }

    // block : declarations compound_statement
    fn block(&mut self) -> SpiResult<Block> {
        let declarations = self.declarations()?;
        let compound_statement = self.compound_statement()?;
        Ok(Block::new(declarations, compound_statement))
    }

    /**
     * declarations : (VAR (var_decl SEMI)+)? (PROCEDURE ID SEMI block SEMI)*
     */
    fn declarations(&mut self) -> SpiResult<Vec<Declaration>> {
        let mut declarations = Vec::new();

        if self.current_token == Token::Var {
            self.expect(TokenKind::Var)?;
            // At least one var_decl must follow VAR.
            loop {
                let decls = self.variable_declaration()?;
                declarations.extend(decls.into_iter().map(Declaration::Var));
                self.expect(TokenKind::Semi)?;
                if self.current_token.kind() != TokenKind::Id {
                    break;
                }
            }
        }

        while self.current_token == Token::Procedure {
            declarations.push(Declaration::Procedure(self.procedure_declaration()?));
        }

        Ok(declarations)
    }

    // var_decl : ID (COMMA ID)* COLON type_spec
    fn variable_declaration(&mut self) -> SpiResult<Vec<VarDecl>> {
        let mut names = vec![self.expect_ident()?];
        while self.current_token == Token::Comma {
            self.expect(TokenKind::Comma)?;
            names.push(self.expect_ident()?);
        }
        self.expect(TokenKind::Colon)?;
        let type_node = self.type_spec()?;

        Ok(names
            .into_iter()
            .map(|name| VarDecl::new(Var::new(name), type_node.clone()))
            .collect())
    }

    // PROCEDURE ID SEMI block SEMI
    fn procedure_declaration(&mut self) -> SpiResult<ProcedureDecl> {
        self.expect(TokenKind::Procedure)?;
        let proc_name = self.expect_ident()?;
        self.expect(TokenKind::Semi)?;
        let block = self.nested(Self::block)?;
        self.expect(TokenKind::Semi)?;
        Ok(ProcedureDecl::new(proc_name, block))
    }

    // type_spec : INTEGER | REAL
    fn type_spec(&mut self) -> SpiResult<TypeSpec> {
        match self.current_token {
            Token::Integer => {
                self.expect(TokenKind::Integer)?;
                Ok(TypeSpec::new(INTEGER_TYPE))
            }
            Token::Real => {
                self.expect(TokenKind::Real)?;
                Ok(TypeSpec::new(REAL_TYPE))
            }
            _ => Err(SpiError::syntax_error(
                "INTEGER or REAL",
                self.current_token.to_string(),
                self.line_number,
            )),
        }
    }

    // compound_statement : BEGIN statement_list END
    fn compound_statement(&mut self) -> SpiResult<Compound> {
        self.expect(TokenKind::Begin)?;
        let children = self.statement_list()?;
        self.expect(TokenKind::End)?;
        Ok(Compound::new(children))
    }

    // statement_list : statement (SEMI statement)*
    fn statement_list(&mut self) -> SpiResult<Vec<Statement>> {
        let mut statements = vec![self.statement()?];
        while self.current_token == Token::Semi {
            self.expect(TokenKind::Semi)?;
            statements.push(self.statement()?);
        }
        // Two statements with no separator between them.
        if self.current_token.kind() == TokenKind::Id {
            return Err(SpiError::UnexpectedToken {
                token: self.current_token.to_string(),
                line: self.line_number,
            });
        }
        Ok(statements)
    }

    // statement : compound_statement | assignment_statement | empty
    fn statement(&mut self) -> SpiResult<Statement> {
        match self.current_token.kind() {
            TokenKind::Begin => Ok(Statement::Compound(
                self.nested(Self::compound_statement)?,
            )),
            TokenKind::Id => Ok(Statement::Assign(self.assignment_statement()?)),
            _ => Ok(Statement::NoOp),
        }
    }

    // assignment_statement : variable ASSIGN expr
    fn assignment_statement(&mut self) -> SpiResult<Assign> {
        let target = self.variable()?;
        self.expect(TokenKind::Assign)?;
        let expr = self.expr()?;
        Ok(Assign::new(target, expr))
    }

    // variable : ID
    fn variable(&mut self) -> SpiResult<Var> {
        Ok(Var::new(self.expect_ident()?))
    }

    // expr : term ((PLUS | MINUS) term)*
    fn expr(&mut self) -> SpiResult<Expr> {
        let mut node = self.term()?;
        while matches!(self.current_token, Token::Plus | Token::Minus) {
            node = self.fold_binary(node, Self::term)?;
        }
        Ok(node)
    }

    // term : factor ((MUL | INTEGER_DIV | FLOAT_DIV) factor)*
    fn term(&mut self) -> SpiResult<Expr> {
        let mut node = self.factor()?;
        while matches!(
            self.current_token,
            Token::Mul | Token::IntegerDiv | Token::FloatDiv
        ) {
            node = self.fold_binary(node, Self::factor)?;
        }
        Ok(node)
    }

    // Consumes the operator at the cursor and its right operand, keeping
    // everything parsed so far on the left. A long chain of operators makes a
    // tall left spine, so the result's height counts against the nesting limit.
    fn fold_binary(
        &mut self,
        left: Expr,
        operand: fn(&mut Self) -> SpiResult<Expr>,
    ) -> SpiResult<Expr> {
        let left_height = self.height;
        let token = self.advance()?;
        let op = BinaryOperator::from_token(&token).ok_or_else(|| {
            SpiError::syntax_error("binary operator", token.to_string(), self.line_number)
        })?;
        let right = operand(self)?;
        self.height = left_height.max(self.height) + 1;
        self.within_limit(self.height)?;
        Ok(Expr::BinOp(BinOp::new(left, op, right)))
    }

    /**
     * factor : (PLUS | MINUS) factor
     *        | INTEGER_CONST
     *        | REAL_CONST
     *        | LPAREN expr RPAREN
     *        | variable
     */
    fn factor(&mut self) -> SpiResult<Expr> {
        match self.current_token {
            Token::Plus => {
                self.expect(TokenKind::Plus)?;
                let operand = self.nested(Self::factor)?;
                self.height += 1;
                Ok(Expr::UnaryOp(UnaryOp::new(UnaryOperator::Plus, operand)))
            }
            Token::Minus => {
                self.expect(TokenKind::Minus)?;
                let operand = self.nested(Self::factor)?;
                self.height += 1;
                Ok(Expr::UnaryOp(UnaryOp::new(UnaryOperator::Minus, operand)))
            }
            Token::IntegerConst(value) => {
                self.expect(TokenKind::IntegerConst)?;
                self.height = 1;
                Ok(Expr::Num(Num::new(Number::Integer(value))))
            }
            Token::RealConst(value) => {
                self.expect(TokenKind::RealConst)?;
                self.height = 1;
                Ok(Expr::Num(Num::new(Number::Real(value))))
            }
            Token::LParen => {
                self.expect(TokenKind::LParen)?;
                let node = self.nested(Self::expr)?;
                self.expect(TokenKind::RParen)?;
                Ok(node)
            }
            _ => {
                let var = self.variable()?;
                self.height = 1;
                Ok(Expr::Var(var))
            }
        }
    }
}
