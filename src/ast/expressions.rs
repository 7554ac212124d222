use crate::ast::{AstVisitor, Num, Var};
use crate::frontend::token::Token;
use crate::utils::errors::SpiResult;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    BinOp(BinOp),
    UnaryOp(UnaryOp),
    Num(Num),
    Var(Var),
}

impl Expr {
    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> SpiResult<V::Value> {
        match self {
            Expr::BinOp(bin_op) => visitor.visit_bin_op(bin_op),
            Expr::UnaryOp(unary_op) => visitor.visit_unary_op(unary_op),
            Expr::Num(num) => visitor.visit_num(num),
            Expr::Var(var) => visitor.visit_var(var),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    IntegerDiv,
    FloatDiv,
}

impl BinaryOperator {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Minus => Some(BinaryOperator::Sub),
            Token::Mul => Some(BinaryOperator::Mul),
            Token::IntegerDiv => Some(BinaryOperator::IntegerDiv),
            Token::FloatDiv => Some(BinaryOperator::FloatDiv),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::IntegerDiv => "DIV",
            BinaryOperator::FloatDiv => "/",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Plus => f.write_str("+"),
            UnaryOperator::Minus => f.write_str("-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    pub left: Box<Expr>,
    pub op: BinaryOperator,
    pub right: Box<Expr>,
}

impl BinOp {
    pub fn new(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub operand: Box<Expr>,
}

impl UnaryOp {
    pub fn new(op: UnaryOperator, operand: Expr) -> Self {
        Self {
            op,
            operand: Box::new(operand),
        }
    }
}
