use crate::ast::{AstVisitor, Expr, Var};
use crate::utils::errors::SpiResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Compound(Compound),
    Assign(Assign),
    NoOp,
}

impl Statement {
    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> SpiResult<()> {
        match self {
            Statement::Compound(compound) => visitor.visit_compound(compound),
            Statement::Assign(assign) => visitor.visit_assign(assign),
            Statement::NoOp => visitor.visit_no_op(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    pub children: Vec<Statement>,
}

impl Compound {
    pub fn new(children: Vec<Statement>) -> Self {
        Self { children }
    }

    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> SpiResult<()> {
        visitor.visit_compound(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub target: Var,
    pub expr: Expr,
}

impl Assign {
    pub fn new(target: Var, expr: Expr) -> Self {
        Self { target, expr }
    }
}
