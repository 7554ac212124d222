use crate::ast::AstVisitor;
use crate::runtime::value::Number;
use crate::utils::errors::SpiResult;

/// A numeric literal, integer or real.
#[derive(Debug, Clone, PartialEq)]
pub struct Num {
    pub value: Number,
}

impl Num {
    pub fn new(value: Number) -> Self {
        Self { value }
    }
}

/// A variable reference, either read in an expression or written by an
/// assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    pub name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> SpiResult<V::Value> {
        visitor.visit_var(self)
    }
}
