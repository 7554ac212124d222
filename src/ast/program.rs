use crate::ast::{AstVisitor, Block, Var};
use crate::utils::errors::SpiResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: Var,
    pub block: Block,
}

impl Program {
    pub fn new(name: Var, block: Block) -> Self {
        Self { name, block }
    }

    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> SpiResult<()> {
        visitor.visit_program(self)
    }
}
