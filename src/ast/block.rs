use crate::ast::{AstVisitor, Compound, Declaration};
use crate::utils::errors::SpiResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub declarations: Vec<Declaration>,
    pub compound_statement: Compound,
}

impl Block {
    pub fn new(declarations: Vec<Declaration>, compound_statement: Compound) -> Self {
        Self {
            declarations,
            compound_statement,
        }
    }

    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> SpiResult<()> {
        visitor.visit_block(self)
    }
}
