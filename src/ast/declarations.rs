use crate::ast::{AstVisitor, Block, Var};
use crate::utils::errors::SpiResult;

/// An entry of a block's declaration part, kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Var(VarDecl),
    Procedure(ProcedureDecl),
}

impl Declaration {
    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> SpiResult<()> {
        match self {
            Declaration::Var(decl) => visitor.visit_var_decl(decl),
            Declaration::Procedure(decl) => visitor.visit_procedure_decl(decl),
        }
    }
}

/// A single declared variable. `VAR a, b : INTEGER;` yields two of these.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub var_node: Var,
    pub type_node: TypeSpec,
}

impl VarDecl {
    pub fn new(var_node: Var, type_node: TypeSpec) -> Self {
        Self { var_node, type_node }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: String,
}

impl TypeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn accept<V: AstVisitor + ?Sized>(&self, visitor: &mut V) -> SpiResult<()> {
        visitor.visit_type_spec(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDecl {
    pub proc_name: String,
    pub block: Block,
}

impl ProcedureDecl {
    pub fn new(proc_name: impl Into<String>, block: Block) -> Self {
        Self {
            proc_name: proc_name.into(),
            block,
        }
    }
}
