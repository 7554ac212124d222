use crate::ast::{
    Assign, AstVisitor, BinOp, Block, Compound, Num, ProcedureDecl, Program, TypeSpec, UnaryOp,
    Var, VarDecl,
};
use crate::semantic::symboltable::{Symbol, SymbolTable};
use crate::utils::errors::{SpiError, SpiResult};

/// Static pass: records every variable declaration and rejects references to
/// names that were never declared, whether or not that code would run.
///
/// Procedure declarations are accepted as they are; their blocks are not
/// walked.
#[derive(Default)]
pub struct SymbolTableBuilder {
    table: SymbolTable,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self, program: &Program) -> SpiResult<SymbolTable> {
        program.accept(&mut self)?;
        Ok(self.table)
    }
}

impl AstVisitor for SymbolTableBuilder {
    type Value = ();

    fn visit_program(&mut self, program: &Program) -> SpiResult<()> {
        program.block.accept(self)
    }

    fn visit_block(&mut self, block: &Block) -> SpiResult<()> {
        for declaration in &block.declarations {
            declaration.accept(self)?;
        }
        block.compound_statement.accept(self)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> SpiResult<()> {
        decl.type_node.accept(self)?;
        self.table
            .define(Symbol::variable(&decl.var_node.name, &decl.type_node.name))
    }

    fn visit_type_spec(&mut self, type_spec: &TypeSpec) -> SpiResult<()> {
        match self.table.lookup(&type_spec.name) {
            Some(symbol) if symbol.is_type() => Ok(()),
            _ => Err(SpiError::UnknownType {
                name: type_spec.name.clone(),
            }),
        }
    }

    fn visit_procedure_decl(&mut self, _decl: &ProcedureDecl) -> SpiResult<()> {
        Ok(())
    }

    fn visit_compound(&mut self, compound: &Compound) -> SpiResult<()> {
        for child in &compound.children {
            child.accept(self)?;
        }
        Ok(())
    }

    fn visit_assign(&mut self, assign: &Assign) -> SpiResult<()> {
        assign.target.accept(self)?;
        assign.expr.accept(self)
    }

    fn visit_no_op(&mut self) -> SpiResult<()> {
        Ok(())
    }

    fn visit_bin_op(&mut self, bin_op: &BinOp) -> SpiResult<()> {
        bin_op.left.accept(self)?;
        bin_op.right.accept(self)
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) -> SpiResult<()> {
        unary_op.operand.accept(self)
    }

    fn visit_num(&mut self, _num: &Num) -> SpiResult<()> {
        Ok(())
    }

    fn visit_var(&mut self, var: &Var) -> SpiResult<()> {
        match self.table.lookup(&var.name) {
            Some(symbol) if !symbol.is_type() => Ok(()),
            _ => Err(SpiError::UndefinedSymbol {
                name: var.name.clone(),
            }),
        }
    }
}
