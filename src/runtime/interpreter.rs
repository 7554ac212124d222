use crate::ast::{
    Assign, AstVisitor, BinOp, Block, Compound, Num, ProcedureDecl, Program, TypeSpec, UnaryOp,
    Var, VarDecl,
};
use crate::runtime::value::Number;
use crate::utils::errors::{SpiError, SpiResult};
use std::collections::BTreeMap;

/// Variable values of one run, ordered by name.
pub type Environment = BTreeMap<String, Number>;

/// Tree-walking evaluator. Each call to [`Interpreter::interpret`] starts
/// from an empty environment.
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
    last_value: Option<Number>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the program and returns the value of the last expression it
    /// evaluated at statement level, if any.
    pub fn interpret(&mut self, program: &Program) -> SpiResult<Option<Number>> {
        self.environment = Environment::new();
        self.last_value = None;
        program.accept(self)?;
        Ok(self.last_value)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn into_environment(self) -> Environment {
        self.environment
    }
}

impl AstVisitor for Interpreter {
    type Value = Number;

    fn visit_program(&mut self, program: &Program) -> SpiResult<()> {
        program.block.accept(self)
    }

    fn visit_block(&mut self, block: &Block) -> SpiResult<()> {
        for declaration in &block.declarations {
            declaration.accept(self)?;
        }
        block.compound_statement.accept(self)
    }

    fn visit_var_decl(&mut self, _decl: &VarDecl) -> SpiResult<()> {
        Ok(())
    }

    fn visit_type_spec(&mut self, _type_spec: &TypeSpec) -> SpiResult<()> {
        Ok(())
    }

    // Procedures are declared but there is no call statement, so a body
    // never runs.
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
        let value = assign.expr.accept(self)?;
        self.environment.insert(assign.target.name.clone(), value);
        self.last_value = Some(value);
        Ok(())
    }

    fn visit_no_op(&mut self) -> SpiResult<()> {
        Ok(())
    }

    fn visit_bin_op(&mut self, bin_op: &BinOp) -> SpiResult<Number> {
        let left = bin_op.left.accept(self)?;
        let right = bin_op.right.accept(self)?;
        left.apply_binary(bin_op.op, right)
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) -> SpiResult<Number> {
        let operand = unary_op.operand.accept(self)?;
        operand.apply_unary(unary_op.op)
    }

    fn visit_num(&mut self, num: &Num) -> SpiResult<Number> {
        Ok(num.value)
    }

    fn visit_var(&mut self, var: &Var) -> SpiResult<Number> {
        self.environment
            .get(&var.name)
            .copied()
            .ok_or_else(|| SpiError::UnassignedVariable {
                name: var.name.clone(),
            })
    }
}
