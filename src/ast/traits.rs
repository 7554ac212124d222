use crate::ast::{
    Assign, BinOp, Block, Compound, Num, ProcedureDecl, Program, TypeSpec, UnaryOp, Var, VarDecl,
};
use crate::utils::errors::SpiResult;

/// One method per node kind. Nodes dispatch to these through their `accept`
/// methods with an exhaustive match, so a new node kind must be handled by
/// every pass before the crate builds again.
pub trait AstVisitor {
    /// What evaluating an expression node yields for this pass.
    type Value;

    fn visit_program(&mut self, program: &Program) -> SpiResult<()>;
    fn visit_block(&mut self, block: &Block) -> SpiResult<()>;
    fn visit_var_decl(&mut self, decl: &VarDecl) -> SpiResult<()>;
    fn visit_type_spec(&mut self, type_spec: &TypeSpec) -> SpiResult<()>;
    fn visit_procedure_decl(&mut self, decl: &ProcedureDecl) -> SpiResult<()>;
    fn visit_compound(&mut self, compound: &Compound) -> SpiResult<()>;
    fn visit_assign(&mut self, assign: &Assign) -> SpiResult<()>;
    fn visit_no_op(&mut self) -> SpiResult<()>;
    fn visit_bin_op(&mut self, bin_op: &BinOp) -> SpiResult<Self::Value>;
    fn visit_unary_op(&mut self, unary_op: &UnaryOp) -> SpiResult<Self::Value>;
    fn visit_num(&mut self, num: &Num) -> SpiResult<Self::Value>;
    fn visit_var(&mut self, var: &Var) -> SpiResult<Self::Value>;
}
