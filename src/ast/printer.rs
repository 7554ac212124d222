use crate::ast::{
    Assign, AstVisitor, BinOp, Block, Compound, Num, ProcedureDecl, Program, TypeSpec, UnaryOp,
    Var, VarDecl,
};
use crate::utils::errors::SpiResult;

const INDENT: &str = "  ";

/// Renders a tree as indented text. Binary and unary operations are fully
/// parenthesized so that grouping is visible.
#[derive(Default)]
pub struct AstPrinter {
    output: String,
    depth: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(mut self, program: &Program) -> SpiResult<String> {
        program.accept(&mut self)?;
        Ok(self.output)
    }

    fn line(&mut self, text: &str) {
        self.open_line(text);
        self.close_line("");
    }

    fn open_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
    }

    fn close_line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn nested<F>(&mut self, f: F) -> SpiResult<()>
    where
        F: FnOnce(&mut Self) -> SpiResult<()>,
    {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

impl AstVisitor for AstPrinter {
    type Value = String;

    fn visit_program(&mut self, program: &Program) -> SpiResult<()> {
        self.line(&format!("PROGRAM {}", program.name.name));
        self.nested(|printer| program.block.accept(printer))
    }

    fn visit_block(&mut self, block: &Block) -> SpiResult<()> {
        for declaration in &block.declarations {
            declaration.accept(self)?;
        }
        block.compound_statement.accept(self)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> SpiResult<()> {
        self.open_line(&format!("VAR {} : ", decl.var_node.name));
        decl.type_node.accept(self)
    }

    fn visit_type_spec(&mut self, type_spec: &TypeSpec) -> SpiResult<()> {
        self.close_line(&type_spec.name);
        Ok(())
    }

    fn visit_procedure_decl(&mut self, decl: &ProcedureDecl) -> SpiResult<()> {
        self.line(&format!("PROCEDURE {}", decl.proc_name));
        self.nested(|printer| decl.block.accept(printer))
    }

    fn visit_compound(&mut self, compound: &Compound) -> SpiResult<()> {
        self.line("BEGIN");
        self.nested(|printer| {
            for child in &compound.children {
                child.accept(printer)?;
            }
            Ok(())
        })?;
        self.line("END");
        Ok(())
    }

    fn visit_assign(&mut self, assign: &Assign) -> SpiResult<()> {
        let expr = assign.expr.accept(self)?;
        self.line(&format!("{} := {}", assign.target.name, expr));
        Ok(())
    }

    fn visit_no_op(&mut self) -> SpiResult<()> {
        Ok(())
    }

    fn visit_bin_op(&mut self, bin_op: &BinOp) -> SpiResult<String> {
        let left = bin_op.left.accept(self)?;
        let right = bin_op.right.accept(self)?;
        Ok(format!("({} {} {})", left, bin_op.op, right))
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) -> SpiResult<String> {
        let operand = unary_op.operand.accept(self)?;
        Ok(format!("({}{})", unary_op.op, operand))
    }

    fn visit_num(&mut self, num: &Num) -> SpiResult<String> {
        Ok(num.value.to_string())
    }

    fn visit_var(&mut self, var: &Var) -> SpiResult<String> {
        Ok(var.name.clone())
    }
}
