use std::{fs, path::Path};

pub mod ast;
pub mod frontend;
pub mod runtime;
pub mod semantic;
pub mod utils;

pub const VERSION: &str = "0.1.0";

use crate::ast::Program;
use crate::frontend::{Lexer, Parser};
use crate::runtime::{Environment, Interpreter, Number};
use crate::semantic::{SymbolTable, SymbolTableBuilder};
use crate::utils::errors::{SpiError, SpiResult};

/// Everything one successful run produces.
#[derive(Debug)]
pub struct RunOutcome {
    pub program: Program,
    pub symbols: SymbolTable,
    pub result: Option<Number>,
    pub environment: Environment,
}

pub fn read(filename: &Path) -> SpiResult<String> {
    if !filename.is_file() {
        return Err(SpiError::FileReadError(format!(
            "Input file does not exist: {}",
            filename.display()
        )));
    }
    Ok(fs::read_to_string(filename)?)
}

/// Lexes and parses `source` into a tree.
pub fn parse(source: &str) -> SpiResult<Program> {
    let mut parser = Parser::new(Lexer::new(source))?;
    parser.parse()
}

/// Full pipeline: parse, check declarations, then evaluate. Nothing is
/// evaluated unless the static check passes.
pub fn run(source: &str) -> SpiResult<RunOutcome> {
    let program = parse(source)?;
    let symbols = SymbolTableBuilder::new().build(&program)?;
    let mut interpreter = Interpreter::new();
    let result = interpreter.interpret(&program)?;
    Ok(RunOutcome {
        program,
        symbols,
        result,
        environment: interpreter.into_environment(),
    })
}
