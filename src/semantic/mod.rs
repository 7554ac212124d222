pub mod builder;
pub mod symboltable;

pub use builder::SymbolTableBuilder;
pub use symboltable::{Symbol, SymbolTable, SymbolType};
