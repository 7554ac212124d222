use crate::utils::config::symbols::BUILTIN_TYPES;
use crate::utils::errors::{SpiError, SpiResult};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolType {
    BuiltinType,
    Variable { type_name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub symbol_type: SymbolType,
}

impl Symbol {
    pub fn builtin_type(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol_type: SymbolType::BuiltinType,
        }
    }

    pub fn variable(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol_type: SymbolType::Variable {
                type_name: type_name.into(),
            },
        }
    }

    pub fn is_type(&self) -> bool {
        self.symbol_type == SymbolType::BuiltinType
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol_type {
            SymbolType::BuiltinType => write!(f, "<BuiltinTypeSymbol(name='{}')>", self.name),
            SymbolType::Variable { type_name } => {
                write!(f, "<VarSymbol(name='{}', type='{}')>", self.name, type_name)
            }
        }
    }
}

/// Single program-wide scope. Symbols keep their definition order.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// A table holding only the built-in types.
    pub fn new() -> Self {
        let mut table = Self {
            symbols: Vec::new(),
            index: HashMap::new(),
        };
        for name in BUILTIN_TYPES {
            table.index.insert(name.to_string(), table.symbols.len());
            table.symbols.push(Symbol::builtin_type(*name));
        }
        table
    }

    pub fn define(&mut self, symbol: Symbol) -> SpiResult<()> {
        if self.index.contains_key(&symbol.name) {
            return Err(SpiError::DuplicateIdentifier { name: symbol.name });
        }
        self.index.insert(symbol.name.clone(), self.symbols.len());
        self.symbols.push(symbol);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&slot| &self.symbols[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    // Symbols in definition order, built-in types first.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:-<50}", "")?;
        writeln!(f, "| {:<15} | {:<12} | {:<13} |", "Name", "Kind", "Type")?;
        writeln!(f, "{:-<50}", "")?;
        for symbol in &self.symbols {
            match &symbol.symbol_type {
                SymbolType::BuiltinType => {
                    writeln!(f, "| {:<15} | {:<12} | {:<13} |", symbol.name, "type", "")?
                }
                SymbolType::Variable { type_name } => {
                    writeln!(f, "| {:<15} | {:<12} | {:<13} |", symbol.name, "variable", type_name)?
                }
            }
        }
        write!(f, "{:-<50}", "")
    }
}
