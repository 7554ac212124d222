/*
*                    spi -- simple Pascal interpreter.
*
* program      : PROGRAM variable SEMI block DOT
* block        : declarations compound_statement
* declarations : (VAR (var_decl SEMI)+)? (PROCEDURE ID SEMI block SEMI)*
* var_decl     : ID (COMMA ID)* COLON type_spec
* type_spec    : INTEGER | REAL
* compound     : BEGIN statement_list END
* stmt_list    : statement (SEMI statement)*
* statement    : compound | assignment | empty
* assignment   : variable ASSIGN expr
* expr         : term ((PLUS | MINUS) term)*
* term         : factor ((MUL | INTEGER_DIV | FLOAT_DIV) factor)*
* factor       : (PLUS | MINUS) factor | INTEGER_CONST | REAL_CONST
*              | LPAREN expr RPAREN | variable
* variable     : ID
*/

// Abstract Syntax Tree definitions.
// Every node is owned by exactly one parent and never mutated after parsing.

mod traits;
pub use traits::AstVisitor;

mod program;
mod block;
mod declarations;
mod statements;
mod expressions;
mod literals;
mod printer;

pub use program::Program;
pub use block::Block;
pub use declarations::{Declaration, ProcedureDecl, TypeSpec, VarDecl};
pub use statements::{Assign, Compound, Statement};
pub use expressions::{BinOp, BinaryOperator, Expr, UnaryOp, UnaryOperator};
pub use literals::{Num, Var};
pub use printer::AstPrinter;
