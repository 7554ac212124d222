pub mod interpreter;
pub mod value;

pub use interpreter::{Environment, Interpreter};
pub use value::Number;
