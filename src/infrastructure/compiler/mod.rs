//! Style Compiler Implementations

mod grass;

pub use self::grass::GrassCompiler;
