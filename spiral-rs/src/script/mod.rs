//! Ritual-syntax execution.
//!
//! A deliberately small, line-oriented interpreter tier: no lexer, no AST,
//! no block nesting.  Each non-blank, non-comment line is matched against an
//! ordered list of statement shapes and executed against an in-memory
//! variable/consent state.  A fuller structural interpreter is a separate
//! component; this one exists so generated and hand-written rituals can run
//! standalone.
//!
//! # Quick start
//!
//! ```rust
//! use spiral::script::Interpreter;
//!
//! let mut interp = Interpreter::new();
//! let outcome = interp.run("output.print(\"Hello\")");
//! assert!(outcome.success);
//! assert_eq!(outcome.output, vec!["Hello"]);
//! ```

pub mod expand;
pub mod interp;

// Re-exports for convenience.
pub use interp::{Interpreter, PromptFn, RunOutcome};
