//! SpiralLogic emoji bridge and interpreter (Rust rewrite).
//!
//! Two loosely coupled components:
//!
//! - [`compiler::EmojiCompiler`] — a stateless, table-driven translator that
//!   turns emoji sequences into ritual-syntax text.
//! - [`script::Interpreter`] — a line-oriented, best-effort executor for
//!   ritual-syntax text (generated or hand-written), holding a variable
//!   store and a consent map for the duration of one run.
//!
//! Control flow: emoji text → compiler → ritual text → interpreter →
//! printed output + final state.  The interpreter accepts hand-written
//! ritual text directly; the compiler's output is assumed, not verified,
//! to be well-formed.

pub mod cli;
pub mod compiler;
pub mod repl;
pub mod script;
pub mod spine;
pub mod templates;
