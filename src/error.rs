/*!

The crate-wide error type. Every fallible operation in this crate returns
[`Result<T>`], an alias for `std::result::Result<T, Error>`, in keeping with the pack's
own style of propagating `Result`s with `?` rather than panicking (`ouros`, `jue_world`).

*/

use thiserror::Error;

/// Errors raised by the parser, the reduction engine, and the REPL.
///
/// `OutOfMemory` from the distilled specification's error list has no counterpart here:
/// stable Rust's global allocator aborts the process on allocation failure rather than
/// handing back a recoverable `Result`, so there is no path that could ever construct
/// such a variant (see DESIGN.md). `DivisionByZero` is the converse addition: integer
/// division is exposed as a primitive and stable Rust panics on `i64` division by zero,
/// so this variant is needed to keep that case a diagnostic rather than a crash.
#[derive(Error, Debug)]
pub enum Error {
  #[error("{0} is not a defined variable or function.")]
  UnboundIdentifier(String),

  #[error("cannot apply a constant to an argument.")]
  ApplyConstant,

  #[error("{0} is not a predefined function.")]
  UndefinedFunction(String),

  #[error("{0} can only be applied to constants.")]
  PrimitiveNonConstant(String),

  #[error("division by zero.")]
  DivisionByZero,

  #[error("internal error: malformed continuation.")]
  MalformedContinuation,

  #[error("variable {0} is not defined.")]
  UndefinedVariable(String),

  #[error("parse error: {0}")]
  Parse(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl Clone for Error {
  fn clone(&self) -> Error {
    match self {
      Error::UnboundIdentifier(name) => Error::UnboundIdentifier(name.clone()),
      Error::ApplyConstant => Error::ApplyConstant,
      Error::UndefinedFunction(name) => Error::UndefinedFunction(name.clone()),
      Error::PrimitiveNonConstant(op) => Error::PrimitiveNonConstant(op.clone()),
      Error::DivisionByZero => Error::DivisionByZero,
      Error::MalformedContinuation => Error::MalformedContinuation,
      Error::UndefinedVariable(name) => Error::UndefinedVariable(name.clone()),
      Error::Parse(message) => Error::Parse(message.clone()),
      Error::Io(io_error) => Error::Io(std::io::Error::new(io_error.kind(), io_error.to_string())),
    }
  }
}

/// The crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
