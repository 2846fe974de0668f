/*!

An interactive CEK-machine evaluator for the untyped lambda calculus with integer
constants and primitive arithmetic.

The crate is organized leaves-first, mirroring the component table this design is built
from: [`ast`] and [`free_vars`] have no internal dependencies; [`subst`] depends on
[`free_vars`]; [`environment`] depends only on [`ast`]; [`machine`] is the reduction
engine, depending on [`environment`] and [`registry`]; [`driver`] wires everything
together for one top-level evaluation; [`parser`] and [`printer`] are the external
surface syntax; [`config`] and [`error`] are ambient.

*/

pub mod ast;
pub mod config;
pub mod driver;
pub mod environment;
pub mod error;
pub mod free_vars;
pub mod machine;
pub mod parser;
pub mod printer;
pub mod registry;
pub mod subst;

pub use error::{Error, Result};
