/*!

The two function registries the machine consults when an identifier cannot be resolved
from the environment: **built-ins**, which synthesise a fresh expression tree directly,
and **standard-library** definitions, which are lambda-calculus source text re-parsed on
demand. Both are read-only and baked into the binary; neither is mutable at runtime.

The standard-library source strings are carried over verbatim from the evaluator this
crate's reduction engine is modeled on, underscore-for-underscore, so that `Y`'s printed
form and its number of reduction steps match exactly.

*/

use crate::ast::{Expr, PrimOp};
use crate::error::{Error, Result};
use crate::parser;

/// A built-in: a name paired with a function that synthesises a fresh tree on every
/// call. Built-ins never go through the parser.
pub struct BuiltinEntry {
  pub name: &'static str,
  expand: fn() -> Expr,
}

impl BuiltinEntry {
  pub fn expand(&self) -> Expr {
    (self.expand)()
  }
}

/// A standard-library entry: a name paired with lambda-calculus source text, re-parsed
/// fresh on every call.
pub struct StandardEntry {
  pub name: &'static str,
  pub source_text: &'static str,
}

impl StandardEntry {
  pub fn expand(&self) -> Result<Expr> {
    parser::parse(self.source_text)
  }
}

fn church_true() -> Expr {
  Expr::abs("x", Expr::abs("y", Expr::id("x")))
}

fn church_false() -> Expr {
  Expr::abs("x", Expr::abs("y", Expr::id("y")))
}

/// `λx.λy.λf. f x y` — a Church pair, consumed by `fst`/`snd` below.
fn church_pair() -> Expr {
  Expr::abs(
    "x",
    Expr::abs("y", Expr::abs("f", Expr::app(Expr::app(Expr::id("f"), Expr::id("x")), Expr::id("y")))),
  )
}

/// `λp. p true` — selects the first component of a pair built by [`church_pair`].
fn church_fst() -> Expr {
  Expr::abs("p", Expr::app(Expr::id("p"), church_true()))
}

/// `λp. p false` — selects the second component of a pair built by [`church_pair`].
fn church_snd() -> Expr {
  Expr::abs("p", Expr::app(Expr::id("p"), church_false()))
}

/// `λf.λx. x` — the Church numeral zero.
fn church_zero() -> Expr {
  Expr::abs("f", Expr::abs("x", Expr::id("x")))
}

/// `λn.λf.λx. f (n f x)` — the Church successor function.
fn church_succ() -> Expr {
  Expr::abs(
    "n",
    Expr::abs(
      "f",
      Expr::abs(
        "x",
        Expr::app(Expr::id("f"), Expr::app(Expr::app(Expr::id("n"), Expr::id("f")), Expr::id("x"))),
      ),
    ),
  )
}

/// The built-in registry: Church-style encodings synthesized fresh on every call.
/// Integer arithmetic itself is not a built-in expansion — it is the machine's `Prim`
/// node, handled directly by [`eval_prim`]; these are the higher-order encodings the
/// standard-library definitions below (`not`, `or`, `and`) are written against.
const BUILTINS: &[BuiltinEntry] = &[
  BuiltinEntry { name: "true", expand: church_true },
  BuiltinEntry { name: "false", expand: church_false },
  BuiltinEntry { name: "pair", expand: church_pair },
  BuiltinEntry { name: "fst", expand: church_fst },
  BuiltinEntry { name: "snd", expand: church_snd },
  BuiltinEntry { name: "zero", expand: church_zero },
  BuiltinEntry { name: "succ", expand: church_succ },
];

/// The standard-library registry. Source text is verbatim from the lambda calculus this
/// machine was modeled on — the same four entries, in the same order, as `stdlib.c`'s
/// `standardFunctions` table.
const STANDARDS: &[StandardEntry] = &[
  StandardEntry {
    name: "Y",
    source_text: "(lambda f (lambda a (lambda x f (lambda g (x x ) g)) (lambda x f (lambda g (x x) g)) a))",
  },
  StandardEntry {
    name: "not",
    source_text: "(lambda p (lambda x (lambda y p y x)))",
  },
  StandardEntry {
    name: "or",
    source_text: "(lambda p (lambda q p p q))",
  },
  StandardEntry {
    name: "and",
    source_text: "(lambda p (lambda q p q p))",
  },
];

pub fn builtins() -> &'static [BuiltinEntry] {
  BUILTINS
}

pub fn standards() -> &'static [StandardEntry] {
  STANDARDS
}

pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinEntry> {
  BUILTINS.iter().find(|entry| entry.name == name)
}

pub fn lookup_standard(name: &str) -> Option<&'static StandardEntry> {
  STANDARDS.iter().find(|entry| entry.name == name)
}

/// Tries the built-in registry, then the standard-library registry, returning a freshly
/// expanded tree either way. `Ok(None)` means neither registry knows `name`.
pub fn resolve_function(name: &str) -> Result<Option<Expr>> {
  if let Some(entry) = lookup_builtin(name) {
    return Ok(Some(entry.expand()));
  }
  if let Some(entry) = lookup_standard(name) {
    return Ok(Some(entry.expand()?));
  }
  Ok(None)
}

/// Applies a binary primitive to two already-reduced constants.
pub fn eval_prim(op: PrimOp, left: i64, right: i64) -> Result<i64> {
  match op {
    PrimOp::Add => Ok(left + right),
    PrimOp::Subtract => Ok(left - right),
    PrimOp::Multiply => Ok(left * right),
    PrimOp::Divide => left.checked_div(right).ok_or(Error::DivisionByZero),
    PrimOp::Equal => Ok(if left == right { 1 } else { 0 }),
  }
}
