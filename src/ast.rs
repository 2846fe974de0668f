/*!

The expression tree shared by the parser, the reduction engine, and the printer.

An [`Expr`] is a small, immutable-shape AST: an identifier, an integer constant, a
single-parameter abstraction, an application, or a binary primitive operation. Every
subtree is owned outright by its parent (`Box`); duplicating a subtree for substitution
is just `Clone`, and there is no explicit destructor — drop glue frees children
recursively the moment the last owner goes out of scope.

*/

use std::fmt;

/// The binary primitive operators the machine knows how to apply to two constants.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PrimOp {
  Add,
  Subtract,
  Multiply,
  Divide,
  Equal,
}

impl PrimOp {
  /// The operator's conventional surface-syntax spelling, used by both the parser and
  /// the printer so that printed output re-parses unchanged.
  pub fn symbol(self) -> &'static str {
    match self {
      PrimOp::Add => "+",
      PrimOp::Subtract => "-",
      PrimOp::Multiply => "*",
      PrimOp::Divide => "/",
      PrimOp::Equal => "=",
    }
  }

  pub fn from_symbol(symbol: &str) -> Option<PrimOp> {
    match symbol {
      "+" => Some(PrimOp::Add),
      "-" => Some(PrimOp::Subtract),
      "*" => Some(PrimOp::Multiply),
      "/" => Some(PrimOp::Divide),
      "=" => Some(PrimOp::Equal),
      _ => None,
    }
  }
}

impl fmt::Display for PrimOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

/// A node in the lambda-calculus expression tree.
///
/// Invariant: the `param` of an `Abs` is always a plain name, never itself a compound
/// expression — it is stored as a bare `String` rather than a boxed `Expr::Id` for that
/// reason, which also sidesteps a whole class of "what if the parser hands us a
/// non-`Id` first child" bugs that the original's untyped `TreeNode` had to guard against.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
  Id(String),
  Const(i64),
  Abs { param: String, body: Box<Expr> },
  App { fun: Box<Expr>, arg: Box<Expr> },
  Prim { op: PrimOp, left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
  pub fn id(name: impl Into<String>) -> Expr {
    Expr::Id(name.into())
  }

  pub fn constant(value: i64) -> Expr {
    Expr::Const(value)
  }

  pub fn abs(param: impl Into<String>, body: Expr) -> Expr {
    Expr::Abs { param: param.into(), body: Box::new(body) }
  }

  pub fn app(fun: Expr, arg: Expr) -> Expr {
    Expr::App { fun: Box::new(fun), arg: Box::new(arg) }
  }

  pub fn prim(op: PrimOp, left: Expr, right: Expr) -> Expr {
    Expr::Prim { op, left: Box::new(left), right: Box::new(right) }
  }

  /// Deep-duplicates the expression. A thin, documenting wrapper around `Clone` so call
  /// sites that are conceptually "duplicating a subtree for substitution" (per the
  /// spec's component A) read that way, matching the original's explicit `duplicateTree`.
  pub fn duplicate(&self) -> Expr {
    self.clone()
  }

  /// True for the machine's notion of a value: `Const` or `Abs`. A bare `Id` is never a
  /// machine-level value — see the `Value` note in SPEC_FULL.md §3.
  pub fn is_value(&self) -> bool {
    matches!(self, Expr::Const(_) | Expr::Abs { .. })
  }
}
