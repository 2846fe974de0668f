/*!

Pretty-printing: the inverse of [`crate::parser::parse`] closely enough that feeding a
printed answer back through the parser reproduces the same tree (mirrors the original's
`printExpression`).

*/

use crate::ast::Expr;

/// Renders `expr` in the surface syntax.
pub fn pretty(expr: &Expr) -> String {
  match expr {
    Expr::Id(name) => name.clone(),
    Expr::Const(value) => value.to_string(),
    Expr::Abs { param, body } => format!("(lambda {} {})", param, pretty(body)),
    Expr::App { fun, arg } => format!("{} {}", pretty(fun), pretty(arg)),
    Expr::Prim { op, left, right } => format!("({} {} {})", op, pretty(left), pretty(right)),
  }
}
