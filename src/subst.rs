/*!

Capture-avoiding substitution and alpha conversion over [`Expr`](crate::ast::Expr).

Where the original mutated tree nodes in place (nulling out a detached child slot to
hand it to a new owner), this port builds fresh trees at every step: `subst` and `alpha`
each return a new `Expr` rather than rewriting their argument. This trades a few more
allocations for eliminating an entire class of double-free/use-after-free bugs, which is
exactly the tradeoff the original authors flagged as worth making (SPEC_FULL.md §9,
"Mutable expression trees during reduction").

*/

use crate::ast::Expr;
use crate::free_vars::free_vars;

/// Picks a fresh name for `param` that does not collide with `param` itself or with any
/// name free in `body`, by repeatedly appending `_` (matching the original's
/// `strcat(name, "_")` loop exactly, for deterministic, reader-friendly names), then
/// returns the renamed `(param, body)` pair.
pub fn alpha(param: &str, body: &Expr) -> (String, Expr) {
  let free_in_body = free_vars(body);
  let mut candidate = param.to_string();
  loop {
    candidate.push('_');
    if candidate != param && !free_in_body.contains(&candidate) {
      break;
    }
  }
  let renamed_body = subst(body, param, &Expr::Id(candidate.clone()));
  (candidate, renamed_body)
}

/// Computes `expr[name := replacement]`, avoiding variable capture by alpha-converting
/// any abstraction whose parameter would otherwise capture a name free in
/// `replacement`.
pub fn subst(expr: &Expr, name: &str, replacement: &Expr) -> Expr {
  match expr {
    Expr::Id(y) => {
      if y == name {
        replacement.duplicate()
      } else {
        expr.clone()
      }
    }

    Expr::Const(_) => expr.clone(),

    Expr::Abs { param, body } => {
      if param == name {
        // `name` is shadowed by this abstraction's own parameter; nothing under it
        // can be `name` in the sense that matters, so it is returned unchanged.
        expr.clone()
      } else {
        // Loop, not a single attempt: each alpha-conversion only avoids collision
        // with the *current* body's free variables, so a freshly picked name can
        // still turn out to be free in `replacement` itself (e.g. renaming `y` to
        // `y_` when `y_` is what we're about to substitute in). Re-check against
        // `FV(replacement)` after every rename, matching `eval.c`'s
        // `while(contains(FV(sub),parname))`.
        let free_in_replacement = free_vars(replacement);
        let mut current_param = param.clone();
        let mut current_body = (**body).clone();
        while free_in_replacement.contains(&current_param) {
          let (new_param, new_body) = alpha(&current_param, &current_body);
          current_param = new_param;
          current_body = new_body;
        }
        Expr::Abs {
          param: current_param,
          body: Box::new(subst(&current_body, name, replacement)),
        }
      }
    }

    Expr::App { fun, arg } => Expr::App {
      fun: Box::new(subst(fun, name, replacement)),
      arg: Box::new(subst(arg, name, replacement)),
    },

    Expr::Prim { op, left, right } => Expr::Prim {
      op: *op,
      left: Box::new(subst(left, name, replacement)),
      right: Box::new(subst(right, name, replacement)),
    },
  }
}
