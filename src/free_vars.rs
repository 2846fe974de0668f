/*!

Free-variable analysis. `FV(e)` is an insertion-ordered set of identifier names
occurring free in `e`, used by [`crate::subst`] to decide when alpha conversion is
necessary and by [`crate::driver`] to decide which names in a final answer still need
resolving against the environment.

Iteration order only affects the order error messages are reported in — never
semantics — but the original used a stable, insertion-ordered set for this, so this
port does too (`indexmap::IndexSet` rather than `std::collections::HashSet`).

*/

use indexmap::IndexSet;

use crate::ast::Expr;

/// An insertion-ordered set of free-variable names.
pub type FvSet = IndexSet<String>;

/// Computes the free variables of `expr`.
pub fn free_vars(expr: &Expr) -> FvSet {
  match expr {
    Expr::Id(name) => {
      let mut set = FvSet::new();
      set.insert(name.clone());
      set
    }

    Expr::Const(_) => FvSet::new(),

    Expr::Abs { param, body } => {
      let mut set = free_vars(body);
      set.shift_remove(param);
      set
    }

    Expr::App { fun, arg } => union(&free_vars(fun), &free_vars(arg)),

    Expr::Prim { left, right, .. } => union(&free_vars(left), &free_vars(right)),
  }
}

/// Unions two free-variable sets, preserving the insertion order of `a`'s elements
/// before `b`'s.
pub fn union(a: &FvSet, b: &FvSet) -> FvSet {
  let mut set = a.clone();
  for name in b {
    set.insert(name.clone());
  }
  set
}
