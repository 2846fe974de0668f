/*!

Environments: linked frames binding one name to one closure, with a parent pointer.

Each frame is reference-counted (`Rc`) so that many [`Closure`]s can share the same
frame chain — extending an environment never copies the parent chain, it just prepends
one new frame in front of it. A frame is dropped the moment its last `Rc` goes away;
because frames only ever point *toward* the root, never back toward a descendant, no
reference cycle is constructible and no arena or explicit teardown pass is needed (see
SPEC_FULL.md §5).

The memoizing lookup described in the spec (forcing a not-yet-reduced standard-library
binding on first use) requires running the CEK machine, which in turn depends on this
module — to avoid a circular module dependency, [`find_frame`] only walks the chain and
returns the raw frame; [`crate::machine::resolve_identifier`] layers the forcing logic
on top, exactly as the original kept `lookupVariable`'s memoization in `eval.c` rather
than in the environment module.

*/

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Expr;

/// An expression paired with the environment under which its free variables are to be
/// interpreted. A closure owns its expression; the environment handle is shared.
#[derive(Clone, Debug)]
pub struct Closure {
  pub expr: Expr,
  pub env: Env,
}

impl Closure {
  pub fn new(expr: Expr, env: Env) -> Closure {
    Closure { expr, env }
  }

  /// A closure with no captured environment — used for already-reduced values, which
  /// have no free variables left to resolve.
  pub fn reduced(expr: Expr) -> Closure {
    Closure { expr, env: None }
  }

  /// Whether this closure has already been reduced to a value with nothing left to
  /// force: exactly the condition the memoizing lookup in [`crate::machine`] checks.
  /// A value never needs forcing regardless of what its `env` happens to be (an `Abs`
  /// produced mid-reduction still carries its capturing environment even though it is
  /// already in normal form); a non-value always does, even in the degenerate case
  /// where its captured `env` happens to be `None`.
  pub fn is_forced(&self) -> bool {
    self.expr.is_value()
  }
}

/// One binding frame in an environment chain. `None` represents the empty environment
/// (no bindings at all — distinct from the *global* environment, which is a long chain
/// of frames built from the two function registries).
pub type Env = Option<Rc<EnvFrame>>;

#[derive(Debug)]
pub struct EnvFrame {
  pub name: String,
  pub closure: RefCell<Closure>,
  pub parent: Env,
}

/// Pushes one new binding frame onto `env`, returning the extended chain. Does not
/// mutate `env` itself — existing closures that captured it keep seeing the shorter
/// chain, exactly as required for lexical scoping.
pub fn extend(env: &Env, name: impl Into<String>, closure: Closure) -> Env {
  Some(Rc::new(EnvFrame {
    name: name.into(),
    closure: RefCell::new(closure),
    parent: env.clone(),
  }))
}

/// Walks the chain from `env` toward the root looking for `name`, returning the frame
/// that binds it (without forcing it). Returns `None` if no frame in the chain binds
/// `name`.
pub fn find_frame(env: &Env, name: &str) -> Option<Rc<EnvFrame>> {
  let mut current = env.clone();
  while let Some(frame) = current {
    if frame.name == name {
      return Some(frame);
    }
    current = frame.parent.clone();
  }
  None
}
