/*!

The top-level driver: wires the function registries into a global environment, runs the
CEK machine to termination, then closes over any free variables left in the answer so
that printed output never contains a name the environment could have resolved.

*/

use log::info;

use crate::ast::Expr;
use crate::environment::{extend, Closure, Env};
use crate::error::{Error, Result};
use crate::free_vars::free_vars;
use crate::machine::{resolve_identifier, run, State};
use crate::registry;
use crate::subst::subst;

/// Folds the built-in registry, then the standard-library registry, into a chain of
/// environment frames, each holding an already-expanded, already-forced closure (its
/// `env` is `None`: a registry entry's expansion is always a value with nothing further
/// to reduce, so there is nothing left for the memoising lookup in
/// [`crate::machine::resolve_identifier`] to force).
pub fn build_global_environment() -> Result<Env> {
  let mut env: Env = None;

  for entry in registry::builtins() {
    env = extend(&env, entry.name, Closure::reduced(entry.expand()));
  }
  for entry in registry::standards() {
    env = extend(&env, entry.name, Closure::reduced(entry.expand()?));
  }

  Ok(env)
}

/// Runs `expr` to completion against a freshly built global environment, then resolves
/// any free variables left in the answer.
pub fn evaluate(expr: Expr) -> Result<Expr> {
  let env = build_global_environment()?;
  info!("evaluating against a global environment of {} registry entries", {
    registry::builtins().len() + registry::standards().len()
  });

  let result = run(State::new(Closure::new(expr, env)))?;
  resolve_free_variables(&result.expr, &result.env)
}

/// Recursively closes `expr` over `env`: every free variable that does not resolve
/// through a registry must resolve in `env`, recursively closed in turn, and is
/// substituted into the result. A name that resolves through neither is
/// [`Error::UndefinedVariable`].
pub fn resolve_free_variables(expr: &Expr, env: &Env) -> Result<Expr> {
  let mut result = expr.clone();

  for name in free_vars(expr) {
    if registry::resolve_function(&name)?.is_some() {
      // Registry-resolvable names are not considered free: they always resolve the
      // same way regardless of the current environment, so there is nothing to close
      // over.
      continue;
    }

    let closure = resolve_identifier(env, &name)?
      .ok_or_else(|| Error::UndefinedVariable(name.clone()))?;
    let closed = resolve_free_variables(&closure.expr, &closure.env)?;
    result = subst(&result, &name, &closed);
  }

  Ok(result)
}
