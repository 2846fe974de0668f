//! Property-based tests for the free-variable and substitution laws from SPEC_FULL.md
//! §8, exercised against small, randomly generated `Expr` trees rather than the six
//! literal worked examples `tests/scenarios.rs` covers.

use lambda_cek::ast::{Expr, PrimOp};
use lambda_cek::free_vars::{free_vars, union};
use lambda_cek::subst::subst;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
  prop_oneof![Just("a".to_string()), Just("b".to_string()), Just("c".to_string())]
}

fn op_strategy() -> impl Strategy<Value = PrimOp> {
  prop_oneof![
    Just(PrimOp::Add),
    Just(PrimOp::Subtract),
    Just(PrimOp::Multiply),
    Just(PrimOp::Equal),
  ]
}

/// A small recursive `Expr` generator, bounded in both depth and branching so that shrunk
/// counterexamples stay readable. Identifiers are drawn from a three-name pool so that
/// capture actually has a chance to occur between generated subtrees.
fn expr_strategy() -> impl Strategy<Value = Expr> {
  let leaf = prop_oneof![
    name_strategy().prop_map(Expr::id),
    any::<i8>().prop_map(|n| Expr::constant(n as i64)),
  ];

  leaf.prop_recursive(4, 32, 4, move |inner| {
    prop_oneof![
      (name_strategy(), inner.clone()).prop_map(|(param, body)| Expr::abs(param, body)),
      (inner.clone(), inner.clone()).prop_map(|(f, a)| Expr::app(f, a)),
      (op_strategy(), inner.clone(), inner).prop_map(|(op, l, r)| Expr::prim(op, l, r)),
    ]
  })
}

proptest! {
  /// FV(Abs x b) = FV(b) \ {x}
  #[test]
  fn free_variable_law_for_abstraction(param in name_strategy(), body in expr_strategy()) {
    let lhs = free_vars(&Expr::abs(param.clone(), body.clone()));
    let mut rhs = free_vars(&body);
    rhs.shift_remove(&param);
    prop_assert_eq!(lhs, rhs);
  }

  /// FV(App f a) = FV(f) ∪ FV(a)
  #[test]
  fn free_variable_law_for_application(f in expr_strategy(), a in expr_strategy()) {
    let lhs = free_vars(&Expr::app(f.clone(), a.clone()));
    let rhs = union(&free_vars(&f), &free_vars(&a));
    prop_assert_eq!(lhs, rhs);
  }

  /// A bound abstraction parameter never escapes into its own free-variable set.
  #[test]
  fn bound_parameter_is_never_free(param in name_strategy(), body in expr_strategy()) {
    let abstraction = Expr::abs(param.clone(), body);
    prop_assert!(!free_vars(&abstraction).contains(&param));
  }

  /// Substitution identity: if x ∉ FV(e), subst(e, x, v) is structurally equal to e.
  #[test]
  fn substitution_identity_when_name_not_free(
    e in expr_strategy(),
    v in expr_strategy(),
  ) {
    // "d" never appears in the three-name pool generated expressions draw from, so it
    // is guaranteed absent from FV(e).
    prop_assert!(!free_vars(&e).contains("d"));
    let result = subst(&e, "d", &v);
    prop_assert_eq!(result, e);
  }

  /// Capture avoidance: substituting `v` for `x` never lets a name free in `v` be
  /// captured by a binder inside `e` — the substituted occurrences of that name in the
  /// result must still be free, not shadowed by a surviving binder of the same name.
  #[test]
  fn capture_avoidance_preserves_free_variables_of_the_replacement(
    body in expr_strategy(),
  ) {
    // e = (lambda b body), x = "a", v = Id("b") -- "b" is both v's only free variable
    // and e's bound parameter, the textbook capture setup.
    let e = Expr::abs("b", Expr::app(Expr::id("a"), body));
    let v = Expr::id("b");
    let result = subst(&e, "a", &v);

    // The law from SPEC_FULL.md §8: FV(subst(e,x,v)) ⊆ (FV(e) \ {x}) ∪ FV(v), and in
    // particular "b" (free in v) must appear in the result's free variables -- it must
    // not have been silently captured by e's own "b" binder.
    prop_assert!(free_vars(&result).contains("b"));
  }
}
