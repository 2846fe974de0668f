/*!

REPL configuration. The spec exposes no command-line flags (§6: "no flags") and fixes
the line-length cap at 255 characters, so this is a plain set of constants gathered into
one small `Config` struct rather than scattered literals in `main` — there is no
environment-variable surface here; `RUST_LOG` is read indirectly by `env_logger::init()`
in `main`, not by this module.

*/

/// The REPL's tunables, fixed per the external interface contract (§6).
#[derive(Clone, Debug)]
pub struct Config {
  pub prompt: &'static str,
  pub result_prefix: &'static str,
  pub max_line_bytes: usize,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      prompt: "> ",
      result_prefix: "-> ",
      max_line_bytes: 255,
    }
  }
}

impl Config {
  /// Builds the REPL's configuration. There is nothing to read from the environment
  /// (see module docs above); this exists so `main` has one call site to make rather
  /// than reaching for `Config::default()` directly, matching the teacher's
  /// `Config::from_env`-style entry point.
  pub fn from_env() -> Config {
    Config::default()
  }
}
