/*!

The REPL binary: reads one expression per line, evaluates it, and prints the result —
line for line the loop `original_source/main.c` runs, with `env_logger` wired in so
`RUST_LOG=debug` shows the machine's transitions.

*/

use std::io::{self, BufRead, Write};

use lambda_cek::config::Config;
use lambda_cek::{driver, parser, printer};

fn main() {
  env_logger::init();

  let config = Config::from_env();
  let stdin = io::stdin();
  let mut stdout = io::stdout();
  let mut lines = stdin.lock().lines();

  loop {
    print!("{}", config.prompt);
    if stdout.flush().is_err() {
      break;
    }

    let line = match lines.next() {
      Some(Ok(line)) => line,
      Some(Err(_)) | None => break, // EOF or a read error both end the session.
    };

    let truncated: String = line.chars().take(config.max_line_bytes).collect();
    let trimmed = truncated.trim();
    if trimmed.is_empty() {
      continue;
    }

    match parser::parse(trimmed).and_then(driver::evaluate) {
      Ok(result) => {
        println!("{}{}\n", config.result_prefix, printer::pretty(&result));
      }
      Err(error) => {
        eprintln!("Error: {}", error);
      }
    }
  }
}
