/*!

A hand-rolled tokenizer and recursive-descent parser for the surface syntax, a fully
parenthesized, s-expression-flavored notation matching `original_source`'s `yacc` grammar
(see SPEC_FULL.md §6):

```text
atom        := identifier | integer | '(' expr ')'
application := atom atom*
abstraction := '(' "lambda" identifier expr ')'
primitive   := '(' op expr expr ')'
expr        := abstraction | primitive | application
```

Application is left-associative and effectively curries: `f a b c` parses as
`((f a) b) c`.

*/

use crate::ast::{Expr, PrimOp};
use crate::error::{Error, Result};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
  LParen,
  RParen,
  Lambda,
  Op(PrimOp),
  Identifier(String),
  Integer(i64),
}

fn tokenize(source: &str) -> Result<Vec<Token>> {
  let mut tokens = Vec::new();
  let mut chars = source.chars().peekable();

  while let Some(&c) = chars.peek() {
    match c {
      c if c.is_whitespace() => {
        chars.next();
      }
      '(' => {
        chars.next();
        tokens.push(Token::LParen);
      }
      ')' => {
        chars.next();
        tokens.push(Token::RParen);
      }
      '+' | '-' | '*' | '/' | '=' => {
        chars.next();
        // A leading '-' immediately followed by a digit is a negative integer literal,
        // not the subtraction operator, so that `-3` round-trips through the printer.
        if c == '-' && chars.peek().map_or(false, |next| next.is_ascii_digit()) {
          let mut text = String::from("-");
          while let Some(&d) = chars.peek() {
            if d.is_ascii_digit() {
              text.push(d);
              chars.next();
            } else {
              break;
            }
          }
          let value = text.parse::<i64>().map_err(|e| Error::Parse(e.to_string()))?;
          tokens.push(Token::Integer(value));
        } else {
          let op = PrimOp::from_symbol(&c.to_string())
            .expect("the match arm above only admits primitive-operator characters");
          tokens.push(Token::Op(op));
        }
      }
      c if c.is_ascii_digit() => {
        let mut text = String::new();
        while let Some(&d) = chars.peek() {
          if d.is_ascii_digit() {
            text.push(d);
            chars.next();
          } else {
            break;
          }
        }
        let value = text.parse::<i64>().map_err(|e| Error::Parse(e.to_string()))?;
        tokens.push(Token::Integer(value));
      }
      c if is_identifier_start(c) => {
        let mut text = String::new();
        while let Some(&d) = chars.peek() {
          if is_identifier_char(d) {
            text.push(d);
            chars.next();
          } else {
            break;
          }
        }
        if text == "lambda" {
          tokens.push(Token::Lambda);
        } else {
          tokens.push(Token::Identifier(text));
        }
      }
      other => return Err(Error::Parse(format!("unexpected character '{}'", other))),
    }
  }

  Ok(tokens)
}

fn is_identifier_start(c: char) -> bool {
  c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
  c.is_alphanumeric() || c == '_'
}

struct Parser {
  tokens: Vec<Token>,
  position: usize,
}

impl Parser {
  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.position)
  }

  fn advance(&mut self) -> Option<Token> {
    let token = self.tokens.get(self.position).cloned();
    self.position += 1;
    token
  }

  fn expect(&mut self, expected: &Token) -> Result<()> {
    match self.advance() {
      Some(ref token) if token == expected => Ok(()),
      Some(other) => Err(Error::Parse(format!("expected {:?}, found {:?}", expected, other))),
      None => Err(Error::Parse(format!("expected {:?}, found end of input", expected))),
    }
  }

  fn expect_identifier(&mut self) -> Result<String> {
    match self.advance() {
      Some(Token::Identifier(name)) => Ok(name),
      Some(other) => Err(Error::Parse(format!("expected an identifier, found {:?}", other))),
      None => Err(Error::Parse("expected an identifier, found end of input".to_string())),
    }
  }

  /// `expr := application`, where application parses one or more atoms and folds them
  /// left-associatively; a parenthesized abstraction or primitive is itself just an atom,
  /// so `(lambda x x) 1` and `(+ 1 2) 3` both fall out of this one rule.
  fn parse_expr(&mut self) -> Result<Expr> {
    let mut expr = self.parse_atom()?;
    while self.starts_atom() {
      let arg = self.parse_atom()?;
      expr = Expr::app(expr, arg);
    }
    Ok(expr)
  }

  fn starts_atom(&self) -> bool {
    matches!(self.peek(), Some(Token::LParen) | Some(Token::Identifier(_)) | Some(Token::Integer(_)))
  }

  fn parse_atom(&mut self) -> Result<Expr> {
    match self.peek() {
      Some(Token::Identifier(_)) => {
        let name = self.expect_identifier()?;
        Ok(Expr::id(name))
      }
      Some(Token::Integer(value)) => {
        let value = *value;
        self.advance();
        Ok(Expr::constant(value))
      }
      Some(Token::LParen) => self.parse_parenthesized(),
      Some(other) => Err(Error::Parse(format!("unexpected token {:?}", other))),
      None => Err(Error::Parse("unexpected end of input".to_string())),
    }
  }

  fn parse_parenthesized(&mut self) -> Result<Expr> {
    self.expect(&Token::LParen)?;
    let expr = match self.peek() {
      Some(Token::Lambda) => {
        self.advance();
        let param = self.expect_identifier()?;
        let body = self.parse_expr()?;
        Expr::abs(param, body)
      }
      Some(Token::Op(op)) => {
        let op = *op;
        self.advance();
        let left = self.parse_expr()?;
        let right = self.parse_expr()?;
        Expr::prim(op, left, right)
      }
      _ => self.parse_expr()?,
    };
    self.expect(&Token::RParen)?;
    Ok(expr)
  }
}

/// Parses one complete expression from `source`. Trailing whitespace after the
/// expression is permitted; trailing non-whitespace is a parse error.
pub fn parse(source: &str) -> Result<Expr> {
  let tokens = tokenize(source)?;
  let mut parser = Parser { tokens, position: 0 };
  let expr = parser.parse_expr()?;
  if parser.position != parser.tokens.len() {
    return Err(Error::Parse(format!(
      "unexpected trailing input starting at token {:?}",
      parser.tokens[parser.position]
    )));
  }
  Ok(expr)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ast::PrimOp;

  #[test]
  fn parses_a_bare_identifier() {
    assert_eq!(parse("x").unwrap(), Expr::id("x"));
  }

  #[test]
  fn parses_a_bare_integer() {
    assert_eq!(parse("42").unwrap(), Expr::constant(42));
  }

  #[test]
  fn parses_a_negative_integer() {
    assert_eq!(parse("-7").unwrap(), Expr::constant(-7));
  }

  #[test]
  fn parses_an_abstraction() {
    assert_eq!(parse("(lambda x x)").unwrap(), Expr::abs("x", Expr::id("x")));
  }

  #[test]
  fn parses_a_primitive() {
    assert_eq!(
      parse("(+ 1 2)").unwrap(),
      Expr::prim(PrimOp::Add, Expr::constant(1), Expr::constant(2))
    );
  }

  #[test]
  fn parses_left_associative_application() {
    // ((lambda x (lambda y x)) 1 2) -> App(App(Abs, 1), 2)
    assert_eq!(
      parse("((lambda x (lambda y x)) 1 2)").unwrap(),
      Expr::app(
        Expr::app(Expr::abs("x", Expr::abs("y", Expr::id("x"))), Expr::constant(1)),
        Expr::constant(2)
      )
    );
  }

  #[test]
  fn parses_nested_application_without_outer_parens() {
    assert_eq!(
      parse("foo 1").unwrap(),
      Expr::app(Expr::id("foo"), Expr::constant(1))
    );
  }

  #[test]
  fn rejects_unbalanced_parens() {
    assert!(parse("(lambda x x").is_err());
  }

  #[test]
  fn rejects_trailing_garbage() {
    assert!(parse("1 )").is_err());
  }

  #[test]
  fn parses_the_y_combinator_source_text() {
    let source = "(lambda f (lambda a (lambda x f (lambda g (x x ) g)) (lambda x f (lambda g (x x) g)) a))";
    assert!(parse(source).is_ok());
  }
}
