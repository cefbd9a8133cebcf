//! Comment stripping for enum macro bodies
//!
//! Turns the text between a macro's braces into one clause per physical line, with
//! `//`, `/* */` and preprocessor directive lines removed. Newlines are kept in every
//! state so that clause boundaries line up with the source.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
  Normal,
  LineComment,
  BlockComment,
  /// A `#` line; treated as a comment until end of line
  DirectiveComment,
}

/// Remove comments and directives, preserving every newline
pub fn strip_comments(body: &str) -> String {
  let mut out = String::with_capacity(body.len());
  let mut state = State::Normal;
  let mut chars = body.chars().peekable();

  while let Some(ch) = chars.next() {
    if ch == '\n' {
      if matches!(state, State::LineComment | State::DirectiveComment) {
        state = State::Normal;
      }
      out.push(ch);
      continue;
    }

    match state {
      State::Normal => match (ch, chars.peek()) {
        ('/', Some('/')) => {
          chars.next();
          state = State::LineComment;
        }
        ('/', Some('*')) => {
          chars.next();
          state = State::BlockComment;
        }
        ('#', _) => state = State::DirectiveComment,
        _ => out.push(ch),
      },
      State::BlockComment => {
        if ch == '*' && chars.peek() == Some(&'/') {
          chars.next();
          state = State::Normal;
        }
      }
      State::LineComment | State::DirectiveComment => {}
    }
  }

  out
}

/// Split a macro body into trimmed, non-empty clauses, one per physical line.
///
/// Several cases written on one line stay together in a single clause.
pub fn split_clauses(body: &str) -> Vec<String> {
  strip_comments(body)
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(String::from)
    .collect()
}
