/// Collapses every run of whitespace
/// into a single space and trims both
/// ends.
pub fn remove_whitespace(
  input: &str
) -> String {
  let mut normalized =
    String::with_capacity(input.len());
  let mut pending_space = false;
  for ch in input.chars() {
    if ch.is_whitespace() {
      pending_space =
        !normalized.is_empty();
      continue;
    }
    if pending_space {
      normalized.push(' ');
      pending_space = false;
    }
    normalized.push(ch);
  }
  normalized
}

/// Rewrites `\r\n` and lone `\r` as
/// `\n`. Nothing else changes.
pub fn handle_line_feeds(
  input: &str
) -> String {
  let mut normalized =
    String::with_capacity(input.len());
  let mut chars =
    input.chars().peekable();
  while let Some(ch) = chars.next() {
    match ch {
      | '\r' => {
        if chars.peek() == Some(&'\n') {
          chars.next();
        }
        normalized.push('\n');
      }
      | other => normalized.push(other)
    }
  }
  normalized
}
