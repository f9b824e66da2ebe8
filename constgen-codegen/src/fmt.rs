//! Canonical formatting pass applied to rendered output.
//!
//! The renderers already produce clean text, so canonicalization is normally
//! the identity. It still verifies that delimiters balance; if they do not,
//! the template produced syntactically broken output and the raw text is
//! handed back inside the error so the caller can decide whether to keep it.

use thiserror::Error;

/// Canonical formatting failed; `raw` carries the unformatted output.
#[derive(Debug, Error)]
#[error("formatting generated output failed: {reason}")]
pub struct FormatError {
    pub reason: String,
    /// The unformatted text, usable as a fallback.
    pub raw: String,
}

/// Canonicalize rendered source text.
///
/// Strips trailing whitespace from every line, collapses runs of blank lines
/// to a single blank line, and guarantees exactly one trailing newline.
/// Idempotent: canonical input passes through unchanged.
pub fn canonicalize(source: &str) -> Result<String, FormatError> {
    if let Err(reason) = check_balance(source) {
        return Err(FormatError {
            reason,
            raw: source.to_string(),
        });
    }

    let mut out = String::with_capacity(source.len());
    let mut blank_run = 0usize;
    for line in source.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    // Drop trailing blank lines, keeping the final newline.
    while out.ends_with("\n\n") {
        out.pop();
    }
    Ok(out)
}

/// Check that `(`, `[`, and `{` balance outside string literals and line
/// comments.
fn check_balance(source: &str) -> Result<(), String> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut in_comment = false;
    let mut last_slash = false;

    for (pos, c) in source.char_indices() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
            }
            continue;
        }
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '/' if last_slash => {
                in_comment = true;
                last_slash = false;
                continue;
            }
            '/' => {
                last_slash = true;
                continue;
            }
            _ => last_slash = false,
        }
        match c {
            '"' => in_string = true,
            '(' | '[' | '{' => stack.push((c, pos)),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some((open, _)) if open == expected => {}
                    _ => return Err(format!("unmatched '{}' at byte {}", c, pos)),
                }
            }
            _ => {}
        }
    }

    if in_string {
        return Err("unterminated string literal".to_string());
    }
    if let Some((open, pos)) = stack.pop() {
        return Err(format!("unclosed '{}' at byte {}", open, pos));
    }
    Ok(())
}
