//! A minimal tokenizer for the argument list of a single call expression.
//!
//! The historical converter protected array literals by masking their commas
//! with a sentinel character before splitting the whole line on commas, and
//! only the last bracketed span of a line was protected. This module replaces
//! that trick with genuine nesting-aware splitting: given the text following
//! a call's opening parenthesis, it tracks bracket/paren/brace depth and
//! string-literal state and splits only on commas that belong to the call
//! itself. Commas inside nested calls, array or object literals, and string
//! literals are never treated as argument separators.

/// The argument list of one call expression, as verbatim slices of the
/// scanned text, plus whatever followed the call's closing parenthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArgs<'a> {
    args: Vec<&'a str>,
    tail: &'a str,
}

impl<'a> CallArgs<'a> {
    /// The top-level argument slices, untrimmed.
    ///
    /// An empty argument list (`f()`) is reported as one empty slice, which
    /// mirrors how a split on commas behaves.
    #[must_use]
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    /// Text after the call's closing parenthesis (typically `;`).
    #[must_use]
    pub fn tail(&self) -> &'a str {
        self.tail
    }
}

/// Split `rest`, the text immediately following a call's opening
/// parenthesis, into its top-level arguments.
///
/// Returns `None` when no matching closing parenthesis is found before the
/// end of `rest` (a multiline call, or one the scanner cannot make sense
/// of); callers route such lines to the manual-placeholder policy.
#[must_use]
pub fn split_call_args(rest: &str) -> Option<CallArgs<'_>> {
    let bytes = rest.as_bytes();
    let mut args = Vec::new();
    let mut start = 0;
    let mut depth = 0u32;
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'\'' | b'"' | b'`' => quote = Some(b),
            b'(' | b'[' | b'{' => depth += 1,
            b')' if depth == 0 => {
                args.push(&rest[start..i]);
                return Some(CallArgs {
                    args,
                    tail: &rest[i + 1..],
                });
            }
            // Stray closers are tolerated; the scan is best-effort.
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                args.push(&rest[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    None
}
