//! The per-line conversion pipeline: literal pass, grouping rewrite, and
//! the assertion rewrites.
//!
//! The pipeline is best-effort and silently degrading. An assertion whose
//! argument list has an unexpected shape is not reconstructed; the line is
//! kept and a visible placeholder marker is appended so a human finishes
//! the edit. Nothing here returns an error and nothing panics on arbitrary
//! input.

use std::sync::LazyLock;

use memchr::memmem::Finder;

use crate::core::{args::split_call_args, rules, split_eol, Style};

/// The expectation suffix substituted for both equality assertions.
const EQUAL_REPLACEMENT: &str = ".toEqual(";

const DEEP_EQUAL: &str = "assert.deepEqual(";
const STRICT_EQUAL: &str = "assert.strictEqual(";
const TRUTHY: &str = "assert.ok(";

static FIND_DEEP_EQUAL: LazyLock<Finder<'static>> = LazyLock::new(|| Finder::new(DEEP_EQUAL));
static FIND_STRICT_EQUAL: LazyLock<Finder<'static>> = LazyLock::new(|| Finder::new(STRICT_EQUAL));
static FIND_TRUTHY: LazyLock<Finder<'static>> = LazyLock::new(|| Finder::new(TRUTHY));

/// Outcome of converting a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    text: String,
    needs_review: bool,
}

impl LineResult {
    fn clean(text: String) -> Self {
        Self {
            text,
            needs_review: false,
        }
    }

    /// The converted line, terminator included when the input had one.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Whether a placeholder marker was emitted for this line.
    #[must_use]
    pub fn needs_review(&self) -> bool {
        self.needs_review
    }
}

/// Convert one line of a legacy test file.
///
/// Stages run in a fixed order and each operates on the output of the one
/// before it: the literal-substitution table, the grouping rewrite, the two
/// equality-assertion rewrites, and the truthiness rewrite. Lines matching
/// none of them come back unchanged apart from the literal pass.
#[must_use]
pub fn convert_line(line: &str, style: Style) -> LineResult {
    let line = rules::apply_literals(line);
    let line = rules::rewrite_group(&line);
    let result = rewrite_equality(&line, &FIND_DEEP_EQUAL, DEEP_EQUAL.len(), style);
    if result.needs_review {
        return result;
    }
    let result = rewrite_equality(&result.text, &FIND_STRICT_EQUAL, STRICT_EQUAL.len(), style);
    if result.needs_review {
        return result;
    }
    rewrite_truthy(&result.text, style)
}

/// Rewrite `assert.deepEqual(` / `assert.strictEqual(` into an
/// `expect(actual).toEqual(expected)` chain.
///
/// Two arguments mean no message; three mean a trailing message rendered
/// per [`Style`]; anything else (including a call the scanner cannot
/// terminate on this line) gets the placeholder treatment.
fn rewrite_equality(line: &str, finder: &Finder<'_>, token_len: usize, style: Style) -> LineResult {
    let (body, term) = split_eol(line);
    let Some(at) = finder.find(body.as_bytes()) else {
        return LineResult::clean(line.to_owned());
    };
    let prefix = &body[..at];
    let rest = &body[at + token_len..];

    let text = match split_call_args(rest) {
        Some(call) => match call.args() {
            [actual, expected] => format!(
                "{prefix}expect({actual}){EQUAL_REPLACEMENT}{}){}{term}",
                expected.trim(),
                call.tail(),
            ),
            [actual, expected, message] => match style {
                Style::Positional => format!(
                    "{prefix}expect({actual}){EQUAL_REPLACEMENT}{}, {message}){}{term}",
                    expected.trim(),
                    call.tail(),
                ),
                Style::Fluent => format!(
                    "{prefix}expect({actual}).withContext({}){EQUAL_REPLACEMENT}{}){}{term}",
                    message.trim(),
                    expected.trim(),
                    call.tail(),
                ),
            },
            _ => return placeholder(body, "  ", EQUAL_REPLACEMENT),
        },
        None => return placeholder(body, "  ", EQUAL_REPLACEMENT),
    };
    LineResult::clean(text)
}

/// Rewrite the single-argument `assert.ok(` call.
///
/// One argument means no message, two mean a message rendered per
/// [`Style`], more fall back to the placeholder policy.
fn rewrite_truthy(line: &str, style: Style) -> LineResult {
    let (body, term) = split_eol(line);
    let Some(at) = FIND_TRUTHY.find(body.as_bytes()) else {
        return LineResult::clean(line.to_owned());
    };
    let prefix = &body[..at];
    let rest = &body[at + TRUTHY.len()..];
    let replacement = style.truthy_replacement();

    let text = match split_call_args(rest) {
        Some(call) => match call.args() {
            [actual] => format!("{prefix}expect({actual}){replacement});{term}"),
            [actual, message] => match style {
                Style::Positional => {
                    format!("{prefix}expect({actual}){replacement},{message});{term}")
                }
                Style::Fluent => format!(
                    "{prefix}expect({actual}).withContext({}){replacement});{term}",
                    message.trim(),
                ),
            },
            _ => return placeholder(body, "   ", replacement),
        },
        None => return placeholder(body, "   ", replacement),
    };
    LineResult::clean(text)
}

/// Emit the line unreconstructed with a visibly marked placeholder carrying
/// the intended replacement token, for manual follow-up.
fn placeholder(body: &str, gap: &str, replacement: &str) -> LineResult {
    LineResult {
        text: format!("{body}{gap}**{replacement}** \n"),
        needs_review: true,
    }
}
