//! The ordered literal-substitution table and the grouping-block rewrite.

use std::sync::LazyLock;

use memchr::memmem::Finder;

use crate::core::split_eol;

/// Literal substitutions applied before the trailing-space collapse, in
/// order. Later pairs see the output of earlier ones: `for (var` becomes
/// `for (const` via the `var ` rule and only then lands on `for (let`.
const EARLY: &[(&str, &str)] = &[
    ("QUnit.test(", "it("),
    (", function (assert)", ", () =>"),
    ("    \"use strict\";", ""),
    ("var ", "const "),
    ("for (const", "for (let"),
    ("(function () {", ""),
    ("})();", "}"),
    ("function () {", "() => {"),
];

/// Literal substitutions applied after the trailing-space collapse.
const LATE: &[(&str, &str)] = &[
    ("function (assert,", "function ("),
    ("(assert,", "("),
    ("(SplitsBrowserTest.", "TestSupport."),
];

static GROUP_CALL: LazyLock<Finder<'static>> = LazyLock::new(|| Finder::new("module("));

/// Apply the literal-substitution pass to one line.
///
/// Every pair is an unconditional replace-all; a line that contains none of
/// the patterns comes back unchanged.
#[must_use]
pub fn apply_literals(line: &str) -> String {
    let mut out = line.to_owned();
    for (from, to) in EARLY {
        replace_all(&mut out, from, to);
    }
    collapse_trailing_spaces(&mut out);
    for (from, to) in LATE {
        replace_all(&mut out, from, to);
    }
    out
}

fn replace_all(line: &mut String, from: &str, to: &str) {
    if line.contains(from) {
        *line = line.replace(from, to);
    }
}

/// Remove any run of spaces sitting immediately before the line terminator.
///
/// Only spaces are collapsed, and only on terminated lines; a final line
/// without a terminator is left alone, as is embedded whitespace.
fn collapse_trailing_spaces(line: &mut String) {
    if !line.ends_with('\n') {
        return;
    }
    let body_len = line.len() - 1;
    let kept = line[..body_len].trim_end_matches(' ').len();
    if kept < body_len {
        line.replace_range(kept..body_len, "");
    }
}

/// Rewrite a grouping invocation into the target framework's block form.
///
/// A line containing `module(` has that token replaced with `fdescribe(`,
/// its trailing `;` (and terminator) stripped, and the fixed block opener
/// `, () => {` appended: `module("totals");` becomes
/// `fdescribe("totals"), () => {`. Lines without the token pass through.
#[must_use]
pub fn rewrite_group(line: &str) -> String {
    if GROUP_CALL.find(line.as_bytes()).is_none() {
        return line.to_owned();
    }
    let replaced = line.replace("module(", "fdescribe(");
    let (body, _) = split_eol(&replaced);
    // Drop the assumed trailing `;`. Saturates on short lines instead of
    // slicing out of range.
    let mut chars = body.chars();
    chars.next_back();
    let mut out = String::with_capacity(body.len() + 12);
    out.push_str(chars.as_str());
    out.push_str(", () => {\n");
    out
}
