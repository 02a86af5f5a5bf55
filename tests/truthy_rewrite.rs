use respec::core::{rewrite::convert_line, Style};

fn positional(input: &str) -> String {
    convert_line(input, Style::Positional).into_text()
}

fn fluent(input: &str) -> String {
    convert_line(input, Style::Fluent).into_text()
}

#[test]
fn single_argument_positional() {
    let out = positional("assert.ok(flag);\n");
    assert_eq!(out, "expect(flag).toBe(true);\n");
}

#[test]
fn single_argument_fluent() {
    let out = fluent("assert.ok(flag);\n");
    assert_eq!(out, "expect(flag).toBeTruthy();\n");
}

#[test]
fn expression_argument_kept_verbatim() {
    let out = positional("assert.ok(totals.length > 0);\n");
    assert_eq!(out, "expect(totals.length > 0).toBe(true);\n");
}

#[test]
fn indentation_preserved() {
    let out = positional("        assert.ok(x);\n");
    assert_eq!(out, "        expect(x).toBe(true);\n");
}

#[test]
fn message_appended_positionally() {
    let out = positional("assert.ok(flag, \"still set\");\n");
    assert_eq!(out, "expect(flag).toBe(true, \"still set\");\n");
}

#[test]
fn message_rendered_through_context_qualifier() {
    let out = fluent("assert.ok(flag, \"still set\");\n");
    assert_eq!(out, "expect(flag).withContext(\"still set\").toBeTruthy();\n");
}

#[test]
fn call_commas_protected() {
    let out = positional("assert.ok(sameLength(a, b));\n");
    assert_eq!(out, "expect(sameLength(a, b)).toBe(true);\n");
}

#[test]
fn three_arguments_get_placeholder() {
    let result = convert_line("assert.ok(a, b, c);\n", Style::Positional);
    assert_eq!(result.text(), "assert.ok(a, b, c);   **.toBe(true** \n");
    assert!(result.needs_review());
}

#[test]
fn placeholder_carries_style_replacement() {
    let result = convert_line("assert.ok(a, b, c);\n", Style::Fluent);
    assert_eq!(result.text(), "assert.ok(a, b, c);   **.toBeTruthy(** \n");
    assert!(result.needs_review());
}

#[test]
fn unterminated_call_gets_placeholder() {
    let result = convert_line("assert.ok(flag &&\n", Style::Positional);
    assert_eq!(result.text(), "assert.ok(flag &&   **.toBe(true** \n");
    assert!(result.needs_review());
}

#[test]
fn empty_argument_list_converted() {
    let out = positional("assert.ok();\n");
    assert_eq!(out, "expect().toBe(true);\n");
}

#[test]
fn missing_terminator_tolerated() {
    let out = positional("assert.ok(x);");
    assert_eq!(out, "expect(x).toBe(true);");
}
