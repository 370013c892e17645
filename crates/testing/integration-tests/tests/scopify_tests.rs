//! End-to-end annotation tests
//!
//! Each snapshot is the complete token sequence for a source unit, in the
//! emitted category order: scope boundaries, per-scope symbols, comments.

use expect_test::expect;
use integration_tests::dump_tokens;
use sl_annotate::{COMMENT_LEVEL, Style, Token};
use sl_driver::{ScopifyError, scopify};

#[test]
fn test_top_level_declaration() {
    let tokens = scopify("var a = 1;").unwrap();

    // One program boundary, one bold definition; the initializer's write
    // reference collapses into the definition
    expect![[r#"
        (1, 11, 0, Normal)
        (5, 6, 0, Bold)
    "#]]
    .assert_eq(&dump_tokens(&tokens));
}

#[test]
fn test_function_with_parameters() {
    let tokens = scopify("function f(x) { return x; }").unwrap();

    expect![[r#"
        (1, 28, 0, Normal)
        (1, 28, 1, Normal)
        (10, 11, 0, Bold)
        (12, 13, 1, Bold)
        (24, 25, 1, Normal)
    "#]]
    .assert_eq(&dump_tokens(&tokens));
}

#[test]
fn test_named_function_expression_collapses() {
    let tokens = scopify("(function f() { return f; });").unwrap();

    // The synthetic scope binding `f` to itself emits no boundary of its
    // own: one boundary for the program, one for the function. The name
    // definition and the inner reference both land on the function's level.
    expect![[r#"
        (1, 30, 0, Normal)
        (2, 28, 1, Normal)
        (11, 12, 1, Bold)
        (24, 25, 1, Normal)
    "#]]
    .assert_eq(&dump_tokens(&tokens));
}

#[test]
fn test_comment_and_closure() {
    let source = "// header\nvar n = 1;\nfunction add(a, b) {\n  return a + b;\n}";
    let tokens = scopify(source).unwrap();

    expect![[r#"
        (1, 60, 0, Normal)
        (22, 60, 1, Normal)
        (15, 16, 0, Bold)
        (31, 34, 0, Bold)
        (35, 36, 1, Bold)
        (38, 39, 1, Bold)
        (52, 53, 1, Normal)
        (56, 57, 1, Normal)
        (1, 10, -1, Normal)
    "#]]
    .assert_eq(&dump_tokens(&tokens));
}

#[test]
fn test_undeclared_reference_annotates_at_global_level() {
    let tokens = scopify("undeclared();").unwrap();

    expect![[r#"
        (1, 14, 0, Normal)
        (1, 11, 0, Normal)
    "#]]
    .assert_eq(&dump_tokens(&tokens));
}

#[test]
fn test_broken_source_fails_without_tokens() {
    let result = scopify("function f( {");
    assert!(matches!(result, Err(ScopifyError::Parse(_))));
}

#[test]
fn test_repeated_runs_are_identical() {
    let source = "// header\nvar n = 1;\nfunction add(a, b) {\n  return a + b;\n}";
    assert_eq!(scopify(source).unwrap(), scopify(source).unwrap());
}

#[test]
fn test_levels_step_by_one_per_function() {
    let source = "function outer() { function inner() { return 1; } return inner; }";
    let tokens = scopify(source).unwrap();

    let mut levels: Vec<i32> = tokens
        .iter()
        .filter(|token| token.level != COMMENT_LEVEL)
        .map(|token| token.level)
        .collect();
    levels.sort_unstable();
    levels.dedup();
    assert_eq!(levels, vec![0, 1, 2]);
}

#[test]
fn test_var_in_block_stays_function_scoped() {
    let source = "if (true) { var y = 1; } y;";
    let tokens = scopify(source).unwrap();

    // `y` after the block still resolves to the top level
    assert!(tokens.contains(&Token::new(26, 27, 0, Style::Normal)));
}

#[test]
fn test_comment_sentinel_is_exclusive() {
    let source = "// one\nvar a = 1; /* two */";
    let tokens = scopify(source).unwrap();

    let comments: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.level == COMMENT_LEVEL)
        .collect();
    assert_eq!(comments.len(), 2);
    assert!(
        comments
            .iter()
            .all(|token| token.style == Style::Normal)
    );
    // Every non-comment token carries a real scope level
    assert!(
        tokens
            .iter()
            .filter(|token| token.style == Style::Bold)
            .all(|token| token.level >= 0)
    );
}
