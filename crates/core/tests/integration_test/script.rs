//! Tests for comment stripping and statement splitting over whole scripts.

use athena_executor_core::*;

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn test_script_with_comments_and_blank_lines() {
    let sql = "-- Line comment\n\
               SELECT COUNT(*) FROM table1;\n\
               \n\
               /* Block comment\n   over several lines */\n\
               SELECT \n    column1,\n    column2\nFROM table2 \nWHERE condition = 'value';\n\
               \n\
               -- Empty statement\n\
               \n\
               INSERT INTO table3 VALUES (1, 'test');\n";

    let stmts = parse_script(sql);

    assert_eq!(stmts.len(), 3, "expected 3 statements, got {:?}", stmts);
    assert!(normalize_ws(stmts[0].as_str()).contains("SELECT COUNT(*) FROM table1"));
    assert!(normalize_ws(stmts[1].as_str()).contains("SELECT column1, column2"));
    assert!(normalize_ws(stmts[1].as_str()).contains("WHERE condition = 'value'"));
    assert!(normalize_ws(stmts[2].as_str()).contains("INSERT INTO table3"));
}

#[test]
fn test_strip_removes_both_comment_kinds() {
    let sql = "-- Line comment\n\
               SELECT * FROM table1;\n\
               \n\
               /* Block comment\n   over several lines */\n\
               SELECT column1, column2 FROM table2;\n";

    let out = strip(sql);

    assert!(!out.contains("-- Line comment"));
    assert!(!out.contains("/* Block comment"));
    assert!(!out.contains("over several lines"));
    assert!(out.contains("SELECT * FROM table1"));
    assert!(out.contains("SELECT column1, column2 FROM table2"));
}

#[test]
fn test_statement_order_matches_source() {
    let sql = "CREATE TABLE t (id int);\nINSERT INTO t VALUES (1);\nSELECT * FROM t;\nDROP TABLE t;";
    let stmts: Vec<String> = parse_script(sql)
        .into_iter()
        .map(Statement::into_inner)
        .collect();

    assert_eq!(
        stmts,
        vec![
            "CREATE TABLE t (id int)",
            "INSERT INTO t VALUES (1)",
            "SELECT * FROM t",
            "DROP TABLE t",
        ]
    );
}

#[test]
fn test_script_without_statements() {
    assert!(parse_script("").is_empty());
    assert!(parse_script("\n\n   \n").is_empty());
    assert!(parse_script("-- nothing here\n/* or here */\n").is_empty());
}

#[test]
fn test_split_does_not_strip_comments() {
    // Callers compose strip + split; split alone keeps comment text.
    let stmts = split("-- note\nSELECT 1;");
    assert_eq!(stmts.len(), 1);
    assert!(stmts[0].as_str().starts_with("-- note"));
}
