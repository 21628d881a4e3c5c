use stackcpu::lang::{lex, lex_line};

#[test]
fn test_upper_cases_tokens() {
    assert_eq!(lex_line("lit x1f Dup"), vec!["LIT", "X1F", "DUP"]);
}

#[test]
fn test_tabs_and_spaces() {
    assert_eq!(lex_line("\tLIT\t \t5  "), vec!["LIT", "5"]);
}

#[test]
fn test_comment_strips_rest_of_line() {
    assert_eq!(lex_line("DUP ; SWAP DROP"), vec!["DUP"]);
}

#[test]
fn test_lines_flatten() {
    let lines = vec![":start lit 1", "", "  ; comment", "if :start"];
    assert_eq!(lex(&lines), vec![":START", "LIT", "1", "IF", ":START"]);
}

#[test]
fn test_empty_source() {
    let lines: Vec<String> = vec![];
    assert!(lex(&lines).is_empty());
}
