fn is_asm_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Normalize source lines into one flat stream of upper-cased tokens.
/// Line boundaries are not preserved.
pub fn lex<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| lex_line(line.as_ref()))
        .collect()
}

pub fn lex_line(line: &str) -> Vec<String> {
    let code = match line.find(';') {
        Some(index) => &line[..index],
        None => line,
    };
    code.split(is_asm_whitespace)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_glued_to_token() {
        assert_eq!(lex_line("dup;swap"), vec!["DUP"]);
    }

    #[test]
    fn test_only_comment() {
        assert!(lex_line("  ; nothing here").is_empty());
    }

    #[test]
    fn test_carriage_return_is_not_whitespace() {
        assert_eq!(lex_line("halt\r"), vec!["HALT\r"]);
    }
}
