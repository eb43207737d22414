pub mod ast;
pub mod escape;
mod scanner;

pub use ast::Node;

use scanner::TokenType;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub origin: String,
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.origin, self.line, self.col, self.message
        )
    }
}

/// Parses `source` into a tree rooted at a `>` node whose children are the
/// top-level expressions, framed by two anchor nodes.
pub fn parse(origin: &str, source: &str) -> Result<Node, ParseError> {
    let error = |message: String, line: usize, col: usize| ParseError {
        origin: origin.to_string(),
        message,
        line,
        col,
    };

    let tokens = scanner::scan_tokens(source).map_err(|err| error(err.what, err.line, err.col))?;

    let mut root = Node::branch(ast::ROOT_TAG, 1, 1);
    root.children.push(Node::branch(ast::ANCHOR_TAG, 1, 1));

    // containers still waiting for their closing bracket
    let mut open: Vec<(Node, char)> = Vec::new();

    for token in tokens {
        let leaf_tag = match token.ty {
            TokenType::LeftParen | TokenType::LeftBrace => {
                let (tag, close) = if token.ty == TokenType::LeftParen {
                    (ast::SEXPR_TAG, ')')
                } else {
                    (ast::QEXPR_TAG, '}')
                };
                let mut node = Node::branch(tag, token.line, token.col);
                node.children.push(Node::leaf(
                    ast::CHAR_TAG,
                    &token.lexeme,
                    token.line,
                    token.col,
                ));
                open.push((node, close));
                continue;
            }
            TokenType::RightParen | TokenType::RightBrace => {
                let (mut node, close) = match open.pop() {
                    Some(pending) => pending,
                    None => {
                        return Err(error(
                            format!("unexpected '{}'", token.lexeme),
                            token.line,
                            token.col,
                        ))
                    }
                };
                if !token.lexeme.starts_with(close) {
                    return Err(error(
                        format!("expected '{}' but found '{}'", close, token.lexeme),
                        token.line,
                        token.col,
                    ));
                }
                node.children.push(Node::leaf(
                    ast::CHAR_TAG,
                    &token.lexeme,
                    token.line,
                    token.col,
                ));
                match open.last_mut() {
                    Some((parent, _)) => parent.children.push(node),
                    None => root.children.push(node),
                }
                continue;
            }
            TokenType::Number => ast::NUMBER_TAG,
            TokenType::Symbol => ast::SYMBOL_TAG,
            TokenType::String => ast::STRING_TAG,
            TokenType::Comment => ast::COMMENT_TAG,
        };

        let leaf = Node::leaf(leaf_tag, &token.lexeme, token.line, token.col);
        match open.last_mut() {
            Some((parent, _)) => parent.children.push(leaf),
            None => root.children.push(leaf),
        }
    }

    if let Some((node, close)) = open.pop() {
        return Err(error(
            format!("missing '{}' to close this expression", close),
            node.line,
            node.col,
        ));
    }

    root.children.push(Node::branch(ast::ANCHOR_TAG, 1, 1));
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(node: &Node) -> Vec<&str> {
        node.children.iter().map(|child| child.tag.as_str()).collect()
    }

    #[test]
    fn test_root_shape() {
        let root = match parse("<test>", "+ 1 (x) {}") {
            Ok(root) => root,
            Err(err) => panic!("{}", err),
        };
        assert_eq!(root.tag, ">");
        assert_eq!(
            tags(&root),
            vec![
                "regex",
                "expr|symbol|regex",
                "expr|number|regex",
                "expr|sexpr|>",
                "expr|qexpr|>",
                "regex"
            ]
        );
        assert_eq!(tags(&root.children[3]), vec!["char", "expr|symbol|regex", "char"]);
        assert_eq!(root.children[4].children.len(), 2);
        assert_eq!(root.children[4].children[1].contents, "}");
    }

    #[test]
    fn test_string_contents_keep_quotes() {
        let root = match parse("<test>", "\"a b\"") {
            Ok(root) => root,
            Err(err) => panic!("{}", err),
        };
        assert_eq!(root.children[1].contents, "\"a b\"");
    }

    #[test]
    fn test_unbalanced() {
        let err = parse("<test>", "(+ 1\n  (2 3)").err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("<test>:1:1: missing ')' to close this expression".to_string())
        );
        assert!(parse("<test>", "1)").is_err());
        assert!(parse("<test>", "(1}").is_err());
    }
}
