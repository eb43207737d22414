/// One node of a parsed tree.
///
/// `tag` is a `|`-separated list of grammar rules the node matched, e.g.
/// `expr|number|regex` for a number literal or `expr|qexpr|>` for a
/// quoted list. Brackets are kept as `char` children and the root is
/// framed by two empty `regex` anchors, so consumers skip what they
/// don't need.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: String,
    pub contents: String,
    pub children: Vec<Node>,
    pub line: usize,
    pub col: usize,
}

pub const ROOT_TAG: &str = ">";
pub const NUMBER_TAG: &str = "expr|number|regex";
pub const SYMBOL_TAG: &str = "expr|symbol|regex";
pub const STRING_TAG: &str = "expr|string|regex";
pub const COMMENT_TAG: &str = "expr|comment|regex";
pub const SEXPR_TAG: &str = "expr|sexpr|>";
pub const QEXPR_TAG: &str = "expr|qexpr|>";
pub const CHAR_TAG: &str = "char";
pub const ANCHOR_TAG: &str = "regex";

impl Node {
    pub fn leaf(tag: &str, contents: &str, line: usize, col: usize) -> Node {
        Node {
            tag: tag.to_string(),
            contents: contents.to_string(),
            children: Vec::new(),
            line,
            col,
        }
    }

    pub fn branch(tag: &str, line: usize, col: usize) -> Node {
        Node::leaf(tag, "", line, col)
    }
}
