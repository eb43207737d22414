use crate::reader::{ast, escape, Node};
use super::Value;

fn read_number(node: &Node) -> Value {
    match node.contents.parse::<f64>() {
        Ok(x) if x.is_finite() => Value::number(x),
        _ => Value::error("invalid number"),
    }
}

fn read_string(node: &Node) -> Value {
    let raw = &node.contents;
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    Value::string(escape::unescape(inner))
}

fn is_skipped(node: &Node) -> bool {
    matches!(node.contents.as_str(), "(" | ")" | "{" | "}")
        || node.tag == ast::ANCHOR_TAG
        || node.tag.contains("comment")
}

/// Converts a parsed tree into a value. The root becomes an S-Expression
/// holding every top-level expression.
pub fn read(node: &Node) -> Value {
    if node.tag.contains("number") {
        return read_number(node);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.as_str());
    }
    if node.tag.contains("string") {
        return read_string(node);
    }

    let cells = read_children(node);
    if node.tag.contains("qexpr") {
        Value::QExpr(cells)
    } else {
        Value::SExpr(cells)
    }
}

fn read_children(node: &Node) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| !is_skipped(child))
        .map(read)
        .collect()
}

/// The top-level expressions of a parsed unit, each read separately.
pub fn read_forms(root: &Node) -> Vec<Value> {
    read_children(root)
}
