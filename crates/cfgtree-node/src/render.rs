//! Indented, JSON-like rendering of settings trees for diagnostics.

use std::fmt::{self, Write};

use crate::node::Node;

const INDENT: &str = "   ";
const NULL: &str = "null";

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, 0)
    }
}

fn indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn render(node: &Node, out: &mut impl Write, depth: usize) -> fmt::Result {
    match node {
        Node::Value(value) => {
            indent(out, depth)?;
            match value.value() {
                Some(text) => write!(out, "\"{text}\""),
                None => out.write_str(NULL),
            }
        }
        Node::Array(array) => {
            indent(out, depth)?;
            if array.is_empty() {
                return out.write_str("[]");
            }
            out.write_str("[\n")?;
            for child in array.children() {
                render(child, out, depth + 1)?;
                out.write_str(",\n")?;
            }
            indent(out, depth)?;
            out.write_str("]")
        }
        Node::Object(object) => {
            indent(out, depth)?;
            if object.is_empty() {
                return out.write_str("{}");
            }
            out.write_str("{\n")?;
            for (key, child) in object.entries() {
                indent(out, depth + 1)?;
                write!(out, "\"{}\": ", child.name().unwrap_or(key.as_str()))?;
                if child.is_empty() {
                    render(child, out, 0)?;
                } else {
                    out.write_str("\n")?;
                    render(child, out, depth + 1)?;
                }
                out.write_str(",\n")?;
            }
            indent(out, depth)?;
            out.write_str("}")
        }
    }
}
