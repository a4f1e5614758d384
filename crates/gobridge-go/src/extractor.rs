//! Declaration extraction for Go source code

use gobridge_model::{BridgeError, BridgeResult, SourceDecls};
use std::path::Path;
use tree_sitter::{Node, Parser};

use crate::visitor::GoVisitor;

/// Extract the top-level declarations of one Go file
pub fn extract(source: &str, file_path: &Path) -> BridgeResult<SourceDecls> {
    let mut parser = Parser::new();
    let language = tree_sitter_go::language();
    parser
        .set_language(&language)
        .map_err(|e| BridgeError::Parse(file_path.to_path_buf(), e.to_string()))?;

    let tree = parser.parse(source, None).ok_or_else(|| {
        BridgeError::Parse(file_path.to_path_buf(), "Failed to parse".to_string())
    })?;

    let root_node = tree.root_node();
    if root_node.has_error() {
        let (line, column, message) = match first_error(root_node) {
            Some(node) => {
                let pos = node.start_position();
                let message = if node.is_missing() {
                    format!("missing {}", node.kind())
                } else {
                    "unexpected input".to_string()
                };
                (pos.row + 1, pos.column + 1, message)
            }
            None => (0, 0, "Syntax error".to_string()),
        };
        return Err(BridgeError::Syntax(
            file_path.to_path_buf(),
            line,
            column,
            message,
        ));
    }

    let mut visitor = GoVisitor::new(source.as_bytes());
    visitor.visit_source_file(root_node);

    let mut decls = SourceDecls::new(file_path.to_path_buf());
    decls.package_name = visitor.package_name;
    decls.type_specs = visitor.type_specs;
    decls.func_decls = visitor.func_decls;

    Ok(decls)
}

/// Leftmost error or missing node in the tree
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}
