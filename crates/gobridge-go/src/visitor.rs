//! Syntax tree visitor lowering Go declarations into bridge declarations

use gobridge_model::ast::{ChanDir, FieldDecl, FuncDecl, FuncSig, TypeExpr, TypeSpec};
use log::trace;
use tree_sitter::Node;

pub struct GoVisitor<'a> {
    pub source: &'a [u8],
    pub package_name: Option<String>,
    pub type_specs: Vec<TypeSpec>,
    pub func_decls: Vec<FuncDecl>,
}

impl<'a> GoVisitor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            package_name: None,
            type_specs: Vec::new(),
            func_decls: Vec::new(),
        }
    }

    fn node_text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or("").to_string()
    }

    fn field_text(&self, node: Node, field: &str) -> String {
        node.child_by_field_name(field)
            .map(|n| self.node_text(n))
            .unwrap_or_default()
    }

    /// Only package-level declarations are visited; types declared inside
    /// function bodies are local and never bridged.
    pub fn visit_source_file(&mut self, root: Node) {
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_clause" => self.visit_package_clause(child),
                "type_declaration" => self.visit_type_declaration(child),
                "function_declaration" => self.visit_function(child, false),
                "method_declaration" => self.visit_function(child, true),
                _ => {}
            }
        }
    }

    fn visit_package_clause(&mut self, node: Node) {
        if let Some(name) = node.named_child(0) {
            self.package_name = Some(self.node_text(name));
        }
    }

    /// `type X ...`, `type X = ...` and grouped `type ( ... )`
    fn visit_type_declaration(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if !matches!(child.kind(), "type_spec" | "type_alias") {
                continue;
            }

            let name = self.field_text(child, "name");
            let ty = self.lower_opt(child.child_by_field_name("type"));
            let type_params = child
                .child_by_field_name("type_parameters")
                .map(|n| self.type_param_names(n))
                .unwrap_or_default();

            trace!("Found type {name}");
            self.type_specs
                .push(TypeSpec::new(name, ty).with_type_params(type_params));
        }
    }

    fn visit_function(&mut self, node: Node, is_method: bool) {
        let name = self.field_text(node, "name");
        let sig = self.lower_signature(node);

        trace!("Found {} {name}", if is_method { "method" } else { "function" });
        let decl = FuncDecl::new(name, sig);
        self.func_decls
            .push(if is_method { decl.method() } else { decl });
    }

    /// Signature of a `function_declaration`, `method_declaration` or `function_type`
    fn lower_signature(&self, node: Node) -> FuncSig {
        let params = node
            .child_by_field_name("parameters")
            .map(|n| self.lower_parameter_list(n))
            .unwrap_or_default();

        let results = match node.child_by_field_name("result") {
            None => Vec::new(),
            Some(result) if result.kind() == "parameter_list" => self.lower_parameter_list(result),
            Some(result) => vec![FieldDecl::unnamed(self.lower_type(result))],
        };

        let type_params = node
            .child_by_field_name("type_parameters")
            .map(|n| self.type_param_names(n))
            .unwrap_or_default();

        FuncSig::new(params, results).with_type_params(type_params)
    }

    fn lower_parameter_list(&self, node: Node) -> Vec<FieldDecl> {
        let mut fields = Vec::new();
        let mut cursor = node.walk();

        for child in node.named_children(&mut cursor) {
            let ty = match child.kind() {
                "parameter_declaration" => self.lower_opt(child.child_by_field_name("type")),
                "variadic_parameter_declaration" => TypeExpr::Unsupported {
                    kind: "variadic".to_string(),
                    text: self.node_text(child),
                },
                _ => continue,
            };
            fields.push(FieldDecl::with_names(self.names(child), ty));
        }

        fields
    }

    fn lower_field_list(&self, struct_node: Node) -> Vec<FieldDecl> {
        let mut fields = Vec::new();
        let mut cursor = struct_node.walk();

        let Some(list) = struct_node
            .named_children(&mut cursor)
            .find(|n| n.kind() == "field_declaration_list")
        else {
            return fields;
        };

        let mut cursor = list.walk();
        for decl in list.named_children(&mut cursor) {
            if decl.kind() != "field_declaration" {
                continue;
            }
            let ty = self.lower_opt(decl.child_by_field_name("type"));
            fields.push(FieldDecl::with_names(self.names(decl), ty));
        }

        fields
    }

    /// Every `name` field of a declaration node
    fn names(&self, node: Node) -> Vec<String> {
        let mut cursor = node.walk();
        let names = node
            .children_by_field_name("name", &mut cursor)
            .map(|n| self.node_text(n))
            .collect();
        names
    }

    fn type_param_names(&self, list: Node) -> Vec<String> {
        let mut cursor = list.walk();
        let mut names = Vec::new();
        for decl in list.named_children(&mut cursor) {
            if matches!(decl.kind(), "type_parameter_declaration" | "parameter_declaration") {
                names.extend(self.names(decl));
            }
        }
        names
    }

    fn lower_opt(&self, node: Option<Node>) -> TypeExpr {
        match node {
            Some(node) => self.lower_type(node),
            None => TypeExpr::Unsupported {
                kind: "missing".to_string(),
                text: String::new(),
            },
        }
    }

    pub fn lower_type(&self, node: Node) -> TypeExpr {
        match node.kind() {
            "type_identifier" => TypeExpr::ident(self.node_text(node)),
            "qualified_type" => TypeExpr::Qualified {
                package: self.field_text(node, "package"),
                name: self.field_text(node, "name"),
            },
            "pointer_type" => TypeExpr::pointer(self.lower_opt(node.named_child(0))),
            "slice_type" => TypeExpr::slice(self.lower_opt(node.child_by_field_name("element"))),
            "array_type" => TypeExpr::array(
                self.field_text(node, "length"),
                self.lower_opt(node.child_by_field_name("element")),
            ),
            "implicit_length_array_type" => TypeExpr::array(
                "...",
                self.lower_opt(node.child_by_field_name("element")),
            ),
            "struct_type" => TypeExpr::Struct {
                fields: self.lower_field_list(node),
            },
            "function_type" => TypeExpr::Func {
                sig: self.lower_signature(node),
            },
            "channel_type" => TypeExpr::chan(
                self.chan_dir(node),
                self.lower_opt(node.child_by_field_name("value")),
            ),
            "parenthesized_type" => self.lower_opt(node.named_child(0)),
            kind => TypeExpr::Unsupported {
                kind: kind.to_string(),
                text: self.node_text(node),
            },
        }
    }

    /// `<-chan T` starts with the arrow, `chan<- T` has it second
    fn chan_dir(&self, node: Node) -> ChanDir {
        let first = node.child(0).map(|n| n.kind());
        let second = node.child(1).map(|n| n.kind());
        match (first, second) {
            (Some("<-"), _) => ChanDir::Recv,
            (_, Some("<-")) => ChanDir::Send,
            _ => ChanDir::Both,
        }
    }
}
