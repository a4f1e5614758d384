use super::{Field, StructType, TypeRepr};
use crate::naming::{c_symbol_name, dart_c_name, to_lower_camel};
use serde::Serialize;
use std::fmt;

/// One exported Go function.
///
/// Parameters and results are carried as synthetic structs
/// (`<name>Params`, `<name>Results`) so generators can marshal them as a unit.
/// A trailing `err error` result is not part of `results`; it is reported
/// through `has_err`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FuncType {
    pub name: String,
    pub params: StructType,
    pub results: StructType,
    /// Number of results, excluding a stripped error
    pub result_count: usize,
    pub has_err: bool,
    pub has_params: bool,
    pub has_results: bool,
    /// Results were declared without names and received `res<i>` placeholders
    pub is_anonymous_results: bool,
}

impl FuncType {
    pub fn new(name: impl Into<String>, params: Vec<Field>, results: Vec<Field>) -> Self {
        let name = name.into();
        let base = to_lower_camel(&name);
        let has_params = !params.is_empty();
        let has_results = !results.is_empty();
        let result_count = results.len();

        Self {
            params: StructType::new(format!("{base}Params"), params),
            results: StructType::new(format!("{base}Results"), results),
            name,
            result_count,
            has_err: false,
            has_params,
            has_results,
            is_anonymous_results: false,
        }
    }

    /// Dart return type of the generated wrapper
    pub fn dart_result_type(&self) -> String {
        match self.result_count {
            0 => "void".to_string(),
            1 => self
                .results
                .fields
                .first()
                .map(TypeRepr::dart_type)
                .unwrap_or_else(|| "void".to_string()),
            _ => self.results.dart_type(),
        }
    }

    /// Kotlin return type of the generated wrapper
    pub fn kotlin_result_type(&self) -> String {
        match self.result_count {
            0 => "Unit".to_string(),
            1 => self
                .results
                .fields
                .first()
                .map(TypeRepr::kotlin_type)
                .unwrap_or_else(|| "Unit".to_string()),
            _ => self.results.kotlin_type(),
        }
    }
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TypeRepr for FuncType {
    /// Exported C symbol
    fn c_type(&self) -> String {
        c_symbol_name(&self.name)
    }

    fn go_type(&self) -> String {
        self.name.clone()
    }

    fn go_c_type(&self) -> String {
        self.c_type()
    }

    fn dart_type(&self) -> String {
        to_lower_camel(&self.name)
    }

    fn dart_c_type(&self) -> String {
        dart_c_name(&self.name)
    }

    fn dart_default(&self) -> String {
        "null".to_string()
    }

    fn kotlin_type(&self) -> String {
        to_lower_camel(&self.name)
    }

    fn kotlin_c_type(&self) -> String {
        "Unit".to_string()
    }

    fn kotlin_default(&self) -> String {
        "null".to_string()
    }

    // functions never get a wrapper
    fn map_name(&self) -> String {
        String::new()
    }

    fn need_map(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BasicKind, GoType};

    #[test]
    fn test_func_spellings() {
        let func = FuncType::new(
            "GetUserInfo",
            vec![Field::new("id", GoType::basic(BasicKind::Int64))],
            Vec::new(),
        );
        assert_eq!(func.to_string(), "GetUserInfo");
        assert_eq!(func.c_type(), "fg_get_user_info");
        assert_eq!(func.go_c_type(), "fg_get_user_info");
        assert_eq!(func.dart_type(), "getUserInfo");
        assert_eq!(func.dart_c_type(), "_fgGetUserInfo");
        assert_eq!(func.map_name(), "");
        assert!(!func.need_map());
    }

    #[test]
    fn test_synthetic_struct_names() {
        let func = FuncType::new("Sum", Vec::new(), Vec::new());
        assert_eq!(func.params.name(), "sumParams");
        assert_eq!(func.results.name(), "sumResults");
        assert_eq!(func.results.dart_type(), "SumResults");
        assert!(!func.has_params);
        assert!(!func.has_results);
    }

    #[test]
    fn test_dart_result_type() {
        let none = FuncType::new("Ping", Vec::new(), Vec::new());
        assert_eq!(none.dart_result_type(), "void");

        let one = FuncType::new(
            "Name",
            Vec::new(),
            vec![Field::new("res0", GoType::basic(BasicKind::String))],
        );
        assert_eq!(one.dart_result_type(), "String");

        let two = FuncType::new(
            "Pair",
            Vec::new(),
            vec![
                Field::new("a", GoType::basic(BasicKind::Int32)),
                Field::new("b", GoType::basic(BasicKind::Int32)),
            ],
        );
        assert_eq!(two.dart_result_type(), "PairResults");
        assert_eq!(two.kotlin_result_type(), "PairResults");
    }
}
