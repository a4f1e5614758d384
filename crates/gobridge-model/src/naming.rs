//! Identifier spelling rules shared by every target language.
//!
//! The Go shim, the Dart bindings and the Kotlin plugin reference each other
//! purely by name, so every spelling of an entity must come from here.

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Prefix of generated C struct names (`FgUser`)
pub const C_STRUCT_PREFIX: &str = "Fg";

/// Prefix of exported C symbols (`fg_get_user`, `fg_user`)
pub const C_SYMBOL_PREFIX: &str = "fg_";

/// Prefix of Dart-side FFI struct and function typedefs (`_fgUser`)
pub const DART_C_PREFIX: &str = "_fg";

/// snake_case, used for C symbols and field names
pub fn to_snake(name: &str) -> String {
    name.to_snake_case()
}

/// PascalCase, used for type names
pub fn to_camel(name: &str) -> String {
    name.to_upper_camel_case()
}

/// lowerCamelCase, used for parameter and field names
pub fn to_lower_camel(name: &str) -> String {
    name.to_lower_camel_case()
}

/// `FgUser` for `user`
pub fn c_struct_name(name: &str) -> String {
    format!("{C_STRUCT_PREFIX}{}", to_camel(name))
}

/// `fg_get_user` for `GetUser`
pub fn c_symbol_name(name: &str) -> String {
    format!("{C_SYMBOL_PREFIX}{}", to_snake(name))
}

/// `_fgGetUser` for `GetUser`
pub fn dart_c_name(name: &str) -> String {
    format!("{DART_C_PREFIX}{}", to_camel(name))
}

/// Go visibility: an identifier is exported when it starts with an upper-case letter
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_conversions() {
        assert_eq!(to_snake("GetUserByID"), "get_user_by_id");
        assert_eq!(to_camel("my_api"), "MyApi");
        assert_eq!(to_camel("int32"), "Int32");
        assert_eq!(to_lower_camel("UserName"), "userName");
        assert_eq!(to_lower_camel("res0"), "res0");
        // acronyms are re-cased as one word
        assert_eq!(to_lower_camel("UserID"), "userId");
    }

    #[test]
    fn test_prefixed_names() {
        assert_eq!(c_struct_name("user"), "FgUser");
        assert_eq!(c_symbol_name("GetUser"), "fg_get_user");
        assert_eq!(dart_c_name("GetUser"), "_fgGetUser");
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("User"));
        assert!(!is_exported("user"));
        assert!(!is_exported("_User"));
        assert!(!is_exported(""));
    }
}
