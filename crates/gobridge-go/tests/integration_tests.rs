//! Integration tests for gobridge-go

use gobridge_go::{generate_model, BridgeConfig, BridgeError, DeclParser, GoSourceParser};
use gobridge_model::{TypeClosure, TypeRepr};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const USERS_GO: &str = r#"
package api

import "errors"

// User is a registered account
type User struct {
    ID      int64
    Name    string
    Tags    []string
    Manager *User
    Friends []*User
    secret  string
}

type Page struct {
    Items []User
    Next  *int32
}

type internalCache struct {
    Hits int
}

func GetUser(id int64) (*User, error) {
    if id == 0 {
        return nil, errors.New("not found")
    }
    return &User{ID: id}, nil
}

func ListUsers(offset, limit int32) (page Page, err error) {
    return Page{}, nil
}

func Ping() {}

func (u *User) Rename(name string) {
    u.Name = name
}

func helper() int { return 1 }
"#;

const EVENTS_GO: &str = r#"
package api

func Subscribe(topic string) chan string {
    return make(chan string)
}
"#;

fn setup_module() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("go.mod"), "module example.com/my_api\n\ngo 1.22\n").unwrap();

    let api = dir.path().join("src").join("api");
    fs::create_dir_all(&api).unwrap();
    fs::write(api.join("users.go"), USERS_GO).unwrap();
    fs::write(api.join("events.go"), EVENTS_GO).unwrap();
    fs::write(api.join("users_test.go"), "package api\n\nfunc TestBroken( {\n").unwrap();
    fs::write(
        api.join("ffi.export.go"),
        "package api\n\ntype Generated struct { V any }\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_parse_source_declarations() {
    let parser = GoSourceParser::new();
    let decls = parser.parse_source(USERS_GO, Path::new("users.go")).unwrap();

    assert_eq!(decls.package_name.as_deref(), Some("api"));
    assert_eq!(decls.type_specs.len(), 3);
    assert_eq!(decls.func_decls.len(), 5);
}

#[test]
fn test_parse_package_directory() {
    let dir = setup_module();
    let parser = GoSourceParser::with_config(BridgeConfig::ffi());
    let package = parser
        .parse_package(&dir.path().join("src").join("api"), Some(1700000000000))
        .unwrap();

    assert_eq!(package.module, "example.com/my_api");
    assert_eq!(package.pkg_path, "example.com/my_api/src/api");

    let structs: Vec<_> = package.structs.iter().map(|s| s.name()).collect();
    assert_eq!(structs, vec!["User", "Page"]);

    // events.go sorts before users.go
    let funcs: Vec<_> = package.funcs.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(funcs, vec!["Subscribe", "GetUser", "ListUsers", "Ping"]);

    let user = package.find_struct("User").unwrap();
    assert_eq!(user.fields.len(), 5);
    assert!(user.field("secret").is_none());

    let get_user = package.find_func("GetUser").unwrap();
    assert!(get_user.has_err);
    assert!(get_user.is_anonymous_results);
    assert_eq!(get_user.result_count, 1);
    assert_eq!(get_user.results.fields[0].name, "res0");
    assert_eq!(get_user.dart_result_type(), "User?");
    assert_eq!(
        package.naming.export_symbol(get_user),
        "fg_get_user_1700000000000"
    );

    let list = package.find_func("ListUsers").unwrap();
    assert!(list.has_err);
    assert!(!list.is_anonymous_results);
    assert_eq!(list.params.fields.len(), 2);

    let ping = package.find_func("Ping").unwrap();
    assert!(!ping.has_params);
    assert!(!ping.has_results);
    assert_eq!(ping.dart_result_type(), "void");
}

#[test]
fn test_package_closure() {
    let dir = setup_module();
    let parser = GoSourceParser::with_config(BridgeConfig::ffi());
    let package = parser
        .parse_package(&dir.path().join("src").join("api"), None)
        .unwrap();
    let closure = TypeClosure::collect(&package);

    let slices: Vec<_> = closure.slices.iter().map(|s| s.map_name()).collect();
    assert_eq!(slices, vec!["StringList", "UserList", "UserNullableList"]);

    let pointers: Vec<_> = closure.pointers.iter().map(|p| p.map_name()).collect();
    assert_eq!(pointers, vec!["NullableInt32", "NullableUser"]);

    let chans: Vec<_> = closure.chans.iter().map(|c| c.map_name()).collect();
    assert_eq!(chans, vec!["StringChan"]);
}

#[test]
fn test_parse_single_file() {
    let dir = setup_module();
    let file = dir.path().join("src").join("api").join("events.go");

    let parser = GoSourceParser::new();
    let package = parser.parse_package(&file, None).unwrap();

    assert_eq!(package.pkg_path, "example.com/my_api/src/api");
    assert_eq!(package.funcs.len(), 1);
    assert!(package.structs.is_empty());
}

#[test]
fn test_parallel_matches_sequential() {
    let dir = setup_module();
    let api = dir.path().join("src").join("api");

    let sequential = GoSourceParser::with_config(BridgeConfig::ffi())
        .parse_package(&api, Some(7))
        .unwrap();
    let parallel = GoSourceParser::with_config(
        BridgeConfig::ffi().with_parallel(true).with_parallel_workers(2),
    )
    .parse_package(&api, Some(7))
    .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_ignored_files_are_not_loaded() {
    let dir = setup_module();
    let api = dir.path().join("src").join("api");

    // without the ffi preset the generated file is loaded and rejected
    let parser = GoSourceParser::new();
    let err = parser.parse_package(&api, None).unwrap_err();
    assert!(matches!(err, BridgeError::AnyType { .. }));
}

#[test]
fn test_unsupported_declaration_aborts() {
    let dir = setup_module();
    let api = dir.path().join("src").join("api");
    fs::write(
        api.join("bad.go"),
        "package api\n\nfunc Lookup(m map[string]int) {}\n",
    )
    .unwrap();

    let parser = GoSourceParser::with_config(BridgeConfig::ffi());
    let err = parser.parse_package(&api, None).unwrap_err();
    assert!(err.is_unsupported());
    assert!(matches!(err, BridgeError::UnsupportedType { .. }));
}

#[test]
fn test_any_parameter_is_rejected() {
    let dir = setup_module();
    let api = dir.path().join("src").join("api");
    fs::write(api.join("dynamic.go"), "package api\n\nfunc F(x any) {}\n").unwrap();

    let parser = GoSourceParser::with_config(BridgeConfig::ffi());
    let err = parser.parse_package(&api, None).unwrap_err();
    assert!(matches!(err, BridgeError::AnyType { ref context } if context == "F"));
    assert!(err.is_unsupported());
}

#[test]
fn test_syntax_error_fails_load() {
    let dir = setup_module();
    let api = dir.path().join("src").join("api");
    let config = BridgeConfig {
        skip_tests: false,
        ..BridgeConfig::ffi()
    };

    let parser = GoSourceParser::with_config(config);
    let err = parser.parse_package(&api, None).unwrap_err();
    assert!(matches!(err, BridgeError::Syntax(..)));
    assert_eq!(parser.metrics().files_failed, 1);
}

#[test]
fn test_missing_go_mod() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.go"), "package a\n").unwrap();

    let parser = GoSourceParser::new();
    let result = parser.parse_package(dir.path(), None);
    assert!(matches!(result, Err(BridgeError::GoModNotFound(_))));
}

#[test]
fn test_empty_package_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("go.mod"), "module example.com/empty\n").unwrap();

    let parser = GoSourceParser::new();
    let result = parser.parse_package(dir.path(), None);
    assert!(matches!(result, Err(BridgeError::NoPackage(_))));
}

#[test]
fn test_generate_model_writes_json_and_timestamp() {
    let dir = setup_module();
    let api = dir.path().join("src").join("api");
    let out = dir.path().join("model.json");
    fs::write(api.join(".timestamp"), "1234").unwrap();

    let package = generate_model(&api, &out, BridgeConfig::ffi()).unwrap();
    assert_eq!(package.naming.timestamp, Some(1234));
    assert_eq!(package.naming.project_name, "example_com_my_api");

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["package"]["pkg_path"], "example.com/my_api/src/api");
    assert_eq!(json["package"]["naming"]["timestamp"], 1234);
    assert_eq!(json["chans"].as_array().unwrap().len(), 1);
    assert_eq!(json["pointers"].as_array().unwrap().len(), 2);
}

#[test]
fn test_generate_model_creates_timestamp() {
    let dir = setup_module();
    let api = dir.path().join("src").join("api");
    let out = dir.path().join("model.json");

    let first = generate_model(&api, &out, BridgeConfig::ffi()).unwrap();
    let stored: i64 = fs::read_to_string(api.join(".timestamp"))
        .unwrap()
        .trim()
        .parse()
        .unwrap();
    assert_eq!(first.naming.timestamp, Some(stored));

    let second = generate_model(&api, &out, BridgeConfig::ffi()).unwrap();
    assert_eq!(second.naming.timestamp, Some(stored));
}
