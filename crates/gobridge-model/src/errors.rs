use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading Go sources or translating them into the bridge model
#[derive(Error, Debug)]
pub enum BridgeError {
    /// `any` cannot cross the FFI boundary
    #[error("Unsupported type `any` in {context}")]
    AnyType { context: String },

    /// Types from other packages are not bridged
    #[error("Unsupported imported type {package}.{name}")]
    ImportedType { package: String, name: String },

    /// `**T` and deeper
    #[error("Unsupported pointer type: *{inner}")]
    DoublePointer { inner: String },

    /// `[N]T`
    #[error("Unsupported fixed-size array: [{len}]{elem}")]
    FixedArray { len: String, elem: String },

    /// `chan<- T` or `<-chan T`
    #[error("Unsupported directional channel: {channel}")]
    DirectionalChannel { channel: String },

    /// Type declaration with type parameters
    #[error("Generic type parameters are not supported on type {name}")]
    GenericType { name: String },

    /// Function declaration with type parameters
    #[error("Generic function {name} is not supported: [{params}]")]
    GenericFunc { name: String, params: String },

    /// Struct without a single exported field
    #[error("Struct {name} has no exported fields")]
    EmptyStruct { name: String },

    /// Anonymous struct or function literal used as a field type
    #[error("Anonymous {kind} literal is not supported in {context}")]
    NestedLiteral { kind: String, context: String },

    /// Any other type expression (maps, interfaces, variadics, ...)
    #[error("Unsupported type: {expr} ({kind})")]
    UnsupportedType { expr: String, kind: String },

    /// A type declaration did not translate to a struct
    #[error("Expected struct type for {name}, got {found}")]
    ExpectedStruct { name: String, found: String },

    /// A function declaration did not translate to a function type
    #[error("Expected function type for {name}, got {found}")]
    ExpectedFunc { name: String, found: String },

    /// Failed to read or write a file
    #[error("IO error on {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// Syntax error in Go source
    #[error("Syntax error in {0}:{1}:{2}: {3}")]
    Syntax(PathBuf, usize, usize, String),

    /// File too large
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    FileTooLarge(PathBuf, usize),

    /// Generic parsing error
    #[error("Parse error in {0}: {1}")]
    Parse(PathBuf, String),

    /// No Go files to load at the given path
    #[error("No Go package found at {0}")]
    NoPackage(PathBuf),

    /// No go.mod in the directory hierarchy
    #[error("No go.mod found above {0}")]
    GoModNotFound(PathBuf),

    /// go.mod without a `module` line
    #[error("No module declaration in {0}")]
    ModuleDeclMissing(PathBuf),

    /// Worker pool for parallel parsing could not be created
    #[error("Failed to create thread pool: {0}")]
    ThreadPool(String),

    /// JSON encoding of the bridge model failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    /// True for errors caused by Go constructs the bridge cannot express
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            BridgeError::AnyType { .. }
                | BridgeError::ImportedType { .. }
                | BridgeError::DoublePointer { .. }
                | BridgeError::FixedArray { .. }
                | BridgeError::DirectionalChannel { .. }
                | BridgeError::GenericType { .. }
                | BridgeError::GenericFunc { .. }
                | BridgeError::EmptyStruct { .. }
                | BridgeError::NestedLiteral { .. }
                | BridgeError::UnsupportedType { .. }
        )
    }
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
