/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression sum type, operators and constructors
/// - expressions: Payload structs for the compound expressions
/// - printer: Indented tree rendering via `Display`
pub mod ast;
pub mod expressions;
pub mod printer;
