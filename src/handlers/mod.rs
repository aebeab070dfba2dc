// handlers/mod.rs - one module per resource
//
// Every handler runs exactly one storage statement and renders the
// `{results, message}` envelope through `ApiResponse`.
pub mod characters;
pub mod favorites;
pub mod planets;
pub mod root;
pub mod users;
