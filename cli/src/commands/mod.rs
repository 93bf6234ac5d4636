//! CLI command implementations

pub mod href;
pub mod navigate;
pub mod resolve;
pub mod routes;
pub mod shell;

pub use href::href_command;
pub use navigate::navigate_command;
pub use resolve::resolve_command;
pub use routes::routes_command;
pub use shell::shell_command;
