//! Command implementations.

pub mod demo;
pub mod extract;
pub mod info;
pub mod repl;

pub use demo::DemoArgs;
pub use extract::ExtractArgs;
pub use repl::ReplArgs;
