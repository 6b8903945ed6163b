#[macro_use]
pub mod console;
pub mod errors;
pub mod repl;
pub mod sql;
pub mod storage;
