pub mod file_handler;
pub mod log;
