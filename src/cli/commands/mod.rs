pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod save;
pub mod set;
pub mod show;
