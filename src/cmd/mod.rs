pub mod context;
pub mod init;
pub mod query;
pub mod time;
