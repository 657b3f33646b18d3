pub mod context;
pub mod file_utils;
pub mod query;
pub mod submitter;
pub mod timeword;
