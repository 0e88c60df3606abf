pub mod config;
pub mod logging;

pub mod classify;
pub mod domain;
pub mod http;
pub mod report;
pub mod scan;
pub mod sources;
