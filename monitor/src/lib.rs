pub mod config;
pub mod errors;

pub mod puller;
#[cfg(test)]
mod puller_test;

pub mod app;
