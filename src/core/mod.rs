pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod paths;
pub mod preprocess;
pub mod remote;
pub mod session;
pub mod solver;
