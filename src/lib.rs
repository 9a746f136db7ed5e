pub mod aggregate;
pub mod cache;
pub mod config;
pub mod dataset;
pub mod explore;
pub mod fetch;
pub mod output;
pub mod render;
pub mod utility;
