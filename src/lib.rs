pub mod config;
pub mod course;
pub mod fs;
pub mod order;
pub mod season;
pub mod tree;
pub mod video;
pub mod walker;
