// Services module for scaffolding work
pub mod file_writer;
pub mod git;
