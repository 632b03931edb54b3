//! be - a small modal, line-oriented terminal text editor

pub mod action;
pub mod buffer;
pub mod cli;
pub mod command_line;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod executor;
pub mod file_io;
pub mod key;
pub mod keymap;
pub mod message;
pub mod mode;
pub mod render;
pub mod session;
pub mod status;
pub mod term;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;
