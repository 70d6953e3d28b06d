//! CLI module for the dotlist command-line interface

pub mod args;
pub mod callbacks;
pub mod commands;
