//! Main module for manifest library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod testing;
