//! Command line front end for the cxxlex lexer.

pub mod error;
pub mod vocab;
