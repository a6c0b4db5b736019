//! Terminal front end for the crossword puzzle.
#![allow(missing_docs, clippy::missing_errors_doc)]

pub mod app;
pub mod prompt;
pub mod render;
pub mod settings;
