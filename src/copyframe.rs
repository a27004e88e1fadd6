//! Main module for copyframe library functionality

pub mod elements;
pub mod formats;
pub mod grouping;
pub mod lexing;
pub mod normalize;
pub mod pipeline;
pub mod resolve;
pub mod sections;
pub mod templates;
pub mod testing;
