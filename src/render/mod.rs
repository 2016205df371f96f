//! Plain-text rendering of reports for the terminal. Every function returns
//! the finished text; printing is left to the caller.

pub mod charts;
pub mod tables;
