//! Core library for the cabling-census command line application.
//!
//! The tool reads one cabling workbook per site and counts the distinct
//! devices each site uses. IO adapters live under [`io`], the record and
//! summary types in [`model`], classification and counting in [`tally`], the
//! sorted report in [`report`], and the run orchestration in [`census`].

pub mod census;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod report;
pub mod site;
pub mod tally;

pub use error::{Result, RowError, ToolError};
