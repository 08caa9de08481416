//! nb2pdf: interactive batch conversion of Jupyter notebooks to PDF,
//! with optional merging of the results into a single document.

pub mod cli;
pub mod pipeline;
pub mod utils;
