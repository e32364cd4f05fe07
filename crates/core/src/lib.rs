//! Core library for varblock
//!
//! This crate implements the **Functional Core** of the varblock application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`varblock_core`** (this crate): Pure transformation functions with zero I/O
//! - **`varblock`**: Input reading, format selection, logging and process exit
//!
//! All functions in this crate are total: any text input produces some output,
//! malformed nesting included. Diagnostics are returned as data, never logged.
//!
//! # Module Organization
//!
//! - [`varblock`]: Extraction of `<var>` configuration blocks from Hyvä UI
//!   component READMEs, common-prefix stripping and table/Markdown/JSON rendering
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use varblock_core::varblock::{parse_var_block, render, strip_common_prefix, OutputFormat};
//!
//! let xml = "<var name=\"slider\">\n  <var name=\"loop\">true</var>\n</var>\n";
//! let options = strip_common_prefix(parse_var_block(xml));
//! print!("{}", render(&options, OutputFormat::Markdown));
//! ```

pub mod varblock;
