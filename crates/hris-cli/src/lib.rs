//! Library components for the HRIS admin console CLI.

pub mod logging;
