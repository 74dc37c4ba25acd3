//! Thin I/O surfaces around the domain, currently the CSV batch-quoting
//! pipeline used by the CLI.

pub mod csv;
