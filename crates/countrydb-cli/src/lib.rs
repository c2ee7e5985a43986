//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` country directory.
//!
//! This crate primarily provides a binary (`countrydb`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! countrydb --help
//! countrydb countries --region Europe
//! countrydb search fra
//! countrydb country FR --translation deu
//! ```
//!
//! For programmatic access use the [`countrydb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
