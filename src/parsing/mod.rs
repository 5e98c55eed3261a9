//! Readers that turn assembly files into a stream of [`Record`]s.
//!
//! - **FASTA** (`.fa`, `.fasta`, `.fna`, `.fas`, `.fsa`), plain or
//!   gzip/bgzip compressed, or uncompressed on standard input
//!
//! ## Example
//!
//! ```rust,no_run
//! use assembly_stats::parsing::fasta::FastaSource;
//! use std::path::Path;
//!
//! let source = FastaSource::open(Path::new("assembly.fa.gz")).unwrap();
//! for record in source {
//!     let record = record.unwrap();
//!     println!("{}\t{}", record.id, record.len());
//! }
//! ```
//!
//! [`Record`]: crate::core::record::Record

pub mod fasta;

pub use fasta::{FastaSource, ParseError};
