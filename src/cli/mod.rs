// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the marksift command-line interface.
//!
//! Three subcommands: `search` to run a query against a title file, `inspect`
//! to summarize the term map built from it, and `parse` to show how a query is
//! understood. Index behavior comes from an optional JSON config file, with a
//! few flags layered on top.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use marksift::BreakerKind;

#[derive(Parser)]
#[command(
    name = "marksift",
    about = "Incremental prefix search over bookmark and page titles",
    version
)]
pub struct Cli {
    /// JSON index configuration (tokenizer, matching, limits)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat every query word as a prefix, however short
    #[arg(long, global = true)]
    pub always_prefix: bool,

    /// Word breaker for titles and queries
    #[arg(long, global = true, value_enum)]
    pub tokenizer: Option<BreakerKind>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a title file and display highlighted results
    Search {
        /// Title file: JSON array of {id, title}, or one title per line
        titles: PathBuf,

        /// Search query (quote words to match a phrase exactly)
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize the index built from a title file
    Inspect {
        /// Title file: JSON array of {id, title}, or one title per line
        titles: PathBuf,

        /// Number of most frequent terms to list
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Show how a query is parsed
    Parse {
        /// Search query
        query: String,
    },
}
