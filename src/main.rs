// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use marksift::collection::read_records;
use marksift::{
    split_highlighted, BreakerKind, IndexConfig, MatchPosition, MatchingAlgorithm, QueryNode,
    TitleCollection, TitleIndex,
};

mod cli;
use cli::display::{highlight_title, kv_row, muted_color, row, section_bot, section_top, themed};
use cli::{Cli, Commands};

/// Log filter variable, e.g. `MARKSIFT_LOG=marksift=debug`.
const LOG_ENV: &str = "MARKSIFT_LOG";

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.always_prefix, cli.tokenizer)?;
    tracing::debug!(?config, "effective configuration");

    match cli.command {
        Commands::Search {
            titles,
            query,
            limit,
            json,
        } => run_search(&config, &titles, &query, limit, json),
        Commands::Inspect { titles, top } => run_inspect(&config, &titles, top),
        Commands::Parse { query } => run_parse(&config, &query),
    }
}

/// Config file first, then command-line overrides.
fn load_config(
    path: Option<&Path>,
    always_prefix: bool,
    tokenizer: Option<BreakerKind>,
) -> Result<IndexConfig> {
    let mut config = match path {
        Some(path) => IndexConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => IndexConfig::default(),
    };
    if always_prefix {
        config.matching = MatchingAlgorithm::AlwaysPrefixSearch;
    }
    if let Some(kind) = tokenizer {
        config.tokenizer = kind;
    }
    Ok(config)
}

fn load_collection(config: &IndexConfig, titles: &Path) -> Result<TitleCollection<u64>> {
    let records = read_records(titles)
        .with_context(|| format!("Failed to read titles from {}", titles.display()))?;
    let total = records.len();

    let start = Instant::now();
    let mut collection = TitleCollection::with_index(TitleIndex::from_config(config)?);
    let indexed = collection.extend_records(records);
    tracing::info!(
        total,
        indexed,
        terms = collection.index().term_count(),
        elapsed = ?start.elapsed(),
        "titles indexed"
    );
    Ok(collection)
}

#[derive(Serialize)]
struct SearchHit<'a> {
    id: u64,
    title: &'a str,
    positions: &'a [MatchPosition],
    highlights: Vec<&'a str>,
}

fn run_search(
    config: &IndexConfig,
    titles: &Path,
    query: &str,
    limit: usize,
    json: bool,
) -> Result<()> {
    let collection = load_collection(config, titles)?;

    let start = Instant::now();
    let matches = collection.find_matches(query, limit);
    let elapsed = start.elapsed();

    let hits: Vec<SearchHit<'_>> = matches
        .iter()
        .filter_map(|m| {
            let title = collection.get(&m.doc)?;
            let highlights = split_highlighted(title, &m.title_positions)
                .into_iter()
                .filter_map(|(piece, matched)| matched.then_some(piece))
                .collect();
            Some(SearchHit {
                id: m.doc,
                title,
                positions: &m.title_positions,
                highlights,
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!();
    section_top(&format!("SEARCH \"{}\"", query));
    if hits.is_empty() {
        row(&format!(" {}", themed(muted_color, &[], "no matches")));
    }
    for hit in &hits {
        row(&format!(
            " {} {}",
            themed(muted_color, &[], &format!("{:>6}", hit.id)),
            highlight_title(hit.title, hit.positions)
        ));
    }
    section_bot();
    println!(
        "  {} of {} titles, {:.2} ms",
        hits.len(),
        collection.len(),
        elapsed.as_secs_f64() * 1000.0
    );
    println!();
    Ok(())
}

fn run_inspect(config: &IndexConfig, titles: &Path, top: usize) -> Result<()> {
    let collection = load_collection(config, titles)?;
    let index = collection.index();

    let mut terms: Vec<(&str, usize)> = index.terms().map(|(term, docs)| (term, docs.len())).collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let postings: usize = terms.iter().map(|(_, count)| count).sum();
    let avg = if terms.is_empty() {
        0.0
    } else {
        postings as f64 / terms.len() as f64
    };

    println!();
    section_top("INDEX");
    kv_row("Titles", &collection.len().to_string());
    kv_row("Indexed", &index.len().to_string());
    kv_row("Terms", &index.term_count().to_string());
    kv_row("Postings", &postings.to_string());
    kv_row("Docs per term", &format!("{:.2}", avg));
    kv_row("Tokenizer", config.tokenizer.name());
    kv_row("Matching", &format!("{:?}", config.matching));
    section_bot();

    section_top(&format!("TOP {} TERMS", top.min(terms.len())));
    for (term, count) in terms.iter().take(top) {
        kv_row(term, &count.to_string());
    }
    section_bot();
    println!();
    Ok(())
}

fn run_parse(config: &IndexConfig, query: &str) -> Result<()> {
    let parser = config.parser();
    let (sqlite, words) = parser.parse_query(query)?;
    let nodes = parser.parse_query_nodes(query)?;
    let extracted = parser.extract_query_words(query)?;

    println!();
    section_top("QUERY");
    kv_row("Input", query);
    kv_row("SQLite", &sqlite);
    kv_row("Word count", &words.to_string());
    kv_row("Words", &extracted.join(" "));
    section_bot();

    section_top("NODES");
    for node in &nodes {
        row(&format!(" {} {}", themed(muted_color, &[], node_kind(node)), node));
    }
    section_bot();
    println!();
    Ok(())
}

fn node_kind(node: &QueryNode) -> &'static str {
    match node {
        QueryNode::Term(term) if term.is_prefix() => "prefix",
        QueryNode::Term(_) => "exact ",
        QueryNode::List(_) => "list  ",
        QueryNode::Phrase(_) => "phrase",
    }
}
