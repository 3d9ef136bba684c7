//! Configuration files change how titles are indexed and matched.

use std::io::Write;

use marksift::{BreakerKind, Error, IndexConfig, MatchingAlgorithm, TitleIndex};

use super::common::{doc_ids, BOOKMARKS};

fn index_with(config: &IndexConfig) -> TitleIndex<usize> {
    let mut index = TitleIndex::from_config(config).unwrap();
    for (id, title) in BOOKMARKS.iter().enumerate() {
        index.add(id, title).unwrap();
    }
    index
}

fn config_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[test]
fn config_file_round_trip() {
    let file = config_file(
        r#"{"tokenizer": "simple", "matching": "always-prefix", "max_match_branches": 64}"#,
    );
    let config = IndexConfig::from_path(file.path()).unwrap();
    assert_eq!(config.tokenizer, BreakerKind::Simple);
    assert_eq!(config.matching, MatchingAlgorithm::AlwaysPrefixSearch);
    assert_eq!(config.max_match_branches, Some(64));
    assert_eq!(config.max_title_len, None);
    assert!(!config.nfkc);
}

#[test]
fn simple_tokenizer_splits_dotted_words() {
    let config = IndexConfig {
        tokenizer: BreakerKind::Simple,
        ..IndexConfig::default()
    };
    let index = index_with(&config);
    assert_eq!(doc_ids(&index.search("io", 10)), vec![5]);
    assert_eq!(doc_ids(&index.search("\"crates io\"", 10)), vec![5]);
}

#[test]
fn always_prefix_lifts_the_length_rule() {
    let config = IndexConfig {
        matching: MatchingAlgorithm::AlwaysPrefixSearch,
        ..IndexConfig::default()
    };
    let index = index_with(&config);
    assert_eq!(doc_ids(&index.search("ru", 100)), vec![0, 1, 2, 3, 5, 6, 9]);
    assert_eq!(doc_ids(&index.search("t", 100)), vec![0, 3, 6, 7, 8]);
}

#[test]
fn branch_cap_limits_candidates() {
    let config = IndexConfig {
        max_match_branches: Some(2),
        ..IndexConfig::default()
    };
    let mut index: TitleIndex<usize> = TitleIndex::from_config(&config).unwrap();
    for (id, title) in ["abc1 xyz", "abc2 xyz", "abc3 xyz", "abc4 xyz"].iter().enumerate() {
        index.add(id, title).unwrap();
    }
    let capped = doc_ids(&index.search("abc xyz", 10));
    assert!(!capped.is_empty());
    assert!(capped.len() <= 2);
    for doc in &capped {
        assert!(index.title(doc).unwrap().starts_with("abc"));
    }

    let mut uncapped: TitleIndex<usize> = TitleIndex::new();
    for (id, title) in ["abc1 xyz", "abc2 xyz", "abc3 xyz", "abc4 xyz"].iter().enumerate() {
        uncapped.add(id, title).unwrap();
    }
    assert_eq!(doc_ids(&uncapped.search("abc xyz", 10)), vec![0, 1, 2, 3]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn nfkc_folds_ligatures() {
    let titles = ["\u{FB01}nance Report", "finance memo"];

    let mut plain: TitleIndex<usize> = TitleIndex::new();
    let nfkc_config = IndexConfig {
        nfkc: true,
        ..IndexConfig::default()
    };
    let mut folded = TitleIndex::from_config(&nfkc_config).unwrap();
    for (id, title) in titles.iter().enumerate() {
        plain.add(id, title).unwrap();
        folded.add(id, title).unwrap();
    }

    assert_eq!(doc_ids(&plain.search("fin", 10)), vec![1]);
    let found = folded.search("fin", 10);
    assert_eq!(doc_ids(&found), vec![0, 1]);
    assert!(found[0].title_positions.is_empty());
    assert!(!found[1].title_positions.is_empty());
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        IndexConfig::from_json_str(r#"{"max_match_branches": 0}"#),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        IndexConfig::from_json_str(r#"{"max_title_len": 0}"#),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        IndexConfig::from_json_str(r#"{"tokeniser": "simple"}"#),
        Err(Error::Json(_))
    ));
    assert!(matches!(
        IndexConfig::from_json_str(r#"{"matching": "fuzzy"}"#),
        Err(Error::Json(_))
    ));
    assert!(matches!(
        IndexConfig::from_path("/nonexistent/marksift.json"),
        Err(Error::Io(_))
    ));
}

#[test]
fn tokenizer_names_parse() {
    assert_eq!(BreakerKind::try_from("simple").unwrap(), BreakerKind::Simple);
    assert_eq!(BreakerKind::try_from("unicode-word").unwrap(), BreakerKind::UnicodeWord);
    assert!(BreakerKind::try_from("icu").is_err());
}
