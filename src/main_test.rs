use clap::CommandFactory;

use super::*;

struct TermSearch {
    fail_on: Option<&'static str>,
}

#[async_trait::async_trait(?Send)]
impl ImageSearch for TermSearch {
    async fn search(&self, term: &str) -> Result<Vec<pins::Pin>, SearchError> {
        if self.fail_on == Some(term) {
            return Err(SearchError::Request("connection reset".into()));
        }
        Ok((0..10).map(|i| pins::Pin::with_regular(format!("https://img.test/{term}/{i}"))).collect())
    }
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parses_search_terms_and_flags() {
    let cli = Cli::try_parse_from(["pinboard", "--access-key", "k", "--json", "--seed", "9", "search", "ocean", "red fox"])
        .unwrap();
    assert!(cli.json);
    assert_eq!(cli.seed, Some(9));
    match cli.command {
        Command::Search { terms } => assert_eq!(terms, vec!["ocean", "red fox"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn search_requires_at_least_one_term() {
    assert!(Cli::try_parse_from(["pinboard", "search"]).is_err());
}

#[test]
fn unsplash_config_requires_access_key() {
    let cli = Cli::try_parse_from(["pinboard", "--access-key", " ", "feed"]).unwrap();
    assert!(matches!(cli.unsplash_config(), Err(CliError::Search(SearchError::MissingAccessKey { .. }))));
}

#[test]
fn zero_page_size_flag_is_rejected() {
    let err = Cli::try_parse_from(["pinboard", "--access-key", "k", "--per-page", "0", "feed"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(err.to_string().contains("invalid UNSPLASH_PER_PAGE: 0"));
}

#[test]
fn unsplash_config_carries_flags() {
    let cli = Cli::try_parse_from([
        "pinboard",
        "--access-key",
        "k",
        "--base-url",
        "http://localhost:9000/",
        "--per-page",
        "30",
        "--request-timeout-secs",
        "3",
        "feed",
    ])
    .unwrap();
    let cfg = cli.unsplash_config().unwrap();
    assert_eq!(cfg.access_key, "k");
    assert_eq!(cfg.base_url, "http://localhost:9000");
    assert_eq!(cfg.per_page, 30);
    assert_eq!(cfg.timeouts.request_secs, 3);
}

#[tokio::test]
async fn build_board_loads_defaults_then_prepends_searches() {
    let search = TermSearch { fail_on: None };
    let mut rng = StdRng::seed_from_u64(5);

    let feed = build_board(&search, &["mountains".to_owned()], &mut rng).await.unwrap();

    assert_eq!(feed.len(), 50);
}

#[tokio::test]
async fn build_board_skips_failed_search() {
    let search = TermSearch { fail_on: Some("mountains") };
    let mut rng = StdRng::seed_from_u64(5);

    let feed = build_board(&search, &["mountains".to_owned(), "lakes".to_owned()], &mut rng).await.unwrap();

    assert_eq!(feed.len(), 50);
}

#[tokio::test]
async fn build_board_fails_when_initial_load_fails() {
    let search = TermSearch { fail_on: Some("Tokyo") };
    let mut rng = StdRng::seed_from_u64(5);

    let err = build_board(&search, &[], &mut rng).await.unwrap_err();
    assert!(matches!(err, SearchError::Request(_)));
}
