use chrono::NaiveDate;
use daily_headlines::errors::{AppError, ScrapeError};
use daily_headlines::journal::HeadlineJournal;
use daily_headlines::ops::{run_daily, RunOutcome};
use daily_headlines::scrape::{default_sources, HeadlineScraper, HeadlineSource};
use mockito::{Mock, ServerGuard};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

/// Nothing listens on port 1, so every request fails to connect.
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

const HOME_PAGE: &str = r#"<html><body>
  <a class="frontpage-link" href="/article/1">  Penn announces new provost  </a>
</body></html>"#;

fn section_page(headline: &str) -> String {
    format!(
        r#"<html><body><div class="row section-article">
  <h3 class="standard-link">{}</h3>
</div></body></html>"#,
        headline
    )
}

fn page(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create()
}

/// Mocks the home page and all four section pages. The squash page has no article.
fn mock_site(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        page(server, "/", 200, HOME_PAGE),
        page(
            server,
            "/section/mens_lacrosse",
            200,
            &section_page("Lacrosse opens season"),
        ),
        page(server, "/section/mens_squash", 200, "<html><body></body></html>"),
        page(
            server,
            "/section/football",
            200,
            &section_page("Football falls to Princeton"),
        ),
        page(
            server,
            "/section/m-soccer",
            200,
            &section_page("Soccer ties Cornell"),
        ),
    ]
}

fn scraper() -> HeadlineScraper {
    HeadlineScraper::new(Duration::from_secs(5)).expect("Failed to build scraper")
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn test_fetch_headline_from_mock_server() {
    let mut server = mockito::Server::new();
    let _mocks = mock_site(&mut server);
    let sources = default_sources(&server.url());

    let headline = scraper().fetch_headline(&sources[0]).unwrap();
    assert_eq!(headline, "Penn announces new provost");

    let headline = scraper().fetch_headline(&sources[3]).unwrap();
    assert_eq!(headline, "Football falls to Princeton");
}

#[test]
fn test_fetch_headline_non_success_status() {
    let mut server = mockito::Server::new();
    let _mock = page(&mut server, "/section/football", 404, "not here");
    let sources = default_sources(&server.url());

    match scraper().fetch_headline(&sources[3]) {
        Err(ScrapeError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/section/football"));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[test]
fn test_daily_run_records_and_saves() {
    let mut server = mockito::Server::new();
    let mocks = mock_site(&mut server);
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("h.json");

    let mut journal = HeadlineJournal::open(&path).unwrap();
    let outcome = run_daily(
        &mut journal,
        &scraper(),
        &default_sources(&server.url()),
        run_date(),
        false,
    )
    .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Recorded {
            date: run_date(),
            fields: 5,
            saved: true
        }
    );
    for mock in &mocks {
        mock.assert();
    }

    let reopened = HeadlineJournal::open(&path).unwrap();
    let record = reopened.get(run_date()).expect("record should be saved");
    assert_eq!(record["home_headline"], "Penn announces new provost");
    assert_eq!(record["lacrosse_headline"], "Lacrosse opens season");
    assert_eq!(record["squash_headline"], "");
    assert_eq!(record["football_headline"], "Football falls to Princeton");
    assert_eq!(record["soccer_headline"], "Soccer ties Cornell");
}

#[test]
fn test_daily_run_blanks_field_for_error_status() {
    let mut server = mockito::Server::new();
    let _home = page(&mut server, "/", 200, HOME_PAGE);
    let _lacrosse = page(
        &mut server,
        "/section/mens_lacrosse",
        200,
        &section_page("Lacrosse opens season"),
    );
    let _squash = page(&mut server, "/section/mens_squash", 200, &section_page("Squash wins"));
    let _football = page(
        &mut server,
        "/section/football",
        200,
        &section_page("Football falls to Princeton"),
    );
    let _soccer = page(&mut server, "/section/m-soccer", 404, "not here");
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("h.json");

    let mut journal = HeadlineJournal::open(&path).unwrap();
    let outcome = run_daily(
        &mut journal,
        &scraper(),
        &default_sources(&server.url()),
        run_date(),
        false,
    )
    .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Recorded {
            date: run_date(),
            fields: 5,
            saved: true
        }
    );
    let reopened = HeadlineJournal::open(&path).unwrap();
    let record = reopened.get(run_date()).expect("record should be saved");
    assert_eq!(record["home_headline"], "Penn announces new provost");
    assert_eq!(record["football_headline"], "Football falls to Princeton");
    assert_eq!(record["soccer_headline"], "");
}

#[test]
fn test_daily_run_skips_when_site_is_unreachable() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("h.json");
    let previous = "{\n  \"2023-12-31\": {\n    \"home_headline\": \"Yesterday\"\n  }\n}\n";
    fs::write(&path, previous).unwrap();

    let mut journal = HeadlineJournal::open(&path).unwrap();
    let outcome = run_daily(
        &mut journal,
        &scraper(),
        &default_sources(UNREACHABLE_URL),
        run_date(),
        false,
    )
    .unwrap();

    assert_eq!(outcome, RunOutcome::Skipped);
    assert!(journal.get(run_date()).is_none());
    assert_eq!(fs::read_to_string(&path).unwrap(), previous);
}

#[test]
fn test_daily_run_invalid_selector_is_an_error() {
    let mut server = mockito::Server::new();
    let _home = page(&mut server, "/", 200, HOME_PAGE);
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("h.json");
    let sources = vec![HeadlineSource::new("home_headline", server.url(), "div..broken")];

    let mut journal = HeadlineJournal::open(&path).unwrap();
    let result = run_daily(&mut journal, &scraper(), &sources, run_date(), false);

    match result {
        Err(AppError::Scrape(ScrapeError::Selector { selector, .. })) => {
            assert_eq!(selector, "div..broken");
        }
        other => panic!("Expected selector error, got {:?}", other),
    }
    assert!(journal.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_daily_run_dry_run_does_not_save() {
    let mut server = mockito::Server::new();
    let _mocks = mock_site(&mut server);
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("h.json");

    let mut journal = HeadlineJournal::open(&path).unwrap();
    let outcome = run_daily(
        &mut journal,
        &scraper(),
        &default_sources(&server.url()),
        run_date(),
        true,
    )
    .unwrap();

    assert!(matches!(outcome, RunOutcome::Recorded { saved: false, .. }));
    assert!(journal.get(run_date()).is_some());
    assert!(!path.exists());
}

#[test]
fn test_daily_run_replaces_same_day_record() {
    let mut server = mockito::Server::new();
    let _mocks = mock_site(&mut server);
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("h.json");
    fs::write(
        &path,
        r#"{"2024-01-01": {"home_headline": "Morning", "stale_field": "x"}}"#,
    )
    .unwrap();

    let mut journal = HeadlineJournal::open(&path).unwrap();
    run_daily(
        &mut journal,
        &scraper(),
        &default_sources(&server.url()),
        run_date(),
        false,
    )
    .unwrap();

    let reopened = HeadlineJournal::open(&path).unwrap();
    let record = reopened.get(run_date()).unwrap();
    assert_eq!(record["home_headline"], "Penn announces new provost");
    assert!(!record.contains_key("stale_field"));
    assert_eq!(reopened.len(), 1);
}
