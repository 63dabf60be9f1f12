//! Integration tests for the scraper
//!
//! These tests use wiremock to serve a fake workbook and drive the full
//! discover-then-extract cycle end-to-end.

use std::time::{Duration, Instant};
use tempfile::TempDir;
use workbook_scraper::config::{Config, OutputConfig, ScraperConfig, SiteConfig};
use workbook_scraper::crawler::{run_scrape, Coordinator};
use workbook_scraper::output::write_outputs;
use workbook_scraper::{ExerciseRecord, FetchError, ScrapeTree, WorkbookError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOOK_PATH: &str = "/books/focus-2-workbook";

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, max_exercises: Option<usize>) -> Config {
    Config {
        site: SiteConfig {
            base_url: base_url.to_string(),
            book_path: BOOK_PATH.to_string(),
        },
        scraper: ScraperConfig {
            delay_seconds: 0.0,
            max_exercises,
            user_agent: "TestBrowser/1.0".to_string(),
        },
        output: OutputConfig::default(),
    }
}

type Card<'a> = (Option<&'a str>, &'a [(&'a str, &'a str)]);

fn card<'a>(title: Option<&'a str>, links: &'a [(&'a str, &'a str)]) -> Card<'a> {
    (title, links)
}

/// Builds a landing page; a `None` title renders a card without a header
fn landing_page(cards: &[Card<'_>]) -> String {
    let mut html = String::from("<html><body><div class=\"accordion\">");
    for (title, links) in cards {
        html.push_str("<div class=\"card\">");
        if let Some(title) = title {
            html.push_str(&format!(
                "<div class=\"accordion-header\"><button><p>{}</p></button></div>",
                title
            ));
        }
        html.push_str("<div class=\"card-body\"><ul>");
        for (text, href) in links.iter() {
            html.push_str(&format!("<li><a href=\"{}\">{}</a></li>", href, text));
        }
        html.push_str("</ul></div></div>");
    }
    html.push_str("</div></body></html>");
    html
}

fn exercise_page(question: Option<&str>, answer: Option<&str>) -> String {
    let mut html = String::from("<html><body>");
    if let Some(question) = question {
        html.push_str(&format!(
            "<div id=\"question\" class=\"card\"><div class=\"card-body\">{}</div></div>",
            question
        ));
    }
    if let Some(answer) = answer {
        html.push_str(&format!(
            "<div id=\"solution\" class=\"card\"><div class=\"card-body\">{}</div></div>",
            answer
        ));
    }
    html.push_str("</body></html>");
    html
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

async fn mount_exercise(server: &MockServer, page_path: &str, answer: &str) {
    mount_page(
        server,
        page_path,
        exercise_page(Some("<p>Question</p>"), Some(answer)),
    )
    .await;
}

fn exercise_titles(tree: &ScrapeTree, section: &str) -> Vec<String> {
    tree.section(section)
        .map(|s| s.exercises.keys().cloned().collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_full_scrape_preserves_order_and_records_failures() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        BOOK_PATH,
        landing_page(&[
            card(
                Some("Unit 1 Personality"),
                &[("1.1 Vocabulary", "/ex/1-1"), ("1.2 Grammar", "/ex/1-2")],
            ),
            card(None, &[("Orphan", "/ex/orphan")]),
            card(Some("Unit 2 Wonders"), &[("2.1 Reading", "/ex/2-1")]),
            card(Some("Revision"), &[]),
        ]),
    )
    .await;

    mount_page(
        &mock_server,
        "/ex/1-1",
        exercise_page(
            Some("<p>Complete the text.</p><p>1. She ___ kind.</p>"),
            Some("<ol><li>1. is</li><li>2. was</li></ol>"),
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/ex/1-2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_exercise(&mock_server, "/ex/2-1", "<p>- true</p><p>- false</p>").await;

    Mock::given(method("GET"))
        .and(path("/ex/orphan"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), None);
    let tree = run_scrape(config).await.expect("Scrape failed");

    let sections: Vec<_> = tree.sections().map(|(t, _)| t.clone()).collect();
    assert_eq!(sections, vec!["Unit 1 Personality", "Unit 2 Wonders", "Revision"]);

    assert_eq!(
        exercise_titles(&tree, "Unit 1 Personality"),
        vec!["1.1 Vocabulary", "1.2 Grammar"]
    );
    assert!(tree.section("Revision").unwrap().exercises.is_empty());

    match tree.exercise("Unit 1 Personality", "1.1 Vocabulary").unwrap() {
        ExerciseRecord::Content(content) => {
            assert_eq!(
                content.question.as_deref(),
                Some("Complete the text.\n1. She ___ kind.")
            );
            assert_eq!(content.answer.as_deref(), Some("1. is\n2. was"));
        }
        other => panic!("expected content, got {:?}", other),
    }

    match tree.exercise("Unit 1 Personality", "1.2 Grammar").unwrap() {
        ExerciseRecord::Failed { error } => {
            assert!(error.contains("500"), "unexpected error: {}", error);
            assert!(error.contains("/ex/1-2"), "unexpected error: {}", error);
        }
        other => panic!("expected failure, got {:?}", other),
    }

    // The failure did not stop later exercises
    assert_eq!(
        tree.exercise("Unit 2 Wonders", "2.1 Reading")
            .unwrap()
            .answer_text(),
        Some("- true\n- false")
    );
    assert_eq!(tree.exercise_count(), 3);
    assert_eq!(tree.failed_count(), 1);
}

#[tokio::test]
async fn test_max_exercises_stops_mid_section() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        BOOK_PATH,
        landing_page(&[
            card(
                Some("Unit 1"),
                &[("A", "/ex/a"), ("B", "/ex/b"), ("C", "/ex/c")],
            ),
            card(Some("Unit 2"), &[("D", "/ex/d")]),
        ]),
    )
    .await;

    mount_exercise(&mock_server, "/ex/a", "a").await;
    mount_exercise(&mock_server, "/ex/b", "b").await;
    for unvisited in ["/ex/c", "/ex/d"] {
        Mock::given(method("GET"))
            .and(path(unvisited))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
    }

    let config = create_test_config(&mock_server.uri(), Some(2));
    let tree = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(tree.len(), 1);
    assert_eq!(exercise_titles(&tree, "Unit 1"), vec!["A", "B"]);
    assert!(tree.section("Unit 2").is_none());
}

#[tokio::test]
async fn test_max_exercises_counts_failures() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        BOOK_PATH,
        landing_page(&[
            card(Some("Unit 1"), &[("A", "/ex/a")]),
            card(Some("Unit 2"), &[("B", "/ex/b"), ("C", "/ex/c")]),
        ]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/ex/a"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mount_exercise(&mock_server, "/ex/b", "b").await;

    let config = create_test_config(&mock_server.uri(), Some(2));
    let tree = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(tree.exercise_count(), 2);
    assert!(tree.exercise("Unit 1", "A").unwrap().is_failed());
    assert_eq!(exercise_titles(&tree, "Unit 2"), vec!["B"]);
}

#[tokio::test]
async fn test_cap_larger_than_workbook_scrapes_everything() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        BOOK_PATH,
        landing_page(&[card(Some("Unit 1"), &[("A", "/ex/a")])]),
    )
    .await;
    mount_exercise(&mock_server, "/ex/a", "a").await;

    let config = create_test_config(&mock_server.uri(), Some(10));
    let tree = run_scrape(config).await.expect("Scrape failed");

    assert_eq!(tree.exercise_count(), 1);
}

#[tokio::test]
async fn test_discovery_failure_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(BOOK_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), None);
    let result = run_scrape(config).await;

    match result {
        Err(WorkbookError::Fetch(FetchError::Status { status, url, .. })) => {
            assert_eq!(status, 404);
            assert!(url.ends_with(BOOK_PATH));
        }
        other => panic!("expected discovery failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_regions_are_not_errors() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        BOOK_PATH,
        landing_page(&[card(Some("Unit 1"), &[("A", "/ex/a"), ("B", "/ex/b")])]),
    )
    .await;
    mount_page(&mock_server, "/ex/a", exercise_page(Some("Only a question"), None)).await;
    mount_page(&mock_server, "/ex/b", exercise_page(None, None)).await;

    let config = create_test_config(&mock_server.uri(), None);
    let tree = run_scrape(config).await.expect("Scrape failed");

    match tree.exercise("Unit 1", "A").unwrap() {
        ExerciseRecord::Content(content) => {
            assert_eq!(content.question.as_deref(), Some("Only a question"));
            assert_eq!(content.answer, None);
        }
        other => panic!("expected content, got {:?}", other),
    }
    assert_eq!(tree.failed_count(), 0);
}

#[tokio::test]
async fn test_delay_applies_after_every_attempt() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        BOOK_PATH,
        landing_page(&[card(Some("Unit 1"), &[("A", "/ex/a"), ("B", "/ex/b")])]),
    )
    .await;
    mount_exercise(&mock_server, "/ex/a", "a").await;
    Mock::given(method("GET"))
        .and(path("/ex/b"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), None);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");

    let start = Instant::now();
    coordinator
        .scrape_all(Duration::from_millis(100), None)
        .await
        .expect("Scrape failed");

    assert!(start.elapsed() >= Duration::from_millis(200));
    assert_eq!(coordinator.tree().exercise_count(), 2);
}

#[tokio::test]
async fn test_outputs_written_and_json_round_trips() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        BOOK_PATH,
        landing_page(&[card(
            Some("Unit 1 Życie"),
            &[("1.1 Słówka", "/ex/a"), ("1.2", "/ex/b")],
        )]),
    )
    .await;
    mount_exercise(&mock_server, "/ex/a", "<p>1. żółty</p><p>• zielony</p>").await;
    Mock::given(method("GET"))
        .and(path("/ex/b"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&mock_server.uri(), None);
    config.output.directory = dir.path().join("data");
    let output = config.output.clone();

    let tree = run_scrape(config).await.expect("Scrape failed");
    let written = write_outputs(&tree, &output).expect("Failed to write outputs");
    assert_eq!(written.len(), 3);

    let json = std::fs::read_to_string(output.directory.join("focus_2_workbook.json"))
        .expect("Failed to read JSON");
    assert!(json.contains("żółty"));
    let parsed: ScrapeTree = serde_json::from_str(&json).expect("Failed to parse JSON");
    assert_eq!(parsed, tree);

    let markdown = std::fs::read_to_string(output.directory.join("focus_2_workbook.md"))
        .expect("Failed to read Markdown");
    assert!(markdown.contains("## Unit 1 Życie\n\n### 1.1 Słówka\n\nżółty\nzielony\n\n"));
    assert!(markdown.contains("### 1.2\n\n\n"));

    let text = std::fs::read_to_string(output.directory.join("focus_2_workbook.txt"))
        .expect("Failed to read text");
    assert!(text.contains("Unit 1 Życie\n============\n\n"));
    assert!(text.contains("1.1 Słówka\n----------\n\n1. żółty\n• zielony\n\n\n"));
}
