//! Scrape coordinator - main orchestration logic
//!
//! This module contains the scrape loop that coordinates:
//! - Discovering sections and exercises from the landing page
//! - Extracting every exercise in landing-page order
//! - Recording per-exercise failures without stopping the run
//! - Pausing after every attempt and honoring the exercise cap

use crate::config::Config;
use crate::crawler::parser::{parse_exercise, parse_sections};
use crate::crawler::{build_http_client, fetch_page};
use crate::workbook::{ExerciseContent, ExerciseRecord, ScrapeTree, SectionIndex};
use crate::WorkbookError;
use reqwest::Client;
use std::time::Duration;

/// Main scrape coordinator structure
///
/// Owns the HTTP client and the tree being built. The tree stays available
/// through [`Coordinator::tree`] after [`Coordinator::scrape_all`] returns.
pub struct Coordinator {
    config: Config,
    client: Client,
    tree: ScrapeTree,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(WorkbookError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, WorkbookError> {
        let client = build_http_client(&config.scraper)?;

        Ok(Self {
            config,
            client,
            tree: ScrapeTree::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The tree accumulated so far
    pub fn tree(&self) -> &ScrapeTree {
        &self.tree
    }

    pub fn into_tree(self) -> ScrapeTree {
        self.tree
    }

    /// Fetches the landing page and lists its sections and exercises
    pub async fn discover_sections(&self) -> Result<SectionIndex, WorkbookError> {
        let url = self.config.book_url();
        let body = fetch_page(&self.client, &url).await?;
        parse_sections(&body)
    }

    /// Fetches one exercise page and extracts its question and answer
    ///
    /// # Arguments
    ///
    /// * `relative_url` - Exercise link as found on the landing page
    pub async fn extract_content(&self, relative_url: &str) -> Result<ExerciseContent, WorkbookError> {
        let url = self.config.exercise_url(relative_url);
        let body = fetch_page(&self.client, &url).await?;
        parse_exercise(&body)
    }

    /// Runs the main scrape loop
    ///
    /// Sections and exercises are visited in discovery order. A failing
    /// exercise is recorded as an error and the loop moves on. After every
    /// attempt the loop sleeps for `delay`; once `max_exercises` attempts
    /// have been made it stops, leaving a partial tree.
    ///
    /// # Arguments
    ///
    /// * `delay` - Pause after each exercise attempt
    /// * `max_exercises` - Optional cap on exercise attempts
    ///
    /// # Returns
    ///
    /// * `Ok(&ScrapeTree)` - The accumulated tree
    /// * `Err(WorkbookError)` - Discovery failed
    pub async fn scrape_all(
        &mut self,
        delay: Duration,
        max_exercises: Option<usize>,
    ) -> Result<&ScrapeTree, WorkbookError> {
        tracing::info!("Getting all sections from {}", self.config.book_url());
        let sections = self.discover_sections().await?;
        tracing::info!("Found {} sections", sections.len());

        let total_exercises: usize = sections.values().map(|links| links.len()).sum();
        let target = match max_exercises {
            Some(max) => {
                tracing::info!(
                    "Will scrape up to {} of {} exercises",
                    max,
                    total_exercises
                );
                total_exercises.min(max)
            }
            None => {
                tracing::info!("Found {} exercises in total", total_exercises);
                total_exercises
            }
        };

        let mut exercise_count = 0;

        for (section_title, exercises) in &sections {
            self.tree.section_mut(section_title);

            for (exercise_title, exercise_url) in exercises {
                tracing::info!(
                    "[{}/{}] Scraping: {} - {}",
                    exercise_count + 1,
                    target,
                    section_title,
                    exercise_title
                );

                let record = match self.extract_content(exercise_url).await {
                    Ok(content) => {
                        if content.question_text().is_none() {
                            tracing::warn!(
                                "No question found for {} in {}",
                                exercise_title,
                                section_title
                            );
                        }
                        if content.answer_text().is_none() {
                            tracing::warn!(
                                "No answer found for {} in {}",
                                exercise_title,
                                section_title
                            );
                        }
                        ExerciseRecord::from(content)
                    }
                    Err(e) => {
                        tracing::error!("Error scraping {}: {}", exercise_url, e);
                        ExerciseRecord::failed(e.to_string())
                    }
                };

                self.tree.record(section_title, exercise_title, record);

                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                exercise_count += 1;
                if max_exercises.is_some_and(|max| exercise_count >= max) {
                    tracing::info!("Reached maximum number of exercises ({})", exercise_count);
                    return Ok(&self.tree);
                }
            }
        }

        tracing::info!(
            "Scraping completed: {} exercises, {} failed",
            self.tree.exercise_count(),
            self.tree.failed_count()
        );

        Ok(&self.tree)
    }
}

/// Runs the main scrape operation
///
/// Uses the delay and exercise cap from the configuration.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(ScrapeTree)` - The scraped tree
/// * `Err(WorkbookError)` - Client construction or discovery failed
///
/// # Example
///
/// ```no_run
/// use workbook_scraper::config::Config;
/// use workbook_scraper::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = run_scrape(Config::default()).await?;
/// println!("{} sections", tree.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config) -> Result<ScrapeTree, WorkbookError> {
    let delay = config.scraper.delay()?;
    let max_exercises = config.scraper.max_exercises;

    let mut coordinator = Coordinator::new(config)?;
    coordinator.scrape_all(delay, max_exercises).await?;
    Ok(coordinator.into_tree())
}
