//! End-to-end run: feed → extract → fetch/classify → sort → CSV → publish.
//!
//! Execution is strictly sequential — one blocking fetch per link, no
//! spawned concurrency. All accumulation lives in this function's locals,
//! so repeated invocations cannot leak state between runs.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use linkdigest_classify::{Categorizer, FUNDRAISING_ID, FetchedPage, build_record};
use linkdigest_export::SheetsPublisher;
use linkdigest_feed::{FeedClient, LinkExtractor, LinkFilter};
use linkdigest_shared::{
    AppConfig, CandidateLink, ClassifiedLink, LinkDigestError, Result, resolve_sheets_token,
};

use crate::fetch::PageFetcher;
use crate::sort;

/// Summary of one completed pipeline run.
#[derive(Debug)]
pub struct RunResult {
    /// Feed entries with content.
    pub entries: usize,
    /// Links claimed by the fundraising fast-path.
    pub fundraising_links: usize,
    /// General candidate links after filtering.
    pub candidate_links: usize,
    /// Rows in the final output.
    pub rows: usize,
    /// URLs dropped due to a parse failure, in drop order.
    pub dropped: Vec<String>,
    /// Path of the written CSV artifact.
    pub csv_path: PathBuf,
    /// Whether the spreadsheet publish step ran.
    pub published: bool,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called per fetched/classified link.
    fn link_processed(&self, url: &str, current: usize, total: usize);
    /// Called when the run completes.
    fn done(&self, result: &RunResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn link_processed(&self, _url: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &RunResult) {}
}

/// Run the full pipeline once.
#[instrument(skip_all, fields(feed_url = %config.feed.url))]
pub async fn run(config: &AppConfig, progress: &dyn ProgressReporter) -> Result<RunResult> {
    let start = Instant::now();

    // --- Phase 1: Feed ---
    progress.phase("Fetching feed");
    let feed_client = FeedClient::new(&config.feed.user_agent)?;
    let entries = feed_client.fetch_entries(&config.feed.url).await?;

    // --- Phase 2: Extraction ---
    progress.phase("Extracting links");
    let extractor = LinkExtractor::new(LinkFilter::new(config.filter.blacklist.clone()));

    let mut fundraising: Vec<CandidateLink> = Vec::new();
    let mut candidates: Vec<CandidateLink> = Vec::new();
    for entry in &entries {
        let extracted = extractor.extract(entry);
        fundraising.extend(extracted.fundraising);
        candidates.extend(extracted.general);
    }

    info!(
        entries = entries.len(),
        fundraising = fundraising.len(),
        candidates = candidates.len(),
        "links extracted"
    );

    // --- Phase 3: Classification ---
    let fetcher = PageFetcher::new(&config.feed.user_agent)?;
    let categorizer = Categorizer::with_defaults();

    let mut rows: Vec<ClassifiedLink> = Vec::new();
    let mut dropped: Vec<String> = Vec::new();

    progress.phase("Classifying fundraising links");
    let total = fundraising.len();
    for (i, link) in fundraising.iter().enumerate() {
        progress.link_processed(&link.url, i + 1, total);
        let body = fetcher.fetch_following_redirects(&link.url).await?;
        let page = FetchedPage::parse(&body);
        rows.push(build_record(&link.url, FUNDRAISING_ID, &link.source, &page));
    }

    progress.phase("Classifying candidate links");
    let total = candidates.len();
    for (i, link) in candidates.iter().enumerate() {
        progress.link_processed(&link.url, i + 1, total);
        match fetcher.fetch_no_redirects(&link.url).await {
            Ok(body) => {
                let page = FetchedPage::parse(&body);
                let category = categorizer.classify(&link.url, &page);
                rows.push(build_record(&link.url, &category, &link.source, &page));
            }
            Err(LinkDigestError::InvalidLink(url)) => {
                warn!(%url, "invalid link, dropped from output");
                dropped.push(link.url.clone());
            }
            Err(e) => return Err(e),
        }
    }

    // --- Phase 4: Sort ---
    progress.phase("Sorting rows");
    sort::by_source_digits(&mut rows);

    // --- Phase 5: CSV artifact ---
    progress.phase("Writing CSV");
    let csv_path = PathBuf::from(&config.output.csv_path);
    linkdigest_export::write_csv(&csv_path, &rows)?;

    // --- Phase 6: Publish ---
    let published = match &config.sheets {
        Some(sheets) => {
            progress.phase("Publishing to spreadsheet");
            let token = resolve_sheets_token(sheets)?;
            let publisher = SheetsPublisher::new(sheets.clone(), token)?;
            publisher.publish(&rows).await?;
            true
        }
        None => {
            debug!("no spreadsheet configured, publish skipped");
            false
        }
    };

    let result = RunResult {
        entries: entries.len(),
        fundraising_links: fundraising.len(),
        candidate_links: candidates.len(),
        rows: rows.len(),
        dropped,
        csv_path,
        published,
        elapsed: start.elapsed(),
    };

    progress.done(&result);

    info!(
        rows = result.rows,
        dropped = result.dropped.len(),
        published = result.published,
        elapsed_ms = result.elapsed.as_millis(),
        "run complete"
    );

    Ok(result)
}
