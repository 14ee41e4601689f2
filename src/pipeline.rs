use std::path::PathBuf;

use reqwest::Client;
use scraper::Html;

use crate::domain::ExtractionRule;
use crate::error::SnapshotError;
use crate::services::{clock, extractor, renderer, snapshot_writer};
use crate::services::{fetch_page, PageStyle, Timezone};

/// Everything one snapshot run needs, fixed at construction time: source,
/// extraction rule, page style, destination, and the per-page policy knobs.
#[derive(Debug, Clone)]
pub struct SnapshotJob {
    pub name: String,
    pub url: String,
    pub rule: ExtractionRule,
    pub style: PageStyle,
    pub output_path: PathBuf,
    /// Cap on rendered fragments; `None` renders every record.
    pub max_records: Option<usize>,
    /// Whether zero records still produces a (near-empty) page.
    pub render_when_empty: bool,
    pub timezone: Timezone,
}

/// The one explicit top-level result of a run. Failures are data, not
/// panics; the process exits cleanly whichever variant comes back.
#[derive(Debug)]
pub enum SnapshotOutcome {
    Written { path: PathBuf, record_count: usize },
    /// Zero usable records and the job is configured not to render them.
    EmptyNotWritten,
    /// Fetch, render or write failed; no file was touched after a fetch
    /// failure and no partial file is ever left behind.
    Failed { reason: SnapshotError },
}

/// One full linear pass: fetch, then hand off to [`finish_snapshot`].
pub async fn run_snapshot(client: &Client, job: &SnapshotJob) -> SnapshotOutcome {
    match fetch_page(client, &job.url).await {
        Ok(body) => finish_snapshot(job, &body),
        Err(reason) => SnapshotOutcome::Failed { reason },
    }
}

/// The network-free tail of a run: parse, extract, render, write.
pub fn finish_snapshot(job: &SnapshotJob, body: &str) -> SnapshotOutcome {
    let document = Html::parse_document(body);
    let mut records = extractor::extract(&document, &job.rule);
    if let Some(cap) = job.max_records {
        records.truncate(cap);
    }
    log::info!("{}: extracted {} records", job.name, records.len());

    if records.is_empty() && !job.render_when_empty {
        return SnapshotOutcome::EmptyNotWritten;
    }

    let update_time = clock::timestamp(job.timezone);
    let html = match renderer::render(job.style, &records, &job.url, &update_time) {
        Ok(html) => html,
        Err(reason) => return SnapshotOutcome::Failed { reason },
    };

    match snapshot_writer::write_snapshot(&job.output_path, &html) {
        Ok(()) => SnapshotOutcome::Written {
            path: job.output_path.clone(),
            record_count: records.len(),
        },
        Err(source) => SnapshotOutcome::Failed {
            reason: SnapshotError::Write {
                path: job.output_path.clone(),
                source,
            },
        },
    }
}
