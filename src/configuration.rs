use std::path::Path;

use serde::Deserialize;

use crate::domain::ExtractionRule;
use crate::pipeline::SnapshotJob;
use crate::services::{PageStyle, Timezone};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub output_dir: String,
    pub movies: JobSettings,
    pub news: JobSettings,
}

#[derive(Deserialize, Clone)]
pub struct JobSettings {
    pub url: String,
    pub output_file: String,
    pub max_records: Option<usize>,
    pub render_when_empty: bool,
}

impl Settings {
    pub fn jobs(&self) -> Vec<SnapshotJob> {
        let output_dir = Path::new(&self.output_dir);
        vec![
            SnapshotJob {
                name: "movies".to_string(),
                url: self.movies.url.clone(),
                rule: ExtractionRule::now_playing_movies(),
                style: PageStyle::MovieGrid,
                output_path: output_dir.join(&self.movies.output_file),
                max_records: self.movies.max_records,
                render_when_empty: self.movies.render_when_empty,
                timezone: Timezone::Shanghai,
            },
            SnapshotJob {
                name: "news".to_string(),
                url: self.news.url.clone(),
                rule: ExtractionRule::news_headlines(),
                style: PageStyle::HeadlineList,
                output_path: output_dir.join(&self.news.output_file),
                max_records: self.news.max_records,
                render_when_empty: self.news.render_when_empty,
                timezone: Timezone::MachineLocal,
            },
        ]
    }
}

/// Baked-in defaults, overridable by an optional `configuration.yaml` next
/// to the binary and by `PAGESNAP_*` environment variables
/// (e.g. `PAGESNAP_NEWS__MAX_RECORDS=20`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("output_dir", "docs")?
        .set_default("movies.url", "https://movie.douban.com/cinema/nowplaying/")?
        .set_default("movies.output_file", "index.html")?
        .set_default("movies.max_records", 20)?
        .set_default("movies.render_when_empty", false)?
        .set_default("news.url", "https://news.163.com")?
        .set_default("news.output_file", "163_news.html")?
        .set_default("news.render_when_empty", false)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("PAGESNAP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_jobs() {
        let settings = get_configuration().unwrap();
        assert_eq!(settings.output_dir, "docs");
        assert_eq!(settings.movies.max_records, Some(20));
        assert_eq!(settings.news.max_records, None);
        assert!(!settings.news.render_when_empty);
    }

    #[test]
    fn jobs_write_under_the_configured_output_dir() {
        let settings = get_configuration().unwrap();
        let jobs = settings.jobs();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].output_path, Path::new("docs").join("index.html"));
        assert_eq!(jobs[1].output_path, Path::new("docs").join("163_news.html"));
    }
}
