use askama::Template;
use url::Url;

use crate::domain::Record;
use crate::error::SnapshotError;

/// Which document skeleton a job renders its records into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageStyle {
    /// Poster cards in a flex grid (now-playing movies).
    MovieGrid,
    /// One anchor per line with a total count in the footer (news headlines).
    HeadlineList,
}

#[derive(Template)]
#[template(path = "movies.html")]
struct MoviesTemplate {
    movies: Vec<MovieCard>,
    update_time: String,
}

struct MovieCard {
    poster: String,
    title: String,
    link: String,
    director: String,
    actors: String,
    region: String,
    duration: String,
    rate_text: String,
    stars: String,
}

impl MovieCard {
    fn from_record(record: &Record) -> Self {
        Self {
            poster: record.get("poster").to_string(),
            title: record.get("title").to_string(),
            link: subject_link(record.get("id")),
            director: record.get_or("director", "未知").to_string(),
            actors: record.get_or("actors", "未知").to_string(),
            region: record.get_or("region", "未知").to_string(),
            duration: record.get_or("duration", "未知").to_string(),
            rate_text: record.get_or("rate_text", "暂无评分").to_string(),
            stars: record.get("stars").to_string(),
        }
    }
}

fn subject_link(id: &str) -> String {
    Url::parse("https://movie.douban.com/subject/")
        .and_then(|base| base.join(&format!("{id}/")))
        .map(String::from)
        .unwrap_or_default()
}

#[derive(Template)]
#[template(path = "news.html")]
struct NewsTemplate {
    items: Vec<Headline>,
    total: usize,
    update_time: String,
}

struct Headline {
    title: String,
    url: String,
}

impl Headline {
    fn from_record(record: &Record, base: &str) -> Self {
        Self {
            title: record.get("title").to_string(),
            url: absolutize(record.get("url"), base),
        }
    }
}

// The front page mostly carries absolute hrefs, but the occasional
// site-relative one still needs the origin prepended.
fn absolutize(href: &str, base: &str) -> String {
    match Url::parse(href) {
        Ok(url) => url.to_string(),
        Err(_) => Url::parse(base)
            .and_then(|base| base.join(href))
            .map(String::from)
            .unwrap_or_else(|_| href.to_string()),
    }
}

/// Assemble the full document: fixed skeleton, one fragment per record in
/// input order, timestamp (and count, where the style shows one)
/// substituted once. Field values pass through askama's HTML escaping.
pub fn render(
    style: PageStyle,
    records: &[Record],
    source_url: &str,
    update_time: &str,
) -> Result<String, SnapshotError> {
    let html = match style {
        PageStyle::MovieGrid => MoviesTemplate {
            movies: records.iter().map(MovieCard::from_record).collect(),
            update_time: update_time.to_string(),
        }
        .render()?,
        PageStyle::HeadlineList => NewsTemplate {
            total: records.len(),
            items: records
                .iter()
                .map(|r| Headline::from_record(r, source_url))
                .collect(),
            update_time: update_time.to_string(),
        }
        .render()?,
    };
    Ok(html)
}
