/// Where one record field comes from, relative to its container node.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSource {
    /// Trimmed text content of the container itself.
    OwnText,
    /// Attribute on the container element; absent attribute reads as `""`.
    Attr(String),
    /// Trimmed text of the first descendant matching a CSS selector.
    DescendantText(String),
    /// Attribute of the first descendant matching a CSS selector.
    DescendantAttr { selector: String, attr: String },
    /// Derived star-glyph string computed from an already-extracted
    /// numeric score field.
    StarsFromScore(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: String,
    pub source: FieldSource,
    /// Substituted when the source yields an empty value.
    pub default: Option<String>,
}

impl FieldRule {
    pub fn new(name: &str, source: FieldSource) -> Self {
        Self {
            name: name.to_string(),
            source,
            default: None,
        }
    }

    pub fn with_default(name: &str, source: FieldSource, default: &str) -> Self {
        Self {
            name: name.to_string(),
            source,
            default: Some(default.to_string()),
        }
    }
}

/// Pure configuration for one page's record extraction: which nodes are
/// containers, which fields to read off each one, and which fields a
/// container must yield for its record to count.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRule {
    /// CSS selector matching zero or more container nodes.
    pub containers: String,
    pub fields: Vec<FieldRule>,
    /// A container whose record leaves any of these empty is skipped.
    pub required: Vec<String>,
}

impl ExtractionRule {
    /// Anchors inside the 163 front page's headline blocks, paired as
    /// link text + href.
    pub fn news_headlines() -> Self {
        Self {
            containers: r#"div.hidden[ne-if="{{__i == 0}}"] a"#.to_string(),
            fields: vec![
                FieldRule::new("title", FieldSource::OwnText),
                FieldRule::new("url", FieldSource::Attr("href".to_string())),
            ],
            required: vec!["title".to_string(), "url".to_string()],
        }
    }

    /// Douban's now-playing list items, read from `data-*` attributes plus
    /// the nested poster image and rating element.
    pub fn now_playing_movies() -> Self {
        Self {
            containers: "#nowplaying li.list-item".to_string(),
            fields: vec![
                FieldRule::new("id", FieldSource::Attr("id".to_string())),
                FieldRule::new("title", FieldSource::Attr("data-title".to_string())),
                FieldRule::new("score", FieldSource::Attr("data-score".to_string())),
                FieldRule::new("duration", FieldSource::Attr("data-duration".to_string())),
                FieldRule::new("region", FieldSource::Attr("data-region".to_string())),
                FieldRule::new("director", FieldSource::Attr("data-director".to_string())),
                FieldRule::new("actors", FieldSource::Attr("data-actors".to_string())),
                FieldRule::new(
                    "poster",
                    FieldSource::DescendantAttr {
                        selector: "img".to_string(),
                        attr: "src".to_string(),
                    },
                ),
                FieldRule::with_default(
                    "rate_text",
                    FieldSource::DescendantText("span.subject-rate".to_string()),
                    "暂无评分",
                ),
                FieldRule::new("stars", FieldSource::StarsFromScore("score".to_string())),
            ],
            required: vec!["id".to_string(), "title".to_string()],
        }
    }
}
