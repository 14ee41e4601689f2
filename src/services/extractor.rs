use scraper::{ElementRef, Html, Selector};

use crate::domain::{star_rating, ExtractionRule, FieldSource, Record};

/// Apply one extraction rule to a parsed page. Containers come back in
/// document order; a container missing any required field is skipped.
/// A selector that fails to parse yields zero records rather than an
/// error, matching the run's best-effort policy.
pub fn extract(document: &Html, rule: &ExtractionRule) -> Vec<Record> {
    let containers = match Selector::parse(&rule.containers) {
        Ok(s) => s,
        Err(e) => {
            log::error!("bad container selector {:?}: {e}", rule.containers);
            return vec![];
        }
    };

    document
        .select(&containers)
        .filter_map(|container| {
            let record = extract_record(container, rule);
            let complete = rule.required.iter().all(|name| record.has(name));
            complete.then_some(record)
        })
        .collect()
}

fn extract_record(container: ElementRef, rule: &ExtractionRule) -> Record {
    let mut record = Record::new();

    for field in &rule.fields {
        let value = match &field.source {
            FieldSource::OwnText => own_text(container),
            FieldSource::Attr(name) => container
                .value()
                .attr(name)
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            FieldSource::DescendantText(selector) => {
                first_descendant(container, selector).map_or(String::new(), own_text)
            }
            FieldSource::DescendantAttr { selector, attr } => {
                first_descendant(container, selector)
                    .and_then(|el| el.value().attr(attr))
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            }
            FieldSource::StarsFromScore(score_field) => star_rating(record.get(score_field)),
        };

        let value = match (&field.default, value.is_empty()) {
            (Some(default), true) => default.clone(),
            _ => value,
        };
        record.insert(&field.name, value);
    }

    record
}

fn own_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_descendant<'a>(container: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    container.select(&selector).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExtractionRule;

    const NEWS_PAGE: &str = r#"
        <html><body>
            <div class="hidden" ne-if="{{__i == 0}}">
                <a href="https://news.163.com/a">  头条一  </a>
                <a href="https://news.163.com/b">头条二</a>
                <a>无链接标题</a>
                <a href="https://news.163.com/c"></a>
            </div>
            <div class="hidden">
                <a href="https://news.163.com/d">不在目标块里</a>
            </div>
        </body></html>
    "#;

    const MOVIE_PAGE: &str = r#"
        <html><body>
        <div id="nowplaying">
            <ul>
                <li id="36766201" class="list-item"
                    data-title="好东西" data-score="9.1" data-duration="123分钟"
                    data-region="中国大陆" data-director="邵艺辉" data-actors="宋佳">
                    <img src="https://img1.doubanio.com/poster1.jpg">
                    <span class="subject-rate">9.1</span>
                </li>
                <li id="36151692" class="list-item"
                    data-title="里斯本丸沉没" data-score="">
                    <img src="https://img1.doubanio.com/poster2.jpg">
                </li>
                <li class="list-item" data-title="无ID电影" data-score="8.0"></li>
            </ul>
        </div>
        </body></html>
    "#;

    #[test]
    fn link_list_pairs_text_with_href_in_document_order() {
        let document = Html::parse_document(NEWS_PAGE);
        let records = extract(&document, &ExtractionRule::news_headlines());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("title"), "头条一");
        assert_eq!(records[0].get("url"), "https://news.163.com/a");
        assert_eq!(records[1].get("title"), "头条二");
    }

    #[test]
    fn anchor_missing_href_or_text_is_skipped() {
        let document = Html::parse_document(NEWS_PAGE);
        let records = extract(&document, &ExtractionRule::news_headlines());

        assert!(records.iter().all(|r| r.has("title") && r.has("url")));
    }

    #[test]
    fn attribute_record_reads_data_attributes_and_nested_nodes() {
        let document = Html::parse_document(MOVIE_PAGE);
        let records = extract(&document, &ExtractionRule::now_playing_movies());

        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.get("id"), "36766201");
        assert_eq!(first.get("title"), "好东西");
        assert_eq!(first.get("director"), "邵艺辉");
        assert_eq!(first.get("poster"), "https://img1.doubanio.com/poster1.jpg");
        assert_eq!(first.get("rate_text"), "9.1");
        assert_eq!(first.get("stars"), "⭐⭐⭐⭐½");
    }

    #[test]
    fn absent_attributes_degrade_to_defaults_not_errors() {
        let document = Html::parse_document(MOVIE_PAGE);
        let records = extract(&document, &ExtractionRule::now_playing_movies());

        let second = &records[1];
        assert_eq!(second.get("director"), "");
        assert_eq!(second.get("rate_text"), "暂无评分");
        assert_eq!(second.get("stars"), "");
    }

    #[test]
    fn container_missing_required_field_is_excluded() {
        let document = Html::parse_document(MOVIE_PAGE);
        let records = extract(&document, &ExtractionRule::now_playing_movies());

        // Third list item has no id attribute.
        assert!(records.iter().all(|r| r.has("id")));
    }

    #[test]
    fn unparseable_container_selector_yields_zero_records() {
        let document = Html::parse_document(NEWS_PAGE);
        let rule = ExtractionRule {
            containers: "li[".to_string(),
            ..ExtractionRule::news_headlines()
        };
        assert!(extract(&document, &rule).is_empty());
    }
}
