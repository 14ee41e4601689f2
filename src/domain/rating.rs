const FULL_STAR: &str = "⭐";
const HALF_STAR: &str = "½";
const EMPTY_STAR: &str = "☆";

/// Render a 0–10 score as a five-slot star string: one full star per two
/// points, a half star when the remainder reaches one point, empty-star
/// glyphs for the rest. An unparseable score yields an empty string, never
/// a default rating.
pub fn star_rating(score: &str) -> String {
    let score: f64 = match score.trim().parse() {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let full = (score / 2.0).floor() as usize;
    let full = full.min(5);
    let half = if score % 2.0 >= 1.0 && full < 5 { 1 } else { 0 };
    let empty = 5 - full - half;

    let mut out = String::new();
    for _ in 0..full {
        out.push_str(FULL_STAR);
    }
    for _ in 0..half {
        out.push_str(HALF_STAR);
    }
    for _ in 0..empty {
        out.push_str(EMPTY_STAR);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::star_rating;

    #[test]
    fn even_score_has_no_half_star() {
        assert_eq!(star_rating("8.0"), "⭐⭐⭐⭐☆");
    }

    #[test]
    fn odd_score_gets_half_star() {
        assert_eq!(star_rating("7.0"), "⭐⭐⭐½☆");
    }

    #[test]
    fn full_marks() {
        assert_eq!(star_rating("10"), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn zero_score_is_all_empty_stars() {
        assert_eq!(star_rating("0"), "☆☆☆☆☆");
    }

    #[test]
    fn fractional_remainder_below_one_point_rounds_down() {
        assert_eq!(star_rating("6.9"), "⭐⭐⭐☆☆");
    }

    #[test]
    fn unparseable_score_yields_empty_string() {
        assert_eq!(star_rating("n/a"), "");
        assert_eq!(star_rating(""), "");
        assert_eq!(star_rating("暂无评分"), "");
    }
}
