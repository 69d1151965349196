use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of highlights surfaced per experience entry.
pub const MAX_METRICS: usize = 2;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)%").expect("percent pattern should compile"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:,\d+)*").expect("number pattern should compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Percentage,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub value: String,
    pub kind: MetricKind,
}

impl Metric {
    fn from_text(text: &str) -> Option<Self> {
        if let Some(caps) = PERCENT_RE.captures(text) {
            return Some(Self {
                value: format!("{}%", &caps[1]),
                kind: MetricKind::Percentage,
            });
        }
        NUMBER_RE.find(text).map(|m| Self {
            value: m.as_str().to_string(),
            kind: MetricKind::Number,
        })
    }
}

/// Pulls at most [`MAX_METRICS`] numeric highlights out of achievement strings.
///
/// Each string contributes its first `N%` token if it has one, otherwise its first
/// (optionally comma-grouped) integer. Strings without digits contribute nothing.
pub fn extract_metrics<S: AsRef<str>>(achievements: &[S]) -> Vec<Metric> {
    achievements
        .iter()
        .filter_map(|a| Metric::from_text(a.as_ref()))
        .take(MAX_METRICS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(metrics: &[Metric]) -> Vec<&str> {
        metrics.iter().map(|m| m.value.as_str()).collect()
    }

    #[test]
    fn percentage_beats_earlier_number() {
        let m = extract_metrics(&[
            "Led cross-functional team of 5 developers, increased team velocity by 45%",
        ]);
        assert_eq!(
            m,
            vec![Metric {
                value: "45%".to_string(),
                kind: MetricKind::Percentage
            }]
        );
    }

    #[test]
    fn falls_back_to_grouped_number() {
        let m = extract_metrics(&["capable of 20,000 crypto operations per second"]);
        assert_eq!(values(&m), vec!["20,000"]);
        assert_eq!(m[0].kind, MetricKind::Number);

        let m = extract_metrics(&["resolving 100+ critical bugs"]);
        assert_eq!(values(&m), vec!["100"]);
    }

    #[test]
    fn first_percentage_token_wins() {
        let m = extract_metrics(&["performance by 15-20% through query optimization"]);
        assert_eq!(values(&m), vec!["20%"]);
        let m = extract_metrics(&["cut 30% then another 10%"]);
        assert_eq!(values(&m), vec!["30%"]);
    }

    #[test]
    fn strings_without_digits_are_skipped() {
        let m = extract_metrics(&[
            "Developed Market Intelligence Service",
            "Mentored three Associate Engineers",
            "reduced costs by 20%",
        ]);
        assert_eq!(values(&m), vec!["20%"]);
    }

    #[test]
    fn never_more_than_two() {
        let input = (1..=10).map(|i| format!("{i}% better")).collect::<Vec<_>>();
        let m = extract_metrics(&input);
        assert_eq!(values(&m), vec!["1%", "2%"]);
        assert!(extract_metrics::<&str>(&[]).is_empty());
    }

    #[test]
    fn current_role_highlights() {
        let job = &crate::portfolio::PORTFOLIO.experience[0];
        let m = extract_metrics(&job.achievements);
        assert_eq!(values(&m), vec!["20%", "50%"]);
    }
}
