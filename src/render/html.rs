//! Render a chart dataset into a standalone HTML document.

use serde::Serialize;

use crate::chart::calendar::distinct_years;
use crate::domain::ChartDataset;
use crate::error::{AppError, EXIT_RENDER};
use crate::render::template::{PAGE, fill, script_for};

/// Presentation settings that are not part of the dataset.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub loader_url: String,
    /// Free text placed in an HTML comment at the top of the document.
    pub stamp: Option<String>,
}

/// Render the full document for `dataset`.
pub fn render_document(dataset: &ChartDataset, options: &RenderOptions) -> Result<String, AppError> {
    let rows = match dataset {
        ChartDataset::Calendar(points) => script_json(points)?,
        ChartDataset::Timeline(bars) => script_json(bars)?,
        ChartDataset::Treemap(nodes) => script_json(nodes)?,
    };
    let title_json = script_json(&options.title)?;
    let height = chart_height(dataset).to_string();

    let script = fill(script_for(dataset.kind()), &[("height", height.as_str())]);
    let stamp = options
        .stamp
        .as_deref()
        .map(|s| format!("<!-- {} -->\n", comment_text(s)))
        .unwrap_or_default();
    let title_html = html_escape(&options.title);
    let loader_url = html_escape(&options.loader_url);

    Ok(fill(
        PAGE,
        &[
            ("title_html", title_html.as_str()),
            ("title_json", title_json.as_str()),
            ("loader_url", loader_url.as_str()),
            ("stamp", stamp.as_str()),
            ("height", height.as_str()),
            ("script", script.as_str()),
            ("rows", rows.as_str()),
        ],
    ))
}

/// Serialize `value` as JSON that is safe inside a `<script>` element.
///
/// `<`, `>` and `&` are written as unicode escapes so no value can close the
/// script tag or open a comment; U+2028/U+2029 are escaped because older
/// JavaScript engines treat them as line terminators inside string literals.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to serialize chart data: {e}")))?;

    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Escape `s` for use inside an HTML comment: no `--` may remain.
fn comment_text(s: &str) -> String {
    let mut text = html_escape(s);
    while text.contains("--") {
        text = text.replace("--", "- -");
    }
    text
}

/// Escape text for HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Chart height in pixels.
///
/// Calendars need one band per year; timelines one lane per row label.
pub fn chart_height(dataset: &ChartDataset) -> usize {
    match dataset {
        ChartDataset::Calendar(points) => 40 + 150 * distinct_years(points).max(1),
        ChartDataset::Timeline(bars) => {
            let mut rows: Vec<&str> = bars.iter().map(|b| b.row.as_str()).collect();
            rows.sort_unstable();
            rows.dedup();
            60 + 42 * rows.len().max(1)
        }
        ChartDataset::Treemap(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarPoint, DateParts, Numeric, TimelineBar, TreeNode};

    fn options(title: &str) -> RenderOptions {
        RenderOptions {
            title: title.to_string(),
            loader_url: crate::render::DEFAULT_LOADER_URL.to_string(),
            stamp: None,
        }
    }

    #[test]
    fn calendar_document_embeds_rows_and_package() {
        let dataset = ChartDataset::Calendar(vec![
            CalendarPoint { date: DateParts::new(2020, 3, 1), value: Numeric::Int(42) },
            CalendarPoint { date: DateParts::new(2020, 3, 3), value: Numeric::Int(17) },
        ]);
        let html = render_document(&dataset, &options("Steps")).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Steps</title>"));
        assert!(html.contains(r#"var TITLE = "Steps";"#));
        assert!(html.contains(r#"var ROWS = [{"date":[2020,3,1],"value":42},{"date":[2020,3,3],"value":17}];"#));
        assert!(html.contains("packages: ['calendar']"));
        assert!(html.contains("height: 190}"));
        assert!(!html.contains("{{"));
        assert!(!html.contains("<!--"));
    }

    #[test]
    fn hostile_labels_cannot_break_the_script() {
        let dataset = ChartDataset::Timeline(vec![TimelineBar {
            row: "</script><script>alert('x')</script>".to_string(),
            bar: Some("\"quoted\", with comma".to_string()),
            start: DateParts::new(2020, 1, 1),
            end: DateParts::new(2020, 2, 1),
        }]);
        let html = render_document(&dataset, &options("a <b> & \"c\"")).unwrap();

        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains(r#"\u003c/script\u003e\u003cscript\u003ealert('x')"#));
        assert!(html.contains(r#""bar":"\"quoted\", with comma""#));
        assert!(html.contains("<title>a &lt;b&gt; &amp; &quot;c&quot;</title>"));
        assert!(html.contains(r#"var TITLE = "a \u003cb\u003e \u0026 \"c\"";"#));
    }

    #[test]
    fn treemap_rows_keep_null_root_parent() {
        let dataset = ChartDataset::Treemap(vec![
            TreeNode { name: "All".into(), parent: None, size: Numeric::Int(0), delta: Numeric::Int(0) },
            TreeNode { name: "A".into(), parent: Some("All".into()), size: Numeric::Float(2.5), delta: Numeric::Int(-1) },
        ]);
        let html = render_document(&dataset, &options("Tree")).unwrap();
        assert!(html.contains(
            r#"var ROWS = [{"name":"All","parent":null,"size":0,"delta":0},{"name":"A","parent":"All","size":2.5,"delta":-1}];"#
        ));
        assert!(html.contains("google.visualization.TreeMap"));
    }

    #[test]
    fn empty_dataset_still_renders() {
        let html = render_document(&ChartDataset::Calendar(Vec::new()), &options("Empty")).unwrap();
        assert!(html.contains("var ROWS = [];"));
    }

    #[test]
    fn stamp_is_a_comment_that_cannot_close_early() {
        let mut opts = options("T");
        opts.stamp = Some("generated --> now".to_string());
        let html = render_document(&ChartDataset::Treemap(Vec::new()), &opts).unwrap();
        assert!(html.contains("<!-- generated - -&gt; now -->\n<script"));
    }

    #[test]
    fn comment_text_breaks_every_dash_run() {
        assert_eq!(comment_text("a---b"), "a- - -b");
        assert_eq!(comment_text("----"), "- - - -");
        assert!(!comment_text("x -------- y").contains("--"));
    }

    #[test]
    fn heights_scale_with_content() {
        let cal = ChartDataset::Calendar(vec![
            CalendarPoint { date: DateParts::new(2020, 1, 1), value: Numeric::Int(1) },
            CalendarPoint { date: DateParts::new(2021, 1, 1), value: Numeric::Int(1) },
        ]);
        assert_eq!(chart_height(&cal), 340);

        let bar = |row: &str| TimelineBar {
            row: row.to_string(),
            bar: None,
            start: DateParts::new(2020, 1, 1),
            end: DateParts::new(2020, 1, 2),
        };
        let tl = ChartDataset::Timeline(vec![bar("a"), bar("b"), bar("a")]);
        assert_eq!(chart_height(&tl), 144);
    }
}
