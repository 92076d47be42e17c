//! Fixed HTML skeletons, one per chart kind.
//!
//! Every skeleton shares the same page shell and differs only in the
//! drawing script. Placeholders are `{{name}}` markers filled by
//! [`fill`] in a single pass, so substituted values are never re-scanned.
//!
//! Markers:
//! - `title_html`: page title, HTML-escaped
//! - `title_json`: page title as a JSON string literal
//! - `loader_url`: charting library loader, HTML-escaped
//! - `stamp`: generation comment (may be empty)
//! - `height`: chart height in pixels
//! - `script`: the drawing script for the chart kind
//! - `rows`: the dataset as a script-safe JSON array

use crate::domain::ChartKind;

pub const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title_html}}</title>
{{stamp}}<script type="text/javascript" src="{{loader_url}}"></script>
<style>
  body { font-family: sans-serif; margin: 1em; }
  #chart { width: 100%; height: {{height}}px; }
</style>
</head>
<body>
<h1>{{title_html}}</h1>
<div id="chart"></div>
<script type="text/javascript">
var TITLE = {{title_json}};
var ROWS = {{rows}};
function toDate(p) { return new Date(p[0], p[1] - 1, p[2]); }
{{script}}
</script>
</body>
</html>
"#;

const CALENDAR: &str = r#"google.charts.load('current', {packages: ['calendar']});
google.charts.setOnLoadCallback(function () {
  var data = new google.visualization.DataTable();
  data.addColumn({type: 'date', id: 'Date'});
  data.addColumn({type: 'number', id: 'Value'});
  ROWS.forEach(function (r) { data.addRow([toDate(r.date), r.value]); });
  var chart = new google.visualization.Calendar(document.getElementById('chart'));
  chart.draw(data, {title: TITLE, height: {{height}}});
});"#;

const TIMELINE: &str = r#"google.charts.load('current', {packages: ['timeline']});
google.charts.setOnLoadCallback(function () {
  var withBars = ROWS.some(function (r) { return r.bar !== null; });
  var data = new google.visualization.DataTable();
  data.addColumn({type: 'string', id: 'Row'});
  if (withBars) { data.addColumn({type: 'string', id: 'Bar'}); }
  data.addColumn({type: 'date', id: 'Start'});
  data.addColumn({type: 'date', id: 'End'});
  ROWS.forEach(function (r) {
    var cells = [r.row];
    if (withBars) { cells.push(r.bar === null ? '' : r.bar); }
    cells.push(toDate(r.start), toDate(r.end));
    data.addRow(cells);
  });
  var chart = new google.visualization.Timeline(document.getElementById('chart'));
  chart.draw(data, {height: {{height}}, timeline: {showBarLabels: withBars}});
});"#;

const TREEMAP: &str = r#"google.charts.load('current', {packages: ['treemap']});
google.charts.setOnLoadCallback(function () {
  var data = new google.visualization.DataTable();
  data.addColumn('string', 'Node');
  data.addColumn('string', 'Parent');
  data.addColumn('number', 'Size');
  data.addColumn('number', 'Delta');
  ROWS.forEach(function (r) { data.addRow([r.name, r.parent, r.size, r.delta]); });
  var chart = new google.visualization.TreeMap(document.getElementById('chart'));
  chart.draw(data, {title: TITLE, height: {{height}}, showScale: true});
});"#;

/// The drawing script for `kind`.
pub fn script_for(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Calendar => CALENDAR,
        ChartKind::Timeline => TIMELINE,
        ChartKind::Treemap => TREEMAP,
    }
}

/// Replace every `{{name}}` marker with its value.
///
/// Values are inserted verbatim and are not scanned for further markers.
/// Unknown markers are left as they are.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match values.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_single_pass() {
        let out = fill("a {{x}} b {{y}}", &[("x", "{{y}}"), ("y", "Y")]);
        assert_eq!(out, "a {{y}} b Y");
    }

    #[test]
    fn fill_keeps_unknown_and_unterminated_markers() {
        assert_eq!(fill("{{nope}} {{x}}", &[("x", "1")]), "{{nope}} 1");
        assert_eq!(fill("tail {{x", &[("x", "1")]), "tail {{x");
    }

    #[test]
    fn scripts_use_only_known_markers() {
        for kind in [ChartKind::Calendar, ChartKind::Timeline, ChartKind::Treemap] {
            let filled = fill(script_for(kind), &[("height", "1")]);
            assert!(!filled.contains("{{"), "{kind:?} has an unfilled marker");
        }
    }
}
