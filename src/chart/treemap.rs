//! Tree map dataset: `name,parent,size,delta` rows.
//!
//! The first record always becomes the root node, whatever it contains.
//! Later rows never fail on bad numbers: missing or non-numeric sizes and
//! deltas are replaced by `0`.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{BuildStats, ChartConfig, Numeric, TreeNode};
use crate::io::ingest::RawRecord;

const DEFAULT_ROOT: &str = "root";
const PLACEHOLDER: Numeric = Numeric::Int(0);

pub fn build_treemap(records: &[RawRecord], config: &ChartConfig) -> (Vec<TreeNode>, BuildStats) {
    let Some((first, rest)) = records.split_first() else {
        return (Vec::new(), BuildStats::default());
    };

    let root_name = match first.field(0) {
        "" => DEFAULT_ROOT.to_string(),
        name => name.to_string(),
    };
    let mut seen: HashSet<String> = HashSet::from([root_name.clone()]);
    let mut nodes = Vec::with_capacity(records.len());
    nodes.push(TreeNode {
        name: root_name.clone(),
        parent: None,
        size: PLACEHOLDER,
        delta: PLACEHOLDER,
    });

    for record in rest {
        let name = record.field(0);
        if name.is_empty() {
            debug!(line = record.line, "treemap row skipped: empty name");
            continue;
        }
        if !seen.insert(name.to_string()) {
            debug!(line = record.line, "treemap row skipped: duplicate node '{name}'");
            continue;
        }

        let parent = match record.field(1) {
            "" => root_name.clone(),
            p => p.to_string(),
        };
        let size = numeric_or_placeholder(record, 2);
        let delta = numeric_or_placeholder(record, 3);
        let size = if config.log_scale { log_scale(size) } else { size };

        nodes.push(TreeNode {
            name: name.to_string(),
            parent: Some(parent),
            size,
            delta,
        });
    }

    // Parents must name a node in the tree; unknown ones hang off the root.
    for node in nodes.iter_mut().skip(1) {
        let known = node
            .parent
            .as_ref()
            .is_some_and(|p| *p != node.name && seen.contains(p));
        if !known {
            debug!("treemap node '{}' has unknown parent {:?}, attaching to root", node.name, node.parent);
            node.parent = Some(root_name.clone());
        }
    }

    let stats = BuildStats {
        rows_read: records.len(),
        rows_used: nodes.len(),
        rows_skipped: records.len() - nodes.len(),
    };
    (nodes, stats)
}

fn numeric_or_placeholder(record: &RawRecord, idx: usize) -> Numeric {
    let field = record.field(idx);
    Numeric::coerce(field).unwrap_or_else(|| {
        if !field.is_empty() {
            debug!(line = record.line, "treemap field '{field}' is not numeric, using 0");
        }
        PLACEHOLDER
    })
}

/// `log10(size + 1)` rounded to three decimals; non-positive sizes are kept.
pub fn log_scale(size: Numeric) -> Numeric {
    if !size.is_positive() {
        return size;
    }
    let scaled = (size.as_f64() + 1.0).log10();
    Numeric::Float((scaled * 1000.0).round() / 1000.0)
}
