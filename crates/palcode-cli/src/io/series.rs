// crates/palcode-cli/src/io/series.rs
//
// Per-index error sequences for plotting tools.

use palcode_core::ErrorReport;

/// CSV with header `index,band,slot,red,green,blue`.
pub fn render_csv(report: &ErrorReport) -> String {
    let mut s = String::from("index,band,slot,red,green,blue\n");
    for e in &report.entries {
        s.push_str(&format!(
            "{},{},{},{},{},{}\n",
            e.index,
            e.index.band(),
            e.index.slot(),
            e.error[0],
            e.error[1],
            e.error[2]
        ));
    }
    s
}

/// One object per line: {"index":N,"red":E,"green":E,"blue":E}
pub fn render_jsonl(report: &ErrorReport) -> String {
    let mut s = String::new();
    for e in &report.entries {
        s.push_str(&format!(
            "{{\"index\":{},\"red\":{},\"green\":{},\"blue\":{}}}\n",
            e.index, e.error[0], e.error[1], e.error[2]
        ));
    }
    s
}
