use crate::domain::model::SccRun;
use crate::usecase::palette::color_for_group;
use std::fmt::Write as _;

/// Where the shown graph came from, for the status line.
#[derive(Debug, Clone, Copy)]
pub enum GraphLabel<'a> {
    Demo {
        index: usize,
        total: usize,
        name: &'a str,
    },
    File {
        name: &'a str,
    },
}

/// Plain-text rendering of one run: status line, timing, then one line per
/// node with its group, colour and, after a Tarjan run, `(disc,low)`.
pub fn render_run(label: GraphLabel<'_>, run: &SccRun) -> String {
    let mut out = String::new();
    let graph = match label {
        GraphLabel::Demo { index, total, name } => format!("{}/{} ({name})", index + 1, total),
        GraphLabel::File { name } => name.to_string(),
    };
    let _ = writeln!(out, "Algorithm: {}    Graph: {graph}", run.algorithm.label());
    let _ = writeln!(out, "Time: {:.3} ms", run.elapsed_ms);
    let _ = writeln!(
        out,
        "Components: {} ({} cyclic)",
        run.result.component_count(),
        run.result.cyclic_count()
    );

    for (cid, comp) in run.result.components.iter().enumerate() {
        let members: Vec<String> = comp.iter().map(|n| n.to_string()).collect();
        let _ = writeln!(out, "  group {cid}: {{{}}}", members.join(", "));
    }

    for (node, &group) in run.result.component_of.iter().enumerate() {
        let _ = write!(out, "  node {node}: group {group} {}", color_for_group(group));
        if let Some(diag) = run.result.diagnostics.as_ref() {
            let _ = write!(out, " ({},{})", diag.discovery[node], diag.lowlink[node]);
        }
        out.push('\n');
    }

    out
}
