use crate::domain::graph::Graph;
use crate::domain::model::Algorithm;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::infrastructure::scc_tarjan::TarjanSccDetector;
use crate::infrastructure::schema_validator::{validate_graph_file, validate_report};
use crate::infrastructure::serde_json_adapter::{
    read_graph_value, write_report_file, GraphFileDto, ReportDto,
};
use crate::interface::report::{render_run, GraphLabel};
use crate::usecase::analyze::{analyze_graph, compare_algorithms, finish, tour_catalog};
use crate::usecase::catalog::DemoCatalog;
use crate::usecase::event::AppEvent;
use crate::usecase::runner::SccRunner;
use crate::usecase::session::ExplorerSession;
use crate::usecase::stats::RunStats;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    let tarjan = TarjanSccDetector;
    let kosaraju = KosarajuSccDetector;
    let runner = SccRunner::new(&tarjan, &kosaraju);
    let catalog = DemoCatalog::builtin()?;
    let mut stats = RunStats::default();

    match cmd {
        Cli::Run {
            source,
            algorithm,
            out,
            emit_events,
        } => {
            let loaded = load_graph(&source, &catalog).await?;
            let (sink, printer) = event_sink(emit_events);

            let run = analyze_graph(
                &runner,
                &loaded.name,
                &loaded.graph,
                algorithm,
                &sink,
                &mut stats,
            )
            .await;
            finish(&sink, &stats).await;
            close_sink(sink, printer).await;

            eprint!("{}", render_run(loaded.label(), &run));

            if let Some(out) = out {
                let report = ReportDto::from_run(Some(loaded.name.clone()), &run);
                validate_report(&serde_json::to_value(&report)?)
                    .context("report failed schema validation")?;
                write_report_file(&out, &report)
                    .await
                    .with_context(|| format!("writing report JSON: {out}"))?;
            }
            Ok(())
        }

        Cli::Compare {
            source,
            emit_events,
        } => {
            let loaded = load_graph(&source, &catalog).await?;
            let (sink, printer) = event_sink(emit_events);

            let cmp =
                compare_algorithms(&runner, &loaded.name, &loaded.graph, &sink, &mut stats).await;
            finish(&sink, &stats).await;
            close_sink(sink, printer).await;

            eprint!("{}", render_run(loaded.label(), &cmp.tarjan));
            eprintln!();
            eprint!("{}", render_run(loaded.label(), &cmp.kosaraju));

            if !cmp.agree {
                return Err(anyhow!(
                    "tarjan and kosaraju produced different partitions for {}",
                    loaded.name
                ));
            }
            eprintln!("ok: partitions agree");
            Ok(())
        }

        Cli::Tour {
            algorithm,
            emit_events,
        } => {
            let total = catalog.len();
            let mut session = ExplorerSession::new(runner, catalog, algorithm)?;
            let (sink, printer) = event_sink(emit_events);

            let steps = tour_catalog(&mut session, &sink, &mut stats).await;
            finish(&sink, &stats).await;
            close_sink(sink, printer).await;

            for step in steps.iter() {
                let label = GraphLabel::Demo {
                    index: step.index,
                    total,
                    name: &step.name,
                };
                eprint!("{}", render_run(label, &step.run));
                eprintln!();
            }

            eprintln!(
                "summary: graphs_seen={} runs={} components_found={} cyclic_components={}",
                stats.graphs_seen, stats.runs, stats.components_found, stats.cyclic_components
            );
            Ok(())
        }

        Cli::Validate { input } => {
            let graph = read_graph_file_checked(&input).await?;
            eprintln!("schema validation passed");
            eprintln!(
                "ok: graph validated ({} nodes, {} edges)",
                graph.node_count(),
                graph.edge_count()
            );
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum GraphSource {
    /// Zero-based catalog index.
    Demo(usize),
    File(String),
}

#[derive(Debug)]
enum Cli {
    Run {
        source: GraphSource,
        algorithm: Algorithm,
        out: Option<String>,
        emit_events: bool,
    },
    Compare {
        source: GraphSource,
        emit_events: bool,
    },
    Tour {
        algorithm: Algorithm,
        emit_events: bool,
    },
    Validate {
        input: String,
    },
}

/// Flags shared by the graph-taking subcommands.
#[derive(Debug, Default)]
struct Flags {
    graph: Option<String>,
    input: Option<String>,
    out: Option<String>,
    algorithm: Option<String>,
    emit_events: bool,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> run [--algorithm tarjan|kosaraju] [--graph <1..N> | --in <graph.json>] [--out <report.json>] [--emit-events]
        // <bin> compare [--graph <1..N> | --in <graph.json>] [--emit-events]
        // <bin> tour [--algorithm tarjan|kosaraju] [--emit-events]
        // <bin> validate --in <graph.json>
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        let command = args[1].as_str();
        let allowed: &[&str] = match command {
            "run" => &["--algorithm", "--graph", "--in", "--out", "--emit-events"],
            "compare" => &["--graph", "--in", "--emit-events"],
            "tour" => &["--algorithm", "--emit-events"],
            "validate" => &["--in"],
            _ => return Err(anyhow!(usage())),
        };
        let flags = Self::parse_flags(&args[2..], allowed)?;

        match command {
            "run" => Ok(Cli::Run {
                source: Self::graph_source(&flags)?,
                algorithm: Self::algorithm(&flags)?,
                out: flags.out,
                emit_events: flags.emit_events,
            }),
            "compare" => Ok(Cli::Compare {
                source: Self::graph_source(&flags)?,
                emit_events: flags.emit_events,
            }),
            "tour" => Ok(Cli::Tour {
                algorithm: Self::algorithm(&flags)?,
                emit_events: flags.emit_events,
            }),
            _ => {
                let input = flags
                    .input
                    .ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
                Ok(Cli::Validate { input })
            }
        }
    }

    fn parse_flags(args: &[String], allowed: &[&str]) -> Result<Flags> {
        let mut flags = Flags::default();

        let mut i = 0;
        while i < args.len() {
            let arg = match args[i].as_str() {
                "-a" => "--algorithm",
                "-g" => "--graph",
                "--input" => "--in",
                "--output" => "--out",
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => other,
            };
            if !allowed.contains(&arg) {
                return Err(anyhow!(format!("unknown arg: {}\n\n{}", args[i], usage())));
            }
            match arg {
                "--emit-events" => flags.emit_events = true,
                _ => {
                    i += 1;
                    let value = args
                        .get(i)
                        .cloned()
                        .ok_or_else(|| anyhow!(format!("missing value for {arg}\n\n{}", usage())))?;
                    let slot = match arg {
                        "--algorithm" => &mut flags.algorithm,
                        "--graph" => &mut flags.graph,
                        "--in" => &mut flags.input,
                        _ => &mut flags.out,
                    };
                    *slot = Some(value);
                }
            }
            i += 1;
        }

        Ok(flags)
    }

    fn graph_source(flags: &Flags) -> Result<GraphSource> {
        match (&flags.graph, &flags.input) {
            (Some(_), Some(_)) => Err(anyhow!(format!(
                "--graph and --in are mutually exclusive\n\n{}",
                usage()
            ))),
            (None, Some(path)) => Ok(GraphSource::File(path.clone())),
            (Some(n), None) => {
                let n: usize = n
                    .parse()
                    .map_err(|_| anyhow!(format!("--graph expects a number, got {n}\n\n{}", usage())))?;
                if n == 0 {
                    return Err(anyhow!("--graph is 1-based"));
                }
                Ok(GraphSource::Demo(n - 1))
            }
            (None, None) => Ok(GraphSource::Demo(0)),
        }
    }

    fn algorithm(flags: &Flags) -> Result<Algorithm> {
        match &flags.algorithm {
            Some(name) => Ok(name.parse()?),
            None => Ok(Algorithm::default()),
        }
    }
}

fn usage() -> &'static str {
    "Usage:\n  scc-explorer run [--algorithm tarjan|kosaraju] [--graph <1..5> | --in <graph.json>] [--out <report.json>] [--emit-events]\n  scc-explorer compare [--graph <1..5> | --in <graph.json>] [--emit-events]\n  scc-explorer tour [--algorithm tarjan|kosaraju] [--emit-events]\n  scc-explorer validate --in <graph.json>\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; reports go to stderr.\n\nGraph files:\n  {\"name\": \"...\", \"node_count\": N, \"adjacency\": [[successors of 0], [successors of 1], ...]}"
}

struct LoadedGraph {
    name: String,
    graph: Graph,
    demo: Option<(usize, usize)>,
}

impl LoadedGraph {
    fn label(&self) -> GraphLabel<'_> {
        match self.demo {
            Some((index, total)) => GraphLabel::Demo {
                index,
                total,
                name: &self.name,
            },
            None => GraphLabel::File { name: &self.name },
        }
    }
}

async fn load_graph(source: &GraphSource, catalog: &DemoCatalog) -> Result<LoadedGraph> {
    match source {
        GraphSource::Demo(index) => {
            let demo = catalog.get(*index)?;
            Ok(LoadedGraph {
                name: demo.name.to_string(),
                graph: demo.graph.clone(),
                demo: Some((*index, catalog.len())),
            })
        }
        GraphSource::File(path) => {
            let graph = read_graph_file_checked(path).await?;
            Ok(LoadedGraph {
                name: path.clone(),
                graph,
                demo: None,
            })
        }
    }
}

async fn read_graph_file_checked(path: &str) -> Result<Graph> {
    let value = read_graph_value(path)
        .await
        .with_context(|| format!("reading graph JSON: {path}"))?;
    validate_graph_file(&value).with_context(|| format!("validating graph: {path}"))?;
    let dto: GraphFileDto =
        serde_json::from_value(value).with_context(|| format!("decoding graph: {path}"))?;
    let graph = dto
        .into_graph()
        .with_context(|| format!("building graph: {path}"))?;
    Ok(graph)
}

fn event_sink(emit_events: bool) -> (Option<mpsc::Sender<AppEvent>>, Option<JoinHandle<()>>) {
    if !emit_events {
        return (None, None);
    }
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    (Some(tx), Some(spawn_ndjson_printer(rx)))
}

async fn close_sink(sink: Option<mpsc::Sender<AppEvent>>, printer: Option<JoinHandle<()>>) {
    drop(sink);
    if let Some(handle) = printer {
        handle.await.ok();
    }
}
