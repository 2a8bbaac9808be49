use crate::domain::graph::Graph;
use crate::domain::model::{Algorithm, SccRun};
use crate::usecase::event::AppEvent;
use crate::usecase::runner::SccRunner;
use crate::usecase::session::ExplorerSession;
use crate::usecase::stats::RunStats;
use tokio::sync::mpsc;

/// Both algorithms over the same graph.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub tarjan: SccRun,
    pub kosaraju: SccRun,
    /// Same set of components, ignoring order.
    pub agree: bool,
}

/// One stop of a catalog tour.
#[derive(Debug, Clone)]
pub struct TourStep {
    pub index: usize,
    pub name: String,
    pub run: SccRun,
}

pub async fn analyze_graph(
    runner: &SccRunner<'_>,
    name: &str,
    graph: &Graph,
    algorithm: Algorithm,
    sink: &Option<mpsc::Sender<AppEvent>>,
    stats: &mut RunStats,
) -> SccRun {
    emit(
        sink,
        AppEvent::GraphLoaded {
            name: name.to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        },
    )
    .await;
    stats.graphs_seen += 1;

    emit(sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let run = runner.run(graph, algorithm);
    record(sink, graph, &run, stats).await;
    emit(sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    run
}

pub async fn compare_algorithms(
    runner: &SccRunner<'_>,
    name: &str,
    graph: &Graph,
    sink: &Option<mpsc::Sender<AppEvent>>,
    stats: &mut RunStats,
) -> Comparison {
    emit(
        sink,
        AppEvent::GraphLoaded {
            name: name.to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        },
    )
    .await;
    stats.graphs_seen += 1;

    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "compare".into(),
        },
    )
    .await;
    let tarjan = runner.run(graph, Algorithm::Tarjan);
    record(sink, graph, &tarjan, stats).await;
    let kosaraju = runner.run(graph, Algorithm::Kosaraju);
    record(sink, graph, &kosaraju, stats).await;

    let agree = tarjan.result.component_sets() == kosaraju.result.component_sets();
    if !agree {
        stats.disagreements += 1;
    }
    emit(
        sink,
        AppEvent::PartitionsCompared {
            name: name.to_string(),
            agree,
        },
    )
    .await;
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "compare".into(),
        },
    )
    .await;

    Comparison {
        tarjan,
        kosaraju,
        agree,
    }
}

/// Walks every demo graph once, running the selected algorithm and then the
/// other one on each stop, the way a user pressing "toggle" then "next" would.
pub async fn tour_catalog(
    session: &mut ExplorerSession<'_>,
    sink: &Option<mpsc::Sender<AppEvent>>,
    stats: &mut RunStats,
) -> Vec<TourStep> {
    let mut steps = Vec::with_capacity(session.graph_count() * 2);

    emit(sink, AppEvent::PhaseStarted { name: "tour".into() }).await;
    for i in 0..session.graph_count() {
        if i > 0 {
            session.next_graph();
        }
        let demo = session.current_graph();
        let (name, graph) = (demo.name.to_string(), demo.graph.clone());
        emit(
            sink,
            AppEvent::GraphSwitched {
                index: session.current_index(),
                name: name.clone(),
            },
        )
        .await;
        stats.graphs_seen += 1;

        record(sink, &graph, session.last_run(), stats).await;
        steps.push(TourStep {
            index: session.current_index(),
            name: name.clone(),
            run: session.last_run().clone(),
        });

        let toggled = session.toggle_algorithm().clone();
        emit(
            sink,
            AppEvent::AlgorithmToggled {
                algorithm: toggled.algorithm,
            },
        )
        .await;
        record(sink, &graph, &toggled, stats).await;
        steps.push(TourStep {
            index: session.current_index(),
            name,
            run: toggled,
        });
    }
    emit(sink, AppEvent::PhaseFinished { name: "tour".into() }).await;

    steps
}

pub async fn finish(sink: &Option<mpsc::Sender<AppEvent>>, stats: &RunStats) {
    emit(
        sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
}

async fn record(
    sink: &Option<mpsc::Sender<AppEvent>>,
    graph: &Graph,
    run: &SccRun,
    stats: &mut RunStats,
) {
    stats.runs += 1;
    stats.components_found += run.result.component_count();
    stats.cyclic_components += run.result.cyclic_count();
    emit(
        sink,
        AppEvent::SccComputed {
            algorithm: run.algorithm,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: run.result.component_count(),
            cyclic_components: run.result.cyclic_count(),
            elapsed_ms: run.elapsed_ms,
        },
    )
    .await;
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
