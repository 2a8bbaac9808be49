use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded { name, nodes, edges } => {
            json!({"type":"graph_loaded","name":name,"nodes":nodes,"edges":edges})
        }
        AppEvent::SccComputed {
            algorithm,
            nodes,
            edges,
            components,
            cyclic_components,
            elapsed_ms,
        } => {
            json!({"type":"scc_computed","algorithm":algorithm,"nodes":nodes,"edges":edges,"components":components,"cyclic_components":cyclic_components,"elapsed_ms":elapsed_ms})
        }
        AppEvent::AlgorithmToggled { algorithm } => {
            json!({"type":"algorithm_toggled","algorithm":algorithm})
        }
        AppEvent::GraphSwitched { index, name } => {
            json!({"type":"graph_switched","index":index,"name":name})
        }
        AppEvent::PartitionsCompared { name, agree } => {
            json!({"type":"partitions_compared","name":name,"agree":agree})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
