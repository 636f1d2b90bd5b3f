//! The dashboard shell: panels, graph view, and client wiring.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{CommandClient, TopologyClient};
use crate::components::{
	use_toaster, FleetGraphCanvas, OperationCard, OperationRequest, TrainList,
};
use crate::config::DashboardConfig;
use crate::topology::{FleetNode, GraphModel, TrainListEntry};

/// Dashboard page: left train list (toggle), central graph, right operation
/// panel (opened by selecting a train).
#[component]
pub fn Home() -> impl IntoView {
	let config = DashboardConfig::default();
	let toaster = use_toaster();

	let topology_client = TopologyClient::new(config.clone());
	let command_client = CommandClient::new(config.clone());

	// Replaced wholesale on every fetch; a later fetch simply wins.
	let graph = RwSignal::new(GraphModel::default());
	let loading = RwSignal::new(true);
	let selected: RwSignal<Option<TrainListEntry>> = RwSignal::new(None);
	let left_open = RwSignal::new(true);
	let right_open = RwSignal::new(false);

	let fetch = {
		let client = topology_client.clone();
		move || {
			let client = client.clone();
			loading.set(true);
			spawn_local(async move {
				match client.fetch_topology().await {
					Ok(model) => graph.set(model),
					Err(err) => {
						log::error!("topology fetch failed: {err}");
						toaster.error("Error loading train topology.");
					}
				}
				// The loading flag clears on both arms, so the panel never
				// hangs in its waiting state after a failed fetch.
				loading.set(false);
			});
		}
	};
	fetch();
	let refresh = fetch.clone();

	let trains = Signal::derive(move || graph.get().train_entries());

	let select_train = Callback::new(move |entry: TrainListEntry| {
		selected.set(Some(entry));
		right_open.set(true);
	});

	let on_node_click = Callback::new(move |node: FleetNode| {
		log::info!("clicked node: {node:?}");
		if let Some(loco_id) = node.loco_id {
			selected.set(Some(TrainListEntry {
				loco_id,
				label: node.label,
			}));
			right_open.set(true);
		}
	});

	let send_operation = {
		let client = command_client.clone();
		Callback::new(move |request: OperationRequest| {
			let client = client.clone();
			spawn_local(async move {
				match client
					.send_command(&request.loco_id, &request.operation, &request.value)
					.await
				{
					Ok(()) => toaster.success("Operation sent!"),
					Err(err) => {
						log::error!("command send failed: {err}");
						toaster.error("Error sending operation.");
					}
				}
			});
		})
	};

	let anchor_name = config.anchor_name.clone();

	view! {
		<div class="dashboard">
			<header class="toolbar">
				<button
					class="toolbar-button"
					on:click=move |_| left_open.update(|open| *open = !*open)
				>
					"Trains"
				</button>
				<h1>"Train Fleet Dashboard"</h1>
				<button class="toolbar-button" on:click=move |_| refresh()>
					"Refresh"
				</button>
			</header>
			<div class="dashboard-body">
				<aside class="panel panel-left" class:open=move || left_open.get()>
					<TrainList trains=trains waiting=loading on_select=select_train />
				</aside>
				<main class="graph-container">
					<FleetGraphCanvas
						data=graph
						anchor_name=anchor_name
						on_node_click=on_node_click
					/>
				</main>
				<aside class="panel panel-right" class:open=move || right_open.get()>
					<button class="panel-close" on:click=move |_| right_open.set(false)>
						"Close"
					</button>
					<OperationCard selection=selected on_send=send_operation />
				</aside>
			</div>
		</div>
	}
}
