//! Left-panel list of trains derived from the current topology.

use leptos::prelude::*;

use crate::topology::TrainListEntry;

/// Card list of all trains (every node except the anchor, in order), with a
/// waiting state while the first topology fetch is in flight.
#[component]
pub fn TrainList(
	/// Entries derived from the current graph model.
	#[prop(into)]
	trains: Signal<Vec<TrainListEntry>>,
	/// True while a topology fetch is outstanding.
	#[prop(into)]
	waiting: Signal<bool>,
	/// Fired when the user picks a train to operate.
	#[prop(into)]
	on_select: Callback<TrainListEntry>,
) -> impl IntoView {
	view! {
		<div class="train-list">
			<h2>"Trains"</h2>
			<Show when=move || waiting.get()>
				<p class="train-list-waiting">"Loading trains..."</p>
			</Show>
			<Show when=move || !waiting.get() && trains.get().is_empty()>
				<p class="train-list-waiting">"No trains in topology."</p>
			</Show>
			<For
				each=move || trains.get()
				key=|entry| entry.loco_id.clone()
				children=move |entry| {
					let selected = entry.clone();
					view! {
						<div class="train-card">
							<span class="train-card-label">{entry.label.clone()}</span>
							<button on:click=move |_| on_select.run(selected.clone())>
								"View operations"
							</button>
						</div>
					}
				}
			/>
		</div>
	}
}
