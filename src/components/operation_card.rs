//! Right-panel card exposing the control operations for a selected train.

use leptos::prelude::*;

use crate::topology::TrainListEntry;

/// The operations every train supports. Static by design; the controller does
/// not advertise capabilities.
pub const OPERATIONS: &[&str] = &["headlight", "bell"];

/// One (loco id, operation, value) triple ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationRequest {
	/// Target locomotive.
	pub loco_id: String,
	/// Operation name, one of [`OPERATIONS`].
	pub operation: String,
	/// Operation value, `"on"` or `"off"`.
	pub value: String,
}

/// Operation card for the currently selected train; delegates the actual send
/// to the shell via `on_send`.
#[component]
pub fn OperationCard(
	/// Currently selected train, if any.
	#[prop(into)]
	selection: Signal<Option<TrainListEntry>>,
	/// Fired once per requested operation.
	#[prop(into)]
	on_send: Callback<OperationRequest>,
) -> impl IntoView {
	view! {
		<div class="operation-card">
			{move || {
				selection
					.get()
					.map(|train| {
						view! {
							<h2>{train.label.clone()}</h2>
							<For
								each=|| OPERATIONS.iter().copied()
								key=|oper| *oper
								children=move |oper| {
									let loco_id = train.loco_id.clone();
									let send = move |value: &str| {
										on_send
											.run(OperationRequest {
												loco_id: loco_id.clone(),
												operation: oper.to_owned(),
												value: value.to_owned(),
											});
									};
									let send_on = send.clone();
									view! {
										<div class="operation-row">
											<span class="operation-name">{oper}</span>
											<button on:click=move |_| send_on("on")>"On"</button>
											<button on:click=move |_| send("off")>"Off"</button>
										</div>
									}
								}
							/>
						}
					})
			}}
			<Show when=move || selection.get().is_none()>
				<p class="operation-hint">"Select a train to see its operations."</p>
			</Show>
		</div>
	}
}
