//! Transient toast notifications, bottom-left, auto-dismissed.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays up before dismissing itself.
const TOAST_MS: u32 = 4000;

/// Success or failure flavour of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	/// Confirmation, e.g. an operation was accepted.
	Success,
	/// Something went wrong and the user should know.
	Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Toast {
	id: u64,
	kind: ToastKind,
	message: String,
}

/// Context handle for raising notifications from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Toaster {
	toasts: RwSignal<Vec<Toast>>,
	next_id: RwSignal<u64>,
}

impl Toaster {
	fn show(&self, kind: ToastKind, message: String) {
		let id = self.next_id.get_untracked();
		self.next_id.set(id + 1);
		self.toasts.update(|toasts| {
			toasts.push(Toast { id, kind, message });
		});

		let toasts = self.toasts;
		Timeout::new(TOAST_MS, move || {
			toasts.update(|list| list.retain(|toast| toast.id != id));
		})
		.forget();
	}

	/// Raise a success toast.
	pub fn success(&self, message: impl Into<String>) {
		self.show(ToastKind::Success, message.into());
	}

	/// Raise an error toast.
	pub fn error(&self, message: impl Into<String>) {
		self.show(ToastKind::Error, message.into());
	}

	fn dismiss(&self, id: u64) {
		self.toasts.update(|list| list.retain(|toast| toast.id != id));
	}
}

/// Install a [`Toaster`] into context and return it.
pub fn provide_toaster() -> Toaster {
	let toaster = Toaster {
		toasts: RwSignal::new(Vec::new()),
		next_id: RwSignal::new(0),
	};
	provide_context(toaster);
	toaster
}

/// Fetch the [`Toaster`] installed by [`provide_toaster`].
pub fn use_toaster() -> Toaster {
	expect_context::<Toaster>()
}

/// Renders the active toast stack. Mount once, near the root.
#[component]
pub fn ToastHost() -> impl IntoView {
	let toaster = use_toaster();

	view! {
		<div class="toast-stack">
			<For
				each=move || toaster.toasts.get()
				key=|toast| toast.id
				children=move |toast| {
					let class = match toast.kind {
						ToastKind::Success => "toast toast-success",
						ToastKind::Error => "toast toast-error",
					};
					let id = toast.id;
					view! {
						<div class=class>
							<span>{toast.message.clone()}</span>
							<button on:click=move |_| toaster.dismiss(id)>"OK"</button>
						</div>
					}
				}
			/>
		</div>
	}
}
