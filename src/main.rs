//! Binary entry point: mount the dashboard into the document body.

use train_fleet_dashboard::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
