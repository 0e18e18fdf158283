use leptos::prelude::*;

use crate::components::terminal::TerminalInterface;

/// Landing page: the boot terminal.
#[component]
pub fn Home() -> impl IntoView {
	let booted = RwSignal::new(false);

	view! {
		<section class="section terminal-section">
			<TerminalInterface on_complete=Callback::new(move |_| booted.set(true)) />
			<Show when=move || booted.get()>
				<p class="subtitle">"Use the nav bar or type a command to explore."</p>
			</Show>
		</section>
	}
}
