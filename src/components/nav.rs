use leptos::prelude::*;
use leptos_router::components::A;

use crate::sections::Section;

/// Fixed top bar linking every section.
#[component]
pub fn NavBar() -> impl IntoView {
	view! {
		<nav class="nav-bar">
			<span class="nav-brand">"PORTFOLIO.DEV"</span>
			<div class="nav-links">
				{Section::ALL
					.into_iter()
					.map(|section| {
						view! {
							<A href=section.path() exact=true>
								{section.label()}
							</A>
						}
					})
					.collect_view()}
			</div>
		</nav>
	}
}
