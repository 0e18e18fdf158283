//! Leptos client-side portfolio: navigation shell, boot terminal and the
//! animated skill network.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod pages;
mod sections;

use crate::components::nav::NavBar;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::profile::{About, Contact, Experience, Projects};
use crate::pages::skills::Skills;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The portfolio shell: nav bar over one routed section.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Portfolio Terminal" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<NavBar />
			<main class="portfolio">
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/about") view=About />
					<Route path=path!("/experience") view=Experience />
					<Route path=path!("/projects") view=Projects />
					<Route path=path!("/skills") view=Skills />
					<Route path=path!("/contact") view=Contact />
				</Routes>
			</main>
		</Router>
	}
}
