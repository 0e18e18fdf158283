//! Text-only sections. Their prose lives outside this crate.

use leptos::prelude::*;

use crate::sections::Section;

#[component]
fn SectionPage(section: Section, title: &'static str, blurb: &'static str) -> impl IntoView {
	view! {
		<section class="section">
			<p class="section-path">{section.label()}</p>
			<h2>{title}</h2>
			<p>{blurb}</p>
		</section>
	}
}

#[component]
pub fn About() -> impl IntoView {
	view! {
		<SectionPage
			section=Section::About
			title="About"
			blurb="Full-stack developer building for the web."
		/>
	}
}

#[component]
pub fn Experience() -> impl IntoView {
	view! {
		<SectionPage
			section=Section::Experience
			title="Experience"
			blurb="Roles and responsibilities, most recent first."
		/>
	}
}

#[component]
pub fn Projects() -> impl IntoView {
	view! {
		<SectionPage
			section=Section::Projects
			title="Projects"
			blurb="Selected work and side projects."
		/>
	}
}

#[component]
pub fn Contact() -> impl IntoView {
	view! {
		<SectionPage
			section=Section::Contact
			title="Contact"
			blurb="Reach out about collaborations or opportunities."
		/>
	}
}
