use leptos::prelude::*;

use crate::sections::Section;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="section">
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<p>
				<a href=Section::Terminal.path()>"cd ~"</a>
			</p>
		</section>
	}
}
