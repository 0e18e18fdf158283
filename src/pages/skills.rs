use leptos::prelude::*;

use crate::components::skill_graph::{SkillCatalog, SkillGraphCanvas, SkillLegend};

#[component]
pub fn Skills() -> impl IntoView {
	let catalog = Signal::derive(SkillCatalog::default);
	let hovered = RwSignal::new(None::<String>);

	view! {
		<section class="section skills-section">
			<h2>"Skills Network"</h2>
			<div class="skill-graph-frame">
				<SkillGraphCanvas
					catalog=catalog
					on_hover=Callback::new(move |label: Option<String>| hovered.set(label))
				/>
				<SkillLegend />
			</div>
			<p class="skill-hover">
				{move || match hovered.get() {
					Some(label) => format!("> {label}"),
					None => "> hover a node to inspect it".to_string(),
				}}
			</p>
		</section>
	}
}
