use leptos::prelude::*;

use super::category::CategoryPalette;

#[component]
pub fn SkillLegend(#[prop(optional)] palette: CategoryPalette) -> impl IntoView {
	let rows = palette
		.entries()
		.map(|(category, color)| {
			view! {
				<li class="legend-row">
					<span class="legend-swatch" style=format!("background-color: {color};") />
					<span class="legend-label">{category.as_str()}</span>
				</li>
			}
		})
		.collect_view();

	view! {
		<div class="skill-legend">
			<h3>"Legend"</h3>
			<ul>{rows}</ul>
		</div>
	}
}
