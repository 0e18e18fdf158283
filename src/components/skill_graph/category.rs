/// The fixed set of skill categories, in legend order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	Language,
	Framework,
	Runtime,
	Database,
	Service,
	Cloud,
	Styling,
	Tool,
}

impl Category {
	pub const ALL: [Category; 8] = [
		Category::Language,
		Category::Framework,
		Category::Runtime,
		Category::Database,
		Category::Service,
		Category::Cloud,
		Category::Styling,
		Category::Tool,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Category::Language => "language",
			Category::Framework => "framework",
			Category::Runtime => "runtime",
			Category::Database => "database",
			Category::Service => "service",
			Category::Cloud => "cloud",
			Category::Styling => "styling",
			Category::Tool => "tool",
		}
	}

	fn slot(self) -> usize {
		self as usize
	}
}

/// Category to CSS color mapping shared by the canvas and the legend panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPalette {
	colors: [&'static str; 8],
}

impl Default for CategoryPalette {
	fn default() -> Self {
		Self {
			colors: [
				"#22c55e", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#ec4899",
				"#6b7280",
			],
		}
	}
}

impl CategoryPalette {
	pub fn color(&self, category: Category) -> &'static str {
		self.colors[category.slot()]
	}

	/// Legend rows in declaration order.
	pub fn entries(&self) -> impl Iterator<Item = (Category, &'static str)> + '_ {
		Category::ALL.into_iter().map(|c| (c, self.color(c)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn legend_lists_every_category_in_order() {
		let palette = CategoryPalette::default();
		let rows: Vec<_> = palette.entries().collect();
		assert_eq!(rows.len(), 8);
		assert_eq!(rows[0], (Category::Language, "#22c55e"));
		assert_eq!(rows[7], (Category::Tool, "#6b7280"));
	}

	#[test]
	fn every_category_has_its_own_color() {
		let palette = CategoryPalette::default();
		let mut colors: Vec<_> = Category::ALL.iter().map(|&c| palette.color(c)).collect();
		colors.sort_unstable();
		colors.dedup();
		assert_eq!(colors.len(), Category::ALL.len());
		assert_eq!(palette.color(Category::Cloud), "#06b6d4");
	}
}
