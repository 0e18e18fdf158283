//! Navigable sections of the portfolio and their routes.

/// One page of the portfolio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
	/// The boot terminal shown on load.
	Terminal,
	/// Developer introduction.
	About,
	/// Work history.
	Experience,
	/// Project portfolio.
	Projects,
	/// Skill network.
	Skills,
	/// Contact details.
	Contact,
}

impl Section {
	/// Sections in navigation order.
	pub const ALL: [Section; 6] = [
		Section::Terminal,
		Section::About,
		Section::Experience,
		Section::Projects,
		Section::Skills,
		Section::Contact,
	];

	/// Route path for this section.
	pub fn path(self) -> &'static str {
		match self {
			Section::Terminal => "/",
			Section::About => "/about",
			Section::Experience => "/experience",
			Section::Projects => "/projects",
			Section::Skills => "/skills",
			Section::Contact => "/contact",
		}
	}

	/// Shell-style label shown in the nav bar.
	pub fn label(self) -> &'static str {
		match self {
			Section::Terminal => "~/init",
			Section::About => "~/about",
			Section::Experience => "~/work",
			Section::Projects => "~/projects",
			Section::Skills => "~/skills",
			Section::Contact => "~/contact",
		}
	}
}
