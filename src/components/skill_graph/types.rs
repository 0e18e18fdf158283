use super::category::Category;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillSpec {
	pub label: String,
	pub category: Category,
	pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionSpec {
	pub source: String,
	pub target: String,
	pub strength: f64,
}

/// Static input for one simulation: skills in hover tie-break order plus the
/// weighted links between them.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillCatalog {
	pub skills: Vec<SkillSpec>,
	pub connections: Vec<ConnectionSpec>,
}

impl SkillCatalog {
	pub fn empty() -> Self {
		Self {
			skills: Vec::new(),
			connections: Vec::new(),
		}
	}

	pub fn skill(mut self, label: &str, category: Category, radius: f64) -> Self {
		self.skills.push(SkillSpec {
			label: label.into(),
			category,
			radius,
		});
		self
	}

	pub fn link(mut self, source: &str, target: &str, strength: f64) -> Self {
		self.connections.push(ConnectionSpec {
			source: source.into(),
			target: target.into(),
			strength,
		});
		self
	}
}

impl Default for SkillCatalog {
	fn default() -> Self {
		use Category::*;

		Self::empty()
			.skill("JavaScript", Language, 25.0)
			.skill("TypeScript", Language, 20.0)
			.skill("React", Framework, 24.0)
			.skill("Node.js", Runtime, 22.0)
			.skill("Express.js", Framework, 18.0)
			.skill("MongoDB", Database, 20.0)
			.skill("Firebase", Service, 19.0)
			.skill("AWS", Cloud, 21.0)
			.skill("Next.js", Framework, 23.0)
			.skill("Tailwind", Styling, 17.0)
			.skill("Git", Tool, 16.0)
			.skill("FastAPI", Framework, 15.0)
			.skill("HTML", Language, 14.0)
			.skill("CSS", Styling, 15.0)
			.skill("C++", Language, 13.0)
			.link("JavaScript", "React", 0.9)
			.link("JavaScript", "Node.js", 0.8)
			.link("TypeScript", "React", 0.7)
			.link("React", "Next.js", 0.8)
			.link("Node.js", "Express.js", 0.9)
			.link("MongoDB", "Node.js", 0.7)
			.link("Firebase", "React", 0.6)
			.link("AWS", "Node.js", 0.5)
			.link("Tailwind", "React", 0.6)
			.link("CSS", "HTML", 0.8)
			.link("Git", "JavaScript", 0.4)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_catalog_has_nothing() {
		let catalog = SkillCatalog::empty();
		assert!(catalog.skills.is_empty());
		assert!(catalog.connections.is_empty());
	}

	#[test]
	fn default_catalog_is_the_portfolio_network() {
		let catalog = SkillCatalog::default();
		assert_eq!(catalog.skills.len(), 15);
		assert_eq!(catalog.connections.len(), 11);
		assert_eq!(catalog.skills[0].label, "JavaScript");
		for conn in &catalog.connections {
			assert!(catalog.skills.iter().any(|s| s.label == conn.source));
			assert!(catalog.skills.iter().any(|s| s.label == conn.target));
		}
	}
}
