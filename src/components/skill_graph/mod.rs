mod animation;
mod category;
mod component;
mod legend;
mod render;
mod state;
mod types;

pub use component::SkillGraphCanvas;
pub use legend::SkillLegend;
pub use types::SkillCatalog;
