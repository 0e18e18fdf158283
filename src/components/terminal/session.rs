use log::debug;

use crate::sections::Section;

pub const BOOT_SCRIPT: &[&str] = &[
	"Initializing portfolio system...",
	"Loading developer profile...",
	"Connecting to GitHub repositories...",
	"Fetching project data...",
	"Compiling skills matrix...",
	"System ready!",
	"",
	"Welcome to the Portfolio Terminal",
	"Type 'help' for available commands",
	"",
];

const HELP: &[&str] = &[
	"Available commands:",
	"  about     - View developer information",
	"  work      - Show work experience",
	"  projects  - Display project portfolio",
	"  skills    - Show technical skills",
	"  contact   - Get contact information",
	"  clear     - Clear terminal",
	"",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	Help,
	Clear,
	Navigate(Section),
}

impl Command {
	/// Case-insensitive, surrounding whitespace ignored.
	pub fn parse(input: &str) -> Option<Command> {
		let command = match input.trim().to_lowercase().as_str() {
			"help" => Command::Help,
			"clear" => Command::Clear,
			"about" => Command::Navigate(Section::About),
			"work" => Command::Navigate(Section::Experience),
			"projects" => Command::Navigate(Section::Projects),
			"skills" => Command::Navigate(Section::Skills),
			"contact" => Command::Navigate(Section::Contact),
			_ => return None,
		};
		Some(command)
	}

	fn status(self) -> &'static str {
		match self {
			Command::Navigate(Section::About) => "Navigating to about section...",
			Command::Navigate(Section::Experience) => "Loading work experience...",
			Command::Navigate(Section::Projects) => "Initializing project viewer...",
			Command::Navigate(Section::Skills) => "Rendering skills network...",
			Command::Navigate(Section::Contact) => "Opening contact interface...",
			Command::Navigate(Section::Terminal) | Command::Help | Command::Clear => "",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootStep {
	/// Another script line became visible.
	Revealed,
	/// The last script line became visible. Reported once.
	Finished,
	/// Nothing left to type.
	Idle,
}

/// Scripted terminal: reveals the boot script a line per tick and
/// interprets submitted commands.
#[derive(Clone, Debug)]
pub struct TerminalSession {
	script: Vec<String>,
	revealed: usize,
	lines: Vec<String>,
}

impl Default for TerminalSession {
	fn default() -> Self {
		Self::new(BOOT_SCRIPT.iter().copied())
	}
}

impl TerminalSession {
	pub fn new<I, S>(script: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			script: script.into_iter().map(Into::into).collect(),
			revealed: 0,
			lines: Vec::new(),
		}
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn is_booted(&self) -> bool {
		self.revealed >= self.script.len()
	}

	pub fn advance(&mut self) -> BootStep {
		let Some(line) = self.script.get(self.revealed) else {
			return BootStep::Idle;
		};
		self.lines.push(line.clone());
		self.revealed += 1;
		if self.is_booted() {
			BootStep::Finished
		} else {
			BootStep::Revealed
		}
	}

	/// Runs one input line. Returns the section to navigate to, if the
	/// command asks for one.
	pub fn submit(&mut self, input: &str) -> Option<Section> {
		let Some(command) = Command::parse(input) else {
			debug!("unknown terminal command {input:?}");
			self.lines.extend([
				format!("$ {input}"),
				format!("Command not found: {input}"),
				"Type 'help' for available commands".into(),
				String::new(),
			]);
			return None;
		};

		match command {
			Command::Clear => {
				self.lines.clear();
				None
			}
			Command::Help => {
				self.lines.push(format!("$ {input}"));
				self.lines.extend(HELP.iter().map(|l| l.to_string()));
				None
			}
			Command::Navigate(section) => {
				self.lines.push(format!("$ {input}"));
				self.lines.push(command.status().into());
				Some(section)
			}
		}
	}
}
