use super::render::{RenderStyle, Surface, render};
use super::state::SkillGraphState;

/// Drives one simulation a frame at a time until stopped.
///
/// The browser scheduler calls [`FrameLoop::frame`] from its animation
/// callback and only re-arms while it returns `true`.
pub struct FrameLoop {
	state: SkillGraphState,
	style: RenderStyle,
	frames: u64,
	stopped: bool,
}

impl FrameLoop {
	pub fn new(state: SkillGraphState, style: RenderStyle) -> Self {
		Self {
			state,
			style,
			frames: 0,
			stopped: false,
		}
	}

	/// Steps and draws one frame. Returns whether another frame should be
	/// scheduled.
	pub fn frame<S: Surface + ?Sized>(&mut self, surface: &S) -> bool {
		if self.stopped {
			return false;
		}
		self.state.tick();
		render(&self.state, &self.style, surface);
		self.frames += 1;
		true
	}

	/// Idempotent. Returns `true` only for the call that actually stopped.
	pub fn stop(&mut self) -> bool {
		if self.stopped {
			return false;
		}
		self.stopped = true;
		true
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}

	pub fn state(&self) -> &SkillGraphState {
		&self.state
	}

	pub fn state_mut(&mut self) -> &mut SkillGraphState {
		&mut self.state
	}
}
