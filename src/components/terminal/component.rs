use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use log::{info, warn};
use web_sys::KeyboardEvent;

use super::session::{BootStep, TerminalSession};

const TICK: Duration = Duration::from_millis(500);
const NAVIGATE_DELAY: Duration = Duration::from_millis(1000);

trait Cancel {
	fn cancel(self);
}

impl Cancel for TimeoutHandle {
	fn cancel(self) {
		self.clear();
	}
}

/// The delayed navigation that has not fired yet. A newer command cancels
/// the older timer; once closed, every pending or later timer is cancelled.
struct PendingNavigation<H> {
	slot: Option<H>,
	closed: bool,
}

impl<H: Cancel> PendingNavigation<H> {
	fn new() -> Self {
		Self {
			slot: None,
			closed: false,
		}
	}

	fn arm(&mut self, handle: H) {
		if self.closed {
			handle.cancel();
			return;
		}
		if let Some(previous) = self.slot.replace(handle) {
			previous.cancel();
		}
	}

	fn fired(&mut self) {
		self.slot = None;
	}

	fn close(&mut self) {
		self.closed = true;
		if let Some(handle) = self.slot.take() {
			handle.cancel();
		}
	}
}

type SharedPending = Arc<Mutex<PendingNavigation<TimeoutHandle>>>;

fn with_pending(pending: &SharedPending, f: impl FnOnce(&mut PendingNavigation<TimeoutHandle>)) {
	f(&mut pending.lock().unwrap_or_else(PoisonError::into_inner));
}

#[component]
pub fn TerminalInterface(#[prop(optional)] on_complete: Option<Callback<()>>) -> impl IntoView {
	let session = RwSignal::new(TerminalSession::default());
	let input = RwSignal::new(String::new());
	let cursor_visible = RwSignal::new(true);
	let navigate = use_navigate();
	let pending: SharedPending = Arc::new(Mutex::new(PendingNavigation::new()));

	// One tick types the next boot line and blinks the cursor.
	match set_interval_with_handle(
		move || {
			cursor_visible.update(|v| *v = !*v);
			if session.try_update(TerminalSession::advance) == Some(BootStep::Finished) {
				info!("terminal boot sequence complete");
				if let Some(cb) = on_complete {
					cb.run(());
				}
			}
		},
		TICK,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => warn!("terminal timer unavailable: {err:?}"),
	}
	let pending_cleanup = pending.clone();
	on_cleanup(move || with_pending(&pending_cleanup, PendingNavigation::close));

	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() != "Enter" {
			return;
		}
		let line = input.get_untracked();
		input.set(String::new());
		let Some(section) = session.try_update(|s| s.submit(&line)).flatten() else {
			return;
		};
		let (navigate, pending_fire) = (navigate.clone(), pending.clone());
		match set_timeout_with_handle(
			move || {
				with_pending(&pending_fire, PendingNavigation::fired);
				navigate(section.path(), Default::default());
			},
			NAVIGATE_DELAY,
		) {
			Ok(handle) => with_pending(&pending, |p| p.arm(handle)),
			Err(err) => warn!("navigation timer unavailable: {err:?}"),
		}
	};

	view! {
		<div class="terminal">
			<div class="terminal-header">
				<span class="terminal-dot red" />
				<span class="terminal-dot yellow" />
				<span class="terminal-dot green" />
				<span class="terminal-title">"visitor@portfolio:~$"</span>
			</div>
			<div class="terminal-body">
				{move || {
					session
						.with(|s| {
							s.lines()
								.iter()
								.map(|line| view! { <div class="terminal-line">{line.clone()}</div> })
								.collect_view()
						})
				}}
				<div class="terminal-prompt">
					<span class="terminal-sigil">"$"</span>
					<input
						type="text"
						class="terminal-input"
						autofocus=true
						prop:value=move || input.get()
						on:input=move |ev| input.set(event_target_value(&ev))
						on:keydown=on_keydown
					/>
					<span
						class="terminal-cursor"
						style:opacity=move || if cursor_visible.get() { "1" } else { "0" }
					>
						"\u{2588}"
					</span>
				</div>
			</div>
		</div>
	}
}
