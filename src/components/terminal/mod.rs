mod component;
mod session;

pub use component::TerminalInterface;
