// core logic - screening, routing, and the claude client

mod ai;
mod chat;
mod router;
mod screen;

pub use ai::{Claude, Complete, MODEL};
pub use chat::{Message, Role, Transcript};
pub use router::{DISCLAIMER, Router, SYSTEM_PROMPT};
pub use screen::Screen;
