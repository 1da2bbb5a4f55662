// aidvice library - supportive chat with a professional-help gate

pub mod cli;
mod core;
mod error;
mod server;
pub mod tui;

pub use core::{
    Claude, Complete, DISCLAIMER, Message, Role, Router, SYSTEM_PROMPT, Screen, Transcript,
};
pub use error::Error;
pub use server::Server;
