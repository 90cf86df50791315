//! Interactive terminal chat for papo.
//!
//! This module implements the full chat loop: welcome banner, async line
//! input, slash commands, thinking spinner, markdown answer rendering, and
//! feedback submission. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
pub mod session;
