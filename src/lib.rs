//! Classic grid Snake.
//!
//! The simulation core (`grid`, `snake`, `food`, `game`, `controller`) has no
//! terminal dependency: the controller receives its scheduling, persistence and
//! drawing collaborators through the [`ticker::Ticker`],
//! [`score::ScoreStore`] and [`controller::RenderTarget`] traits. The
//! terminal front end (`renderer`, `ui`, `terminal_runtime`) is what the
//! `grid-snake` binary plugs into them.

pub mod config;
pub mod controller;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod palette;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ticker;
pub mod tint;
pub mod ui;
