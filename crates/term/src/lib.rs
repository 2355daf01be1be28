//! Terminal presentation for the raycaster.
//!
//! A small, game-oriented rendering layer: the engine's glyph frame is laid
//! out into a styled framebuffer (plus HUD and minimap overlays) and flushed
//! to the terminal with crossterm, redrawing only cells that changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure ([`view`]) and I/O isolated ([`renderer`])
//! - Plug into the frame loop as an [`engine::Presenter`](crate::engine::Presenter)

pub mod fb;
pub mod presenter;
pub mod renderer;
pub mod view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use presenter::TerminalPresenter;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{glyph_style, ScreenView, Viewport};
