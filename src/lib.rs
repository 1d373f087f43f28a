//! `sense_layers` composites layered, animated images for an 8x8 RGB LED matrix.
//!
//! # Pipeline overview
//!
//! 1. **Layer**: `Layer + FrameIndex -> Frame` (static image, optionally wrapped in scroll/flash
//!    transforms)
//! 2. **Composite**: `LayerStack + FrameIndex -> Frame` (alpha blending, last-added layer on top)
//! 3. **Export**: `Frame -> [Rgb8; 64]` (row-major, optionally premultiplied by alpha)
//! 4. **Drive** (optional): an [`Animator`] paces exported frames into a [`DisplaySink`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure rendering**: every render call is a function of the stack configuration and the index,
//!   so frames may be rendered in any order and from any thread.
//! - **No hardware access**: the display is an opaque [`DisplaySink`].
//!
//! # Example
//!
//! ```
//! use sense_layers::{Direction, FrameIndex, LayerStack, PIXEL_COUNT};
//!
//! let mut stack = LayerStack::new("demo");
//! stack.add_layer(&[[255, 0, 0]; PIXEL_COUNT], &[255; PIXEL_COUNT], "red")?;
//!
//! let mut dot = vec![[0, 0, 0]; PIXEL_COUNT];
//! dot[0] = [255, 255, 255];
//! let mut alpha = vec![0; PIXEL_COUNT];
//! alpha[0] = 255;
//! stack.add_layer(&dot, &alpha, "dot")?;
//! stack.add_effect_scrolling("dot", Direction::E, 0)?;
//!
//! let pixels = stack.pixels_at(FrameIndex(3), true);
//! assert_eq!(pixels[3], [255, 255, 255]);
//! assert_eq!(pixels[0], [255, 0, 0]);
//! # Ok::<(), sense_layers::LayersError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod display;
mod foundation;
mod layer;
mod pixels;
mod scene;
mod stack;

pub use display::animator::{AnimationConfig, Animator, RunReport};
pub use display::cancel::CancelToken;
pub use display::graph::{BarGraph, DEFAULT_BAR_COLOUR};
pub use display::sink::{DisplaySink, RecordingSink};
pub use foundation::core::{
    AlphaGrid, Axis, Direction, FrameIndex, HEIGHT, PIXEL_COUNT, Rgb8, RgbGrid, WIDTH, mul_div255,
};
pub use foundation::error::{ErrorKind, LayersError, LayersResult};
pub use layer::effect::Effect;
pub use layer::flash::{DEFAULT_FLASH_PATTERN, FlashingLayer};
pub use layer::model::Layer;
pub use layer::scroll::ScrollingLayer;
pub use layer::static_layer::StaticLayer;
pub use pixels::composite::{compose, compose_opt, composite_back_to_front};
pub use pixels::frame::Frame;
pub use pixels::input::{PixelData, composite_json};
pub use scene::model::{Scene, SceneLayer};
pub use stack::layer_ref::LayerRef;
pub use stack::layer_stack::LayerStack;
pub use stack::sequence::FrameSequence;
