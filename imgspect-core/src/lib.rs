//! Pan, zoom and region-drawing model for an image inspector widget.
//!
//! Three coordinate spaces are kept consistent here: original image pixels
//! (where regions are stored), the zoomed draw surface, and the
//! navigator/viewport the user interacts with. Nothing in this crate touches
//! the DOM; a renderer subscribes to [`Change`] events and draws.

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod imgspect;
pub mod mapper;
pub mod pan;
pub mod regions;
pub mod session;
pub mod types;
pub mod zoom;

pub use config::ImgspectConfig;
pub use error::{ImgspectError, Result};
pub use events::Change;
pub use geometry::ViewportGeometry;
pub use imgspect::Imgspect;
pub use types::{PanOffset, Point, Rect, Region, Size};
