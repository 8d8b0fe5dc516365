//! Schema-driven decoder for binary multi-person body-pose files.
//!
//! A pose file starts with a header describing which keypoint components
//! (body, face, hands, ...) are present and how each point is encoded, followed
//! by a body of frames, each holding zero or more people, each person holding
//! one keypoint array per component.
//!
//! # Features
//!
//! - **Two-pass decoding**: the header is parsed first and becomes the schema for the body
//! - **Bounded reads**: every read is checked; truncated buffers fail instead of panicking
//! - **Flat storage**: each person-component array is one contiguous `Vec<f32>`
//! - **Serde**: all decoded types serialize for handoff to viewers and tooling
//!
//! ## Example
//!
//! ```rust,no_run
//! use pose_format::Pose;
//!
//! fn main() -> pose_format::Result<()> {
//!     let pose = Pose::read("/path/to/video.pose")?;
//!     for frame in &pose.body.frames {
//!         for person in &frame.people {
//!             if let Some(points) = pose.points(person, "pose_keypoints_2d") {
//!                 for point in points.iter() {
//!                     println!("{:?} {:?} {:?}", point.x(), point.y(), point.confidence());
//!                 }
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
pub mod cursor;
mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

// Decoding
pub mod format;
mod pose;

// Core exports
pub use error::*;
pub use types::*;

pub use format::{decode_body, decode_header};
pub use pose::{Pose, decode};
