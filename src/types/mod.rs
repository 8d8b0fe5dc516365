//! Core types for decoded pose data.
//!
//! ## Architecture
//!
//! The model mirrors the two halves of a pose file:
//! - [`Header`] holds global metadata and the ordered [`ComponentDescriptor`] schema
//! - [`Body`] holds [`Frame`]s of [`Person`]s, each with one [`PointArray`] per component
//! - [`Point`] is a borrowed view over one keypoint's floats, named through the
//!   fixed [`PointLayout`] width convention
//!
//! Person arrays are positional: `person.components[i]` belongs to
//! `header.components[i]`. Use [`Header::component_index`] to go from a name to
//! that position.
//!
//! ## Usage Example
//!
//! ```rust
//! use pose_format::types::{Channel, PointArray};
//!
//! let array = PointArray { width: 3, values: vec![10.0, 20.0, 0.9] };
//! let nose = array.get(0).unwrap();
//! assert_eq!(nose.x(), Some(10.0));
//! assert_eq!(nose.get(Channel::Confidence), Some(0.9));
//! ```

mod body;
mod header;
mod point;

pub use body::{Body, Frame, Person};
pub use header::{Color, ComponentDescriptor, Header, Limb};
pub use point::{Channel, Point, PointArray, PointLayout};
