//! Pose body model: frames of people of per-component point arrays.

use serde::{Deserialize, Serialize};

use super::PointArray;

/// All decoded frames, materialized eagerly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Body {
    pub frames: Vec<Frame>,
}

impl Body {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// People per frame, in frame order.
    pub fn people_counts(&self) -> Vec<usize> {
        self.frames.iter().map(Frame::person_count).collect()
    }

    /// Largest number of people in any single frame.
    pub fn max_people(&self) -> usize {
        self.frames.iter().map(Frame::person_count).max().unwrap_or(0)
    }
}

/// One time-step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Frame {
    pub people: Vec<Person>,
}

impl Frame {
    pub fn person_count(&self) -> usize {
        self.people.len()
    }
}

/// One detected individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Person {
    pub id: i16,
    /// One array per header component, in header order
    pub components: Vec<PointArray>,
}

impl Person {
    /// Points for the component at `index` in the header.
    pub fn component(&self, index: usize) -> Option<&PointArray> {
        self.components.get(index)
    }
}
