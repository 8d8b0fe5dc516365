//! Pose header model: global metadata plus the ordered component schema.

use serde::{Deserialize, Serialize};

use super::PointLayout;
use crate::{PoseError, Result};

/// Decoded file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Header {
    pub version: f32,
    pub width: u16,
    pub height: u16,
    pub depth: u16,
    /// Components in file order; person arrays in the body follow this order
    pub components: Vec<ComponentDescriptor>,
    /// Byte offset immediately after the last component descriptor
    pub header_end_offset: usize,
}

impl Header {
    /// Position of the component named `name` in the body's per-person arrays.
    pub fn component_index(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name == name)
    }

    pub fn component(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Total floats one person record occupies across all components.
    pub fn floats_per_person(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.point_count().saturating_mul(c.point_width()))
            .fold(0, usize::saturating_add)
    }

    /// Check the component topology for internal consistency.
    ///
    /// Decoding only requires non-empty formats; this additionally rejects limbs
    /// pointing outside their component's points.
    pub fn validate(&self) -> Result<()> {
        for component in &self.components {
            if component.format.is_empty() {
                return Err(PoseError::schema_mismatch(
                    &component.name,
                    "format string is empty, points would have zero width",
                ));
            }

            let points = component.point_count();
            if let Some((index, limb)) = component
                .limbs
                .iter()
                .enumerate()
                .find(|(_, limb)| limb.from as usize >= points || limb.to as usize >= points)
            {
                return Err(PoseError::schema_mismatch(
                    &component.name,
                    format!(
                        "limb {} ({} -> {}) references a point outside 0..{}",
                        index, limb.from, limb.to, points
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// One named group of keypoints sharing a point format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ComponentDescriptor {
    pub name: String,
    /// One character per float channel, e.g. `"xyc"`
    pub format: String,
    pub point_labels: Vec<String>,
    pub limbs: Vec<Limb>,
    pub colors: Vec<Color>,
}

impl ComponentDescriptor {
    /// Points per person for this component.
    pub fn point_count(&self) -> usize {
        self.point_labels.len()
    }

    /// Floats per point.
    pub fn point_width(&self) -> usize {
        self.format.chars().count()
    }

    pub fn layout(&self) -> PointLayout {
        PointLayout::for_width(self.point_width())
    }

    /// Limbs resolved to their endpoint labels. `None` for out-of-range indices.
    pub fn limb_labels(&self) -> impl Iterator<Item = Option<(&str, &str)>> + '_ {
        self.limbs.iter().map(|limb| {
            let from = self.point_labels.get(limb.from as usize)?;
            let to = self.point_labels.get(limb.to as usize)?;
            Some((from.as_str(), to.as_str()))
        })
    }
}

/// Skeleton edge between two point indices of the same component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Limb {
    pub from: u16,
    pub to: u16,
}

/// Display color; channels are stored as 16-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}
