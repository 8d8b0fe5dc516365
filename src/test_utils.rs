//! Test utilities for building pose buffers in memory
//!
//! The crate is decode-only; this encoder exists so tests and benches can
//! produce buffers of a known shape without checked-in fixture files.

#![cfg(any(test, feature = "test-utils"))]

use crate::types::{Color, ComponentDescriptor, Limb};

/// One person record: id plus the flat floats of each component, in header order.
pub type PersonRecord = (i16, Vec<Vec<f32>>);

/// Builder that writes the little-endian pose layout byte for byte.
#[derive(Debug, Clone)]
pub struct PoseBuilder {
    version: f32,
    width: u16,
    height: u16,
    depth: u16,
    components: Vec<ComponentDescriptor>,
    frames: Vec<Vec<PersonRecord>>,
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseBuilder {
    pub fn new() -> Self {
        Self {
            version: 0.1,
            width: 0,
            height: 0,
            depth: 0,
            components: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// A body/face/hands layout similar to OpenPose output, filled with
    /// `frames` frames of `people` people each.
    pub fn openpose_like(frames: usize, people: usize) -> Self {
        let labels = |prefix: &str, n: usize| -> Vec<String> {
            (0..n).map(|i| format!("{}_{}", prefix, i)).collect()
        };
        let mut builder = Self::new().dimensions(1280, 720, 0);
        for (name, count) in [
            ("pose_keypoints_2d", 25),
            ("face_keypoints_2d", 70),
            ("hand_left_keypoints_2d", 21),
            ("hand_right_keypoints_2d", 21),
        ] {
            let point_labels = labels(name, count);
            let refs: Vec<&str> = point_labels.iter().map(String::as_str).collect();
            let limbs: Vec<(u16, u16)> = (1..count as u16).map(|i| (i - 1, i)).collect();
            builder = builder.component(name, "xyc", &refs).with_limbs(&limbs).with_colors(&[
                (255, 0, 0),
                (0, 255, 0),
                (0, 0, 255),
            ]);
        }
        for frame in 0..frames {
            let records = (0..people)
                .map(|p| builder.uniform_person(p as i16, (frame * 10 + p) as f32))
                .collect();
            builder = builder.frame(records);
        }
        builder
    }

    pub fn version(mut self, version: f32) -> Self {
        self.version = version;
        self
    }

    pub fn dimensions(mut self, width: u16, height: u16, depth: u16) -> Self {
        self.width = width;
        self.height = height;
        self.depth = depth;
        self
    }

    pub fn component(mut self, name: &str, format: &str, point_labels: &[&str]) -> Self {
        self.components.push(ComponentDescriptor {
            name: name.to_string(),
            format: format.to_string(),
            point_labels: point_labels.iter().map(|s| s.to_string()).collect(),
            limbs: Vec::new(),
            colors: Vec::new(),
        });
        self
    }

    /// Set limbs on the most recently added component.
    pub fn with_limbs(mut self, limbs: &[(u16, u16)]) -> Self {
        if let Some(component) = self.components.last_mut() {
            component.limbs = limbs.iter().map(|&(from, to)| Limb { from, to }).collect();
        }
        self
    }

    /// Set colors on the most recently added component.
    pub fn with_colors(mut self, colors: &[(u16, u16, u16)]) -> Self {
        if let Some(component) = self.components.last_mut() {
            component.colors = colors.iter().map(|&(r, g, b)| Color { r, g, b }).collect();
        }
        self
    }

    pub fn frame(mut self, people: Vec<PersonRecord>) -> Self {
        self.frames.push(people);
        self
    }

    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    /// A person whose floats count up from `seed`, sized to every component.
    pub fn uniform_person(&self, id: i16, seed: f32) -> PersonRecord {
        let arrays = self
            .components
            .iter()
            .map(|c| {
                let n = c.point_labels.len() * c.format.chars().count();
                (0..n).map(|i| seed + i as f32).collect()
            })
            .collect();
        (id, arrays)
    }

    pub fn encode_header(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.version.to_le_bytes());
        for v in [self.width, self.height, self.depth, self.components.len() as u16] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        for c in &self.components {
            push_cstring(&mut out, &c.name);
            push_cstring(&mut out, &c.format);
            for n in [c.point_labels.len(), c.limbs.len(), c.colors.len()] {
                out.extend_from_slice(&(n as u16).to_le_bytes());
            }
            for label in &c.point_labels {
                push_cstring(&mut out, label);
            }
            for limb in &c.limbs {
                out.extend_from_slice(&limb.from.to_le_bytes());
                out.extend_from_slice(&limb.to.to_le_bytes());
            }
            for color in &c.colors {
                for channel in [color.r, color.g, color.b] {
                    out.extend_from_slice(&channel.to_le_bytes());
                }
            }
        }
        out
    }

    pub fn encode_body(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(self.frames.len() as u16).to_le_bytes());
        for people in &self.frames {
            out.extend_from_slice(&(people.len() as u16).to_le_bytes());
            for (id, arrays) in people {
                out.extend_from_slice(&id.to_le_bytes());
                for value in arrays.iter().flatten() {
                    out.extend_from_slice(&value.to_le_bytes());
                }
            }
        }
        out
    }

    /// Complete file: header immediately followed by body.
    pub fn build(&self) -> Vec<u8> {
        let mut out = self.encode_header();
        out.extend(self.encode_body());
        out
    }
}

fn push_cstring(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(text.as_bytes());
    out.push(0);
}
