//! Top-level decode entry point.
//!
//! [`Pose::from_bytes`] is the core operation: an in-memory buffer in, a
//! header/body pair out. [`Pose::read`] and [`Pose::open`] are conveniences that
//! load a whole file first and then decode it the same way.

use crate::format::{decode_body, decode_header};
use crate::types::{Body, Frame, Header, Person, PointArray};
use crate::{PoseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A fully decoded pose file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Pose {
    pub header: Header,
    pub body: Body,
}

impl Pose {
    /// Decode a complete pose buffer. No partial result is returned on failure.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = decode_header(data)?;
        let body = decode_body(data, &header)?;
        Ok(Self { header, body })
    }

    /// Read and decode a pose file (blocking).
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data =
            std::fs::read(path).map_err(|e| PoseError::file_error(path.to_path_buf(), e))?;
        Self::from_file_bytes(&data, path)
    }

    /// Read and decode a pose file without blocking the async runtime on I/O.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data =
            tokio::fs::read(path).await.map_err(|e| PoseError::file_error(path.to_path_buf(), e))?;
        Self::from_file_bytes(&data, path)
    }

    fn from_file_bytes(data: &[u8], path: &Path) -> Result<Self> {
        let pose = Self::from_bytes(data)?;
        info!(
            "Decoded pose file {}: {} components, {} frames",
            path.display(),
            pose.header.components.len(),
            pose.body.frame_count()
        );
        Ok(pose)
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.body.frames.get(index)
    }

    /// Points of the component named `component` for `person`.
    pub fn points<'a>(&self, person: &'a Person, component: &str) -> Option<&'a PointArray> {
        self.header.component_index(component).and_then(|i| person.component(i))
    }
}

/// Decode a complete pose buffer into its header and body.
pub fn decode(data: &[u8]) -> Result<Pose> {
    Pose::from_bytes(data)
}
