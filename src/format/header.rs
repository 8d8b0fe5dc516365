//! Header decoding
//!
//! The header is self-delimiting: every variable-length section is either
//! preceded by its own `u16` count or terminated by a NUL byte, so it decodes in
//! a single forward pass with no lookahead.
//!
//! ```text
//! f32 version | u16 width | u16 height | u16 depth | u16 component_count
//! repeat component_count:
//!   cstring name | cstring format | u16 points | u16 limbs | u16 colors
//!   points × cstring label | limbs × (u16 from, u16 to) | colors × (u16 r, g, b)
//! ```

use crate::cursor::ByteCursor;
use crate::types::{Color, ComponentDescriptor, Header, Limb};
use crate::Result;
use tracing::{debug, trace};

impl Header {
    /// Decode the header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(data);
        Self::parse_from_cursor(&mut cursor)
    }

    /// Decode a header starting at the cursor's position. The cursor is left at
    /// `header_end_offset`.
    pub fn parse_from_cursor(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let version = cursor.read_f32("header version")?;
        let width = cursor.read_u16("header width")?;
        let height = cursor.read_u16("header height")?;
        let depth = cursor.read_u16("header depth")?;
        let component_count = cursor.read_u16("component count")?;

        let mut components = Vec::with_capacity(component_count as usize);
        for _ in 0..component_count {
            components.push(ComponentDescriptor::parse_from_cursor(cursor)?);
        }

        let header_end_offset = cursor.position();
        debug!(
            "Parsed pose header: version={}, dimensions={}x{}x{}, components={}, header_end={}",
            version,
            width,
            height,
            depth,
            components.len(),
            header_end_offset
        );

        Ok(Self { version, width, height, depth, components, header_end_offset })
    }
}

impl ComponentDescriptor {
    pub fn parse_from_cursor(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let name = cursor.read_cstring("component name")?;
        let format = cursor.read_cstring("component format")?;
        let point_count = cursor.read_u16("point count")?;
        let limb_count = cursor.read_u16("limb count")?;
        let color_count = cursor.read_u16("color count")?;

        let mut point_labels = Vec::with_capacity(point_count as usize);
        for _ in 0..point_count {
            point_labels.push(cursor.read_cstring("point label")?);
        }

        let mut limbs = Vec::with_capacity(limb_count as usize);
        for _ in 0..limb_count {
            let from = cursor.read_u16("limb from")?;
            let to = cursor.read_u16("limb to")?;
            limbs.push(Limb { from, to });
        }

        let mut colors = Vec::with_capacity(color_count as usize);
        for _ in 0..color_count {
            let r = cursor.read_u16("color red")?;
            let g = cursor.read_u16("color green")?;
            let b = cursor.read_u16("color blue")?;
            colors.push(Color { r, g, b });
        }

        trace!(
            "Component '{}' format='{}': {} points, {} limbs, {} colors",
            name,
            format,
            point_count,
            limb_count,
            color_count
        );

        Ok(Self { name, format, point_labels, limbs, colors })
    }
}

/// Decode the header region of a pose buffer.
pub fn decode_header(data: &[u8]) -> Result<Header> {
    Header::parse(data)
}
