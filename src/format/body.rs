//! Body decoding
//!
//! Record shapes in the body are fixed by the header: every person carries one
//! array per component, in header order, each holding `point_count` points of
//! `format.len()` floats. [`PersonShape`] captures that once and is applied to
//! every person in every frame.
//!
//! ```text
//! u16 frame_count
//! repeat frame_count:
//!   u16 person_count
//!   repeat person_count:
//!     i16 id
//!     for each component: point_count × width × f32
//! ```

use crate::cursor::ByteCursor;
use crate::types::{Body, Frame, Header, Person, PointArray};
use crate::{PoseError, Result};
use tracing::{debug, trace};

/// Points and floats-per-point of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ComponentShape {
    points: usize,
    width: usize,
}

/// Per-person record layout derived once from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonShape {
    components: Vec<ComponentShape>,
}

impl PersonShape {
    /// Build the record layout, rejecting components whose points would have
    /// zero width.
    pub fn from_header(header: &Header) -> Result<Self> {
        let components = header
            .components
            .iter()
            .map(|component| {
                let width = component.point_width();
                if width == 0 {
                    return Err(PoseError::schema_mismatch(
                        &component.name,
                        "format string is empty, points would have zero width",
                    ));
                }
                Ok(ComponentShape { points: component.point_count(), width })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { components })
    }

    /// Bytes one person record occupies, including its id.
    pub fn record_size(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.points.saturating_mul(c.width).saturating_mul(4))
            .fold(2, usize::saturating_add)
    }

    fn read_person(&self, cursor: &mut ByteCursor<'_>) -> Result<Person> {
        let id = cursor.read_i16("person id")?;
        let mut components = Vec::with_capacity(self.components.len());
        for shape in &self.components {
            let floats = shape.points.saturating_mul(shape.width);
            // Counts come from the header; never reserve more than the buffer can hold
            let mut array = PointArray::with_capacity(
                shape.width,
                shape.points.min(cursor.remaining() / 4 / shape.width),
            );
            for _ in 0..floats {
                array.values.push(cursor.read_f32("point channel")?);
            }
            components.push(array);
        }
        Ok(Person { id, components })
    }
}

/// Decode the body of `data` using the record layout described by `header`.
///
/// Reading starts at `header.header_end_offset` regardless of any prior cursor.
pub fn decode_body(data: &[u8], header: &Header) -> Result<Body> {
    let shape = PersonShape::from_header(header)?;

    let mut cursor = ByteCursor::new(data);
    cursor.seek(header.header_end_offset);

    let frame_count = cursor.read_u16("frame count")?;
    debug!(
        "Decoding {} frames, person record size {} bytes",
        frame_count,
        shape.record_size()
    );

    let mut frames = Vec::with_capacity((frame_count as usize).min(cursor.remaining() / 2));
    for index in 0..frame_count {
        let person_count = cursor.read_u16("person count")?;
        trace!("Frame {}: {} people at offset {}", index, person_count, cursor.position());

        let mut people = Vec::with_capacity((person_count as usize).min(cursor.remaining() / 2));
        for _ in 0..person_count {
            people.push(shape.read_person(&mut cursor)?);
        }
        frames.push(Frame { people });
    }

    Ok(Body { frames })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::header::decode_header;
    use crate::test_utils::PoseBuilder;
    use anyhow::{Context, Result};
    use proptest::prelude::*;

    fn nose_only() -> PoseBuilder {
        PoseBuilder::new().component("pose_keypoints_2d", "xyc", &["Nose"])
    }

    #[test]
    fn decodes_single_person_point() -> Result<()> {
        let data = nose_only().frame(vec![(-1, vec![vec![10.0, 20.0, 0.9]])]).build();
        let header = decode_header(&data)?;
        let body = decode_body(&data, &header).context("Decoding single-person body")?;

        assert_eq!(body.frame_count(), 1);
        let person = &body.frames[0].people[0];
        assert_eq!(person.id, -1);

        let nose = person.components[0].get(0).context("nose point")?;
        assert_eq!(nose.x(), Some(10.0));
        assert_eq!(nose.y(), Some(20.0));
        assert_eq!(nose.confidence(), Some(0.9));
        Ok(())
    }

    #[test]
    fn person_arrays_follow_header_order() -> Result<()> {
        let builder = PoseBuilder::new()
            .component("hand", "xy", &["a", "b"])
            .component("body", "xyzc", &["c"]);
        let data = builder
            .clone()
            .frame(vec![(7, vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]])])
            .build();
        let header = decode_header(&data)?;
        let body = decode_body(&data, &header)?;

        let person = &body.frames[0].people[0];
        assert_eq!(person.components.len(), 2);
        assert_eq!(person.components[0].width, 2);
        assert_eq!(person.components[0].len(), 2);
        assert_eq!(person.components[0].values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(person.components[1].get(0).and_then(|p| p.z()), Some(7.0));
        Ok(())
    }

    #[test]
    fn zero_length_sequences_decode_to_empty_containers() -> Result<()> {
        // No frames at all
        let data = nose_only().build();
        let header = decode_header(&data)?;
        assert!(decode_body(&data, &header)?.frames.is_empty());

        // A frame with nobody in it, and a component with no points
        let data = PoseBuilder::new()
            .component("empty", "xyc", &[])
            .frame(Vec::new())
            .frame(vec![(0, vec![Vec::new()])])
            .build();
        let header = decode_header(&data)?;
        let body = decode_body(&data, &header)?;
        assert_eq!(body.people_counts(), vec![0, 1]);
        assert!(body.frames[1].people[0].components[0].is_empty());

        // No components: people are just ids
        let data = PoseBuilder::new().frame(vec![(3, Vec::new())]).build();
        let header = decode_header(&data)?;
        let body = decode_body(&data, &header)?;
        assert_eq!(body.frames[0].people[0].id, 3);
        assert!(body.frames[0].people[0].components.is_empty());
        Ok(())
    }

    #[test]
    fn empty_format_is_schema_mismatch_before_any_read() -> Result<()> {
        let data = PoseBuilder::new().component("broken", "", &["p"]).encode_header();
        let header = decode_header(&data)?;
        // The body is missing entirely; the schema check must fire first
        match decode_body(&data, &header) {
            Err(PoseError::SchemaMismatch { component, .. }) => assert_eq!(component, "broken"),
            other => panic!("Expected SchemaMismatch, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn truncated_body_fails() -> Result<()> {
        let data = nose_only().frame(vec![(1, vec![vec![1.0, 2.0, 3.0]])]).build();
        let header = decode_header(&data)?;
        let result = decode_body(&data[..data.len() - 1], &header);
        assert!(matches!(
            result,
            Err(PoseError::TruncatedBuffer { context: "point channel", .. })
        ));

        let result = decode_body(&data[..header.header_end_offset], &header);
        assert!(matches!(
            result,
            Err(PoseError::TruncatedBuffer { context: "frame count", .. })
        ));
        Ok(())
    }

    #[test]
    fn oversized_declared_points_fail_without_huge_reservation() -> Result<()> {
        // 65535 points of 4,000,000 floats each, but the person record stops at its id
        let format = "x".repeat(4_000_000);
        let labels = vec![""; 65535];
        let data = PoseBuilder::new()
            .component("wide", &format, &labels)
            .frame(vec![(0, Vec::new())])
            .build();
        let header = decode_header(&data)?;

        match decode_body(&data, &header) {
            Err(PoseError::TruncatedBuffer { context, available, .. }) => {
                assert_eq!(context, "point channel");
                assert_eq!(available, 0);
            }
            other => panic!("Expected TruncatedBuffer, got {:?}", other.map(|b| b.frame_count())),
        }
        Ok(())
    }

    #[test]
    fn oversized_declared_counts_fail_gracefully() -> Result<()> {
        let mut data = nose_only().encode_header();
        // 65535 frames, the first claiming 65535 people, and nothing else
        data.extend_from_slice(&u16::MAX.to_le_bytes());
        data.extend_from_slice(&u16::MAX.to_le_bytes());
        let header = decode_header(&data)?;
        assert!(matches!(
            decode_body(&data, &header),
            Err(PoseError::TruncatedBuffer { context: "person id", .. })
        ));
        Ok(())
    }

    #[test]
    fn multibyte_format_characters_count_once_each() -> Result<()> {
        let data = PoseBuilder::new()
            .component("accented", "xé", &["a", "b"])
            .frame(vec![(1, vec![vec![1.0, 2.0, 3.0, 4.0]])])
            .build();
        let header = decode_header(&data)?;
        assert_eq!(header.components[0].format.len(), 3);
        assert_eq!(header.components[0].point_width(), 2);

        let body = decode_body(&data, &header)?;
        let array = &body.frames[0].people[0].components[0];
        assert_eq!(array.width, 2);
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(1).map(|p| p.as_slice()), Some(&[3.0, 4.0][..]));
        Ok(())
    }

    #[test]
    fn body_is_read_from_header_end_offset() -> Result<()> {
        let builder = nose_only().frame(vec![(1, vec![vec![1.0, 2.0, 3.0]])]);
        let data = builder.build();
        let mut header = decode_header(&data)?;
        let expected = decode_body(&data, &header)?;

        header.header_end_offset += 1;
        let shifted = decode_body(&data, &header);
        assert!(shifted.map(|body| body != expected).unwrap_or(true));
        Ok(())
    }

    #[test]
    fn record_size_counts_id_and_floats() -> Result<()> {
        let data = PoseBuilder::new()
            .component("a", "xyc", &["1", "2"])
            .component("b", "xy", &["1"])
            .encode_header();
        let shape = PersonShape::from_header(&decode_header(&data)?)?;
        assert_eq!(shape.record_size(), 2 + (2 * 3 + 2) * 4);
        Ok(())
    }

    fn arb_shape() -> impl Strategy<Value = (Vec<(usize, usize)>, Vec<usize>)> {
        (
            prop::collection::vec((0usize..5, 1usize..5), 0..4),
            prop::collection::vec(0usize..4, 0..6),
        )
    }

    proptest! {
        #[test]
        fn decoded_shape_matches_encoded((components, people_per_frame) in arb_shape()) {
            let mut builder = PoseBuilder::new();
            for (i, &(points, width)) in components.iter().enumerate() {
                let labels: Vec<String> = (0..points).map(|p| p.to_string()).collect();
                let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
                let format: String = "xyzc".chars().take(width).collect();
                builder = builder.component(&format!("c{}", i), &format, &refs);
            }
            for (f, &people) in people_per_frame.iter().enumerate() {
                let records =
                    (0..people).map(|p| builder.uniform_person(p as i16, f as f32)).collect();
                builder = builder.frame(records);
            }

            let data = builder.build();
            let header = decode_header(&data).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let body = decode_body(&data, &header).map_err(|e| TestCaseError::fail(e.to_string()))?;

            prop_assert_eq!(header.components.len(), components.len());
            prop_assert_eq!(body.people_counts(), people_per_frame.clone());
            for frame in &body.frames {
                for person in &frame.people {
                    prop_assert_eq!(person.components.len(), components.len());
                    for (array, &(points, width)) in person.components.iter().zip(&components) {
                        prop_assert_eq!(array.width, width);
                        prop_assert_eq!(array.len(), points);
                    }
                }
            }
        }
    }
}
