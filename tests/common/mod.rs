//! Hand-assembled pose buffers for integration tests.

/// Little-endian byte writer mirroring the pose file layout.
#[derive(Default)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn f32(mut self, v: f32) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u16(mut self, v: u16) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn i16(mut self, v: i16) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn cstr(mut self, s: &str) -> Self {
        self.0.extend_from_slice(s.as_bytes());
        self.0.push(0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Header with a single `xyc` component named `pose_keypoints_2d` holding one
/// `Nose` point, two limbs and one color.
pub fn nose_header() -> Bytes {
    Bytes::default()
        .f32(1.0)
        .u16(0)
        .u16(0)
        .u16(0)
        .u16(1)
        .cstr("pose_keypoints_2d")
        .cstr("xyc")
        .u16(1)
        .u16(1)
        .u16(1)
        .cstr("Nose")
        .u16(0)
        .u16(0)
        .u16(255)
        .u16(128)
        .u16(0)
}
