//! Gradient uniform block: byte layout and partial-update writer.
//!
//! The block is a plain 32-byte image with two fixed slots:
//!
//! | offset | size | contents                      |
//! |--------|------|-------------------------------|
//! | 0      | 16   | top color    `{r, g, b, a}`   |
//! | 16     | 16   | bottom color `{r, g, b, a}`   |
//!
//! Each slot is four packed `f32` in native (little-endian on every wgpu
//! backend) byte order, matching `struct Gradient { top: vec4f, bottom: vec4f }`
//! in `shaders/gradient.wgsl`.

use crate::paint::Rgb;

/// Size of one color slot in bytes.
pub const SLOT_SIZE: usize = 16;

/// Size of the whole uniform block in bytes.
pub const UNIFORM_SIZE: usize = 2 * SLOT_SIZE;

/// Byte offset of the top color slot.
pub const TOP_OFFSET: u64 = 0;

/// Byte offset of the bottom color slot.
pub const BOTTOM_OFFSET: u64 = SLOT_SIZE as u64;

/// Alpha written with each stop unless the caller overrides it.
pub const DEFAULT_ALPHA: f32 = 1.0;

/// Destination for queued uniform writes.
///
/// Writes are fire-and-forget: there is no read-back and no error path.
pub trait UniformTarget {
    fn write(&mut self, offset: u64, bytes: &[u8]);
}

/// Production target: schedules writes on the device queue.
pub struct QueueTarget<'a> {
    pub queue: &'a wgpu::Queue,
    pub buffer: &'a wgpu::Buffer,
}

impl UniformTarget for QueueTarget<'_> {
    fn write(&mut self, offset: u64, bytes: &[u8]) {
        self.queue.write_buffer(self.buffer, offset, bytes);
    }
}

/// Encodes one color stop into a 16-byte slot.
#[inline]
pub fn encode_slot(color: Rgb, alpha: f32) -> [u8; SLOT_SIZE] {
    bytemuck::cast(color.with_alpha(alpha))
}

/// Encodes both stops into the full 32-byte block.
pub fn encode_block(top: Rgb, bottom: Rgb, alpha: f32) -> [u8; UNIFORM_SIZE] {
    let mut block = [0u8; UNIFORM_SIZE];
    block[..SLOT_SIZE].copy_from_slice(&encode_slot(top, alpha));
    block[SLOT_SIZE..].copy_from_slice(&encode_slot(bottom, alpha));
    block
}

/// Writes the given stops into the uniform block.
///
/// - both → one 32-byte write at offset 0
/// - top only → one 16-byte write at [`TOP_OFFSET`]
/// - bottom only → one 16-byte write at [`BOTTOM_OFFSET`]
/// - neither → nothing
///
/// A partial write always covers a whole slot, alpha included, and never the
/// other slot.
pub fn set_uniforms<T>(target: &mut T, top: Option<Rgb>, bottom: Option<Rgb>, alpha: f32)
where
    T: UniformTarget + ?Sized,
{
    match (top, bottom) {
        (Some(top), Some(bottom)) => {
            target.write(TOP_OFFSET, &encode_block(top, bottom, alpha));
        }
        (Some(top), None) => target.write(TOP_OFFSET, &encode_slot(top, alpha)),
        (None, Some(bottom)) => target.write(BOTTOM_OFFSET, &encode_slot(bottom, alpha)),
        (None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// CPU mirror of the uniform buffer that records every write.
    #[derive(Default)]
    struct ShadowBuffer {
        bytes: [u8; UNIFORM_SIZE],
        writes: Vec<(u64, usize)>,
    }

    impl ShadowBuffer {
        fn floats(&self) -> [f32; 8] {
            bytemuck::cast(self.bytes)
        }
    }

    impl UniformTarget for ShadowBuffer {
        fn write(&mut self, offset: u64, bytes: &[u8]) {
            let start = offset as usize;
            self.bytes[start..start + bytes.len()].copy_from_slice(bytes);
            self.writes.push((offset, bytes.len()));
        }
    }

    const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);

    #[test]
    fn both_stops_write_whole_block_once() {
        let mut buf = ShadowBuffer::default();
        set_uniforms(&mut buf, Some(RED), Some(GREEN), DEFAULT_ALPHA);

        assert_eq!(buf.writes, vec![(0, 32)]);
        assert_eq!(buf.floats(), [1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn top_only_touches_first_slot() {
        let mut buf = ShadowBuffer::default();
        buf.bytes[SLOT_SIZE..].fill(0xAB);

        set_uniforms(&mut buf, Some(RED), None, DEFAULT_ALPHA);

        assert_eq!(buf.writes, vec![(0, 16)]);
        assert!(buf.bytes[SLOT_SIZE..].iter().all(|&b| b == 0xAB));
    }

    #[test]
    fn bottom_only_touches_second_slot() {
        let mut buf = ShadowBuffer::default();
        buf.bytes[..SLOT_SIZE].fill(0xCD);

        set_uniforms(&mut buf, None, Some(GREEN), DEFAULT_ALPHA);

        assert_eq!(buf.writes, vec![(16, 16)]);
        assert!(buf.bytes[..SLOT_SIZE].iter().all(|&b| b == 0xCD));
    }

    #[test]
    fn separate_partial_writes_combine() {
        let mut buf = ShadowBuffer::default();
        set_uniforms(&mut buf, Some(RED), None, DEFAULT_ALPHA);
        set_uniforms(&mut buf, None, Some(GREEN), DEFAULT_ALPHA);

        assert_eq!(buf.floats(), [1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn neither_stop_is_a_no_op() {
        let mut buf = ShadowBuffer::default();
        set_uniforms(&mut buf, None, None, DEFAULT_ALPHA);
        assert!(buf.writes.is_empty());
    }

    #[test]
    fn partial_write_carries_its_own_alpha() {
        let mut buf = ShadowBuffer::default();
        set_uniforms(&mut buf, Some(RED), Some(GREEN), 1.0);
        set_uniforms(&mut buf, Some(GREEN), None, 0.5);

        assert_eq!(buf.floats(), [0.0, 1.0, 0.0, 0.5, 0.0, 1.0, 0.0, 1.0]);
    }
}
