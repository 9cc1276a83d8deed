use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Argument record consumed by `draw_indirect`.
///
/// Field order and size follow the WebGPU `DrawIndirectArgs` layout (16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct DrawArgs {
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub first_instance: u32,
}

impl DrawArgs {
    /// One full-screen triangle, one instance.
    pub const TRIANGLE: Self = Self {
        vertex_count: 3,
        instance_count: 1,
        first_vertex: 0,
        first_instance: 0,
    };

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

const _: () = assert!(std::mem::size_of::<DrawArgs>() == 16);

/// GPU buffer holding a single [`DrawArgs::TRIANGLE`] record.
///
/// Contents are uploaded at creation and never written again.
pub struct IndirectDescriptor {
    buffer: wgpu::Buffer,
    args: DrawArgs,
}

impl IndirectDescriptor {
    pub fn new(device: &wgpu::Device) -> Self {
        let args = DrawArgs::TRIANGLE;
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("drawbench indirect args"),
            contents: args.as_bytes(),
            usage: wgpu::BufferUsages::INDIRECT | wgpu::BufferUsages::COPY_DST,
        });

        Self { buffer, args }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// The record that was uploaded.
    pub fn args(&self) -> DrawArgs {
        self.args
    }
}
