//! Shared GPU buffers: the camera uniform and growable vertex buffers

use wgpu::util::DeviceExt;

use super::types::CameraUniforms;

/// Smallest vertex buffer we allocate, in bytes
const MIN_VERTEX_BUFFER_SIZE: u64 = 1024;

/// Camera uniform buffer with its bind group (group 0 in every shader)
pub struct CameraBuffer {
    buffer: wgpu::Buffer,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl CameraBuffer {
    pub fn new(device: &wgpu::Device) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniform Buffer"),
            contents: bytemuck::bytes_of(&CameraUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    /// Upload a new view-projection
    pub fn update(&self, queue: &wgpu::Queue, uniforms: &CameraUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Vertex buffer rewritten every frame, reallocated when it runs out of room
pub struct DynamicVertexBuffer {
    label: &'static str,
    buffer: wgpu::Buffer,
    capacity: u64,
    vertex_count: u32,
}

impl DynamicVertexBuffer {
    pub fn new(device: &wgpu::Device, label: &'static str) -> Self {
        Self {
            label,
            buffer: Self::allocate(device, label, MIN_VERTEX_BUFFER_SIZE),
            capacity: MIN_VERTEX_BUFFER_SIZE,
            vertex_count: 0,
        }
    }

    fn allocate(device: &wgpu::Device, label: &'static str, size: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Replace the buffer contents with `vertices`
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: &[T],
    ) {
        self.vertex_count = vertices.len() as u32;
        if vertices.is_empty() {
            return;
        }

        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        let needed = bytes.len() as u64;
        if needed > self.capacity {
            self.capacity = grown_capacity(self.capacity, needed);
            log::debug!("Growing {} to {} bytes", self.label, self.capacity);
            self.buffer = Self::allocate(device, self.label, self.capacity);
        }
        queue.write_buffer(&self.buffer, 0, bytes);
    }

    /// Number of vertices from the last write
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

/// Double `current` until it holds `needed` bytes
fn grown_capacity(current: u64, needed: u64) -> u64 {
    let mut capacity = current.max(MIN_VERTEX_BUFFER_SIZE);
    while capacity < needed {
        capacity *= 2;
    }
    capacity
}
