//! GPU types shared by renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Canvas;

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn new(canvas: Canvas) -> Self {
        Self {
            viewport: [canvas.width.max(1) as f32, canvas.height.max(1) as f32],
            _pad: [0.0; 2],
        }
    }

    /// Minimum binding size for the uniform buffer; the struct is 16 bytes.
    pub(super) fn min_binding_size() -> Option<std::num::NonZeroU64> {
        std::num::NonZeroU64::new(std::mem::size_of::<Self>() as u64)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_uniform_is_16_bytes() {
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
        assert_eq!(ViewportUniform::min_binding_size().map(|n| n.get()), Some(16));
    }

    #[test]
    fn degenerate_viewport_is_clamped() {
        let u = ViewportUniform::new(Canvas::new(0, 480));
        assert_eq!(u.viewport, [1.0, 480.0]);
    }

    #[test]
    fn quad_indices_cover_two_triangles() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }
}
