//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::settings::Settings;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub track: [f32; 4],
    pub player: [f32; 4],
    pub obstacle: [f32; 4],
    /// Tint laid over the track once the run is over
    pub game_over_tint: [f32; 4],
}

impl Palette {
    pub const STANDARD: Palette = Palette {
        background: [0.02, 0.02, 0.05, 1.0],
        track: [0.18, 0.18, 0.22, 1.0],
        player: [0.2, 0.6, 1.0, 1.0],
        obstacle: [0.95, 0.25, 0.2, 1.0],
        game_over_tint: [0.0, 0.0, 0.0, 0.45],
    };

    pub const HIGH_CONTRAST: Palette = Palette {
        background: [0.0, 0.0, 0.0, 1.0],
        track: [0.1, 0.1, 0.1, 1.0],
        player: [1.0, 1.0, 0.0, 1.0],
        obstacle: [1.0, 1.0, 1.0, 1.0],
        game_over_tint: [0.0, 0.0, 0.0, 0.6],
    };

    pub fn for_settings(settings: &Settings) -> Self {
        if settings.high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::STANDARD
        }
    }

    /// Background as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
