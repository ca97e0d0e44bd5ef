use serde::{Deserialize, Serialize};

/// Options controlling the mesh export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Store every vertex unshared instead of deduplicating equal positions.
    /// Increases mesh size but lets downstream scripting mutate individual
    /// vertices without touching neighbors.
    pub writable_vertices: bool,
    /// Emit a per-face depth derived from the cell's vertical position
    /// instead of a constant zero.
    pub depth_buffer_enabled: bool,
    /// Denominator of the anti-seam UV tuck (`bias = 1 / texel_bias`).
    /// 0 disables the bias entirely.
    pub texel_bias: f32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            writable_vertices: false,
            depth_buffer_enabled: false,
            texel_bias: 8192.0,
        }
    }
}
