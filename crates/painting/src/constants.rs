/// Default tile size for dirty tracking on the drawing layer.
pub const DEFAULT_TILE_SIZE: u32 = 128;

/// Hardness fraction used for every brush stamp (full configured hardness).
pub const STAMP_HARDNESS: f32 = 1.0;

/// Opaque black, the default foreground color.
pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Fully transparent pixel.
pub const TRANSPARENT: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
