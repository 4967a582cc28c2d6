//! Mind-Map Style System
//!
//! Provides the per-level color palette and edge/hover styling constants
//! used by the scene renderer. Colors are keyed by node depth; levels
//! beyond the palette length clamp to the last entry rather than cycling.

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    pub fn darken(&self, factor: f32) -> Self {
        Self {
            r: ((self.r as f32) * (1.0 - factor)) as u8,
            g: ((self.g as f32) * (1.0 - factor)) as u8,
            b: ((self.b as f32) * (1.0 - factor)) as u8,
            a: self.a,
        }
    }

    pub fn lighten(&self, factor: f32) -> Self {
        Self {
            r: ((self.r as f32) + (255.0 - self.r as f32) * factor) as u8,
            g: ((self.g as f32) + (255.0 - self.g as f32) * factor) as u8,
            b: ((self.b as f32) + (255.0 - self.b as f32) * factor) as u8,
            a: self.a,
        }
    }
}

/// Colors for one node depth level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeColors {
    pub fill: Color,
    pub border: Color,
    pub text: Color,
}

// ============================================================================
// Color Constants - one entry per depth level
// ============================================================================

// Level 0: root (deep indigo)
pub const COLOR_ROOT_FILL: Color = Color::rgb(88, 80, 170);
pub const COLOR_ROOT_BORDER: Color = Color::rgb(70, 62, 145);
pub const COLOR_ROOT_TEXT: Color = Color::rgb(255, 255, 255);

// Level 1: main branches (blue)
pub const COLOR_L1_FILL: Color = Color::rgb(66, 120, 190);
pub const COLOR_L1_BORDER: Color = Color::rgb(50, 100, 168);
pub const COLOR_L1_TEXT: Color = Color::rgb(255, 255, 255);

// Level 2: sub-branches (teal)
pub const COLOR_L2_FILL: Color = Color::rgb(62, 150, 145);
pub const COLOR_L2_BORDER: Color = Color::rgb(48, 128, 124);
pub const COLOR_L2_TEXT: Color = Color::rgb(255, 255, 255);

// Level 3: details (green)
pub const COLOR_L3_FILL: Color = Color::rgb(95, 155, 90);
pub const COLOR_L3_BORDER: Color = Color::rgb(78, 132, 74);
pub const COLOR_L3_TEXT: Color = Color::rgb(255, 255, 255);

// Level 4+: everything deeper (amber); clamps here
pub const COLOR_L4_FILL: Color = Color::rgb(196, 150, 70);
pub const COLOR_L4_BORDER: Color = Color::rgb(170, 126, 52);
pub const COLOR_L4_TEXT: Color = Color::rgb(35, 30, 20);

/// Ordered palette indexed by depth level.
pub const LEVEL_PALETTE: [NodeColors; 5] = [
    NodeColors {
        fill: COLOR_ROOT_FILL,
        border: COLOR_ROOT_BORDER,
        text: COLOR_ROOT_TEXT,
    },
    NodeColors {
        fill: COLOR_L1_FILL,
        border: COLOR_L1_BORDER,
        text: COLOR_L1_TEXT,
    },
    NodeColors {
        fill: COLOR_L2_FILL,
        border: COLOR_L2_BORDER,
        text: COLOR_L2_TEXT,
    },
    NodeColors {
        fill: COLOR_L3_FILL,
        border: COLOR_L3_BORDER,
        text: COLOR_L3_TEXT,
    },
    NodeColors {
        fill: COLOR_L4_FILL,
        border: COLOR_L4_BORDER,
        text: COLOR_L4_TEXT,
    },
];

// Edge styling
pub const EDGE_COLOR: Color = Color::rgba(145, 152, 162, 170);
pub const EDGE_HOVER_COLOR: Color = Color::rgba(90, 110, 200, 255);
pub const EDGE_WIDTH: f32 = 2.0;
pub const EDGE_HOVER_WIDTH: f32 = 3.5;

// Hover emphasis for nodes
pub const COLOR_HOVER_BORDER: Color = Color::rgb(255, 205, 110);

// Child-count badge
pub const COLOR_BADGE_FILL: Color = Color::rgb(52, 56, 66);
pub const COLOR_BADGE_TEXT: Color = Color::rgb(230, 232, 238);

/// Colors for a node at the given depth.
///
/// Levels past the end of the palette share the last color (clamp, not
/// cycle).
pub fn level_colors(level: u32) -> NodeColors {
    let idx = (level as usize).min(LEVEL_PALETTE.len() - 1);
    LEVEL_PALETTE[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_colors_clamp_past_palette() {
        assert_eq!(level_colors(0), LEVEL_PALETTE[0]);
        assert_eq!(level_colors(4), LEVEL_PALETTE[4]);
        // Deeper levels clamp to the last entry instead of cycling.
        assert_eq!(level_colors(5), LEVEL_PALETTE[4]);
        assert_eq!(level_colors(250), LEVEL_PALETTE[4]);
    }

    #[test]
    fn test_color_darken_lighten() {
        let c = Color::rgb(100, 100, 100);
        assert_eq!(c.darken(0.5).r, 50);
        assert_eq!(c.lighten(0.5).r, 177);
        assert_eq!(c.darken(0.5).a, 255);
    }
}
