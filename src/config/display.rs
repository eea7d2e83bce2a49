pub const WINDOW_WIDTH: f32 = 1400.0;
pub const WINDOW_HEIGHT: f32 = 950.0;
pub const CHART_HEIGHT: f32 = 360.0;

pub const PRICE_DECIMAL_PLACES: usize = 4;
pub const VOLUME_DECIMAL_PLACES: usize = 2;

/// Radius of the marker drawn at the scrubbed index
pub const HIGHLIGHT_RADIUS: f32 = 6.0;

// Series colours (r, g, b)
pub const BID_COLOR: (u8, u8, u8) = (44, 232, 120);
pub const ASK_COLOR: (u8, u8, u8) = (255, 75, 75);
pub const MIDPOINT_COLOR: (u8, u8, u8) = (59, 130, 246);
pub const PROFIT_COLOR: (u8, u8, u8) = (139, 92, 246);
pub const VOLUME_COLOR: (u8, u8, u8) = (249, 115, 22);
pub const TOTAL_PROFIT_COLOR: (u8, u8, u8) = (168, 85, 247);
