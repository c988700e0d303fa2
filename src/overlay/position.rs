// Vidmark - Overlay Position Table
// Coordinate expressions use the FFmpeg overlay-filter variables: main_w/main_h
// are the video frame, overlay_w/overlay_h the watermark.

/// Named watermark position, resolved to an (x, y) expression pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

impl Position {
    /// Resolve a position name. Unrecognized names fall back to bottom-right
    /// instead of failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "top-left" => Position::TopLeft,
            "top-right" => Position::TopRight,
            "bottom-left" => Position::BottomLeft,
            "bottom-right" => Position::BottomRight,
            "center" => Position::Center,
            _ => Position::default(),
        }
    }

    /// X/Y expressions for the overlay filter, 10px in from the frame edge
    /// for the corner positions.
    pub fn coords(self) -> (&'static str, &'static str) {
        match self {
            Position::TopLeft => ("10", "10"),
            Position::TopRight => ("main_w-overlay_w-10", "10"),
            Position::BottomLeft => ("10", "main_h-overlay_h-10"),
            Position::BottomRight => ("main_w-overlay_w-10", "main_h-overlay_h-10"),
            Position::Center => ("(main_w-overlay_w)/2", "(main_h-overlay_h)/2"),
        }
    }
}
