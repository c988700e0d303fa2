// Vidmark Constants

// Fixed filesystem contract: inputs and output are resolved relative to the
// working directory. Not flag-driven in this version.
pub const INPUT_FILE: &str = "input.mp4";
pub const WATERMARK_FILE: &str = "watermark.png";
pub const OUTPUT_FILE: &str = "output.mp4";

// Filtergraph stream references
pub const MAIN_STREAM: &str = "[0:v]";
pub const WATERMARK_STREAM: &str = "[1:v]";
pub const SCALED_LABEL: &str = "wm";
