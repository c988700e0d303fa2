// Vidmark - FFmpeg Command Builder for Watermark Overlay
// Constructs the -filter_complex expression (optional watermark scale stage,
// then the overlay stage) and the full FFmpeg argument list.

use std::path::Path;

use super::position::Position;
use crate::config::OverlayConfig;
use crate::constants::{MAIN_STREAM, SCALED_LABEL, WATERMARK_STREAM};
use crate::error::{Result, VidmarkError};

/// Normalize the optional scale flags. Scaling engages only when both
/// dimensions are present and non-zero; a partial pair disables it.
pub fn scale_spec(width: Option<u32>, height: Option<u32>) -> Option<(u32, u32)> {
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
        _ => None,
    }
}

/// Build the -filter_complex expression.
/// With a scale spec the watermark stream is resized and relabeled; the
/// overlay stage then consumes the scaled label, never the raw stream.
pub fn build_filtergraph(position: Position, scale: Option<(u32, u32)>) -> String {
    let (x, y) = position.coords();

    match scale {
        Some((w, h)) => format!(
            "{wm}scale={w}:{h}[{label}];{main}[{label}]overlay={x}:{y}",
            wm = WATERMARK_STREAM,
            label = SCALED_LABEL,
            main = MAIN_STREAM,
        ),
        None => format!(
            "{main}{wm}overlay={x}:{y}",
            main = MAIN_STREAM,
            wm = WATERMARK_STREAM,
        ),
    }
}

/// Build the full FFmpeg args list for the overlay.
/// Returns a Vec of string args to pass to Command.
pub fn build_overlay_command(
    config: &OverlayConfig,
    position: Position,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Vec<String>> {
    let filtergraph = build_filtergraph(position, scale_spec(width, height));

    let mut args: Vec<String> = Vec::new();

    // Both inputs first: main video, then watermark image
    args.extend_from_slice(&["-i".into(), path_str(&config.input_video)?]);
    args.extend_from_slice(&["-i".into(), path_str(&config.watermark_image)?]);

    args.extend_from_slice(&["-filter_complex".into(), filtergraph]);

    // Audio stream is copied through untouched
    args.extend_from_slice(&["-codec:a".into(), "copy".into()]);

    args.push(path_str(&config.output_video)?);

    Ok(args)
}

/// Convert a Path to a String, failing on non-UTF8
fn path_str(path: &Path) -> Result<String> {
    path.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| VidmarkError::InvalidPath("Path contains non-UTF8 characters".to_string()))
}
