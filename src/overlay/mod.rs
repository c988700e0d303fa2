// Vidmark - Watermark Overlay Module
// Validates inputs, builds the FFmpeg command, runs it, and classifies the
// outcome.

pub mod ffmpeg_builder;
pub mod position;

use std::io;
use std::path::Path;
use std::process::Command;

use crate::config::OverlayConfig;
use crate::error::{Result, VidmarkError};
use crate::tools::ffmpeg_path;

pub use position::Position;

/// Run the full overlay pipeline against `config`.
///
/// Blocks until FFmpeg exits; no timeout, no retry. Every failure is
/// terminal for this run.
pub fn run_overlay(
    config: &OverlayConfig,
    position: Position,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    if !config.input_video.exists() {
        return Err(VidmarkError::MissingInput(
            config.input_video.display().to_string(),
        ));
    }
    if !config.watermark_image.exists() {
        return Err(VidmarkError::MissingWatermark(
            config.watermark_image.display().to_string(),
        ));
    }

    let args = ffmpeg_builder::build_overlay_command(config, position, width, height)?;
    log::debug!("ffmpeg {}", args.join(" "));

    clear_stale_output(&config.output_video)?;

    invoke_ffmpeg(&ffmpeg_path(), &args)
}

/// Remove a leftover file at the output path. Overwrite policy: always
/// clobber, no prompt, no backup.
fn clear_stale_output(output: &Path) -> Result<()> {
    if output.exists() {
        log::warn!("Overwriting existing output {}", output.display());
        std::fs::remove_file(output)?;
    }
    Ok(())
}

/// Execute FFmpeg with captured output, blocking until it exits.
/// A spawn failure of kind NotFound means the binary is missing from the
/// host; any non-zero exit carries FFmpeg's stderr verbatim.
fn invoke_ffmpeg(ffmpeg: &Path, args: &[String]) -> Result<()> {
    let output = Command::new(ffmpeg)
        .args(args)
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => VidmarkError::FFmpegNotFound(format!(
                "{} (is FFmpeg installed and on your PATH?)",
                ffmpeg.display()
            )),
            _ => VidmarkError::FFmpeg(format!("Failed to start FFmpeg: {}", e)),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VidmarkError::FFmpeg(stderr.into_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config(root: &Path) -> OverlayConfig {
        OverlayConfig {
            input_video: root.join("input.mp4"),
            watermark_image: root.join("watermark.png"),
            output_video: root.join("output.mp4"),
        }
    }

    #[test]
    fn test_missing_input_halts_without_output() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let err = run_overlay(&config, Position::Center, None, None).unwrap_err();
        assert!(matches!(err, VidmarkError::MissingInput(_)));
        assert!(!config.output_video.exists());
    }

    #[test]
    fn test_missing_watermark_halts_without_output() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        std::fs::write(&config.input_video, b"not a real video").unwrap();

        let err = run_overlay(&config, Position::Center, None, None).unwrap_err();
        assert!(matches!(err, VidmarkError::MissingWatermark(_)));
        assert!(!config.output_video.exists());
    }

    #[test]
    fn test_clear_stale_output_removes_existing_file() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("output.mp4");
        std::fs::write(&output, b"stale").unwrap();

        clear_stale_output(&output).unwrap();
        assert!(!output.exists());

        // A second pass with nothing there is a no-op
        clear_stale_output(&output).unwrap();
    }

    #[test]
    fn test_invoke_classifies_missing_binary() {
        let bogus = PathBuf::from("/nonexistent/vidmark-test-ffmpeg");
        let err = invoke_ffmpeg(&bogus, &[]).unwrap_err();
        assert!(matches!(err, VidmarkError::FFmpegNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_invoke_classifies_nonzero_exit() {
        let err = invoke_ffmpeg(Path::new("/bin/false"), &[]).unwrap_err();
        assert!(matches!(err, VidmarkError::FFmpeg(_)));
    }
}
