// External tool resolver for ffmpeg
//
// Resolution order:
// 1) Environment variable override (VIDMARK_FFMPEG_PATH)
// 2) Sidecar next to the executable
// 3) bin/ subdirectory next to the executable
// 4) PATH fallback

use std::env;
use std::path::PathBuf;

/// Get the directory containing the current executable
fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}

/// Resolve a tool path.
fn resolve_tool(env_key: &str, default_name: &str) -> PathBuf {
    // 1) Check environment variable override
    if let Ok(v) = env::var(env_key) {
        let p = PathBuf::from(&v);
        if p.exists() {
            return p;
        }
    }

    // Add .exe on Windows
    let mut filename = default_name.to_string();
    if cfg!(windows) && !filename.to_lowercase().ends_with(".exe") {
        filename.push_str(".exe");
    }

    // 2) Check sidecar next to executable
    if let Some(dir) = exe_dir() {
        let candidate = dir.join(&filename);
        if candidate.exists() {
            return candidate;
        }

        // 3) Also check bin/ subdirectory (common bundling pattern)
        let bin_candidate = dir.join("bin").join(&filename);
        if bin_candidate.exists() {
            return bin_candidate;
        }
    }

    // 4) Fall back to PATH
    PathBuf::from(default_name)
}

/// Get path to ffmpeg binary
pub fn ffmpeg_path() -> PathBuf {
    resolve_tool("VIDMARK_FFMPEG_PATH", "ffmpeg")
}

/// Check if ffmpeg is runnable at the resolved path
pub fn is_ffmpeg_available() -> bool {
    let path = ffmpeg_path();

    std::process::Command::new(&path)
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
