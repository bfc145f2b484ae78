use anyhow::{Context, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::domain::Video;
use crate::errors::{parse_context, read_context, write_context};

const STDIN: &str = "<stdin>";
const STDOUT: &str = "<stdout>";

/// Opens `path`, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| read_context(&path.display().to_string()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Writes the videos to `path`, or stdout when no path is given.
///
/// File output goes to a sibling temp file first and is renamed over
/// `path` once fully written, so `path` is never left truncated.
pub fn write_output(path: Option<&Path>, videos: &[Video], pretty: bool) -> Result<()> {
    let Some(path) = path else {
        return write_videos(io::stdout().lock(), videos, pretty);
    };

    let temp_path = temp_path_for(path);
    let target = path.display().to_string();

    let file = File::create(&temp_path).with_context(|| write_context(&target))?;
    if let Err(e) = write_videos(BufWriter::new(file), videos, pretty) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.context(write_context(&target)));
    }

    fs::rename(&temp_path, path).with_context(|| write_context(&target))?;
    debug!("Swapped {} into {}", temp_path.display(), target);
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

pub fn describe(path: Option<&Path>, fallback: &str) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn describe_input(path: Option<&Path>) -> String {
    describe(path, STDIN)
}

pub fn describe_output(path: Option<&Path>) -> String {
    describe(path, STDOUT)
}

/// Reads the whole input as a JSON array of video objects.
pub fn read_videos<R: Read>(mut reader: R) -> Result<Vec<Video>> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read input")?;
    debug!("Read {} bytes of input", input.len());

    serde_json::from_str(&input)
        .with_context(|| parse_context("video list (expected a JSON array of objects)"))
}

/// Writes videos as JSON followed by a newline.
pub fn write_videos<W: Write>(mut writer: W, videos: &[Video], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, videos)?;
    } else {
        serde_json::to_writer(&mut writer, videos)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
