use super::types::ProgressMode;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({binary_bytes_per_sec}, {eta})";
const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg} {bytes} ({binary_bytes_per_sec})";

/// Creates the per-file transfer indicator. Without a known length a spinner is shown instead of a bar.
pub fn transfer_progress(
    mode: ProgressMode,
    destination: &Path,
    content_length: Option<u64>,
) -> ProgressBar {
    if mode == ProgressMode::Hidden {
        return ProgressBar::hidden();
    }

    let bar = match content_length {
        Some(total) => ProgressBar::new(total).with_style(style(BAR_TEMPLATE)),
        None => {
            let spinner = ProgressBar::new_spinner().with_style(style(SPINNER_TEMPLATE));
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner
        }
    };

    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| destination.display().to_string());
    bar.with_message(format!("Downloading {file_name}"))
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress_tracks_position() {
        let bar = transfer_progress(ProgressMode::Hidden, Path::new("ml/a.tflite"), Some(10));

        bar.inc(4);

        assert!(bar.is_hidden());
        assert_eq!(bar.position(), 4);
    }

    #[test]
    fn test_bar_is_sized_from_content_length() {
        let bar = transfer_progress(ProgressMode::Bars, Path::new("ml/a.tflite"), Some(8192));

        assert_eq!(bar.length(), Some(8192));
        assert_eq!(bar.message(), "Downloading a.tflite");
    }

    #[test]
    fn test_spinner_without_content_length() {
        let bar = transfer_progress(ProgressMode::Bars, Path::new("ml/b.tflite"), None);

        assert_eq!(bar.length(), None);
        bar.finish_and_clear();
    }
}
