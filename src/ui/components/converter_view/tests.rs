//! Tests for ConverterView component

use super::*;
use crate::audio::metadata::UNREADABLE_TEXT;
use crate::core::{ConversionStatus, ConverterError, INFO_PLACEHOLDER, OutputFormat};
use crate::test_fixtures::write_wav;
use std::path::Path;

fn settings_for(dir: &Path) -> AppSettings {
    AppSettings {
        ffmpeg_path: PathBuf::from("ffmpeg"),
        default_output_dir: dir.to_path_buf(),
    }
}

fn pending_message(view: &ConverterView) -> Option<&str> {
    view.pending_error_message
        .as_ref()
        .map(|(_, message)| message.as_str())
}

#[test]
fn test_new_view_is_idle() {
    let dir = tempfile::tempdir().unwrap();
    let view = ConverterView::new_for_test(&settings_for(dir.path()));

    assert!(view.session.input_file().is_none());
    assert_eq!(view.session.output_directory, dir.path());
    assert_eq!(view.session.output_format, OutputFormat::Mp3);
    assert_eq!(view.display.info_text, INFO_PLACEHOLDER);
    assert_eq!(view.display.progress, 0);
    assert_eq!(view.display.status, ConversionStatus::Idle);
    assert!(view.conversion.is_none());
}

#[test]
fn test_accept_input_fills_info_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wav(dir.path(), "song.wav", 8000, 1, 1);
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));

    assert!(view.accept_input(&input));

    assert_eq!(view.session.input_file(), Some(input.as_path()));
    assert!(view.display.info_text.contains("Format: WAV"));
    assert!(pending_message(&view).is_none());
}

#[test]
fn test_accept_missing_file_queues_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));

    assert!(!view.accept_input(&dir.path().join("missing.mp3")));

    assert!(view.session.input_file().is_none());
    assert_eq!(view.display.info_text, INFO_PLACEHOLDER);
    assert_eq!(pending_message(&view), Some("File does not exist."));
}

#[test]
fn test_accept_unsupported_file_keeps_previous_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wav(dir.path(), "song.wav", 8000, 1, 1);
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "hello").unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.accept_input(&input);
    let info_before = view.display.info_text.clone();

    assert!(!view.accept_input(&notes));

    assert_eq!(view.session.input_file(), Some(input.as_path()));
    assert_eq!(view.display.info_text, info_before);
    assert_eq!(pending_message(&view), Some("Unsupported file type."));
}

#[test]
fn test_accept_unparseable_file_shows_unreadable_text() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.wav");
    std::fs::write(&broken, b"this is not a riff file").unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));

    assert!(view.accept_input(&broken));

    assert_eq!(view.session.input_file(), Some(broken.as_path()));
    assert_eq!(view.display.info_text, UNREADABLE_TEXT);
    assert!(pending_message(&view).is_none());
}

#[test]
fn test_input_change_ignored_while_converting() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_wav(dir.path(), "first.wav", 8000, 1, 1);
    let second = write_wav(dir.path(), "second.wav", 22050, 2, 1);
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.accept_input(&first);
    let info_before = view.display.info_text.clone();
    view.begin_conversion().unwrap();

    assert!(!view.accept_input(&second));
    assert!(!view.accept_dropped_paths(&[second]));

    assert_eq!(view.session.input_file(), Some(first.as_path()));
    assert_eq!(view.display.info_text, info_before);
    assert!(pending_message(&view).is_none());
}

#[test]
fn test_drop_uses_first_path_only() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_wav(dir.path(), "first.wav", 8000, 1, 1);
    let second = write_wav(dir.path(), "second.wav", 8000, 1, 1);
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));

    assert!(view.accept_dropped_paths(&[first.clone(), second]));

    assert_eq!(view.session.input_file(), Some(first.as_path()));
}

#[test]
fn test_drop_with_no_paths_does_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));

    assert!(!view.accept_dropped_paths(&[]));
    assert!(pending_message(&view).is_none());
}

#[test]
fn test_selecting_format_closes_menu() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));

    view.toggle_format_menu();
    assert!(view.format_menu_open);

    view.set_output_format(OutputFormat::Aiff);

    assert_eq!(view.session.output_format, OutputFormat::Aiff);
    assert!(!view.format_menu_open);
}

#[test]
fn test_begin_without_input_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));

    assert!(view.begin_conversion().is_none());

    assert_eq!(view.display.status, ConversionStatus::Idle);
    assert_eq!(pending_message(&view), Some("No input file selected."));
}

#[test]
fn test_begin_builds_job_from_session() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wav(dir.path(), "bar.wav", 8000, 1, 1);
    let out_dir = tempfile::tempdir().unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.accept_input(&input);
    view.set_output_directory(out_dir.path().to_path_buf());
    view.set_output_format(OutputFormat::Ogg);

    let job = view.begin_conversion().expect("job should be built");

    assert_eq!(job.input_path, input);
    assert_eq!(job.output_path, out_dir.path().join("bar_AV_Converted.ogg"));
    assert_eq!(view.display.status, ConversionStatus::Converting);
    assert_eq!(view.display.progress, 0);
}

#[test]
fn test_begin_refused_while_converting() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wav(dir.path(), "bar.wav", 8000, 1, 1);
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.accept_input(&input);

    assert!(view.begin_conversion().is_some());
    assert!(view.begin_conversion().is_none());
    assert_eq!(view.display.status, ConversionStatus::Converting);
}

#[test]
fn test_success_outcome_fills_progress() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wav(dir.path(), "bar.wav", 8000, 1, 1);
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.accept_input(&input);
    let job = view.begin_conversion().unwrap();

    view.apply_outcome(Ok(job.output_path));

    assert_eq!(view.display.progress, 100);
    assert_eq!(view.display.status, ConversionStatus::Succeeded);
    assert_eq!(
        view.display.status.display_text(),
        "Conversion completed successfully!"
    );
    assert!(pending_message(&view).is_none());
}

#[test]
fn test_failed_outcome_shows_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.display.status = ConversionStatus::Converting;

    view.apply_outcome(Err(ConverterError::ConversionError(
        "No such file or directory".to_string(),
    )));

    assert_eq!(view.display.status, ConversionStatus::Failed);
    let (title, message) = view.pending_error_message.clone().unwrap();
    assert_eq!(title, "Conversion Error");
    assert_eq!(message, "Error during conversion: No such file or directory");
}

#[test]
fn test_cancelled_outcome_resets_progress() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.display.status = ConversionStatus::Converting;

    view.apply_outcome(Err(ConverterError::Cancelled));

    assert_eq!(view.display.status, ConversionStatus::Cancelled);
    assert_eq!(view.display.progress, 0);
    assert!(pending_message(&view).is_none());
}

#[test]
fn test_clear_after_success_keeps_output_settings() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wav(dir.path(), "bar.wav", 8000, 1, 1);
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.accept_input(&input);
    view.set_output_format(OutputFormat::Wav);
    let job = view.begin_conversion().unwrap();
    view.apply_outcome(Ok(job.output_path));

    assert!(view.clear());

    assert!(view.session.input_file().is_none());
    assert_eq!(view.display.info_text, INFO_PLACEHOLDER);
    assert_eq!(view.display.progress, 0);
    assert_eq!(view.display.status, ConversionStatus::Idle);
    assert_eq!(view.session.output_directory, dir.path());
    assert_eq!(view.session.output_format, OutputFormat::Wav);
}

#[test]
fn test_clear_ignored_while_converting() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_wav(dir.path(), "bar.wav", 8000, 1, 1);
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
    view.accept_input(&input);
    view.begin_conversion().unwrap();

    assert!(!view.clear());

    assert_eq!(view.session.input_file(), Some(input.as_path()));
    assert_eq!(view.display.status, ConversionStatus::Converting);
}

#[test]
fn test_poll_without_conversion_is_idle() {
    let dir = tempfile::tempdir().unwrap();
    let mut view = ConverterView::new_for_test(&settings_for(dir.path()));

    assert!(!view.poll_conversion());
}

#[cfg(unix)]
mod with_worker {
    use super::*;
    use crate::conversion::spawn_conversion;
    use crate::test_fixtures::{copying_encoder, failing_encoder, hanging_encoder};
    use std::time::{Duration, Instant};

    /// Start a real worker with `encoder` and poll until it finishes
    fn run_to_completion(view: &mut ConverterView, encoder: PathBuf, cancel: bool) {
        let job = view.begin_conversion().expect("job should be built");
        view.conversion = Some(spawn_conversion(encoder, job).unwrap());
        if cancel {
            view.cancel_conversion();
        }

        let deadline = Instant::now() + Duration::from_secs(10);
        while view.poll_conversion() {
            assert!(Instant::now() < deadline, "worker did not finish");
            std::thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn test_worker_success_updates_view() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_wav(dir.path(), "bar.wav", 8000, 1, 1);
        let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
        view.accept_input(&input);

        run_to_completion(&mut view, copying_encoder(dir.path()), false);

        assert_eq!(view.display.status, ConversionStatus::Succeeded);
        assert_eq!(view.display.progress, 100);
        assert!(view.conversion.is_none());
        assert!(dir.path().join("bar_AV_Converted.mp3").exists());
    }

    #[test]
    fn test_worker_failure_updates_view() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_wav(dir.path(), "bar.wav", 8000, 1, 1);
        let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
        view.accept_input(&input);

        run_to_completion(&mut view, failing_encoder(dir.path()), false);

        assert_eq!(view.display.status, ConversionStatus::Failed);
        let message = pending_message(&view).unwrap();
        assert!(message.starts_with("Conversion failed. Error:"), "{message}");
        assert!(message.contains("boom"), "{message}");
    }

    #[test]
    fn test_worker_cancel_updates_view() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_wav(dir.path(), "bar.wav", 8000, 1, 1);
        let mut view = ConverterView::new_for_test(&settings_for(dir.path()));
        view.accept_input(&input);

        run_to_completion(&mut view, hanging_encoder(dir.path()), true);

        assert_eq!(view.display.status, ConversionStatus::Cancelled);
        assert_eq!(view.display.status.display_text(), "Conversion cancelled.");
        assert!(view.clear());
    }
}
