//! AV Audio Converter - GPUI Application
//!
//! A small desktop utility that converts one audio file at a time to
//! MP3, WAV, OGG, AAC, AIFF or M4A by running ffmpeg.

mod actions;
mod audio;
mod conversion;
mod core;
mod logging;
#[cfg(test)]
mod test_fixtures;
mod ui;

use actions::{
    About, CancelConversion, ChangeOutputDirectory, ClearSession, Convert, OpenLogDir,
    OpenOutputDir, Quit, SelectFile,
};
use crate::core::AppSettings;
use gpui::{
    App, Application, Bounds, KeyBinding, Menu, MenuItem, WindowBounds, WindowOptions, prelude::*,
    px, size,
};
use ui::components::{AboutBox, ConverterView};

/// Build the application menus
fn build_menus() -> Vec<Menu> {
    vec![
        Menu {
            name: "AV Audio Converter".into(),
            items: vec![
                MenuItem::action("About AV Audio Converter", About),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "File".into(),
            items: vec![
                MenuItem::action("Select File...", SelectFile),
                MenuItem::action("Change Output Directory...", ChangeOutputDirectory),
                MenuItem::separator(),
                MenuItem::action("Open Output Folder", OpenOutputDir),
                MenuItem::action("Open Log Folder", OpenLogDir),
            ],
        },
        Menu {
            name: "Process".into(),
            items: vec![
                MenuItem::action("Convert", Convert),
                MenuItem::action("Cancel Conversion", CancelConversion),
                MenuItem::separator(),
                MenuItem::action("Clear", ClearSession),
            ],
        },
    ]
}

fn main() {
    logging::init_logging();

    Application::new().run(|cx: &mut App| {
        let settings = AppSettings::detect();
        log::info!("Using encoder: {}", settings.ffmpeg_path.display());
        log::info!(
            "Default output directory: {}",
            settings.default_output_dir.display()
        );
        cx.set_global(settings);

        // Register action handlers
        cx.on_action(|_: &Quit, cx| cx.quit());
        cx.on_action(|_: &About, cx| {
            AboutBox::open(cx);
        });
        cx.on_action(|_: &OpenLogDir, _cx| {
            if let Err(e) = logging::open_log_directory() {
                log::warn!("{}", e);
            }
        });

        // Note: the remaining actions are handled by ConverterView via
        // on_action in render(). The view has focus, so it receives the
        // actions dispatched from menu items and key bindings.

        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-o", SelectFile, None),
            KeyBinding::new("cmd-enter", Convert, None),
            KeyBinding::new("cmd-.", CancelConversion, None),
            KeyBinding::new("cmd-k", ClearSession, None),
        ]);

        cx.set_menus(build_menus());

        // Open the main window
        let bounds = Bounds::centered(None, size(px(340.), px(600.)), cx);
        let settings = cx.global::<AppSettings>().clone();

        let window = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(300.), px(480.))),
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some("AV Audio Converter".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_window, cx| cx.new(|cx| ConverterView::new(&settings, cx)),
        );

        if let Err(e) = window {
            log::error!("Could not open main window: {}", e);
            cx.quit();
            return;
        }

        // Quit when the converter window is closed; closing About doesn't count
        cx.on_window_closed(|cx| {
            let main_window_open = cx
                .windows()
                .iter()
                .any(|window| window.downcast::<ConverterView>().is_some());
            if !main_window_open {
                cx.quit();
            }
        })
        .detach();

        cx.activate(true);
    });
}
