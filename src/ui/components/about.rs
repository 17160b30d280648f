//! About window component

use gpui::{
    Bounds, Context, Render, SharedString, Window, WindowBounds, WindowHandle, WindowOptions, div,
    prelude::*, px, size,
};

use crate::ui::Theme;

/// The About window content
pub struct AboutBox;

impl AboutBox {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Open the About window
    pub fn open(cx: &mut gpui::App) -> Option<WindowHandle<Self>> {
        let bounds = Bounds::centered(None, size(px(360.), px(200.)), cx);

        let result = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(360.), px(200.))),
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some("About AV Audio Converter".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_window, cx| cx.new(AboutBox::new),
        );

        match result {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("Could not open About window: {}", e);
                None
            }
        }
    }
}

impl Render for AboutBox {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let version = env!("CARGO_PKG_VERSION");
        let theme = Theme::from_appearance(window.appearance());

        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .size_full()
            .bg(theme.bg)
            .p_4()
            .gap_1()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(theme.text)
                    .child("AV Audio Converter"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.text_muted)
                    .child(SharedString::from(format!("Version {}", version))),
            )
            .child(div().h(px(8.)))
            .child(
                div()
                    .text_sm()
                    .text_color(theme.text_muted)
                    .child("Convert an audio file to MP3, WAV, OGG, AAC, AIFF or M4A"),
            )
            .child(div().h(px(8.)))
            .child(
                div()
                    .text_xs()
                    .text_color(theme.text_muted)
                    .child("Built with Rust and GPUI"),
            )
            .child(
                // FFmpeg acknowledgment
                div()
                    .text_xs()
                    .text_color(theme.text_muted)
                    .child("Powered by FFmpeg (ffmpeg.org)"),
            )
    }
}
