//! Small building blocks shared by the main window
//!
//! Group boxes, push buttons, the progress bar and the format dropdown.

use std::rc::Rc;

use gpui::{Context, Div, IntoElement, SharedString, Stateful, div, prelude::*, px, relative};

use crate::core::OutputFormat;
use crate::ui::Theme;

/// Render a titled group box around `content`
pub fn render_group(title: &'static str, theme: &Theme, content: impl IntoElement) -> Div {
    div()
        .w_full()
        .flex()
        .flex_col()
        .gap_2()
        .p_3()
        .bg(theme.bg_card)
        .border_1()
        .border_color(theme.border)
        .rounded_md()
        .child(
            div()
                .text_sm()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(theme.text_muted)
                .child(title),
        )
        .child(content)
}

/// Base styling for a full-width push button
///
/// The caller attaches the click handler.
pub fn render_button_base(
    id: &'static str,
    label: impl Into<SharedString>,
    enabled: bool,
    color: gpui::Hsla,
    hover: gpui::Hsla,
    theme: &Theme,
) -> Stateful<Div> {
    div()
        .id(SharedString::from(id))
        .w_full()
        .px_3()
        .py_1()
        .flex()
        .justify_center()
        .rounded_md()
        .text_sm()
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .text_color(gpui::white())
        .bg(if enabled { color } else { theme.text_muted })
        .when(enabled, |el| el.cursor_pointer().hover(|s| s.bg(hover)))
        .child(label.into())
}

/// Render the status label and progress bar
///
/// `progress` is a percentage, 0-100.
pub fn render_progress(progress: u8, status_text: &'static str, theme: &Theme) -> Div {
    let fraction = progress.min(100) as f32 / 100.0;

    div()
        .w_full()
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_sm()
                .text_color(theme.text)
                .child(status_text),
        )
        .child(
            div()
                .w_full()
                .h(px(18.0))
                .rounded_md()
                .border_1()
                .border_color(theme.border)
                .overflow_hidden()
                .relative()
                // Progress fill
                .child(
                    div()
                        .absolute()
                        .left_0()
                        .top_0()
                        .h_full()
                        .w(relative(fraction))
                        .bg(theme.success),
                )
                // Percentage overlay
                .child(
                    div()
                        .size_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .relative()
                        .text_xs()
                        .text_color(theme.text)
                        .child(format!("{}%", progress.min(100))),
                ),
        )
}

/// Render the output format dropdown
///
/// A button showing the current format; when `open`, the six options are
/// listed below it.
pub fn render_format_picker<V: 'static>(
    selected: OutputFormat,
    open: bool,
    enabled: bool,
    theme: &Theme,
    cx: &mut Context<V>,
    on_toggle: impl Fn(&mut V) + 'static,
    on_select: impl Fn(&mut V, OutputFormat) + 'static,
) -> Div {
    let border = theme.border;
    let hover_bg = theme.bg_card_hover;
    let accent = theme.accent;
    let text = theme.text;

    let trigger = div()
        .id(SharedString::from("format-picker"))
        .w_full()
        .px_3()
        .py_1()
        .flex()
        .justify_between()
        .rounded_md()
        .border_1()
        .border_color(border)
        .text_sm()
        .text_color(text)
        .when(enabled, |el| el.cursor_pointer().hover(|s| s.bg(hover_bg)))
        .on_click(cx.listener(move |view, _event, _window, cx| {
            if enabled {
                on_toggle(view);
                cx.notify();
            }
        }))
        .child(selected.label())
        .child(if open { "▴" } else { "▾" });

    let on_select = Rc::new(on_select);
    let mut options = div()
        .w_full()
        .flex()
        .flex_col()
        .rounded_md()
        .border_1()
        .border_color(border)
        .overflow_hidden();

    for format in OutputFormat::ALL {
        let on_select = on_select.clone();
        let is_selected = format == selected;
        options = options.child(
            div()
                .id(SharedString::from(format!("format-{}", format.extension())))
                .w_full()
                .px_3()
                .py_1()
                .text_sm()
                .cursor_pointer()
                .text_color(if is_selected { accent } else { text })
                .when(is_selected, |el| el.font_weight(gpui::FontWeight::BOLD))
                .hover(|s| s.bg(hover_bg))
                .on_click(cx.listener(move |view, _event, _window, cx| {
                    on_select(view, format);
                    cx.notify();
                }))
                .child(format.label()),
        );
    }

    div()
        .w_full()
        .flex()
        .flex_col()
        .gap_1()
        .child(trigger)
        .when(open, |el| el.child(options))
}
