//! Rendering implementation for ConverterView
//!
//! Contains the Render trait implementation and the three group boxes.

use gpui::{
    Context, Div, ExternalPaths, IntoElement, PromptLevel, Render, Stateful, Window, div,
    prelude::*,
};

use crate::actions::{
    CancelConversion, ChangeOutputDirectory, ClearSession, Convert, OpenOutputDir, SelectFile,
};
use crate::conversion::open_in_file_manager;
use crate::ui::Theme;
use crate::ui::components::controls::{
    render_button_base, render_format_picker, render_group, render_progress,
};

use super::ConverterView;

impl ConverterView {
    /// Render the drag-and-drop target
    fn render_drop_zone(&self, theme: &Theme) -> Stateful<Div> {
        let drop_bg = theme.drop_target;

        div()
            .id("drop-zone")
            .w_full()
            .py_6()
            .flex()
            .items_center()
            .justify_center()
            .border_2()
            .border_color(theme.border)
            .rounded_md()
            .text_sm()
            .text_color(theme.text_muted)
            .drag_over::<ExternalPaths>(move |style, _, _, _| style.bg(drop_bg))
            .child("Drag and drop files here")
    }

    /// Render the Input group: drop area, Select File, metadata text
    fn render_input_group(&self, theme: &Theme, cx: &mut Context<Self>) -> Div {
        let select_button = render_button_base(
            "select-file-btn",
            "Select File",
            !self.display.status.is_converting(),
            theme.accent,
            theme.accent_hover,
            theme,
        )
        .on_click(cx.listener(|this, _event, _window, cx| {
            this.prompt_for_input_file(cx);
        }));

        let content = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(self.render_drop_zone(theme))
            .child(select_button)
            .child(
                div()
                    .w_full()
                    .text_sm()
                    .text_color(theme.text)
                    .child(self.display.info_text.clone()),
            );

        render_group("Input", theme, content)
    }

    /// Render the Output Settings group: directory, change button, format
    fn render_output_group(&self, theme: &Theme, cx: &mut Context<Self>) -> Div {
        let converting = self.display.status.is_converting();

        let change_dir_button = render_button_base(
            "change-dir-btn",
            "Change Output Directory",
            !converting,
            theme.accent,
            theme.accent_hover,
            theme,
        )
        .on_click(cx.listener(move |this, _event, _window, cx| {
            if !converting {
                this.prompt_for_output_directory(cx);
            }
        }));

        let format_picker = render_format_picker(
            self.session.output_format,
            self.format_menu_open,
            !converting,
            theme,
            cx,
            |view: &mut Self| view.toggle_format_menu(),
            |view: &mut Self, format| view.set_output_format(format),
        );

        let content = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .w_full()
                    .px_2()
                    .py_1()
                    .border_1()
                    .border_color(theme.border)
                    .rounded_md()
                    .text_sm()
                    .text_color(theme.text)
                    .overflow_hidden()
                    .child(self.session.output_directory.display().to_string()),
            )
            .child(change_dir_button)
            .child(format_picker);

        render_group("Output Settings", theme, content)
    }

    /// Render the Process group: Convert/Cancel, Clear, status and progress
    fn render_process_group(&self, theme: &Theme, cx: &mut Context<Self>) -> Div {
        let converting = self.display.status.is_converting();

        let convert_button = if converting {
            render_button_base(
                "cancel-btn",
                "Cancel",
                true,
                theme.danger,
                theme.danger,
                theme,
            )
            .on_click(cx.listener(|this, _event, _window, _cx| {
                this.cancel_conversion();
            }))
        } else {
            render_button_base(
                "convert-btn",
                "Convert",
                true,
                theme.success,
                theme.success_hover,
                theme,
            )
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.start_conversion(cx);
            }))
        };

        let clear_button = render_button_base(
            "clear-btn",
            "Clear",
            !converting,
            theme.accent,
            theme.accent_hover,
            theme,
        )
        .on_click(cx.listener(|this, _event, _window, cx| {
            if this.clear() {
                cx.notify();
            }
        }));

        let content = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(convert_button)
            .child(clear_button)
            .child(render_progress(
                self.display.progress,
                self.display.status.display_text(),
                theme,
            ));

        render_group("Process", theme, content)
    }

    /// Show any pending error dialog
    ///
    /// Called from the render loop; errors from any action end up here.
    fn show_pending_error_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some((title, message)) = self.pending_error_message.take() {
            let _future = window.prompt(
                PromptLevel::Critical,
                &title,
                Some(&message),
                &["OK"],
                cx,
            );
            // We don't need to wait for the response - just showing the dialog
        }
    }
}

impl Render for ConverterView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Subscribe to appearance changes (once)
        if !self.appearance_subscription_set {
            self.appearance_subscription_set = true;
            cx.observe_window_appearance(window, |_this, _window, cx| {
                cx.notify();
            })
            .detach();
        }

        // Grab initial focus so menu items work immediately
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            if let Some(ref focus_handle) = self.focus_handle {
                focus_handle.focus(window);
            }
        }

        self.show_pending_error_dialog(window, cx);

        let theme = Theme::from_appearance(window.appearance());

        // Capture listeners first (before borrowing for the groups)
        let on_external_drop = cx.listener(|this, paths: &ExternalPaths, _window, cx| {
            if this.accept_dropped_paths(paths.paths()) || this.pending_error_message.is_some() {
                cx.notify();
            }
        });
        let on_select_file = cx.listener(|this, _: &SelectFile, _window, cx| {
            this.prompt_for_input_file(cx);
        });
        let on_change_dir = cx.listener(|this, _: &ChangeOutputDirectory, _window, cx| {
            if !this.display.status.is_converting() {
                this.prompt_for_output_directory(cx);
            }
        });
        let on_convert = cx.listener(|this, _: &Convert, _window, cx| {
            this.start_conversion(cx);
        });
        let on_cancel = cx.listener(|this, _: &CancelConversion, _window, _cx| {
            this.cancel_conversion();
        });
        let on_clear = cx.listener(|this, _: &ClearSession, _window, cx| {
            if this.clear() {
                cx.notify();
            }
        });
        let on_open_output = cx.listener(|this, _: &OpenOutputDir, _window, _cx| {
            if let Err(e) = open_in_file_manager(&this.session.output_directory) {
                log::warn!("{}", e);
            }
        });

        let input_group = self.render_input_group(&theme, cx);
        let output_group = self.render_output_group(&theme, cx);
        let process_group = self.render_process_group(&theme, cx);

        // Build the base container
        let mut container = div()
            .id("converter-view")
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .bg(theme.bg)
            .overflow_y_scroll();

        // Track focus if we have a focus handle (not in tests)
        if let Some(ref focus_handle) = self.focus_handle {
            container = container.track_focus(focus_handle);
        }

        container
            .on_action(on_select_file)
            .on_action(on_change_dir)
            .on_action(on_convert)
            .on_action(on_cancel)
            .on_action(on_clear)
            .on_action(on_open_output)
            // Handle external file drops on the entire window
            .on_drop(on_external_drop)
            .child(input_group)
            .child(output_group)
            .child(process_group)
    }
}
