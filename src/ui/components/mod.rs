//! Reusable UI components

mod about;
mod controls;
mod converter_view;

pub use about::AboutBox;
pub use converter_view::ConverterView;
