//! Contains widgets related utils

pub mod anim_checkbox;
pub mod line_plot;
pub mod simple_widgets;
