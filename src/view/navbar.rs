//! Top bar: app title and day navigation

use crate::model::AppModel;

pub const APP_TITLE: &str = "CodeDaily";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarView {
    pub day: u32,
    pub total: usize,
    /// Previous button enabled
    pub has_previous: bool,
    /// Next button enabled
    pub has_next: bool,
}

impl NavbarView {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            day: model.day(),
            total: model.total_days(),
            has_previous: model.has_previous_day(),
            has_next: model.has_next_day(),
        }
    }

    /// `Day {n} of {total}`
    pub fn label(&self) -> String {
        format!("Day {} of {}", self.day, self.total)
    }
}

pub fn render_navbar(view: &NavbarView) -> String {
    let prev = if view.has_previous { "<" } else { " " };
    let next = if view.has_next { "> Next" } else { "" };
    format!("{}  {} {} {}", APP_TITLE, prev, view.label(), next)
        .trim_end()
        .to_string()
}
