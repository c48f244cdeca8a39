use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

use crate::error::{CompanionError, Result};
use crate::selector::{FilterSelector, SortSelector};
use crate::state::{ViewIntent, ViewState};

/// Id of the element the recipe cards are rendered into
pub const CONTAINER_ID: &str = "recipe-container";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Filter,
    Sort,
}

impl ControlKind {
    /// CSS class that marks buttons of this kind
    pub fn class(&self) -> &'static str {
        match self {
            ControlKind::Filter => "filter-btn",
            ControlKind::Sort => "sort-btn",
        }
    }

    /// Data attribute holding the selector value
    pub fn attribute(&self) -> &'static str {
        match self {
            ControlKind::Filter => "data-filter",
            ControlKind::Sort => "data-sort",
        }
    }
}

/// A clickable button tagged with a raw selector value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlButton {
    pub kind: ControlKind,
    /// Value of the data attribute, exactly as found on the page
    pub value: String,
    pub label: String,
    pub active: bool,
}

impl ControlButton {
    pub fn new(kind: ControlKind, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            label: label.into(),
            active: false,
        }
    }

    /// The intent a click on this button produces
    pub fn intent(&self) -> ViewIntent {
        match self.kind {
            ControlKind::Filter => ViewIntent::filter_from_attribute(&self.value),
            ControlKind::Sort => ViewIntent::sort_from_attribute(&self.value),
        }
    }

    fn matches(&self, state: &ViewState) -> bool {
        // strict parse: a button with an unrecognized value is never active
        match self.kind {
            ControlKind::Filter => self
                .value
                .parse::<FilterSelector>()
                .map(|filter| filter == state.filter)
                .unwrap_or(false),
            ControlKind::Sort => self
                .value
                .parse::<SortSelector>()
                .map(|sort| sort == state.sort)
                .unwrap_or(false),
        }
    }
}

/// The filter and sort buttons of a page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Controls {
    pub filters: Vec<ControlButton>,
    pub sorts: Vec<ControlButton>,
}

impl Controls {
    /// The buttons of the stock companion page
    pub fn standard() -> Self {
        let filters = [
            ("all", "All Recipes"),
            ("easy", "Easy"),
            ("medium", "Medium"),
            ("hard", "Hard"),
            ("quick", "Quick (≤ 30 min)"),
        ]
        .into_iter()
        .map(|(value, label)| ControlButton::new(ControlKind::Filter, value, label))
        .collect();

        let sorts = [
            ("none", "Default"),
            ("name", "Name (A-Z)"),
            ("time", "Time (Fastest)"),
        ]
        .into_iter()
        .map(|(value, label)| ControlButton::new(ControlKind::Sort, value, label))
        .collect();

        Self { filters, sorts }
    }

    /// Read the controls out of page markup.
    ///
    /// Buttons are found by their `filter-btn` / `sort-btn` class and keep
    /// their data attribute verbatim. The page must contain the recipe
    /// container element.
    pub fn from_html(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);

        let has_container = Selector::parse(&format!("#{}", CONTAINER_ID))
            .map(|selector| document.select(&selector).next().is_some())
            .unwrap_or(false);
        if !has_container {
            return Err(CompanionError::MissingElement(format!("#{}", CONTAINER_ID)));
        }

        let controls = Self {
            filters: collect_buttons(&document, ControlKind::Filter),
            sorts: collect_buttons(&document, ControlKind::Sort),
        };
        debug!(
            "Found {} filter and {} sort controls",
            controls.filters.len(),
            controls.sorts.len()
        );
        Ok(controls)
    }

    fn group_mut(&mut self, kind: ControlKind) -> &mut Vec<ControlButton> {
        match kind {
            ControlKind::Filter => &mut self.filters,
            ControlKind::Sort => &mut self.sorts,
        }
    }

    /// Mark exactly the buttons whose value matches `state` as active
    pub fn sync_active(&mut self, state: &ViewState) {
        self.sync_group(ControlKind::Filter, state);
        self.sync_group(ControlKind::Sort, state);
    }

    /// Re-mark one group of buttons against `state`
    pub fn sync_group(&mut self, kind: ControlKind, state: &ViewState) {
        for button in self.group_mut(kind).iter_mut() {
            button.active = button.matches(state);
        }
    }

    /// Re-mark the group of a clicked button. When no button in the group
    /// matches the new state (an unrecognized value and no neutral button on
    /// the page), the clicked button itself becomes the active one.
    pub fn activate_clicked(&mut self, kind: ControlKind, clicked: &str, state: &ViewState) {
        self.sync_group(kind, state);
        let group = self.group_mut(kind);
        if group.iter().any(|button| button.active) {
            return;
        }
        if let Some(button) = group.iter_mut().find(|button| button.value == clicked) {
            button.active = true;
        }
    }

    /// Look up a button by kind and raw value
    pub fn find(&self, kind: ControlKind, value: &str) -> Option<&ControlButton> {
        let group = match kind {
            ControlKind::Filter => &self.filters,
            ControlKind::Sort => &self.sorts,
        };
        group.iter().find(|button| button.value == value)
    }

    pub fn active_filter(&self) -> Option<&ControlButton> {
        self.filters.iter().find(|button| button.active)
    }

    pub fn active_sort(&self) -> Option<&ControlButton> {
        self.sorts.iter().find(|button| button.active)
    }
}

fn collect_buttons(document: &Html, kind: ControlKind) -> Vec<ControlButton> {
    let mut buttons = Vec::new();
    if let Ok(selector) = Selector::parse(&format!(".{}", kind.class())) {
        for element in document.select(&selector) {
            match element.value().attr(kind.attribute()) {
                Some(value) => buttons.push(ControlButton {
                    kind,
                    value: value.to_string(),
                    label: element_text(&element),
                    active: false,
                }),
                None => warn!(
                    "Skipping .{} without {} attribute",
                    kind.class(),
                    kind.attribute()
                ),
            }
        }
    }
    buttons
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
