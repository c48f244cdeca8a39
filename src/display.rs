use log::{debug, info};

use crate::controls::{ControlKind, Controls};
use crate::error::Result;
use crate::model::Recipe;
use crate::pipeline::{apply_filter, apply_sort};
use crate::render::{CardView, RenderSink};
use crate::state::{ViewIntent, ViewState};

/// Derive the visible recipes: full list, then filter, then sort
pub fn compute_view(recipes: &[Recipe], state: ViewState) -> Vec<&Recipe> {
    let all: Vec<&Recipe> = recipes.iter().collect();
    let filtered = apply_filter(&all, state.filter);
    apply_sort(&filtered, state.sort)
}

/// Recipe list, selectors and controls wired to a render sink
pub struct RecipeDisplay<S: RenderSink> {
    recipes: Vec<Recipe>,
    state: ViewState,
    controls: Controls,
    sink: S,
}

impl<S: RenderSink> RecipeDisplay<S> {
    pub fn new(recipes: Vec<Recipe>, controls: Controls, sink: S) -> Self {
        Self {
            recipes,
            state: ViewState::default(),
            controls,
            sink,
        }
    }

    /// Start from `state` instead of the neutral defaults
    pub fn with_state(mut self, state: ViewState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (Controls, S) {
        (self.controls, self.sink)
    }

    /// The recipes the current state selects, in display order
    pub fn current_view(&self) -> Vec<&Recipe> {
        compute_view(&self.recipes, self.state)
    }

    /// Re-render the current view into the sink. Returns the number of cards shown.
    pub fn update_display(&mut self) -> Result<usize> {
        let cards: Vec<CardView> = compute_view(&self.recipes, self.state)
            .into_iter()
            .map(CardView::from)
            .collect();

        self.sink.replace_content(&cards)?;

        info!(
            "Displaying {} recipes (Filter: {}, Sort: {})",
            cards.len(),
            self.state.filter,
            self.state.sort
        );
        Ok(cards.len())
    }

    /// First render with whatever state the display was built with
    pub fn initialize(&mut self) -> Result<usize> {
        self.controls.sync_active(&self.state);
        debug!(
            "Wired {} filter and {} sort controls",
            self.controls.filters.len(),
            self.controls.sorts.len()
        );
        let shown = self.update_display()?;
        info!("Total recipes available: {}", self.recipes.len());
        Ok(shown)
    }

    /// Apply an intent: new state, active markers, then a fresh render
    pub fn dispatch(&mut self, intent: ViewIntent) -> Result<usize> {
        self.state = self.state.reduce(intent);
        let kind = match intent {
            ViewIntent::SelectFilter(_) => ControlKind::Filter,
            ViewIntent::SelectSort(_) => ControlKind::Sort,
        };
        self.controls.sync_group(kind, &self.state);
        self.update_display()
    }

    /// A click on a control of `kind` tagged with the raw `value`
    pub fn handle_click(&mut self, kind: ControlKind, value: &str) -> Result<usize> {
        let intent = match kind {
            ControlKind::Filter => ViewIntent::filter_from_attribute(value),
            ControlKind::Sort => ViewIntent::sort_from_attribute(value),
        };
        self.state = self.state.reduce(intent);
        self.controls.activate_clicked(kind, value, &self.state);
        self.update_display()
    }

    /// A click on a filter control tagged with `value`
    pub fn handle_filter_click(&mut self, value: &str) -> Result<usize> {
        self.handle_click(ControlKind::Filter, value)
    }

    /// A click on a sort control tagged with `value`
    pub fn handle_sort_click(&mut self, value: &str) -> Result<usize> {
        self.handle_click(ControlKind::Sort, value)
    }
}
