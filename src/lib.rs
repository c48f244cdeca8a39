//! Filter, sort and render a recipe collection, plus a few product list queries.
//!
//! The display pipeline is `source -> filter -> sort -> render`, driven by a
//! [`ViewState`] and written into any [`RenderSink`].

pub mod catalog;
pub mod config;
pub mod controls;
pub mod display;
pub mod error;
pub mod model;
pub mod page;
pub mod pipeline;
pub mod products;
pub mod render;
pub mod selector;
pub mod state;

pub use controls::{ControlButton, ControlKind, Controls};
pub use display::{compute_view, RecipeDisplay};
pub use error::{CompanionError, Result};
pub use model::{Difficulty, Product, Recipe};
pub use render::{CardView, ContainerSink, RenderSink, WriterSink};
pub use selector::{FilterSelector, SortSelector};
pub use state::{ViewIntent, ViewState};

/// Render the built-in recipes as a full HTML page for `state`
///
/// # Example
/// ```
/// use cooking_companion::{render_recipes_page, FilterSelector, SortSelector, ViewState};
///
/// let page = render_recipes_page(ViewState::new(FilterSelector::Quick, SortSelector::Time))?;
/// assert!(page.contains("Quick Avocado Toast"));
/// # Ok::<(), cooking_companion::CompanionError>(())
/// ```
pub fn render_recipes_page(state: ViewState) -> Result<String> {
    let mut display =
        RecipeDisplay::new(catalog::recipes(), Controls::standard(), ContainerSink::new())
            .with_state(state);
    display.initialize()?;
    let (controls, container) = display.into_parts();
    Ok(page::render_page(&controls, &container))
}
