use std::io::Write;

use html_escape::encode_text;
use log::debug;

use crate::error::Result;
use crate::model::Recipe;

/// Everything a recipe card shows, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub icon: String,
    pub title: String,
    /// CSS class of the difficulty badge, e.g. `difficulty-easy`
    pub difficulty_class: String,
    /// Capitalized difficulty, e.g. `Easy`
    pub difficulty_label: String,
    pub minutes: u32,
    pub description: String,
    pub ingredients: Vec<String>,
}

impl From<&Recipe> for CardView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            icon: recipe.emoji.clone(),
            title: recipe.title.clone(),
            difficulty_class: format!("difficulty-{}", recipe.difficulty.as_str()),
            difficulty_label: recipe.difficulty.label().to_string(),
            minutes: recipe.time,
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
        }
    }
}

/// Build the markup for a single recipe card
pub fn create_recipe_card(card: &CardView) -> String {
    let ingredients: String = card
        .ingredients
        .iter()
        .map(|ingredient| format!("<li>{}</li>", encode_text(ingredient)))
        .collect();

    format!(
        r#"
        <div class="recipe-card">
            <div class="recipe-image">{icon}</div>
            <div class="recipe-content">
                <h2 class="recipe-title">{title}</h2>
                <span class="difficulty-badge {class}">{label}</span>
                <div class="recipe-meta">
                    <div class="recipe-meta-item">
                        <span>⏱️ {minutes} min</span>
                    </div>
                </div>
                <p class="recipe-description">{description}</p>
                <div class="recipe-ingredients">
                    <h4>Ingredients:</h4>
                    <ul>{ingredients}</ul>
                </div>
            </div>
        </div>
"#,
        icon = encode_text(&card.icon),
        title = encode_text(&card.title),
        class = card.difficulty_class,
        label = card.difficulty_label,
        minutes = card.minutes,
        description = encode_text(&card.description),
        ingredients = ingredients,
    )
}

/// Concatenate card markup in input order
pub fn render_cards(cards: &[CardView]) -> String {
    cards.iter().map(create_recipe_card).collect()
}

/// Somewhere a view can be displayed.
///
/// Each call replaces whatever the sink showed before; there is no
/// incremental update.
pub trait RenderSink {
    fn replace_content(&mut self, cards: &[CardView]) -> Result<()>;
}

/// In-memory stand-in for the page's recipe container
#[derive(Debug, Default, Clone)]
pub struct ContainerSink {
    markup: String,
    renders: usize,
}

impl ContainerSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup currently held by the container
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of times the content has been replaced
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl RenderSink for ContainerSink {
    fn replace_content(&mut self, cards: &[CardView]) -> Result<()> {
        self.markup = render_cards(cards);
        self.renders += 1;
        debug!("Container now holds {} cards", cards.len());
        Ok(())
    }
}

/// Writes each rendered view to a writer as a plain-text listing
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for WriterSink<W> {
    fn replace_content(&mut self, cards: &[CardView]) -> Result<()> {
        let noun = if cards.len() == 1 { "recipe" } else { "recipes" };
        writeln!(self.writer, "--- {} {} ---", cards.len(), noun)?;
        for card in cards {
            writeln!(
                self.writer,
                "{} {} [{}] ⏱️ {} min",
                card.icon, card.title, card.difficulty_label, card.minutes
            )?;
            writeln!(self.writer, "    {}", card.description)?;
            writeln!(self.writer, "    Ingredients: {}", card.ingredients.join(", "))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
