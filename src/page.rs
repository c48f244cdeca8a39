use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::controls::{ControlButton, Controls, CONTAINER_ID};
use crate::render::ContainerSink;

const PAGE_TITLE: &str = "Functional Cooking Companion";

fn render_button(button: &ControlButton) -> String {
    let class = if button.active {
        format!("{} active", button.kind.class())
    } else {
        button.kind.class().to_string()
    };
    format!(
        r#"<button class="{}" {}="{}">{}</button>"#,
        class,
        button.kind.attribute(),
        encode_double_quoted_attribute(&button.value),
        encode_text(&button.label)
    )
}

fn render_group(buttons: &[ControlButton]) -> String {
    buttons
        .iter()
        .map(render_button)
        .collect::<Vec<_>>()
        .join("\n                ")
}

/// Assemble a standalone HTML document from the controls and the container content
pub fn render_page(controls: &Controls, container: &ContainerSink) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <header>
        <h1>🍳 {title}</h1>
    </header>
    <main>
        <section class="controls">
            <div class="filter-group">
                {filters}
            </div>
            <div class="sort-group">
                {sorts}
            </div>
        </section>
        <div id="{container_id}">{cards}</div>
    </main>
</body>
</html>
"#,
        title = PAGE_TITLE,
        filters = render_group(&controls.filters),
        sorts = render_group(&controls.sorts),
        container_id = CONTAINER_ID,
        cards = container.markup(),
    )
}
