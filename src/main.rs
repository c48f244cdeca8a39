use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::{info, warn, LevelFilter};

use cooking_companion::config::{load_config_from, CompanionConfig};
use cooking_companion::{
    catalog, page, products, ContainerSink, ControlKind, Controls, FilterSelector, RecipeDisplay,
    RenderSink, SortSelector, ViewState, WriterSink,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Standalone HTML page with controls and recipe cards
    Html,
    /// Plain-text listing, one block per render
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "cooking-companion",
    version,
    about = "Filter, sort and render a recipe collection",
    long_about = "Renders the recipe collection through the filter and sort pipeline.\n\nExamples:\n  cooking-companion --filter quick --sort time > recipes.html\n  cooking-companion --format text --click filter=hard --click sort=name\n  cooking-companion --products"
)]
struct Cli {
    #[arg(short = 'f', long, value_name = "FILTER", help = "Initial filter: all, easy, medium, hard or quick.")]
    filter: Option<String>,

    #[arg(short = 's', long, value_name = "SORT", help = "Initial sort: none, name or time.")]
    sort: Option<String>,

    #[arg(
        long,
        value_name = "KIND=VALUE",
        action = ArgAction::Append,
        value_parser = parse_click,
        help = "Replay a control click, e.g. filter=quick or sort=time (repeatable)."
    )]
    click: Vec<(ControlKind, String)>,

    #[arg(long, value_name = "FILE", help = "Read filter and sort controls from an HTML page.")]
    page: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Load recipes from a JSON file.")]
    recipes: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "html", help = "Output format.")]
    format: OutputFormat,

    #[arg(long, help = "Run the product query demo instead of rendering recipes.")]
    products: bool,

    #[arg(long, value_name = "FILE", default_value = "companion", help = "Config file (TOML).")]
    config: String,

    #[arg(short = 'v', long, action = ArgAction::Count, help = "Increase verbosity (-v, -vv).")]
    verbose: u8,
}

fn parse_click(raw: &str) -> Result<(ControlKind, String), String> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got '{}'", raw))?;
    let kind = match kind.trim() {
        "filter" => ControlKind::Filter,
        "sort" => ControlKind::Sort,
        other => return Err(format!("unknown control kind '{}'", other)),
    };
    Ok((kind, value.trim().to_string()))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn initial_state(cli: &Cli, config: &CompanionConfig) -> Result<ViewState, Box<dyn std::error::Error>> {
    let mut state = config.initial_state()?;
    if let Some(filter) = &cli.filter {
        state.filter = filter.parse::<FilterSelector>()?;
    }
    if let Some(sort) = &cli.sort {
        state.sort = sort.parse::<SortSelector>()?;
    }
    Ok(state)
}

fn replay_clicks<S: RenderSink>(
    display: &mut RecipeDisplay<S>,
    clicks: &[(ControlKind, String)],
) -> Result<(), Box<dyn std::error::Error>> {
    for (kind, value) in clicks {
        if display.controls().find(*kind, value).is_none() {
            warn!("No {} control with value '{}' on the page", kind.class(), value);
            continue;
        }
        display.handle_click(*kind, value)?;
    }
    Ok(())
}

fn run_products_demo() {
    let products = catalog::products();

    println!("=== Clothing ===");
    let clothing = products::filter_by_category(&products, "Clothing");
    for product in &clothing {
        println!("{}", products::product_detail_line(product));
    }
    println!(
        "Total: ${:.2}",
        products::calculate_total_price(clothing.iter().copied())
    );

    println!("\n=== Names ===");
    println!("{}", products::product_names(&products).join(", "));

    println!("\n=== Total price ===");
    println!("${:.2}", products::calculate_total_price(&products));

    println!("\n=== At least $500 ===");
    println!("{}", products::get_expensive_products(&products, 500.0).join(", "));

    products::log_product_details(&products);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    // the product demo reports its detail lines through info!
    let verbose = if cli.products {
        cli.verbose.max(1)
    } else {
        cli.verbose
    };
    init_logging(verbose);

    if cli.products {
        run_products_demo();
        return Ok(());
    }

    let config = load_config_from(&cli.config)?;
    let state = initial_state(&cli, &config)?;

    let recipes = match cli.recipes.clone().or(config.recipes_file.clone().map(PathBuf::from)) {
        Some(path) => catalog::recipes_from_json(&fs::read_to_string(path)?)?,
        None => catalog::recipes(),
    };
    let controls = match cli.page.clone().or(config.page_file.clone().map(PathBuf::from)) {
        Some(path) => Controls::from_html(&fs::read_to_string(path)?)?,
        None => Controls::standard(),
    };

    match cli.format {
        OutputFormat::Html => {
            let mut display =
                RecipeDisplay::new(recipes, controls, ContainerSink::new()).with_state(state);
            display.initialize()?;
            replay_clicks(&mut display, &cli.click)?;
            let (controls, container) = display.into_parts();
            info!("Rendered {} times", container.renders());
            io::stdout().write_all(page::render_page(&controls, &container).as_bytes())?;
        }
        OutputFormat::Text => {
            let mut display =
                RecipeDisplay::new(recipes, controls, WriterSink::new(io::stdout())).with_state(state);
            display.initialize()?;
            replay_clicks(&mut display, &cli.click)?;
        }
    }

    Ok(())
}
