//! Text command - show the normalized page the field rules run against.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::ProgressBar;

use invex_core::{LayoutConfig, PdfTextRenderer, TextFieldExtractor};

use super::config::load_config;
use crate::source::Source;

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// Input PDF file or http(s) URL
    #[arg(required = true)]
    input: String,
}

pub async fn run(args: TextArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let source = Source::parse(&args.input);

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    let data = source.load(&config.fetch, &pb).await?;
    pb.finish_and_clear();

    let extractor = TextFieldExtractor::from_config(&config);
    let page = extractor
        .render_page(&data)
        .with_context(|| format!("failed to render {}", source.name()))?;

    if let Ok(pages) = PdfTextRenderer::new().page_count(&data) {
        if pages > 1 {
            eprintln!(
                "{} Document has {} pages, only the first is read",
                style("ℹ").blue(),
                pages
            );
        }
    }

    let tags = line_tags(extractor.layout());
    for (index, line) in page.lines().iter().enumerate() {
        match tags.get(&index) {
            Some(tag) => println!("{:>3}  {:<18} {}", index, style(tag).cyan(), line),
            None => println!("{:>3}  {:<18} {}", index, "", line),
        }
    }

    let required = extractor.layout().required_lines();
    if page.line_count() < required {
        eprintln!(
            "{} Page has {} lines, the layout needs {}",
            style("⚠").yellow(),
            page.line_count(),
            required
        );
    }

    Ok(())
}

/// Which record field each fixed line feeds.
fn line_tags(layout: &LayoutConfig) -> HashMap<usize, &'static str> {
    HashMap::from([
        (layout.customer_name_line, "customer.name"),
        (layout.customer_street_line, "customer.street"),
        (layout.customer_postcode_line, "customer.postcode"),
        (layout.customer_country_line, "customer.country"),
        (layout.payment_line, "payment"),
    ])
}
