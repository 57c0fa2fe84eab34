use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use quoter_core::{
    compute_layout, compute_pricing, grid_placements, LayoutParams, PricingInputs, PricingResult,
    QuoteForm,
};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quoter")]
#[command(about = "Print-shop quoting tool - sheet layout and price breakdowns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute how many pieces fit on a press sheet
    Layout {
        /// Input file with layout parameters (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute the full price breakdown
    Price {
        /// Input file with pricing inputs (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a whole quote form: layout, sheets, and pricing
    Quote {
        /// Input quote form (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the synced form (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate an SVG imposition preview
    Svg {
        /// Input file with layout parameters (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout { input, output } => layout_command(input, output)?,
        Commands::Price { input, output } => price_command(input, output)?,
        Commands::Quote { input, output } => quote_command(input, output)?,
        Commands::Svg { input, output } => svg_command(input, output)?,
    }

    Ok(())
}

/// Reads YAML when the extension says so, JSON otherwise.
fn load_input<T: DeserializeOwned>(input: &PathBuf) -> Result<T> {
    let content = std::fs::read_to_string(input)?;
    let ext = input.extension().and_then(|s| s.to_str());
    let value = if ext == Some("yaml") || ext == Some("yml") {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(value)
}

fn layout_command(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let params: LayoutParams = load_input(&input)?;

    let result = compute_layout(&params);

    println!("{}", "Sheet layout".bright_yellow().bold());
    println!(
        "  Sheet: {} x {} cm, piece: {} x {} cm{}",
        params.sheet_width,
        params.sheet_height,
        params.piece_width,
        params.piece_height,
        if params.rotate { " (rotated)" } else { "" }
    );
    println!(
        "  {} across x {} down = {} per sheet",
        result.across.to_string().bright_white().bold(),
        result.down.to_string().bright_white().bold(),
        result.per_sheet.to_string().bright_green().bold()
    );
    println!(
        "  Utilization: {}%",
        result.used_area_percent.to_string().bright_white()
    );

    if result.per_sheet == 0 {
        println!(
            "  {}",
            "0 pieces fit - adjust dimensions".bright_red().bold()
        );
    }

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(&output_path, json)?;
        println!(
            "Saved result to {}",
            output_path.display().to_string().bright_white()
        );
    }

    Ok(())
}

fn price_command(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let inputs: PricingInputs = load_input(&input)?;

    let result = compute_pricing(&inputs);
    print_breakdown(&result);

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(&output_path, json)?;
        println!(
            "Saved result to {}",
            output_path.display().to_string().bright_white()
        );
    }

    Ok(())
}

fn quote_command(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let mut form: QuoteForm = load_input(&input)?;
    form.sync_derived();

    println!("{}", "Quote summary".bright_yellow().bold());
    println!(
        "  Customer: {}",
        form.client.customer_display().bright_white().bold()
    );
    println!(
        "  Product: {} x {}",
        form.product.product_name.bright_white(),
        form.product.quantity.to_string().bright_white().bold()
    );

    let layout = compute_layout(&form.layout_params());
    println!(
        "  Layout: {} per sheet, {} sheets recommended",
        layout.per_sheet.to_string().bright_green().bold(),
        form.operational
            .papers
            .first()
            .map(|p| p.recommended_sheets)
            .unwrap_or(0)
            .to_string()
            .bright_green()
            .bold()
    );
    println!();

    print_breakdown(&form.calculation);

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&form)?;
        std::fs::write(&output_path, json)?;
        println!(
            "Saved synced form to {}",
            output_path.display().to_string().bright_white()
        );
    }

    Ok(())
}

fn print_breakdown(result: &PricingResult) {
    println!("{}", "Price breakdown".bright_yellow().bold());
    println!("  Paper cost:      AED {:>10.2}", result.paper_cost);
    println!("  Finishing cost:  AED {:>10.2}", result.finishing_cost);
    println!("  Base:            AED {:>10.2}", result.base_before_margin);
    println!("  Margin:          AED {:>10.2}", result.margin_amount);
    println!("  Subtotal:        AED {:>10.2}", result.subtotal);
    println!("  Discount:       -AED {:>10.2}", result.discount_amount);
    println!("  Final subtotal:  AED {:>10.2}", result.final_subtotal);
    println!("  VAT (5%):        AED {:>10.2}", result.vat_amount);
    println!(
        "  {}  AED {}",
        "Total:".bright_green().bold(),
        format!("{:>10.2}", result.total_price).bright_green().bold()
    );
}

fn svg_command(input: PathBuf, output: PathBuf) -> Result<()> {
    let params: LayoutParams = load_input(&input)?;

    let svg = generate_simple_svg(&params)?;
    std::fs::write(&output, svg)?;

    println!(
        "{} Saved SVG to {}",
        "Done.".bright_green(),
        output.display().to_string().bright_white()
    );

    Ok(())
}

/// Minimal preview: sheet outline, piece grid, yield caption.
fn generate_simple_svg(params: &LayoutParams) -> Result<String> {
    use std::fmt::Write;

    let scale = 8.0;
    let margin = 20.0;
    let layout = compute_layout(params);
    let placements = grid_placements(params, &layout);

    let sheet_w = params.sheet_width.max(0.0) * scale;
    let sheet_h = params.sheet_height.max(0.0) * scale;
    let svg_width = sheet_w + 2.0 * margin;
    let svg_height = sheet_h + 2.0 * margin + 20.0;

    let mut svg = String::new();
    writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        svg_width, svg_height, svg_width, svg_height
    )?;
    writeln!(
        &mut svg,
        r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#fff" stroke="#333" stroke-width="2"/>"##,
        margin, margin, sheet_w, sheet_h
    )?;

    for placement in &placements {
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#1e293b" opacity="0.85"/>"##,
            margin + placement.x * scale,
            margin + placement.y * scale,
            placement.width * scale,
            placement.height * scale
        )?;
    }

    writeln!(
        &mut svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#666">{} per sheet | {:.1}% used</text>"##,
        margin,
        svg_height - 8.0,
        layout.per_sheet,
        layout.used_area_percent
    )?;
    writeln!(&mut svg, "</svg>")?;

    Ok(svg)
}
