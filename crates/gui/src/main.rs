mod app;

use circuit_analyzer::analysis::AnalysisType;
use circuit_analyzer::parser::parse_si_value;
use clap::{Parser, Subcommand};
use eframe::egui;
use miette::{IntoDiagnostic, Result};

use crate::app::AnalyzerApp;

/// Desktop calculator for elementary circuit formulas
#[derive(Debug, Parser)]
#[command(name = "circuit-analyzer", version)]
struct Cli {
    /// Analysis type selected when the window opens
    #[arg(long, env = "CIRCUIT_ANALYZER_ANALYSIS", default_value = "ohms-law")]
    analysis: AnalysisType,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one formula and print the result line instead of opening the window
    Eval {
        /// ohms-law, kvl, thevenin, max-power or resonance
        analysis: AnalysisType,

        /// Inputs in field order. Unlike the window, SPICE suffixes are accepted:
        /// 2.2k, 10u, 4.7meg (m means milli)
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Command::Eval { analysis, values }) => eval(analysis, &values),
        None => run_window(cli.analysis),
    }
}

fn eval(analysis: AnalysisType, values: &[String]) -> Result<()> {
    let captions = analysis.field_captions();
    let inputs = values
        .iter()
        .enumerate()
        .map(|(idx, text)| parse_si_value(text, captions.get(idx).copied().unwrap_or("extra input")))
        .collect::<std::result::Result<Vec<f64>, _>>()
        .into_diagnostic()?;
    let solution = analysis.evaluate(&inputs).into_diagnostic()?;
    println!("{solution}");
    Ok(())
}

fn run_window(analysis: AnalysisType) -> Result<()> {
    tracing::info!(analysis = analysis.name(), "opening window");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 380.0])
            .with_min_inner_size([360.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Circuit Analyzer",
        options,
        Box::new(move |_cc| Ok(Box::new(AnalyzerApp::new(analysis)))),
    )
    .map_err(|e| miette::miette!("failed to open window: {e}"))
}
