use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use flavorforge::Config;
use flavorforge::core::recipe::{self, AnalysisConstraints};
use flavorforge::core::taste::{self, FormulaIngredient};
use flavorforge::gateway;

/// `FlavorForge` — taste prediction and recipe analysis for alternative food
/// development.
#[derive(Parser, Debug)]
#[command(name = "flavorforge")]
#[command(version = "0.1.0")]
#[command(about = "Taste prediction and recipe analysis engine.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway serving the analysis endpoints
    Serve {
        /// Port to listen on (use 0 for a random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Predict the taste profile of a formula from a JSON file
    Predict {
        /// Path to a JSON array of {name, percentage} entries ("-" for stdin)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Analyze a free-text product description
    Analyze {
        /// Product description, e.g. "plant-based burger patty"
        description: String,

        /// Dietary restriction (repeatable): gluten-free, soy-free, nut-free
        #[arg(long = "restrict")]
        restrictions: Vec<String>,

        /// Maximum ingredient budget in USD per kg
        #[arg(long)]
        budget: Option<f64>,
    },
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            gateway::run_gateway(&host, port, &config).await
        }
        Commands::Predict { file } => {
            let raw = read_input(&file)?;
            let formula: Vec<FormulaIngredient> =
                serde_json::from_str(&raw).context("parse formula JSON")?;
            let report = taste::predict(&formula)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Analyze {
            description,
            restrictions,
            budget,
        } => {
            let constraints = AnalysisConstraints {
                target_market: None,
                dietary_restrictions: restrictions,
                budget_constraint: budget,
            };
            let analysis = recipe::analyze(&description, &constraints)?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(())
        }
    }
}

fn read_input(file: &PathBuf) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read formula from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("read formula file {}", file.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::parse_from(["flavorforge", "serve", "--port", "9000", "--host", "::1"]);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(9000));
                assert_eq!(host.as_deref(), Some("::1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn analyze_collects_repeated_restrictions() {
        let cli = Cli::parse_from([
            "flavorforge",
            "analyze",
            "vegan cheese block",
            "--restrict",
            "nut-free",
            "--restrict",
            "soy-free",
            "--budget",
            "18.5",
        ]);
        match cli.command {
            Commands::Analyze {
                description,
                restrictions,
                budget,
            } => {
                assert_eq!(description, "vegan cheese block");
                assert_eq!(restrictions, vec!["nut-free", "soy-free"]);
                assert!(budget.is_some());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn predict_accepts_stdin_sentinel() {
        let cli = Cli::parse_from(["flavorforge", "predict", "--file", "-"]);
        match cli.command {
            Commands::Predict { file } => assert_eq!(file.as_os_str(), "-"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
