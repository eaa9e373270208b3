use clap::Parser;
use solar_cep::core::EstimationRequest;
use solar_cep::utils::logger;
use solar_cep::utils::validation::{validate_peak_power, Validate};
use solar_cep::{AppConfig, SolarPipeline};
use std::path::PathBuf;

/// Run a single estimation against the live upstream services and print the JSON result.
#[derive(Debug, Parser)]
#[command(name = "estimate")]
struct Args {
    /// Postal code (CEP)
    cep: String,

    /// Nominal peak power in kW
    peakpower: f64,

    /// Apply the 0.8 derating factor, as the POST endpoint does
    #[arg(long)]
    derate: bool,

    #[arg(long, short, help = "Path to a TOML configuration file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.upstream.validate()?;

    let peak_power = validate_peak_power(args.peakpower)?;
    let request = if args.derate {
        EstimationRequest::derated(args.cep.clone(), peak_power)
    } else {
        EstimationRequest::nominal(args.cep.clone(), peak_power)
    };

    let pipeline = SolarPipeline::from_config(&config.upstream)?;
    match pipeline.run(&request).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {} (HTTP {})", e, e.status_code());
            std::process::exit(2);
        }
    }
}
