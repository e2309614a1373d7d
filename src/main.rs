use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;

use stef::{
    curves::curve_set,
    engine::{RiskEngine, RiskPolicy, SiteInput, StatusScheme},
    model::{ModelConstants, ModelLoader},
    report::AnalysisReport,
    scenario::ClimateScenario,
    web::{self, WebServerConfig},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "STEF metabolic thermal risk runner")]
struct Cli {
    /// Latitude of the analysis site (degrees)
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude of the analysis site (degrees, display only)
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    lng: f64,

    /// Nutritional index in [0, 1]
    #[arg(long, default_value_t = 1.0)]
    ni: f64,

    /// Climate scenario: present, ssp1-2.6 or ssp5-8.5
    #[arg(long, default_value = "present")]
    scenario: String,

    /// Risk policy: three-zone or limit-ratio
    #[arg(long, default_value = "three-zone")]
    policy: String,

    /// Status bands: three-tier or two-tier
    #[arg(long, default_value = "three-tier")]
    tiers: String,

    /// Path to a YAML model constants file (baseline when omitted)
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Emit the full JSON envelope instead of the text report
    #[arg(long)]
    json: bool,

    /// Serve the map-click web UI instead of a one-shot assessment
    #[arg(long)]
    serve: bool,

    /// Bind host for --serve
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port for --serve
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn parse_policy(s: &str) -> Result<RiskPolicy> {
    match s.trim().to_ascii_lowercase().as_str() {
        "three-zone" | "three_zone" => Ok(RiskPolicy::ThreeZone),
        "limit-ratio" | "limit_ratio" => Ok(RiskPolicy::LimitRatio),
        other => bail!("unknown risk policy '{other}' (expected three-zone or limit-ratio)"),
    }
}

fn parse_tiers(s: &str) -> Result<StatusScheme> {
    match s.trim().to_ascii_lowercase().as_str() {
        "three-tier" | "three_tier" => Ok(StatusScheme::ThreeTier),
        "two-tier" | "two_tier" => Ok(StatusScheme::TwoTier),
        other => bail!("unknown status bands '{other}' (expected three-tier or two-tier)"),
    }
}

fn load_constants(path: Option<&PathBuf>) -> Result<ModelConstants> {
    match path {
        Some(path) => {
            let loader = ModelLoader::new(".");
            loader.load(path)
        }
        None => Ok(ModelConstants::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let constants = load_constants(cli.constants.as_ref())?;
    let policy = parse_policy(&cli.policy)?;
    let scheme = parse_tiers(&cli.tiers)?;

    if cli.serve {
        let config = WebServerConfig {
            constants,
            policy,
            scheme,
            host: cli.host,
            port: cli.port,
        };
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(web::run(config));
    }

    let latitude = cli
        .lat
        .context("--lat is required unless running with --serve")?;
    let scenario = ClimateScenario::from_str(&cli.scenario)?;
    let input = SiteInput {
        latitude,
        longitude: cli.lng,
        nutritional_index: cli.ni,
        scenario,
    };

    let engine = RiskEngine::new(constants)
        .with_policy(policy)
        .with_scheme(scheme);
    let assessment = engine.assess(&input)?;
    let report = AnalysisReport::new(&input, &assessment);

    if cli.json {
        let envelope = serde_json::json!({
            "report": report,
            "curves": curve_set(engine.constants(), &assessment),
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
