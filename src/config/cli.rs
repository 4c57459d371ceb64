use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Recommend plants and advice for a garden profile
    Recommend(RecommendArgs),
    /// Print the gardening tip of the day
    Tip(TipArgs),
    /// Load and validate a plant catalog
    CheckCatalog {
        /// Catalog TOML file (defaults to the configured or built-in catalog)
        #[arg(long)]
        catalog: Option<String>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RecommendArgs {
    /// Garden profile (.json or .toml)
    #[arg(short, long)]
    pub profile: String,

    /// Skip the AI service and use the rule-based engine only
    #[arg(long)]
    pub offline: bool,

    /// Date used to infer the season (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Args)]
pub struct TipArgs {
    /// Garden profile (.json or .toml)
    #[arg(short, long)]
    pub profile: String,

    #[arg(long)]
    pub date: Option<NaiveDate>,
}
