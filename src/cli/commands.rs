use crate::application::run_pipeline::RunSettings;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "growmarkt", about = "Import statistics, buyer discovery and AI market reports")]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Parameters fixed for every run of this process.
#[derive(Args)]
pub struct SettingsArgs {
    /// Statistics year
    #[arg(long, global = true, default_value = "2023")]
    pub period: String,
    /// Gemini model used for the report
    #[arg(long, global = true, default_value = "gemini-1.5-flash")]
    pub model: String,
    /// Number of search results turned into leads (1-10)
    #[arg(long, global = true, default_value = "5")]
    pub max_leads: usize,
}

impl From<SettingsArgs> for RunSettings {
    fn from(args: SettingsArgs) -> Self {
        RunSettings {
            period: args.period,
            model: args.model,
            max_leads: args.max_leads,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the web form
    Serve {
        #[arg(long, default_value = "0.0.0.0:8501")]
        bind: String,
    },
    /// Run all three phases once and print them
    Run {
        /// Product name, e.g. Hazelnuts
        #[arg(long, default_value = "Hazelnuts")]
        product: String,
        /// HS code, e.g. 0802
        #[arg(long, default_value = "0802")]
        hs_code: String,
        /// Reporter country code (numeric), e.g. 276
        #[arg(long, default_value = "276")]
        country_code: String,
        /// Country name used in search and report, e.g. Germany
        #[arg(long, default_value = "Germany")]
        country_name: String,
        /// Output language (en, tr)
        #[arg(long, default_value = "en")]
        lang: String,
        /// Print the run as JSON instead of text
        #[arg(long)]
        json: bool,
        #[arg(long, default_value = "", hide_default_value = true)]
        gemini_key: String,
        #[arg(long, default_value = "", hide_default_value = true)]
        comtrade_key: String,
        #[arg(long, default_value = "", hide_default_value = true)]
        google_key: String,
        #[arg(long, default_value = "", hide_default_value = true)]
        google_cx: String,
        #[arg(long, default_value = "", hide_default_value = true)]
        hunter_key: String,
    },
}
