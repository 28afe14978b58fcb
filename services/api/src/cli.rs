use crate::demo::{
    run_demo, run_draws, run_score, run_what_if, DemoArgs, DrawsArgs, ScoreArgs, WhatIfArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use visa_pathways::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Visa Pathways",
    about = "Score migration profiles, plan improvements and forecast draws from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile against one program
    Score(ScoreArgs),
    /// Evaluate improvement scenarios and recommendations for a profile
    WhatIf(WhatIfArgs),
    /// Analyze, forecast and compare against a draw history CSV
    Draws(DrawsArgs),
    /// Run an end-to-end demo with a built-in profile and draw history
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::WhatIf(args) => run_what_if(args),
        Command::Draws(args) => run_draws(args),
        Command::Demo(args) => run_demo(args),
    }
}
