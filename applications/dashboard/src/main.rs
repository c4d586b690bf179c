/// Presence Dashboard - user selector and presence charts in the terminal
use anyhow::Context;
use clap::{Parser, Subcommand};
use presence_client::PresenceClient;
use presence_core::{AvatarDisplay, SelectorState};
use presence_dashboard::{commands, DashboardConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "presence-dashboard")]
#[command(about = "Presence dashboard client", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PRESENCE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the users offered by the selector
    Users,
    /// Select a user and show their avatar
    Select {
        /// User id
        user_id: i64,
    },
    /// Mean start and end of presence per weekday
    StartEnd {
        /// User id
        user_id: i64,
    },
    /// Mean time of presence per weekday
    MeanTime {
        /// User id
        user_id: i64,
    },
    /// Total presence per weekday
    Weekday {
        /// User id
        user_id: i64,
    },
    /// Show the chart library bootstrap request
    Charts,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "presence_dashboard=info,presence_core=info,presence_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config =
        DashboardConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    let client =
        PresenceClient::new(config.client_config()).context("Failed to create API client")?;

    match cli.command {
        Commands::Users => {
            let selector = commands::load_selector(&client).await;
            print!("{}", selector.view());
            if matches!(selector.state(), SelectorState::Failed { .. }) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Select { user_id } => {
            let (selector, display) = commands::select_user(&client, user_id).await?;
            if let Some(user) = selector.directory().get(user_id) {
                println!("{} ({})", user.name, user.user_id);
            }
            match display {
                AvatarDisplay::Shown(url) => println!("Avatar: {}", url),
                AvatarDisplay::Hidden => println!("Avatar: none"),
            }
        }
        Commands::StartEnd { user_id } => {
            print!("{}", commands::start_end(&client, user_id).await?);
        }
        Commands::MeanTime { user_id } => {
            print!("{}", commands::mean_time(&client, user_id).await?);
        }
        Commands::Weekday { user_id } => {
            print!("{}", commands::weekday(&client, user_id).await?);
        }
        Commands::Charts => {
            let request = config.chart_request();
            println!(
                "visualization v{} packages={} language={}",
                request.version,
                request.package_names().join(","),
                request.language
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
