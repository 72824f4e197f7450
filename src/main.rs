use clap::Parser;
use ovh_dns_backup::credentials::CredentialOverrides;
use ovh_dns_backup::error::BackupError;
use std::path::PathBuf;
use std::process::ExitCode;

const CONFIG_EXAMPLE: &str = "\
ovh.toml example:

  [default]
  endpoint = \"ovh-eu\"

  [ovh-eu]
  application_key = \"xxx\"
  application_secret = \"xxx\"
  consumer_key = \"xxx\"
";

#[derive(Parser)]
#[command(name = "ovh-dns-backup")]
#[command(
    about = "Backup OVH-hosted DNS zones to a dated local directory",
    after_help = CONFIG_EXAMPLE
)]
struct Cli {
    /// Backup root folder (defaults to the system temp directory)
    #[arg(short = 'd', long)]
    destination: Option<PathBuf>,

    /// OVH API endpoint identifier (e.g. ovh-eu)
    #[arg(short = 'e', long, env = "OVH_ENDPOINT")]
    endpoint: Option<String>,

    /// API application key
    #[arg(
        short = 'k',
        long,
        alias = "application_key",
        env = "OVH_APPLICATION_KEY"
    )]
    application_key: Option<String>,

    /// API application secret
    #[arg(
        short = 's',
        long,
        alias = "application_secret",
        env = "OVH_APPLICATION_SECRET"
    )]
    application_secret: Option<String>,

    /// API consumer key
    #[arg(short = 'c', long, alias = "consumer_key", env = "OVH_CONSUMER_KEY")]
    consumer_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let overrides = CredentialOverrides {
        endpoint: cli.endpoint,
        application_key: cli.application_key,
        application_secret: cli.application_secret,
        consumer_key: cli.consumer_key,
    };

    let destination = cli
        .destination
        .unwrap_or_else(ovh_dns_backup::backup::default_destination);

    match ovh_dns_backup::cli::backup::execute(&overrides, &destination).await {
        Ok(_) => ExitCode::SUCCESS,
        // Missing configuration gets a distinct exit code so wrappers can
        // tell "not set up" from a failed run
        Err(err @ BackupError::MissingConfiguration) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
