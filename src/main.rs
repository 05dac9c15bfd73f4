use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use telegraph::{ApiResponse, ClientConfig, TelegraphClient};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "telegraph")]
#[command(about = "Publish to Telegra.ph from the command line", long_about = None)]
struct Cli {
    /// Access token; defaults to $TELEGRAPH_TOKEN
    #[arg(long, global = true)]
    token: Option<String>,

    /// Give up on a request after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and its content
    GetPage {
        /// Everything after https://telegra.ph/, e.g. Sample-Page-12-15
        path: String,
    },

    /// Create a new account and print its token
    CreateAccount {
        short_name: String,
        #[arg(long)]
        author_name: Option<String>,
        #[arg(long)]
        author_url: Option<String>,
    },

    /// List pages belonging to the account
    ListPages {
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Create a page from a JSON array of nodes
    CreatePage {
        title: String,
        #[arg(value_name = "CONTENT_JSON")]
        content: PathBuf,
    },

    /// Upload a local file
    Upload {
        file: PathBuf,
        /// Guessed from the file extension when omitted
        #[arg(long)]
        mime_type: Option<String>,
    },

    /// Download an image and upload it to Telegraph
    UploadUrl { image_url: String },
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v.
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn,telegraph=info".to_string(),
            1 => "info,telegraph=debug".to_string(),
            _ => "debug,telegraph=trace".to_string(),
        },
    };
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ApiResponse> {
    // The environment is only consulted here, never by the library.
    let mut config = ClientConfig::from_env();
    if let Some(token) = cli.token {
        config = config.access_token(token);
    }
    if let Some(secs) = cli.timeout {
        config = config.timeout(Duration::from_secs(secs));
    }
    let client = TelegraphClient::with_config(config)?;

    let response = match cli.command {
        Commands::GetPage { path } => client.get_page(&path).await?,
        Commands::CreateAccount {
            short_name,
            author_name,
            author_url,
        } => {
            client
                .create_account(&short_name, author_name.as_deref(), author_url.as_deref())
                .await?
        }
        Commands::ListPages { offset } => client.get_my_page_list(Some(offset)).await?,
        Commands::CreatePage { title, content } => {
            let raw = tokio::fs::read_to_string(&content)
                .await
                .with_context(|| format!("unable to read {}", content.display()))?;
            let nodes: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", content.display()))?;
            client.create_page(&nodes, &title).await?
        }
        Commands::Upload { file, mime_type } => {
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("unable to read {}", file.display()))?;
            let mime_type = mime_type.unwrap_or_else(|| {
                mime_guess::from_path(&file)
                    .first_or_octet_stream()
                    .to_string()
            });
            client.upload_file(bytes, &mime_type).await?
        }
        Commands::UploadUrl { image_url } => client.fetch_and_upload_image(&image_url).await?,
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(ApiResponse::Success(payload)) => {
            match serde_json::to_string_pretty(&payload) {
                Ok(pretty) => println!("{pretty}"),
                Err(_) => println!("{payload}"),
            }
            ExitCode::SUCCESS
        }
        Ok(ApiResponse::Failure(failure)) => {
            eprintln!("{failure}");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
