//! Eva CLI entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eva")]
#[command(about = "🛡️ Eva - insurance-quote AI assistant")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Eva configuration
    Onboard,

    /// Chat with Eva
    Chat {
        /// Message to send (omit for interactive mode)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show Eva status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Setup global Ctrl+C handler
    let exit_flag = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let r = exit_flag.clone();

    ctrlc::set_handler(move || {
        if r.load(std::sync::atomic::Ordering::SeqCst) {
            println!("\n👋 Bye!");
            std::process::exit(0);
        } else {
            println!("\n⚠️  Press Ctrl+C again to exit");
            r.store(true, std::sync::atomic::Ordering::SeqCst);

            // Reset flag after 3 seconds
            let r2 = r.clone();
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_secs(3));
                r2.store(false, std::sync::atomic::Ordering::SeqCst);
            });
        }
    })
    .ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Onboard => {
            println!("🛡️ Initializing Eva...");
            eva::config::onboard()?;
            println!("\nNext step:");
            println!("  Chat: eva chat -m \"I'd like a quote\"");
        }

        Commands::Chat { message } => {
            let config = eva::config::load()?;
            let mut channel = build_channel(&config)?;

            if let Some(msg) = message {
                // Single message mode
                let reply = channel.run_once(&msg).await?;
                println!("\n🛡️ {}", reply);
            } else {
                // Interactive mode
                eva::ui::print_header(&config.model);
                println!("  Interactive mode (type 'exit' to quit)");
                channel.run_interactive().await?;
            }
        }

        Commands::Status => {
            let config = eva::config::load()?;
            println!("🛡️ Eva Status\n");
            println!("Model: {}", config.model);
            println!(
                "API key: {}",
                if config.api_key.is_empty() {
                    "not set (run 'eva onboard')"
                } else {
                    "✓"
                }
            );

            let tools = eva::tools::ToolRegistry::with_defaults();
            println!("Tools: {}", tools.tool_names().join(", "));
        }
    }

    Ok(())
}

fn build_channel(
    config: &eva::config::Config,
) -> Result<eva::adapters::cli::CliChannel<eva::agent::ClaudeClient>> {
    use eva::adapters::cli::CliChannel;
    use eva::agent::{ClaudeClient, TurnController};
    use eva::tools::ToolRegistry;

    let tools = ToolRegistry::with_defaults();
    let client = ClaudeClient::new(config, eva::identity::system_prompt(), tools.definitions())?;
    let controller = TurnController::new(client, tools);

    Ok(CliChannel::new(controller))
}
