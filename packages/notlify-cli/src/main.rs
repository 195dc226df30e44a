use clap::{Parser, Subcommand};
use notlify_client::page::render_page;
use notlify_client::{
    NotificationClient, NotificationForm, SubmitOutcome, format_notification, render_list,
};
use notlify_sdk::{AppConfig, NotlifyClient, Priority};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser)]
#[command(name = "notlify-cli")]
#[command(about = "NOTLIFY notification CLI")]
struct Cli {
    /// API base URL, e.g. http://127.0.0.1:8000/api
    #[arg(short, long)]
    server: Option<String>,

    /// Request timeout in seconds; no timeout when unset
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a notification, then show the refreshed list
    Send {
        /// Recipient email
        #[arg(short, long)]
        email: String,
        /// Notification message
        message: String,
        /// Notification subject
        #[arg(long, default_value = "")]
        subject: String,
        /// low, normal, high or urgent
        #[arg(short, long, default_value_t = Priority::Normal)]
        priority: Priority,
    },
    /// List recent notifications
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
        /// Print the rendered list markup instead of text
        #[arg(long)]
        html: bool,
    },
    /// Show a single notification
    Get {
        id: String,
    },
    /// Server health check
    Health,
    /// Run the page-load sequence and print the rendered page fragments
    Page,
}

impl Cli {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = Some(timeout);
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply(config::app_config_from_env()?);

    match cli.command {
        Commands::Send {
            email,
            message,
            subject,
            priority,
        } => {
            let client = NotificationClient::from_config(&config);
            client.fill_form(NotificationForm::new(&email, &subject, &message, priority));

            match client.submit().await {
                SubmitOutcome::Sent(receipt) => {
                    let ui = client.snapshot();
                    println!("✅ {}", ui.banner.message);
                    if let Some(receipt) = receipt {
                        println!("   ID: {}", receipt.id);
                        println!("   Status: {}", receipt.status.label());
                    }
                    print_notifications(&ui.notifications);
                }
                SubmitOutcome::Failed(message) => {
                    eprintln!("❌ {}", message);
                    std::process::exit(1);
                }
            }
        }
        Commands::List {
            limit,
            offset,
            html,
        } => {
            let sdk = NotlifyClient::from_config(&config);
            let limit = limit.unwrap_or(config.list_limit);
            match sdk.list_notifications_page(limit, offset).await {
                Ok(list) if html => println!("{}", render_list(&list.notifications)?),
                Ok(list) => {
                    if let Some(total) = list.total {
                        println!("📬 Showing {} of {} notifications", list.notifications.len(), total);
                    }
                    print_notifications(&list.notifications);
                }
                Err(e) => {
                    eprintln!("❌ Failed to get notifications: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Get { id } => {
            let sdk = NotlifyClient::from_config(&config);
            match sdk.get_notification(&id).await {
                Ok(record) => println!("{}", format_notification(&record)),
                Err(e) => {
                    eprintln!("❌ Failed to get notification: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Health => {
            let sdk = NotlifyClient::from_config(&config);
            match sdk.health().await {
                Ok(health) if health.is_healthy() => {
                    println!("✅ Server is healthy");
                    if let Some(version) = health.version {
                        println!("   Version: {}", version);
                    }
                }
                Ok(health) => {
                    eprintln!("❌ Server reports status: {}", health.status);
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("❌ Server health check failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Page => {
            let client = NotificationClient::from_config(&config);
            client.startup().await;
            println!("{}", render_page(&client.snapshot())?);
        }
    }

    Ok(())
}

fn print_notifications(records: &[notlify_sdk::NotificationRecord]) {
    if records.is_empty() {
        println!("{}", notlify_client::EMPTY_PLACEHOLDER);
        return;
    }
    println!("📬 Notifications ({}):", records.len());
    for (i, record) in records.iter().enumerate() {
        println!("  {}. {}", i + 1, format_notification(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_send_command_parsing() {
        let args = vec![
            "notlify-cli",
            "send",
            "Disk almost full",
            "--email",
            "ops@example.com",
            "--subject",
            "Disk",
            "--priority",
            "high",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Send {
                email,
                message,
                subject,
                priority,
            } => {
                assert_eq!(email, "ops@example.com");
                assert_eq!(message, "Disk almost full");
                assert_eq!(subject, "Disk");
                assert_eq!(priority, Priority::High);
            }
            _ => panic!("Expected Send command"),
        }
    }

    #[test]
    fn test_send_defaults() {
        let args = vec!["notlify-cli", "send", "hi", "-e", "a@b.c"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Send {
                subject, priority, ..
            } => {
                assert_eq!(subject, "");
                assert_eq!(priority, Priority::Normal);
            }
            _ => panic!("Expected Send command"),
        }
    }

    #[test]
    fn test_invalid_priority_rejected() {
        let args = vec!["notlify-cli", "send", "hi", "-e", "a@b.c", "-p", "asap"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_list_command_parsing() {
        let args = vec!["notlify-cli", "list", "--limit", "5", "--offset", "10", "--html"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::List {
                limit,
                offset,
                html,
            } => {
                assert_eq!(limit, Some(5));
                assert_eq!(offset, Some(10));
                assert!(html);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_server_flag_overrides_config() {
        let args = vec![
            "notlify-cli",
            "--server",
            "http://localhost:9000/api",
            "--timeout",
            "3",
            "health",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let config = cli.apply(AppConfig::default());

        assert_eq!(config.server_url, "http://localhost:9000/api");
        assert_eq!(config.timeout_seconds, Some(3));
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn test_config_kept_without_flags() {
        let cli = Cli::try_parse_from(vec!["notlify-cli", "page"]).unwrap();
        let config = cli.apply(AppConfig::default());
        assert_eq!(config, AppConfig::default());
    }
}
