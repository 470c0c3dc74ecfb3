use std::path::PathBuf;

use clap::{Parser, Subcommand};
use springlab_content::PostStore;
use springlab_mailer::{HttpMailer, Mailer, MailerConfig, OutboundEmail};
use springlab_types::EmailAddress;

#[derive(Parser)]
#[command(name = "springlab")]
#[command(about = "SpringHealth Labs website backend CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List blog posts, newest first
    Posts {
        /// Directory holding the markdown documents
        #[arg(long, default_value = "content/posts")]
        content_dir: PathBuf,
    },
    /// Parse every content document and report failures
    Check {
        /// Directory holding the markdown documents
        #[arg(long, default_value = "content/posts")]
        content_dir: PathBuf,
    },
    /// Send a test email through the configured mail API
    SendTest {
        /// Recipient address
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Posts { content_dir }) => {
            let store = PostStore::new(content_dir);
            let posts = store.load_all();
            if posts.is_empty() {
                println!("No posts found.");
            } else {
                for post in posts {
                    println!(
                        "{}  {}  {} ({} min read)",
                        post.date,
                        post.slug,
                        post.title,
                        post.reading_time_minutes()
                    );
                }
            }
        }
        Some(Commands::Check { content_dir }) => {
            let store = PostStore::new(content_dir);
            let scans = match store.scan() {
                Ok(scans) => scans,
                Err(e) => {
                    eprintln!("Error reading content directory: {}", e);
                    std::process::exit(1);
                }
            };
            if scans.is_empty() {
                println!("No content documents found.");
                return Ok(());
            }
            let mut failures = 0;
            for scan in &scans {
                match &scan.outcome {
                    Ok(post) => println!("ok     {} ({})", scan.file_name, post.title),
                    Err(e) => {
                        failures += 1;
                        println!("error  {}: {}", scan.file_name, e);
                    }
                }
            }
            println!("{} document(s), {} failure(s)", scans.len(), failures);
            if failures > 0 {
                std::process::exit(1);
            }
        }
        Some(Commands::SendTest { to }) => {
            let to = EmailAddress::parse(&to)?;
            let config = MailerConfig::from_env_values(
                std::env::var("MAIL_API_URL").ok(),
                std::env::var("MAIL_API_TOKEN").ok(),
                std::env::var("MAIL_SENDER").ok(),
            )?;
            let mailer = HttpMailer::new(config)?;
            let email = OutboundEmail {
                to,
                subject: "SpringHealth Labs mail check".to_string(),
                html_body: "<p>If you can read this, outbound mail is working.</p>".to_string(),
            };
            match mailer.send(&email).await {
                Ok(()) => println!("Test email dispatched from {}", mailer.sender()),
                Err(e) => {
                    eprintln!("Error sending test email: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("Use 'springlab --help' for commands");
        }
    }

    Ok(())
}
