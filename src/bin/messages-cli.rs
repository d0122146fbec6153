use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "messages-cli")]
#[command(about = "Command-line client for the palindrome messages service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a message
    Create { content: String },
    /// Show one message
    Get { id: String },
    /// Replace a message's content
    Update { id: String, content: String },
    /// Delete a message
    Delete { id: String },
    /// List all messages
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Create { content } => {
            client.post(format!("{}/messages", base))
                .json(&json!({ "content": content }))
                .send()
                .await?
        }
        Commands::Get { id } => {
            client.get(format!("{}/messages/{}", base, id))
                .send()
                .await?
        }
        Commands::Update { id, content } => {
            client.put(format!("{}/messages/{}", base, id))
                .json(&json!({ "content": content }))
                .send()
                .await?
        }
        Commands::Delete { id } => {
            client.delete(format!("{}/messages/{}", base, id))
                .send()
                .await?
        }
        Commands::List => {
            client.get(format!("{}/messages", base))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    if status == reqwest::StatusCode::NO_CONTENT {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
