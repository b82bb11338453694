use std::io::Write;

use clap::Parser;
use reqwest::header::{HeaderValue, REFERER};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Fetch a URL through a running url-relay instance", long_about = None)]
struct Cli {
    /// Base address of the relay.
    #[arg(short, long, default_value = "http://localhost:8080")]
    relay: String,

    /// Referer header to present to the relay.
    #[arg(long, default_value = "http://localhost/")]
    referer: String,

    /// Remote URL to fetch through the relay.
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/", cli.relay.trim_end_matches('/')))
        .query(&[("url", cli.url.as_str())])
        .header(REFERER, HeaderValue::from_str(&cli.referer)?)
        .send()
        .await?;

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.bytes().await?;

    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        eprintln!("Response: {}", String::from_utf8_lossy(&body));
        return Ok(());
    }

    std::io::stdout().write_all(&body)?;
    Ok(())
}
