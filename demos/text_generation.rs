//! Generate text through the backend's text page.
//!
//! Point `GEMDECK_API_URL` at a running backend, or leave it unset for the
//! local default.

use gemdeck::client::ApiClient;
use gemdeck::pages::TextPage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ApiClient::from_env()?;
    println!("backend: {}", client.base_url());

    let mut page = TextPage::default();
    page.form.prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Rustについて俳句を一句詠んでください".to_string());

    page.submit(&client).await;

    match page.output() {
        Some(text) => println!("{text}"),
        None => eprintln!("{}", page.error().unwrap_or_default()),
    }
    Ok(())
}
