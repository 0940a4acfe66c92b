//! Run the agent page with the search tool toggled on.

use gemdeck::client::ApiClient;
use gemdeck::pages::AgentPage;
use gemdeck::AgentTool;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ApiClient::from_env()?;
    let mut page = AgentPage::new();
    page.toggle_tool(AgentTool::GoogleSearch);
    page.prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "最新のAI技術について調べて".to_string());

    page.send(&client).await;

    match page.history().last() {
        Some(exchange) => {
            println!("使用されたツール: {}", exchange.tools_used.join(", "));
            println!("{}", exchange.response);
        }
        None => eprintln!("{}", page.error().unwrap_or_default()),
    }
    Ok(())
}
