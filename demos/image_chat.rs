//! Two turns of the multi-turn image chat: the first call mints a session,
//! the second reuses it.

use gemdeck::client::ApiClient;
use gemdeck::pages::ImageChatPage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ApiClient::from_env()?;
    let mut page = ImageChatPage::new();

    for message in ["夕焼けの海辺に佇む猫を描いてください", "空を青くしてください"] {
        page.message = message.to_string();
        page.send(&client).await;

        if let Some(error) = page.error() {
            eprintln!("{error}");
            break;
        }
        println!("session: {}", page.session_id().unwrap_or("-"));
        if let Some(turn) = page.history().last() {
            if let Some(text) = &turn.text {
                println!("  {text}");
            }
            if let Some(url) = &turn.image_url {
                println!("  {url}");
            }
        }
    }
    Ok(())
}
