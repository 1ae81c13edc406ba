//! Echo chatbot server
//!
//! Replies to every inbound message with the text it carried.
//!
//! ```sh
//! MAAP_TOKEN=... MAAP_API_URL=... MAAP_BOT_ID=... cargo run --example echo
//! ```

use maap_bot_sdk::{Bot, BotConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bot = Bot::new(BotConfig::new(
        std::env::var("MAAP_TOKEN").unwrap_or_else(|_| "TOKEN".to_string()),
        std::env::var("MAAP_API_URL").unwrap_or_else(|_| "API_URL".to_string()),
        std::env::var("MAAP_BOT_ID").unwrap_or_else(|_| "BOT_ID".to_string()),
    ))?;

    bot.on("message", |payload, reply| async move {
        let text = payload
            .rcs_message
            .as_ref()
            .and_then(|message| message.get("textMessage"))
            .and_then(|text| text.as_str())
            .unwrap_or_default()
            .to_string();

        let Some(reply) = reply else { return };

        match reply.send(format!("You wrote: {text}"), None).await {
            Ok(body) => info!(?body, "Reply delivered"),
            Err(err) => error!(error = %err, "Reply failed"),
        }
    });

    let app = bot.webhook_router();
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;

    info!("Echo chatbot server running on port 3000");
    axum::serve(listener, app).await?;

    Ok(())
}
