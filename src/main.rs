use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use shopclerk_bot::config::Config;
use shopclerk_bot::constants::AUTHORIZED_USER_IDS;
use shopclerk_bot::handler::Handler;
use shopclerk_bot::model::AppState;

#[tokio::main]
async fn main() {
    // A missing .env file is tolerated; deployments can use real environment variables.
    dotenv::dotenv().ok();
    init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(why) => {
            eprintln!("{why}");
            std::process::exit(1);
        }
    };

    let app_state = Arc::new(AppState::from_config(&config));

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(AUTHORIZED_USER_IDS))
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        println!("Client error: {:?}", why);
    }
}

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shopclerk_bot=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}
