mod config;
mod dispatcher;
mod model;
mod schema;
mod telegram;
#[cfg(test)]
mod testing;
mod transport;
mod utils;

use crate::config::Config;
use crate::dispatcher::LogErrorSink;
use crate::model::commands::BotCommand;
use crate::schema::schema;
use crate::telegram::{update_handler, TelegramTransport};
use crate::utils::constants::{LOG_FILE_PATH, LOG_PATTERN};

use anyhow::Result;
use dotenv::dotenv;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::sync::Arc;
use std::time::Duration;
use teloxide::types::MenuButton;
use teloxide::{prelude::*, utils::command::BotCommands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logging()?;

    log::info!("Starting tutor bot...");

    let config = Config::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.read_timeout))
        .connect_timeout(Duration::from_secs(config.write_timeout))
        .build()?;
    let bot = Bot::with_client(config.token.clone(), client);

    bot.set_my_commands(BotCommand::bot_commands()).await?;
    bot.set_chat_menu_button()
        .menu_button(MenuButton::Commands)
        .await?;

    let conversations = Arc::new(dispatcher::Dispatcher::new(
        schema(),
        TelegramTransport::new(bot.clone()),
        Arc::new(LogErrorSink),
    ));

    Dispatcher::builder(bot, update_handler())
        .dependencies(dptree::deps![conversations])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Console and append-only file sinks, set up once before anything runs.
fn init_logging() -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(LOG_FILE_PATH)?;

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(
            Root::builder()
                .appender("stdout")
                .appender("logfile")
                .build(LevelFilter::Info),
        )?;

    log4rs::init_config(config)?;

    Ok(())
}
