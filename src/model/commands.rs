use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub(crate) enum BotCommand {
    #[command(description = "Start the conversation")]
    Start,
    #[command(description = "Show the help message")]
    Help,
}

impl BotCommand {
    /// Command name as it appears after the leading slash.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            BotCommand::Start => "start",
            BotCommand::Help => "help",
        }
    }
}
