//! Gateway event handling: prefix-command parsing, the caller allow-list
//! gate, and dispatch to the order commands.

use std::collections::HashSet;
use std::str::FromStr;

use serenity::async_trait;
use serenity::client::Context;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::UserId;
use serenity::prelude::EventHandler;

use crate::commands;
use crate::constants::COMMAND_PREFIX;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Orders,
    Order,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orders" => Ok(Command::Orders),
            "order" => Ok(Command::Order),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    authorized: HashSet<UserId>,
}

impl Handler {
    pub fn new(authorized_ids: &[u64]) -> Self {
        Self {
            authorized: authorized_ids.iter().copied().map(UserId::new).collect(),
        }
    }

    /// Whether this caller may run the order commands. Everyone else is
    /// ignored without feedback.
    pub fn is_authorized(&self, user_id: UserId) -> bool {
        self.authorized.contains(&user_id)
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(command_body) = msg.content.strip_prefix(COMMAND_PREFIX) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        if command == Command::Unknown {
            return;
        }
        // Unauthorized callers are dropped silently: no reply, no reaction.
        if !self.is_authorized(msg.author.id) {
            return;
        }
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Orders => commands::orders::run::run_prefix(&ctx, &msg).await,
            Command::Order => commands::order::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        println!("{} is connected and ready!", ready.user.name);
    }
}
