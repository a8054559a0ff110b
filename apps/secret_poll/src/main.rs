use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use ethers::prelude::*;
use log::info;

use secret_poll::constants::{MAX_OPTIONS, MIN_OPTIONS, PRIVATE_KEY_VAR};
use secret_poll::display::{option_views, status_label};
use secret_poll::{
    AppConfig, ClosePoll, CreatePollForm, EthersPollGateway, Feed, Notification,
    PlaceholderEncryptor, Poll, PollGateway, Tab, VoteForm, WalletConfig, WalletSession,
};

#[derive(Parser)]
#[command(name = "secret-poll")]
#[command(about = "Create and vote on FHE-encrypted polls")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new encrypted poll
    Create {
        /// Question for the poll
        #[arg(short, long)]
        question: String,
        /// Poll options (comma-separated, 2 to 6)
        #[arg(short, long)]
        options: String,
        /// Duration in hours (1 to 168)
        #[arg(short, long, default_value = "24")]
        duration: u64,
    },
    /// Cast an encrypted vote
    Vote {
        #[arg(short, long)]
        poll_id: u64,
        /// Option id, e.g. 3b
        #[arg(short, long)]
        option: String,
    },
    /// Close a poll and reveal its results
    Close {
        #[arg(short, long)]
        poll_id: u64,
    },
    /// View poll details
    View {
        #[arg(short, long)]
        poll_id: u64,
        /// Print the poll as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether the configured account has voted
    Voted {
        #[arg(short, long)]
        poll_id: u64,
    },
    /// List polls of one tab
    Feed {
        #[arg(short, long, default_value = "active")]
        tab: Tab,
        /// Poll ids to load (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u64>,
        /// Show the built-in demonstration polls instead of reading the contract
        #[arg(long)]
        sample: bool,
    },
}

fn now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

fn report(notification: &Notification) {
    match notification {
        Notification::Success(message) => println!("{} {}", "✔".green().bold(), message.green()),
        Notification::Error(err) => println!("{} {}", "✘".red().bold(), err.to_string().red()),
    }
}

fn print_poll(poll: &Poll) {
    println!(
        "{} {}  [{}]",
        format!("#{}", poll.id).cyan().bold(),
        poll.question.bold(),
        status_label(poll).yellow()
    );
    println!(
        "   {} votes · {} · by {}",
        poll.total_votes, poll.time_left, poll.creator
    );
    for view in option_views(poll, !poll.is_active) {
        match view.result {
            Some((votes, percent)) => {
                println!("   {:>4}  {}  {} votes  {}%", view.id, view.text, votes, percent)
            }
            None => println!("   {:>4}  {}", view.id, view.text),
        }
    }
    if poll.is_active {
        println!("   {}", "Votes are encrypted until poll closes".dimmed());
    }
}

fn print_feed(feed: &Feed) {
    println!(
        "Active Polls ({})  Closed Polls ({})\n",
        feed.active_count(),
        feed.closed_count()
    );
    let polls = feed.display_polls();
    if polls.is_empty() {
        println!("{}", feed.empty_message().dimmed());
    }
    for poll in polls {
        print_poll(poll);
        println!();
    }
}

fn finish(notification: Option<Notification>) {
    match notification {
        Some(notification) => {
            report(&notification);
            if !notification.is_success() {
                std::process::exit(1);
            }
        }
        None => println!("{}", "Already voted on this poll".yellow()),
    }
}

async fn run<M: Middleware + 'static>(
    command: Commands,
    gateway: EthersPollGateway<M>,
    session: WalletSession,
) -> Result<()> {
    match command {
        Commands::Create {
            question,
            options,
            duration,
        } => {
            let options: Vec<&str> = options.split(',').collect();
            anyhow::ensure!(
                (MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()),
                "a poll needs between {MIN_OPTIONS} and {MAX_OPTIONS} options"
            );

            let mut form = CreatePollForm::new();
            form.set_question(question);
            for (index, text) in options.into_iter().enumerate() {
                if index >= form.options().len() {
                    form.add_option();
                }
                form.update_option(index, text.trim());
            }
            form.set_duration_hours(duration);
            finish(Some(form.submit(&session, &gateway).await));
        }
        Commands::Vote { poll_id, option } => {
            let info = gateway.get_poll_info(poll_id).await?;
            let mut form = VoteForm::new(Poll::from_info(poll_id, info, now()));
            form.refresh_has_voted(&session, &gateway).await?;
            let notification = form
                .vote(&option, &session, &gateway, &PlaceholderEncryptor)
                .await;
            finish(notification);
        }
        Commands::Close { poll_id } => {
            let notification = ClosePoll::new().close(poll_id, &session, &gateway).await;
            finish(Some(notification));
        }
        Commands::View { poll_id, json } => {
            let info = gateway.get_poll_info(poll_id).await?;
            let poll = Poll::from_info(poll_id, info, now());
            if json {
                println!("{}", serde_json::to_string_pretty(&poll)?);
            } else {
                print_poll(&poll);
            }
        }
        Commands::Voted { poll_id } => {
            match secret_poll::voted_status(&gateway, &session, poll_id).await? {
                Some(true) => println!("Voted on poll {poll_id}"),
                Some(false) => println!("Not voted on poll {poll_id}"),
                None => println!("{}", "Set PRIVATE_KEY to check your vote status".yellow()),
            }
        }
        Commands::Feed { tab, ids, .. } => {
            let mut feed = Feed::default();
            feed.refresh(&gateway, &ids, now()).await?;
            feed.select(tab);
            print_feed(&feed);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Commands::Feed {
        tab, sample: true, ..
    } = &cli.command
    {
        let mut feed = Feed::new(secret_poll::sample::sample_polls());
        feed.select(*tab);
        print_feed(&feed);
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    let wallet_config = WalletConfig::new(&config);

    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .with_context(|| format!("invalid RPC url {}", config.rpc_url))?;
    let chain_id = provider.get_chainid().await?.as_u64();
    wallet_config.ensure_supported_chain(chain_id)?;
    info!(
        "{} on chain {chain_id}, contract {:?}",
        wallet_config.app_name, config.contract_address
    );

    match std::env::var(PRIVATE_KEY_VAR) {
        Ok(key) => {
            let wallet: LocalWallet = key.parse().context("invalid PRIVATE_KEY")?;
            let wallet = wallet.with_chain_id(chain_id);
            let session = WalletSession::from_signer(&wallet);
            let client = Arc::new(SignerMiddleware::new(provider, wallet));
            run(
                cli.command,
                EthersPollGateway::new(config.contract_address, client),
                session,
            )
            .await
        }
        Err(_) => {
            run(
                cli.command,
                EthersPollGateway::new(config.contract_address, Arc::new(provider)),
                WalletSession::disconnected(),
            )
            .await
        }
    }
}
