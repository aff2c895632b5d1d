//! Terminal front end for SoulSync.
//!
//! `journal` runs one entry through mood detection, the future-self reply and
//! the music player. `serve` hosts the three functions locally under
//! `/functions/v1`, which is where the client looks by default.

mod console_playback;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soulsync::client::avatar::{avatar_or_default, generate_avatar};
use soulsync::client::player::MusicPlayer;
use soulsync::client::{ApiClient, JournalApi, MusicSource};
use soulsync::handlers::build_router;
use soulsync::service::common_structs::UserProfile;
use soulsync::service::CommonService;
use soulsync::tables::StaticMusicTables;

use console_playback::ConsolePlayback;

const FUNCTIONS_PREFIX: &str = "/functions/v1";


#[derive(Parser, Debug)]
#[command(name = "soulsync")]
#[command(about = "Mood journaling with a future-self twist")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse one journal entry and queue music for its mood
    Journal(JournalArgs),
    /// Serve the three functions over HTTP
    Serve {
        #[arg(short, long, default_value = "54321", env = "SOULSYNC_PORT")]
        port: u16,
    },
}

#[derive(Args, Debug)]
struct JournalArgs {
    /// Journal text; read from stdin when omitted
    text: Option<String>,

    /// Call deployed functions at this URL instead of running them in-process
    #[arg(long, env = "SOULSYNC_API_URL")]
    api_url: Option<String>,

    /// Bearer token forwarded to the functions
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    anon_key: Option<String>,

    #[arg(long)]
    name: Option<String>,
    #[arg(long, default_value = "")]
    goals: String,
    #[arg(long, default_value = "")]
    dreams: String,
    #[arg(long, default_value = "")]
    challenges: String,
    #[arg(long, default_value = "")]
    inspiration: String,

    /// Avatar image URL; a generated one is used when omitted
    #[arg(long)]
    avatar: Option<String>,
}


#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soulsync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Journal(args) => journal(args).await,
        Command::Serve { port } => serve(port).await,
    }
}


async fn journal(args: JournalArgs) -> Result<()> {
    let text = match args.text.clone() {
        Some(text) => text,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await.context("failed to read journal from stdin")?;
            text
        },
    };

    let profile = UserProfile {
        name: args.name.clone(),
        goals: args.goals.clone(),
        dreams: args.dreams.clone(),
        challenges: args.challenges.clone(),
        inspiration: args.inspiration.clone(),
        avatar: Some(args.avatar.clone().unwrap_or_else(generate_avatar)),
    };

    match args.api_url.as_deref() {
        Some(url) => {
            info!(url, "using deployed functions");
            let client = ApiClient::new(url, args.anon_key.clone());
            let tables = client.tables();
            run_entry(client, tables, &text, &profile).await
        },
        None => {
            info!("running functions in-process");
            let service = CommonService::from_env();
            let tables = service.tables.clone();
            run_entry(service, tables, &text, &profile).await
        },
    }
}

async fn run_entry<A>(api: A, tables: Arc<StaticMusicTables>, text: &str, profile: &UserProfile) -> Result<()>
where
    A: JournalApi + MusicSource,
{
    println!("Avatar: {}", avatar_or_default(profile.avatar.as_deref()));

    let mood = api.detect_mood(text).await;
    println!("Mood: {} {}", mood.mood, mood.emoji);
    if let Some(confidence) = mood.confidence {
        println!("Confidence: {:.0}%", confidence * 100.0);
    }

    let reply = api.future_self(text, profile, mood.mood).await;
    println!();
    println!("{}", reply.message);
    println!("Advice: {}", reply.advice);
    println!("{}", reply.encouragement);

    let player = MusicPlayer::new(api, ConsolePlayback::default(), tables);
    player.load_mood(mood.mood).await;

    println!();
    println!("Music for your {} mood {}", mood.mood, mood.mood.emoji());
    for (index, song) in player.visible_songs().await.iter().enumerate() {
        let preview = if song.preview_url.is_some() { "" } else { " (no preview)" };
        println!("  {}. {} - {}{}", index + 1, song.name, song.artist, preview);
    }
    if let Some(url) = player.playlist_url().await {
        println!("Full playlist: {}", url);
    }
    Ok(())
}


async fn serve(port: u16) -> Result<()> {
    let service = CommonService::from_env();
    let app = Router::new().nest(FUNCTIONS_PREFIX, build_router(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("serving functions on http://{}{}", addr, FUNCTIONS_PREFIX);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("server error")?;
    Ok(())
}
