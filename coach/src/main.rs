//! Coach binary entry point
//!
//! Runs a headless practice session: transcript fragments are read from
//! stdin (one per line) standing in for the live voice transport, and
//! the analysis is printed when the session ends. `--plan` runs the
//! optional practice-plan path instead.

use async_trait::async_trait;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use coach::config::Settings;
use coach::core::{FeedbackOrchestrator, SessionController};
use coach::error::{CoachError, CoachResult};
use coach::services::{adapters_from_settings, OpenAiPlanGenerator};
use coach::traits::{PlanGenerator, VoiceTransport};
use coach::types::{ContextPayload, PracticePlanRequest, SessionConfig};
use shared::SessionMode;

#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "Timed speaking practice with resilient AI feedback")]
struct Args {
    /// Speaking-practice mode
    #[arg(long, default_value = "elevator-pitch")]
    mode: SessionMode,

    /// Topic; defaults to the mode's hint
    #[arg(long)]
    topic: Option<String>,

    /// Speaker name used in feedback
    #[arg(long)]
    speaker: Option<String>,

    /// Target duration in seconds, clamped to [30, 600]
    #[arg(long, default_value_t = 120)]
    duration: u64,

    /// Focus-area tags (repeatable); empty falls back to the defaults
    #[arg(long = "focus")]
    focus_areas: Vec<String>,

    /// Generate a weekly practice plan instead of running a session
    #[arg(long)]
    plan: bool,

    /// Skill level for plan generation
    #[arg(long, default_value = "intermediate")]
    skill_level: String,

    /// Daily practice minutes for plan generation
    #[arg(long, default_value_t = 15)]
    daily_minutes: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

/// Console stand-in for the real-time voice transport
///
/// Grants permission unconditionally and prints the agent context that
/// a real transport would send.
struct ConsoleTransport;

#[async_trait]
impl VoiceTransport for ConsoleTransport {
    async fn request_permission(&self) -> CoachResult<()> {
        Ok(())
    }

    async fn open(&self) -> CoachResult<()> {
        Ok(())
    }

    async fn send_context(&self, context: &ContextPayload) -> CoachResult<()> {
        let encoded = serde_json::to_string(context)
            .map_err(|e| CoachError::Transport { message: e.to_string() })?;
        info!("agent context: {encoded}");
        Ok(())
    }

    async fn close(&self) -> CoachResult<()> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    shared::logging::init_tracing_with_level(args.log_level.as_deref());

    let settings = Settings::from_env();
    if !settings.has_any_provider() {
        info!("no provider credentials configured, feedback will use the local generator");
    }

    if args.plan {
        return run_plan(&args, &settings).await;
    }
    run_session(&args, settings).await
}

async fn run_session(args: &Args, settings: Settings) -> anyhow::Result<()> {
    let mut config = SessionConfig::new(args.mode);
    config.topic = args.topic.clone();
    config.speaker_name = args.speaker.clone();
    config.set_duration_secs(args.duration);
    config.set_focus_areas(args.focus_areas.clone());

    let orchestrator = FeedbackOrchestrator::new(adapters_from_settings(&settings));
    let mut controller =
        SessionController::new(ConsoleTransport, orchestrator, settings.min_analysis_secs);

    controller.begin(&config).await?;
    controller.on_remote_connected().await?;

    println!(
        "Session started: {} on \"{}\" ({}s target). Type what you say, one line at a time; end with EOF.",
        config.mode,
        config.resolved_topic(),
        config.duration_secs(),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if !line.is_empty() {
            controller.on_transcript_fragment(&line);
        }
    }

    controller.end().await?;
    // The console transport closes immediately
    match controller.on_remote_closed().await? {
        Some(result) => {
            println!("\n{}", result.body);
        }
        None => {
            println!("\nSession was too short to analyze. Try speaking for a bit longer.");
        }
    }
    Ok(())
}

async fn run_plan(args: &Args, settings: &Settings) -> anyhow::Result<()> {
    let generator = OpenAiPlanGenerator::new(settings.openai_api_key.clone());
    let request = PracticePlanRequest {
        mode: args.mode,
        topic: args
            .topic
            .clone()
            .unwrap_or_else(|| args.mode.default_topic().to_string()),
        focus_areas: if args.focus_areas.is_empty() {
            coach::types::default_focus_areas()
        } else {
            args.focus_areas.clone()
        },
        skill_level: args.skill_level.clone(),
        daily_minutes: args.daily_minutes,
        speaker_name: args.speaker.clone(),
    };

    let plan = generator.generate_plan(&request).await?;

    println!("Weekly practice plan for {}:\n", args.mode);
    for day in &plan.days {
        println!("{} - {}", day.day, day.focus);
        println!("  Exercises:  {}", day.exercises);
        println!("  Activities: {}", day.activities);
    }
    println!("\nCurated resources:");
    for book in &plan.resources.books {
        println!("  Book:    {} ({}) - {}", book.title, book.source, book.url);
    }
    for video in &plan.resources.videos {
        println!("  Video:   {} ({}) - {}", video.title, video.source, video.url);
    }
    for course in &plan.resources.courses {
        println!("  Course:  {} ({}) - {}", course.title, course.source, course.url);
    }
    for article in &plan.resources.articles {
        println!("  Article: {} ({}) - {}", article.title, article.source, article.url);
    }
    Ok(())
}
