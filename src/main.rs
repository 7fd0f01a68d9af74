use clap::{Parser, Subcommand};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phrase_drill::config::{self, DrillConfig};
use phrase_drill::domain::{Catalog, LearnerProfile};
use phrase_drill::error::LogOnError;
use phrase_drill::progress::{JsonFileStore, Progress, ProgressStore};
use phrase_drill::session::{SessionPlan, SessionStats, StudyContext};
use phrase_drill::{DrillError, Result};

#[derive(Parser)]
#[command(name = "phrase_drill", about = "Daily phrase drills with spaced repetition")]
struct Cli {
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Run today's session in the terminal
  Study,
  /// Print today's plan as JSON without recording anything
  Plan,
  /// Pretend days have passed by moving every review back
  NextDay {
    #[arg(long, default_value_t = 1)]
    days: u64,
  },
}

fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "phrase_drill=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let cli = Cli::parse();
  match run(cli.command.unwrap_or(Command::Study)) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      if e.is_precondition() {
        tracing::warn!("{}", e);
      } else {
        tracing::error!("{}", e);
      }
      eprintln!("{}", e.user_message());
      exit_code(&e)
    }
  }
}

/// Bad input data exits with 2, runtime failures with 1
fn exit_code(e: &DrillError) -> ExitCode {
  if e.is_precondition() {
    ExitCode::from(2)
  } else {
    ExitCode::FAILURE
  }
}

fn run(command: Command) -> Result<()> {
  let config = config::load()?;
  let store = JsonFileStore::new(&config.progress_path);

  match command {
    Command::NextDay { days } => {
      let mut progress = store.load()?;
      let moved = progress.shift_days(days);
      store.save(&progress)?;
      println!("Moved {} reviews back by {} day(s)", moved, days);
      Ok(())
    }
    Command::Plan => {
      let ctx = load_context(&config)?;
      let progress = store.load()?;
      let plan = ctx.plan(&progress, config.session_size, &mut rand::rng())?;
      println!("{}", serde_json::to_string_pretty(&plan)?);
      Ok(())
    }
    Command::Study => {
      let ctx = load_context(&config)?;
      let stdin = io::stdin();
      study(
        &ctx,
        &store,
        config.session_size,
        &mut rand::rng(),
        stdin.lock(),
        &mut io::stdout(),
      )
    }
  }
}

fn load_context(config: &DrillConfig) -> Result<StudyContext> {
  let catalog = Catalog::from_json(&std::fs::read_to_string(&config.catalog_path)?)?;
  let profile = load_profile(&config.profile_path)?;
  Ok(StudyContext::new(catalog, profile))
}

fn load_profile(path: &Path) -> Result<LearnerProfile> {
  let profile: LearnerProfile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
  profile.validate()?;
  Ok(profile)
}

fn study(
  ctx: &StudyContext,
  store: &impl ProgressStore,
  session_size: usize,
  rng: &mut impl Rng,
  input: impl BufRead,
  out: &mut impl Write,
) -> Result<()> {
  let mut progress = store.load()?;
  let plan = ctx.plan(&progress, session_size, rng)?;
  let name = ctx
    .catalog()
    .get(&plan.language)
    .map(|l| l.name.clone())
    .log_warn_default("Chosen language missing from catalog");

  writeln!(out, "Hi {}! Today's language: {}", ctx.profile().name, name)?;

  let mut stats = SessionStats::new();
  let drilled = drill(ctx, &plan, &mut progress, &mut stats, input, out);

  // Answers recorded before a failure still count
  store.save(&progress)?;
  if let Err(e) = &drilled {
    tracing::warn!("Session interrupted after {} answer(s): {}", stats.answered, e);
  }
  drilled?;

  if let Some(accuracy) = stats.accuracy() {
    writeln!(
      out,
      "{} of {} correct ({:.0}%)",
      stats.correct,
      stats.answered,
      accuracy * 100.0
    )?;
  }
  Ok(())
}

fn drill(
  ctx: &StudyContext,
  plan: &SessionPlan,
  progress: &mut Progress,
  stats: &mut SessionStats,
  input: impl BufRead,
  out: &mut impl Write,
) -> Result<()> {
  let mut lines = input.lines();

  for (n, exercise) in plan.exercises.iter().enumerate() {
    write!(out, "[{}/{}] {} > ", n + 1, plan.exercises.len(), exercise.prompt)?;
    out.flush()?;

    let Some(answer) = lines.next().transpose()? else {
      writeln!(out)?;
      break;
    };

    let outcome = ctx.record_answer(exercise, &answer, progress)?;
    stats.record(&outcome);
    if outcome.correct {
      writeln!(out, "  correct (next in {} day(s))", outcome.state.interval)?;
    } else {
      writeln!(out, "  expected: {}", exercise.expected_answer)?;
    }
  }
  Ok(())
}
