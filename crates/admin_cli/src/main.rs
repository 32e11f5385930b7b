use std::{error::Error, io::Write, path::PathBuf};

use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::Print,
    terminal,
    terminal::ClearType,
};
use engine::Engine;
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "lifeboard_admin")]
#[command(about = "Admin utilities for Lifeboard (export and wipe data)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./lifeboard.db?mode=rwc"
    )]
    database_url: String,

    /// Time zone used for local dates.
    #[arg(long, env = "LIFEBOARD__APP__TIMEZONE", default_value = "UTC")]
    timezone: Tz,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a JSON snapshot of every record.
    Export(ExportArgs),
    /// Delete activities, transactions, diary entries and user categories.
    Clear(ClearArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Output file. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ClearArgs {
    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self, Box<dyn Error + Send + Sync>> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Ask a yes/no question on stderr. Anything but `y` means no.
fn confirm(prompt: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
    let _raw = RawModeGuard::enter()?;

    let mut out = std::io::stderr();
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(prompt)
    )?;
    out.flush()?;

    loop {
        let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        else {
            continue;
        };

        let answer = match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                execute!(out, Print("\r\n"))?;
                out.flush()?;
                return Err("interrupted".into());
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc => false,
            _ => continue,
        };
        execute!(out, Print(if answer { "y\r\n" } else { "n\r\n" }))?;
        out.flush()?;
        return Ok(answer);
    }
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder()
        .database(db)
        .timezone(cli.timezone)
        .build()
        .await?;

    match cli.command {
        Command::Export(args) => {
            let bundle = engine.export().await?;
            let json = serde_json::to_string_pretty(&bundle)?;
            match args.out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    eprintln!(
                        "exported {} activities, {} transactions, {} diary entries to {}",
                        bundle.activities.len(),
                        bundle.transactions.len(),
                        bundle.diary_entries.len(),
                        path.display()
                    );
                }
                None => println!("{json}"),
            }
        }
        Command::Clear(args) => {
            if !args.yes && !confirm("Delete all activities, transactions and diary entries? [y/N] ")? {
                eprintln!("aborted");
                std::process::exit(1);
            }

            let cleared = engine.clear_all_data().await?;
            println!(
                "deleted {} activities, {} transactions, {} diary entries, {} categories",
                cleared.activities,
                cleared.transactions,
                cleared.diary_entries,
                cleared.categories
            );
        }
    }

    Ok(())
}
