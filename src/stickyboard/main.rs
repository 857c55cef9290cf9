use clap::Parser;
use directories::ProjectDirs;
use futures::future::join_all;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stickyboard::api::StickyBoard;
use stickyboard::config::BoardConfig;
use stickyboard::error::{BoardError, Result};
use stickyboard::gateway::SimulatedGateway;
use stickyboard::model::{Color, LayoutEntry, Note, NoteId};
use stickyboard::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_board, print_messages, print_palette, print_trash, CmdMessage};

const HOME_ENV: &str = "STICKYBOARD_HOME";
const LOG_ENV: &str = "STICKYBOARD_LOG";

type Board = StickyBoard<FileStore, SimulatedGateway>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let board = open_board()?;

    match cli.command {
        Some(Commands::New { text }) => handle_new(&board, text).await,
        Some(Commands::List) | None => handle_list(&board),
        Some(Commands::Trash) => handle_trash(&board),
        Some(Commands::Edit { id, text }) => handle_edit(&board, id, text).await,
        Some(Commands::Color { id, color }) => handle_color(&board, id, color).await,
        Some(Commands::Delete { ids }) => handle_delete(&board, ids).await,
        Some(Commands::Restore { ids }) => handle_restore(&board, ids).await,
        Some(Commands::Purge { ids }) => handle_purge(&board, ids).await,
        Some(Commands::Clear { yes }) => handle_clear(&board, yes).await,
        Some(Commands::EmptyTrash { yes }) => handle_empty_trash(&board, yes).await,
        Some(Commands::Move { id, x, y, w, h }) => handle_move(&board, id, x, y, w, h),
        Some(Commands::Palette) => {
            print_palette(board.palette());
            Ok(())
        }
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stickyboard", "stickyboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BoardError::Api("Could not determine data dir".into()))
}

fn open_board() -> Result<Board> {
    let dir = data_dir()?;
    let config = BoardConfig::load(&dir)?;
    let gateway = SimulatedGateway::new(config.latency);
    StickyBoard::open(FileStore::new(dir), gateway, &config)
}

async fn handle_new(board: &Board, text: Option<String>) -> Result<()> {
    let mut note = board.create().await?;
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        if let Some(edited) = board.edit_text(&note.id, text).await? {
            note = edited;
        }
    }
    print_messages(&[CmdMessage::success(format!(
        "Created {} ({})",
        note.id, note.color
    ))]);
    Ok(())
}

fn handle_list(board: &Board) -> Result<()> {
    print_board(&board.active_notes(), &board.active_layouts());

    let summary = board.summary();
    print_messages(&[CmdMessage::info(format!(
        "{} on the board, {} in the trash",
        summary.active, summary.trashed
    ))]);
    Ok(())
}

fn handle_trash(board: &Board) -> Result<()> {
    print_trash(&board.trashed_notes());
    Ok(())
}

async fn handle_edit(board: &Board, id: String, text: String) -> Result<()> {
    let id = NoteId::from(id);
    let outcome = board.edit_text(&id, text).await;
    report(
        &[id],
        vec![outcome],
        |id| format!("Updated {}", id),
        |id| format!("{} is not on the board", id),
    )
}

async fn handle_color(board: &Board, id: String, color: String) -> Result<()> {
    let color: Color = color.parse()?;
    let id = NoteId::from(id);
    let outcome = board.recolor(&id, color).await;
    report(
        &[id],
        vec![outcome],
        |id| format!("{} is now {}", id, color),
        |id| format!("{} is not on the board", id),
    )
}

async fn handle_delete(board: &Board, ids: Vec<String>) -> Result<()> {
    let ids = parse_ids(ids);
    let outcomes = join_all(ids.iter().map(|id| board.soft_delete(id))).await;
    report(
        &ids,
        outcomes,
        |id| format!("Moved {} to the trash", id),
        |id| format!("{} is not on the board", id),
    )
}

async fn handle_restore(board: &Board, ids: Vec<String>) -> Result<()> {
    let ids = parse_ids(ids);
    let outcomes = join_all(ids.iter().map(|id| board.restore(id))).await;
    report(
        &ids,
        outcomes,
        |id| format!("Restored {}", id),
        |id| format!("{} is not in the trash", id),
    )
}

async fn handle_purge(board: &Board, ids: Vec<String>) -> Result<()> {
    let ids = parse_ids(ids);
    let outcomes = join_all(ids.iter().map(|id| board.purge(id))).await;
    report(
        &ids,
        outcomes,
        |id| format!("Permanently removed {}", id),
        |id| format!("No note {}", id),
    )
}

async fn handle_clear(board: &Board, yes: bool) -> Result<()> {
    let count = board.summary().active;
    if count == 0 {
        print_messages(&[CmdMessage::info("The board is already empty.")]);
        return Ok(());
    }
    if !yes && !confirm(&format!("Move all {} notes to the trash?", count))? {
        print_messages(&[CmdMessage::info("Aborted.")]);
        return Ok(());
    }

    board.clear_all().await?;
    print_messages(&[CmdMessage::success(format!(
        "Moved {} notes to the trash",
        count
    ))]);
    Ok(())
}

async fn handle_empty_trash(board: &Board, yes: bool) -> Result<()> {
    let count = board.summary().trashed;
    if count == 0 {
        print_messages(&[CmdMessage::info("Trash is already empty.")]);
        return Ok(());
    }
    if !yes
        && !confirm(&format!(
            "Permanently remove {} notes? This cannot be undone.",
            count
        ))?
    {
        print_messages(&[CmdMessage::info("Aborted.")]);
        return Ok(());
    }

    let purged = board.clear_trash().await?;
    print_messages(&[CmdMessage::success(format!(
        "Permanently removed {} notes",
        purged.len()
    ))]);
    Ok(())
}

fn handle_move(
    board: &Board,
    id: String,
    x: Option<u32>,
    y: Option<u32>,
    w: Option<u32>,
    h: Option<u32>,
) -> Result<()> {
    let id = NoteId::from(id);
    let current = board
        .active_layouts()
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| BoardError::Api(format!("{} is not on the board", id)))?;

    let wanted = LayoutEntry {
        x: x.unwrap_or(current.x),
        y: y.unwrap_or(current.y),
        w: w.unwrap_or(current.w),
        h: h.unwrap_or(current.h),
        ..current
    };
    let layouts = board.apply_user_layout(vec![wanted])?;

    if let Some(placed) = layouts.iter().find(|e| e.id == id) {
        print_messages(&[CmdMessage::success(format!(
            "{} is at {},{} ({}x{})",
            id, placed.x, placed.y, placed.w, placed.h
        ))]);
    }
    Ok(())
}

fn parse_ids(ids: Vec<String>) -> Vec<NoteId> {
    ids.into_iter().map(NoteId::from).collect()
}

/// Print one line per id. Returns an error if any operation failed.
fn report(
    ids: &[NoteId],
    outcomes: Vec<Result<Option<Note>>>,
    done: impl Fn(&NoteId) -> String,
    skipped: impl Fn(&NoteId) -> String,
) -> Result<()> {
    let mut messages = Vec::new();
    let mut failed = 0;

    for (id, outcome) in ids.iter().zip(outcomes) {
        match outcome {
            Ok(Some(_)) => messages.push(CmdMessage::success(done(id))),
            Ok(None) => messages.push(CmdMessage::warning(skipped(id))),
            Err(e) => {
                failed += 1;
                messages.push(CmdMessage::error(e.to_string()));
            }
        }
    }
    print_messages(&messages);

    if failed > 0 {
        return Err(BoardError::Api(format!(
            "{} of {} operations failed",
            failed,
            ids.len()
        )));
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
