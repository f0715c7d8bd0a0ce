use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use chess_arbiter::errors::InputError;
use chess_arbiter::game_state::chess_rules::{CheckmatePolicy, RuleConfig, SelfCheckPolicy};
use chess_arbiter::game_state::chess_types::Color;
use chess_arbiter::game_state::game_state::GameState;
use chess_arbiter::utils::algebraic::{parse_move_text, parse_player};
use chess_arbiter::utils::logging::{init_logging, LogLevel};
use chess_arbiter::utils::render_game_state::render_game_state;
use chess_arbiter::utils::state_codec::{format_state, parse_state};

/// Play one move on an encoded chess board and print the resulting state.
#[derive(Parser, Debug)]
#[command(name = "chess_arbiter", version, about, long_about = None)]
struct Cli {
    /// State of the game as 64 comma-separated cells in brackets. Without it
    /// the opening layout is printed.
    #[arg(short = 's', value_name = "STATE")]
    state: Option<String>,

    /// Move to play in FROM-TO form, for example A2-A4. Required with -s.
    #[arg(short = 'm', value_name = "FROM-TO")]
    mv: Option<String>,

    /// Player on turn: WHITE, BLACK, W or B. Required with -s.
    #[arg(short = 'p', value_name = "PLAYER", value_parser = parse_player)]
    player: Option<Color>,

    /// Also print the board in human-readable form.
    #[arg(short = 'H')]
    human: bool,

    /// Log level: NOTSET, DEBUG, INFO, WARNING, ERROR or CRITICAL.
    #[arg(
        long = "log-level",
        visible_alias = "ll",
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Error
    )]
    log_level: LogLevel,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file", visible_alias = "lf", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Which moves are refused for leaving the own king attacked.
    #[arg(long, value_enum, default_value_t = SelfCheckPolicy::Uniform)]
    self_check: SelfCheckPolicy,

    /// How a checked side is judged checkmated.
    #[arg(long, value_enum, default_value_t = CheckmatePolicy::KingMobility)]
    checkmate: CheckmatePolicy,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level, cli.log_file.as_deref())?;
    if cli.human {
        info!("human-readable output enabled");
    }

    let rules = RuleConfig {
        self_check: cli.self_check,
        checkmate: cli.checkmate,
    };

    let game = match cli.state.as_deref().filter(|text| !text.trim().is_empty()) {
        None => GameState::new_game().with_rules(rules),
        Some(text) => {
            let board = parse_state(text)?;
            let move_text = cli.mv.as_deref().ok_or(InputError::MissingMove)?;
            let (from, to) = parse_move_text(move_text)?;
            let player = cli.player.ok_or(InputError::MissingPlayer)?;
            debug!("converted move {move_text} to {from}-{to}");

            let mut game = GameState::from_board(board, player).with_rules(rules);
            // A refused move is logged by the controller and the state is
            // printed unchanged.
            if let Ok(report) = game.apply_move(from, to) {
                info!("{} to move: {}", game.current_player, report.condition);
            }
            game
        }
    };

    println!("{}", output_text(&game, cli.human));
    Ok(())
}

/// The encoded state, preceded by the board and a hint line in `-H` mode.
fn output_text(game: &GameState, human: bool) -> String {
    let state = format_state(&game.board);
    if human {
        format!(
            "{}\n\nUse this state string for next move:\n{state}",
            render_game_state(game)
        )
    } else {
        state
    }
}
