use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rust_climb::core::GameConfig;
use rust_climb::rules::{GameEngine, GameStatus};
use rust_climb::sim::{self, ScoreSummary, SimulationConfig};
use rust_climb::strategy::StrategyKind;

#[derive(Parser, Debug)]
#[command(
    name = "climb-sim",
    version,
    about = "Simulate the cooperative climbing card game and score play strategies"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

/// Rule overrides shared by the game-playing commands.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct GameArgs {
    /// Number of players
    #[arg(short = 'p', long, default_value_t = 4)]
    players: usize,
    /// Most placements searched per turn
    #[arg(short = 'd', long, default_value_t = 6)]
    depth: usize,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig::new()
            .with_player_count(self.players)
            .with_max_search_depth(self.depth)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a batch of games and report the score distribution
    Simulate {
        /// Strategy every player uses (random, min-height, first)
        #[arg(short = 's', long, default_value = "random")]
        strategy: StrategyKind,
        /// Number of games
        #[arg(short = 'n', long, default_value_t = 50)]
        games: usize,
        /// Batch seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Play games one after another instead of in parallel
        #[arg(long)]
        sequential: bool,
        /// Write the comma-separated score list here
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        /// No progress bar
        #[arg(short = 'q', long)]
        quiet: bool,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Play one game and show every turn
    Replay {
        #[arg(short = 's', long, default_value = "random")]
        strategy: StrategyKind,
        /// Game seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Print the turn history as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Summarise a score list written by `simulate --out`
    Summarize {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.cmd {
        Command::Simulate {
            strategy,
            games,
            seed,
            sequential,
            out,
            json,
            quiet,
            game,
        } => {
            let config = SimulationConfig::new()
                .with_iterations(games)
                .with_seed(seed)
                .with_parallel(!sequential)
                .with_game(game.config());
            run_simulate(strategy, &config, out, json, quiet)
        }
        Command::Replay {
            strategy,
            seed,
            json,
            game,
        } => run_replay(strategy, game.config(), seed, json),
        Command::Summarize { input } => run_summarize(input),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

type CliResult = Result<ExitCode, Box<dyn std::error::Error>>;

const PROGRESS_TEMPLATE: &str = concat!(
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] ",
    "{pos}/{len} games ({eta})",
);

fn run_simulate(
    kind: StrategyKind,
    config: &SimulationConfig,
    out: Option<PathBuf>,
    json: bool,
    quiet: bool,
) -> CliResult {
    config.game.validate()?;
    let strategy = kind.build();

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(config.iterations as u64);
        pb.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE)?.progress_chars("=>-"));
        pb
    };
    let batch = sim::simulate_many_with(&strategy, config, |_| pb.inc(1));
    pb.finish_and_clear();

    for failed in &batch.failures {
        eprintln!("game with seed {} aborted: {}", failed.seed, failed.error);
    }

    let summary = batch.summary();
    if json {
        let report = serde_json::json!({
            "strategy": kind.name(),
            "seed": config.seed,
            "game": config.game,
            "failures": batch.failure_count(),
            "summary": summary,
            "scores": batch.scores,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Testing {}", kind);
        println!("{}", summary);
        if batch.failure_count() > 0 {
            println!("failed games: {}", batch.failure_count());
        }
        print!("{}", summary.render_histogram(40));
    }

    if let Some(path) = out {
        sim::write_scores(&path, &batch.scores)?;
        if !quiet {
            eprintln!("wrote {} scores to {}", batch.scores.len(), path.display());
        }
    }

    Ok(if batch.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_replay(kind: StrategyKind, config: GameConfig, seed: u64, json: bool) -> CliResult {
    let strategy = kind.build();
    let mut engine = GameEngine::new(config, seed)?;

    while engine.status() == GameStatus::InProgress {
        let stacks = engine.state().stacks().to_string();
        let min_cards = engine.state().min_cards();
        engine.play_turn(&strategy)?;

        if !json {
            if let Some(turn) = engine.history().last() {
                println!(
                    "turn {:>2}  {}  hand {}  stacks {}  (min {})",
                    turn.turn, turn.player, turn.hand, stacks, min_cards
                );
                println!(
                    "         plays {}  draws {}  score {}",
                    turn.action, turn.drawn, turn.score
                );
            }
        }
    }

    let outcome = engine.run(&strategy)?;
    if json {
        let report = serde_json::json!({
            "strategy": kind.name(),
            "outcome": outcome,
            "turns": engine.history(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:?} after {} turns, score {}", outcome.status, outcome.turns, outcome.score);
        for (player, played) in outcome.cards_played.iter() {
            println!("  {} placed {} cards", player, played);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_summarize(input: PathBuf) -> CliResult {
    let scores = sim::read_scores(&input)?;
    let summary = ScoreSummary::from_scores(&scores);
    println!("{}", summary);
    print!("{}", summary.render_histogram(40));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_game_flags_default_to_standard_rules() {
        let cli = Cli::try_parse_from(["climb-sim", "replay", "--seed", "3"]).unwrap();
        match cli.cmd {
            Command::Replay { game, seed, .. } => {
                assert_eq!(seed, 3);
                assert_eq!(game.config(), GameConfig::default());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_game_flags_reach_config() {
        let cli = Cli::try_parse_from([
            "climb-sim", "simulate", "--players", "3", "--depth", "2", "--games", "5",
        ])
        .unwrap();
        match cli.cmd {
            Command::Simulate { game, games, .. } => {
                assert_eq!(games, 5);
                let config = game.config();
                assert_eq!(config.player_count, 3);
                assert_eq!(config.max_search_depth, 2);
                assert_eq!(config.hand_size, GameConfig::default().hand_size);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_game_flags_are_rejected() {
        let config = SimulationConfig::new()
            .with_iterations(1)
            .with_game(GameArgs { players: 0, depth: 6 }.config());
        assert!(run_simulate(StrategyKind::First, &config, None, false, true).is_err());
    }
}
