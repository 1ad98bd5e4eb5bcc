//! Command-line arguments and their mapping onto [`SearchConfig`].

use std::{path::PathBuf, time::Duration};

use chainpaint_core::{Color, Position};
use chainpaint_search::{
    AcceptancePolicy, DropConvention, MAX_RECOLOR, Pieces, RecolorWindow, ResultGrouping,
    SearchConfig, StabilityCheck, TriggerHeuristic, TriggerMode,
};
use clap::{Parser, ValueEnum};

/// Trigger candidate filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    /// Cells next to a group of three.
    Neighborhood,
    /// Cells whose removal makes the board collapse into a match.
    Collapse,
    /// Every occupied cell.
    Exhaustive,
}

impl From<HeuristicArg> for TriggerHeuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Neighborhood => Self::Neighborhood,
            HeuristicArg::Collapse => Self::Collapse,
            HeuristicArg::Exhaustive => Self::Exhaustive,
        }
    }
}

/// Where upcoming pieces land in their column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DropArg {
    /// The first empty cell from the top.
    Topmost,
    /// The lowest empty cell.
    Bottommost,
}

impl From<DropArg> for DropConvention {
    fn from(arg: DropArg) -> Self {
        match arg {
            DropArg::Topmost => Self::Topmost,
            DropArg::Bottommost => Self::Bottommost,
        }
    }
}

/// How a painted board is checked for immediate matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StabilityArg {
    /// Only around the painted cells.
    Local,
    /// The whole board.
    Full,
}

impl From<StabilityArg> for StabilityCheck {
    fn from(arg: StabilityArg) -> Self {
        match arg {
            StabilityArg::Local => Self::Local,
            StabilityArg::Full => Self::Full,
        }
    }
}

/// Search a board for the paint and trigger that set off the biggest chain.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Board file: six rows of eight cells (R B G Y P, J for joker, `.` for
    /// empty). Use `-` to read standard input.
    #[arg(value_name = "BOARD")]
    pub board: PathBuf,

    /// Upcoming pieces, one color letter per column from left to right.
    #[arg(short, long, value_name = "PIECES")]
    pub next: Pieces,

    /// Color painted onto recolored cells.
    #[arg(short, long, value_name = "COLOR", default_value = "R")]
    pub paint: Color,

    /// Largest number of cells painted at once (0 to 12).
    #[arg(short = 'k', long, value_name = "COUNT", default_value_t = MAX_RECOLOR)]
    pub max_recolor: usize,

    /// How many pattern sizes below the maximum are tried as well.
    #[arg(short, long, value_name = "WIDTH", default_value_t = 4)]
    pub window: usize,

    /// Always clear this cell (`x,y`, counted from the top left) instead of
    /// searching for triggers.
    #[arg(short, long, value_name = "X,Y", value_parser = parse_position)]
    pub trigger: Option<Position>,

    /// Filter for trigger candidates.
    #[arg(long, value_name = "KIND", default_value = "neighborhood")]
    pub trigger_heuristic: HeuristicArg,

    /// Where upcoming pieces land.
    #[arg(long, value_name = "MODE", default_value = "topmost")]
    pub drop: DropArg,

    /// How painted boards are checked for immediate matches.
    #[arg(long, value_name = "KIND", default_value = "local")]
    pub stability: StabilityArg,

    /// Minimum number of chain links for a trial to count.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    pub min_chains: usize,

    /// Also require at least this score.
    #[arg(long, value_name = "SCORE", conflicts_with = "min_peak")]
    pub min_score: Option<usize>,

    /// Accept trials that clear this many cells in one step even with fewer
    /// chain links.
    #[arg(long, value_name = "CELLS")]
    pub min_peak: Option<usize>,

    /// Keep only the best trigger of each paint pattern.
    #[arg(long)]
    pub best_per_pattern: bool,

    /// Stop searching after this many seconds and report what was found.
    #[arg(long, value_name = "SECONDS")]
    pub time_limit: Option<u64>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Returns the search configuration described by the arguments.
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        let trigger = self.trigger.map_or(TriggerMode::Search, TriggerMode::Fixed);
        let acceptance = match (self.min_score, self.min_peak) {
            (Some(score), _) => AcceptancePolicy::MinChainsAndScore {
                chains: self.min_chains,
                score,
            },
            (None, Some(peak)) => AcceptancePolicy::ChainsOrPeak {
                chains: self.min_chains,
                peak,
            },
            (None, None) => AcceptancePolicy::MinChains(self.min_chains),
        };
        let grouping = if self.best_per_pattern {
            ResultGrouping::BestPerPattern
        } else {
            ResultGrouping::PerTrial
        };
        SearchConfig::new(self.paint)
            .with_max_recolor(self.max_recolor)
            .with_window(RecolorWindow::Width(self.window))
            .with_trigger(trigger)
            .with_heuristic(self.trigger_heuristic.into())
            .with_drop(self.drop.into())
            .with_stability(self.stability.into())
            .with_acceptance(acceptance)
            .with_grouping(grouping)
    }

    /// Returns the time limit, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit.map(Duration::from_secs)
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, found {s:?}"))?;
    let x: u8 = x.trim().parse().map_err(|_| format!("invalid x {x:?}"))?;
    let y: u8 = y.trim().parse().map_err(|_| format!("invalid y {y:?}"))?;
    Position::try_new(x, y).ok_or_else(|| format!("({x}, {y}) is outside the 8x6 board"))
}
