//! Text report.

use std::io::{self, Write};

use chainpaint_core::{CELLS, COLUMNS, Color, Grid, Position, ROWS};
use chainpaint_search::{SearchOutcome, TrialResult};

const TRIGGER_MARK: char = 'X';
const RECOLOR_MARK: char = '*';

/// Renders `base` with the trigger cell shown as `X` and the recolored cells
/// as `*`.
pub(crate) fn annotated_rows(base: &Grid, result: &TrialResult) -> Vec<String> {
    (0..ROWS)
        .map(|y| {
            (0..COLUMNS)
                .map(|x| {
                    let pos = Position::new(x, y);
                    if pos == result.trigger() {
                        TRIGGER_MARK
                    } else if result.recolor().contains(pos) {
                        RECOLOR_MARK
                    } else {
                        base.get(pos).map_or('.', Color::to_char)
                    }
                })
                .collect()
        })
        .collect()
}

pub(crate) fn write_report<W>(
    out: &mut W,
    base: &Grid,
    outcome: &SearchOutcome,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Candidates:")?;
    if let Some(set) = outcome.recolor_candidates() {
        writeln!(out, "  recolor: {} / {CELLS}", set.len())?;
    }
    if let Some(set) = outcome.trigger_candidates() {
        writeln!(out, "  trigger: {} / {CELLS}", set.len())?;
    }
    let progress = outcome.progress();
    writeln!(
        out,
        "  patterns: {} / {}",
        progress.patterns_done(),
        progress.patterns_total()
    )?;
    writeln!(out, "  trials: {}", progress.trials_done())?;
    writeln!(out)?;

    if outcome.is_cancelled() {
        writeln!(out, "Search stopped early; results cover the patterns tried.")?;
        writeln!(out)?;
    }
    if let Some(failure) = outcome.failure() {
        writeln!(out, "No result: {failure}.")?;
        return Ok(());
    }

    for (i, result) in outcome.results().iter().enumerate() {
        writeln!(
            out,
            "#{}: score {}, chains {}, peak {}",
            i + 1,
            result.score(),
            result.chain_count(),
            result.peak_clear()
        )?;
        writeln!(out, "  trigger: {}", result.trigger())?;
        let recolor = result
            .recolor()
            .iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<_>>();
        writeln!(out, "  recolor ({}): {}", recolor.len(), recolor.join(" "))?;
        for row in annotated_rows(base, result) {
            writeln!(out, "    {row}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chainpaint_search::{
        AcceptancePolicy, DropConvention, RecolorWindow, SearchConfig, SearchRequest, Searcher,
        TriggerMode,
    };

    use super::*;

    const BASE: &str = "
        ........
        ........
        R.......
        R.......
        P.......
        RR.....Y";

    fn search(config: SearchConfig) -> (Grid, SearchOutcome) {
        let base: Grid = BASE.parse().unwrap();
        let request = SearchRequest::new(base, "GBGBGBGB".parse().unwrap());
        let config = config
            .with_max_recolor(1)
            .with_window(RecolorWindow::Range { min: 1, max: 1 })
            .with_trigger(TriggerMode::Fixed(Position::new(0, 4)))
            .with_drop(DropConvention::Bottommost);
        (base, Searcher::new(config).run(&request).unwrap())
    }

    fn report(base: &Grid, outcome: &SearchOutcome) -> String {
        let mut out = Vec::<u8>::new();
        write_report(&mut out, base, outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_annotated_rows() {
        let (base, outcome) = search(SearchConfig::new(Color::Red));
        let best = outcome.best().unwrap();
        let expected = [
            "........", "........", "R.......", "R.......", "X.......", "RR.....*",
        ];
        assert_eq!(annotated_rows(&base, best), expected);
    }

    #[test]
    fn test_report() {
        let (base, outcome) = search(SearchConfig::new(Color::Red));
        let expected = "\
Candidates:
  recolor: 1 / 48
  trigger: 0 / 48
  patterns: 1 / 1
  trials: 1

#1: score 4, chains 1, peak 4
  trigger: (0, 4)
  recolor (1): (7, 5)
    ........
    ........
    R.......
    R.......
    X.......
    RR.....*

";
        assert_eq!(report(&base, &outcome), expected);
    }

    #[test]
    fn test_report_without_result() {
        let config = SearchConfig::new(Color::Red).with_acceptance(AcceptancePolicy::MinChains(2));
        let (base, outcome) = search(config);
        let text = report(&base, &outcome);
        let expected = "No result: no trial met the acceptance policy.\n";
        assert!(text.ends_with(expected));
        assert!(!text.contains('#'));
    }
}
