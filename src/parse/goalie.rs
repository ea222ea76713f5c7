// src/parse/goalie.rs
use crate::records::GoalieLine;

use super::rules::{
    GOALIE_ASSISTS, GOALS_AGAINST, SAVE_RATIO, SHOOTOUT_GOALS_AGAINST, SHOOTOUT_SHOTS_AGAINST,
    SHOTS_AGAINST,
};

/// Stats for one goalie mention, or `None` if the text gives neither a
/// shot count nor a "saves of shots" ratio.
///
/// Stated numbers beat derived ones: "N shots" beats the ratio's total and
/// "N goals" beats the ratio's `total - saves`. `team_ga` stands in for
/// goals-against only when nothing in the text gives it. Saves are always
/// `shots - ga`.
pub fn extract_goalie(text: &str, team_ga: u32) -> Option<GoalieLine> {
    let ratio = SAVE_RATIO.capture_pair(text).map(|(saved, total)| (saved.min(total), total));
    let shots_stated = SHOTS_AGAINST.capture(text);
    let goals_stated = GOALS_AGAINST.capture(text);

    let shots = match (shots_stated, ratio) {
        (Some(s), Some((saved, total))) => {
            if s != total {
                logw!("Goalie line says {s} shots but {saved} of {total}; keeping {s}");
            }
            s
        }
        (Some(s), None) => s,
        (None, Some((_, total))) => total,
        (None, None) => return None,
    };

    let derived_ga = ratio.map(|(saved, total)| total - saved);
    let mut ga = match (goals_stated, derived_ga) {
        (Some(g), Some(d)) => {
            if g != d {
                logw!("Goalie line says {g} goals but the ratio implies {d}; keeping {g}");
            }
            g
        }
        (Some(g), None) => g,
        (None, Some(d)) => d,
        (None, None) => team_ga,
    };
    if ga > shots {
        logw!("{ga} goals against on {shots} shots; capping goals at shots");
        ga = shots;
    }
    let sv = shots - ga;

    Some(GoalieLine {
        shots,
        sv,
        ga,
        a: GOALIE_ASSISTS.capture(text).unwrap_or(0),
        so_sa: SHOOTOUT_SHOTS_AGAINST.capture(text),
        so_ga: SHOOTOUT_GOALS_AGAINST.capture(text),
    })
}
