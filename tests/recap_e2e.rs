// tests/recap_e2e.rs
use std::io::Cursor;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use hockey_recap::config::options::{GameType, ParseOptions};
use hockey_recap::csv::report;
use hockey_recap::error::ParseError;
use hockey_recap::parse::{Parser, Resolution};
use hockey_recap::resolve::{RejectingResolver, ScriptedResolver, TerminalResolver};
use hockey_recap::roster::RosterIndex;

fn roster() -> RosterIndex {
    RosterIndex::from_tables(
        vec![
            ("Smith".into(), "John Smith".into()),
            ("Smitty".into(), "John Smith".into()),
            ("Lee".into(), "Sam Lee".into()),
        ],
        vec![("Jones".into(), "Pat Jones".into())],
    )
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(1, 30, 0).unwrap()
}

const RECAP: &str = "\
Feb 14
Great effort tonight everyone.
we won 5-2 vs Rivals at 8:00pm
Smith had 2g 1a
Jones 20 of 22
";

#[test]
fn simple_recap_produces_all_three_sections() {
    let r = roster();
    let opts = ParseOptions::default();
    let mut p = Parser::new(&r, &opts, now(), RejectingResolver);
    let game = p.parse_reader(Cursor::new(RECAP)).unwrap();

    let t = &game.team;
    assert_eq!(t.date, NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
    assert_eq!(t.opponent, "Rivals");
    assert_eq!(t.time, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
    assert_eq!((t.win, t.loss, t.sow, t.sol, t.gf, t.ga), (1, 0, 0, 0, 5, 2));
    assert_eq!((t.rank.as_str(), t.session.as_str()), ("6", "Spring 2019"));

    let smith = game.skaters.get("John Smith").unwrap();
    assert_eq!((smith.gp, smith.g, smith.a, smith.pts), (1, 2, 1, 3));

    let jones = game.goalies.get("Pat Jones").unwrap();
    assert_eq!((jones.shots, jones.sv, jones.ga, jones.w, jones.l), (22, 20, 2, 1, 0));
    assert_eq!(jones.sv + jones.ga, jones.shots);

    let text = report(&game).unwrap();
    assert!(text.contains("John Smith|Spring 2019|Regular|2/14/2026|1|2|1|3|0|0|0"));
    assert!(text.contains("6|Spring 2019|Regular|Rivals|2/14/2026|8:00 PM|1|0|0|0|5|2"));
}

#[test]
fn session_metadata_comes_from_options() {
    let r = roster();
    let opts = ParseOptions { session: "Fall 2026".into(), game_type: GameType::Playoff, rank: "2".into() };
    let mut p = Parser::new(&r, &opts, now(), RejectingResolver);
    let game = p.parse_reader(Cursor::new(RECAP)).unwrap();
    assert_eq!(game.team.game_type, GameType::Playoff);
    assert_eq!(game.team.rank, "2");
    assert_eq!(game.skaters.get("John Smith").unwrap().session, "Fall 2026");
}

#[test]
fn nickname_repeat_goes_through_terminal_prompt() {
    let r = roster();
    let opts = ParseOptions::default();
    let recap = "3 hrs ago\nlost 1-4 to Blades @ 9pm\nSmith 1g\nSmitty 2 pim and Lee 1 assist\n";
    // First answer is invalid, second combines.
    let terminal = TerminalResolver::new(Cursor::new(b"x\n3\n".to_vec()), Vec::new());
    let mut p = Parser::new(&r, &opts, now(), terminal);
    let game = p.parse_reader(Cursor::new(recap)).unwrap();

    assert_eq!(game.team.date, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
    assert_eq!((game.team.gf, game.team.ga, game.team.loss), (1, 4, 1));

    let smith = game.skaters.get("John Smith").unwrap();
    assert_eq!((smith.g, smith.pim, smith.pts), (1, 2, 1));
    let lee = game.skaters.get("Sam Lee").unwrap();
    assert_eq!((lee.a, lee.pts), (1, 1));

    let prompts = String::from_utf8(p.into_resolver().into_output()).unwrap();
    assert!(prompts.contains("Found more than one entry for skater John Smith."));
    assert!(prompts.contains("Type 1, 2, or 3"));
}

#[test]
fn keep_second_replaces_the_record() {
    let r = roster();
    let opts = ParseOptions::default();
    let script = ScriptedResolver::new().with_resolution(Resolution::KeepSecond);
    let mut p = Parser::new(&r, &opts, now(), script);
    let game = p
        .parse_lines(["Feb 14", "won 5-2 vs Rivals at 8pm", "Smith 1g", "Smith 3g"])
        .unwrap();
    assert_eq!(game.skaters.get("John Smith").unwrap().g, 3);
}

#[test]
fn missing_pieces_fail_the_file() {
    let r = roster();
    let opts = ParseOptions::default();
    let mut p = Parser::new(&r, &opts, now(), RejectingResolver);

    let err = p.parse_reader(Cursor::new("Smith 2g\n")).unwrap_err();
    assert!(matches!(err, ParseError::MissingDate));

    let err = p.parse_reader(Cursor::new("Feb 14\nSmith 2g\n")).unwrap_err();
    assert!(matches!(err, ParseError::MissingResult));
}
