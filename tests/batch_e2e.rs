// tests/batch_e2e.rs
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use hockey_recap::config::consts::{
    GOALIE_DATA_FILE, REPORT_FILE, REPORT_HTML_FILE, SKATER_DATA_FILE, TEAM_DATA_FILE,
};
use hockey_recap::config::options::{ExportOptions, ParseOptions};
use hockey_recap::error::Error;
use hockey_recap::file::parse_partition_name;
use hockey_recap::progress::Progress;
use hockey_recap::resolve::RejectingResolver;
use hockey_recap::roster::RosterIndex;
use hockey_recap::runner::{run_batch, Batch};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("hockey_recap_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn roster() -> RosterIndex {
    RosterIndex::from_tables(
        vec![("Smith".into(), "John Smith".into())],
        vec![("Jones".into(), "Pat Jones".into())],
    )
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(1, 30, 0).unwrap()
}

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, text).unwrap();
    p
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<PathBuf>,
    failed: Vec<PathBuf>,
    messages: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }
    fn item_done(&mut self, path: &Path) {
        self.done.push(path.to_path_buf());
    }
    fn item_failed(&mut self, path: &Path, _err: &Error) {
        self.failed.push(path.to_path_buf());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn failed_files_do_not_stop_the_batch() {
    let dir = tmp_dir("isolation");
    let files = vec![
        write(&dir, "good1.txt", "Feb 14\nwon 5-2 vs Rivals at 8pm\nSmith 2g\n"),
        write(&dir, "nodate.txt", "Smith 2g\n"),
        write(&dir, "noresult.txt", "Feb 15\nSmith 1g\n"),
        dir.join("missing.txt"),
        write(&dir, "good2.txt", "Feb 21\nlost 1-3 to Blades at 7pm\nJones 30 of 33\n"),
    ];

    let r = roster();
    let parse = ParseOptions::default();
    let export = ExportOptions::default();
    let batch = Batch { roster: &r, parse: &parse, export: &export, now: now() };

    let mut out: Vec<u8> = Vec::new();
    let mut rec = Recorder::default();
    let summary = run_batch(&batch, &files, &mut RejectingResolver, &mut out, Some(&mut rec as &mut dyn Progress));

    assert_eq!(summary.parsed, vec![files[0].clone(), files[4].clone()]);
    assert_eq!(summary.failed.len(), 3);
    assert!(summary.failed[0].1.contains("no date line found"));
    assert!(summary.failed[1].1.contains("no result line found"));
    assert!(summary.written.is_empty());

    assert_eq!(rec.total, 5);
    assert_eq!(rec.done.len(), 2);
    assert_eq!(rec.failed.len(), 3);
    assert!(rec.messages.is_empty());
    assert!(rec.finished);

    // Only the good files' reports reach stdout; no Feb 15 leaks from the failed one.
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("|Rivals|2/14/2026|"));
    assert!(text.contains("|Blades|2/21/2026|"));
    assert!(!text.contains("2/15/2026"));
}

#[test]
fn output_directory_gets_a_partition_per_file() {
    let dir = tmp_dir("partitions");
    let out_dir = dir.join("out");
    let files = vec![write(&dir, "game night.txt", "Feb 14\nwon 5-2 vs Rivals at 8pm\nSmith 2g 1a\nJones 20 of 22\n")];

    let r = roster();
    let parse = ParseOptions::default();
    let export = ExportOptions { out_dir: Some(out_dir.clone()), ..ExportOptions::default() };
    let batch = Batch { roster: &r, parse: &parse, export: &export, now: now() };

    let mut out: Vec<u8> = Vec::new();
    let mut rec = Recorder::default();
    let summary = run_batch(&batch, &files, &mut RejectingResolver, &mut out, Some(&mut rec as &mut dyn Progress));

    assert!(out.is_empty());
    assert_eq!(summary.written.len(), 1);
    let part = &summary.written[0];
    assert_eq!(rec.messages, vec![format!("Wrote {}", part.display())]);
    assert!(part.starts_with(out_dir.join("game_night")));
    let name = part.file_name().unwrap().to_string_lossy();
    assert_eq!(parse_partition_name(&name), Some(now()));

    let skaters = fs::read_to_string(part.join(SKATER_DATA_FILE)).unwrap();
    assert_eq!(skaters, "John Smith,Spring 2019,Regular,2/14/2026,1,2,1,3,0,0,0\n");
    let goalies = fs::read_to_string(part.join(GOALIE_DATA_FILE)).unwrap();
    assert_eq!(goalies, "Pat Jones,Spring 2019,Regular,2/14/2026,1,1,0,0,0,20,22,2,,\n");
    let team = fs::read_to_string(part.join(TEAM_DATA_FILE)).unwrap();
    assert_eq!(team, "6,Spring 2019,Regular,Rivals,2/14/2026,8:00 PM,1,0,0,0,5,2\n");

    let report = fs::read_to_string(part.join(REPORT_FILE)).unwrap();
    assert_eq!(report.matches("\n--\n").count(), 2);
    assert!(report.starts_with("player|session|type|date|gp|g|a|pts|pim|soa|sog\n"));

    let html = fs::read_to_string(part.join(REPORT_HTML_FILE)).unwrap();
    assert_eq!(html.matches("<table>").count(), 3);
    assert!(html.contains("<tr><th>player</th>"));
    assert!(html.contains("<td>Pat Jones</td>"));
    assert!(html.contains("<td>Rivals</td><td>2/14/2026</td><td>8:00 PM</td>"));
}

#[test]
fn roster_loads_from_json_files() {
    let dir = tmp_dir("roster");
    let skaters = write(&dir, "skaters.json", r#"{"Smith": "John Smith", "Smitty": "John Smith"}"#);
    let goalies = write(&dir, "goalies.json", r#"{"Jones": "Pat Jones"}"#);
    let r = RosterIndex::load(&hockey_recap::config::options::RosterPaths { skaters, goalies }).unwrap();
    assert_eq!(r.fragments().count(), 3);
}
