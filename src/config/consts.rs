// src/config/consts.rs

// Parse defaults (session metadata is never read from the recap itself)
pub const DEFAULT_SESSION: &str = "Spring 2019";
pub const DEFAULT_GAME_TYPE: &str = "Regular";
pub const DEFAULT_RANK: &str = "6";

// Roster tables
pub const DEFAULT_ROSTER_DIR: &str = "team-data";
pub const SKATERS_FILE: &str = "skaters.json";
pub const GOALIES_FILE: &str = "goalies.json";

// Export
pub const SKATER_DATA_FILE: &str = "skaterData.csv";
pub const GOALIE_DATA_FILE: &str = "goalieData.csv";
pub const TEAM_DATA_FILE: &str = "teamData.csv";
pub const REPORT_FILE: &str = "recap.txt";
pub const REPORT_HTML_FILE: &str = "recap.html";
pub const REPORT_SECTION_SEP: &str = "\n--\n";

// Rendering
pub const DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const TIME_FORMAT: &str = "%-I:%M %p";
