//! Team name resolution.
//!
//! Team names are labels for the sides of a trade; the matching rules never
//! look at them. Callers inject a [`TeamDirectory`] where they need names.

/// Resolves a team code (e.g., "BOS") to a display name.
pub trait TeamDirectory: Send + Sync {
    /// Full name for `code`, if known. Lookups are case-insensitive.
    fn team_name(&self, code: &str) -> Option<&str>;

    /// Full name for `code`, or `[Unknown: CODE]`.
    fn display_name(&self, code: &str) -> String {
        self.team_name(code).map_or_else(
            || format!("[Unknown: {}]", code.trim().to_ascii_uppercase()),
            str::to_string,
        )
    }
}

/// The league's thirty franchises keyed by three-letter code.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeagueTeams;

const LEAGUE_TEAMS: [(&str, &str); 30] = [
    ("ATL", "Atlanta Hawks"),
    ("BOS", "Boston Celtics"),
    ("BKN", "Brooklyn Nets"),
    ("CHA", "Charlotte Hornets"),
    ("CHI", "Chicago Bulls"),
    ("CLE", "Cleveland Cavaliers"),
    ("DAL", "Dallas Mavericks"),
    ("DEN", "Denver Nuggets"),
    ("DET", "Detroit Pistons"),
    ("GSW", "Golden State Warriors"),
    ("HOU", "Houston Rockets"),
    ("IND", "Indiana Pacers"),
    ("LAC", "L.A. Clippers"),
    ("LAL", "L.A. Lakers"),
    ("MEM", "Memphis Grizzlies"),
    ("MIA", "Miami Heat"),
    ("MIL", "Milwaukee Bucks"),
    ("MIN", "Minnesota Timberwolves"),
    ("NOP", "New Orleans Pelicans"),
    ("NYK", "New York Knicks"),
    ("OKC", "Oklahoma City Thunder"),
    ("ORL", "Orlando Magic"),
    ("PHI", "Philadelphia 76ers"),
    ("PHX", "Phoenix Suns"),
    ("POR", "Portland Trail Blazers"),
    ("SAC", "Sacramento Kings"),
    ("SAS", "San Antonio Spurs"),
    ("TOR", "Toronto Raptors"),
    ("UTA", "Utah Jazz"),
    ("WAS", "Washington Wizards"),
];

impl TeamDirectory for LeagueTeams {
    fn team_name(&self, code: &str) -> Option<&str> {
        let code = code.trim();
        LEAGUE_TEAMS
            .iter()
            .find(|(abbr, _)| abbr.eq_ignore_ascii_case(code))
            .map(|(_, name)| *name)
    }
}
