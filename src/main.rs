use color_eyre::eyre::{Result, WrapErr};
use database::SeasonGenerator;
use env_logger::Env;
use log::info;
use season_core::utils::TimeEstimation;
use season_core::{FixtureAlgorithm, LeaderboardRow, RandomMatchEngine, Season, SeasonSettings};
use std::env;
use std::str::FromStr;

const DEFAULT_TEAMS: usize = 20;
const DEFAULT_PLAYERS_PER_TEAM: usize = 16;
const DEFAULT_SEED: u64 = 42;

struct Config {
    teams: usize,
    players_per_team: usize,
    seed: u64,
    fixtures: FixtureAlgorithm,
    json_output: bool,
}

impl Config {
    fn from_env() -> Result<Self> {
        Ok(Config {
            teams: env_or("TEAMS", DEFAULT_TEAMS)?,
            players_per_team: env_or("PLAYERS_PER_TEAM", DEFAULT_PLAYERS_PER_TEAM)?,
            seed: env_or("SEED", DEFAULT_SEED)?,
            fixtures: env_or("FIXTURES", FixtureAlgorithm::default())?,
            json_output: env::var("OUTPUT").is_ok_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .wrap_err_with(|| format!("invalid value `{}` for {}", value, key)),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    let (teams, estimated) = TimeEstimation::estimate(|| {
        SeasonGenerator::generate(config.teams, config.players_per_team, config.seed)
    });
    let teams = teams?;

    info!("teams generated: {} ms", estimated);

    let settings = SeasonSettings::default().with_fixtures(config.fixtures);
    let mut season = Season::with_settings(teams, settings)?;

    let engine = RandomMatchEngine::new(config.seed);
    let (simulated, estimated) = TimeEstimation::estimate(|| season.simulate_season(&engine));
    simulated?;

    info!("season simulated: {} ms", estimated);

    let rankings = season.rankings();

    if config.json_output {
        println!("{}", serde_json::to_string_pretty(&rankings)?);
    } else {
        for (position, row) in rankings.iter().enumerate() {
            info!("{}", format_row(position + 1, row));
        }
    }

    Ok(())
}

fn format_row(position: usize, row: &LeaderboardRow) -> String {
    let form: String = row.last_five_results.iter().map(|r| r.letter()).collect();

    format!(
        "{:>2}. {:<24} P{:>3} W{:>3} D{:>3} L{:>3} GF{:>4} GA{:>4} GD{:>+5} Pts{:>4}  {}",
        position,
        row.team_name,
        row.games_played,
        row.wins,
        row.draws,
        row.losses,
        row.goals_for,
        row.goals_against,
        row.goal_difference,
        row.points,
        form
    )
}
