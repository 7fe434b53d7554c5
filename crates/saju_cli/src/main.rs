use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use saju_base::{ALL_ELEMENTS, SajuChart};
use saju_config::{ConfigError, OutputFormat, SajuConfig};
use saju_fortune::{
    FamilyMember, FamilyRole, FortuneError, daily_fortune, day_stem_relation, detailed_compatibility,
    family_summary, lifetime_fortune, pairwise_compatibility, relation_interpretation, tojeong,
    yearly_fortune,
};
use saju_rs::{Saju, SajuRsError};
use saju_time::{ALL_JEOL_TERMS, BirthInput, CalendarError, CalendarKind, Gender};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (사주) calculator")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM, KST)
    #[arg(long, default_value = "12:00")]
    time: String,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,
    /// Date is on the lunar calendar
    #[arg(long)]
    lunar: bool,
    /// Lunar date is in a leap month
    #[arg(long, requires = "lunar")]
    leap: bool,
}

impl BirthArgs {
    fn input(&self) -> Result<BirthInput, CalendarError> {
        let calendar = if self.lunar {
            CalendarKind::Lunar {
                leap_month: self.leap,
            }
        } else {
            CalendarKind::Solar
        };
        BirthInput::parse(&self.date, &self.time, calendar)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars with Ten Gods
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Five-element balance of a chart
    Balance {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Lifetime reading and lucky profile
    Lifetime {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Compatibility of two people
    Compat {
        #[arg(long)]
        a_date: String,
        #[arg(long, default_value = "12:00")]
        a_time: String,
        #[arg(long, default_value = "male")]
        a_gender: Gender,
        #[arg(long)]
        b_date: String,
        #[arg(long, default_value = "12:00")]
        b_time: String,
        #[arg(long, default_value = "female")]
        b_gender: Gender,
    },
    /// Fortune for one day
    Daily {
        #[command(flatten)]
        birth: BirthArgs,
        /// Day to read (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Tojeong hexagram for a year
    Tojeong {
        #[command(flatten)]
        birth: BirthArgs,
        /// Year to read (default this year)
        #[arg(long)]
        target_year: Option<i32>,
        /// Lunar day of birth; looked up in the lunar table when omitted
        #[arg(long)]
        lunar_day: Option<u32>,
    },
    /// Family harmony (name:role:gender:date[:HH:MM][:lunar|:leap], repeatable)
    Family {
        #[arg(long = "member", required = true)]
        members: Vec<String>,
    },
    /// Monthly scores and readings for 2026 (丙午)
    Yearly {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Month-changing solar terms of a year
    Terms {
        #[arg(long)]
        year: i32,
    },
}

#[derive(Debug)]
enum CliError {
    App(SajuRsError),
    Json(serde_json::Error),
    Usage(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::App(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "JSON output failed: {e}"),
            Self::Usage(msg) => f.write_str(msg),
        }
    }
}

impl Error for CliError {}

impl From<SajuRsError> for CliError {
    fn from(e: SajuRsError) -> Self {
        Self::App(e)
    }
}

impl From<CalendarError> for CliError {
    fn from(e: CalendarError) -> Self {
        Self::App(e.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::App(e.into())
    }
}

impl From<FortuneError> for CliError {
    fn from(e: FortuneError) -> Self {
        Self::App(e.into())
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SajuConfig, CliError> {
    match path {
        Some(p) => Ok(SajuConfig::load(p)?),
        None => Ok(SajuConfig::default()),
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value).map_err(CliError::Json)?;
    println!("{text}");
    Ok(())
}

fn print_chart(chart: &SajuChart) {
    println!("{} ({})", chart.birth.format("%Y-%m-%d %H:%M"), chart.gender.korean());
    for (label, p) in ["년주", "월주", "일주", "시주"].iter().zip(chart.pillars()) {
        println!(
            "  {label}  {} ({})  {}/{}  {}",
            p.ganji.hanja(),
            p.ganji.hangul(),
            p.stem_element.hanja(),
            p.branch_element.hanja(),
            p.ten_god
        );
    }
    if !chart.is_exact() {
        println!("  (solar terms approximated for this year)");
    }
}

const MEMBER_FORMAT: &str = "name:role:gender:date[:HH:MM][:lunar|:leap]";

/// `name:role:gender:date[:HH:MM][:lunar|:leap]`; `leap` implies lunar.
fn parse_member(saju: &Saju, spec: &str) -> Result<FamilyMember, CliError> {
    let usage = || CliError::Usage(format!("member {spec:?}: expected {MEMBER_FORMAT}"));
    let parts: Vec<&str> = spec.split(':').collect();
    let [name, role, gender, date, rest @ ..] = parts.as_slice() else {
        return Err(usage());
    };
    let (calendar, rest) = match rest.split_last() {
        Some((&"lunar", head)) => (CalendarKind::Lunar { leap_month: false }, head),
        Some((&"leap", head)) => (CalendarKind::Lunar { leap_month: true }, head),
        _ => (CalendarKind::Solar, rest),
    };
    let time = match rest {
        [] => "12:00".to_owned(),
        [h, m] => format!("{h}:{m}"),
        _ => return Err(usage()),
    };
    let role: FamilyRole = role.parse()?;
    let gender: Gender = gender.parse()?;
    let input = BirthInput::parse(date, &time, calendar)?;
    Ok(FamilyMember::new(*name, role, saju.chart(&input, gender)?))
}

fn run(cli: Cli, config: SajuConfig) -> Result<(), CliError> {
    let saju = Saju::from_config(&config)?;
    let json = cli.json || config.output.format == OutputFormat::Json;
    debug!(json, "running command");

    match cli.command {
        Commands::Chart { birth } => {
            let chart = saju.chart(&birth.input()?, birth.gender)?;
            if json {
                return print_json(&chart);
            }
            print_chart(&chart);
        }

        Commands::Balance { birth } => {
            let chart = saju.chart(&birth.input()?, birth.gender)?;
            let balance = chart.element_balance();
            if json {
                return print_json(&json!({
                    "counts": balance,
                    "strongest": balance.strongest(),
                    "weakest": balance.weakest(),
                    "missing": balance.missing(),
                }));
            }
            for (e, n) in balance.iter() {
                println!("{}({}) {}", e.korean(), e.hanja(), "■".repeat(n as usize));
            }
            println!("strongest: {}", balance.strongest().hanja());
            println!("weakest:   {}", balance.weakest().hanja());
        }

        Commands::Lifetime { birth } => {
            let chart = saju.chart(&birth.input()?, birth.gender)?;
            let reading = lifetime_fortune(&chart);
            if json {
                return print_json(&reading);
            }
            println!("{}", reading.summary);
            println!("{}", reading.advice);
            let s = reading.scores;
            println!(
                "wealth {:.1}  health {:.1}  love {:.1}  career {:.1}",
                s.wealth, s.health, s.love, s.career
            );
            println!("lucky colors: {}", reading.lucky.colors.join(", "));
        }

        Commands::Compat {
            a_date,
            a_time,
            a_gender,
            b_date,
            b_time,
            b_gender,
        } => {
            let a = saju.chart(&BirthInput::parse(&a_date, &a_time, CalendarKind::Solar)?, a_gender)?;
            let b = saju.chart(&BirthInput::parse(&b_date, &b_time, CalendarKind::Solar)?, b_gender)?;
            let couple = detailed_compatibility(&a, &b);
            let relation = day_stem_relation(a.day_master(), b.day_master());
            let a_to_b = pairwise_compatibility(&a, &b);
            let b_to_a = pairwise_compatibility(&b, &a);
            if json {
                return print_json(&json!({
                    "a_to_b": a_to_b,
                    "b_to_a": b_to_a,
                    "couple": couple,
                    "day_stem": relation,
                }));
            }
            println!("A→B {a_to_b}  B→A {b_to_a}");
            println!(
                "total {} ({})  love {}  wealth {}  family {}",
                couple.total, couple.grade, couple.love, couple.wealth, couple.family
            );
            println!("{} [{}]", relation.label, relation.score);
            println!("{}", relation.description);
            if let Some(c) = relation.combination {
                println!("{} → {}", c.name, c.transforms_to.hanja());
            }
        }

        Commands::Daily { birth, as_of } => {
            let chart = saju.chart(&birth.input()?, birth.gender)?;
            let day = as_of.unwrap_or_else(|| Local::now().date_naive());
            let f = daily_fortune(&chart, day);
            if json {
                return print_json(&f);
            }
            println!("{} {} ({}점)", f.date, f.ten_god, f.score);
            println!("{}", f.summary);
            println!("{}", f.detail);
            println!(
                "color {}  food {}  item {}  direction {}",
                f.lucky_color, f.lucky_food, f.lucky_item, f.direction
            );
        }

        Commands::Tojeong {
            birth,
            target_year,
            lunar_day,
        } => {
            let chart = saju.chart(&birth.input()?, birth.gender)?;
            let year = target_year.unwrap_or_else(|| Local::now().year());
            let hexagram = match lunar_day {
                Some(day) => tojeong(&chart, day, year)?,
                None => saju.tojeong(&chart, year)?,
            };
            if json {
                return print_json(&hexagram);
            }
            println!(
                "{} (age {}): {} = {}/{}/{}",
                hexagram.target_year,
                hexagram.korean_age,
                hexagram.code,
                hexagram.upper,
                hexagram.middle,
                hexagram.lower
            );
        }

        Commands::Yearly { birth } => {
            let chart = saju.chart(&birth.input()?, birth.gender)?;
            let y = yearly_fortune(&chart);
            if json {
                return print_json(&y);
            }
            println!(
                "{} {} / day element {}",
                y.year,
                y.year_ganji.hanja(),
                y.day_element.hanja()
            );
            for m in &y.months {
                println!("{:>2}월 {:>3} {:<4} {}", m.month, m.score, format!("{:?}", m.tier), m.theme);
            }
            for (label, text) in [
                ("총운", y.analysis.as_str()),
                ("재물운", y.wealth),
                ("직업운", y.career),
                ("애정운", y.love),
                ("건강운", y.health),
            ] {
                println!("\n[{label}]\n{text}");
            }
        }

        Commands::Family { members } => {
            let members = members
                .iter()
                .map(|spec| parse_member(&saju, spec))
                .collect::<Result<Vec<_>, _>>()?;
            let summary = family_summary(&members)?;
            let mut pairs = Vec::new();
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    pairs.push((a, b, relation_interpretation(a, b)));
                }
            }
            if json {
                let pairs: Vec<_> = pairs
                    .iter()
                    .map(|(a, b, r)| json!({ "a": a.name, "b": b.name, "relation": r }))
                    .collect();
                return print_json(&json!({ "summary": summary, "pairs": pairs }));
            }
            println!("overall {}", summary.overall_score);
            println!("{}", summary.harmony);
            for e in ALL_ELEMENTS {
                let bucket = &summary.balance.distribution[e.index() as usize];
                println!("  {} {} {}", e.hanja(), bucket.count, bucket.members.join(", "));
            }
            for (a, b, r) in &pairs {
                println!("{} - {}: {} ({})", a.name, b.name, r.title, r.score);
            }
            summary.strengths.iter().for_each(|s| println!("+ {s}"));
            summary.improvements.iter().for_each(|s| println!("- {s}"));
            println!("{}", summary.balance.advice);
            println!("추천 활동: {}", summary.lucky_activity);
        }

        Commands::Terms { year } => {
            let terms = saju.terms().terms_for_year(year);
            if json {
                return print_json(&terms);
            }
            println!("{year} ({:?})", terms.source);
            for term in ALL_JEOL_TERMS {
                match terms.date_of(term) {
                    Some(d) => println!("  {} {} {d}", term.hanja(), term.korean()),
                    None => println!("  {} {} -", term.hanja(), term.korean()),
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config.logging.level);

    if let Err(e) = run(cli, config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::{LunarMonthRecord, TableLunarCalendar};

    #[test]
    fn member_spec_with_time() {
        let m = parse_member(&Saju::new(), "민준:나:male:1990-05-15:08:30").unwrap();
        assert_eq!(m.role, FamilyRole::Me);
        assert_eq!(m.chart.to_string(), "庚午 辛巳 庚辰 庚辰");
    }

    #[test]
    fn member_spec_defaults_to_noon() {
        let m = parse_member(&Saju::new(), "서연:spouse:f:2000-01-01").unwrap();
        assert_eq!(m.chart.birth.format("%H:%M").to_string(), "12:00");
    }

    #[test]
    fn member_spec_errors() {
        assert!(matches!(
            parse_member(&Saju::new(), "민준:나:male"),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_member(&Saju::new(), "민준:삼촌:male:1990-05-15"),
            Err(CliError::App(SajuRsError::Fortune(FortuneError::UnknownRole(_))))
        ));
    }

    fn lunar_2023() -> TableLunarCalendar {
        let date = |m, d| NaiveDate::from_ymd_opt(2023, m, d).unwrap();
        TableLunarCalendar::new(vec![
            LunarMonthRecord { year: 2023, month: 2, leap: false, start: date(2, 20), days: 30 },
            LunarMonthRecord { year: 2023, month: 2, leap: true, start: date(3, 22), days: 29 },
        ])
        .unwrap()
    }

    #[test]
    fn member_spec_lunar_and_leap() {
        let saju = Saju::new().with_lunar(lunar_2023());
        let m = parse_member(&saju, "지호:son:male:2023-02-01:lunar").unwrap();
        assert_eq!(m.chart.birth.date(), NaiveDate::from_ymd_opt(2023, 2, 20).unwrap());
        assert_eq!(m.chart.day.ganji.hanja(), "己酉");

        let m = parse_member(&saju, "지우:daughter:female:2023-02-01:09:15:leap").unwrap();
        assert_eq!(m.chart.birth.format("%Y-%m-%d %H:%M").to_string(), "2023-03-22 09:15");
        assert_eq!(m.chart.day.ganji.hanja(), "己卯");
    }

    #[test]
    fn lunar_member_needs_table() {
        assert!(matches!(
            parse_member(&Saju::new(), "지호:son:male:2023-02-01:lunar"),
            Err(CliError::App(SajuRsError::Calendar(CalendarError::NoLunarCalendar)))
        ));
        assert!(matches!(
            parse_member(&Saju::new(), "지호:son:male:2023-02-01:09:lunar"),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn cli_parses_yearly() {
        let cli = Cli::try_parse_from(["saju", "yearly", "--date", "1990-05-15"]).unwrap();
        assert!(matches!(cli.command, Commands::Yearly { .. }));
    }

    #[test]
    fn cli_parses_lunar_birth() {
        let cli = Cli::try_parse_from([
            "saju", "chart", "--date", "2023-02-01", "--lunar", "--leap", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let Commands::Chart { birth } = cli.command else {
            panic!("expected chart");
        };
        assert_eq!(
            birth.input().unwrap().calendar,
            CalendarKind::Lunar { leap_month: true }
        );
    }

    #[test]
    fn leap_requires_lunar() {
        assert!(Cli::try_parse_from(["saju", "chart", "--date", "2023-02-01", "--leap"]).is_err());
    }
}
