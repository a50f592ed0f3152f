use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::error;
use sankhya_rs::{
    BirthDate, BirthInput, GridCellReport, LastInputCache, NaiveDate, NumerologyReport,
    OutputFormat, SankhyaConfig, SankhyaError, Session, core_numbers, dasha, digital_root,
    format_short, lucky_number, parse_birth_date, timeline,
};

#[derive(Parser)]
#[command(name = "sankhya", about = "Sankhya Vedic numerology CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full report: numbers, grid, dashas and panels
    Report {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Display name
        #[arg(long, default_value = "")]
        name: String,
        /// Evaluate dashas at this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
        /// Read non-numeric date parts as 0
        #[arg(long)]
        lenient: bool,
        /// Do not write the last-input cache
        #[arg(long)]
        no_cache: bool,
    },
    /// Basic, Destiny and lucky numbers
    Numbers {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long)]
        lenient: bool,
    },
    /// Digital root (1-9) of an integer
    DigitalRoot {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// 3x3 Vedic grid; [n] marks the Mahadasha, <n> the Antardasha
    Grid {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Evaluate dashas at this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
        #[arg(long)]
        lenient: bool,
    },
    /// Current Mahadasha and Antardasha
    Dasha {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Evaluate at this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
        #[arg(long)]
        lenient: bool,
    },
    /// Consecutive Mahadashas from birth
    Timeline {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Number of periods
        #[arg(long, default_value = "9")]
        count: usize,
        #[arg(long)]
        lenient: bool,
    },
    /// Show the cached last input
    Last,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn fail(e: &SankhyaError) -> ! {
    error!("{e}");
    eprintln!("{}", e.user_message());
    std::process::exit(1);
}

fn parse_today(today: Option<&str>) -> NaiveDate {
    match today {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").unwrap_or_else(|e| {
            eprintln!("Invalid --today date: {s} ({e})");
            std::process::exit(1);
        }),
        None => chrono::Local::now().date_naive(),
    }
}

fn load_birth(date: &str, strict: bool) -> BirthDate {
    parse_birth_date(date, strict).unwrap_or_else(|e| fail(&e))
}

fn chip_label(kind: &str, digit: u8) -> String {
    match kind {
        "mahadasha" => format!("[{digit}]"),
        "antardasha" => format!("<{digit}>"),
        _ => digit.to_string(),
    }
}

fn render_grid(cells: &[GridCellReport]) -> String {
    const WIDTH: usize = 13;
    let rule = format!("+{}", format!("{}+", "-".repeat(WIDTH)).repeat(3));
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for row in cells.chunks(3) {
        out.push('|');
        for cell in row {
            let text = cell
                .chips
                .iter()
                .map(|c| chip_label(c.kind, c.digit))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!(" {text:<w$}|", w = WIDTH - 1));
        }
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn print_report(r: &NumerologyReport) {
    if !r.name.is_empty() {
        println!("Name:           {}", r.name);
    }
    println!("Birth date:     {}", r.birth_date);
    println!("Basic number:   {}  {}", r.basic_number, r.panels.basic_description);
    println!("Destiny number: {}  {}", r.destiny_number, r.panels.destiny_description);
    println!();
    print!("{}", render_grid(&r.grid));
    println!();

    let m = &r.mahadasha;
    println!(
        "Mahadasha:  {} ({}) - {} years, {} to {} ({}%)",
        m.planet, m.english_name, m.period_years, m.start, m.end, m.progress_percent
    );
    println!("            {}", m.description);
    println!(
        "            next: {}, {} years remaining",
        m.next_planet, m.years_remaining
    );
    let a = &r.antardasha;
    println!(
        "Antardasha: {} ({}) - year {}, {}",
        a.planet, a.english_name, a.target_year, a.weekday
    );
    println!("            {}", a.description);
    println!();

    let p = &r.panels;
    println!("Lucky number:    {}  {}", p.lucky_number, p.lucky_number_text);
    println!(
        "Lucky color:     {} ({})  {}",
        p.lucky_color.name, p.lucky_color.hex, p.lucky_color_text
    );
    println!("Ruling planet:   {}  {}", p.ruling_planet, p.ruling_planet_text);
    println!("Lucky direction: {}  {}", p.lucky_direction, p.lucky_direction_text);
    println!("Life path:       {}", p.life_path);
    println!("Recommendation:  {}", p.recommendation);
    println!("Features:");
    for f in &p.features {
        println!("  - {f}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SankhyaConfig::load_or_default(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    });
    let strict_unless = |lenient: bool| config.input.strict && !lenient;

    match cli.command {
        Commands::Report {
            date,
            name,
            today,
            json,
            lenient,
            no_cache,
        } => {
            let today = parse_today(today.as_deref());
            let mut session_config = config.clone();
            session_config.input.strict = strict_unless(lenient);
            session_config.cache.enabled &= !no_cache;
            let mut session = Session::from_config(&session_config);
            let input = BirthInput {
                name,
                birth_date: date,
            };
            let report = session.submit(&input, today).unwrap_or_else(|e| fail(&e));
            if json || config.output.format == OutputFormat::Json {
                print_json(report);
            } else {
                print_report(report);
            }
        }

        Commands::Numbers { date, lenient } => {
            let birth = load_birth(&date, strict_unless(lenient));
            let core = core_numbers(&birth);
            println!("Basic number:   {}", core.basic);
            println!("Destiny number: {}", core.destiny);
            println!("Lucky number:   {}", lucky_number(core.destiny));
        }

        Commands::DigitalRoot { n } => {
            println!("{}", digital_root(n));
        }

        Commands::Grid {
            date,
            today,
            lenient,
        } => {
            let today = parse_today(today.as_deref());
            let input = BirthInput {
                name: String::new(),
                birth_date: Some(date),
            };
            let report = sankhya_rs::calculate(&input, today, strict_unless(lenient))
                .unwrap_or_else(|e| fail(&e));
            print!("{}", render_grid(&report.grid));
        }

        Commands::Dasha {
            date,
            today,
            lenient,
        } => {
            let today = parse_today(today.as_deref());
            let birth = load_birth(&date, strict_unless(lenient));
            let snap = dasha(&birth, today).unwrap_or_else(|e| fail(&e));
            let m = &snap.mahadasha;
            println!(
                "Mahadasha:  {} ({}) {} - {} ({}%)",
                m.graha.name(),
                m.graha.english_name(),
                format_short(m.start),
                format_short(m.end),
                snap.progress_percent()
            );
            println!(
                "Antardasha: {} ({}) for {}",
                snap.antardasha.graha.name(),
                snap.antardasha.graha.english_name(),
                snap.antardasha.target_year
            );
            println!(
                "Next:       {} in {} years",
                snap.next_mahadasha().name(),
                snap.years_remaining()
            );
        }

        Commands::Timeline {
            date,
            count,
            lenient,
        } => {
            let birth = load_birth(&date, strict_unless(lenient));
            let periods = timeline(&birth, count).unwrap_or_else(|e| fail(&e));
            for p in &periods {
                println!(
                    "{:<8} {:>2}y  {} - {}",
                    p.graha.name(),
                    p.period_years(),
                    format_short(p.start),
                    format_short(p.end)
                );
            }
        }

        Commands::Last => match LastInputCache::from_config(&config.cache) {
            Some(cache) => match cache.load() {
                Some(record) => print_json(&record),
                None => println!("No cached input at {}", cache.path().display()),
            },
            None => println!("Cache disabled"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sankhya_rs::ChipReport;

    fn cell(index: u8, home: u8, chips: &[(&'static str, u8)]) -> GridCellReport {
        GridCellReport {
            index,
            home,
            chips: chips
                .iter()
                .map(|&(kind, digit)| ChipReport { kind, digit })
                .collect(),
        }
    }

    #[test]
    fn chip_labels() {
        assert_eq!(chip_label("plain", 5), "5");
        assert_eq!(chip_label("mahadasha", 3), "[3]");
        assert_eq!(chip_label("antardasha", 9), "<9>");
    }

    #[test]
    fn grid_text_layout() {
        let cells: Vec<GridCellReport> = [3, 1, 9, 6, 7, 5, 2, 8, 4]
            .iter()
            .enumerate()
            .map(|(i, &d)| cell(i as u8 + 1, d, &[]))
            .collect();
        let mut cells = cells;
        cells[0] = cell(1, 3, &[("mahadasha", 3)]);
        cells[2] = cell(3, 9, &[("plain", 9), ("antardasha", 9)]);

        let text = render_grid(&cells);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("[3]"));
        assert!(lines[1].contains("9 <9>"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        let cli = Cli::parse_from(["sankhya", "digital-root", "-27"]);
        assert!(matches!(cli.command, Commands::DigitalRoot { n: -27 }));
    }
}
