use anyhow::{anyhow, Result};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use monthgrid::{
    cell::{BelongTo, MonthCellData, YearCellData},
    config::Config,
    export::{export, ExportFormat},
    locale::Locale,
    logging,
    parsers::{parse_date, parse_year_month},
    time::today,
};
use ttygrid::{add_line, grid, header};

macro_rules! compose_grid {
    ($($header:expr),+) => {{
        use crossterm::style::{Colors, Color};

        let mut grid = grid!($($header),+)?;
        grid.set_header_color(Colors::new(Color::DarkCyan, Color::Reset));
        grid.set_delimiter_color(Colors::new(Color::Cyan, Color::Reset));
        grid.set_primary_color(Colors::new(Color::White, Color::Reset));
        grid.set_secondary_color(Colors::new(Color::Grey, Color::Reset));

        grid
    }}
}

#[derive(Parser, Debug)]
#[command(
    name = "monthgrid",
    version,
    about = "Lay out the cells of calendar month and year views"
)]
#[command(propagate_version = true)]
struct ArgParser {
    #[arg(
        short = 'v',
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    #[command(about = "Show the current configuration")]
    Show,
    #[command(about = "Set the weekday of the first grid column (1 = Monday .. 7 = Sunday)")]
    SetWeekStart { day: u32 },
    #[command(about = "Set the theme tag passed through to every cell")]
    SetTheme { theme: String },
    #[command(about = "Set the weekday and month name table (zh or en)")]
    SetLocale { locale: String },
}

#[derive(Debug, Args)]
struct MonthArgs {
    month: Option<String>,
    #[arg(short = 'w', long, help = "Weekday of the first column (1-7)")]
    week_start: Option<u32>,
    #[arg(short = 't', long, help = "Theme tag for the cells")]
    theme: Option<String>,
    #[arg(short = 'r', long, help = "Date flagged as today")]
    reference: Option<String>,
    #[arg(short = 'f', long, value_enum, help = "Export instead of printing")]
    format: Option<ExportFormat>,
}

#[derive(Debug, Args)]
struct YearArgs {
    year: Option<i32>,
    #[arg(short = 't', long, help = "Theme tag for the cells")]
    theme: Option<String>,
    #[arg(short = 'r', long, help = "Date flagged as today")]
    reference: Option<String>,
    #[arg(short = 'f', long, value_enum, help = "Export instead of printing")]
    format: Option<ExportFormat>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Manipulate Configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    #[command(
        alias = "m",
        about = "Also `m`. Lay out a month as YYYY-MM, defaulting to the current month"
    )]
    Month(MonthArgs),
    #[command(
        alias = "y",
        about = "Also `y`. Lay out the months of a year, defaulting to the current year"
    )]
    Year(YearArgs),
}

fn reference_date(reference: Option<String>) -> Result<chrono::NaiveDate> {
    match reference {
        Some(reference) => parse_date(&reference),
        None => Ok(today()),
    }
}

fn cell_display(cell: &MonthCellData) -> String {
    if cell.is_cur_date() {
        format!("[{}]", cell.date_display())
    } else if cell.belong_to() == BelongTo::Current {
        cell.date_display().to_string()
    } else {
        format!("({})", cell.date_display())
    }
}

fn month_headers(config: &Config) -> Result<[&'static str; 7]> {
    config
        .weekday_columns()
        .into_iter()
        .map(|(_, label)| label)
        .collect::<Vec<&'static str>>()
        .try_into()
        .map_err(|_| anyhow!("a week must have seven columns"))
}

fn month_lines(rows: &[Vec<MonthCellData>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(cell_display).collect())
        .collect()
}

fn month_grid(config: &Config, rows: &[Vec<MonthCellData>]) -> Result<ttygrid::TTYGrid> {
    let [c0, c1, c2, c3, c4, c5, c6] = month_headers(config)?;
    let mut grid = compose_grid!(
        header!(c0),
        header!(c1),
        header!(c2),
        header!(c3),
        header!(c4),
        header!(c5),
        header!(c6)
    );

    for line in month_lines(rows) {
        add_line!(
            grid,
            line[0].clone(),
            line[1].clone(),
            line[2].clone(),
            line[3].clone(),
            line[4].clone(),
            line[5].clone(),
            line[6].clone()
        )?;
    }

    Ok(grid)
}

fn year_grid(months: &[YearCellData]) -> Result<ttygrid::TTYGrid> {
    let mut grid = compose_grid!(header!("MONTH"), header!("DATE"), header!("CURRENT"));

    for month in months {
        add_line!(
            grid,
            month.month_display().to_string(),
            month.date().to_string(),
            if month.is_cur_mon() { "X" } else { "" }.to_string()
        )?;
    }

    Ok(grid)
}

fn process_month(mut config: Config, args: MonthArgs, w: &mut impl std::io::Write) -> Result<()> {
    let reference = reference_date(args.reference)?;
    let (year, month) = match args.month {
        Some(month) => parse_year_month(&month)?,
        None => (reference.year(), reference.month()),
    };

    if let Some(day) = args.week_start {
        config.set_week_start_day(day)?;
    }

    if let Some(theme) = args.theme {
        config.set_theme(theme);
    }

    let rows = config.month_cells(year, month, reference)?;
    tracing::info!(year, month, rows = rows.len(), "laid out month");

    match args.format {
        Some(format) => export(w, &rows, format),
        None => Ok(month_grid(&config, &rows)?.write(w)?),
    }
}

fn process_year(mut config: Config, args: YearArgs, w: &mut impl std::io::Write) -> Result<()> {
    let reference = reference_date(args.reference)?;
    let year = args.year.unwrap_or(reference.year());

    if let Some(theme) = args.theme {
        config.set_theme(theme);
    }

    let months = config.year_cells(year, reference)?;

    match args.format {
        Some(format) => export(w, &months, format),
        None => Ok(year_grid(&months)?.write(w)?),
    }
}

fn process_config(command: ConfigCommand, mut config: Config) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            serde_yaml::to_writer(std::io::stdout(), &config)?;
            return Ok(());
        }
        ConfigCommand::SetWeekStart { day } => config.set_week_start_day(day)?,
        ConfigCommand::SetTheme { theme } => config.set_theme(theme),
        ConfigCommand::SetLocale { locale } => config.set_locale(locale.parse::<Locale>()?),
    }

    config.save(None)
}

fn main() -> Result<()> {
    let cli = ArgParser::parse();
    logging::init(cli.verbose);

    let config = Config::load(None)?;

    match cli.command {
        Command::Config { command } => process_config(command, config),
        Command::Month(args) => process_month(config, args, &mut std::io::stdout()),
        Command::Year(args) => process_year(config, args, &mut std::io::stdout()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monthgrid::grid::MonthRows;

    fn month_args(args: &[&str]) -> MonthArgs {
        match ArgParser::try_parse_from(args).unwrap().command {
            Command::Month(args) => args,
            x => panic!("unexpected command {:?}", x),
        }
    }

    fn year_args(args: &[&str]) -> YearArgs {
        match ArgParser::try_parse_from(args).unwrap().command {
            Command::Year(args) => args,
            x => panic!("unexpected command {:?}", x),
        }
    }

    #[test]
    fn test_month_preview_sunday_first() {
        let mut config = Config::default();
        config.set_week_start_day(7).unwrap();
        config.set_locale(Locale::En);

        assert_eq!(
            month_headers(&config).unwrap(),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );

        let reference = chrono::NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let rows = config.month_cells(2024, 2, reference).unwrap();
        let lines = month_lines(&rows);

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            vec!["(28)", "(29)", "(30)", "(31)", "01", "02", "03"]
        );
        assert_eq!(lines[2][3], "[14]");
        assert_eq!(
            lines[4],
            vec!["25", "26", "27", "28", "29", "(01)", "(02)"]
        );

        assert!(month_grid(&config, &rows).is_ok());
    }

    #[test]
    fn test_year_preview() {
        let reference = chrono::NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let months = Config::default().year_cells(2024, reference).unwrap();
        assert!(year_grid(&months).is_ok());
    }

    #[test]
    fn test_month_json_export() {
        let args = month_args(&[
            "monthgrid", "month", "2024-02", "-w", "7", "-t", "card", "-r", "2024-02-14", "-f",
            "json",
        ]);
        assert_eq!(args.format, Some(ExportFormat::Json));

        let mut buf = Vec::new();
        process_month(Config::default(), args, &mut buf).unwrap();

        let rows: MonthRows = serde_json::from_slice(&buf).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0][4].date_display(), "01");
        assert!(rows.iter().flatten().all(|c| c.theme() == "card"));

        let flagged = rows
            .iter()
            .flatten()
            .filter(|c| c.is_cur_date())
            .collect::<Vec<_>>();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date_display(), "14");
    }

    #[test]
    fn test_year_yaml_export() {
        let args = year_args(&["monthgrid", "y", "2023", "-r", "2023-06-01", "-f", "yaml"]);

        let mut buf = Vec::new();
        process_year(Config::default(), args, &mut buf).unwrap();

        let months: Vec<YearCellData> = serde_yaml::from_slice(&buf).unwrap();
        assert_eq!(months.len(), 12);
        assert!(months[5].is_cur_mon());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(ArgParser::try_parse_from(["monthgrid", "month", "-f", "toml"]).is_err());

        let args = month_args(&["monthgrid", "month", "2024-02", "-w", "9", "-f", "json"]);
        let mut buf = Vec::new();
        assert!(process_month(Config::default(), args, &mut buf).is_err());
    }
}
