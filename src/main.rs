use clap::Parser;
use movie_tickets::config::{DEFAULT_CURRENCY, DEFAULT_HEADING};
use movie_tickets::logging::{init_logging, LoggingConfig};
use movie_tickets::{process_sale, Movie, ReportConfig};
use std::process::ExitCode;

/// Price a movie ticket order, VAT included.
#[derive(Debug, Parser)]
#[command(name = "movie-tickets", version, about)]
struct CliArgs {
    /// Movie to book
    #[arg(long, value_enum, ignore_case = true, default_value_t = Movie::default())]
    movie: Movie,

    /// Price of a single ticket
    #[arg(long, required_unless_present = "list_movies", allow_hyphen_values = true)]
    price: Option<String>,

    /// Number of tickets
    #[arg(long, required_unless_present = "list_movies", allow_hyphen_values = true)]
    count: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List the movies on offer and exit
    #[arg(long)]
    list_movies: bool,

    #[arg(long, env = "MOVIE_TICKETS_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,

    #[arg(long, env = "MOVIE_TICKETS_HEADING", default_value = DEFAULT_HEADING)]
    heading: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = CliArgs::parse();
    init_logging(LoggingConfig::from_env())?;

    if cli.list_movies {
        for movie in Movie::all() {
            println!("{movie}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let price = cli.price.unwrap_or_default();
    let count = cli.count.unwrap_or_default();

    let report = match process_sale(cli.movie.as_ref(), &price, &count) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e.to_user_message());
            return Ok(ExitCode::from(2));
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let config = ReportConfig {
            currency_symbol: cli.currency,
            heading: cli.heading,
        };
        print!("{}", report.render(&config));
    }

    Ok(ExitCode::SUCCESS)
}
