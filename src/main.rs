// Free Kick Calendar
// Text preview of the booking day grid, for inspecting layout output
// without the dashboard in front of it.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};

use freekick_calendar::services::api::{decode_bookings, BookingFetcher};
use freekick_calendar::services::config;
use freekick_calendar::services::grid::{select_bookings, DayGrid, StatusCategory};
use freekick_calendar::utils::date::format_time_range;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Free Kick calendar grid preview");

    let options = Options::parse(std::env::args().skip(1))?;

    let bookings = match &options.source {
        Source::File(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read bookings file {}", path))?;
            decode_bookings(&body)?
        }
        Source::Fetch => {
            let fetch_config = config::load().context("Failed to load fetch configuration")?;
            let fetcher = BookingFetcher::new(&fetch_config)?;
            fetcher.fetch_day(options.day, options.venue)?
        }
    };

    let selected = select_bookings(&bookings, options.day, options.venue);
    let grid = DayGrid::compute(&selected);

    print!("{}", render_grid(&grid, options.day));
    Ok(())
}

enum Source {
    File(String),
    Fetch,
}

struct Options {
    source: Source,
    day: NaiveDate,
    venue: Option<i64>,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut source: Option<Source> = None;
        let mut day = Local::now().date_naive();
        let mut venue = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fetch" => source = Some(Source::Fetch),
                "--date" => {
                    let value = args.next().ok_or_else(|| anyhow!("--date needs a value"))?;
                    day = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                        .with_context(|| format!("Invalid date {:?}, expected YYYY-MM-DD", value))?;
                }
                "--venue" => {
                    let value = args.next().ok_or_else(|| anyhow!("--venue needs a value"))?;
                    venue = Some(
                        value
                            .parse::<i64>()
                            .with_context(|| format!("Invalid venue id {:?}", value))?,
                    );
                }
                "--help" | "-h" => {
                    return Err(anyhow!(
                        "Usage: freekick-calendar (<bookings.json> | --fetch) [--date YYYY-MM-DD] [--venue ID]"
                    ));
                }
                path => source = Some(Source::File(path.to_string())),
            }
        }

        let source = source.ok_or_else(|| {
            anyhow!("Expected a bookings JSON file or --fetch; see --help")
        })?;

        Ok(Self { source, day, venue })
    }
}

fn render_grid(grid: &DayGrid, day: NaiveDate) -> String {
    let mut out = String::new();

    let first = &grid.slots[0];
    let last = grid.slots.last().unwrap();
    out.push_str(&format!(
        "Bookings for {}\nAxis: {} .. {} ({} slots)\n",
        day,
        first.display,
        last.display,
        grid.slots.len()
    ));

    if grid.columns.is_empty() {
        out.push_str("No bookings.\n");
        return out;
    }

    for column in &grid.columns {
        out.push_str(&format!("\n{}\n", column.key));
        for booking in &column.bookings {
            let time = match (booking.start, booking.end) {
                (Some(start), Some(end)) => format_time_range(start, end),
                _ => "(no time)".to_string(),
            };
            let placement = match grid.position_for(booking) {
                Some(pos) => format!("top={:.1}% height={:.1}%", pos.top, pos.height),
                None => "unpositioned".to_string(),
            };
            out.push_str(&format!(
                "  #{} {} [{}] {}\n",
                booking.id,
                time,
                StatusCategory::for_booking(booking).label(),
                placement
            ));
        }
    }

    out
}
