use std::path::PathBuf;

use mazebook::{
    book::{self, BookError, BookPlan},
    logging,
    settings::{BookSettings, DEFAULT_BOOK},
};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazebook")]
struct Args {
    #[clap(short, long, help = "Book config file, defaults to the one in the config directory")]
    config: Option<PathBuf>,
    #[clap(short, long, help = "Base seed, overrides the one from the config")]
    seed: Option<u64>,
    #[clap(short, long, default_value = "output/book.json", help = "Where to write the book data")]
    out: PathBuf,
    #[clap(short, long, action, help = "Log debug messages")]
    verbose: bool,
    #[clap(long, action, help = "Print the default config and quit")]
    print_default_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
}

fn main() -> Result<(), BookError> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", DEFAULT_BOOK);
        return Ok(());
    }

    if args.show_config_path {
        match BookSettings::default_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("No config directory on this platform"),
        }
        return Ok(());
    }

    better_panic::install();
    logging::init();

    let mut settings = match &args.config {
        Some(path) => BookSettings::load(path)?,
        None => BookSettings::load_or_default(BookSettings::default_path().as_deref())?,
    };

    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    let level = if args.verbose {
        Some(log::Level::Debug)
    } else {
        settings.log_level()
    };
    if let Some(level) = level {
        logging::get_logger().set_min_level(level);
    }

    let plan = BookPlan::new(&settings);
    if !plan.is_classic_layout() {
        log::warn!(
            "Book has {} mazes, {} key pages and {} pages, the classic book has 72, 18 and 100",
            plan.mazes.len(),
            plan.key_pages.len(),
            plan.page_count()
        );
    }

    let book = book::generate_book(&plan)?;
    book::write_book(&book, &args.out)?;

    log::info!(
        "Planned {} DIY pages and {} key pages, {} pages in total",
        plan.diy.len(),
        plan.key_pages.len(),
        plan.page_count()
    );

    Ok(())
}
