use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::exit;
use strawberry::config::{ConfigManager, StrawberryConfig};
use strawberry::format::format_query_header;
use strawberry::matcher::Matcher;
use strawberry::store::RecipeStore;
use strawberry::ui::{log_error, log_success, log_warn, print_banner, print_listing, print_outcome};
use strawberry::{NewRecipeInput, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strawberry")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "strawberry.toml")]
    config: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true, action)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Random recipe containing all the given ingredients
    Generate {
        ingredients: Vec<String>,
        #[arg(long)]
        max_minutes: Option<u32>,
    },
    /// Random recipe that fits the time limit
    Surprise {
        #[arg(long)]
        max_minutes: Option<u32>,
    },
    Add {
        #[arg(long)]
        name: String,
        // Kept as text so a non-number gets its own message
        #[arg(long, allow_hyphen_values = true)]
        minutes: String,
        /// Comma separated
        #[arg(long)]
        ingredients: String,
        #[arg(long = "step")]
        steps: Vec<String>,
        #[arg(long, default_value = "")]
        area: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long)]
        source_url: Option<String>,
    },
    List,
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[arg(long)]
    set_recipes: Option<PathBuf>,
    #[arg(long)]
    set_floor: Option<u32>,
    #[arg(long)]
    set_default_time: Option<u32>,
    #[arg(long, action)]
    show: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    print_banner();
    if let Err(e) = run(cli) {
        log_error(&e.to_string());
        exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_manager = ConfigManager::new(&cli.config);
    let config = config_manager.load()?;

    if let Commands::Config(args) = &cli.command {
        return configure(&config_manager, &cli.config, config, args);
    }

    let store = RecipeStore::new(config.recipes_path.clone());
    let mut session = Session::open(store, Matcher::new(config.min_minutes));
    // Add creates the file when it is missing
    if let Some(e) = session.load_error() {
        if !matches!(cli.command, Commands::Add { .. }) {
            log_warn(&e.to_string());
        }
    }

    match cli.command {
        Commands::Generate {
            ingredients,
            max_minutes,
        } => {
            let max = max_minutes.unwrap_or(config.default_max_minutes);
            let (wanted, outcome) = session.generate(&ingredients.join(", "), max)?;
            let header = format_query_header(&wanted, max);
            print_outcome(&outcome, Some(&header));
        }
        Commands::Surprise { max_minutes } => {
            let max = max_minutes.unwrap_or(config.default_max_minutes);
            let outcome = session.surprise(max)?;
            print_outcome(&outcome, None);
        }
        Commands::Add {
            name,
            minutes,
            ingredients,
            steps,
            area,
            category,
            source_url,
        } => {
            let input = NewRecipeInput {
                name,
                minutes,
                ingredients,
                steps,
                area,
                category,
                source_url,
            };
            let record = session.add(&input)?;
            log_success(&format!("Recipe '{}' added!", record.name));
        }
        Commands::List => print_listing(session.records()),
        Commands::Config(_) => {}
    }

    Ok(())
}

fn configure(
    manager: &ConfigManager,
    path: &Path,
    mut config: StrawberryConfig,
    args: &ConfigArgs,
) -> anyhow::Result<()> {
    let changed =
        args.set_recipes.is_some() || args.set_floor.is_some() || args.set_default_time.is_some();
    if let Some(recipes) = &args.set_recipes {
        config.recipes_path = recipes.clone();
    }
    if let Some(floor) = args.set_floor {
        config.min_minutes = floor;
    }
    if let Some(minutes) = args.set_default_time {
        config.default_max_minutes = minutes;
    }

    if changed {
        manager.save(&config)?;
        log_success(&format!("Configuration saved to {}", path.display()));
    } else if args.show {
        println!("Current Configuration:");
        println!("   Recipes file: {}", config.recipes_path.display());
        println!("   Minimum minutes: {}", config.min_minutes);
        println!("   Default max minutes: {}", config.default_max_minutes);
    } else {
        println!("Use --show, --set-recipes <PATH>, --set-floor <N> or --set-default-time <N>");
    }
    Ok(())
}
