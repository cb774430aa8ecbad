use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use starfolio::navigation::Route;
use starfolio::site::SiteBuilder;
use starfolio::{App, Content, Page, SiteConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "starfolio", version, about = "Render and simulate the portfolio site")]
struct Cli {
    /// Content JSON replacing the built-in portfolio
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Site configuration JSON
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write both pages and a manifest into a directory
    Build {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        /// Directory holding the assets, used to copy the CV into the build
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Validate content and configuration
    Check,
    /// Mount a page headlessly and print the state after each scroll offset
    Simulate {
        #[arg(long, value_enum, default_value_t = PageArg::Portfolio)]
        page: PageArg,
        /// Scroll offsets to visit, in order
        #[arg(long = "scroll", num_args = 1.., required = true)]
        offsets: Vec<f64>,
        /// Print JSON lines instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Smooth-scroll the portfolio page to a section and print the trajectory
    Goto { section: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    Portfolio,
    Certifications,
}

impl From<PageArg> for Route {
    fn from(p: PageArg) -> Self {
        match p {
            PageArg::Portfolio => Route::Portfolio,
            PageArg::Certifications => Route::Certifications,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn load(cli: &Cli) -> Result<(SiteConfig, Content)> {
    let config = match &cli.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    let content = match &cli.content {
        Some(path) => Content::from_path(path)
            .with_context(|| format!("loading content {}", path.display()))?,
        None => Content::builtin().context("loading built-in content")?,
    };
    Ok((config, content))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let (config, content) = load(&cli)?;

    match &cli.command {
        Command::Build { out, assets } => {
            let mut builder = SiteBuilder::new(config, content);
            if let Some(dir) = assets {
                builder = builder.asset_root(dir);
            }
            let report = builder
                .build(out)
                .with_context(|| format!("building into {}", out.display()))?;
            for (file, digest) in &report.files {
                println!("{}  {}", digest, file);
            }
        }
        Command::Check => {
            config.validate()?;
            content.validate()?;
            let stats = content.statistics();
            println!(
                "ok: {} jobs, {} projects, {} certifications, {} testimonials",
                content.jobs.len(),
                stats.projects,
                stats.certifications,
                content.testimonials.len()
            );
        }
        Command::Simulate { page, offsets, json } => {
            let mut app = App::new(config, content)?;
            app.navigate((*page).into())?;
            for &y in offsets {
                app.scroll(y);
                let state = app.state();
                if *json {
                    println!("{}", serde_json::to_string(&state)?);
                } else {
                    println!(
                        "y={:<8} progress={:>6.2}%  active={:<13} visible={}/{}",
                        y,
                        state.scroll_progress,
                        state
                            .active_section
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "-".into()),
                        state.bindings.visible.len(),
                        app.page().geometry().animated.len()
                    );
                }
            }
        }
        Command::Goto { section } => {
            let steps = config.smooth_scroll_steps;
            let mut app = App::new(config, content)?;
            let from = app.scroll_y();
            match app.scroll_to_section(section) {
                Some(req) => {
                    println!("{} -> {} ({:?})", from, req.target_y, req.behavior);
                    for y in req.positions(from, steps) {
                        println!("  {:.1}", y);
                    }
                    let state = app.state();
                    println!(
                        "active={} progress={:.2}%",
                        state
                            .active_section
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "-".into()),
                        state.scroll_progress
                    );
                }
                None => println!("no section '{}' on this page", section),
            }
        }
    }
    Ok(())
}
