use anyhow::{Context, Result};
use clap::Parser;
use std::{fs::File, io, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use trademap::{HttpFetcher, JsonRenderer, Renderer, TreeMap, ViewConfig};

#[derive(Parser, Debug)]
#[command(name = "trademap")]
#[command(about = "Fetch trade data, join it with metadata and emit a tree map configuration")]
#[command(version)]
struct Args {
    /// YAML view file; flags below override its values
    #[arg(short, long, env = "TRADEMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Level drawn as the leaf rectangles
    #[arg(long, env = "TRADEMAP_SQUARES")]
    squares: Option<String>,

    /// Level used to colour the rectangles
    #[arg(long, env = "TRADEMAP_GROUP")]
    group: Option<String>,

    /// `+`-delimited depth chain, e.g. region+state+municipality
    #[arg(long, env = "TRADEMAP_DEPTHS")]
    depths: Option<String>,

    #[arg(long, env = "TRADEMAP_DATASET")]
    dataset: Option<String>,

    /// Pre-encoded query string for the dataset request
    #[arg(long, env = "TRADEMAP_FILTERS")]
    filters: Option<String>,

    #[arg(long, env = "TRADEMAP_LOCALE")]
    locale: Option<String>,

    #[arg(long, env = "TRADEMAP_API_BASE")]
    api_base: Option<String>,

    /// Write the configuration here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn view(&self) -> Result<ViewConfig> {
        let mut view = match &self.config {
            Some(path) => ViewConfig::from_yaml_file(path)?,
            None => ViewConfig::default(),
        };
        let overrides = [
            (&mut view.squares, &self.squares),
            (&mut view.group, &self.group),
            (&mut view.depths, &self.depths),
            (&mut view.dataset, &self.dataset),
            (&mut view.filters, &self.filters),
            (&mut view.locale, &self.locale),
            (&mut view.api_base, &self.api_base),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
        Ok(view)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // logs go to stderr so stdout stays a clean JSON document
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(io::stderr)
        .init();
    info!("startup");

    // ─── 2) resolve view ─────────────────────────────────────────────
    let args = Args::parse();
    let view = args.view()?;
    let fetcher = HttpFetcher::new(&view.api_base)?;
    let tree = TreeMap::new(fetcher, view).context("invalid view configuration")?;
    info!(
        dataset = %tree.view().dataset,
        squares = %tree.view().squares,
        group = %tree.view().group,
        "view resolved"
    );

    // ─── 3) fetch, join, hand off ────────────────────────────────────
    let mut renderer: Box<dyn Renderer> = match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
            Box::new(JsonRenderer::new(file).pretty(args.pretty))
        }
        None => Box::new(JsonRenderer::new(io::stdout()).pretty(args.pretty)),
    };
    tree.load(renderer.as_mut()).await?;

    info!("all done");
    Ok(())
}
