use clap::{builder::ArgAction, Args, Parser, Subcommand};
use citer::{
  clients::arxiv::ARXIV_API_URL, identifier, ArxivClient, CitationFormatter, InitialsStyle,
  StyleSet,
};
use citerd::{
  config::{DEFAULT_HOST, DEFAULT_PORT},
  server, CiterdError, ServerConfig,
};
use console::{style, Emoji};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✨ ", "");

#[derive(Parser)]
#[command(author, version, about = "Look up arXiv papers and copy their citations")]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the citation web server
  Serve {
    /// Interface to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    host:    String,
    /// Port to listen on
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    port:    u16,
    #[command(flatten)]
    options: FormatOptions,
  },
  /// Print the citations for a single paper
  Cite {
    /// arXiv identifier or arxiv.org URL
    identifier: String,
    #[command(flatten)]
    options:    FormatOptions,
    /// Print the paper and its citations as JSON
    #[arg(long)]
    json:       bool,
  },
}

/// Options shared by every command that fetches and formats papers.
#[derive(Args)]
struct FormatOptions {
  /// Base URL of the arXiv API
  #[arg(long, default_value = ARXIV_API_URL)]
  api_url:  String,
  /// How given names are abbreviated (spaced or compact)
  #[arg(long, default_value_t = InitialsStyle::Spaced)]
  initials: InitialsStyle,
  /// Use the legacy style set (short IEEE and PubMed instead of APA)
  #[arg(long)]
  legacy:   bool,
}

impl FormatOptions {
  fn style_set(&self) -> StyleSet {
    if self.legacy {
      StyleSet::Legacy
    } else {
      StyleSet::Modern
    }
  }
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

#[tokio::main]
async fn main() -> Result<(), CiterdError> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match cli.command {
    Commands::Serve { host, port, options } => {
      let config = ServerConfig {
        host,
        port,
        api_url: options.api_url.clone(),
        initials: options.initials,
        styles: options.style_set(),
        ..ServerConfig::default()
      };
      trace!("Server configuration: {config:?}");

      println!(
        "{} Serving citations on: {}",
        style(ROCKET).cyan(),
        style(format!("http://{}", config.addr())).yellow()
      );

      server::serve(config).await
    },

    Commands::Cite { identifier: input, options, json } => {
      let id = identifier::normalize(&input)?;
      let client = ArxivClient::with_api_url(&options.api_url);
      let formatter = CitationFormatter::new(options.initials, options.style_set());

      if !json {
        println!("{} Fetching paper: {}", style(LOOKING_GLASS).cyan(), style(&id).yellow());
      }

      let Some(paper) = client.fetch(&id).await? else {
        println!("{} Paper not found", style(WARNING).yellow());
        return Err(CiterdError::PaperNotFound(id));
      };
      debug!("Paper details: {:?}", paper);

      let citations = formatter.citations(&paper);

      if json {
        let output = serde_json::json!({ "paper": paper, "citations": citations });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
      }

      println!("\n{} Found paper:", style(SUCCESS).green());
      println!("   {} {}", style("Title:").green().bold(), style(&paper.title).white());
      println!("   {} {}", style("Authors:").green().bold(), style(paper.authors.join(", ")).white());
      println!("   {} {}", style("Year:").green().bold(), style(paper.year).white());
      println!(
        "   {} {}",
        style("PDF URL:").green().bold(),
        style(&paper.pdf_url).blue().underlined()
      );

      for (style_name, citation) in citations.iter() {
        println!("\n{} {}", style(PAPER).green(), style(style_name.label()).cyan().bold());
        println!("{citation}");
      }
      Ok(())
    },
  }
}
