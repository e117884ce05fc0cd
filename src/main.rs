use clap::Parser;

use boardsnap::api::BoardClient;
use boardsnap::error::ExportError;
use boardsnap::export::{ExportFormat, ExportJob, requested_frames, run_export};
use boardsnap::graph;
use boardsnap::inline::ImageInliner;

#[derive(Parser, Debug)]
#[command(
    name = "boardsnap",
    about = "Export board frames as self-contained SVG or JSON"
)]
struct Cli {
    /// Board service base URL.
    #[arg(long, env = "BOARDSNAP_BASE_URL")]
    base_url: String,

    /// Credential sent as a `token` cookie on board and image requests.
    #[arg(long, env = "BOARDSNAP_TOKEN")]
    token: Option<String>,

    /// Board to export.
    #[arg(long, env = "BOARDSNAP_BOARD_ID")]
    board_id: String,

    /// Frame title to export; repeat or comma-separate for several.
    /// Without this the whole board is exported.
    #[arg(long = "frame")]
    frames: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Svg)]
    format: ExportFormat,

    /// Destination path; may contain {frame} for one file per frame.
    /// Without this the export is printed to stdout.
    #[arg(long)]
    output: Option<String>,

    /// List the titles of all frames on the board and exit.
    #[arg(long, default_value_t = false)]
    list_frames: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("boardsnap: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ExportError> {
    let client = BoardClient::new(&cli.base_url, &cli.board_id, cli.token.as_deref())?;

    if cli.list_frames {
        for title in graph::list_frame_titles(&client).await? {
            println!("{title}");
        }
        return Ok(());
    }

    let job = ExportJob {
        frames: requested_frames(&cli.frames)?,
        format: cli.format,
        destination: cli.output,
    };

    let inliner = ImageInliner::new(cli.token.as_deref())?;
    run_export(&client, &inliner, &job).await
}
