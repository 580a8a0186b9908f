use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use figtk::codegen::EmitOptions;
use figtk::io::{read_document, ClientOptions, FigmaClient, FsSink, PersistenceSink};
use figtk::render::SvgHost;
use figtk::synth::SynthOptions;
use figtk::{FetchOutcome, Session};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "figtk")]
#[command(about = "Generate Tkinter programs from Figma frames")]
#[command(version)]
struct Cli {
    /// Log every classification and emission decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the frames of a document
    Frames {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate a program from selected frames
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Frame to include; repeat for several frames sharing one window
        #[arg(short, long = "frame", value_name = "NAME")]
        frames: Vec<String>,

        /// Include every frame of the document
        #[arg(long, conflicts_with = "frames")]
        all: bool,

        /// Write the program here instead of stdout (".py" is added when there is no extension)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Also write an SVG preview of the layout
        #[arg(long, value_name = "FILE")]
        preview: Option<PathBuf>,

        /// Also write the widget plan as JSON
        #[arg(long, value_name = "FILE")]
        plan: Option<PathBuf>,

        /// Window title of the generated program
        #[arg(long)]
        title: Option<String>,

        /// Name of the generated entry-point function
        #[arg(long, value_name = "NAME")]
        entry_point: Option<String>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Personal access token
    #[arg(long, env = "FIGMA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// File id, as in figma.com/file/<id>/...
    #[arg(long, conflicts_with = "input")]
    file_id: Option<String>,

    /// Read a saved file response instead of calling the API
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// API root
    #[arg(long, default_value = "https://api.figma.com")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Frames { source } => cmd_frames(&source),
        Command::Generate {
            source,
            frames,
            all,
            out,
            preview,
            plan,
            title,
            entry_point,
        } => {
            let mut emit = EmitOptions::default();
            if let Some(title) = title {
                emit = emit.with_window_title(title);
            }
            if let Some(entry_point) = entry_point {
                emit = emit.with_entry_point(entry_point);
            }
            cmd_generate(&source, frames, all, &emit, out, preview, plan)
        }
    }
}

fn open_session(source: &SourceArgs) -> anyhow::Result<(Session, FetchOutcome)> {
    let mut session = Session::new();
    let outcome = match &source.input {
        Some(path) => {
            let document = read_document(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            session.load(document)
        }
        None => {
            let options = ClientOptions::new()
                .with_base_url(&source.base_url)
                .with_timeout(Duration::from_secs(source.timeout));
            let client = FigmaClient::new(options)?;
            session.fetch(
                &client,
                source.token.as_deref().unwrap_or_default(),
                source.file_id.as_deref().unwrap_or_default(),
            )?
        }
    };
    Ok((session, outcome))
}

fn cmd_frames(source: &SourceArgs) -> anyhow::Result<()> {
    let (_, outcome) = open_session(source)?;
    match outcome {
        FetchOutcome::Frames(names) => {
            for name in names {
                println!("{name}");
            }
        }
        FetchOutcome::NoFramesDetected => eprintln!("No frames detected in this document."),
    }
    Ok(())
}

fn cmd_generate(
    source: &SourceArgs,
    frames: Vec<String>,
    all: bool,
    emit: &EmitOptions,
    out: Option<PathBuf>,
    preview: Option<PathBuf>,
    plan: Option<PathBuf>,
) -> anyhow::Result<()> {
    let (mut session, outcome) = open_session(source)?;
    let selection = match outcome {
        FetchOutcome::NoFramesDetected => bail!("no frames detected in this document"),
        FetchOutcome::Frames(names) if all => names,
        FetchOutcome::Frames(_) => frames,
    };

    let generated = session.generate(&selection, &SynthOptions::default(), emit)?;

    if let Some(path) = plan {
        let json = serde_json::to_string_pretty(&generated.plan)?;
        std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Plan: {}", path.display());
    }

    match out {
        Some(path) => {
            let written = session.export(&FsSink::default(), &path)?;
            eprintln!("Generated: {}", written.display());
        }
        None => print!("{}", generated.source),
    }

    if let Some(path) = preview {
        let mut host = SvgHost::new();
        session.render_preview(&mut host)?;
        let target = FsSink::new("svg").save(&path, &host.to_svg())?;
        eprintln!("Preview: {}", target.display());
    }

    Ok(())
}
