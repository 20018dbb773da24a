use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use keepsake::{Evaluator, FrameIndex, NullEffects, PageState, Tribute};

#[derive(Parser, Debug)]
#[command(name = "keepsake", version)]
struct Cli {
    /// Enable trace-level logging.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the built-in tribute page as JSON.
    Dump(DumpArgs),
    /// Validate a tribute JSON file (or the built-in page).
    Validate(ValidateArgs),
    /// Evaluate one frame of the page and print the result as JSON.
    Eval(EvalArgs),
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input tribute JSON. Defaults to the built-in page.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input tribute JSON. Defaults to the built-in page.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Scroll offset in CSS pixels held for the whole run-up.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Dump(args) => cmd_dump(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Eval(args) => cmd_eval(args),
    }
}

fn load_tribute(path: Option<&PathBuf>) -> anyhow::Result<Tribute> {
    match path {
        None => Ok(Tribute::builtin()),
        Some(path) => {
            let tribute = Tribute::from_path(path)
                .with_context(|| format!("load tribute '{}'", path.display()))?;
            Ok(tribute)
        }
    }
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let tribute = Tribute::builtin();
    let json = tribute.to_json_pretty().context("serialize tribute")?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write tribute '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let tribute = load_tribute(args.in_path.as_ref())?;
    tribute.validate().context("tribute failed validation")?;
    eprintln!(
        "ok: {} sections, {} frames at {:.3} fps",
        tribute.sections.len(),
        tribute.duration.0,
        tribute.fps.as_f64()
    );
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let tribute = load_tribute(args.in_path.as_ref())?;
    let mut state = PageState::new(&tribute).context("build page state")?;
    state.set_scroll(args.scroll);

    let mut effects = NullEffects;
    for f in 0..=args.frame {
        state.tick(&tribute, FrameIndex(f), &mut effects);
    }

    let page = Evaluator::eval_frame(&tribute, &state, FrameIndex(args.frame))
        .context("evaluate frame")?;
    let json = serde_json::to_string_pretty(&page).context("serialize evaluated page")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write evaluated page '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
