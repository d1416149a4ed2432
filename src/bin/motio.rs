use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "motio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a structural summary of a project file.
    Inspect(InspectArgs),
    /// Sample one frame of a sequence and dump it as JSON.
    Sample(SampleArgs),
    /// Load a project and save it back out, normalizing the file.
    Resave(ResaveArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory of modifier template descriptors. Without it, every
    /// modifier in the file is reported as dropped.
    #[arg(long)]
    templates: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory of modifier template descriptors.
    #[arg(long)]
    templates: PathBuf,

    /// Sequence id to sample.
    #[arg(long)]
    sequence: u32,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct ResaveArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory of modifier template descriptors.
    #[arg(long)]
    templates: PathBuf,

    /// Output project JSON.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Resave(args) => cmd_resave(args),
    }
}

fn load_templates(dir: Option<&Path>) -> anyhow::Result<motio::ModifierRepository> {
    let mut repository = motio::ModifierRepository::new();
    if let Some(dir) = dir {
        let count = repository
            .load_from_directory(dir)
            .with_context(|| format!("load templates from '{}'", dir.display()))?;
        eprintln!("loaded {count} templates from {}", dir.display());
    }
    Ok(repository)
}

fn load_project(
    path: &Path,
    repository: &motio::ModifierRepository,
) -> anyhow::Result<motio::Project> {
    let project = motio::load_project(path, repository)
        .with_context(|| format!("load project '{}'", path.display()))?;
    Ok(project)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let repository = load_templates(args.templates.as_deref())?;
    let project = load_project(&args.in_path, &repository)?;

    println!("project: {}", project.title());
    for (id, sequence) in project.sequences() {
        println!(
            "  sequence {}: \"{}\" {}x{} @{} fps, {} frames",
            id.0,
            sequence.title(),
            sequence.width(),
            sequence.height(),
            sequence.frame_rate(),
            sequence.duration()
        );
        for layer in sequence.layers() {
            let kind = match layer.kind() {
                motio::LayerKind::Solid { .. } => "solid",
                motio::LayerKind::Visual { .. } => "visual",
            };
            println!(
                "    layer {}: \"{}\" ({kind}) frames {}..{}, {} modifiers",
                layer.id().0,
                layer.title(),
                layer.range().start.0,
                layer.range().end.0,
                layer.modifiers().len()
            );
            for modifier in layer.modifiers() {
                let keyframes: usize = modifier
                    .parameters()
                    .iter()
                    .map(|p| p.keyframes().len())
                    .sum();
                let state = if modifier.enabled() { "" } else { " (disabled)" };
                println!(
                    "      modifier \"{}\"{state}: {} parameters, {} keyframes",
                    modifier.template_id(),
                    modifier.parameters().len(),
                    keyframes
                );
            }
        }
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let repository = load_templates(Some(&args.templates))?;
    let project = load_project(&args.in_path, &repository)?;

    let sequence = project
        .sequence(motio::SequenceId(args.sequence))
        .with_context(|| format!("no sequence with id {}", args.sequence))?;

    let frame = motio::FrameIndex(args.frame);
    let clamped = sequence.clamp_frame(frame);
    if clamped != frame {
        eprintln!("frame {} is past the end, sampling frame {}", frame.0, clamped.0);
    }

    let sampled = motio::FrameSampler::sample_frame(sequence, clamped);
    let json = serde_json::to_string_pretty(&sampled).context("serialize sampled frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_resave(args: ResaveArgs) -> anyhow::Result<()> {
    let repository = load_templates(Some(&args.templates))?;
    let project = load_project(&args.in_path, &repository)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    motio::save_project(&project, &args.out)
        .with_context(|| format!("save project '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
