use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use duffle::{BlendMode, CompositeOp, Compositor, Pixel};
use image::{Rgba, RgbaImage};

#[derive(Parser, Debug)]
#[command(name = "duffle", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a source PNG over a backdrop PNG.
    Composite(CompositeArgs),
    /// Run a JSON list of composite jobs.
    Batch(BatchArgs),
    /// Render a contact sheet of every operator or blend mode.
    Sheet(SheetArgs),
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// Source (element) PNG.
    #[arg(long)]
    source: PathBuf,

    /// Backdrop PNG.
    #[arg(long)]
    backdrop: PathBuf,

    /// Porter-Duff operator name (e.g. src_over, dst_in, xor).
    #[arg(long, default_value = "src_over")]
    op: String,

    /// Blend mode name (e.g. multiply, soft_light, hue).
    #[arg(long)]
    blend: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output width; defaults to the backdrop width.
    #[arg(long)]
    width: Option<u32>,

    /// Output height; defaults to the backdrop height.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// JSON array of jobs: {"source", "backdrop", "out", "op"?, "blend"?}.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SheetArgs {
    /// Source (element) PNG.
    #[arg(long)]
    source: PathBuf,

    /// Backdrop PNG.
    #[arg(long)]
    backdrop: PathBuf,

    /// What to enumerate: "ops" or "modes" (modes composite with src_over).
    #[arg(long, default_value = "ops")]
    what: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Edge length of one tile in pixels.
    #[arg(long, default_value_t = 256)]
    tile: u32,
}

#[derive(Debug, serde::Deserialize)]
struct CompositeJob {
    source: PathBuf,
    backdrop: PathBuf,
    out: PathBuf,
    #[serde(flatten)]
    compositor: Compositor,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Composite(args) => cmd_composite(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Sheet(args) => cmd_sheet(args),
    }
}

fn cmd_composite(args: CompositeArgs) -> anyhow::Result<()> {
    let op: CompositeOp = args.op.parse()?;
    let blend = args
        .blend
        .as_deref()
        .map(str::parse::<BlendMode>)
        .transpose()?;
    let compositor = Compositor { op, blend };

    let source = load_rgba(&args.source)?;
    let backdrop = load_rgba(&args.backdrop)?;
    let width = args.width.unwrap_or(backdrop.width());
    let height = args.height.unwrap_or(backdrop.height());

    let out = compositor.draw(width, height, &source, &backdrop)?;
    save_png(&args.out, &out)
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read job file '{}'", args.in_path.display()))?;
    let jobs: Vec<CompositeJob> = serde_json::from_str(&text)
        .with_context(|| format!("parse job file '{}'", args.in_path.display()))?;

    for job in jobs {
        let source = load_rgba(&job.source)?;
        let backdrop = load_rgba(&job.backdrop)?;
        let out = job
            .compositor
            .draw(backdrop.width(), backdrop.height(), &source, &backdrop)?;
        save_png(&job.out, &out)?;
    }
    Ok(())
}

fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let source = load_rgba(&args.source)?;
    let backdrop = load_rgba(&args.backdrop)?;
    let tile = args.tile.max(1);

    let compositors: Vec<Compositor> = match args.what.as_str() {
        "ops" => CompositeOp::ALL.iter().map(|&op| Compositor::new(op)).collect(),
        "modes" => BlendMode::ALL
            .iter()
            .map(|&m| Compositor::with_blend(CompositeOp::SrcOver, m))
            .collect(),
        other => anyhow::bail!("unknown sheet kind '{other}' (expected 'ops' or 'modes')"),
    };

    let cols = 4u32;
    let rows = (compositors.len() as u32).div_ceil(cols);
    let mut sheet = RgbaImage::from_pixel(cols * tile, rows * tile, Rgba([255, 255, 255, 255]));

    for (i, compositor) in compositors.iter().enumerate() {
        let cell = compositor.draw(tile, tile, &source, &backdrop)?;
        let ox = (i as u32 % cols) * tile;
        let oy = (i as u32 / cols) * tile;
        blit_checkerboard(&mut sheet, ox, oy, tile);
        blit_over(&mut sheet, &cell, ox, oy);
    }
    save_png(&args.out, &sheet)
}

fn load_rgba(path: &Path) -> anyhow::Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

fn save_png(path: &Path, img: &RgbaImage) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn blit_checkerboard(dst: &mut RgbaImage, ox: u32, oy: u32, tile: u32) {
    const CELL: u32 = 32;
    for y in 0..tile {
        for x in 0..tile {
            let even = (x / CELL + y / CELL) % 2 == 0;
            let c = if even {
                [0xde, 0xde, 0xde, 0xff]
            } else {
                [0xf3, 0xf3, 0xf3, 0xff]
            };
            dst.put_pixel(ox + x, oy + y, Rgba(c));
        }
    }
}

fn blit_over(dst: &mut RgbaImage, cell: &RgbaImage, ox: u32, oy: u32) {
    let over = Compositor::default();
    for y in 0..cell.height() {
        for x in 0..cell.width() {
            let s = Pixel::from_rgba8(cell.get_pixel(x, y).0);
            let b = Pixel::from_rgba8(dst.get_pixel(ox + x, oy + y).0);
            dst.put_pixel(ox + x, oy + y, Rgba(over.pixel(s, b).to_rgba8()));
        }
    }
}
