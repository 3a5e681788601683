use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use codescan::camera::{map_touch_to_focus_area, CameraParameters};
use codescan::core::{Point, Rect, YuvFrame};
use codescan::ScannerConfig;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "codescan")]
#[command(about = "Camera-side helpers for barcode scanning")]
struct Cli {
    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a preview size for a target view and configure the camera.
    SelectSize(SelectSizeArgs),
    /// Rotate a raw NV21 frame by a quarter-turn multiple.
    Rotate(RotateArgs),
    /// Map a view rectangle to a camera focus area.
    Focus(FocusArgs),
}

#[derive(Args, Debug)]
struct SelectSizeArgs {
    /// Camera parameters JSON.
    #[arg(long)]
    camera: PathBuf,
    /// Target view size, `WxH`.
    #[arg(long, value_parser = parse_size)]
    target: (u32, u32),
    /// Scanner config JSON; defaults apply when absent.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RotateArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    output: PathBuf,
    #[arg(long)]
    width: usize,
    #[arg(long)]
    height: usize,
    #[arg(long, allow_hyphen_values = true)]
    degrees: i32,
}

#[derive(Args, Debug)]
struct FocusArgs {
    /// View rectangle, `left,top,right,bottom`.
    #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
    area: Rect,
    /// View size, `WxH`.
    #[arg(long, value_parser = parse_size)]
    view: (u32, u32),
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    orientation: i32,
}

#[derive(Serialize)]
struct SelectSizeReport {
    preview_size: Point,
    camera: CameraParameters,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad rectangle '{s}': {e}"))?;
    match parts.as_slice() {
        &[left, top, right, bottom] => Ok(Rect::new(left, top, right, bottom)),
        _ => Err(format!("expected left,top,right,bottom, got '{s}'")),
    }
}

fn init_logging(level: Option<&str>) {
    #[cfg(feature = "tracing")]
    {
        let _ = level;
        codescan::core::init_tracing(false);
    }
    #[cfg(not(feature = "tracing"))]
    {
        let default = std::env::var(codescan::core::LOG_ENV_VAR).ok();
        let default = codescan::core::parse_level(default.as_deref(), log::LevelFilter::Warn);
        let _ = codescan::core::init_with_level(codescan::core::parse_level(level, default));
    }
}

fn select_size(args: SelectSizeArgs) -> Result<(), Box<dyn Error>> {
    let mut camera: CameraParameters = serde_json::from_str(&fs::read_to_string(&args.camera)?)?;
    let config = match &args.config {
        Some(path) => ScannerConfig::load_json(path)?,
        None => ScannerConfig::default(),
    };
    let (w, h) = args.target;
    let preview_size = config.apply(&mut camera, w, h)?;
    let report = SelectSizeReport {
        preview_size,
        camera,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn rotate(args: RotateArgs) -> Result<(), Box<dyn Error>> {
    let data = fs::read(&args.input)?;
    let frame = YuvFrame::new(args.width, args.height, data)?.rotate(args.degrees)?;
    log::info!(
        "rotated {}x{} by {} -> {}x{}",
        args.width,
        args.height,
        args.degrees,
        frame.width(),
        frame.height()
    );
    println!("{}x{}", frame.width(), frame.height());
    fs::write(&args.output, frame.into_data())?;
    Ok(())
}

fn focus(args: FocusArgs) -> Result<(), Box<dyn Error>> {
    let (w, h) = args.view;
    let rect = map_touch_to_focus_area(args.area, w as i32, h as i32, args.orientation)
        .ok_or("view must be non-empty and orientation a multiple of 90")?;
    println!("{}", serde_json::to_string(&rect)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result = match cli.cmd {
        Command::SelectSize(args) => select_size(args),
        Command::Rotate(args) => rotate(args),
        Command::Focus(args) => focus(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
