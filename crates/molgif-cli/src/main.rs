//! molgif CLI - render XYZ molecules to animated GIFs

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use molgif::{OutputFormat, RenderSettings, RotationAxes, Spin};

#[derive(Parser, Debug)]
#[command(name = "molgif")]
#[command(about = "Render a molecule from an XYZ file as a spinning GIF", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Input XYZ file
    input: Option<PathBuf>,

    /// Output file name (default: input name with .gif or .png)
    #[arg(short = 'o')]
    output: Option<PathBuf>,

    /// Output image width
    #[arg(short = 'w')]
    width: Option<u32>,

    /// Output image height
    #[arg(short = 'h')]
    height: Option<u32>,

    /// Animation loop time in seconds
    #[arg(short = 't')]
    loop_seconds: Option<u32>,

    /// Rotate along x axis
    #[arg(short = 'x')]
    x: bool,
    /// Rotate along y axis
    #[arg(short = 'y')]
    y: bool,
    /// Rotate along z axis
    #[arg(short = 'z')]
    z: bool,
    /// Rotate along x axis in reverse
    #[arg(short = 'X')]
    x_reverse: bool,
    /// Rotate along y axis in reverse
    #[arg(short = 'Y')]
    y_reverse: bool,
    /// Rotate along z axis in reverse
    #[arg(short = 'Z')]
    z_reverse: bool,

    /// Hide molgif banner
    #[arg(short = 'l')]
    hide_banner: bool,

    /// Render a single image in PNG format
    #[arg(short = 'p')]
    png: bool,

    /// Background color red component
    #[arg(short = 'r')]
    red: Option<u16>,
    /// Background color green component
    #[arg(short = 'g')]
    green: Option<u16>,
    /// Background color blue component
    #[arg(short = 'b')]
    blue: Option<u16>,

    /// Atom size
    #[arg(short = 'a')]
    atom_size: Option<f32>,

    /// Bond size
    #[arg(short = 'd')]
    bond_size: Option<f32>,

    /// TOML settings file; other flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render threads (0 = one per CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// Draw bonds between nearby hydrogens
    #[arg(long)]
    bond_hydrogens: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn rotation(&self) -> RotationAxes {
        RotationAxes {
            x: Spin::from_flags(self.x, self.x_reverse),
            y: Spin::from_flags(self.y, self.y_reverse),
            z: Spin::from_flags(self.z, self.z_reverse),
        }
    }

    fn format(&self) -> OutputFormat {
        if self.png {
            return OutputFormat::Png;
        }
        self.output
            .as_deref()
            .and_then(OutputFormat::from_path)
            .unwrap_or(OutputFormat::Gif)
    }

    /// Settings from `--config`, with command-line flags on top.
    fn settings(&self) -> Result<RenderSettings> {
        let mut s = match &self.config {
            Some(path) => RenderSettings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => RenderSettings::default(),
        };

        if let Some(w) = self.width {
            s.width = w;
        }
        if let Some(h) = self.height {
            s.height = h;
        }
        if let Some(t) = self.loop_seconds {
            s.loop_seconds = t;
        }
        let rotation = self.rotation();
        if !rotation.is_empty() {
            s.rotation = rotation;
        }
        if self.hide_banner {
            s.banner = false;
        }
        for (slot, value) in s.background.iter_mut().zip([self.red, self.green, self.blue]) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        if let Some(a) = self.atom_size {
            s.atom_radius = a;
        }
        if let Some(d) = self.bond_size {
            s.bond_radius = d;
        }
        if let Some(n) = self.threads {
            s.threads = n;
        }
        if self.bond_hydrogens {
            s.bond_hydrogen_pairs = true;
        }
        Ok(s)
    }
}

fn default_output(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

fn progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::default_bar().template("  {bar:40.cyan/blue} {pos}/{len} frames {elapsed}")
    {
        bar.set_style(style);
    }
    bar
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = cli.settings()?;
    if cli.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        bail!("specify input file name");
    };
    let format = cli.format();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(input, format));
    log::debug!("{} -> {} ({:?}), {:?}", input.display(), output.display(), format, settings);

    let bar = progress_bar(cli.quiet);
    molgif::render_file(input, &output, format, settings, |done, total| {
        bar.set_length(total as u64);
        bar.set_position(done as u64);
    })
    .with_context(|| format!("failed to render {}", input.display()))?;
    bar.finish_and_clear();

    Ok(())
}
