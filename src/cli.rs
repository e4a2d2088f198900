// src/cli.rs
use std::fmt::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::{Catalog, FastenerRecord};
use crate::config::consts::*;
use crate::config::options::SiteOptions;
use crate::error::{Error, Result};
use crate::export::{Dim, ExportCommand, FastenerKind};
use crate::site;

#[derive(Parser, Debug)]
#[command(
    name = "cli",
    version,
    about = "Fastener gallery: list fasteners, render the gallery page, compose export commands"
)]
pub struct Cli {
    /// JSON catalog to use instead of the builtin gallery
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List fasteners as `id,name`
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print one fastener's details, specs and export command
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Render a static HTML snapshot of the gallery page
    Render(RenderArgs),
    /// Compose a command line for the FreeCAD export helper
    Command(CommandArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Fastener shown by index.html (default: first in the catalog)
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Also write one <id>.html per fastener
    #[arg(long)]
    pub all: bool,

    /// Skip writing styles.css
    #[arg(long)]
    pub no_styles: bool,
}

#[derive(Args, Debug)]
pub struct CommandArgs {
    /// Catalog id (e.g. hex-nut) or helper kind (e.g. hex_nut).
    ///
    /// Without flags a catalog id prints that record's command as stored. With
    /// any flag the command starts from the helper's defaults, not from the
    /// record's values: repeat every dimension you want to keep. Only builtin
    /// gallery ids map to a helper kind.
    pub fastener: String,
    #[arg(long)]
    pub diameter: Option<f64>,
    #[arg(long)]
    pub length: Option<f64>,
    #[arg(long)]
    pub head_height: Option<f64>,
    #[arg(long)]
    pub head_width: Option<f64>,
    #[arg(long)]
    pub outer: Option<f64>,
    #[arg(long)]
    pub thickness: Option<f64>,
    #[arg(long)]
    pub grip: Option<f64>,
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl CommandArgs {
    fn dims(&self) -> [(Dim, Option<f64>); 7] {
        [
            (Dim::Diameter, self.diameter),
            (Dim::Length, self.length),
            (Dim::HeadHeight, self.head_height),
            (Dim::HeadWidth, self.head_width),
            (Dim::Outer, self.outer),
            (Dim::Thickness, self.thickness),
            (Dim::Grip, self.grip),
        ]
    }

    fn has_overrides(&self) -> bool {
        self.output_dir.is_some() || self.dims().iter().any(|(_, v)| v.is_some())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = crate::log::init() {
        eprintln!("Warning: {e}");
    }
    let out = execute(&cli).inspect_err(|e| loge!("CLI: {}", e))?;
    print!("{out}");
    Ok(())
}

/// Run a parsed command and return what it prints.
pub fn execute(cli: &Cli) -> Result<String> {
    let loaded;
    let catalog = match &cli.catalog {
        Some(path) => {
            loaded = Catalog::from_json_path(path)?;
            &loaded
        }
        None => Catalog::builtin(),
    };

    match &cli.command {
        Commands::List { json } => {
            if *json {
                return Ok(join!(&serde_json::to_string_pretty(catalog)?, "\n"));
            }
            let mut out = s!();
            for r in catalog {
                let _ = writeln!(out, "{},{}", r.id, r.name);
            }
            Ok(out)
        }
        Commands::Show { id, json } => {
            let record = catalog
                .find(id)
                .ok_or_else(|| Error::UnknownFastener(id.clone()))?;
            if *json {
                return Ok(join!(&serde_json::to_string_pretty(record)?, "\n"));
            }
            Ok(describe(record))
        }
        Commands::Render(args) => {
            let opts = SiteOptions {
                out_dir: args.out.clone(),
                selected: args.select.clone(),
                all_pages: args.all,
                write_styles: !args.no_styles,
            };
            let written = site::write_site(catalog, &opts)?;
            let mut out = s!();
            for p in written {
                let _ = writeln!(out, "Wrote {}", p.display());
            }
            Ok(out)
        }
        Commands::Command(args) => Ok(join!(&compose(catalog, args)?, "\n")),
    }
}

/// Catalog id without overrides prints the record's own command verbatim;
/// anything else is built from the helper's defaults plus the given flags.
fn compose(catalog: &Catalog, args: &CommandArgs) -> Result<String> {
    let record = catalog.find(&args.fastener);
    if let Some(record) = record {
        if !args.has_overrides() {
            return Ok(record.script.clone());
        }
    }

    let kind = match (FastenerKind::for_record_id(&args.fastener), record) {
        (Some(k), _) => k,
        (None, Some(r)) => return Err(Error::NoHelperKind(r.id.clone())),
        (None, None) => args.fastener.parse::<FastenerKind>()?,
    };

    let mut cmd = ExportCommand::new(kind);
    for (dim, value) in args.dims() {
        if let Some(v) = value {
            cmd.set(dim, v)?;
        }
    }
    if let Some(dir) = &args.output_dir {
        cmd = cmd.output_dir(dir.clone());
    }
    logd!("CLI: composed {} (output {})", cmd, cmd.effective_output_dir().display());
    Ok(cmd.command_line())
}

/// Plain-text rendition of one record.
pub fn describe(r: &FastenerRecord) -> String {
    let mut out = s!();
    let _ = writeln!(out, "{} ({})", r.name, r.id);
    let _ = writeln!(out, "{}", r.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", APPLICATIONS_HEADING, r.applications.join(", "));
    let _ = writeln!(out, "{}: {}", MATERIALS_HEADING, r.materials.join(", "));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", SPECS_HEADING);
    let width = r.specs.labels().map(|l| l.chars().count()).max().unwrap_or(0);
    for (label, value) in r.specs.iter() {
        let _ = writeln!(out, "  {label:<width$}  {value}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", SCRIPT_HEADING);
    let _ = writeln!(out, "  {}", r.script);
    let _ = writeln!(out, "Image: {}", r.image);
    out
}
