// src/export.rs
//
// Composes command lines for the FreeCAD export helper. The helper itself is
// never run from here; we only build the text a user pastes into a shell.

use std::fmt::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::consts::EXPORT_SCRIPT;
use crate::error::{Error, Result};

// Helper-script defaults (millimetres)
pub const DEFAULT_DIAMETER: f64 = 12.0;
pub const DEFAULT_LENGTH: f64 = 40.0;
pub const DEFAULT_OUTER: f64 = 24.0;
pub const DEFAULT_THICKNESS: f64 = 4.0;
pub const DEFAULT_GRIP: f64 = 6.0;
pub const DEFAULT_OUTPUT_DIR: &str = "exports";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FastenerKind {
    HexBolt,
    SocketCap,
    HexNut,
    FlatWasher,
    BlindRivet,
}

/// Dimension flags, in the order they are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    Diameter,
    Length,
    HeadHeight,
    HeadWidth,
    Outer,
    Thickness,
    Grip,
}

impl Dim {
    pub const ALL: [Dim; 7] = [
        Dim::Diameter,
        Dim::Length,
        Dim::HeadHeight,
        Dim::HeadWidth,
        Dim::Outer,
        Dim::Thickness,
        Dim::Grip,
    ];

    pub fn flag(self) -> &'static str {
        match self {
            Dim::Diameter => "diameter",
            Dim::Length => "length",
            Dim::HeadHeight => "head-height",
            Dim::HeadWidth => "head-width",
            Dim::Outer => "outer",
            Dim::Thickness => "thickness",
            Dim::Grip => "grip",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FastenerKind {
    pub const ALL: [FastenerKind; 5] = [
        FastenerKind::HexBolt,
        FastenerKind::SocketCap,
        FastenerKind::HexNut,
        FastenerKind::FlatWasher,
        FastenerKind::BlindRivet,
    ];

    /// Value of the helper's `--fastener` flag.
    pub fn as_arg(self) -> &'static str {
        match self {
            FastenerKind::HexBolt => "hex_bolt",
            FastenerKind::SocketCap => "socket_cap",
            FastenerKind::HexNut => "hex_nut",
            FastenerKind::FlatWasher => "flat_washer",
            FastenerKind::BlindRivet => "blind_rivet",
        }
    }

    /// Kind generated for a builtin catalog id.
    pub fn for_record_id(id: &str) -> Option<Self> {
        match id {
            "hex-bolt" => Some(FastenerKind::HexBolt),
            "socket-cap-screw" => Some(FastenerKind::SocketCap),
            "hex-nut" => Some(FastenerKind::HexNut),
            "flat-washer" => Some(FastenerKind::FlatWasher),
            "blind-rivet" => Some(FastenerKind::BlindRivet),
            _ => None,
        }
    }

    /// Dimension flags the helper reads when building this shape.
    pub fn dims(self) -> &'static [Dim] {
        use Dim::*;
        match self {
            FastenerKind::HexBolt | FastenerKind::SocketCap => &[Diameter, Length, HeadHeight, HeadWidth],
            FastenerKind::HexNut => &[Diameter, HeadWidth, Thickness],
            FastenerKind::FlatWasher => &[Diameter, Outer, Thickness],
            FastenerKind::BlindRivet => &[Diameter, Grip],
        }
    }

    pub fn accepts(self, dim: Dim) -> bool {
        self.dims().contains(&dim)
    }
}

impl fmt::Display for FastenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

impl FromStr for FastenerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FastenerKind::ALL
            .into_iter()
            .find(|k| k.as_arg() == s)
            .ok_or_else(|| Error::UnknownKind(s!(s)))
    }
}

/// One helper invocation. Unset dimensions fall back to the helper's defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportCommand {
    kind: FastenerKind,
    dims: [Option<f64>; 7],
    output_dir: Option<PathBuf>,
}

impl ExportCommand {
    pub fn new(kind: FastenerKind) -> Self {
        Self { kind, dims: [None; 7], output_dir: None }
    }

    pub fn kind(&self) -> FastenerKind {
        self.kind
    }

    /// Set a dimension. Rejects flags the shape ignores and non-positive values.
    pub fn set(&mut self, dim: Dim, value: f64) -> Result<&mut Self> {
        if !self.kind.accepts(dim) {
            return Err(Error::IrrelevantArgument { kind: self.kind.as_arg(), arg: dim.flag() });
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidDimension { arg: dim.flag(), value });
        }
        self.dims[dim.index()] = Some(value);
        Ok(self)
    }

    pub fn with(mut self, dim: Dim, value: f64) -> Result<Self> {
        self.set(dim, value)?;
        Ok(self)
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn get(&self, dim: Dim) -> Option<f64> {
        self.dims[dim.index()]
    }

    /// Value the helper will actually use for `dim`, `None` for derived
    /// dimensions (head size) left unset.
    pub fn effective(&self, dim: Dim) -> Option<f64> {
        self.get(dim).or(match dim {
            Dim::Diameter => Some(DEFAULT_DIAMETER),
            Dim::Length => Some(DEFAULT_LENGTH),
            Dim::Outer => Some(DEFAULT_OUTER),
            Dim::Thickness => Some(DEFAULT_THICKNESS),
            Dim::Grip => Some(DEFAULT_GRIP),
            Dim::HeadHeight | Dim::HeadWidth => None,
        })
    }

    /// Directory the helper writes into; its own default when unset.
    pub fn effective_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Copy-paste command line, flags in fixed order.
    pub fn command_line(&self) -> String {
        let mut out = join!(EXPORT_SCRIPT, " --fastener ", self.kind.as_arg());
        if let Some(dir) = &self.output_dir {
            let _ = write!(out, " --output-dir {}", dir.display());
        }
        for dim in Dim::ALL {
            if let Some(v) = self.get(dim) {
                let _ = write!(out, " --{} {}", dim.flag(), v);
            }
        }
        out
    }
}

impl fmt::Display for ExportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}
