use std::fmt;
use std::str::FromStr;

use crate::foundation::error::DuffleError;

/// A Porter-Duff composite operator.
///
/// The operator decides, independently of color, which fraction of source
/// and backdrop coverage survives into the output. Wire and CLI names are
/// the snake_case variant names (`"src_over"`, `"dst_atop"`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeOp {
    /// Neither input survives.
    Clear,
    /// Source only (Porter-Duff "src").
    Copy,
    /// Backdrop only.
    Dst,
    #[default]
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcAtop,
    DstAtop,
    Xor,
}

impl CompositeOp {
    /// All twelve operators, in the classical order.
    pub const ALL: [CompositeOp; 12] = [
        CompositeOp::Clear,
        CompositeOp::Copy,
        CompositeOp::Dst,
        CompositeOp::SrcOver,
        CompositeOp::DstOver,
        CompositeOp::SrcIn,
        CompositeOp::DstIn,
        CompositeOp::SrcOut,
        CompositeOp::DstOut,
        CompositeOp::SrcAtop,
        CompositeOp::DstAtop,
        CompositeOp::Xor,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            CompositeOp::Clear => "clear",
            CompositeOp::Copy => "copy",
            CompositeOp::Dst => "dst",
            CompositeOp::SrcOver => "src_over",
            CompositeOp::DstOver => "dst_over",
            CompositeOp::SrcIn => "src_in",
            CompositeOp::DstIn => "dst_in",
            CompositeOp::SrcOut => "src_out",
            CompositeOp::DstOut => "dst_out",
            CompositeOp::SrcAtop => "src_atop",
            CompositeOp::DstAtop => "dst_atop",
            CompositeOp::Xor => "xor",
        }
    }

    /// Coverage factor pair `(fa, fb)` for the given source and backdrop
    /// alphas. Output alpha is always `sa * fa + ba * fb`.
    pub fn factors(self, src_alpha: f64, dst_alpha: f64) -> (f64, f64) {
        let (sa, ba) = (src_alpha, dst_alpha);
        match self {
            CompositeOp::Clear => (0.0, 0.0),
            CompositeOp::Copy => (1.0, 0.0),
            CompositeOp::Dst => (0.0, 1.0),
            CompositeOp::SrcOver => (1.0, 1.0 - sa),
            CompositeOp::DstOver => (1.0 - ba, 1.0),
            CompositeOp::SrcIn => (ba, 0.0),
            CompositeOp::DstIn => (0.0, sa),
            CompositeOp::SrcOut => (1.0 - ba, 0.0),
            CompositeOp::DstOut => (0.0, 1.0 - sa),
            CompositeOp::SrcAtop => (ba, 1.0 - sa),
            CompositeOp::DstAtop => (1.0 - ba, sa),
            CompositeOp::Xor => (1.0 - ba, 1.0 - sa),
        }
    }
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompositeOp {
    type Err = DuffleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        CompositeOp::ALL
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .ok_or_else(|| DuffleError::UnknownCompositeOp(s.to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
