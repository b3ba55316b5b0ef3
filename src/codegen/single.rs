//! # Single Bitmap Emitter
//!
//! One PROGMEM array declaration with a size comment and nothing else.

use super::ir::Artifact;
use super::{Asset, EmitOptions};

pub fn emit(asset: &Asset<'_>, options: &EmitOptions) -> Artifact {
    let mut artifact = Artifact::new();
    artifact.comment(format!("{}, {}", asset.summary(), asset.count_label()));
    artifact.push(asset.array(asset.identifier, options.values_per_line));
    artifact
}
