use std::path::{Path, PathBuf};

use clap::Parser;
use model::ConvertOptions;

use crate::output::{FormatOptions, Indent};

/// Convert a Wavefront OBJ model into interleaved vertex and index array literals
#[derive(Parser, Debug)]
#[command(name = "obj-to-array", version, about)]
pub struct Args {
    /// OBJ file to read, stdin when absent or "-"
    pub input: Option<PathBuf>,

    /// File to write, stdout when absent or "-"
    pub output: Option<PathBuf>,

    /// Leave texture coordinates out of the vertices
    #[arg(long)]
    pub no_texture: bool,

    /// Leave normals out of the vertices
    #[arg(long)]
    pub no_normal: bool,

    /// Order vertices by z then x, remapping the indices
    #[arg(long)]
    pub sort_by_position: bool,

    /// Spaces before each array line
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    /// Indent array lines with a tab instead of spaces
    #[arg(long, conflicts_with = "indent")]
    pub tabs: bool,

    /// Significant digits of vertex components
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=17))]
    pub precision: u32,
}

impl Args {
    pub fn input_path(&self) -> Option<&Path> {
        standard_stream_or_path(self.input.as_deref())
    }

    pub fn output_path(&self) -> Option<&Path> {
        standard_stream_or_path(self.output.as_deref())
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            disable_texture: self.no_texture,
            disable_normal: self.no_normal,
            sort_by_position: self.sort_by_position,
        }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            indent: if self.tabs {
                Indent::Tab
            } else {
                Indent::Spaces(self.indent)
            },
            precision: self.precision as usize,
        }
    }
}

fn standard_stream_or_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|path| *path != Path::new("-"))
}
