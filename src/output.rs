use std::io::{self, Write};

use model::Model;

const INDICES_PER_LINE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Indent {
    fn render(self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(width),
            Self::Tab => "\t".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub indent: Indent,
    /// Significant digits of every vertex component.
    pub precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: Indent::Spaces(4),
            precision: 5,
        }
    }
}

/// Writes the vertex buffer as `let vbo = [...]`, one vertex per line, then the index buffer as
/// `let ebo = [...]`, one triangle per line.
pub fn write_model(out: &mut impl Write, model: &Model, options: &FormatOptions) -> io::Result<()> {
    let indent = options.indent.render();

    let vertex_data: Vec<String> = model
        .vertex_data()
        .into_iter()
        .map(|component| format_number(component, options.precision))
        .collect();
    write_array(out, "vbo", &vertex_data, model.stride(), &indent)?;

    let vertex_indices: Vec<String> = model
        .vertex_indices()
        .iter()
        .map(ToString::to_string)
        .collect();
    write_array(out, "ebo", &vertex_indices, INDICES_PER_LINE, &indent)
}

fn write_array(
    out: &mut impl Write,
    name: &str,
    values: &[String],
    per_line: usize,
    indent: &str,
) -> io::Result<()> {
    write!(out, "let {name} = [")?;
    for line in values.chunks(per_line.max(1)) {
        write!(out, "\n{indent}")?;
        for (i, value) in line.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{value},")?;
        }
    }
    write!(out, "\n];\n\n")
}

/// Formats `value` with `precision` significant digits the way C's `%g` does: fixed notation
/// unless the decimal exponent is below -4 or at least `precision`, trailing zeros removed.
pub fn format_number(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0. || !value.is_finite() {
        return value.to_string();
    }

    // Rounding can carry into the next power of ten, so the exponent is read back from the
    // rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction_zeros(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
