use std::io::BufRead;

use log::debug;
use rs42::extensions::{vec::TryPush, PipeLine};

use crate::vertex::{Normal, Position, TextureCoordinate};

use super::{
    tokenize::{tokenize, FieldMode},
    AttributeKind, LineReader, ObjParsingError, ObjParsingErrorDetail,
};

const MAX_ATTRIBUTE_COMPONENTS: usize = 3;

/// The attribute data of a file, each block 1-indexed by the faces.
#[derive(Debug, Default)]
pub struct AttributeBlocks {
    pub positions: Vec<Position>,
    pub texture_coordinates: Vec<TextureCoordinate>,
    pub normals: Vec<Normal>,
}

impl AttributeBlocks {
    /// Reads the position, texture coordinate and normal blocks, in that order.
    /// On success the reader is left on the first line after the normals.
    pub fn read<R: BufRead>(lines: &mut LineReader<R>) -> Result<Self, ObjParsingError> {
        let positions = read_attribute_block(lines, AttributeKind::Position)?;
        if positions.is_empty() {
            return Err(ObjParsingError::new(
                ObjParsingErrorDetail::NoVertexPositions,
            ));
        }
        expect_more_lines(lines, AttributeKind::Position)?;

        let texture_coordinates = read_attribute_block(lines, AttributeKind::TextureCoordinate)?;
        expect_more_lines(lines, AttributeKind::TextureCoordinate)?;

        let normals = read_attribute_block(lines, AttributeKind::Normal)?;
        expect_more_lines(lines, AttributeKind::Normal)?;

        Self {
            positions,
            texture_coordinates,
            normals,
        }
        .pipe(Ok)
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    line.len() < 2 || line.starts_with('#')
}

fn read_attribute_block<R: BufRead, const N: usize>(
    lines: &mut LineReader<R>,
    kind: AttributeKind,
) -> Result<Vec<[f64; N]>, ObjParsingError> {
    let mut block = Vec::new();

    while let Some(line) = lines.peek()? {
        if is_blank_or_comment(line) {
            lines.advance();
            continue;
        }
        if !line.starts_with(kind.tag()) {
            break;
        }

        let pushed = parse_attribute_line::<N>(line, kind).and_then(|attribute| {
            block
                .try_push(attribute)
                .map_err(ObjParsingErrorDetail::AllocationFailure)
        });
        pushed.map_err(|detail| lines.error(detail))?;
        lines.advance();
    }

    debug!("Parsed {} {kind}", block.len());
    Ok(block)
}

fn expect_more_lines<R: BufRead>(
    lines: &mut LineReader<R>,
    kind: AttributeKind,
) -> Result<(), ObjParsingError> {
    if lines.peek()?.is_none() {
        return Err(ObjParsingError::new(
            ObjParsingErrorDetail::UnexpectedEndOfFile(kind),
        ));
    }
    Ok(())
}

fn parse_attribute_line<const N: usize>(
    line: &str,
    kind: AttributeKind,
) -> Result<[f64; N], ObjParsingErrorDetail> {
    let mut components = [0.; MAX_ATTRIBUTE_COMPONENTS];
    let count = tokenize(
        line,
        &mut components,
        FieldMode::SkipKeyword,
        ' ',
        0.,
        str::parse::<f64>,
    )
    .map_err(|err| ObjParsingErrorDetail::InvalidComponent(kind, err))?;

    if count == 0 {
        return Err(ObjParsingErrorDetail::NoComponents(kind));
    }
    Ok(std::array::from_fn(|i| components[i]))
}
