mod attribute_block;
mod face;
mod line_reader;
mod tokenize;

pub(crate) use attribute_block::AttributeBlocks;
pub(crate) use face::{is_face_line, parse_corner, parse_face_line, CornerReference, Face};
pub(crate) use line_reader::LineReader;

use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{Debug, Display},
    io,
    num::ParseFloatError,
};

/// The three attribute categories, in the order they must appear in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Position,
    TextureCoordinate,
    Normal,
}

impl AttributeKind {
    /// The first two characters of every line of this category.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Position => "v ",
            Self::TextureCoordinate => "vt",
            Self::Normal => "vn",
        }
    }
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position => write!(f, "vertex positions"),
            Self::TextureCoordinate => write!(f, "texture coordinates"),
            Self::Normal => write!(f, "vertex normals"),
        }
    }
}

pub struct ObjParsingError {
    line: Option<(usize, String)>,
    detail: ObjParsingErrorDetail,
}

#[derive(Debug)]
pub enum ObjParsingErrorDetail {
    FailedToReadFile(io::Error),

    AllocationFailure(TryReserveError),

    InvalidComponent(AttributeKind, ParseFloatError),
    NoComponents(AttributeKind),
    NoVertexPositions,
    UnexpectedEndOfFile(AttributeKind),

    FaceMustBeTriangleOrQuad(usize),
    MalformedCorner(String),
    CornerOutOfBounds {
        corner: String,
        kind: AttributeKind,
        index: u32,
        len: usize,
    },
}

impl ObjParsingError {
    pub(crate) fn new(detail: ObjParsingErrorDetail) -> Self {
        Self { line: None, detail }
    }

    pub(crate) fn at_line(line_number: usize, line: String, detail: ObjParsingErrorDetail) -> Self {
        Self {
            line: Some((line_number, line)),
            detail,
        }
    }

    /// 1-based number and content of the offending line, when there is one.
    pub fn line(&self) -> Option<(usize, &str)> {
        self.line
            .as_ref()
            .map(|(number, content)| (*number, content.as_str()))
    }

    pub fn detail(&self) -> &ObjParsingErrorDetail {
        &self.detail
    }
}

impl Display for ObjParsingErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailedToReadFile(err) => write!(f, "Failed to read file: {err}"),
            Self::AllocationFailure(err) => write!(f, "Allocation failure: {err}"),
            Self::InvalidComponent(kind, err) => write!(f, "Malformed {kind}: {err}"),
            Self::NoComponents(kind) => write!(f, "Malformed {kind}: no components"),
            Self::NoVertexPositions => write!(f, "Could not parse any vertex positions"),
            Self::UnexpectedEndOfFile(kind) => write!(f, "Unexpected end of file after {kind}"),
            Self::FaceMustBeTriangleOrQuad(corners) => write!(
                f,
                "All faces must be triangles or quads, found a face with {corners} corners"
            ),
            Self::MalformedCorner(corner) => write!(f, "Malformed vertex \"{corner}\""),
            Self::CornerOutOfBounds {
                corner,
                kind,
                index,
                len,
            } => write!(
                f,
                "Vertex data out of bounds: \"{corner}\" references {kind} {index} but only {len} exist"
            ),
        }
    }
}

impl Debug for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(
                f,
                "ObjParsingError {{\n\tline: {}\n\tline_content: \"{}\"\n\tdetails: {:?}\n}}",
                line.0, line.1, self.detail,
            );
        }
        write!(f, "ObjParsingError({:?})", self.detail)
    }
}

impl Display for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line.as_ref() {
            Some((number, content)) => write!(f, "{} (line {number}: \"{content}\")", self.detail),
            None => write!(f, "{}", self.detail),
        }
    }
}

impl Error for ObjParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.detail {
            ObjParsingErrorDetail::FailedToReadFile(err) => Some(err),
            ObjParsingErrorDetail::AllocationFailure(err) => Some(err),
            ObjParsingErrorDetail::InvalidComponent(_, err) => Some(err),
            _ => None,
        }
    }
}
