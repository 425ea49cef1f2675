use crate::obj::{
    tokenize::{tokenize, FieldMode},
    ObjParsingErrorDetail,
};

/// 1-based attribute indices of one face corner. A texture coordinate or normal of 0 is not
/// referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerReference {
    pub position: u32,
    pub texture_coordinate: u32,
    pub normal: u32,
}

/// Parses `pos`, `pos/tex`, `pos//norm` or `pos/tex/norm`.
///
/// Only a missing position is malformed. A position of 0 is kept and fails the bounds check
/// when the corner is resolved.
pub fn parse_corner(corner: &str) -> Result<CornerReference, ObjParsingErrorDetail> {
    let malformed = || ObjParsingErrorDetail::MalformedCorner(corner.to_owned());

    let mut indices = [None; 3];
    tokenize(corner, &mut indices, FieldMode::All, '/', None, |field| {
        field.parse::<u32>().map(Some)
    })
    .map_err(|_| malformed())?;

    let [position, texture_coordinate, normal] = indices;
    Ok(CornerReference {
        position: position.ok_or_else(malformed)?,
        texture_coordinate: texture_coordinate.unwrap_or(0),
        normal: normal.unwrap_or(0),
    })
}
