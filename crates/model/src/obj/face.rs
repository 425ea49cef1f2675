mod parse_corner;
mod triangulate_face;

use std::convert::Infallible;

pub use parse_corner::{parse_corner, CornerReference};
use triangulate_face::triangulate_face;

use super::{
    tokenize::{tokenize, FieldMode},
    ObjParsingErrorDetail,
};

const MAX_FACE_CORNERS: usize = 4;

/// A triangle or a quad, its corners borrowed from the face line.
pub struct Face<'a> {
    corners: [&'a str; MAX_FACE_CORNERS],
    degree: usize,
}

impl<'a> Face<'a> {
    /// Corner references of the triangles covering this face, three per triangle.
    pub fn triangle_corners(&self) -> impl Iterator<Item = &'a str> + '_ {
        triangulate_face(self.degree).map(move |i| self.corners[i])
    }
}

pub fn is_face_line(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('f')
}

/// Reads the first four corners of a face line. Corners past the fourth are ignored.
pub fn parse_face_line(line: &str) -> Result<Face<'_>, ObjParsingErrorDetail> {
    let mut corners = [""; MAX_FACE_CORNERS];
    let degree = tokenize(
        line,
        &mut corners,
        FieldMode::SkipKeyword,
        ' ',
        "",
        Ok::<_, Infallible>,
    )
    .unwrap_or_else(|never| match never {});

    if degree < 3 {
        return Err(ObjParsingErrorDetail::FaceMustBeTriangleOrQuad(degree));
    }

    Ok(Face { corners, degree })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn triangle_keeps_its_corners() {
        let face = parse_face_line("f 1/1/1 2/2/2 3/3/3").unwrap();
        let corners: Vec<_> = face.triangle_corners().collect();
        assert_eq!(corners, ["1/1/1", "2/2/2", "3/3/3"]);
    }

    #[test]
    fn quad_is_split_from_its_first_corner() {
        let face = parse_face_line("f a b c d").unwrap();
        let corners: Vec<_> = face.triangle_corners().collect();
        assert_eq!(corners, ["a", "b", "c", "a", "c", "d"]);
    }

    #[test]
    fn two_corners_are_rejected() {
        assert!(matches!(
            parse_face_line("f 1 2"),
            Err(ObjParsingErrorDetail::FaceMustBeTriangleOrQuad(2))
        ));
        assert!(matches!(
            parse_face_line("f"),
            Err(ObjParsingErrorDetail::FaceMustBeTriangleOrQuad(0))
        ));
    }

    #[test]
    fn pentagon_is_read_as_its_first_quad() {
        let face = parse_face_line("f a b c d e").unwrap();
        let corners: Vec<_> = face.triangle_corners().collect();
        assert_eq!(corners, ["a", "b", "c", "a", "c", "d"]);
    }

    #[test]
    fn face_lines_are_recognized_by_their_first_character() {
        assert!(is_face_line("f 1 2 3"));
        assert!(!is_face_line("f"));
        assert!(!is_face_line("s off"));
        assert!(!is_face_line(""));
    }
}
