/// Fan triangulation from the first corner: `(0, i, i + 1)` for every `i` in `1..degree - 1`.
///
/// Only correct for convex faces, which is all a triangle or a quad can be asked to be here.
pub fn triangulate_face(degree: usize) -> impl Iterator<Item = usize> {
    (1..degree.saturating_sub(1)).flat_map(|i| [0, i, i + 1])
}
