/// Switches consumed by the conversion itself. Formatting concerns live with the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Leave texture coordinates out of every vertex, even when the file has some.
    pub disable_texture: bool,
    /// Leave normals out of every vertex, even when the file has some.
    pub disable_normal: bool,
    /// Reorder the vertices by position once the faces are built.
    pub sort_by_position: bool,
}
