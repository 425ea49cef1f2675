pub type Position = [f64; 3];
pub type TextureCoordinate = [f64; 2];
pub type Normal = [f64; 3];

/// One interleaved record of the vertex buffer.
///
/// The optional attributes are only set when the face corner that created the vertex referenced
/// them and they were not disabled, so two vertices of the same model can differ in length.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    position: Position,
    texture_coordinate: Option<TextureCoordinate>,
    normal: Option<Normal>,
}

impl Vertex {
    pub fn new(
        position: Position,
        texture_coordinate: Option<TextureCoordinate>,
        normal: Option<Normal>,
    ) -> Self {
        Self {
            position,
            texture_coordinate,
            normal,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn texture_coordinate(&self) -> Option<&TextureCoordinate> {
        self.texture_coordinate.as_ref()
    }

    pub fn normal(&self) -> Option<&Normal> {
        self.normal.as_ref()
    }

    /// Components in buffer order: position, then texture coordinate, then normal.
    pub fn components(&self) -> impl Iterator<Item = f64> + '_ {
        self.position
            .iter()
            .chain(self.texture_coordinate.iter().flatten())
            .chain(self.normal.iter().flatten())
            .copied()
    }

    pub fn component_count(&self) -> usize {
        self.position.len()
            + self.texture_coordinate.map_or(0, |t| t.len())
            + self.normal.map_or(0, |n| n.len())
    }
}
