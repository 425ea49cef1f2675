use std::collections::HashMap;

use rs42::extensions::vec::TryPush;

use crate::{
    obj::{
        parse_corner, AttributeBlocks, AttributeKind, CornerReference, Face,
        ObjParsingErrorDetail,
    },
    vertex::Vertex,
    ConvertOptions,
};

use super::{Model, VertexIndex};

/// Turns face corners into a deduplicated vertex buffer and its index buffer.
///
/// Vertices are keyed by the corner text as written in the file, so `1/1/1` and `01/1/1`
/// become two vertices even though they resolve to the same data.
pub(crate) struct ModelBuilder<'a> {
    blocks: &'a AttributeBlocks,
    options: ConvertOptions,

    vertices: Vec<Vertex>,
    vertex_indices: Vec<VertexIndex>,

    vertex_map: HashMap<String, VertexIndex>,
}

impl<'a> ModelBuilder<'a> {
    pub(crate) fn new(blocks: &'a AttributeBlocks, options: ConvertOptions) -> Self {
        Self {
            blocks,
            options,
            vertices: Vec::new(),
            vertex_indices: Vec::new(),
            vertex_map: HashMap::new(),
        }
    }

    pub(crate) fn build(self) -> Model {
        let stride = self.stride();
        Model {
            vertices: self.vertices.into_boxed_slice(),
            vertex_indices: self.vertex_indices.into_boxed_slice(),
            stride,
        }
    }

    /// Components per vertex: the position, plus each optional attribute the file provides and
    /// that was not disabled.
    fn stride(&self) -> usize {
        let mut stride = 3;
        if !self.blocks.texture_coordinates.is_empty() && !self.options.disable_texture {
            stride += 2;
        }
        if !self.blocks.normals.is_empty() && !self.options.disable_normal {
            stride += 3;
        }
        stride
    }

    pub(crate) fn add_face(&mut self, face: &Face) -> Result<(), ObjParsingErrorDetail> {
        face.triangle_corners()
            .try_for_each(|corner| self.add_corner(corner))
    }

    fn add_corner(&mut self, corner: &str) -> Result<(), ObjParsingErrorDetail> {
        if let Some(&index) = self.vertex_map.get(corner) {
            return self
                .vertex_indices
                .try_push(index)
                .map_err(ObjParsingErrorDetail::AllocationFailure);
        }

        let vertex = parse_corner(corner).and_then(|reference| self.resolve(corner, reference))?;

        let index = self.vertices.len() as VertexIndex;
        self.vertices
            .try_push(vertex)
            .map_err(ObjParsingErrorDetail::AllocationFailure)?;
        self.vertex_indices
            .try_push(index)
            .map_err(ObjParsingErrorDetail::AllocationFailure)?;
        self.vertex_map.insert(corner.to_owned(), index);
        Ok(())
    }

    fn resolve(
        &self,
        corner: &str,
        reference: CornerReference,
    ) -> Result<Vertex, ObjParsingErrorDetail> {
        let position = fetch(
            &self.blocks.positions,
            corner,
            AttributeKind::Position,
            reference.position,
        )?;

        let texture_coordinate =
            if reference.texture_coordinate != 0 && !self.options.disable_texture {
                Some(fetch(
                    &self.blocks.texture_coordinates,
                    corner,
                    AttributeKind::TextureCoordinate,
                    reference.texture_coordinate,
                )?)
            } else {
                None
            };

        let normal = if reference.normal != 0 && !self.options.disable_normal {
            Some(fetch(
                &self.blocks.normals,
                corner,
                AttributeKind::Normal,
                reference.normal,
            )?)
        } else {
            None
        };

        Ok(Vertex::new(position, texture_coordinate, normal))
    }
}

fn fetch<T: Copy>(
    block: &[T],
    corner: &str,
    kind: AttributeKind,
    index: u32,
) -> Result<T, ObjParsingErrorDetail> {
    (index as usize)
        .checked_sub(1)
        .and_then(|i| block.get(i))
        .copied()
        .ok_or_else(|| ObjParsingErrorDetail::CornerOutOfBounds {
            corner: corner.to_owned(),
            kind,
            index,
            len: block.len(),
        })
}

#[cfg(test)]
mod test {
    use crate::obj::parse_face_line;

    use super::*;

    fn blocks() -> AttributeBlocks {
        AttributeBlocks {
            positions: vec![[0., 0., 0.], [1., 0., 0.], [0., 1., 0.], [1., 1., 0.]],
            texture_coordinates: vec![[0., 0.], [1., 1.]],
            normals: vec![[0., 0., 1.]],
        }
    }

    fn build(blocks: &AttributeBlocks, options: ConvertOptions, faces: &[&str]) -> Model {
        let mut builder = ModelBuilder::new(blocks, options);
        for line in faces {
            builder.add_face(&parse_face_line(line).unwrap()).unwrap();
        }
        builder.build()
    }

    #[test]
    fn repeated_corner_text_reuses_the_vertex() {
        let blocks = blocks();
        let model = build(
            &blocks,
            ConvertOptions::default(),
            &["f 1/1/1 2/2/1 3/1/1", "f 3/1/1 2/2/1 4/2/1"],
        );
        assert_eq!(model.vertices().len(), 4);
        assert_eq!(model.vertex_indices(), [0, 1, 2, 2, 1, 3]);
    }

    #[test]
    fn lexically_different_corners_are_distinct() {
        let blocks = blocks();
        let model = build(&blocks, ConvertOptions::default(), &["f 1/1/1 01/1/1 2/1/1"]);
        assert_eq!(model.vertices().len(), 3);
        assert_eq!(model.vertices()[0], model.vertices()[1]);
        assert_eq!(model.vertex_indices(), [0, 1, 2]);
    }

    #[test]
    fn disabled_attributes_are_left_out() {
        let blocks = blocks();
        let options = ConvertOptions {
            disable_texture: true,
            disable_normal: true,
            ..Default::default()
        };
        let model = build(&blocks, options, &["f 1/1/1 2/2/1 3/1/1"]);
        assert_eq!(model.stride(), 3);
        assert!(model.vertices().iter().all(|v| v.component_count() == 3));
    }

    #[test]
    fn disabled_attributes_are_not_bounds_checked() {
        let blocks = blocks();
        let options = ConvertOptions {
            disable_texture: true,
            ..Default::default()
        };
        let model = build(&blocks, options, &["f 1/9/1 2/9/1 3/9/1"]);
        assert_eq!(model.stride(), 6);
        assert_eq!(model.vertex_data().len(), 18);
    }

    #[test]
    fn out_of_bounds_reference_names_the_attribute() {
        let blocks = blocks();
        let mut builder = ModelBuilder::new(&blocks, ConvertOptions::default());
        let err = builder
            .add_face(&parse_face_line("f 1//1 2//2 3//1").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ObjParsingErrorDetail::CornerOutOfBounds {
                kind: AttributeKind::Normal,
                index: 2,
                len: 1,
                ..
            }
        ));
    }

    #[test]
    fn built_model_carries_the_stride() {
        let blocks = blocks();
        let model = build(&blocks, ConvertOptions::default(), &["f 1/1/1 2/2/1 3/1/1"]);
        assert_eq!(model.stride(), 8);
        assert_eq!(model.vertex_data().len(), 3 * 8);
    }

    #[test]
    fn position_zero_is_out_of_bounds() {
        let blocks = blocks();
        let mut builder = ModelBuilder::new(&blocks, ConvertOptions::default());
        let err = builder
            .add_face(&parse_face_line("f 0 2 3").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ObjParsingErrorDetail::CornerOutOfBounds {
                kind: AttributeKind::Position,
                index: 0,
                len: 4,
                ..
            }
        ));
    }

    #[test]
    fn malformed_corner_is_reported() {
        let blocks = blocks();
        let mut builder = ModelBuilder::new(&blocks, ConvertOptions::default());
        let err = builder
            .add_face(&parse_face_line("f 1 x 3").unwrap())
            .unwrap_err();
        assert!(matches!(err, ObjParsingErrorDetail::MalformedCorner(corner) if corner == "x"));
    }
}
