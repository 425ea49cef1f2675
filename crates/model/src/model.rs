mod model_builder;
mod sort_by_position;

use std::io::BufRead;

use log::{info, warn};
use model_builder::ModelBuilder;
use rs42::extensions::PipeLine;

use crate::{
    obj::{is_face_line, parse_face_line, AttributeBlocks, LineReader, ObjParsingError},
    vertex::Vertex,
    ConvertOptions,
};

pub type VertexIndex = u32;

/// A triangle list ready to be uploaded: deduplicated vertices, the indices into them and the
/// number of components per vertex.
#[derive(Debug)]
pub struct Model {
    vertices: Box<[Vertex]>,
    vertex_indices: Box<[VertexIndex]>,
    stride: usize,
}


// Constructors:

impl Model {
    /// Converts an OBJ stream whose positions, texture coordinates and normals come as three
    /// consecutive blocks ahead of the faces.
    ///
    /// Any malformed line aborts the whole conversion.
    pub fn parse(reader: impl BufRead, options: ConvertOptions) -> Result<Self, ObjParsingError> {
        let mut lines = LineReader::new(reader);
        let blocks = AttributeBlocks::read(&mut lines)?;
        let mut builder = ModelBuilder::new(&blocks, options);

        while let Some(line) = lines.peek()? {
            if is_face_line(line) {
                let added = parse_face_line(line).and_then(|face| builder.add_face(&face));
                added.map_err(|detail| lines.error(detail))?;
            }
            lines.advance();
        }

        let mut model = builder.build();
        if model.vertex_indices.is_empty() {
            warn!("No faces found, the model is empty");
        }
        if options.sort_by_position {
            model.sort_by_position();
        }

        info!(
            "Built {} vertices and {} triangles with a stride of {}",
            model.vertices.len(),
            model.triangle_count(),
            model.stride
        );
        model.pipe(Ok)
    }
}


// Getters:

impl Model {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_indices(&self) -> &[VertexIndex] {
        &self.vertex_indices
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_indices.len() / 3
    }

    /// The vertex buffer flattened into interleaved components.
    pub fn vertex_data(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|vertex| vertex.components()).collect()
    }
}
