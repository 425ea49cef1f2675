mod model;
mod obj;
mod options;
mod vertex;

pub use model::{Model, VertexIndex};
pub use obj::{AttributeKind, ObjParsingError, ObjParsingErrorDetail};
pub use options::ConvertOptions;
pub use vertex::{Normal, Position, TextureCoordinate, Vertex};
