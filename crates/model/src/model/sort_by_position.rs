use std::cmp::Ordering;

use log::debug;

use crate::vertex::Position;

use super::{Model, VertexIndex};

/// Two depths closer than this are treated as equal and ordered by `x` instead.
const DEPTH_EPSILON: f64 = 1e-10;

impl Model {
    /// Reorders the vertex buffer by ascending `z`, then ascending `x` for vertices at the same
    /// depth, and rewrites the index buffer to follow the vertices.
    pub fn sort_by_position(&mut self) {
        let order = stable_order_by(&self.vertices, |a, b| {
            compare_positions(a.position(), b.position())
        });

        let mut new_indices = vec![0; order.len()];
        for (new_index, &old_index) in order.iter().enumerate() {
            new_indices[old_index] = new_index as VertexIndex;
        }

        self.vertices = order
            .iter()
            .map(|&old_index| self.vertices[old_index].clone())
            .collect();
        for index in self.vertex_indices.iter_mut() {
            *index = new_indices[*index as usize];
        }

        debug!("Sorted {} vertices by position", self.vertices.len());
    }
}

fn compare_positions(a: &Position, b: &Position) -> Ordering {
    if (a[2] - b[2]).abs() < DEPTH_EPSILON {
        a[0].total_cmp(&b[0])
    } else {
        a[2].total_cmp(&b[2])
    }
}

/// Indices of `items` in sorted order, equal items keeping their relative order.
///
/// Bottom-up merge sort. `compare` does not have to be transitive: chains of depths each
/// within [`DEPTH_EPSILON`] of the next are not.
fn stable_order_by<T>(items: &[T], mut compare: impl FnMut(&T, &T) -> Ordering) -> Vec<usize> {
    let len = items.len();
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = order.clone();

    let mut width = 1;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let middle = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, middle);

            for slot in &mut merged[start..end] {
                let take_left = right >= end
                    || (left < middle
                        && compare(&items[order[left]], &items[order[right]]) != Ordering::Greater);
                if take_left {
                    *slot = order[left];
                    left += 1;
                } else {
                    *slot = order[right];
                    right += 1;
                }
            }
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }
    order
}
