/*!
Closest-point building blocks used by the distance queries.

- segment:  point/segment and segment/segment nearest points
- circle:   point/circle and segment/circle nearest points (torus core)
- triangle: point/triangle projection, triangle contact and triangle/triangle
- ray:      ray/triangle intersection and ray/mesh crossing counts
*/

pub mod circle;
pub mod ray;
pub mod segment;
pub mod triangle;

pub use circle::{Circle, segment_to_circle_nearest_points};
pub use ray::{ray_mesh_crossings, ray_triangle_intersection, segment_triangle_intersection};
pub use segment::{SegmentRegion, segment_to_point_nearest_point, segment_to_segment_nearest_points};
pub use triangle::{Triangle, closest_point_on_triangle, closest_points_tri_to_tri, triangles_overlap};
