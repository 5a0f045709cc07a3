//! Frame geometry for the driving scene
//!
//! Builds the colored geometry drawn around the sprite: the path, the
//! outline of the sprite's bounding box and the waypoint markers. Lines go
//! under the sprite, triangles over it.

use drivepath_core::{Path, Sprite2D};

use crate::color::Color;
use crate::draw_list::DrawList;

/// Colors and sizes of the scene decorations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub path_color: Color,
    pub outline_color: Color,
    pub outline_thickness: f32,
    pub waypoint_color: Color,
    pub waypoint_radius: f32,
    pub waypoint_segments: u32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            path_color: Color::RED,
            outline_color: Color::RED,
            outline_thickness: 3.0,
            waypoint_color: Color::RED,
            waypoint_radius: 15.0,
            waypoint_segments: 30,
        }
    }
}

/// Build the path, sprite outline and waypoint geometry into `draw_list`
///
/// `draw_list` is cleared first so it can be reused every frame.
pub fn build_scene(draw_list: &mut DrawList, path: &Path, sprite: &Sprite2D, style: &SceneStyle) {
    draw_list.clear();

    draw_list.closed_polyline(path.points(), style.path_color);

    draw_list.rect_outline(
        sprite.global_bounds(),
        style.outline_thickness,
        style.outline_color,
    );

    for point in path.points() {
        draw_list.filled_circle(
            *point,
            style.waypoint_radius,
            style.waypoint_segments,
            style.waypoint_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivepath_math::Vec2;

    #[test]
    fn test_demo_scene_counts() {
        let path = Path::demo();
        let sprite = Sprite2D::new(Vec2::new(200.0, 100.0)).with_scale(0.2);
        let mut list = DrawList::new();

        build_scene(&mut list, &path, &sprite, &SceneStyle::default());

        // One line per segment including the closing one
        assert_eq!(list.line_count(), 7);
        // Outline (8 triangles) + 7 circles of 30 triangles
        assert_eq!(list.triangle_count(), 8 + 7 * 30);
    }

    #[test]
    fn test_build_scene_reuses_list() {
        let path = Path::demo();
        let sprite = Sprite2D::new(Vec2::new(10.0, 10.0));
        let mut list = DrawList::new();

        build_scene(&mut list, &path, &sprite, &SceneStyle::default());
        build_scene(&mut list, &path, &sprite, &SceneStyle::default());

        assert_eq!(list.line_count(), 7);
    }

    #[test]
    fn test_outline_surrounds_sprite() {
        let path = Path::demo();
        let mut sprite = Sprite2D::new(Vec2::new(200.0, 100.0)).with_scale(0.2);
        sprite.place(Vec2::new(100.0, -100.0), 0.0);
        let style = SceneStyle {
            waypoint_segments: 3,
            ..SceneStyle::default()
        };
        let mut list = DrawList::new();

        build_scene(&mut list, &path, &sprite, &style);

        // The outline is the first 24 triangle vertices
        let outline = &list.triangle_vertices()[..24];
        let xs = outline.iter().map(|v| v.position[0]);
        let min_x = xs.clone().fold(f32::MAX, f32::min);
        let max_x = xs.fold(f32::MIN, f32::max);
        assert!((min_x - (100.0 - 20.0 - 3.0)).abs() < 1e-3);
        assert!((max_x - (100.0 + 20.0 + 3.0)).abs() < 1e-3);
    }
}
