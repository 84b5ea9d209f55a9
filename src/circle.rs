use wasm_bindgen::prelude::*;

use crate::point::Point;
use crate::rectangle::Rectangle;

/// A circle around a shared center point.
///
/// A negative radius is accepted but intersects nothing, since
/// distances are never negative.
#[wasm_bindgen]
pub struct Circle {
    center: Point,
    radius: f64,
}

#[wasm_bindgen]
impl Circle {
    #[wasm_bindgen(constructor)]
    pub fn new(center: &Point, radius: f64) -> Circle {
        Circle {
            center: center.clone(),
            radius,
        }
    }

    /// Reinitialize in place. The center point is mutated, not replaced,
    /// so other holders of the same point observe the new position.
    pub fn init(&mut self, x: f64, y: f64, radius: f64) {
        self.center.set_x(x);
        self.center.set_y(y);
        self.radius = radius;
    }

    /// Another handle to the shared center point.
    #[wasm_bindgen(getter)]
    pub fn center(&self) -> Point {
        self.center.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[wasm_bindgen(setter)]
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Externally tangent circles count as intersecting.
    pub fn intersects(&self, circle: &Circle) -> bool {
        let dx = self.center.x() - circle.center.x();
        let dy = self.center.y() - circle.center.y();
        (dx * dx + dy * dy).sqrt() <= self.radius + circle.radius
    }

    /// A point exactly on the circumference counts as intersecting.
    pub fn intersects_with_point(&self, point: &Point) -> bool {
        let dx = self.center.x() - point.x();
        let dy = self.center.y() - point.y();
        (dx * dx + dy * dy).sqrt() <= self.radius
    }

    /// Closest-point test against an axis-aligned rectangle, tangency
    /// included.
    pub fn intersects_with_rectangle(&self, rectangle: &Rectangle) -> bool {
        let center = rectangle.center();
        let half_width = rectangle.width() / 2.0;
        let half_height = rectangle.height() / 2.0;

        let dist_x = (self.center.x() - center.x()).abs();
        let dist_y = (self.center.y() - center.y()).abs();

        // Separated along an axis beyond the circle's reach.
        if dist_x > half_width + self.radius {
            return false;
        }
        if dist_y > half_height + self.radius {
            return false;
        }

        // Center projects onto the rectangle's span on either axis.
        if dist_x <= half_width {
            return true;
        }
        if dist_y <= half_height {
            return true;
        }

        // Only the nearest corner can still be in reach.
        let dx = dist_x - half_width;
        let dy = dist_y - half_height;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
