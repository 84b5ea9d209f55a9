use wasm_bindgen::prelude::*;

use crate::point::Point;

/// An axis-aligned box around a shared center point.
///
/// `area` is cached and recomputed by every mutating operation. The
/// corner accessors are computed on every read and never stored: the
/// center can move through an aliased `Point` handle without any method
/// here running, so a stored corner could go stale.
#[wasm_bindgen]
pub struct Rectangle {
    width: f64,
    height: f64,
    area: f64,
    center: Point,
}

#[wasm_bindgen]
impl Rectangle {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, center: &Point) -> Rectangle {
        Rectangle {
            width,
            height,
            area: width * height,
            center: center.clone(),
        }
    }

    /// Reinitialize in place. The center point is mutated, not replaced,
    /// so other holders of the same point observe the new position.
    pub fn init(&mut self, width: f64, height: f64, center_x: f64, center_y: f64) {
        self.width = width;
        self.height = height;
        self.center.set_x(center_x);
        self.center.set_y(center_y);
        self.area = width * height;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.area = width * height;
    }

    pub fn move_center_to(&mut self, x: f64, y: f64) {
        self.center.set_x(x);
        self.center.set_y(y);
    }

    pub fn move_center_by(&mut self, delta_x: f64, delta_y: f64) {
        self.center.set_x(self.center.x() + delta_x);
        self.center.set_y(self.center.y() + delta_y);
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(setter)]
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
        self.area = width * self.height;
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[wasm_bindgen(setter)]
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
        self.area = self.width * height;
    }

    #[wasm_bindgen(getter)]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Another handle to the shared center point.
    #[wasm_bindgen(getter)]
    pub fn center(&self) -> Point {
        self.center.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn top_left_x(&self) -> f64 {
        self.center.x() - self.width / 2.0
    }

    #[wasm_bindgen(getter)]
    pub fn top_left_y(&self) -> f64 {
        self.center.y() - self.height / 2.0
    }

    #[wasm_bindgen(getter)]
    pub fn top_right_x(&self) -> f64 {
        self.center.x() + self.width / 2.0
    }

    #[wasm_bindgen(getter)]
    pub fn top_right_y(&self) -> f64 {
        self.center.y() - self.height / 2.0
    }

    #[wasm_bindgen(getter)]
    pub fn bottom_left_x(&self) -> f64 {
        self.center.x() - self.width / 2.0
    }

    #[wasm_bindgen(getter)]
    pub fn bottom_left_y(&self) -> f64 {
        self.center.y() + self.height / 2.0
    }

    #[wasm_bindgen(getter)]
    pub fn bottom_right_x(&self) -> f64 {
        self.center.x() + self.width / 2.0
    }

    #[wasm_bindgen(getter)]
    pub fn bottom_right_y(&self) -> f64 {
        self.center.y() + self.height / 2.0
    }

    /// Axis-aligned overlap test. Rectangles sharing only an edge or a
    /// corner still intersect.
    pub fn intersects(&self, rectangle: &Rectangle) -> bool {
        !(self.top_right_x() < rectangle.top_left_x()
            || self.bottom_left_y() < rectangle.top_left_y()
            || self.top_left_x() > rectangle.top_right_x()
            || self.top_left_y() > rectangle.bottom_left_y())
    }

    /// Point containment with the bounding box grown (or shrunk, when
    /// negative) by `tolerance` on both axes.
    pub fn intersects_with_point(&self, point: &Point, tolerance: Option<f64>) -> bool {
        let tolerance = tolerance.unwrap_or(0.0);
        point.x() >= self.top_left_x() - tolerance
            && point.x() <= self.top_right_x() + tolerance
            && point.y() >= self.top_left_y() - tolerance
            && point.y() <= self.bottom_left_y() + tolerance
    }
}
