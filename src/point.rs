use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::rectangle::Rectangle;

/// Plain-data form of a point for crossing the JS boundary without its
/// behavior. Unlike `Point`, the identifier is required here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PointDto {
    pub x: f64,
    pub y: f64,
    pub id: String,
}

#[derive(Debug)]
struct PointInner {
    x: f64,
    y: f64,
    id: Option<String>,
}

/// A coordinate in 2d space.
///
/// `Point` is a handle to a shared cell. Cloning it, or handing it to a
/// `Rectangle`/`Circle` as a center, shares the underlying coordinates:
/// moving a shape's center mutates the cell in place, and every holder
/// of the same point observes the move.
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct Point {
    inner: Rc<RefCell<PointInner>>,
}

#[wasm_bindgen]
impl Point {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, id: Option<String>) -> Point {
        Point {
            inner: Rc::new(RefCell::new(PointInner { x, y, id })),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.borrow().x
    }

    #[wasm_bindgen(setter)]
    pub fn set_x(&mut self, x: f64) {
        self.inner.borrow_mut().x = x;
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.borrow().y
    }

    #[wasm_bindgen(setter)]
    pub fn set_y(&mut self, y: f64) {
        self.inner.borrow_mut().y = y;
    }

    /// Optional identifier, set once at construction. This can bind the
    /// point to an entity; uniqueness is the caller's concern.
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> Option<String> {
        self.inner.borrow().id.clone()
    }

    /// Exact coordinate equality, no tolerance.
    pub fn intersects(&self, point: &Point) -> bool {
        let a = self.inner.borrow();
        let b = point.inner.borrow();
        a.x == b.x && a.y == b.y
    }

    /// Boundary-inclusive: a point on an edge or corner intersects.
    pub fn intersects_with_rectangle(&self, rectangle: &Rectangle) -> bool {
        let p = self.inner.borrow();
        p.x >= rectangle.top_left_x()
            && p.x <= rectangle.top_right_x()
            && p.y >= rectangle.top_left_y()
            && p.y <= rectangle.bottom_left_y()
    }

    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&PointDto::from(self)).map_err(JsValue::from)
    }

    pub fn from_js(value: JsValue) -> Result<Point, JsValue> {
        let dto: PointDto = serde_wasm_bindgen::from_value(value).map_err(JsValue::from)?;
        Ok(Point::from(dto))
    }
}

impl From<&Point> for PointDto {
    fn from(point: &Point) -> PointDto {
        let inner = point.inner.borrow();
        PointDto {
            x: inner.x,
            y: inner.y,
            id: inner.id.clone().unwrap_or_default(),
        }
    }
}

impl From<PointDto> for Point {
    fn from(dto: PointDto) -> Point {
        Point::new(dto.x, dto.y, Some(dto.id))
    }
}
