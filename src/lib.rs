mod circle;
mod point;
mod rectangle;

use wasm_bindgen::prelude::*;

pub use circle::Circle;
pub use point::{Point, PointDto};
pub use rectangle::Rectangle;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    {
        console_error_panic_hook::set_once();
        web_sys::console::log_1(&"rust_2d_geometry loaded".into());
    }
    Ok(())
}
