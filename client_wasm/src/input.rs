//! Pointer input handling

use game_core::Game;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Pointer height within the canvas, in playfield pixels
pub fn pointer_y(event: &MouseEvent) -> f32 {
    event.offset_y() as f32
}

/// Mouse movement steers the left paddle, a click serves
pub fn attach(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let move_game = game.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        move_game.borrow_mut().pointer_moved(pointer_y(&event));
    });
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    on_move.forget();

    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        game.borrow_mut().request_serve();
    });
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}
