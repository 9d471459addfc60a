//! Browser front end for the login form, compiled to WASM.
//!
//! Load the generated module on a page with a `#login` button and
//! `#username` / `#password` inputs. Clicking the button posts the inputs to
//! `/login` on the page's origin, then either moves to `/dashboard` or alerts
//! with the server's message.

/// Panic reporting
mod utils;

/// Login capabilities backed by the DOM
pub mod dom;

use login_core::{
    api::{Client, HttpTransport},
    handler::collect,
    LoginFormHandler, Outcome,
};
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, Event, Window};

/// ID of the element whose clicks submit the form
pub const TRIGGER_ID: &str = "login";

/// ID of the username `<input>`
pub const USERNAME_ID: &str = "username";

/// ID of the password `<input>`
pub const PASSWORD_ID: &str = "password";

/// Entry point: bind the login form. Call once the page has loaded, e.g.
/// `init().then(() => main())`.
///
/// ## Errors
///
/// If the page doesn't have the elements we need.
#[wasm_bindgen]
pub fn main() -> Result<(), JsValue> {
    utils::set_panic_hook();

    bind(&dom::window()?)
}

/// Attach the login handler to the form in `window`'s document.
///
/// The default action is prevented inside the click listener itself, since
/// `preventDefault` only works while the event is being dispatched. The
/// request runs afterwards on its own future. Nothing stops a second click
/// from starting a second request.
///
/// ## Errors
///
/// If the document, the trigger, or either input is missing, or if the
/// listener can't be attached.
pub fn bind(window: &Window) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let trigger = dom::element(&document, TRIGGER_ID)?;
    let form = dom::DomForm::find(&document, USERNAME_ID, PASSWORD_ID)?;

    let ui = dom::DomUi::new(window.clone());
    let http = reqwest::Client::new();
    let login = Rc::new(LoginFormHandler::new(
        HttpTransport::with_http(Client::new(window.location().origin()?), http),
        ui.clone(),
        ui,
    ));

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let credentials = collect(&mut dom::DomEvent(event), &form);

        let login = Rc::clone(&login);
        wasm_bindgen_futures::spawn_local(async move {
            if let Outcome::Failed(err) = login.submit(&credentials).await {
                console::error_2(
                    &JsValue::from_str("Error:"),
                    &JsValue::from_str(&err.to_string()),
                );
            }
        });
    });

    trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    // The listener lives as long as the page does.
    on_click.forget();

    Ok(())
}
