use login_core::handler::{Activation, Alerter, Form, Navigator};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, Event, HtmlInputElement, Window};

/// Get the global `window`.
///
/// ## Errors
///
/// If there isn't one (e.g. in a worker.)
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

/// Look up an element by ID.
///
/// ## Errors
///
/// If no element has that ID.
pub fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{id}`")))
}

/// Look up an `<input>` by ID.
///
/// ## Errors
///
/// If no element has that ID or it isn't an `<input>`.
fn input(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    element(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("element `{id}` is not an <input>")))
}

/// A DOM event, as the trigger for a login.
pub struct DomEvent(pub Event);

impl Activation for DomEvent {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }
}

/// The username and password inputs on the page. Values are read when asked
/// for, not when the form is bound.
pub struct DomForm {
    /// `#username`
    username: HtmlInputElement,

    /// `#password`
    password: HtmlInputElement,
}

impl DomForm {
    /// Find the form's inputs in the document.
    ///
    /// ## Errors
    ///
    /// If either input is missing.
    pub fn find(document: &Document, username_id: &str, password_id: &str) -> Result<Self, JsValue> {
        Ok(Self {
            username: input(document, username_id)?,
            password: input(document, password_id)?,
        })
    }
}

impl Form for DomForm {
    fn username(&self) -> String {
        self.username.value()
    }

    fn password(&self) -> String {
        self.password.value()
    }
}

/// Navigation and alerts through the browser window.
#[derive(Clone)]
pub struct DomUi {
    /// The window we live in
    window: Window,
}

impl DomUi {
    /// Wrap a window
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for DomUi {
    fn navigate(&self, path: &str) {
        if let Err(err) = self.window.location().set_href(path) {
            console::error_2(&JsValue::from_str("Error:"), &err);
        }
    }
}

impl Alerter for DomUi {
    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            console::error_2(&JsValue::from_str("Error:"), &err);
        }
    }
}
