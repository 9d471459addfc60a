//! In-browser checks for the DOM side of the login form. Run with
//! `wasm-pack test --headless --firefox browser`.

#![cfg(target_arch = "wasm32")]

use browser::dom::{self, DomEvent, DomForm};
use login_core::{handler::collect, Credentials};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::window().unwrap().document().unwrap()
}

/// Add an element with the given tag and ID to the page.
fn add(document: &Document, tag: &str, id: &str) -> web_sys::Element {
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn add_input(document: &Document, id: &str) -> HtmlInputElement {
    add(document, "input", id).dyn_into().unwrap()
}

/// A click that can be cancelled, like a real one on a submit button.
fn click() -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    init.set_bubbles(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn collecting_prevents_the_default() {
    let document = document();
    add_input(&document, "collect-user");
    add_input(&document, "collect-pass");
    let form = DomForm::find(&document, "collect-user", "collect-pass").unwrap();

    let event = click();
    collect(&mut DomEvent(event.clone()), &form);

    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn fields_are_read_when_clicked_not_when_bound() {
    let document = document();
    let username = add_input(&document, "late-user");
    let password = add_input(&document, "late-pass");
    let form = DomForm::find(&document, "late-user", "late-pass").unwrap();

    username.set_value("  alice ");
    password.set_value("hunter2");

    assert_eq!(
        collect(&mut DomEvent(click()), &form),
        Credentials::new("  alice ", "hunter2")
    );

    password.set_value("changed");

    assert_eq!(
        collect(&mut DomEvent(click()), &form),
        Credentials::new("  alice ", "changed")
    );
}

#[wasm_bindgen_test]
fn missing_or_wrong_inputs_are_errors() {
    let document = document();
    add_input(&document, "only-user");
    add(&document, "div", "not-an-input");

    assert!(DomForm::find(&document, "only-user", "nowhere").is_err());
    assert!(DomForm::find(&document, "only-user", "not-an-input").is_err());
}

#[wasm_bindgen_test]
fn bound_trigger_cancels_clicks() {
    let document = document();
    add(&document, "button", browser::TRIGGER_ID);
    add_input(&document, browser::USERNAME_ID);
    add_input(&document, browser::PASSWORD_ID);

    browser::bind(&dom::window().unwrap()).unwrap();

    let trigger = document.get_element_by_id(browser::TRIGGER_ID).unwrap();

    // `dispatch_event` is false when a listener called `preventDefault`
    assert!(!trigger.dispatch_event(&click()).unwrap());
}
