/// Forward Rust panics to `console.error` so they show up in devtools instead
/// of as an opaque "unreachable executed".
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
