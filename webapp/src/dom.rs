use tracing::debug;

// the few places where we reach past the virtual dom into the document
//
// a missing element is not an error, the caller just gets a no-op

pub fn scroll_to_bottom(id: &str) {
    let element = match web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    {
        Some(element) => element,
        None => {
            debug!(id, "no element to scroll");
            return;
        }
    };

    element.set_scroll_top(element.scroll_height());
}
