use web_sys::Element;

/// Somewhere a number is shown as text.
pub trait DisplayTarget {
    fn read_text(&self) -> Option<String>;
    fn write_text(&self, text: &str);
}

impl DisplayTarget for Element {
    fn read_text(&self) -> Option<String> {
        self.text_content()
    }

    fn write_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}
