//! WASM bindings for live, in-browser presentation.
//!
//! The page script owns the DOM and event listeners; this crate parses the
//! editor text, renders the deck markup, and keeps the navigation state.

use slides_core::{
    assemble, normalize_document, parse_anchor, Deck, HtmlRenderer, NavCommand, SlideTree,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `localStorage` key holding the editor text.
const STORAGE_KEY: &str = "slideshow";

/// Module start hook.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Parse editor text into a presentation object.
#[wasm_bindgen]
pub fn assemble_presentation(text: &str) -> Result<JsValue, JsValue> {
    let presentation = assemble(&normalize_document(text));

    serde_wasm_bindgen::to_value(&presentation)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Render editor text as live deck markup, first slide current.
#[wasm_bindgen]
pub fn render_deck(text: &str) -> String {
    SlideTree::new(&assemble(&normalize_document(text))).inner_html()
}

/// Render editor text as a standalone static page.
#[wasm_bindgen]
pub fn render_static(text: &str) -> String {
    HtmlRenderer::new().render_document(&assemble(&normalize_document(text)))
}

/// A deck being presented: rendered tree plus navigation cursor.
#[wasm_bindgen]
pub struct Presenter {
    tree: SlideTree,
    deck: Deck,
}

#[wasm_bindgen]
impl Presenter {
    /// Build a deck from editor text and start on its first slide.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> Presenter {
        let presentation = assemble(&normalize_document(text));
        Self {
            deck: Deck::new(presentation.len()),
            tree: SlideTree::new(&presentation),
        }
    }

    /// Advance; returns false once the presentation has been left.
    pub fn next(&mut self) -> bool {
        self.apply(NavCommand::Next);
        self.deck.current().is_some()
    }

    /// Go back one slide, staying on the first.
    pub fn previous(&mut self) {
        self.apply(NavCommand::Previous);
    }

    /// Leave the presentation.
    pub fn leave(&mut self) {
        self.apply(NavCommand::Leave);
    }

    /// Present from the first slide again.
    pub fn restart(&mut self) {
        self.deck = self.deck.restart();
        self.tree.set_current(self.deck.current());
    }

    /// Handle a `keydown` code; returns whether it was a navigation key.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, code: u32) -> bool {
        match NavCommand::from_key_code(code) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    /// Jump to the slide named by a location fragment such as `#s3`.
    #[wasm_bindgen(js_name = jumpToAnchor)]
    pub fn jump_to_anchor(&mut self, fragment: &str) -> Result<(), JsValue> {
        self.jump(fragment)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Index of the slide on screen, if still presenting.
    pub fn current(&self) -> Option<u32> {
        self.deck.current().map(|index| index as u32)
    }

    /// Number of slides, the end slide included.
    #[wasm_bindgen(js_name = slideCount)]
    pub fn slide_count(&self) -> u32 {
        self.deck.count() as u32
    }

    /// Deck markup reflecting the current slide.
    pub fn markup(&self) -> String {
        self.tree.inner_html()
    }
}

impl Presenter {
    fn apply(&mut self, command: NavCommand) {
        self.deck = self.deck.apply(command);
        self.tree.set_current(self.deck.current());
    }

    fn jump(&mut self, fragment: &str) -> slides_core::Result<()> {
        let index = parse_anchor(fragment)?;
        self.deck = self.deck.jump_to(index)?;
        self.tree.set_current(self.deck.current());
        Ok(())
    }
}

/// Persist editor text to `localStorage`.
#[wasm_bindgen]
pub fn save_document(text: &str) -> Result<(), JsValue> {
    let storage = local_storage()?;
    storage_method(&storage, "setItem")?.call2(
        &storage,
        &JsValue::from_str(STORAGE_KEY),
        &JsValue::from_str(text),
    )?;
    Ok(())
}

/// Load previously saved editor text, if any.
#[wasm_bindgen]
pub fn load_document() -> Result<Option<String>, JsValue> {
    let storage = local_storage()?;
    let value =
        storage_method(&storage, "getItem")?.call1(&storage, &JsValue::from_str(STORAGE_KEY))?;
    Ok(value.as_string())
}

fn local_storage() -> Result<JsValue, JsValue> {
    let storage = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("localStorage"))?;
    if storage.is_undefined() || storage.is_null() {
        return Err(JsValue::from_str("localStorage is not available"));
    }
    Ok(storage)
}

fn storage_method(storage: &JsValue, name: &str) -> Result<js_sys::Function, JsValue> {
    js_sys::Reflect::get(storage, &JsValue::from_str(name))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| JsValue::from_str(&format!("localStorage.{} is not a function", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_deck_marks_first_slide() {
        let markup = render_deck("Title\r\n\r\nNext");
        assert!(markup.starts_with("<section class=\"slide--centered current\"><h1>Title</h1>"));
        assert!(markup.ends_with("<section class=\"slide--end\"></section>"));
    }

    #[test]
    fn test_render_static_is_full_document() {
        let page = render_static("Title");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<a href=\"#s1\"><section class=\"slide--centered\" id=\"s0\">"));
    }

    #[test]
    fn test_presenter_walks_to_the_end_and_leaves() {
        let mut presenter = Presenter::new("A\n\nB");
        assert_eq!(presenter.slide_count(), 3);
        assert_eq!(presenter.current(), Some(0));

        assert!(presenter.next());
        assert!(presenter.next());
        assert_eq!(presenter.current(), Some(2));
        assert!(presenter.markup().contains("<section class=\"slide--end current\">"));

        assert!(!presenter.next());
        assert_eq!(presenter.current(), None);
        assert!(!presenter.markup().contains("current"));

        presenter.restart();
        assert_eq!(presenter.current(), Some(0));
    }

    #[test]
    fn test_presenter_keys() {
        let mut presenter = Presenter::new("A\n\nB");
        assert!(presenter.handle_key(39));
        assert_eq!(presenter.current(), Some(1));
        assert!(presenter.handle_key(38));
        assert_eq!(presenter.current(), Some(0));
        assert!(!presenter.handle_key(65));
        assert!(presenter.handle_key(27));
        assert_eq!(presenter.current(), None);
    }

    #[test]
    fn test_presenter_jump() {
        let mut presenter = Presenter::new("A\n\nB\n\nC");
        presenter.jump("#s2").unwrap();
        assert_eq!(presenter.current(), Some(2));

        assert!(presenter.jump("#s9").is_err());
        assert!(presenter.jump("nope").is_err());
        assert_eq!(presenter.current(), Some(2));
    }
}
