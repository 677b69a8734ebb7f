//! Bindings to the Google Maps Places autocomplete widget.

use std::{cell::RefCell, rc::Rc};

use anyhow::{anyhow, Result};
use js_sys::{Function, Reflect, JSON};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{HtmlInputElement, HtmlScriptElement};

use addrfill_boundary::{AutocompleteOptions, PlaceResult};
use addrfill_entities::place::PlaceSelection;

const SCRIPT_ELEMENT_ID: &str = "google-maps-places";
const SCRIPT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/js";
const PLACE_CHANGED_EVENT: &str = "place_changed";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    #[derive(Debug, Clone)]
    type Autocomplete;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"])]
    fn new(input: &HtmlInputElement, opts: &JsValue) -> Autocomplete;

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &Autocomplete, event_name: &str, handler: &Function)
        -> MapsEventListener;

    #[wasm_bindgen(method, js_name = getPlace)]
    fn get_place(this: &Autocomplete) -> JsValue;

    #[derive(Debug)]
    type MapsEventListener;

    #[wasm_bindgen(method)]
    fn remove(this: &MapsEventListener);
}

type OnPlaceSelected = Rc<dyn Fn(Option<PlaceSelection>)>;

#[derive(Default)]
struct Widget {
    autocomplete: Option<Autocomplete>,
    listener: Option<MapsEventListener>,
    on_place_changed: Option<Closure<dyn FnMut()>>,
    script: Option<HtmlScriptElement>,
    on_script_loaded: Option<Closure<dyn FnMut()>>,
}

impl Widget {
    fn init(
        &mut self,
        input: &HtmlInputElement,
        options: &JsValue,
        on_place_selected: &OnPlaceSelected,
    ) {
        if self.autocomplete.is_some() {
            return;
        }
        log::debug!("Attach places autocomplete");
        let autocomplete = Autocomplete::new(input, options);
        let on_place_changed = {
            let autocomplete = autocomplete.clone();
            let on_place_selected = Rc::clone(on_place_selected);
            Closure::<dyn FnMut()>::new(move || {
                on_place_selected(place_from_js(&autocomplete.get_place()));
            })
        };
        let listener = autocomplete.add_listener(
            PLACE_CHANGED_EVENT,
            on_place_changed.as_ref().unchecked_ref(),
        );
        self.autocomplete = Some(autocomplete);
        self.listener = Some(listener);
        self.on_place_changed = Some(on_place_changed);
    }
}

/// An autocomplete widget attached to an input element.
///
/// Dropping the handle detaches the listener.
pub struct PlacesAutocomplete {
    widget: Rc<RefCell<Widget>>,
}

impl Drop for PlacesAutocomplete {
    fn drop(&mut self) {
        let mut widget = self.widget.borrow_mut();
        if let Some(listener) = widget.listener.take() {
            log::debug!("Detach places autocomplete");
            listener.remove();
        }
        widget.on_place_changed = None;
        if let (Some(script), Some(on_script_loaded)) =
            (widget.script.take(), widget.on_script_loaded.take())
        {
            // The script might still be loading.
            let _ = script.remove_event_listener_with_callback(
                "load",
                on_script_loaded.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Attaches the autocomplete widget to `input`.
///
/// The Places library is loaded on demand.
pub fn attach<F>(
    input: HtmlInputElement,
    options: &AutocompleteOptions,
    api_key: Option<&str>,
    on_place_selected: F,
) -> Result<PlacesAutocomplete>
where
    F: Fn(Option<PlaceSelection>) + 'static,
{
    let options = JSON::parse(&serde_json::to_string(options)?).map_err(js_error)?;
    let on_place_selected: OnPlaceSelected = Rc::new(on_place_selected);
    let widget = Rc::new(RefCell::new(Widget::default()));

    if is_library_loaded() {
        widget
            .borrow_mut()
            .init(&input, &options, &on_place_selected);
        return Ok(PlacesAutocomplete { widget });
    }

    let script = ensure_script(api_key)?;
    let on_script_loaded = {
        let widget = Rc::downgrade(&widget);
        Closure::<dyn FnMut()>::new(move || {
            let Some(widget) = widget.upgrade() else {
                return;
            };
            widget.borrow_mut().init(&input, &options, &on_place_selected);
        })
    };
    script
        .add_event_listener_with_callback("load", on_script_loaded.as_ref().unchecked_ref())
        .map_err(js_error)?;
    {
        let mut widget = widget.borrow_mut();
        widget.script = Some(script);
        widget.on_script_loaded = Some(on_script_loaded);
    }
    Ok(PlacesAutocomplete { widget })
}

/// Converts the place handed out by the widget.
///
/// The widget fires with a stub object (or nothing at all)
/// if the user hits enter without picking a suggestion.
fn place_from_js(place: &JsValue) -> Option<PlaceSelection> {
    if place.is_undefined() || place.is_null() {
        return None;
    }
    let json = JSON::stringify(place).ok()?.as_string()?;
    match serde_json::from_str::<PlaceResult>(&json) {
        Ok(place) => Some(place.into()),
        Err(err) => {
            log::warn!("Unable to read selected place: {err}");
            None
        }
    }
}

fn is_library_loaded() -> bool {
    ["google", "maps", "places"]
        .iter()
        .try_fold(JsValue::from(leptos::window()), |obj, name| {
            Reflect::get(&obj, &JsValue::from_str(name))
                .ok()
                .filter(|v| !v.is_undefined())
        })
        .is_some()
}

fn ensure_script(api_key: Option<&str>) -> Result<HtmlScriptElement> {
    let document = leptos::document();
    if let Some(script) = document.get_element_by_id(SCRIPT_ELEMENT_ID) {
        return script
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| anyhow!("#{SCRIPT_ELEMENT_ID} is not a script element"));
    }
    let api_key = api_key.ok_or_else(|| anyhow!("Missing places API key"))?;
    let script = document
        .create_element("script")
        .map_err(js_error)?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| anyhow!("Unable to create script element"))?;
    script.set_id(SCRIPT_ELEMENT_ID);
    script.set_async(true);
    script.set_src(&format!("{SCRIPT_BASE_URL}?key={api_key}&libraries=places"));
    let head = document.head().ok_or_else(|| anyhow!("Missing document head"))?;
    head.append_child(&script).map_err(js_error)?;
    log::debug!("Load places library");
    Ok(script)
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}
