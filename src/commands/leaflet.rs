//! Leaflet Bindings
//!
//! Only the slice of the `L` namespace the map view uses. Leaflet itself
//! is loaded by `index.html`.

use escala_core::domain::Coords;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &Map, center: &JsValue, zoom: f64, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Map) -> LatLng;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;

    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, html: &str) -> Layer;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Layer, lat_lng: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = setRadius)]
    pub fn set_radius(this: &Layer, metres: f64) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Layer) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup) -> LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    pub fn circle_marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = circle)]
    pub fn circle(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    pub fn polyline(points: &JsValue, options: &JsValue) -> Layer;

    pub type Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn layers_control(base_layers: &JsValue, overlays: &JsValue) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_control_to(this: &Control, map: &Map) -> Control;
}

/// `[lat, lng]` array as Leaflet expects
pub fn lat_lng(coords: &Coords) -> JsValue {
    js_sys::Array::of2(&coords.lat.into(), &coords.lng.into()).into()
}

pub fn lat_lngs(points: &[Coords]) -> JsValue {
    points.iter().map(lat_lng).collect::<js_sys::Array>().into()
}

/// Plain JS object from any serializable options value
pub fn js_options<T: Serialize>(options: &T) -> JsValue {
    options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::UNDEFINED)
}

/// `{ name: layer, ... }` object for the layer switcher
pub fn named_layers(layers: &[(&str, &Layer)]) -> JsValue {
    let object = js_sys::Object::new();
    for (name, layer) in layers {
        let _ = js_sys::Reflect::set(&object, &JsValue::from_str(name), layer);
    }
    object.into()
}
