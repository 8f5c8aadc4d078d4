//! Map View Component
//!
//! Leaflet map with street/satellite base layers, the static itinerary
//! layer, saved waypoints and the live position indicator. The Leaflet
//! objects live in a thread-local for as long as the tab is mounted.

use std::cell::{Cell, RefCell};

use escala_core::catalog::{gpx_waypoints, planned_track};
use escala_core::domain::{format_distance, path_length, Coords, CustomWaypoint, ItineraryEntry, UserLocation};
use escala_core::map::{static_features, FlyTo, IndicatorOp, MapFeature, PositionIndicator, WaypointLayerSync};
use escala_core::{Action, TripConfig};
use leptos::prelude::*;
use serde_json::json;
use tracing::debug;
use wasm_bindgen::JsValue;

use super::{RemoveRecordButton, WaypointForm};
use crate::commands::{self, js_options, lat_lng, lat_lngs, Layer, LayerGroup, Map};
use crate::context::use_app_context;
use crate::models::SavedRecord;
use crate::store::{use_app_store, AppStateStoreFields};

const CONTAINER_ID: &str = "escala-map";

struct UserMarker {
    dot: Layer,
    ring: Layer,
}

struct MapHandles {
    map: Map,
    waypoint_layer: LayerGroup,
    user_marker: Option<UserMarker>,
    waypoint_sync: WaypointLayerSync,
    indicator: PositionIndicator,
}

thread_local! {
    static MAP: RefCell<Option<MapHandles>> = const { RefCell::new(None) };
    /// Last focus request already flown to; survives remounts
    static APPLIED_FOCUS: Cell<u32> = const { Cell::new(0) };
}

fn feature_layer(feature: &MapFeature) -> Layer {
    match feature {
        MapFeature::ActivityMarker { coords, popup_html, .. } => {
            commands::marker(&lat_lng(coords), &JsValue::UNDEFINED).bind_popup(popup_html)
        }
        MapFeature::GpxPoint { coords, popup_html } => commands::circle_marker(
            &lat_lng(coords),
            &js_options(&json!({ "radius": 6, "color": "#b91c1c", "fillColor": "#ef4444", "fillOpacity": 0.9, "weight": 2 })),
        )
        .bind_popup(popup_html),
        MapFeature::Track { points } => commands::polyline(
            &lat_lngs(points),
            &js_options(&json!({ "color": "#1e3a8a", "weight": 4, "opacity": 0.7, "dashArray": "8 8" })),
        ),
        MapFeature::UserWaypoint { coords, popup_html, .. } => commands::circle_marker(
            &lat_lng(coords),
            &js_options(&json!({ "radius": 8, "color": "#047857", "fillColor": "#10b981", "fillOpacity": 0.9, "weight": 2 })),
        )
        .bind_popup(popup_html),
    }
}

fn create_map(config: &TripConfig, itinerary: &[ItineraryEntry]) {
    let map = commands::new_map(CONTAINER_ID, &js_options(&json!({ "zoomControl": true })));
    map.set_view(&lat_lng(&config.map_center), config.map_zoom);

    let street = commands::tile_layer(
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        &js_options(&json!({ "maxZoom": 19, "attribution": "&copy; OpenStreetMap" })),
    );
    let satellite = commands::tile_layer(
        "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        &js_options(&json!({ "maxZoom": 19, "attribution": "&copy; Esri" })),
    );
    street.add_to(&map);
    commands::layers_control(
        &commands::named_layers(&[("Calles", &street), ("Satélite", &satellite)]),
        &JsValue::UNDEFINED,
    )
    .add_control_to(&map);

    let static_layer = commands::layer_group();
    for feature in static_features(itinerary, &gpx_waypoints(), &planned_track()) {
        static_layer.add_layer(&feature_layer(&feature));
    }
    static_layer.add_to(&map);

    let waypoint_layer = commands::layer_group();
    waypoint_layer.add_to(&map);

    debug!("map created");
    MAP.with(|slot| {
        *slot.borrow_mut() = Some(MapHandles {
            map,
            waypoint_layer,
            user_marker: None,
            waypoint_sync: WaypointLayerSync::default(),
            indicator: PositionIndicator::default(),
        });
    });
}

fn destroy_map() {
    if let Some(handles) = MAP.with(|slot| slot.borrow_mut().take()) {
        handles.map.remove();
        debug!("map removed");
    }
}

fn sync_waypoints(waypoints: &[CustomWaypoint]) {
    MAP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(h) = slot.as_mut() else { return };
        if let Some(features) = h.waypoint_sync.update(waypoints) {
            h.waypoint_layer.clear_layers();
            for feature in &features {
                h.waypoint_layer.add_layer(&feature_layer(feature));
            }
        }
    });
}

fn update_position(location: &UserLocation) {
    MAP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(h) = slot.as_mut() else { return };
        match h.indicator.update(location) {
            IndicatorOp::Create { coords, accuracy } => {
                let at = lat_lng(&coords);
                let ring = commands::circle(
                    &at,
                    &js_options(&json!({ "radius": accuracy, "className": "user-accuracy", "weight": 1, "fillOpacity": 0.15 })),
                )
                .add_to(&h.map);
                let dot = commands::circle_marker(
                    &at,
                    &js_options(&json!({
                        "radius": 8, "className": "user-position-pulse", "color": "#ffffff",
                        "fillColor": "#2563eb", "fillOpacity": 1, "weight": 3
                    })),
                )
                .add_to(&h.map);
                h.user_marker = Some(UserMarker { dot, ring });
            }
            IndicatorOp::Move { coords, accuracy } => {
                if let Some(marker) = &h.user_marker {
                    let at = lat_lng(&coords);
                    marker.dot.set_lat_lng(&at);
                    marker.ring.set_lat_lng(&at);
                    if let Some(radius) = accuracy {
                        marker.ring.set_radius(radius);
                    }
                }
            }
        }
    });
}

fn fly_to(fly: FlyTo) {
    MAP.with(|slot| {
        if let Some(h) = slot.borrow().as_ref() {
            h.map.fly_to(&lat_lng(&fly.target), fly.zoom, &js_options(&json!({ "duration": fly.duration })));
        }
    });
}

/// Centre of the live map, if one is mounted
pub fn map_center() -> Option<Coords> {
    MAP.with(|slot| {
        slot.borrow().as_ref().map(|h| {
            let c = h.map.get_center();
            Coords::new(c.lat(), c.lng())
        })
    })
}

#[component]
pub fn MapView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let container = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        if container.get().is_none() {
            return;
        }
        let config = store.config().read_untracked();
        let trip = store.trip().read_untracked();
        create_map(&config, &trip.itinerary);
    });
    on_cleanup(destroy_map);

    Effect::new(move |_| {
        if container.get().is_none() {
            return;
        }
        sync_waypoints(&store.trip().read().waypoints);
    });

    Effect::new(move |_| {
        if container.get().is_none() {
            return;
        }
        if let Some(location) = store.user_location().get() {
            update_position(&location);
        }
    });

    Effect::new(move |_| {
        if container.get().is_none() {
            return;
        }
        let Some(request) = store.map_focus().get() else { return };
        if APPLIED_FOCUS.with(|applied| applied.replace(request.seq)) != request.seq {
            fly_to(FlyTo::focus(request.target));
        }
    });

    let waypoints = move || store.trip().read().waypoints.clone();
    let track_length = format_distance(path_length(&planned_track()));

    view! {
        <section class="map-panel">
            <div id=CONTAINER_ID class="map-container" node_ref=container></div>
            <p class="map-legend">
                <span class="legend-track">"Ruta a pie planificada: " {track_length}</span>
                <span class="legend-gpx">"● Puntos de interés"</span>
            </p>
            <WaypointForm />
            <Show when=move || !store.trip().read().waypoints.is_empty()>
                <h3 class="panel-subtitle">"Mis puntos"</h3>
            </Show>
            <ul class="waypoint-list">
                <For
                    each=waypoints
                    key=|w| w.id.clone()
                    children=move |w| {
                        let coords = w.coords;
                        let id = w.id.clone();
                        view! {
                            <li class="waypoint-row">
                                <button class="waypoint-focus" on:click=move |_| ctx.focus_on_map(coords)>
                                    <span class="waypoint-title">{w.title.clone()}</span>
                                    {w.description.clone().map(|d| view! { <span class="waypoint-desc">{d}</span> })}
                                </button>
                                <RemoveRecordButton
                                    kind=SavedRecord::Waypoint
                                    label=w.title.clone()
                                    on_remove=Callback::new(move |_| ctx.dispatch(Action::RemoveWaypoint(id.clone())))
                                />
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
