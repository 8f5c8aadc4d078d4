//! UI Components
//!
//! Leptos components for the shell, the four tabs and the modals.

mod audio_guide_modal;
mod budget_panel;
mod expense_form;
mod guide_panel;
mod map_view;
mod notification_settings;
mod remove_record_button;
mod status_header;
mod tab_bar;
mod timeline;
mod timeline_card;
mod waypoint_form;
mod weather_panel;

pub use audio_guide_modal::AudioGuideModal;
pub use budget_panel::BudgetPanel;
pub use expense_form::ExpenseForm;
pub use guide_panel::GuidePanel;
pub use map_view::MapView;
pub use notification_settings::NotificationSettings;
pub use remove_record_button::RemoveRecordButton;
pub use status_header::StatusHeader;
pub use tab_bar::TabBar;
pub use timeline::Timeline;
pub use timeline_card::TimelineCard;
pub use waypoint_form::WaypointForm;
pub use weather_panel::WeatherPanel;
