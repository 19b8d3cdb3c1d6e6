mod bar_event_handler;
mod bar_handler;
mod margin_handler;
mod placement_handler;
mod reattach_handler;
mod screen_handler;
