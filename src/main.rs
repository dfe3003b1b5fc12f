#![allow(warnings)]
//! Form Builder Frontend Entry Point

mod api;
mod config;
mod context;
mod logger;
mod store;
mod registry;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
