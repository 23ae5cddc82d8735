//! Nursing Notes Dashboard
//!
//! Emergency nursing notes dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Note cards with priority and status badges
//! - Per-patient AI summaries in several handover formats
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Card rendering comes from the shared `nursing-notes` core;
//! data comes from the Nursing Notes API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
