//! Common test utilities and logging infrastructure
//!
//! The library logs through the `log` facade; `tracing-subscriber` bridges
//! those records so they show up next to the tests' own `tracing` events.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=trace` - Show the resolver/emitter trace records
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use columns_container::html::Markup;

static INIT: Once = Once::new();

/// Initialize test logging. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("columns_container=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A paragraph fragment, standing in for a rendered child block.
pub fn paragraph(text: &str) -> Markup {
    Markup::new(format!("<p>{text}</p>"))
}

/// Extract the value of every `td` style attribute, in order.
pub fn cell_styles(html: &str) -> Vec<String> {
    html.split("<td style=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

/// Extract the content of every `td`, in order.
pub fn cell_contents(html: &str) -> Vec<String> {
    html.split("<td ")
        .skip(1)
        .filter_map(|rest| {
            let start = rest.find('>')? + 1;
            let end = rest.find("</td>")?;
            Some(rest[start..end].to_string())
        })
        .collect()
}
