//! Rack resources on top of CloudFormation
//!
//! Resources (log sinks, queues, webhooks, ...) are CloudFormation stacks
//! named `<rack>-<name>` and tagged with the rack conventions.
//! [`Provider`] creates them, reads them back and nests the apps using them.

pub mod attacher;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod reader;
pub mod resource;
pub mod template;
pub mod translator;
pub mod webhook;

pub use client::StackClient;
pub use config::Config;
pub use error::{Error, Result};
pub use resource::{App, Resource, Resources};

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of event timestamps, `None` stands for an unknown time
pub type Clock = fn() -> Option<DateTime<Utc>>;

/// Entry point for resource operations
///
/// Holds no state besides its config and client, every call goes to AWS.
#[derive(Clone)]
pub struct Provider {
    config: Config,
    client: Arc<dyn StackClient>,
    clock: Clock,
}

impl Provider {
    pub fn new(config: Config, client: Arc<dyn StackClient>) -> Self {
        Provider {
            config,
            client,
            clock: || Some(Utc::now()),
        }
    }

    /// Use another clock for event timestamps
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
