use std::fmt;
use std::io::{self, Stdout, Write};

use crate::pricing::constants::HOME_ROUTE;

/// Places the flow can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Home tabs, reached after an order is placed.
    Home,
}

impl Destination {
    /// Route name understood by the host navigator.
    pub fn route_name(self) -> &'static str {
        match self {
            Destination::Home => HOME_ROUTE,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// Host-provided navigation.
pub trait Navigator {
    fn navigate(&mut self, destination: Destination);
}

/// Navigator for the command-line host: there is no screen stack, so
/// leaving the flow just tells the user where they are headed.
#[derive(Debug)]
pub struct ConsoleNavigator<W: Write = Stdout> {
    out: W,
}

impl ConsoleNavigator {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for ConsoleNavigator<W> {
    fn navigate(&mut self, destination: Destination) {
        tracing::info!(route = destination.route_name(), "navigate");
        if let Err(e) = writeln!(self.out, "Returning to {}.", destination) {
            tracing::warn!(error = %e, "could not report navigation");
        }
    }
}
