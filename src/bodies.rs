//! Registry of tracked celestial bodies.
//!
//! Maps each body's display name to the numeric identifier the Horizons API
//! uses for it. The table is compiled in and ordered; the orchestrator
//! iterates it in this order, which also determines response key order.

/// A celestial body tracked by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    /// Display name used as the response key.
    pub name: &'static str,
    /// Horizons `COMMAND` identifier for the body.
    pub horizons_id: &'static str,
}

/// All tracked bodies, in fixed iteration order.
///
/// Horizons uses planet-center ids (199, 299, ...) for the planets, 10 for
/// the Sun and 301 for the Moon.
pub const BODIES: [Body; 10] = [
    Body { name: "Sun", horizons_id: "10" },
    Body { name: "Moon", horizons_id: "301" },
    Body { name: "Mercury", horizons_id: "199" },
    Body { name: "Venus", horizons_id: "299" },
    Body { name: "Mars", horizons_id: "499" },
    Body { name: "Jupiter", horizons_id: "599" },
    Body { name: "Saturn", horizons_id: "699" },
    Body { name: "Uranus", horizons_id: "799" },
    Body { name: "Neptune", horizons_id: "899" },
    Body { name: "Pluto", horizons_id: "999" },
];

/// Look up a body's Horizons identifier by display name.
///
/// The registry is a closed set, so a `None` here means the name is simply
/// not one of the tracked bodies.
pub fn horizons_id(name: &str) -> Option<&'static str> {
    BODIES.iter().find(|b| b.name == name).map(|b| b.horizons_id)
}
