//! Seed graph of a few neighborhoods of Karachi, the graph the interactive program starts with.

use crate::{GraphError, GraphStore};

/// Places of the seed graph, in listing order.
pub const KARACHI_PLACES: [&str; 7] = [
    "Jauhar", "Gulshan", "Korangi", "Malir", "Saddar", "Clifton", "Defence",
];

/// Routes of the seed graph, distances in km.
pub const KARACHI_ROUTES: [(&str, &str, f64); 8] = [
    ("Jauhar", "Gulshan", 5.0),
    ("Jauhar", "Malir", 7.0),
    ("Gulshan", "Korangi", 10.0),
    ("Gulshan", "Malir", 3.0),
    ("Korangi", "Malir", 4.0),
    ("Malir", "Saddar", 8.0),
    ("Saddar", "Clifton", 6.0),
    ("Clifton", "Defence", 4.0),
];

/// Builds a new graph store holding the seed places and routes.
pub fn karachi_graph() -> Result<GraphStore, GraphError> {
    GraphStore::from_routes(KARACHI_PLACES, KARACHI_ROUTES)
}
