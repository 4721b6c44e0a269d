use crate::{Distance, Place};

/// Undirected weighted graph of places.
/// Exposes the read-only view of the places and routes that the shortest path engine, the
/// renderer and the shell run on.
pub trait Network {
    /// Gets an iterator over all the places of the graph, in their listing order.
    fn places(&self) -> impl Iterator<Item = &Place>;

    /// Returns true only if the place belongs to the graph.
    fn contains_place(&self, place: &str) -> bool;

    /// Gets an iterator over all the places connected to the given place by a route.
    /// For each neighbor returns the neighbor place and the route distance.
    /// Returns an empty iterator if the place doesn't belong to the graph.
    fn place_neighbors(&self, place: &str) -> impl Iterator<Item = (&Place, Distance)>;

    /// Gets an iterator over all the routes of the graph, each undirected route exactly once.
    /// For each route returns its two end places and its distance.
    fn routes(&self) -> impl Iterator<Item = (&Place, &Place, Distance)> {
        self.places().flat_map(move |place| {
            self.place_neighbors(place.as_str())
                .filter(move |(neighbor, _)| place < *neighbor)
                .map(move |(neighbor, distance)| (place, neighbor, distance))
        })
    }
}

pub mod path;
pub mod store;
