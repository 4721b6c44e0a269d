use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Distance, GraphError, Network, Place};

/// Owner of the places and of the routes between them.
///
/// Every route is stored twice, once in the neighbors of each end place, and every operation
/// keeps the two entries identical. Operations validate all their inputs before touching the
/// graph, so a failed operation leaves the graph exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Places in insertion order.
    places: Vec<Place>,
    /// Neighbors (and route distances) of every place in the graph.
    neighbors: FxHashMap<Place, FxHashMap<Place, Distance>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an ordered list of places and from (place, place, km) routes.
    /// Fails on the first place or route that would be rejected by the single operations.
    pub fn from_routes<'a>(
        places: impl IntoIterator<Item = &'a str>,
        routes: impl IntoIterator<Item = (&'a str, &'a str, f64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();

        for place in places {
            graph.add_place(place)?;
        }

        for (a, b, km) in routes {
            graph.add_or_update_route(a, b, km)?;
        }

        Ok(graph)
    }

    /// Inserts a new place without any route.
    pub fn add_place(&mut self, place: impl Into<Place>) -> Result<(), GraphError> {
        let place = place.into();

        if self.neighbors.contains_key(&place) {
            return Err(GraphError::DuplicateIdentifier(place));
        }

        debug!("Adding place {place}");
        self.neighbors.insert(place.clone(), FxHashMap::default());
        self.places.push(place);
        Ok(())
    }

    /// Removes the place together with all the routes that start or end at it.
    pub fn remove_place(&mut self, place: &str) -> Result<(), GraphError> {
        let Some((place, neighbors)) = self.neighbors.remove_entry(place) else {
            return Err(GraphError::UnknownPlace(place.into()));
        };

        debug!("Removing place {place} and its {} routes", neighbors.len());

        for neighbor in neighbors.keys() {
            if let Some(routes) = self.neighbors.get_mut(neighbor) {
                routes.remove(&place);
            }
        }

        self.places.retain(|p| *p != place);
        Ok(())
    }

    /// Sets the distance of the route between two distinct places in both directions,
    /// replacing the previous distance if the route already exists.
    pub fn add_or_update_route(&mut self, a: &str, b: &str, km: f64) -> Result<(), GraphError> {
        let (a, b) = self.existing_pair(a, b)?;
        if a == b {
            return Err(GraphError::SelfRoute(a));
        }

        let distance = Distance::try_from_km(km)?;
        debug!("Setting route {a} <-> {b} to {distance}");

        self.neighbors
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), distance);
        self.neighbors.entry(b).or_default().insert(a, distance);

        Ok(())
    }

    /// Removes the route between two places in both directions.
    pub fn remove_route(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let exists = self
            .neighbors
            .get(a)
            .is_some_and(|neighbors| neighbors.contains_key(b));

        if !exists {
            return Err(GraphError::RouteNotFound(a.into(), b.into()));
        }

        debug!("Removing route {a} <-> {b}");

        let removed_ab = self.neighbors.get_mut(a).and_then(|n| n.remove(b));
        let removed_ba = self.neighbors.get_mut(b).and_then(|n| n.remove(a));
        debug_assert_eq!(removed_ab, removed_ba);

        Ok(())
    }

    /// Gets all the places in insertion order.
    pub fn list_places(&self) -> &[Place] {
        &self.places
    }

    /// Gets the place at the given (zero-based) position of the listing order.
    pub fn place_at(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    /// Gets the neighbors of the place and the distances of the routes to them.
    pub fn neighbors_of(&self, place: &str) -> Result<&FxHashMap<Place, Distance>, GraphError> {
        self.neighbors
            .get(place)
            .ok_or_else(|| GraphError::UnknownPlace(place.into()))
    }

    /// Gets the distance of the route between two places, if any.
    pub fn route_distance(&self, a: &str, b: &str) -> Option<Distance> {
        self.neighbors.get(a)?.get(b).copied()
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    /// Number of undirected routes.
    pub fn route_count(&self) -> usize {
        self.neighbors.values().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Gets the stored identifiers of two places, failing if any of them is missing.
    fn existing_pair(&self, a: &str, b: &str) -> Result<(Place, Place), GraphError> {
        let lookup = |place: &str| {
            self.neighbors
                .get_key_value(place)
                .map(|(p, _)| p.clone())
                .ok_or_else(|| GraphError::UnknownPlace(place.into()))
        };

        Ok((lookup(a)?, lookup(b)?))
    }
}

impl Network for GraphStore {
    fn places(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    fn contains_place(&self, place: &str) -> bool {
        self.neighbors.contains_key(place)
    }

    fn place_neighbors(&self, place: &str) -> impl Iterator<Item = (&Place, Distance)> {
        self.neighbors
            .get(place)
            .into_iter()
            .flatten()
            .map(|(neighbor, &distance)| (neighbor, distance))
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::tests::{assert_consistent, karachi};

    #[test]
    fn graph_store_add_place_001() {
        let mut graph = GraphStore::new();
        assert!(graph.is_empty());

        graph.add_place("Jauhar").unwrap();
        graph.add_place(String::from("Gulshan")).unwrap();

        assert_eq!(graph.list_places(), [Place::from("Jauhar"), Place::from("Gulshan")]);
        assert!(graph.neighbors_of("Jauhar").unwrap().is_empty());
        assert_eq!(graph.route_count(), 0);
    }

    #[test]
    fn graph_store_add_place_002() {
        let mut graph = karachi();
        let before = graph.clone();

        assert_eq!(
            graph.add_place("Malir"),
            Err(GraphError::DuplicateIdentifier(Place::from("Malir")))
        );

        assert_eq!(graph.list_places(), before.list_places());
        assert_eq!(graph.neighbors_of("Malir"), before.neighbors_of("Malir"));
    }

    #[test]
    fn graph_store_update_route_001() {
        let mut graph = karachi();

        graph.add_or_update_route("Jauhar", "Defence", 2.5).unwrap();
        assert_eq!(graph.route_distance("Jauhar", "Defence"), Some(Distance::from_km(2.5)));
        assert_eq!(graph.route_distance("Defence", "Jauhar"), Some(Distance::from_km(2.5)));

        // overwrite in both directions, whichever side the update comes from
        graph.add_or_update_route("Defence", "Jauhar", 9.0).unwrap();
        assert_eq!(graph.route_distance("Jauhar", "Defence"), Some(Distance::from_km(9.0)));
        assert_eq!(graph.route_distance("Defence", "Jauhar"), Some(Distance::from_km(9.0)));
        assert_eq!(graph.route_count(), 9);
        assert_consistent(&graph);
    }

    #[test]
    fn graph_store_update_route_002() {
        let mut graph = karachi();
        let routes = graph.route_count();

        assert_eq!(
            graph.add_or_update_route("Jauhar", "Lyari", 1.0),
            Err(GraphError::UnknownPlace(Place::from("Lyari")))
        );
        assert_eq!(
            graph.add_or_update_route("Lyari", "Jauhar", 1.0),
            Err(GraphError::UnknownPlace(Place::from("Lyari")))
        );
        assert_eq!(
            graph.add_or_update_route("Jauhar", "Jauhar", 1.0),
            Err(GraphError::SelfRoute(Place::from("Jauhar")))
        );
        assert_eq!(
            graph.add_or_update_route("Jauhar", "Gulshan", -1.0),
            Err(GraphError::InvalidWeight(-1.0))
        );
        assert!(graph.add_or_update_route("Jauhar", "Gulshan", f64::NAN).is_err());

        assert_eq!(graph.route_count(), routes);
        assert_eq!(graph.route_distance("Jauhar", "Gulshan"), Some(Distance::from_km(5.0)));
        assert_eq!(graph.route_distance("Jauhar", "Jauhar"), None);
        assert_consistent(&graph);
    }

    #[test]
    fn graph_store_update_route_003() {
        let mut once = karachi();
        once.add_or_update_route("Korangi", "Saddar", 6.0).unwrap();

        let mut twice = karachi();
        twice.add_or_update_route("Korangi", "Saddar", 6.0).unwrap();
        twice.add_or_update_route("Korangi", "Saddar", 6.0).unwrap();

        assert_eq!(once.list_places(), twice.list_places());
        for place in once.list_places() {
            assert_eq!(
                once.neighbors_of(place.as_str()),
                twice.neighbors_of(place.as_str())
            );
        }
    }

    #[test]
    fn graph_store_remove_route_001() {
        let mut graph = karachi();

        graph.remove_route("Malir", "Saddar").unwrap();
        assert_eq!(graph.route_distance("Malir", "Saddar"), None);
        assert_eq!(graph.route_distance("Saddar", "Malir"), None);
        assert_eq!(graph.route_count(), 7);

        assert_eq!(
            graph.remove_route("Saddar", "Malir"),
            Err(GraphError::RouteNotFound(Place::from("Saddar"), Place::from("Malir")))
        );
        assert_eq!(
            graph.remove_route("Saddar", "Lyari"),
            Err(GraphError::RouteNotFound(Place::from("Saddar"), Place::from("Lyari")))
        );
        assert_eq!(graph.route_count(), 7);
        assert_consistent(&graph);
    }

    #[test]
    fn graph_store_remove_place_001() {
        let mut graph = karachi();

        graph.remove_place("Malir").unwrap();

        assert!(!graph.contains_place("Malir"));
        assert_eq!(graph.place_count(), 6);
        assert_eq!(graph.route_count(), 4);
        assert!(
            graph
                .list_places()
                .iter()
                .all(|p| !graph.neighbors_of(p.as_str()).unwrap().contains_key("Malir"))
        );
        assert_eq!(
            graph.list_places(),
            ["Jauhar", "Gulshan", "Korangi", "Saddar", "Clifton", "Defence"].map(Place::from)
        );
        assert_consistent(&graph);
    }

    #[test]
    fn graph_store_remove_place_002() {
        let mut graph = karachi();

        assert_eq!(
            graph.remove_place("Lyari"),
            Err(GraphError::UnknownPlace(Place::from("Lyari")))
        );
        assert_eq!(graph.place_count(), 7);
        assert_eq!(graph.route_count(), 8);

        // a removed place can be added back, without its old routes, at the end of the list
        graph.remove_place("Jauhar").unwrap();
        graph.add_place("Jauhar").unwrap();
        assert!(graph.neighbors_of("Jauhar").unwrap().is_empty());
        assert_eq!(graph.route_distance("Gulshan", "Jauhar"), None);
        assert_eq!(graph.place_at(6), Some(&Place::from("Jauhar")));
        assert_consistent(&graph);
    }

    #[test]
    fn graph_store_neighbors_001() {
        let graph = karachi();

        let neighbors = graph.neighbors_of("Malir").unwrap();
        assert_eq!(neighbors.len(), 4);
        assert_eq!(neighbors.get("Korangi"), Some(&Distance::from_km(4.0)));

        assert_eq!(
            graph.neighbors_of("Lyari"),
            Err(GraphError::UnknownPlace(Place::from("Lyari")))
        );
        assert_eq!(graph.place_neighbors("Lyari").count(), 0);
    }

    #[test]
    fn graph_store_routes_001() {
        let graph = karachi();

        let mut routes: Vec<_> = graph
            .routes()
            .map(|(a, b, d)| (a.as_str(), b.as_str(), d.km()))
            .collect();
        routes.sort_by(|x, y| x.partial_cmp(y).unwrap());

        assert_eq!(
            routes,
            [
                ("Clifton", "Defence", 4.0),
                ("Clifton", "Saddar", 6.0),
                ("Gulshan", "Jauhar", 5.0),
                ("Gulshan", "Korangi", 10.0),
                ("Gulshan", "Malir", 3.0),
                ("Jauhar", "Malir", 7.0),
                ("Korangi", "Malir", 4.0),
                ("Malir", "Saddar", 8.0),
            ]
        );
    }

    #[test]
    fn graph_store_from_routes_001() {
        assert_eq!(
            GraphStore::from_routes(["A", "B", "A"], [("A", "B", 1.0)]).unwrap_err(),
            GraphError::DuplicateIdentifier(Place::from("A"))
        );
        assert_eq!(
            GraphStore::from_routes(["A", "B"], [("A", "C", 1.0)]).unwrap_err(),
            GraphError::UnknownPlace(Place::from("C"))
        );

        let graph = GraphStore::from_routes(["A", "B"], [("A", "B", 1.0), ("B", "A", 2.0)]).unwrap();
        assert_eq!(graph.route_distance("A", "B"), Some(Distance::from_km(2.0)));
        assert_eq!(graph.route_count(), 1);
    }
}
