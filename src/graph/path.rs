use crate::{Distance, Network, Place};

/// Ordered sequence of places from an origin to a destination (both included), together with
/// the total distance of the routes in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub distance: Distance,
    pub places: Vec<Place>,
}

impl Path {
    /// Path that starts and ends at the same place.
    pub fn origin(place: Place) -> Self {
        Self {
            distance: Distance::ZERO,
            places: vec![place],
        }
    }

    pub fn first(&self) -> Option<&Place> {
        self.places.first()
    }

    pub fn last(&self) -> Option<&Place> {
        self.places.last()
    }

    /// Gets an iterator over the consecutive pairs of places, one pair per route on the path.
    pub fn legs(&self) -> impl Iterator<Item = (&Place, &Place)> {
        self.places.windows(2).map(|window| (&window[0], &window[1]))
    }

    /// Returns true only if the path travels the route between the two places, in any direction.
    pub fn contains_route(&self, a: &str, b: &str) -> bool {
        self.legs()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

/// Returns true only if every pair of consecutive places of the path is connected by a route in
/// the given graph.
pub fn is_path_connected<G: Network>(graph: &G, path: &[Place]) -> bool {
    path_distance(graph, path).is_some()
}

/// Sums the distances of the routes between consecutive places.
/// Returns None if any of the routes doesn't exist in the graph.
pub fn path_distance<G: Network>(graph: &G, path: &[Place]) -> Option<Distance> {
    if let [place] = path {
        return graph.contains_place(place.as_str()).then_some(Distance::ZERO);
    }

    let mut distance = Distance::ZERO;
    for window in path.windows(2) {
        let [p1, p2] = [&window[0], &window[1]];

        let (_, leg) = graph
            .place_neighbors(p1.as_str())
            .find(|(neighbor, _)| *neighbor == p2)?;
        distance += leg;
    }

    Some(distance)
}
