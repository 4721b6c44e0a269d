use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::graph::path::Path;
use crate::{Distance, GraphError, Network, Place};

#[derive(Debug, Clone, Copy)]
pub struct ShortestPathConfig {
    /// Paths longer than this distance are not explored, destinations beyond it are unreachable.
    pub max_distance: Distance,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_distance: Distance::INFINITY,
        }
    }
}

/// Outcome of a shortest path query between two places of the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPath {
    /// Minimum distance path from origin to destination.
    Found(Path),
    /// The destination cannot be reached from the origin.
    NoPath,
}

impl ShortestPath {
    /// Total distance of the path, infinite if there is no path.
    pub fn distance(&self) -> Distance {
        match self {
            Self::Found(path) => path.distance,
            Self::NoPath => Distance::INFINITY,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }

    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapElement<'a> {
    /// Current shortest distance from origin to this place.
    distance: Distance,
    /// Order in which the element was pushed into the queue.
    sequence: usize,
    place: &'a Place,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // breaking ties in a deterministic way: first pushed, first popped
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for HeapElement<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single source Dijkstra search over the graph.
struct Search<'a, G> {
    config: &'a ShortestPathConfig,
    graph: &'a G,
    /// (current) shortest distance from origin to this place
    shortest_distances: FxHashMap<&'a Place, Distance>,
    /// previous place (value) on the current best known path from origin to this place (key)
    previous_map: FxHashMap<&'a Place, &'a Place>,
    /// priority queue of discovered places that may need to be visited
    frontier: BinaryHeap<HeapElement<'a>>,
    pushed: usize,
}

impl<'a, G: Network> Search<'a, G> {
    fn new(config: &'a ShortestPathConfig, graph: &'a G, origin: &str) -> Result<Self, GraphError> {
        let origin = graph
            .places()
            .find(|p| *p == origin)
            .ok_or_else(|| GraphError::UnknownPlace(origin.into()))?;

        let mut search = Self {
            config,
            graph,
            shortest_distances: FxHashMap::from_iter([(origin, Distance::ZERO)]),
            previous_map: FxHashMap::default(),
            frontier: BinaryHeap::new(),
            pushed: 0,
        };

        search.push(origin, Distance::ZERO);
        Ok(search)
    }

    fn push(&mut self, place: &'a Place, distance: Distance) {
        self.frontier.push(HeapElement {
            distance,
            sequence: self.pushed,
            place,
        });
        self.pushed += 1;
    }

    /// Pops the closest place whose distance is final, relaxing the routes that leave from it.
    /// Returns None once every reachable place has been settled.
    fn settle_next(&mut self) -> Option<(&'a Place, Distance)> {
        let graph = self.graph;

        while let Some(element) = self.frontier.pop() {
            // check if we already know a cheaper way to get to this place from the origin
            let shortest_distance = self.distance_to(element.place);
            if element.distance > shortest_distance {
                continue;
            }

            for (neighbor, route) in graph.place_neighbors(element.place.as_str()) {
                let distance = element.distance + route;
                if distance > self.config.max_distance {
                    continue;
                }

                // check if we can follow the current path to reach the neighbor in a cheaper way
                if distance < self.distance_to(neighbor) {
                    trace!("Relaxing {neighbor} via {} to {distance}", element.place);

                    // Relax: we have now found a better way that we are going to explore
                    self.shortest_distances.insert(neighbor, distance);
                    self.previous_map.insert(neighbor, element.place);
                    self.push(neighbor, distance);
                }
            }

            return Some((element.place, element.distance));
        }

        None
    }

    fn distance_to(&self, place: &Place) -> Distance {
        self.shortest_distances
            .get(place)
            .copied()
            .unwrap_or(Distance::INFINITY)
    }

    /// Unpacks the shortest path from destination back to origin.
    fn unpack_path(&self, destination: &'a Place, distance: Distance) -> Path {
        let mut places = vec![destination.clone()];
        let mut next = destination;

        while let Some(&previous) = self.previous_map.get(next) {
            next = previous;
            places.push(previous.clone());
        }

        places.reverse();
        Path { distance, places }
    }
}

/// Computes the minimum distance path between two places of the graph.
///
/// Unreachable destinations are not an error and produce [`ShortestPath::NoPath`], whereas
/// origins or destinations that don't belong to the graph fail with
/// [`GraphError::UnknownPlace`].
///
/// When more than one path has the minimum distance, the one whose last route was relaxed first
/// is returned: queue entries with equal distance are popped in the order they were pushed, and a
/// tentative distance is only replaced by a strictly shorter one.
pub fn shortest_path<G: Network>(
    config: &ShortestPathConfig,
    graph: &G,
    origin: &str,
    destination: &str,
) -> Result<ShortestPath, GraphError> {
    debug!("Computing shortest path {origin} -> {destination} with {config:?}");

    if !graph.contains_place(destination) {
        return Err(GraphError::UnknownPlace(destination.into()));
    }

    let mut search = Search::new(config, graph, origin)?;

    while let Some((place, distance)) = search.settle_next() {
        if place == destination {
            let path = search.unpack_path(place, distance);
            debug!("Found shortest path {origin} -> {destination}: {distance}");
            return Ok(ShortestPath::Found(path));
        }
    }

    debug!("No path from {origin} to {destination}");
    Ok(ShortestPath::NoPath)
}

/// Computes the shortest distance from the origin to every place that can be reached from it,
/// the origin included.
pub fn shortest_distances<G: Network>(
    config: &ShortestPathConfig,
    graph: &G,
    origin: &str,
) -> Result<FxHashMap<Place, Distance>, GraphError> {
    debug!("Computing shortest distances from {origin} with {config:?}");

    let mut search = Search::new(config, graph, origin)?;
    let mut distances = FxHashMap::default();

    while let Some((place, distance)) = search.settle_next() {
        distances.insert(place.clone(), distance);
    }

    Ok(distances)
}
