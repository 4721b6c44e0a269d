use routegraph::{Distance, GraphStore, Network, Place, karachi_graph};

/// Neighbors of every place, sorted, in listing order of the places.
pub type Snapshot = Vec<(Place, Vec<(Place, Distance)>)>;

pub fn karachi() -> GraphStore {
    karachi_graph().unwrap()
}

pub fn snapshot(graph: &GraphStore) -> Snapshot {
    graph
        .list_places()
        .iter()
        .map(|place| {
            let mut neighbors: Vec<_> = graph
                .place_neighbors(place.as_str())
                .map(|(neighbor, distance)| (neighbor.clone(), distance))
                .collect();
            neighbors.sort();
            (place.clone(), neighbors)
        })
        .collect()
}

/// Checks the symmetry and the closure of the neighbors of every place.
pub fn assert_consistent(graph: &GraphStore) {
    assert_eq!(graph.place_count(), graph.places().count());

    for place in graph.places() {
        let neighbors = graph.neighbors_of(place.as_str()).unwrap();
        assert!(!neighbors.contains_key(place.as_str()), "{place} loops");

        for (neighbor, distance) in neighbors {
            assert!(graph.contains_place(neighbor.as_str()), "{neighbor} dangling");
            assert_eq!(
                graph.route_distance(neighbor.as_str(), place.as_str()),
                Some(*distance),
                "route {place} <-> {neighbor} is not symmetric"
            );
        }
    }
}

/// Minimum distance over all the simple paths from origin to destination.
pub fn brute_force_distance(
    graph: &GraphStore,
    origin: &str,
    destination: &str,
) -> Option<Distance> {
    fn visit<'a>(
        graph: &'a GraphStore,
        path: &mut Vec<&'a Place>,
        distance: Distance,
        destination: &str,
        best: &mut Option<Distance>,
    ) {
        let Some(&current) = path.last() else {
            return;
        };

        if current == destination {
            *best = Some(best.map_or(distance, |b| b.min(distance)));
            return;
        }

        for (neighbor, route) in graph.place_neighbors(current.as_str()) {
            if path.contains(&neighbor) {
                continue;
            }

            path.push(neighbor);
            visit(graph, path, distance + route, destination, best);
            path.pop();
        }
    }

    let origin = graph.list_places().iter().find(|p| *p == origin)?;

    let mut best = None;
    visit(graph, &mut vec![origin], Distance::ZERO, destination, &mut best);
    best
}
