#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod render;
mod routing;
mod seed;
mod shell;

pub use error::{GraphError, ShellError};
pub use graph::Network;
pub use graph::path::{Path, is_path_connected, path_distance};
pub use graph::store::GraphStore;
pub use model::{Distance, Place};
pub use render::render_dot;
pub use routing::{ShortestPath, ShortestPathConfig, shortest_distances, shortest_path};
pub use seed::{KARACHI_PLACES, KARACHI_ROUTES, karachi_graph};
pub use shell::{Command, LinePrompt, Prompt, Shell, ShellConfig};
