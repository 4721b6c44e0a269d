//! Numbered text menu to edit the graph and query shortest paths.
//!
//! The shell owns the graph store and drives it through a [`Prompt`], writing every message to
//! its output. Input is parsed and validated here, the store only ever sees place names and
//! distances.

use std::io::{BufRead, Write};

use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::{
    GraphError, GraphStore, Network, Place, ShellError, ShortestPath, ShortestPathConfig,
    render_dot, shortest_path,
};

/// Source of the user answers.
pub trait Prompt {
    /// Shows the message and reads one line of input, trimmed.
    /// Fails with [`ShellError::EndOfInput`] once there is nothing left to read.
    fn prompt(&mut self, message: &str) -> Result<String, ShellError>;
}

/// Prompt that writes its messages to an output and reads the answers from an input, one line
/// per answer.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String, ShellError> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::EndOfInput);
        }

        Ok(line.trim().to_owned())
    }
}

/// Entries of the main menu, numbered as they are listed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter, strum::FromRepr,
)]
#[repr(u8)]
pub enum Command {
    #[strum(to_string = "Find shortest path")]
    ShortestPath = 1,
    #[strum(to_string = "Add a new place")]
    AddPlace = 2,
    #[strum(to_string = "Remove a place")]
    RemovePlace = 3,
    #[strum(to_string = "Add or update a route")]
    UpdateRoute = 4,
    #[strum(to_string = "Remove a route")]
    RemoveRoute = 5,
    #[strum(to_string = "Visualize graph")]
    Visualize = 6,
    #[strum(to_string = "Exit")]
    Exit = 7,
}

impl Command {
    /// Parses the menu number of a command.
    pub fn parse(choice: &str) -> Option<Self> {
        choice.trim().parse().ok().and_then(Self::from_repr)
    }

    pub const fn number(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShellConfig {
    /// Configuration of the shortest path queries.
    pub routing: ShortestPathConfig,
    /// Print the DOT rendering of the graph, with the path highlighted, after every path found.
    pub render_paths: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            routing: ShortestPathConfig::default(),
            render_paths: true,
        }
    }
}

#[derive(Debug)]
pub struct Shell<P, W> {
    config: ShellConfig,
    graph: GraphStore,
    prompt: P,
    output: W,
}

impl<P: Prompt, W: Write> Shell<P, W> {
    pub fn new(config: ShellConfig, graph: GraphStore, prompt: P, output: W) -> Self {
        Self {
            config,
            graph,
            prompt,
            output,
        }
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn into_graph(self) -> GraphStore {
        self.graph
    }

    /// Shows the menu and executes the chosen commands until the user exits or the input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.print_menu()?;

            let choice = match self.prompt.prompt("Enter your choice") {
                Err(ShellError::EndOfInput) => return Ok(()),
                choice => choice?,
            };

            match Command::parse(&choice) {
                Some(Command::Exit) => {
                    writeln!(self.output, "Exiting program. Goodbye!")?;
                    return Ok(());
                }
                Some(command) => match self.execute(command) {
                    Err(ShellError::EndOfInput) => return Ok(()),
                    result => result?,
                },
                None => {
                    warn!("Invalid menu choice {choice:?}");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    /// Executes a single menu command.
    pub fn execute(&mut self, command: Command) -> Result<(), ShellError> {
        debug!("Executing {command}");

        match command {
            Command::ShortestPath => self.find_shortest_path(),
            Command::AddPlace => self.add_place(),
            Command::RemovePlace => self.remove_place(),
            Command::UpdateRoute => self.update_route(),
            Command::RemoveRoute => self.remove_route(),
            Command::Visualize => {
                let dot = render_dot(&self.graph, None);
                self.output.write_all(dot.as_bytes())?;
                Ok(())
            }
            Command::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\nMenu:")?;
        for command in Command::iter() {
            writeln!(self.output, "{}. {command}", command.number())?;
        }
        Ok(())
    }

    fn list_places(&mut self) -> Result<(), ShellError> {
        for (index, place) in self.graph.list_places().iter().enumerate() {
            writeln!(self.output, "{}. {place}", index + 1)?;
        }
        Ok(())
    }

    /// Lets the user pick a place by its number in the listing.
    /// Returns None, after telling the user why, if the answer is not a listed number.
    fn select_place(&mut self, message: &str) -> Result<Option<Place>, ShellError> {
        writeln!(self.output, "\nAvailable places:")?;
        self.list_places()?;

        let answer = self.prompt.prompt(message)?;
        let Ok(choice) = answer.parse::<usize>() else {
            warn!("Invalid place number {answer:?}");
            writeln!(self.output, "Invalid input. Please enter a number.")?;
            return Ok(None);
        };

        let place = choice
            .checked_sub(1)
            .and_then(|index| self.graph.place_at(index))
            .cloned();

        if place.is_none() {
            warn!("Place number {choice} out of range");
            writeln!(self.output, "Invalid choice. Please select a valid number.")?;
        }

        Ok(place)
    }

    /// Asks for a route distance, returns None if the answer is not a number.
    fn read_distance(&mut self, message: &str) -> Result<Option<f64>, ShellError> {
        let answer = self.prompt.prompt(message)?;
        match answer.parse::<f64>() {
            Ok(km) => Ok(Some(km)),
            Err(_) => {
                warn!("Invalid distance {answer:?}");
                writeln!(self.output, "Invalid distance. Please enter a numeric value.")?;
                Ok(None)
            }
        }
    }

    fn find_shortest_path(&mut self) -> Result<(), ShellError> {
        let origin = self.select_place("Enter the number of the starting place")?;
        let destination = self.select_place("Enter the number of the destination place")?;
        let (Some(origin), Some(destination)) = (origin, destination) else {
            return Ok(());
        };

        let route = shortest_path(
            &self.config.routing,
            &self.graph,
            origin.as_str(),
            destination.as_str(),
        );

        match route {
            Ok(ShortestPath::Found(path)) => {
                let places: Vec<_> = path.places.iter().map(Place::as_str).collect();
                writeln!(self.output, "Shortest path: {}", places.join(" -> "))?;
                writeln!(self.output, "Total distance: {}", path.distance)?;

                if self.config.render_paths {
                    let dot = render_dot(&self.graph, Some(&path));
                    self.output.write_all(dot.as_bytes())?;
                }
            }
            Ok(ShortestPath::NoPath) => {
                writeln!(
                    self.output,
                    "No path exists between {origin} and {destination}."
                )?;
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }

        Ok(())
    }

    fn add_place(&mut self) -> Result<(), ShellError> {
        let name = self.prompt.prompt("Enter the name of the new place")?;
        if name.is_empty() {
            writeln!(self.output, "Place name cannot be empty.")?;
            return Ok(());
        }

        if let Err(error) = self.graph.add_place(name.as_str()) {
            match error {
                GraphError::DuplicateIdentifier(place) => {
                    writeln!(self.output, "{place} already exists in the graph.")?
                }
                error => writeln!(self.output, "{error}")?,
            }
            return Ok(());
        }

        loop {
            let neighbor = self.prompt.prompt(&format!(
                "Enter a place connected to {name} (or 'done' to finish)"
            ))?;

            if neighbor.eq_ignore_ascii_case("done") {
                break;
            }

            if !self.graph.contains_place(&neighbor) {
                writeln!(self.output, "{neighbor} does not exist in the graph.")?;
                continue;
            }

            let message = format!("Enter the distance from {name} to {neighbor}");
            let Some(km) = self.read_distance(&message)? else {
                continue;
            };

            if let Err(error) = self.graph.add_or_update_route(&name, &neighbor, km) {
                writeln!(self.output, "{error}")?;
            }
        }

        Ok(())
    }

    fn remove_place(&mut self) -> Result<(), ShellError> {
        let Some(place) = self.select_place("Enter the number of the place to remove")? else {
            return Ok(());
        };

        match self.graph.remove_place(place.as_str()) {
            Ok(()) => writeln!(self.output, "{place} and its routes have been removed.")?,
            Err(error) => writeln!(self.output, "{error}")?,
        }

        Ok(())
    }

    fn update_route(&mut self) -> Result<(), ShellError> {
        let first = self.select_place("Enter the number of the first place")?;
        let second = self.select_place("Enter the number of the second place")?;
        let (Some(first), Some(second)) = (first, second) else {
            return Ok(());
        };

        let message = format!("Enter the distance between {first} and {second}");
        let Some(km) = self.read_distance(&message)? else {
            return Ok(());
        };

        match self
            .graph
            .add_or_update_route(first.as_str(), second.as_str(), km)
        {
            Ok(()) => writeln!(
                self.output,
                "Route between {first} and {second} has been added/updated."
            )?,
            Err(error) => writeln!(self.output, "{error}")?,
        }

        Ok(())
    }

    fn remove_route(&mut self) -> Result<(), ShellError> {
        let first = self.select_place("Enter the number of the first place")?;
        let second = self.select_place("Enter the number of the second place")?;
        let (Some(first), Some(second)) = (first, second) else {
            return Ok(());
        };

        match self.graph.remove_route(first.as_str(), second.as_str()) {
            Ok(()) => writeln!(
                self.output,
                "Route between {first} and {second} has been removed."
            )?,
            Err(error) => writeln!(self.output, "{error}")?,
        }

        Ok(())
    }
}
