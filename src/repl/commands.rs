//! REPL Commands
//!
//! The command table and the session state the commands act on.

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::api::CatalogClient;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;

// == Command ==
/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Resolves a (lowercased) command word.
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == word)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Display the names of the next 20 location areas",
            Command::MapBack => "Display the previous 20 location areas",
            Command::Explore => "List the Pokemon found in a location area",
            Command::Catch => "Throw a Pokeball at a Pokemon",
            Command::Inspect => "Show details of a caught Pokemon",
            Command::Pokedex => "List every Pokemon you have caught",
        }
    }
}

/// Returns the only argument, or the matching argument error.
fn single_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str> {
    match args {
        [] => Err(PokedexError::MissingArgument(what)),
        [only] => Ok(only),
        _ => Err(PokedexError::TooManyArguments(what)),
    }
}

// == Session ==
/// Per-run REPL state: paging cursors, caught Pokemon and the catch RNG.
pub struct Session {
    client: CatalogClient,
    next: Option<String>,
    previous: Option<String>,
    pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    // == Constructor ==
    /// Creates a session with an entropy-seeded RNG.
    pub fn new(client: CatalogClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-provided RNG, for reproducible catches.
    pub fn with_rng(client: CatalogClient, rng: StdRng) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    // == Accessors ==
    /// Returns the catalog client.
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Ends the session, handing back its client.
    pub fn into_client(self) -> CatalogClient {
        self.client
    }

    /// Returns the caught Pokemon, keyed by name.
    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    // == Dispatch ==
    /// Runs `command` with the words that followed it.
    ///
    /// `exit` only prints its farewell; ending the loop is the caller's job.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut W,
    ) -> Result<()> {
        debug!(command = command.name(), ?args, "Executing command");
        match command {
            Command::Help => self.help(out),
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                Ok(())
            }
            Command::Map => self.map(out).await,
            Command::MapBack => self.map_back(out).await,
            Command::Explore => self.explore(single_arg(args, "location area name")?, out).await,
            Command::Catch => self.catch(single_arg(args, "pokemon name")?, out).await,
            Command::Inspect => self.inspect(single_arg(args, "pokemon name")?, out),
            Command::Pokedex => self.list_pokedex(out),
        }
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let page = self.client.location_page(self.next.as_deref()).await?;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(previous) = self.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };

        let page = self.client.location_page(Some(&previous)).await?;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(&self, area: &str, out: &mut W) -> Result<()> {
        let location = self.client.location_area(area).await?;
        writeln!(out, "Exploring {}...", area)?;
        writeln!(out, "Found Pokemon:")?;
        for encounter in &location.pokemon_encounters {
            writeln!(out, "- {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        let roll: f64 = self.rng.gen();
        if roll < pokemon.catch_rate() {
            writeln!(out, "{} was caught!", pokemon.name)?;
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty.")?;
            return Ok(());
        }
        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.keys() {
            writeln!(out, "- {}", name)?;
        }
        Ok(())
    }
}
