//! Solver registry for looking up and instantiating puzzles by year and day

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Flat storage layout
// ============================================================================

/// First Advent of Code event
pub const FIRST_YEAR: u16 = 2015;
/// Number of events the registry has room for (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Puzzles per event
pub const DAYS_PER_YEAR: usize = 25;
/// Total number of slots
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

#[inline]
fn slot_of(year: u16, day: u8) -> Option<usize> {
    if !(FIRST_YEAR..FIRST_YEAR + MAX_YEARS as u16).contains(&year) {
        return None;
    }
    if day == 0 || day as usize > DAYS_PER_YEAR {
        return None;
    }
    Some((year - FIRST_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

#[inline]
fn year_day_of(slot: usize) -> (u16, u8) {
    let year = FIRST_YEAR + (slot / DAYS_PER_YEAR) as u16;
    let day = (slot % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factories
// ============================================================================

/// Parses an input and wraps it in a type-erased solver
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a puzzle without instantiating it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
    pub title: &'static str,
}

struct Entry {
    factory: SolverFactory,
    parts: u8,
    title: &'static str,
}

fn instantiate<'a, S: Solver + 'static>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}

// ============================================================================
// Builder
// ============================================================================

/// Collects solvers, rejecting duplicates and unsupported dates.
///
/// ```
/// use advent_core::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Echo>(2015, 1, "Echo")
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2015, 1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory with explicit metadata.
    ///
    /// Fails if the date is outside 2015-2034 / 1-25 or already taken.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        title: &'static str,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let slot = slot_of(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries[slot].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries[slot] = Some(Entry {
            factory: Box::new(factory),
            parts,
            title,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type; its part count comes from `S::PARTS`.
    pub fn register_solver<S: Solver + 'static>(
        self,
        year: u16,
        day: u8,
        title: &'static str,
    ) -> Result<Self, RegistrationError> {
        self.register(year, day, title, S::PARTS, move |input: &str| {
            instantiate::<S>(year, day, input)
        })
    }

    /// Register every plugin submitted with `#[derive(Puzzle)]`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// ```no_run
    /// # use advent_core::SolverRegistryBuilder;
    /// let grid_puzzles = SolverRegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable year/day → solver lookup with O(1) access
pub struct SolverRegistry {
    entries: Vec<Option<Entry>>,
}

impl SolverRegistry {
    /// Metadata for every registered puzzle, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(slot, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = year_day_of(slot);
                PuzzleInfo {
                    year,
                    day,
                    parts: e.parts,
                    title: e.title,
                }
            })
        })
    }

    pub fn info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        let slot = slot_of(year, day)?;
        self.entries[slot].as_ref().map(|e| PuzzleInfo {
            year,
            day,
            parts: e.parts,
            title: e.title,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `input` with the solver registered for `year`/`day`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let slot = slot_of(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[slot]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Object-safe hook that lets heterogeneous solver types sit in one plugin list.
///
/// Every `Solver + Sync + 'static` gets it through the blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        plugin: &SolverPlugin,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        plugin: &SolverPlugin,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(plugin.year, plugin.day, plugin.title)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted to the global plugin list, normally by `#[derive(Puzzle)]`
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    /// Puzzle title as shown on the event page
    pub title: &'static str,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels for filtering, e.g. "grid" or "parsing"
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_round_trips_at_the_edges() {
        for (year, day) in [(2015, 1), (2015, 25), (2021, 15), (2034, 25)] {
            let slot = slot_of(year, day).unwrap();
            assert_eq!(year_day_of(slot), (year, day));
        }
        assert_eq!(slot_of(2034, 25), Some(CAPACITY - 1));
    }

    #[test]
    fn slot_rejects_unsupported_dates() {
        assert_eq!(slot_of(2014, 1), None);
        assert_eq!(slot_of(2035, 1), None);
        assert_eq!(slot_of(2021, 0), None);
        assert_eq!(slot_of(2021, 26), None);
    }
}
