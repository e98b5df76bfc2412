//! Session controller holding the single current recipe (or none) and
//! gating the user-facing operations on whether a recipe is loaded.

use log::{debug, info};
use std::fmt;

use crate::recipe_model::Recipe;

/// Whether the session currently holds a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No recipe entered yet (or the last one was cleared)
    Empty,
    /// A recipe is loaded and can be displayed, scaled, or reset
    Loaded,
}

/// Precondition failures reported by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Display, scale, or reset was requested with no recipe loaded
    NoRecipe,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoRecipe => write!(f, "no recipe entered yet"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Holds at most one recipe for the lifetime of the process
#[derive(Debug, Default)]
pub struct Session {
    recipe: Option<Recipe>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self { recipe: None }
    }

    pub fn state(&self) -> SessionState {
        if self.recipe.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Empty
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.recipe.is_some()
    }

    /// Install a fresh recipe with the given name, unconditionally
    /// discarding any previous one, and return it for population.
    ///
    /// The recipe is installed before any ingredients or steps are
    /// collected; if input collection is abandoned partway through, the
    /// partially populated recipe stays loaded.
    pub fn begin_recipe(&mut self, name: &str) -> &mut Recipe {
        if self.recipe.is_some() {
            debug!("replacing previously loaded recipe");
        }
        info!("new recipe started: {name:?}");
        self.recipe.insert(Recipe::new(name))
    }

    /// Render the loaded recipe as display text
    pub fn display(&self) -> Result<String, SessionError> {
        match &self.recipe {
            Some(recipe) => Ok(recipe.to_string()),
            None => Err(SessionError::NoRecipe),
        }
    }

    /// Scale the loaded recipe's ingredient quantities by `factor`
    pub fn scale(&mut self, factor: f64) -> Result<(), SessionError> {
        match &mut self.recipe {
            Some(recipe) => {
                recipe.scale(factor);
                info!("recipe scaled by factor {factor}");
                Ok(())
            }
            None => Err(SessionError::NoRecipe),
        }
    }

    /// Restore the loaded recipe's ingredient quantities to their
    /// originally entered values
    pub fn reset(&mut self) -> Result<(), SessionError> {
        match &mut self.recipe {
            Some(recipe) => {
                recipe.reset();
                info!("recipe reset to original quantities");
                Ok(())
            }
            None => Err(SessionError::NoRecipe),
        }
    }

    /// Drop the loaded recipe, if any
    pub fn clear(&mut self) {
        if self.recipe.take().is_some() {
            info!("recipe data cleared");
        }
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }
}
