//! # Recipe Data Model
//!
//! This module defines the data structures for a single recipe: its name,
//! an ordered list of ingredients with quantities and units, and an ordered
//! list of preparation steps. It also implements the scaling arithmetic.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: a name, a unit of measurement, and two quantities — the
//!   quantity as originally entered and the current (possibly scaled) one
//! - **Step**: one ordered preparation instruction
//! - **Recipe**: owns its ingredients and steps; scaling always recomputes
//!   from the original quantities, so repeated scale calls never compound
//!   and a reset always restores the entered values
//!
//! ## Usage
//!
//! ```rust
//! use recipe_book::recipe_model::Recipe;
//!
//! let mut recipe = Recipe::new("Pancakes");
//! recipe.add_ingredient("Flour", 2, "cups");
//! recipe.scale(2.0);
//! assert_eq!(recipe.ingredients[0].quantity, 4);
//! recipe.reset();
//! assert_eq!(recipe.ingredients[0].quantity, 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

const BANNER: &str = "***********************************";

/// A single ingredient line in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// The name of the ingredient (e.g., "Flour", "Sugar")
    pub name: String,

    /// Unit of measurement exactly as entered (e.g., "g", "cups"); never
    /// validated or normalized
    pub unit: String,

    /// Quantity captured when the ingredient was added; the fixed baseline
    /// for every scale and reset operation
    pub original_quantity: i32,

    /// Current quantity, equal to the original quantity until a scale is
    /// applied to the owning recipe
    pub quantity: i32,
}

/// One ordered preparation instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Free-form description of the instruction
    pub description: String,
}

/// A recipe with its ingredients and preparation steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// The name of the recipe
    pub name: String,

    /// Ingredients in the order they were added; duplicates by name are
    /// kept as separate entries, never merged
    pub ingredients: Vec<Ingredient>,

    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl Ingredient {
    /// Create an ingredient; the entered quantity becomes both the current
    /// and the original quantity
    pub fn new(name: &str, quantity: i32, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            original_quantity: quantity,
            quantity,
        }
    }
}

impl Step {
    /// Create a step from its description
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
        }
    }
}

impl Recipe {
    /// Create a new recipe with no ingredients or steps. The name is taken
    /// as-is; empty or blank names are accepted.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Append an ingredient. The quantity is stored both as the current and
    /// the original quantity.
    pub fn add_ingredient(&mut self, name: &str, quantity: i32, unit: &str) {
        self.ingredients.push(Ingredient::new(name, quantity, unit));
    }

    /// Append a preparation step
    pub fn add_step(&mut self, description: &str) {
        self.steps.push(Step::new(description));
    }

    /// Scale every ingredient to `original_quantity * factor`, truncated
    /// toward zero. Always recomputes from the original quantity, so the
    /// latest factor wins and repeated calls never compound. Zero and
    /// negative factors are applied as given.
    pub fn scale(&mut self, factor: f64) {
        for ingredient in &mut self.ingredients {
            ingredient.quantity = (ingredient.original_quantity as f64 * factor) as i32;
        }
    }

    /// Restore every ingredient's quantity to the value it was entered
    /// with. Idempotent.
    pub fn reset(&mut self) {
        for ingredient in &mut self.ingredients {
            ingredient.quantity = ingredient.original_quantity;
        }
    }

    /// Number of ingredients
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.name, self.quantity, self.unit)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "Recipe Name: {}", self.name)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "{ingredient}")?;
        }
        writeln!(f, "Steps:")?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step.description)?;
        }
        write!(f, "{BANNER}")
    }
}
