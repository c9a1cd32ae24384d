//! Built-in recipe tables, one module per family of objects.

pub mod bodies;
pub mod buildings;
pub mod nature;
pub mod resources;
pub mod ruins;

use super::Catalog;

/// Fill `catalog` with every built-in recipe.
pub fn register_all(catalog: &mut Catalog) {
    buildings::register(catalog);
    resources::register(catalog);
    nature::register(catalog);
    ruins::register(catalog);
    bodies::register(catalog);
}
