//! Given steps for board movement BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::given;

#[given(r#"a column "{column}" holding "{tasks}""#)]
fn column_holding(
    world: &mut BoardWorld,
    column: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    world.add_column(&column, &tasks, None)
}

#[given(r#"an empty column "{column}""#)]
fn empty_column(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    world.add_column(&column, "", None)
}

#[given(r#"a limited column "{column}" of {limit:u64} holding "{tasks}""#)]
fn limited_column_holding(
    world: &mut BoardWorld,
    column: String,
    limit: u64,
    tasks: String,
) -> Result<(), eyre::Report> {
    world.add_column(&column, &tasks, Some(usize::try_from(limit)?))
}
