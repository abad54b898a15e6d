//! Behavioural coverage for the read, prepare and write pipeline.

use pointprep_core::{
    CleanOptions, PipelineError, PreparedPoints, ReadStats, TypeFilter, WriteSummary, read_points,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct CleanRun {
    stats: ReadStats,
    summary: WriteSummary,
    output: String,
}

#[derive(Debug, Default)]
struct CleanWorld {
    input: RefCell<String>,
    options: RefCell<CleanOptions>,
    outcome: RefCell<Option<Result<CleanRun, PipelineError>>>,
}

impl CleanWorld {
    fn set_input(&self, input: &str) {
        self.input.replace(input.to_owned());
    }

    fn update_options(&self, update: impl FnOnce(CleanOptions) -> CleanOptions) {
        let current = self.options.borrow().clone();
        self.options.replace(update(current));
    }

    fn run(&self) -> Result<CleanRun, PipelineError> {
        let input = self.input.borrow();
        let options = self.options.borrow();
        let read = read_points(input.as_bytes(), &options)?;
        let prepared = PreparedPoints::new(read.points)?;
        let mut buffer = Vec::new();
        let summary = prepared.write_csv(&mut buffer, options.dedupe)?;
        let output = String::from_utf8(buffer).expect("cleaned output is UTF-8");
        Ok(CleanRun {
            stats: read.stats,
            summary,
            output,
        })
    }

    fn data_rows(&self) -> Vec<String> {
        let outcome = self.outcome.borrow();
        let run = outcome
            .as_ref()
            .expect("pipeline should have run")
            .as_ref()
            .expect("pipeline should succeed");
        run.output.lines().skip(1).map(str::to_owned).collect()
    }
}

#[fixture]
fn clean_world() -> CleanWorld {
    CleanWorld::default()
}

#[given("a headed export with a duplicated way")]
fn duplicated_way(#[from(clean_world)] world: &CleanWorld) {
    world.set_input(
        "::type,::id,name,::lat,::lon\n\
         way,1,Cafe,10.0,20.0\n\
         way,1,Cafe Dup,10.0,20.0\n",
    );
}

#[given("a headed export with an unnamed node")]
fn unnamed_node(#[from(clean_world)] world: &CleanWorld) {
    world.set_input("@type,@id,name,@lat,@lon\nnode,314,,48.85,2.35\n");
}

#[given("a headerless export with one narrow row")]
fn headerless_with_narrow_row(#[from(clean_world)] world: &CleanWorld) {
    world.set_input(
        "way,1,Hall,yes,4,High St,51.5,-0.1\n\
         way,2,Narrow,51.5,-0.1\n",
    );
}

#[given("a headed export mixing ways and relations")]
fn mixed_types(#[from(clean_world)] world: &CleanWorld) {
    world.set_input(
        "type,id,name,lat,lon\n\
         way,1,Park,1.0,1.0\n\
         relation,2,Route,2.0,2.0\n\
         node,3,Tree,3.0,3.0\n\
         relation,4,Boundary,4.0,4.0\n",
    );
}

#[given("only relations are kept")]
fn relations_only(#[from(clean_world)] world: &CleanWorld) {
    world.update_options(|options| options.with_type_filter(TypeFilter::RelationsOnly));
}

#[given("names must be at least 20 characters long")]
fn long_names_only(#[from(clean_world)] world: &CleanWorld) {
    world.update_options(|options| options.with_min_name_len(20));
}

#[when("I clean the export")]
fn clean_export(#[from(clean_world)] world: &CleanWorld) {
    let outcome = world.run();
    world.outcome.replace(Some(outcome));
}

#[then("exactly one row is written for way 1 named Cafe at the origin")]
fn single_cafe_row(#[from(clean_world)] world: &CleanWorld) {
    assert_eq!(world.data_rows(), vec!["way:1,Cafe,10,20,0,0".to_owned()]);
}

#[then("the name column holds the identity key")]
fn name_is_identity_key(#[from(clean_world)] world: &CleanWorld) {
    assert_eq!(
        world.data_rows(),
        vec!["node:314,node:314,48.85,2.35,0,0".to_owned()]
    );
}

#[then("the narrow row is rejected and not written")]
fn narrow_row_rejected(#[from(clean_world)] world: &CleanWorld) {
    let outcome = world.outcome.borrow();
    let run = outcome
        .as_ref()
        .expect("pipeline should have run")
        .as_ref()
        .expect("pipeline should succeed");
    assert_eq!(run.stats.rejected, 1);
    assert_eq!(run.summary.written, 1);
    let rows = world.data_rows();
    assert!(rows.iter().all(|row| !row.starts_with("way:2,")));
}

#[then("every written row is a relation")]
fn only_relations(#[from(clean_world)] world: &CleanWorld) {
    let rows = world.data_rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.starts_with("relation:")));
}

#[then("the run reports that no usable rows were found")]
fn no_usable_rows(#[from(clean_world)] world: &CleanWorld) {
    let outcome = world.outcome.borrow();
    let result = outcome.as_ref().expect("pipeline should have run");
    assert!(matches!(result, Err(PipelineError::NoUsableRows)));
}

macro_rules! register_clean_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/clean_pipeline.feature", name = $scenario_title)]
        fn $fn_name(#[from(clean_world)] world: CleanWorld) {
            let _ = world;
        }
    };
}

register_clean_scenario!(
    keeps_first_duplicate,
    "keeping the first of two duplicated elements"
);
register_clean_scenario!(
    names_unnamed_elements,
    "naming unnamed elements after their identity key"
);
register_clean_scenario!(
    skips_narrow_rows,
    "skipping narrow rows in a headerless export"
);
register_clean_scenario!(keeps_only_relations, "keeping only relations");
register_clean_scenario!(
    fails_without_usable_rows,
    "failing when no row survives filtering"
);
