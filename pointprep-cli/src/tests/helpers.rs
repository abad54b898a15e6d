//! Test helpers for staging exports and emulating layered configuration.

use super::*;
use crate::clean::CleanConfig;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const HEADED_WITH_DUPLICATE: &str = "::type,::id,name,::lat,::lon\n\
                                                way,1,Cafe,10.0,20.0\n\
                                                way,1,Cafe Dup,10.0,20.0\n";

pub(super) const MIXED_TYPES: &str = "@type,@id,name,@lat,@lon\n\
                                      way,1,Park,1.0,1.0\n\
                                      relation,2,Route,2.0,2.0\n\
                                      node,3,Tree,3.0,3.0\n\
                                      relation,4,Boundary,4.0,4.0\n";

#[derive(Debug, Clone, Default)]
pub(super) struct LayerOverrides {
    pub(super) input: Option<Utf8PathBuf>,
    pub(super) output: Option<Utf8PathBuf>,
    pub(super) min_name_len: Option<i64>,
}

#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace path");
        Self { _dir: dir, root }
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write export");
        path
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn parse<I, S>(args: I) -> Result<CleanArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let invocation = std::iter::once("pointprep".to_owned()).chain(args.into_iter().map(Into::into));
    CleanArgs::try_parse_from(invocation).map_err(CliError::ArgumentParsing)
}

pub(super) fn args_for(input: &Utf8Path, output: &Utf8Path) -> CleanArgs {
    CleanArgs {
        input: Some(input.to_path_buf()),
        output: Some(output.to_path_buf()),
        ..CleanArgs::default()
    }
}

pub(super) fn read_output(path: &Utf8Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read cleaned output")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Resolve a configuration as if `file_layer` and `env_layer` had been
/// loaded beneath the CLI values, with the environment above files.
pub(super) fn merge_layers(
    mut cli_args: CleanArgs,
    file_layer: Option<LayerOverrides>,
    env_layer: Option<LayerOverrides>,
) -> Result<CleanConfig, CliError> {
    merge_field(
        &mut cli_args.input,
        extract_field(&env_layer, |layer| &layer.input),
        extract_field(&file_layer, |layer| &layer.input),
    );
    merge_field(
        &mut cli_args.output,
        extract_field(&env_layer, |layer| &layer.output),
        extract_field(&file_layer, |layer| &layer.output),
    );
    merge_field(
        &mut cli_args.min_name_len,
        extract_field(&env_layer, |layer| &layer.min_name_len),
        extract_field(&file_layer, |layer| &layer.min_name_len),
    );
    CleanConfig::try_from(cli_args)
}

fn merge_field<T: Clone>(target: &mut Option<T>, env_value: Option<T>, file_value: Option<T>) {
    if target.is_none()
        && let Some(value) = env_value.or(file_value)
    {
        *target = Some(value);
    }
}

fn extract_field<T: Clone>(
    layer: &Option<LayerOverrides>,
    accessor: fn(&LayerOverrides) -> &Option<T>,
) -> Option<T> {
    layer.as_ref().and_then(|entry| accessor(entry).clone())
}
