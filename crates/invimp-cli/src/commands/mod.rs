//! CLI subcommands.

pub mod config;
pub mod convert;
pub mod inspect;

use std::path::Path;

use invimp_core::{ChatModelClient, InvimpConfig, ModelExtractor, NullModel};

/// Load the pipeline configuration, defaulting when no file is given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<InvimpConfig> {
    match config_path {
        Some(path) => Ok(InvimpConfig::from_file(Path::new(path))?),
        None => Ok(InvimpConfig::default()),
    }
}

/// Build the structured-model provider from configuration.
pub fn build_model(config: &InvimpConfig) -> Box<dyn ModelExtractor> {
    if config.model.enabled {
        Box::new(ChatModelClient::new(config.model.clone()))
    } else {
        Box::new(NullModel)
    }
}
