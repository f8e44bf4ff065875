use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ethers::abi::{Abi, Token};
use ethers::types::Bytes;
use serde::Deserialize;

use crate::request::Initializer;

/// Compiled contract artifact in the hardhat layout (`abi` + `bytecode`).
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(format!("{name}.json"));
        let data = fs::read_to_string(&path)
            .with_context(|| format!("missing contract artifact {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("malformed contract artifact {}", path.display()))
    }
}

pub fn initializer_calldata(abi: &Abi, initializer: &Initializer) -> Result<Vec<u8>> {
    let args: Vec<Token> = initializer
        .args
        .iter()
        .cloned()
        .map(Token::String)
        .collect();
    let function = abi.function(&initializer.method_name)?;
    Ok(function.encode_input(&args)?)
}
