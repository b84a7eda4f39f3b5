//! Oracle providers.

pub mod lexical;
pub mod remote;

pub use lexical::LexicalOracle;
pub use remote::RemoteOracle;

use verity_core::config::OracleConfig;
use verity_core::errors::VerityResult;
use verity_core::traits::IScoringOracle;

/// Build the primary provider named in the config.
pub fn create_provider(config: &OracleConfig) -> VerityResult<Box<dyn IScoringOracle>> {
    match config.provider.as_str() {
        "lexical" => Ok(Box::new(LexicalOracle::new(config.dimensions))),
        _ => Ok(Box::new(RemoteOracle::new(config)?)),
    }
}
