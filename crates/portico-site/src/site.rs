//! Site assembly: the pipeline from raw inputs to a validated [`Site`].

use serde::Serialize;

use portico_config::{RawSiteConfig, SiteConfig};
use portico_corpus::DocCorpus;
use portico_diag::{Diagnostics, Warning};
use portico_sidebars::{RawSidebars, Sidebars};

use crate::verify::verify_references;

/// A fully assembled, validated documentation site.
///
/// Constructed once by [`Site::assemble`] and immutable thereafter; a
/// renderer receives it by reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Site {
    pub config: SiteConfig,
    pub sidebars: Sidebars,
}

/// A successful assembly: the site plus the warnings gathered while
/// building it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Assembled {
    pub site: Site,
    pub warnings: Vec<Warning>,
}

impl Site {
    /// Validate raw inputs into a coherent site.
    ///
    /// Both structural stages (schema loading, tree building) run even
    /// when the first records errors, so one invocation reports every
    /// structural problem. Structural errors abort before the
    /// cross-reference pass; cross-reference findings are themselves
    /// collected exhaustively. The report is deduplicated with
    /// first-occurrence order preserved.
    ///
    /// # Errors
    ///
    /// Returns the collected [`Diagnostics`] when any stage recorded an
    /// error.
    pub fn assemble(
        raw_config: &RawSiteConfig,
        raw_sidebars: &RawSidebars,
        corpus: &DocCorpus,
    ) -> Result<Assembled, Diagnostics> {
        let mut diag = Diagnostics::new();

        let config = SiteConfig::from_raw(raw_config, &mut diag);
        let sidebars = Sidebars::from_raw(raw_sidebars, &mut diag);

        // Cross-reference checks only make sense over a structurally
        // valid model.
        let (Some(config), Some(sidebars)) = (config, sidebars) else {
            return Err(diag);
        };

        for issue in verify_references(&config, &sidebars, corpus) {
            diag.error(issue);
        }

        let warnings = diag.into_result()?;
        tracing::debug!(
            sidebars = sidebars.len(),
            documents = corpus.len(),
            warnings = warnings.len(),
            "assembled site"
        );
        Ok(Assembled {
            site: Site { config, sidebars },
            warnings,
        })
    }
}
