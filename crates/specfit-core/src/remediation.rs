//! Remediation queries and retailer links.
//!
//! A failing verdict carries a short product search fragment (for example
//! `"16gb ram"`). Presentation turns it into a link with a [`Retailer`]:
//! `https://<host>/search?query=<fragment>`.

use url::Url;

use crate::domain::{ComparisonReport, DimensionVerdict};

/// Retailer linked to when none is configured.
pub const DEFAULT_RETAILER_HOST: &str = "www.newegg.com";

/// Search fragment for a CPU with at least this many cores and clock speed.
pub(crate) fn cpu_query(cores: u32, speed_ghz: f64) -> String {
    format!("{cores} core {speed_ghz:.2}ghz cpu")
}

/// Search fragment for a RAM kit of the given size.
pub(crate) fn ram_query(gb: f64) -> String {
    format!("{gb:.0}gb ram")
}

/// Search fragment for a graphics card with the given memory.
pub(crate) fn vram_query(gb: f64) -> String {
    format!("{gb:.0}gb graphics card")
}

/// Search fragment for a drive of the given size.
pub(crate) fn storage_query(gb: f64) -> String {
    format!("{gb:.0}gb ssd")
}

/// Online shop used to build remediation links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retailer {
    search_url: Url,
}

impl Retailer {
    /// Create a retailer from a bare host name such as `www.newegg.com`.
    pub fn new(host: &str) -> Result<Self, url::ParseError> {
        let host = host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(url::ParseError::EmptyHost);
        }
        if host.contains(['/', '?', '#']) {
            return Err(url::ParseError::InvalidDomainCharacter);
        }
        let search_url = Url::parse(&format!("https://{host}/search"))?;
        Ok(Self { search_url })
    }

    /// Host name links point at.
    #[must_use]
    pub fn host(&self) -> &str {
        self.search_url.host_str().unwrap_or_default()
    }

    /// Build the search link for a remediation query.
    #[must_use]
    pub fn link_for(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("query", query);
        url
    }

    /// Link for a verdict, if it failed and carries a query.
    #[must_use]
    pub fn link_for_verdict(&self, verdict: &DimensionVerdict) -> Option<Url> {
        if verdict.passed {
            return None;
        }
        verdict.remediation_query.as_deref().map(|q| self.link_for(q))
    }

    /// Every verdict of a report with its upgrade link, in display order.
    ///
    /// Only failing verdicts that carry a query get a link.
    #[must_use]
    pub fn rows<'a>(&self, report: &'a ComparisonReport) -> Vec<(&'a DimensionVerdict, Option<Url>)> {
        report
            .verdicts
            .iter()
            .map(|verdict| (verdict, self.link_for_verdict(verdict)))
            .collect()
    }
}

impl Default for Retailer {
    fn default() -> Self {
        Self {
            search_url: Url::parse(&format!("https://{DEFAULT_RETAILER_HOST}/search"))
                .expect("default retailer URL is valid"),
        }
    }
}
