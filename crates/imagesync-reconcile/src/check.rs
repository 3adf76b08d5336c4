//! One probe run, from catalog text to verdict.
//!
//! Records are probed one at a time in catalog order. The first registry
//! failure aborts the run; no partial verdict is produced.

use imagesync_catalog::parser::parse_catalog;
use imagesync_common::config::ProbeConfig;
use imagesync_common::error::Result;
use imagesync_registry::filter::compound_filter;
use imagesync_registry::prober::RegistryProber;
use imagesync_registry::template::FilterTemplate;

use crate::tally::Tally;
use crate::verdict::Verdict;

/// Reconciles `catalog` against the registry reached through `prober`.
///
/// # Errors
///
/// Returns `ImageSyncError::RegistryUnavailable` on the first failed lookup,
/// or `ImageSyncError::CatalogUnavailable` if the catalog holds no image.
pub fn run_check<P>(config: &ProbeConfig, catalog: &str, prober: &mut P) -> Result<Verdict>
where
    P: RegistryProber + ?Sized,
{
    let template = FilterTemplate::parse(&config.check_list);
    let base_dn = config.base_dn();
    let mut tally = Tally::new();

    for record in parse_catalog(catalog, config.field_separator) {
        let resolution = template.resolve(&record);
        if !resolution.unresolved.is_empty() {
            tracing::warn!(
                %record,
                unresolved = ?resolution.unresolved,
                "check list tokens missing from catalog image"
            );
        }

        let filter = compound_filter(&config.object_class, &resolution.filter);
        let count = prober.count(&base_dn, &filter)?;
        let presence = tally.record(count, resolution.filter.as_str());
        tracing::debug!(%filter, count, ?presence, "image probed");
    }

    tracing::info!(
        ok = tally.ok(),
        missing = tally.missing(),
        "reconciliation finished"
    );
    Verdict::from_tally(&tally, &config.site, &config.catalog_url)
}
