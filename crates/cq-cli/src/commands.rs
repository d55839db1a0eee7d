use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use cq_model::{CatalogError, RawCategory, RawPrice, RawStock};
use cq_normalize::{normalize, normalize_all};
use cq_query::{QueryState, distinct_categories, filter_records, run_query};
use cq_store::{CatalogStore, RecordPatch};

use crate::cli::{CategoriesArgs, ListArgs, ShowArgs, UpdateArgs};
use crate::types::{CategoriesOutcome, ListOutcome, ShowOutcome, UpdateOutcome};

pub fn run_list(args: &ListArgs) -> Result<ListOutcome> {
    let store = load_store(&args.catalog)?;
    let records = normalize_all(&store.list_all());
    debug!(records = records.len(), "catalog normalized");

    let mut state = QueryState::new();
    state.set_search(args.search.clone());
    state.set_category(args.category.clone());
    state.set_stock(args.stock.into());
    state.set_glitched_only(args.glitched_only);
    state.set_sort(args.sort.into(), args.direction.into());
    state.set_page_size(args.page_size);
    // Explicit page request comes after the filter mutators, which all
    // reset the page to 1.
    state.set_page(args.page);

    let matched = filter_records(&records, &state).len();
    let page = run_query(&records, &state);
    let glitched = records.iter().filter(|r| !r.is_clean()).count();
    info!(
        matched,
        page = page.page,
        total_pages = page.total_pages,
        "query complete"
    );

    Ok(ListOutcome {
        catalog: args.catalog.clone(),
        page,
        total_records: records.len(),
        matched,
        glitched,
    })
}

pub fn run_show(args: &ShowArgs) -> Result<ShowOutcome> {
    let store = load_store(&args.catalog)?;
    let raw = store
        .get_by_id(&args.id)
        .ok_or_else(|| CatalogError::RecordNotFound(args.id.clone()))?;

    Ok(ShowOutcome {
        record: normalize(&raw),
    })
}

pub fn run_update(args: &UpdateArgs) -> Result<UpdateOutcome> {
    let patch = RecordPatch {
        name: args.name.clone(),
        price: args.price.as_deref().map(parse_price_arg),
        stock: args.stock.map(RawStock::Count),
        category: args.category.clone().map(RawCategory::One),
        updated_at: args.updated_at.clone(),
    };
    if patch.is_empty() {
        bail!("nothing to update: pass at least one field flag");
    }

    let mut store = load_store(&args.catalog)?;
    let (raw, event) = store.update_by_id(&args.id, &patch)?;
    info!(
        target: "cq::audit",
        id = %event.id,
        fields = ?event.fields,
        at = %event.at,
        "catalog record updated"
    );

    if args.write {
        store
            .save(&args.catalog)
            .with_context(|| format!("write catalog {}", args.catalog.display()))?;
    }

    Ok(UpdateOutcome {
        record: normalize(&raw),
        event,
        written: args.write,
    })
}

pub fn run_categories(args: &CategoriesArgs) -> Result<CategoriesOutcome> {
    let store = load_store(&args.catalog)?;
    let records = normalize_all(&store.list_all());

    Ok(CategoriesOutcome {
        categories: distinct_categories(&records),
    })
}

fn load_store(path: &Path) -> Result<CatalogStore> {
    CatalogStore::load(path).with_context(|| format!("load catalog {}", path.display()))
}

/// A price flag that parses as a number is stored as one; anything else is
/// stored as raw text and left for the normalizer to judge.
fn parse_price_arg(text: &str) -> RawPrice {
    match text.trim().parse::<f64>() {
        Ok(amount) => RawPrice::Amount(amount),
        Err(_) => RawPrice::Text(text.to_string()),
    }
}
