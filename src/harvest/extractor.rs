//! Structured field extraction from catalog and detail pages
//!
//! All of the store's markup knowledge lives in [`SelectorSchema`], one
//! declarative table of named field locators. When the site's layout drifts,
//! only that table changes; the extraction logic is layout-agnostic.
//!
//! Both extraction modes are total over a parsed document: a node missing a
//! required field is excluded (catalog mode) or signalled as "no record"
//! (detail mode), never an error.

use crate::HarvestError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Minimal catalog-page record pending detail enrichment
///
/// Produced only for listings carrying a discount badge; badge-less listings
/// never enter the pipeline.
#[derive(Debug, Clone)]
pub struct ItemStub {
    /// Listing title
    pub title: String,
    /// Discount badge label, e.g. "-60%"
    pub discount: String,
    /// Absolute detail-page URL
    pub link: Url,
}

/// Raw pricing fields lifted from a detail page
#[derive(Debug, Clone)]
pub struct PriceRecord {
    /// Original price display string
    pub original_price: String,
    /// Discounted price display string
    pub current_price: String,
    /// Expiry descriptor, e.g. "Offer ends 3/10/2025"
    pub expiry: String,
}

/// Named field locators for the store's markup
///
/// Catalog listings are located by their grid class; detail-page fields by
/// their `data-qa` semantic attributes, which are stabler than presentation
/// classes.
pub struct SelectorSchema {
    catalog_item: Selector,
    item_title: Selector,
    discount_badge: Selector,
    detail_anchor: Selector,
    expiry_descriptor: Selector,
    original_price: Selector,
    final_price: Selector,
}

impl SelectorSchema {
    pub fn new() -> Result<Self, HarvestError> {
        Ok(Self {
            catalog_item: parse_selector(r#"li[class~="psw-l-w-1/2@mobile-s"]"#)?,
            item_title: parse_selector("span.psw-t-truncate-2")?,
            discount_badge: parse_selector("span.psw-badge__text")?,
            detail_anchor: parse_selector("a[href]")?,
            expiry_descriptor: parse_selector(
                r#"span[data-qa="mfeCtaMain#offer0#discountDescriptor"]"#,
            )?,
            original_price: parse_selector(r#"span[data-qa="mfeCtaMain#offer0#originalPrice"]"#)?,
            final_price: parse_selector(r#"span[data-qa="mfeCtaMain#offer0#finalPrice"]"#)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, HarvestError> {
    Selector::parse(css).map_err(|e| HarvestError::Selector(format!("{}: {}", css, e)))
}

/// Extracts discounted-item stubs from a catalog page
///
/// Listings without a discount badge (or without a title or resolvable
/// detail link) are silently excluded: they are not on a timed discount, not
/// an error. Relative hrefs are resolved against `site_origin`.
pub fn extract_stubs(html: &str, schema: &SelectorSchema, site_origin: &Url) -> Vec<ItemStub> {
    let document = Html::parse_document(html);
    let mut stubs = Vec::new();

    for item in document.select(&schema.catalog_item) {
        let Some(title) = select_text(&item, &schema.item_title) else {
            continue;
        };

        // No badge means no discount; drop the listing without comment.
        let Some(discount) = select_text(&item, &schema.discount_badge) else {
            continue;
        };

        let Some(link) = item
            .select(&schema.detail_anchor)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .and_then(|href| site_origin.join(href.trim()).ok())
        else {
            continue;
        };

        stubs.push(ItemStub {
            title,
            discount,
            link,
        });
    }

    stubs
}

/// Extracts the raw pricing fields from a detail page
///
/// Returns `None` when the expiry descriptor is absent — the item is not on
/// a timed discount and the caller skips it. Missing price fields become
/// empty strings; the normalizer maps those to `0.0` so a markup gap never
/// aborts an otherwise-valid record.
pub fn extract_price_record(html: &str, schema: &SelectorSchema) -> Option<PriceRecord> {
    let document = Html::parse_document(html);

    let expiry = document
        .select(&schema.expiry_descriptor)
        .next()
        .map(element_text)?;

    let original_price = document
        .select(&schema.original_price)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let current_price = document
        .select(&schema.final_price)
        .next()
        .map(element_text)
        .unwrap_or_default();

    Some(PriceRecord {
        original_price,
        current_price,
        expiry,
    })
}

/// Collects an element's text content, trimmed
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Selects the first matching descendant and returns its non-empty text
fn select_text(scope: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}
