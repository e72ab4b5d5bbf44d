//! CSS selectors for ecco.kz markup.
//!
//! Every class and tag the site is expected to expose lives here, so a
//! markup change on their side only touches this module.

use scraper::Selector;
use std::sync::LazyLock;

/// Anchors on the listing page that lead to a product detail page.
pub static DETAIL_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.detail").unwrap());

/// One name/value row inside the characteristics block.
pub static CHARACTERISTIC_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".product-characteristic .item").unwrap());

/// Characteristic name, carries a trailing colon.
pub static ITEM_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.item-name").unwrap());

/// Characteristic value, span variant. Tried first.
pub static ITEM_VALUE_SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.item-value").unwrap());

/// Characteristic value, div variant. Fallback when the span is absent.
pub static ITEM_VALUE_DIV: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.item-value").unwrap());
